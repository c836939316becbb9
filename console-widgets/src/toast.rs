use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use console_term::text::TextAlign;
use console_term::{Buffer, Rect, Style};

use crate::content::{Content, Span, Tone};
use crate::draw;
use crate::theme::Theme;

/// Default duration for toast notifications.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(4);

/// How many toasts are visible at once. Older ones are dropped first.
pub const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    pub fn tone(self) -> Tone {
        match self {
            ToastLevel::Info => Tone::Primary,
            ToastLevel::Success => Tone::Success,
            ToastLevel::Warning => Tone::Warning,
            ToastLevel::Error => Tone::Destructive,
        }
    }
}

/// A toast notification: a title, an optional description line and a lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub level: ToastLevel,
    pub title: String,
    pub description: Option<String>,
    pub duration: Duration,
}

impl Toast {
    fn with_level(level: ToastLevel, title: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            description: None,
            duration: DEFAULT_TOAST_DURATION,
        }
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::with_level(ToastLevel::Info, title)
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::with_level(ToastLevel::Success, title)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::with_level(ToastLevel::Warning, title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::with_level(ToastLevel::Error, title)
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Rows needed to draw this toast, including its border.
    pub fn height(&self) -> u16 {
        if self.description.is_some() { 4 } else { 3 }
    }
}

impl From<String> for Toast {
    fn from(message: String) -> Self {
        Toast::info(message)
    }
}

impl From<&str> for Toast {
    fn from(message: &str) -> Self {
        Toast::info(message)
    }
}

/// Something that can show a toast.
///
/// Pages get a notifier injected rather than reaching for a global, so tests
/// can capture what would have been shown.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

#[derive(Debug)]
struct Entry {
    toast: Toast,
    shown_at: Instant,
}

/// Bounded queue of visible toasts.
///
/// Clones share the same queue.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    inner: Arc<Mutex<VecDeque<Entry>>>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, toast: Toast) {
        self.push_at(toast, Instant::now());
    }

    fn push_at(&self, toast: Toast, now: Instant) {
        log::debug!("Toast: {:?} {}", toast.level, toast.title);
        let mut queue = self.lock();
        queue.push_back(Entry {
            toast,
            shown_at: now,
        });
        while queue.len() > MAX_VISIBLE_TOASTS {
            queue.pop_front();
        }
    }

    /// Drop expired toasts. Returns true if anything was removed.
    pub fn prune(&self) -> bool {
        self.prune_at(Instant::now())
    }

    pub fn prune_at(&self, now: Instant) -> bool {
        let mut queue = self.lock();
        let before = queue.len();
        queue.retain(|e| now.saturating_duration_since(e.shown_at) < e.toast.duration);
        queue.len() != before
    }

    /// Visible toasts, oldest first.
    pub fn visible(&self) -> Vec<Toast> {
        self.lock().iter().map(|e| e.toast.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<Entry>> {
        // A panic while holding the lock leaves the queue usable.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Draw toasts stacked upward from the bottom-right corner of `area`.
    pub fn render(&self, buf: &mut Buffer, area: Rect, theme: &dyn Theme) {
        let width = area.width.min(44);
        if width < 6 {
            return;
        }
        let x = area.right() - width;
        let mut bottom = area.bottom();

        for toast in self.visible().iter().rev() {
            let height = toast.height();
            if bottom < area.y + height {
                break;
            }
            let rect = Rect::new(x, bottom - height, width, height);
            render_toast(buf, rect, toast, theme);
            bottom -= height;
        }
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, toast: Toast) {
        self.push(toast);
    }
}

fn render_toast(buf: &mut Buffer, area: Rect, toast: &Toast, theme: &dyn Theme) {
    let surface = Style::new().background(theme.color("surface"));
    buf.fill(area, &surface);
    let border = surface.foreground(theme.tone(toast.level.tone()));
    let inner = draw::border(buf, area, None, border).shrink(0, 1, 0, 1);

    let (title_row, rest) = inner.split_top(1);
    let title = Content::from(Span::new(toast.title.clone()).tone(toast.level.tone()).bold());
    draw::content(buf, title_row, &title, TextAlign::Left, surface, theme);

    if let Some(description) = &toast.description {
        let (row, _) = rest.split_top(1);
        let line = Content::from(Span::new(description.clone()).muted());
        draw::content(buf, row, &line, TextAlign::Left, surface, theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_is_bounded() {
        let queue = ToastQueue::new();
        for i in 0..5 {
            queue.push(Toast::info(format!("t{}", i)));
        }
        let titles: Vec<_> = queue.visible().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["t2", "t3", "t4"]);
    }

    #[test]
    fn expired_toasts_are_pruned() {
        let queue = ToastQueue::new();
        let start = Instant::now();
        queue.push_at(Toast::info("short").with_duration(Duration::from_secs(1)), start);
        queue.push_at(Toast::info("long"), start);

        assert!(queue.prune_at(start + Duration::from_secs(2)));
        let titles: Vec<_> = queue.visible().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["long"]);
        assert!(queue.prune_at(start + DEFAULT_TOAST_DURATION));
        assert!(queue.is_empty());
    }
}
