//! Top-bar notifications bell and its popover.

use console_term::text::TextAlign;
use console_term::{Buffer, Rect, Style};
use console_widgets::content::{Content, Span, Tone};
use console_widgets::draw;
use console_widgets::theme::Theme;

const POPOVER_WIDTH: u16 = 44;
/// Title, detail and age.
const ENTRY_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub title: &'static str,
    pub detail: &'static str,
    pub age: &'static str,
}

pub const NOTIFICATIONS: [Notification; 3] = [
    Notification {
        title: "Webhook Failures Spike",
        detail: "12 webhook failures in the last hour",
        age: "2 min ago",
    },
    Notification {
        title: "New Tenant Onboarded",
        detail: "Acme Corp completed onboarding",
        age: "15 min ago",
    },
    Notification {
        title: "Template Pending Approval",
        detail: "3 templates awaiting review",
        age: "1 hour ago",
    },
];

/// Bell label with the unread count, e.g. `🔔 3`.
pub fn bell() -> Content {
    Content::from(Span::new("🔔")).then(Span::new(NOTIFICATIONS.len().to_string()).tone(Tone::Accent).bold())
}

/// Popover anchored to the top-right corner of `area`, clipped to it.
pub fn popover_rect(area: Rect) -> Rect {
    let height = NOTIFICATIONS.len() as u16 * ENTRY_HEIGHT + 2;
    let width = POPOVER_WIDTH.min(area.width);
    Rect::new(area.right().saturating_sub(width), area.y, width, height).intersect(area)
}

pub fn render_popover(buf: &mut Buffer, area: Rect, theme: &dyn Theme) {
    let rect = popover_rect(area);
    if rect.is_empty() {
        return;
    }
    buf.fill(rect, &Style::new().background(theme.color("surface")));
    let inner = draw::border(
        buf,
        rect,
        Some("Notifications"),
        Style::new().foreground(theme.color("border")),
    )
    .shrink(0, 1, 0, 1);

    let mut rest = inner;
    for item in &NOTIFICATIONS {
        if rest.is_empty() {
            break;
        }
        let (entry, after) = rest.split_top(ENTRY_HEIGHT);
        let (title, lines) = entry.split_top(1);
        let (detail, age) = lines.split_top(1);
        draw::content(
            buf,
            title,
            &Content::from(Span::new(item.title).bold()),
            TextAlign::Left,
            Style::new(),
            theme,
        );
        draw::text(buf, detail, item.detail, TextAlign::Left, Style::new().foreground(theme.color("text")));
        draw::text(buf, age, item.age, TextAlign::Left, Style::new().foreground(theme.color("muted")));
        rest = after;
    }
}
