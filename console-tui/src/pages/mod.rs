//! Console screens.
//!
//! Each screen owns its state, draws itself into the content area and turns
//! key presses and clicks into state changes. Anything that reaches outside
//! the screen (navigation, login, saving settings, impersonation) is returned
//! as an [`Action`] for the app to carry out. Toasts go through the injected
//! [`Notifier`].

pub mod audit_logs;
pub mod dashboard;
pub mod form;
pub mod invoices;
pub mod list;
pub mod login;
pub mod messages;
pub mod observability;
pub mod settings;
pub mod support;
pub mod templates;
pub mod tenants;
pub mod users;

use chrono::{DateTime, Utc};
use console_term::text::TextAlign;
use console_term::{Buffer, Rect, Style};
use console_widgets::content::{Content, Span, Tone};
use console_widgets::draw;
use console_widgets::stat_card::StatCard;
use console_widgets::theme::Theme;
use console_widgets::toast::Notifier;
use crossterm::event::KeyEvent;

use crate::app::Route;
use crate::config::PlatformSettings;

/// A request from a screen to the app.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Navigate(Route),
    /// MFA passed; leave the login screen.
    LoggedIn,
    SaveSettings(PlatformSettings),
    /// Start (`Some(tenant)`) or end (`None`) read-only impersonation.
    Impersonate(Option<String>),
}

pub trait Screen {
    fn title(&self) -> &str;

    fn subtitle(&self) -> &str;

    fn render(&self, buf: &mut Buffer, area: Rect, theme: &dyn Theme);

    fn handle_key(&mut self, key: &KeyEvent, notifier: &dyn Notifier) -> Option<Action>;

    fn handle_click(
        &mut self,
        _area: Rect,
        _x: u16,
        _y: u16,
        _notifier: &dyn Notifier,
    ) -> Option<Action> {
        None
    }

    /// True while a text field has focus, so single-key shortcuts type instead.
    fn captures_input(&self) -> bool {
        false
    }
}

/// Draw a row of stat cards side by side. Returns the rows used.
pub(crate) fn render_cards(buf: &mut Buffer, area: Rect, cards: &[StatCard], theme: &dyn Theme) -> u16 {
    if cards.is_empty() || area.is_empty() {
        return 0;
    }
    let height = cards.iter().map(StatCard::height).max().unwrap_or(0);
    let (row, _) = area.split_top(height);
    for (card, rect) in cards.iter().zip(row.columns(cards.len() as u16, 1)) {
        card.render(buf, rect, theme);
    }
    row.height
}

/// Draw tab labels on one line, highlighting `active`.
pub(crate) fn render_tabs(
    buf: &mut Buffer,
    area: Rect,
    labels: &[String],
    active: usize,
    theme: &dyn Theme,
) {
    let mut line = Content::new();
    for (i, label) in labels.iter().enumerate() {
        let span = if i == active {
            Span::new(format!("[ {} ]", label)).tone(Tone::Primary).bold()
        } else {
            Span::new(format!("  {}  ", label)).muted()
        };
        line = line.span(span);
    }
    draw::content(buf, area, &line, TextAlign::Left, Style::new(), theme);
}

/// Draw `label: value` pairs in a bordered panel.
pub(crate) fn render_details(
    buf: &mut Buffer,
    area: Rect,
    title: &str,
    fields: &[(&str, String)],
    theme: &dyn Theme,
) {
    buf.fill(area, &Style::new().background(theme.color("surface")));
    let inner = draw::border(
        buf,
        area,
        Some(title),
        Style::new().foreground(theme.color("border")),
    );
    let label_width = fields.iter().map(|(l, _)| l.len()).max().unwrap_or(0) as u16 + 2;
    for (i, (label, value)) in fields.iter().enumerate() {
        if i as u16 >= inner.height {
            break;
        }
        let row = Rect::new(inner.x + 1, inner.y + i as u16, inner.width.saturating_sub(2), 1);
        let (label_rect, value_rect) = row.split_left(label_width);
        draw::text(
            buf,
            label_rect,
            &format!("{}:", label),
            TextAlign::Left,
            Style::new().foreground(theme.color("muted")),
        );
        draw::text(buf, value_rect, value, TextAlign::Left, Style::new());
    }
}

/// A rectangle of `width`×`height` centred in `area`.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// `Jan 15, 2024`
pub(crate) fn date(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

/// `Jan 15, 2024 10:30 AM`
pub(crate) fn date_time(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y %-I:%M %p").to_string()
}

/// `Dec 8, 2:30 PM`
pub(crate) fn short_date_time(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %-I:%M %p").to_string()
}

/// `2:30 PM`
pub(crate) fn clock(at: &DateTime<Utc>) -> String {
    at.format("%-I:%M %p").to_string()
}
