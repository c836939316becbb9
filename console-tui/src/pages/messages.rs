use console_lib::model::{MessageStatus, QueuedMessage};
use console_lib::query::{Dataset, Filter};
use console_lib::stats::count_messages;
use console_term::text::TextAlign;
use console_term::{Buffer, Rect, Style};
use console_widgets::badge::StatusBadge;
use console_widgets::content::{Content, Span, Tone};
use console_widgets::draw;
use console_widgets::table::{Alignment, Column};
use console_widgets::theme::Theme;
use console_widgets::toast::{Notifier, Toast};
use crossterm::event::{KeyCode, KeyEvent};

use super::list::ListPage;
use super::{Action, Screen, render_tabs, short_date_time};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageTab {
    All,
    Queued,
    Failed,
}

impl MessageTab {
    pub const ALL: [MessageTab; 3] = [MessageTab::All, MessageTab::Queued, MessageTab::Failed];

    fn status(self) -> Option<MessageStatus> {
        match self {
            MessageTab::All => None,
            MessageTab::Queued => Some(MessageStatus::Queued),
            MessageTab::Failed => Some(MessageStatus::Failed),
        }
    }

    fn scope(self) -> Filter {
        match self.status() {
            Some(status) => Filter::eq("status", status.as_str()),
            None => Filter::All,
        }
    }

    fn step(self, forward: bool) -> Self {
        let len = Self::ALL.len();
        let index = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        let next = if forward { (index + 1) % len } else { (index + len - 1) % len };
        Self::ALL[next]
    }
}

fn columns() -> Vec<Column<QueuedMessage>> {
    vec![
        Column::new("recipient", "Recipient", |m: &QueuedMessage| {
            Content::from(Span::new(m.recipient.clone())).then(Span::new(m.tenant_name.clone()).muted())
        })
        .flex(3),
        Column::text("template_name", "Template", |m: &QueuedMessage| m.template_name.clone()).flex(2),
        Column::new("status", "Status", |m: &QueuedMessage| {
            StatusBadge::new(m.status.as_str()).content()
        })
        .sortable()
        .fixed(12),
        Column::new("retry_count", "Retries", |m: &QueuedMessage| {
            let span = Span::new(m.retry_count.to_string());
            if m.retry_count > 0 {
                Content::from(span.tone(Tone::Warning).bold())
            } else {
                Content::from(span.muted())
            }
        })
        .fixed(8)
        .align(Alignment::Center),
        Column::new("error_message", "Error", |m: &QueuedMessage| match &m.error_message {
            Some(error) => Content::from(Span::new(error.clone()).tone(Tone::Destructive)),
            None => Content::from(Span::new("—").muted()),
        })
        .flex(3),
        Column::new("created_at", "Created", |m: &QueuedMessage| {
            Content::from(Span::new(short_date_time(&m.created_at)).muted())
        })
        .sortable()
        .fixed(18),
    ]
}

pub struct MessagesPage {
    list: ListPage<QueuedMessage>,
    tab: MessageTab,
    queued: usize,
    failed: usize,
}

impl MessagesPage {
    pub fn new(messages: Vec<QueuedMessage>, page_size: usize) -> Self {
        let queued = count_messages(&messages, MessageStatus::Queued);
        let failed = count_messages(&messages, MessageStatus::Failed);
        let list = ListPage::new(Dataset::new(messages), columns(), page_size)
            .search_placeholder("Search by recipient or template...")
            .empty_message("No messages found.")
            .action("r", "Retry");
        Self {
            list,
            tab: MessageTab::All,
            queued,
            failed,
        }
    }

    pub fn list(&self) -> &ListPage<QueuedMessage> {
        &self.list
    }

    pub fn tab(&self) -> MessageTab {
        self.tab
    }

    /// Switch tabs. Rows are selectable only on the queued and failed tabs.
    pub fn set_tab(&mut self, tab: MessageTab) {
        self.tab = tab;
        self.list.set_selectable(tab != MessageTab::All);
        self.list.set_scope(tab.scope());
    }

    fn tab_labels(&self) -> Vec<String> {
        let counted = |label: &str, n: usize| {
            if n > 0 { format!("{} ({})", label, n) } else { label.to_string() }
        };
        vec![
            "All Messages".to_string(),
            counted("Queued", self.queued),
            counted("Failed", self.failed),
        ]
    }

    fn show_alert(&self) -> bool {
        self.tab == MessageTab::Failed && self.failed > 0
    }

    fn header_height(&self) -> u16 {
        if self.show_alert() { 5 } else { 2 }
    }

    fn retry_current(&self, notifier: &dyn Notifier) {
        let Some(message) = self.list.current() else { return };
        if matches!(message.status, MessageStatus::Failed | MessageStatus::Queued) {
            log::info!("Retrying message {}", message.id);
            notifier.notify(Toast::info("Message queued for retry"));
        } else {
            log::warn!("Message {} is {}; nothing to retry", message.id, message.status);
        }
    }

    fn retry_selected(&mut self, notifier: &dyn Notifier) {
        let count = self.list.selected().len();
        if count == 0 {
            return;
        }
        log::info!("Retrying {} selected messages", count);
        notifier.notify(Toast::info(format!("Retrying {} messages...", count)));
        self.list.clear_selection();
    }

    fn render_alert(&self, buf: &mut Buffer, area: Rect, theme: &dyn Theme) {
        let border = Style::new().foreground(theme.tone(Tone::Destructive));
        let inner = draw::border(buf, area, None, border).shrink(0, 1, 0, 1);
        let (title, rest) = inner.split_top(1);
        let line = Content::from(Span::new("!").tone(Tone::Destructive).bold())
            .then(Span::new("Failed messages require attention").bold());
        draw::content(buf, title, &line, TextAlign::Left, Style::new(), theme);
        draw::content(
            buf,
            title,
            &Content::from(Span::new("[A] Retry All").tone(Tone::Primary)),
            TextAlign::Right,
            Style::new(),
            theme,
        );
        let (detail, _) = rest.split_top(1);
        draw::text(
            buf,
            detail,
            "Some messages have exceeded retry limits. Review and take action.",
            TextAlign::Left,
            Style::new().foreground(theme.color("muted")),
        );
    }
}

impl Screen for MessagesPage {
    fn title(&self) -> &str {
        "Messages"
    }

    fn subtitle(&self) -> &str {
        "Monitor and manage WhatsApp message queue"
    }

    fn render(&self, buf: &mut Buffer, area: Rect, theme: &dyn Theme) {
        let (tabs, rest) = area.split_top(2);
        let active = MessageTab::ALL.iter().position(|t| *t == self.tab).unwrap_or(0);
        render_tabs(buf, tabs, &self.tab_labels(), active, theme);
        let rest = if self.show_alert() {
            let (alert, rest) = rest.split_top(3);
            self.render_alert(buf, alert, theme);
            rest
        } else {
            rest
        };
        self.list.render(buf, rest, theme);
    }

    fn handle_key(&mut self, key: &KeyEvent, notifier: &dyn Notifier) -> Option<Action> {
        if self.list.handle_key(key) {
            return None;
        }
        match key.code {
            KeyCode::Char('t') => self.set_tab(self.tab.step(true)),
            KeyCode::Char('T') => self.set_tab(self.tab.step(false)),
            KeyCode::Char('r') => self.retry_current(notifier),
            KeyCode::Char('R') => self.retry_selected(notifier),
            KeyCode::Char('A') if self.show_alert() => {
                log::info!("Retrying all {} failed messages", self.failed);
                notifier.notify(Toast::info("Retrying all failed messages..."));
            }
            _ => {}
        }
        None
    }

    fn handle_click(&mut self, area: Rect, x: u16, y: u16, _: &dyn Notifier) -> Option<Action> {
        let (_, rest) = area.split_top(self.header_height());
        self.list.handle_click(rest, x, y);
        None
    }

    fn captures_input(&self) -> bool {
        self.list.state().search_focused
    }
}
