use console_lib::model::AuditLog;
use console_lib::query::Dataset;
use console_lib::stats::audit_actions;
use console_term::{Buffer, Rect};
use console_widgets::content::{Content, Span, Tone};
use console_widgets::filter_bar::{FilterOption, SelectFilter};
use console_widgets::table::Column;
use console_widgets::theme::Theme;
use console_widgets::toast::{Notifier, Toast};
use crossterm::event::{KeyCode, KeyEvent};

use super::list::ListPage;
use super::{Action, Screen, centered, date_time, render_details};

/// `USER_CREATED` -> `USER CREATED`
pub fn action_label(action: &str) -> String {
    action.replace('_', " ")
}

fn action_tone(action: &str) -> Tone {
    match action {
        "IMPERSONATE_START" | "IMPERSONATE_END" => Tone::Accent,
        "USER_CREATED" | "TEMPLATE_APPROVED" => Tone::Success,
        "USER_DELETED" | "TEMPLATE_REJECTED" => Tone::Destructive,
        "PLAN_UPDATED" => Tone::Primary,
        _ => Tone::Muted,
    }
}

fn columns() -> Vec<Column<AuditLog>> {
    vec![
        Column::text("created_at", "Timestamp", |l: &AuditLog| {
            l.created_at.format("%b %-d, %Y %-I:%M:%S %p").to_string()
        })
        .sortable()
        .fixed(26),
        Column::new("action", "Action", |l: &AuditLog| {
            Content::from(Span::new(action_label(&l.action)).tone(action_tone(&l.action)).bold())
        })
        .sortable()
        .fixed(20),
        Column::text("user_email", "User", |l: &AuditLog| l.user_email.clone()).flex(2),
        Column::new("tenant_name", "Tenant", |l: &AuditLog| match &l.tenant_name {
            Some(tenant) => Content::text(tenant.clone()),
            None => Content::from(Span::new("—").muted()),
        })
        .flex(2),
        Column::new("resource", "Resource", |l: &AuditLog| {
            Content::text(l.resource_type.clone()).then(Span::new(l.resource_id.clone()).muted())
        })
        .flex(2),
        Column::new("ip_address", "IP Address", |l: &AuditLog| {
            Content::from(Span::new(l.ip_address.clone()).muted())
        })
        .fixed(16),
    ]
}

pub struct AuditLogsPage {
    list: ListPage<AuditLog>,
    pub details: Option<AuditLog>,
}

impl AuditLogsPage {
    pub fn new(logs: Vec<AuditLog>, page_size: usize) -> Self {
        let action = SelectFilter::new(
            "action",
            "Action",
            audit_actions(&logs)
                .iter()
                .map(|a| FilterOption::new(a.clone(), action_label(a)))
                .collect(),
        );
        let list = ListPage::new(Dataset::new(logs), columns(), page_size)
            .filter(action)
            .search_placeholder("Search logs...")
            .empty_message("No audit logs found.")
            .action("⏎", "Details")
            .action("e", "Export");
        Self { list, details: None }
    }

    pub fn list(&self) -> &ListPage<AuditLog> {
        &self.list
    }

    fn render_details(&self, log: &AuditLog, buf: &mut Buffer, area: Rect, theme: &dyn Theme) {
        let details = if log.details.is_empty() {
            "—".to_string()
        } else {
            log.details_summary()
        };
        let fields = [
            ("Timestamp", date_time(&log.created_at)),
            ("Action", action_label(&log.action)),
            ("User", log.user_email.clone()),
            ("IP Address", log.ip_address.clone()),
            ("Tenant", log.tenant_name.clone().unwrap_or_else(|| "—".into())),
            ("Resource Type", log.resource_type.clone()),
            ("Resource ID", log.resource_id.clone()),
            ("Details", details),
        ];
        render_details(buf, centered(area, 70, 10), "Audit Log Details", &fields, theme);
    }
}

impl Screen for AuditLogsPage {
    fn title(&self) -> &str {
        "Audit Logs"
    }

    fn subtitle(&self) -> &str {
        "Track all platform activities and changes"
    }

    fn render(&self, buf: &mut Buffer, area: Rect, theme: &dyn Theme) {
        self.list.render(buf, area, theme);
        if let Some(log) = &self.details {
            self.render_details(log, buf, area, theme);
        }
    }

    fn handle_key(&mut self, key: &KeyEvent, notifier: &dyn Notifier) -> Option<Action> {
        if self.details.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.details = None;
            }
            return None;
        }
        if self.list.handle_key(key) {
            return None;
        }
        match key.code {
            KeyCode::Enter => self.details = self.list.current().cloned(),
            KeyCode::Char('e') => notifier.notify(Toast::info("Exporting audit logs...")),
            _ => {}
        }
        None
    }

    fn handle_click(&mut self, area: Rect, x: u16, y: u16, _: &dyn Notifier) -> Option<Action> {
        if self.details.is_some() {
            self.details = None;
        } else {
            self.list.handle_click(area, x, y);
        }
        None
    }

    fn captures_input(&self) -> bool {
        self.list.state().search_focused
    }
}
