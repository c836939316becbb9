//! Platform settings form.
//!
//! Edits a draft copy of [`PlatformSettings`]. Nothing is persisted until the
//! user saves, which hands the draft to the app as [`Action::SaveSettings`].

use console_term::text::TextAlign;
use console_term::{Buffer, Rect, Style};
use console_widgets::content::{Content, Span, Tone};
use console_widgets::draw;
use console_widgets::theme::Theme;
use console_widgets::toast::{Notifier, Toast};
use console_widgets::validation::Validator;
use crossterm::event::{KeyCode, KeyEvent};

use super::form::TextField;
use super::{Action, Screen, render_tabs};
use crate::config::{
    AUDIT_RETENTION_DAYS, BACKUP_RETENTION_DAYS, BACKUP_TIMES, CURRENCIES, MESSAGE_RETENTION_DAYS,
    PlatformSettings, SESSION_TIMEOUT_MINUTES, TIMEZONES, WEBHOOK_RETENTION_DAYS, cycle, days_label,
    minutes_label, option_label,
};

const FIELD_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsTab {
    General,
    Security,
    DataRetention,
    Notifications,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 4] = [
        SettingsTab::General,
        SettingsTab::Security,
        SettingsTab::DataRetention,
        SettingsTab::Notifications,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SettingsTab::General => "General",
            SettingsTab::Security => "Security",
            SettingsTab::DataRetention => "Data Retention",
            SettingsTab::Notifications => "Notifications",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    PlatformName,
    SupportEmail,
    Timezone,
    Currency,
    AutoBackup,
    BackupTime,
    BackupRetention,
    EnforceMfa,
    SessionTimeout,
    IpAllowlist,
    AuditRetention,
    MessageRetention,
    WebhookRetention,
    WebhookAlerts,
    QueueAlerts,
    NewTenantAlerts,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::PlatformName => "Platform Name",
            Field::SupportEmail => "Support Email",
            Field::Timezone => "Default Timezone",
            Field::Currency => "Default Currency",
            Field::AutoBackup => "Automatic Backups",
            Field::BackupTime => "Backup Time",
            Field::BackupRetention => "Retention Period",
            Field::EnforceMfa => "Enforce MFA",
            Field::SessionTimeout => "Session Timeout",
            Field::IpAllowlist => "IP Allowlist",
            Field::AuditRetention => "Audit Logs",
            Field::MessageRetention => "Message History",
            Field::WebhookRetention => "Webhook Logs",
            Field::WebhookAlerts => "Webhook Failure Alerts",
            Field::QueueAlerts => "Queue Length Alerts",
            Field::NewTenantAlerts => "New Tenant Notifications",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Field::AutoBackup => "Enable daily automatic database backups",
            Field::EnforceMfa => "Require multi-factor authentication for all admin users",
            Field::SessionTimeout => "Automatically log out inactive users",
            Field::IpAllowlist => "Restrict admin access to specific IP addresses",
            Field::AuditRetention => "Retention period for audit trail data",
            Field::MessageRetention => "Retention period for WhatsApp message logs",
            Field::WebhookRetention => "Retention period for webhook delivery logs",
            Field::WebhookAlerts => "Notify when webhook failures exceed threshold",
            Field::QueueAlerts => "Notify when message queue exceeds threshold",
            Field::NewTenantAlerts => "Notify when new tenants complete onboarding",
            _ => "",
        }
    }

    fn is_text(self) -> bool {
        matches!(self, Field::PlatformName | Field::SupportEmail)
    }
}

/// Fields shown on `tab`. Backup time and retention only appear while
/// automatic backups are on.
pub fn fields(tab: SettingsTab, settings: &PlatformSettings) -> Vec<Field> {
    match tab {
        SettingsTab::General => {
            let mut fields = vec![
                Field::PlatformName,
                Field::SupportEmail,
                Field::Timezone,
                Field::Currency,
                Field::AutoBackup,
            ];
            if settings.auto_backup {
                fields.extend([Field::BackupTime, Field::BackupRetention]);
            }
            fields
        }
        SettingsTab::Security => vec![Field::EnforceMfa, Field::SessionTimeout, Field::IpAllowlist],
        SettingsTab::DataRetention => vec![
            Field::AuditRetention,
            Field::MessageRetention,
            Field::WebhookRetention,
        ],
        SettingsTab::Notifications => vec![
            Field::WebhookAlerts,
            Field::QueueAlerts,
            Field::NewTenantAlerts,
        ],
    }
}

fn switch(on: bool) -> Content {
    if on {
        Content::from(Span::new("[●  On]").tone(Tone::Success).bold())
    } else {
        Content::from(Span::new("[Off  ○]").muted())
    }
}

pub struct SettingsPage {
    saved: PlatformSettings,
    pub draft: PlatformSettings,
    tab: SettingsTab,
    cursor: usize,
    editing: Option<TextField>,
}

impl SettingsPage {
    pub fn new(settings: PlatformSettings) -> Self {
        Self {
            draft: settings.clone(),
            saved: settings,
            tab: SettingsTab::General,
            cursor: 0,
            editing: None,
        }
    }

    pub fn tab(&self) -> SettingsTab {
        self.tab
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.saved
    }

    pub fn current_field(&self) -> Option<Field> {
        fields(self.tab, &self.draft).get(self.cursor).copied()
    }

    fn set_tab(&mut self, forward: bool) {
        if let Some(tab) = cycle(&SettingsTab::ALL, &self.tab, forward) {
            self.tab = tab;
            self.cursor = 0;
        }
    }

    fn move_cursor(&mut self, down: bool) {
        let count = fields(self.tab, &self.draft).len();
        if count == 0 {
            return;
        }
        self.cursor = if down {
            (self.cursor + 1).min(count - 1)
        } else {
            self.cursor.saturating_sub(1)
        };
    }

    /// Flip a switch or step a select. Text fields open for editing.
    fn change(&mut self, field: Field, forward: bool) {
        let d = &mut self.draft;
        let step_code = |options: &[(&str, &str)], current: &str| {
            let codes: Vec<&str> = options.iter().map(|(code, _)| *code).collect();
            cycle(&codes, &current, forward).map(str::to_string)
        };
        match field {
            Field::PlatformName | Field::SupportEmail => {
                let (label, value) = if field == Field::PlatformName {
                    ("Platform Name", d.platform_name.clone())
                } else {
                    ("Support Email", d.support_email.clone())
                };
                let mut input = TextField::new(label, "").max_len(64);
                input.value = value;
                self.editing = Some(input);
            }
            Field::Timezone => {
                if let Some(tz) = step_code(TIMEZONES, &d.timezone) {
                    d.timezone = tz;
                }
            }
            Field::Currency => {
                if let Some(currency) = step_code(CURRENCIES, &d.currency) {
                    d.currency = currency;
                }
            }
            Field::BackupTime => {
                if let Some(time) = step_code(BACKUP_TIMES, &d.backup_time) {
                    d.backup_time = time;
                }
            }
            Field::AutoBackup => {
                d.auto_backup = !d.auto_backup;
                let count = fields(self.tab, d).len();
                self.cursor = self.cursor.min(count.saturating_sub(1));
            }
            Field::EnforceMfa => d.mfa_required = !d.mfa_required,
            Field::IpAllowlist => d.ip_allowlist = !d.ip_allowlist,
            Field::WebhookAlerts => d.webhook_alerts = !d.webhook_alerts,
            Field::QueueAlerts => d.queue_alerts = !d.queue_alerts,
            Field::NewTenantAlerts => d.new_tenant_alerts = !d.new_tenant_alerts,
            Field::BackupRetention => {
                d.backup_retention_days =
                    cycle(BACKUP_RETENTION_DAYS, &d.backup_retention_days, forward).unwrap_or(d.backup_retention_days)
            }
            Field::SessionTimeout => {
                d.session_timeout_minutes = cycle(SESSION_TIMEOUT_MINUTES, &d.session_timeout_minutes, forward)
                    .unwrap_or(d.session_timeout_minutes)
            }
            Field::AuditRetention => {
                d.audit_retention_days =
                    cycle(AUDIT_RETENTION_DAYS, &d.audit_retention_days, forward).unwrap_or(d.audit_retention_days)
            }
            Field::MessageRetention => {
                d.message_retention_days = cycle(MESSAGE_RETENTION_DAYS, &d.message_retention_days, forward)
                    .unwrap_or(d.message_retention_days)
            }
            Field::WebhookRetention => {
                d.webhook_retention_days = cycle(WEBHOOK_RETENTION_DAYS, &d.webhook_retention_days, forward)
                    .unwrap_or(d.webhook_retention_days)
            }
        }
    }

    fn handle_edit_key(&mut self, key: &KeyEvent) {
        let Some(input) = self.editing.as_mut() else { return };
        match key.code {
            KeyCode::Esc => self.editing = None,
            KeyCode::Enter => {
                let value = input.value.trim().to_string();
                match self.current_field() {
                    Some(Field::PlatformName) => self.draft.platform_name = value,
                    Some(Field::SupportEmail) => self.draft.support_email = value,
                    _ => {}
                }
                self.editing = None;
            }
            _ => {
                input.handle_key(key);
            }
        }
    }

    fn save(&mut self, notifier: &dyn Notifier) -> Option<Action> {
        let result = Validator::new()
            .field("platform_name", &self.draft.platform_name)
            .required("Platform name is required")
            .field("support_email", &self.draft.support_email)
            .required("Support email is required")
            .email("Enter a valid support email")
            .validate();
        if let Some(error) = result.first_error() {
            log::warn!("Settings not saved: {}", error.message);
            notifier.notify(Toast::error("Settings not saved").description(error.message.clone()));
            return None;
        }
        self.saved = self.draft.clone();
        notifier.notify(Toast::success("Settings saved").description("Your platform settings have been updated."));
        Some(Action::SaveSettings(self.draft.clone()))
    }

    fn value(&self, field: Field) -> Content {
        let d = &self.draft;
        let text = match field {
            Field::PlatformName => d.platform_name.clone(),
            Field::SupportEmail => d.support_email.clone(),
            Field::Timezone => option_label(TIMEZONES, &d.timezone).to_string(),
            Field::Currency => option_label(CURRENCIES, &d.currency).to_string(),
            Field::BackupTime => option_label(BACKUP_TIMES, &d.backup_time).to_string(),
            Field::BackupRetention => days_label(d.backup_retention_days),
            Field::SessionTimeout => minutes_label(d.session_timeout_minutes),
            Field::AuditRetention => days_label(d.audit_retention_days),
            Field::MessageRetention => days_label(d.message_retention_days),
            Field::WebhookRetention => days_label(d.webhook_retention_days),
            Field::AutoBackup => return switch(d.auto_backup),
            Field::EnforceMfa => return switch(d.mfa_required),
            Field::IpAllowlist => return switch(d.ip_allowlist),
            Field::WebhookAlerts => return switch(d.webhook_alerts),
            Field::QueueAlerts => return switch(d.queue_alerts),
            Field::NewTenantAlerts => return switch(d.new_tenant_alerts),
        };
        if field.is_text() {
            Content::text(text)
        } else {
            Content::text(format!("‹ {} ›", text))
        }
    }

    fn render_field(&self, buf: &mut Buffer, area: Rect, field: Field, focused: bool, theme: &dyn Theme) {
        let (top, rest) = area.split_top(1);
        let (bottom, _) = rest.split_top(1);
        let label = if focused {
            Content::from(Span::new(format!("› {}", field.label())).tone(Tone::Primary).bold())
        } else {
            Content::from(Span::new(format!("  {}", field.label())).bold())
        };
        draw::content(buf, top, &label, TextAlign::Left, Style::new(), theme);

        if let (Some(input), true) = (&self.editing, focused) {
            input.render(buf, area.shrink(0, 0, 0, 2), true, theme);
            return;
        }
        draw::content(buf, top, &self.value(field), TextAlign::Right, Style::new(), theme);
        if !field.description().is_empty() {
            draw::text(
                buf,
                bottom.shrink(0, 0, 0, 2),
                field.description(),
                TextAlign::Left,
                Style::new().foreground(theme.color("muted")),
            );
        }
    }
}

impl Screen for SettingsPage {
    fn title(&self) -> &str {
        "Settings"
    }

    fn subtitle(&self) -> &str {
        "Configure platform-wide settings and policies"
    }

    fn render(&self, buf: &mut Buffer, area: Rect, theme: &dyn Theme) {
        let (tabs, rest) = area.split_top(2);
        let labels: Vec<String> = SettingsTab::ALL.iter().map(|t| t.label().to_string()).collect();
        let active = SettingsTab::ALL.iter().position(|t| *t == self.tab).unwrap_or(0);
        render_tabs(buf, tabs, &labels, active, theme);

        let (body, footer) = rest.split_bottom(1);
        let body = body.shrink(0, 2, 0, 0);
        let mut rest = body;
        for (i, field) in fields(self.tab, &self.draft).into_iter().enumerate() {
            if rest.height < 2 {
                break;
            }
            let (row, after) = rest.split_top(FIELD_HEIGHT);
            self.render_field(buf, row, field, i == self.cursor, theme);
            rest = after;
        }

        let hint = Content::from(Span::new("Tab section · ↑↓ field · Space change · s save").muted());
        draw::content(buf, footer, &hint, TextAlign::Left, Style::new(), theme);
        if self.is_dirty() {
            let dirty = Content::from(Span::new("Unsaved changes").tone(Tone::Warning).bold());
            draw::content(buf, footer, &dirty, TextAlign::Right, Style::new(), theme);
        }
    }

    fn handle_key(&mut self, key: &KeyEvent, notifier: &dyn Notifier) -> Option<Action> {
        if self.editing.is_some() {
            self.handle_edit_key(key);
            return None;
        }
        match key.code {
            KeyCode::Tab => self.set_tab(true),
            KeyCode::BackTab => self.set_tab(false),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(false),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(true),
            KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
                if let Some(field) = self.current_field() {
                    self.change(field, true);
                }
            }
            KeyCode::Left | KeyCode::Char('h') => {
                if let Some(field) = self.current_field().filter(|f| !f.is_text()) {
                    self.change(field, false);
                }
            }
            KeyCode::Char('s') => return self.save(notifier),
            KeyCode::Char('u') if self.is_dirty() => {
                self.draft = self.saved.clone();
                self.cursor = 0;
            }
            _ => {}
        }
        None
    }

    fn handle_click(&mut self, area: Rect, x: u16, y: u16, _: &dyn Notifier) -> Option<Action> {
        if self.editing.is_some() {
            return None;
        }
        let (_, rest) = area.split_top(2);
        if !rest.contains(x, y) {
            return None;
        }
        let index = ((y - rest.y) / FIELD_HEIGHT) as usize;
        if index < fields(self.tab, &self.draft).len() {
            self.cursor = index;
        }
        None
    }

    fn captures_input(&self) -> bool {
        self.editing.is_some()
    }
}
