use console_term::text::TextAlign;
use console_term::{Buffer, Rect, Style};
use console_widgets::content::{Content, Span, Tone};
use console_widgets::draw;
use console_widgets::theme::Theme;
use console_widgets::toast::{Notifier, Toast};
use crossterm::event::{KeyCode, KeyEvent};

use super::form::TextField;
use super::{Action, Screen, centered};

pub const JOB_TYPES: [&str; 3] = ["Failed Webhooks", "Failed Messages", "Pending Invoice Sync"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportFocus {
    Tenant,
    Reason,
    JobType,
    JobTenant,
}

impl SupportFocus {
    const ORDER: [SupportFocus; 4] = [
        SupportFocus::Tenant,
        SupportFocus::Reason,
        SupportFocus::JobType,
        SupportFocus::JobTenant,
    ];

    fn step(self, forward: bool) -> Self {
        let len = Self::ORDER.len();
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[if forward { (i + 1) % len } else { (i + len - 1) % len }]
    }
}

fn step_index(current: Option<usize>, len: usize, forward: bool, allow_none: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match (current, forward) {
        (None, true) => Some(0),
        (None, false) => Some(len - 1),
        (Some(i), true) if i + 1 < len => Some(i + 1),
        (Some(i), false) if i > 0 => Some(i - 1),
        _ if allow_none => None,
        (_, true) => Some(0),
        (_, false) => Some(len - 1),
    }
}

pub struct SupportPage {
    tenants: Vec<String>,
    pub tenant: Option<usize>,
    pub reason: TextField,
    pub focus: SupportFocus,
    pub job_type: usize,
    /// `None` requeues for every tenant.
    pub job_tenant: Option<usize>,
    pub impersonating: Option<String>,
    pub confirm_clear: bool,
}

impl SupportPage {
    pub fn new(tenants: Vec<String>) -> Self {
        Self {
            tenants,
            tenant: None,
            reason: TextField::new("Reason (Required for audit)", "e.g., Support ticket #12345"),
            focus: SupportFocus::Tenant,
            job_type: 0,
            job_tenant: None,
            impersonating: None,
            confirm_clear: false,
        }
    }

    pub fn set_impersonating(&mut self, tenant: Option<String>) {
        self.impersonating = tenant;
    }

    fn selected_tenant(&self) -> Option<&str> {
        self.tenant.and_then(|i| self.tenants.get(i)).map(String::as_str)
    }

    fn start_impersonation(&mut self, notifier: &dyn Notifier) -> Option<Action> {
        let reason = self.reason.value.trim();
        let Some(tenant) = self.selected_tenant().filter(|_| !reason.is_empty()) else {
            log::warn!("Impersonation rejected: tenant or reason missing");
            notifier.notify(
                Toast::error("Missing information").description("Please select a tenant and provide a reason."),
            );
            return None;
        };
        let tenant = tenant.to_string();
        log::info!("Impersonation of {} started: {}", tenant, reason);
        notifier.notify(
            Toast::success("Impersonation started").description(format!("Now viewing as {} (read-only mode)", tenant)),
        );
        self.impersonating = Some(tenant.clone());
        self.reason.clear();
        self.focus = SupportFocus::Tenant;
        Some(Action::Impersonate(Some(tenant)))
    }

    fn end_impersonation(&mut self, notifier: &dyn Notifier) -> Option<Action> {
        let tenant = self.impersonating.take()?;
        log::info!("Impersonation of {} ended", tenant);
        notifier.notify(Toast::info("Impersonation ended").description("You have returned to admin view."));
        Some(Action::Impersonate(None))
    }

    fn change_select(&mut self, forward: bool) {
        match self.focus {
            SupportFocus::Tenant => self.tenant = step_index(self.tenant, self.tenants.len(), forward, false),
            SupportFocus::JobType => {
                self.job_type = step_index(Some(self.job_type), JOB_TYPES.len(), forward, false).unwrap_or(0)
            }
            SupportFocus::JobTenant => {
                self.job_tenant = step_index(self.job_tenant, self.tenants.len(), forward, true)
            }
            SupportFocus::Reason => {}
        }
    }

    fn requeue(&self, notifier: &dyn Notifier) {
        let scope = self
            .job_tenant
            .and_then(|i| self.tenants.get(i))
            .map_or("all tenants", String::as_str);
        log::info!("Requeueing {} for {}", JOB_TYPES[self.job_type], scope);
        notifier.notify(Toast::success("Jobs queued for retry"));
    }

    fn render_select(
        &self,
        buf: &mut Buffer,
        area: Rect,
        label: &str,
        value: Option<&str>,
        focused: bool,
        theme: &dyn Theme,
    ) {
        let (label_row, rest) = area.split_top(1);
        let (value_row, _) = rest.split_top(1);
        let label_style = if focused {
            Style::new().foreground(theme.color("primary")).bold()
        } else {
            Style::new().foreground(theme.color("muted"))
        };
        draw::text(buf, label_row, label, TextAlign::Left, label_style);
        buf.fill(value_row, &Style::new().background(theme.color("surface")));
        let value = match value {
            Some(v) => Content::text(format!("‹ {} ›", v)),
            None => Content::from(Span::new("‹ Choose a tenant ›").muted()),
        };
        draw::content(buf, value_row.shrink(0, 1, 0, 1), &value, TextAlign::Left, Style::new(), theme);
    }

    fn panel(buf: &mut Buffer, area: Rect, title: &str, description: &str, theme: &dyn Theme) -> Rect {
        let inner = draw::border(buf, area, Some(title), Style::new().foreground(theme.color("border")))
            .shrink(0, 1, 0, 1);
        let (desc, rest) = inner.split_top(2);
        draw::text(buf, desc, description, TextAlign::Left, Style::new().foreground(theme.color("muted")));
        rest
    }

    fn hint(buf: &mut Buffer, area: Rect, text: &str, theme: &dyn Theme) {
        draw::content(
            buf,
            area,
            &Content::from(Span::new(text).tone(Tone::Primary)),
            TextAlign::Left,
            Style::new(),
            theme,
        );
    }

    fn render_impersonation(&self, buf: &mut Buffer, area: Rect, theme: &dyn Theme) {
        let body = Self::panel(
            buf,
            area,
            "Tenant Impersonation",
            "View a tenant's dashboard as their admin (read-only)",
            theme,
        );
        let (tenant, rest) = body.split_top(TextField::HEIGHT);
        self.render_select(
            buf,
            tenant,
            "Select Tenant",
            self.selected_tenant(),
            self.focus == SupportFocus::Tenant,
            theme,
        );
        let (_, rest) = rest.split_top(1);
        let (reason, rest) = rest.split_top(TextField::HEIGHT);
        self.reason.render(buf, reason, self.focus == SupportFocus::Reason, theme);
        let (_, rest) = rest.split_top(1);
        Self::hint(buf, rest, "[Enter] Start Impersonation", theme);
    }

    fn render_requeue(&self, buf: &mut Buffer, area: Rect, theme: &dyn Theme) {
        let body = Self::panel(buf, area, "Requeue Jobs", "Retry failed jobs or requeue stuck messages", theme);
        let (job, rest) = body.split_top(TextField::HEIGHT);
        self.render_select(
            buf,
            job,
            "Job Type",
            JOB_TYPES.get(self.job_type).copied(),
            self.focus == SupportFocus::JobType,
            theme,
        );
        let (_, rest) = rest.split_top(1);
        let (tenant, rest) = rest.split_top(TextField::HEIGHT);
        let job_tenant = self.job_tenant.and_then(|i| self.tenants.get(i)).map(String::as_str);
        self.render_select(
            buf,
            tenant,
            "Tenant (Optional)",
            Some(job_tenant.unwrap_or("All Tenants")),
            self.focus == SupportFocus::JobTenant,
            theme,
        );
        let (_, rest) = rest.split_top(1);
        Self::hint(buf, rest, "[p] Preview  [q] Requeue", theme);
    }

    fn render_jobs(&self, buf: &mut Buffer, area: Rect, theme: &dyn Theme) {
        let body = Self::panel(buf, area, "Run Manual Jobs", "Trigger specific background jobs manually", theme);
        let rows = [
            Content::from(Span::new("[y]").tone(Tone::Primary)).then(Span::new("Sync Razorpay Payments")),
            Content::from(Span::new("[g]").tone(Tone::Primary)).then(Span::new("Generate Monthly Report")),
            Content::from(Span::new("[c]").tone(Tone::Destructive))
                .then(Span::new("Clear Message Queue").tone(Tone::Destructive)),
        ];
        let mut rest = body;
        for row in &rows {
            let (line, after) = rest.split_top(1);
            draw::content(buf, line, row, TextAlign::Left, Style::new(), theme);
            rest = after;
        }
    }

    fn render_confirm(&self, buf: &mut Buffer, area: Rect, theme: &dyn Theme) {
        let rect = centered(area, 56, 7);
        buf.fill(rect, &Style::new().background(theme.color("surface")));
        let inner = draw::border(
            buf,
            rect,
            Some("Clear Message Queue"),
            Style::new().foreground(theme.tone(Tone::Destructive)),
        )
        .shrink(0, 1, 0, 1);
        let (first, rest) = inner.split_top(1);
        let (second, rest) = rest.split_top(1);
        let (_, rest) = rest.split_top(1);
        let muted = Style::new().foreground(theme.color("muted"));
        draw::text(buf, first, "This action cannot be undone. All queued messages", TextAlign::Left, muted);
        draw::text(buf, second, "will be permanently deleted. Proceed?", TextAlign::Left, muted);
        let buttons = Content::from(Span::new("[Esc] Cancel").muted())
            .then(Span::new("[Enter] Clear Queue").tone(Tone::Destructive).bold());
        draw::content(buf, rest, &buttons, TextAlign::Right, Style::new(), theme);
    }
}

impl Screen for SupportPage {
    fn title(&self) -> &str {
        "Support Tools"
    }

    fn subtitle(&self) -> &str {
        "Administrative tools for support and operations"
    }

    fn render(&self, buf: &mut Buffer, area: Rect, theme: &dyn Theme) {
        let area = if let Some(tenant) = &self.impersonating {
            let (banner, rest) = area.split_top(2);
            let line = Content::from(Span::new(format!("Impersonating: {}", tenant)).tone(Tone::Warning).bold())
                .then(Span::new("Read-only mode active").muted());
            draw::content(buf, banner, &line, TextAlign::Left, Style::new(), theme);
            draw::content(
                buf,
                banner,
                &Content::from(Span::new("[x] End Impersonation").tone(Tone::Primary)),
                TextAlign::Right,
                Style::new(),
                theme,
            );
            rest
        } else {
            area
        };

        let (top, rest) = area.split_top(13);
        let mut halves = top.columns(2, 2).into_iter();
        if let Some(left) = halves.next() {
            self.render_impersonation(buf, left, theme);
        }
        if let Some(right) = halves.next() {
            self.render_requeue(buf, right, theme);
        }
        let (_, rest) = rest.split_top(1);
        let (jobs, _) = rest.split_top(7);
        self.render_jobs(buf, jobs, theme);

        if self.confirm_clear {
            self.render_confirm(buf, area, theme);
        }
    }

    fn handle_key(&mut self, key: &KeyEvent, notifier: &dyn Notifier) -> Option<Action> {
        if self.confirm_clear {
            match key.code {
                KeyCode::Enter | KeyCode::Char('y') => {
                    log::warn!("Message queue cleared");
                    notifier.notify(Toast::error("Message queue cleared"));
                    self.confirm_clear = false;
                }
                KeyCode::Esc | KeyCode::Char('n') => self.confirm_clear = false,
                _ => {}
            }
            return None;
        }

        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.step(true);
                return None;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.step(false);
                return None;
            }
            KeyCode::Enter if matches!(self.focus, SupportFocus::Tenant | SupportFocus::Reason) => {
                return self.start_impersonation(notifier);
            }
            KeyCode::Esc if self.focus == SupportFocus::Reason => {
                self.focus = SupportFocus::Tenant;
                return None;
            }
            _ => {}
        }

        if self.focus == SupportFocus::Reason {
            self.reason.handle_key(key);
            return None;
        }

        match key.code {
            KeyCode::Char(' ') | KeyCode::Right | KeyCode::Char('l') => self.change_select(true),
            KeyCode::Left | KeyCode::Char('h') => self.change_select(false),
            KeyCode::Char('x') => return self.end_impersonation(notifier),
            KeyCode::Char('p') => notifier.notify(Toast::info("Previewing affected jobs...")),
            KeyCode::Char('q') => self.requeue(notifier),
            KeyCode::Char('y') => {
                log::info!("Razorpay sync requested");
                notifier.notify(Toast::info("Razorpay sync started"));
            }
            KeyCode::Char('g') => {
                log::info!("Monthly report requested");
                notifier.notify(Toast::info("Report generation started"));
            }
            KeyCode::Char('c') => self.confirm_clear = true,
            _ => {}
        }
        None
    }

    fn captures_input(&self) -> bool {
        self.focus == SupportFocus::Reason || self.confirm_clear
    }
}
