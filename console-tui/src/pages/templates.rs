use console_lib::model::{TemplateStatus, WhatsAppTemplate};
use console_lib::query::Dataset;
use console_lib::stats::pending_templates;
use console_term::text::TextAlign;
use console_term::{Buffer, Rect, Style};
use console_widgets::badge::StatusBadge;
use console_widgets::content::{Content, Span, Tone};
use console_widgets::draw;
use console_widgets::filter_bar::{FilterOption, SelectFilter};
use console_widgets::table::Column;
use console_widgets::theme::Theme;
use console_widgets::toast::{Notifier, Toast};
use crossterm::event::{KeyCode, KeyEvent};

use super::list::ListPage;
use super::{Action, Screen, centered, date, render_details};

fn columns() -> Vec<Column<WhatsAppTemplate>> {
    vec![
        Column::new("name", "Template", |t: &WhatsAppTemplate| {
            Content::from(Span::new(t.name.clone()).bold()).then(Span::new(t.tenant_name.clone()).muted())
        })
        .sortable()
        .flex(3),
        Column::text("category", "Category", |t: &WhatsAppTemplate| t.category.clone()).fixed(12),
        Column::new("status", "Status", |t: &WhatsAppTemplate| {
            StatusBadge::new(t.status.as_str()).content()
        })
        .sortable()
        .fixed(12),
        Column::text("provider", "Provider", |t: &WhatsAppTemplate| t.provider.clone()).fixed(10),
        Column::new("variables", "Variables", |t: &WhatsAppTemplate| {
            Content::from(Span::new(t.variables_preview()).tone(Tone::Accent))
        })
        .flex(2),
        Column::new("created_at", "Created", |t: &WhatsAppTemplate| {
            Content::from(Span::new(date(&t.created_at)).muted())
        })
        .sortable()
        .fixed(14),
    ]
}

pub struct TemplatesPage {
    list: ListPage<WhatsAppTemplate>,
    pending: usize,
    /// Template shown in the preview dialog.
    pub preview: Option<WhatsAppTemplate>,
}

impl TemplatesPage {
    pub fn new(templates: Vec<WhatsAppTemplate>, page_size: usize) -> Self {
        let pending = pending_templates(&templates);
        let status = SelectFilter::new(
            "status",
            "Status",
            TemplateStatus::ALL
                .iter()
                .map(|s| FilterOption::new(s.as_str(), s.label()))
                .collect(),
        );
        let list = ListPage::new(Dataset::new(templates), columns(), page_size)
            .filter(status)
            .search_placeholder("Search templates...")
            .empty_message("No templates found.")
            .action("⏎", "Preview");
        Self {
            list,
            pending,
            preview: None,
        }
    }

    pub fn list(&self) -> &ListPage<WhatsAppTemplate> {
        &self.list
    }

    /// Template the row actions apply to: the open preview, else the cursor row.
    fn target(&self) -> Option<&WhatsAppTemplate> {
        self.preview.as_ref().or_else(|| self.list.current())
    }

    fn review(&mut self, approve: bool, notifier: &dyn Notifier) {
        let Some(template) = self.target() else { return };
        if template.status != TemplateStatus::Pending {
            log::warn!("Template {} is not pending review", template.name);
            return;
        }
        log::info!(
            "Template {} {}",
            template.name,
            if approve { "approved" } else { "rejected" }
        );
        if approve {
            notifier.notify(Toast::success("Template approved"));
        } else {
            notifier.notify(Toast::error("Template rejected"));
        }
        self.preview = None;
    }

    fn send_test(&self, notifier: &dyn Notifier) {
        let Some(template) = self.target() else { return };
        if template.status == TemplateStatus::Approved {
            notifier.notify(Toast::info("Test message sent"));
        }
    }

    fn render_preview(&self, template: &WhatsAppTemplate, buf: &mut Buffer, area: Rect, theme: &dyn Theme) {
        let rect = centered(area, 60, 12);
        let variables = template
            .variables
            .iter()
            .map(|v| format!("{{{{{}}}}}", v))
            .collect::<Vec<_>>()
            .join(" ");
        let status = StatusBadge::new(template.status.as_str()).label;
        let fields = [
            ("Tenant", template.tenant_name.clone()),
            ("Category", template.category.clone()),
            ("Provider", template.provider.clone()),
            ("Language", template.language.to_uppercase()),
            ("Status", status),
            ("Variables", variables),
        ];
        render_details(buf, rect, &template.name, &fields, theme);

        let hint = if template.status == TemplateStatus::Pending {
            "y approve · r reject · Esc close"
        } else {
            "Esc close"
        };
        let hint_row = Rect::new(rect.x + 2, rect.bottom().saturating_sub(2), rect.width.saturating_sub(4), 1);
        draw::text(
            buf,
            hint_row,
            hint,
            TextAlign::Right,
            Style::new().foreground(theme.color("muted")),
        );
    }
}

impl Screen for TemplatesPage {
    fn title(&self) -> &str {
        "WhatsApp Templates"
    }

    fn subtitle(&self) -> &str {
        "Manage and approve message templates"
    }

    fn render(&self, buf: &mut Buffer, area: Rect, theme: &dyn Theme) {
        let (banner, rest) = area.split_top(2);
        if self.pending > 0 {
            let line = Content::from(Span::new(format!("{} pending approval", self.pending)).tone(Tone::Warning).bold());
            draw::content(buf, banner, &line, TextAlign::Left, Style::new(), theme);
        }
        self.list.render(buf, rest, theme);
        if let Some(template) = &self.preview {
            self.render_preview(template, buf, area, theme);
        }
    }

    fn handle_key(&mut self, key: &KeyEvent, notifier: &dyn Notifier) -> Option<Action> {
        if self.preview.is_some() {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.preview = None,
                KeyCode::Char('y') => self.review(true, notifier),
                KeyCode::Char('r') => self.review(false, notifier),
                KeyCode::Char('t') => self.send_test(notifier),
                _ => {}
            }
            return None;
        }
        if self.list.handle_key(key) {
            return None;
        }
        match key.code {
            KeyCode::Enter => self.preview = self.list.current().cloned(),
            KeyCode::Char('y') => self.review(true, notifier),
            KeyCode::Char('r') => self.review(false, notifier),
            KeyCode::Char('t') => self.send_test(notifier),
            _ => {}
        }
        None
    }

    fn handle_click(&mut self, area: Rect, x: u16, y: u16, _: &dyn Notifier) -> Option<Action> {
        if self.preview.is_none() {
            let (_, rest) = area.split_top(2);
            self.list.handle_click(rest, x, y);
        }
        None
    }

    fn captures_input(&self) -> bool {
        self.list.state().search_focused
    }
}
