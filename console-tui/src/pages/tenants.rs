use console_lib::model::{Tenant, TenantPlan, TenantStatus};
use console_lib::query::Dataset;
use console_lib::stats::{format_count, format_rupees};
use console_term::{Buffer, Rect};
use console_widgets::badge::StatusBadge;
use console_widgets::content::{Content, Span, Tone};
use console_widgets::filter_bar::{FilterOption, SelectFilter};
use console_widgets::table::{Alignment, Column, SortState};
use console_widgets::theme::Theme;
use console_widgets::toast::{Notifier, Toast};
use crossterm::event::{KeyCode, KeyEvent};

use super::list::ListPage;
use super::{Action, Screen, date};

fn plan_tone(plan: TenantPlan) -> Tone {
    match plan {
        TenantPlan::Free => Tone::Muted,
        TenantPlan::Starter | TenantPlan::Growth => Tone::Primary,
        TenantPlan::Enterprise => Tone::Accent,
    }
}

fn integrations(tenant: &Tenant) -> Content {
    let mut content = Content::new();
    if tenant.whatsapp_configured {
        content = content.then(Span::new("WhatsApp"));
    }
    if tenant.razorpay_configured {
        content = content.then(Span::new("Razorpay"));
    }
    if content.is_empty() {
        content = Content::from(Span::new("None").muted());
    }
    content
}

fn columns() -> Vec<Column<Tenant>> {
    vec![
        Column::new("name", "Tenant", |t: &Tenant| {
            Content::from(Span::new(t.name.clone()).bold()).then(Span::new(t.slug.clone()).muted())
        })
        .sortable()
        .flex(3),
        Column::new("plan", "Plan", |t: &Tenant| {
            Content::from(Span::new(t.plan.label()).tone(plan_tone(t.plan)))
        })
        .sortable()
        .fixed(12),
        Column::new("status", "Status", |t: &Tenant| {
            StatusBadge::new(t.status.as_str()).content()
        })
        .sortable()
        .fixed(14),
        Column::new("integrations", "Integrations", integrations).flex(2),
        Column::text("user_count", "Users", |t: &Tenant| t.user_count.to_string())
            .sortable()
            .fixed(8)
            .align(Alignment::Right),
        Column::text("product_count", "Products", |t: &Tenant| {
            format_count(i64::from(t.product_count))
        })
        .sortable()
        .fixed(10)
        .align(Alignment::Right),
        Column::new("monthly_revenue", "MRR", |t: &Tenant| {
            Content::from(Span::new(format_rupees(t.monthly_revenue)).bold())
        })
        .sortable()
        .fixed(12)
        .align(Alignment::Right),
        Column::new("created_at", "Created", |t: &Tenant| {
            Content::from(Span::new(date(&t.created_at)).muted())
        })
        .sortable()
        .fixed(14),
    ]
}

pub struct TenantsPage {
    list: ListPage<Tenant>,
}

impl TenantsPage {
    pub fn new(tenants: Vec<Tenant>, page_size: usize) -> Self {
        let status = SelectFilter::new(
            "status",
            "Status",
            TenantStatus::ALL
                .iter()
                .map(|s| FilterOption::new(s.as_str(), s.label()))
                .collect(),
        );
        let plan = SelectFilter::new(
            "plan",
            "Plan",
            TenantPlan::ALL
                .iter()
                .map(|p| FilterOption::new(p.as_str(), p.label()))
                .collect(),
        );
        let list = ListPage::new(Dataset::new(tenants), columns(), page_size)
            .selectable(true)
            .filter(status)
            .filter(plan)
            .sorted(SortState::desc("created_at"))
            .search_placeholder("Search tenants...")
            .empty_message("No tenants found matching your criteria.")
            .action("e", "Export")
            .action("n", "Add Tenant")
            .action("i", "Impersonate");
        Self { list }
    }

    pub fn list(&self) -> &ListPage<Tenant> {
        &self.list
    }

    fn impersonate(&self, notifier: &dyn Notifier) -> Option<Action> {
        let tenant = self.list.current()?;
        log::info!("Impersonating tenant {}", tenant.id);
        notifier.notify(
            Toast::info("Impersonation Started").description(format!(
                "You are now viewing as {} (read-only mode)",
                tenant.name
            )),
        );
        Some(Action::Impersonate(Some(tenant.name.clone())))
    }
}

impl Screen for TenantsPage {
    fn title(&self) -> &str {
        "Tenants"
    }

    fn subtitle(&self) -> &str {
        "Manage all platform tenants"
    }

    fn render(&self, buf: &mut Buffer, area: Rect, theme: &dyn Theme) {
        self.list.render(buf, area, theme);
    }

    fn handle_key(&mut self, key: &KeyEvent, notifier: &dyn Notifier) -> Option<Action> {
        if self.list.handle_key(key) {
            return None;
        }
        match key.code {
            KeyCode::Char('i') => return self.impersonate(notifier),
            KeyCode::Char('e') => notifier.notify(Toast::info("Exporting tenants...")),
            KeyCode::Char('n') => notifier.notify(Toast::info("Open onboarding wizard")),
            _ => {}
        }
        None
    }

    fn handle_click(&mut self, area: Rect, x: u16, y: u16, _: &dyn Notifier) -> Option<Action> {
        self.list.handle_click(area, x, y);
        None
    }

    fn captures_input(&self) -> bool {
        self.list.state().search_focused
    }
}
