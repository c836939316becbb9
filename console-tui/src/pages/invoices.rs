use console_lib::model::{Invoice, InvoiceStatus};
use console_lib::query::{Dataset, Filter};
use console_lib::stats::{InvoiceTotals, format_rupees, invoice_totals};
use console_term::{Buffer, Rect};
use console_widgets::badge::StatusBadge;
use console_widgets::content::{Content, Span, Tone};
use console_widgets::filter_bar::{FilterOption, SelectFilter};
use console_widgets::stat_card::{StatCard, StatVariant};
use console_widgets::table::{Alignment, Column};
use console_widgets::theme::Theme;
use console_widgets::toast::{Notifier, Toast};
use crossterm::event::{KeyCode, KeyEvent};

use super::list::ListPage;
use super::{Action, Screen, date, render_cards};

const CARD_HEIGHT: u16 = 4;

fn columns() -> Vec<Column<Invoice>> {
    vec![
        Column::new("invoice_number", "Invoice", |i: &Invoice| {
            Content::from(Span::new(i.invoice_number.clone()).bold()).then(Span::new(i.tenant_name.clone()).muted())
        })
        .sortable()
        .flex(3),
        Column::new("amount", "Amount", |i: &Invoice| {
            Content::from(Span::new(format_rupees(i.amount)).bold())
        })
        .sortable()
        .fixed(12)
        .align(Alignment::Right),
        Column::new("status", "Status", |i: &Invoice| {
            StatusBadge::new(i.status.as_str()).content()
        })
        .sortable()
        .fixed(12),
        Column::new("razorpay_order_id", "Razorpay ID", |i: &Invoice| {
            Content::from(Span::new(i.razorpay_order_id.clone().unwrap_or_else(|| "—".into())).muted())
        })
        .flex(2),
        Column::new("created_at", "Created", |i: &Invoice| {
            Content::from(Span::new(date(&i.created_at)).muted())
        })
        .sortable()
        .fixed(14),
        Column::new("due_date", "Due Date", |i: &Invoice| {
            let span = Span::new(date(&i.due_date));
            if i.status == InvoiceStatus::Overdue {
                Content::from(span.tone(Tone::Destructive).bold())
            } else {
                Content::from(span.muted())
            }
        })
        .sortable()
        .fixed(14),
    ]
}

pub struct InvoicesPage {
    list: ListPage<Invoice>,
}

impl InvoicesPage {
    pub fn new(invoices: Vec<Invoice>, page_size: usize) -> Self {
        let status = SelectFilter::new(
            "status",
            "Status",
            InvoiceStatus::ALL
                .iter()
                .map(|s| FilterOption::new(s.as_str(), s.label()))
                .collect(),
        );
        let list = ListPage::new(Dataset::new(invoices), columns(), page_size)
            .filter(status)
            .search_placeholder("Search invoices or Razorpay ID...")
            .empty_message("No invoices found.")
            .action("e", "Export CSV")
            .action("q", "Re-query Razorpay");
        Self { list }
    }

    pub fn list(&self) -> &ListPage<Invoice> {
        &self.list
    }

    /// Totals over every invoice matching the search and filters, across all pages.
    pub fn totals(&self) -> InvoiceTotals {
        let query = self.list.state().query(&Filter::All);
        match self.list.dataset().matching(&query) {
            Ok(rows) => invoice_totals(&rows),
            Err(e) => {
                log::error!("Invoice totals failed: {}", e);
                InvoiceTotals::default()
            }
        }
    }

    fn cards(&self) -> Vec<StatCard> {
        let totals = self.totals();
        vec![
            StatCard::new("Total Invoiced", format_rupees(totals.invoiced)).icon("₹"),
            StatCard::new("Collected", format_rupees(totals.collected))
                .icon("✓")
                .variant(StatVariant::Success),
            StatCard::new("Outstanding", format_rupees(totals.outstanding()))
                .icon("!")
                .variant(StatVariant::Destructive),
        ]
    }

    fn requery(&self, notifier: &dyn Notifier) {
        let Some(invoice) = self.list.current() else { return };
        match &invoice.razorpay_order_id {
            Some(order) => {
                log::info!("Re-querying Razorpay order {}", order);
                notifier.notify(Toast::info("Querying Razorpay status..."));
            }
            None => log::warn!("Invoice {} has no Razorpay order", invoice.invoice_number),
        }
    }
}

impl Screen for InvoicesPage {
    fn title(&self) -> &str {
        "Invoices"
    }

    fn subtitle(&self) -> &str {
        "Platform-wide invoice management"
    }

    fn render(&self, buf: &mut Buffer, area: Rect, theme: &dyn Theme) {
        let used = render_cards(buf, area, &self.cards(), theme);
        let (_, rest) = area.split_top(used + 1);
        self.list.render(buf, rest, theme);
    }

    fn handle_key(&mut self, key: &KeyEvent, notifier: &dyn Notifier) -> Option<Action> {
        if self.list.handle_key(key) {
            return None;
        }
        match key.code {
            KeyCode::Char('e') => notifier.notify(Toast::info("Exporting invoices to CSV...")),
            KeyCode::Char('q') => self.requery(notifier),
            _ => {}
        }
        None
    }

    fn handle_click(&mut self, area: Rect, x: u16, y: u16, _: &dyn Notifier) -> Option<Action> {
        let (_, rest) = area.split_top(CARD_HEIGHT + 1);
        self.list.handle_click(rest, x, y);
        None
    }

    fn captures_input(&self) -> bool {
        self.list.state().search_focused
    }
}
