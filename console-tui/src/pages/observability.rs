use console_lib::model::{ErrorSummary, HourFailures, PlatformMetrics, QueueSample, WebhookFailure};
use console_lib::query::Dataset;
use console_lib::stats::format_count;
use console_term::text::TextAlign;
use console_term::{Buffer, Rect, Style};
use console_widgets::chart::BarChart;
use console_widgets::content::{Content, Span, Tone};
use console_widgets::draw;
use console_widgets::stat_card::{StatCard, StatVariant};
use console_widgets::table::{Alignment, Column};
use console_widgets::theme::Theme;
use console_widgets::toast::{Notifier, Toast};
use crossterm::event::{KeyCode, KeyEvent};

use super::list::ListPage;
use super::{Action, Screen, clock, render_cards, render_tabs};

const CHART_HEIGHT: u16 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservabilityTab {
    Webhooks,
    Errors,
}

fn webhook_columns() -> Vec<Column<WebhookFailure>> {
    vec![
        Column::new("tenant_name", "Tenant", |w: &WebhookFailure| {
            Content::from(Span::new(w.tenant_name.clone()).bold())
        })
        .flex(2),
        Column::text("endpoint", "Endpoint", |w: &WebhookFailure| w.endpoint.clone()).flex(3),
        Column::new("status_code", "Status", |w: &WebhookFailure| {
            Content::from(Span::new(w.status_code.to_string()).tone(Tone::Destructive).bold())
        })
        .fixed(8)
        .align(Alignment::Center),
        Column::new("error_message", "Error", |w: &WebhookFailure| {
            Content::from(Span::new(w.error_message.clone()).muted())
        })
        .flex(3),
        Column::new("retry_count", "Retries", |w: &WebhookFailure| {
            let span = Span::new(w.retry_count.to_string());
            if w.retry_count >= 3 {
                Content::from(span.tone(Tone::Destructive).bold())
            } else {
                Content::from(span)
            }
        })
        .fixed(8)
        .align(Alignment::Center),
        Column::new("created_at", "Time", |w: &WebhookFailure| {
            Content::from(Span::new(clock(&w.created_at)).muted())
        })
        .fixed(10),
    ]
}

pub struct ObservabilityPage {
    cards: Vec<StatCard>,
    failures_chart: BarChart,
    queue_chart: BarChart,
    webhooks: ListPage<WebhookFailure>,
    errors: Vec<ErrorSummary>,
    tab: ObservabilityTab,
}

impl ObservabilityPage {
    pub fn new(
        metrics: &PlatformMetrics,
        failures_by_hour: &[HourFailures],
        queue_length: &[QueueSample],
        webhook_failures: Vec<WebhookFailure>,
        errors: Vec<ErrorSummary>,
        page_size: usize,
    ) -> Self {
        let cards = vec![
            StatCard::new("Webhook Failures (24h)", metrics.webhook_failures_24h.to_string())
                .icon("▲")
                .variant(StatVariant::Warning),
            StatCard::new("Queue Length", format_count(i64::from(metrics.queue_length))).icon("◷"),
            StatCard::new("Avg Response Time", format!("{}ms", metrics.avg_response_time_ms))
                .icon("ϟ")
                .variant(StatVariant::Success),
            StatCard::new("Active Jobs", metrics.active_jobs.to_string()).icon("∿"),
        ];
        let failures_chart = BarChart::new(
            "Webhook Failures (24h)",
            failures_by_hour
                .iter()
                .map(|h| (h.hour.clone(), f64::from(h.failures)))
                .collect(),
        )
        .tone(Tone::Destructive);
        let queue_chart = BarChart::new(
            "Queue Length (Real-time)",
            queue_length
                .iter()
                .map(|s| (s.time.clone(), f64::from(s.length)))
                .collect(),
        );
        let webhooks = ListPage::new(Dataset::new(webhook_failures), webhook_columns(), page_size)
            .search_placeholder("Search tenant or endpoint...")
            .empty_message("No webhook failures.")
            .action("r", "Retry");
        Self {
            cards,
            failures_chart,
            queue_chart,
            webhooks,
            errors,
            tab: ObservabilityTab::Webhooks,
        }
    }

    pub fn tab(&self) -> ObservabilityTab {
        self.tab
    }

    pub fn webhooks(&self) -> &ListPage<WebhookFailure> {
        &self.webhooks
    }

    fn toggle_tab(&mut self) {
        self.tab = match self.tab {
            ObservabilityTab::Webhooks => ObservabilityTab::Errors,
            ObservabilityTab::Errors => ObservabilityTab::Webhooks,
        };
    }

    fn render_errors(&self, buf: &mut Buffer, area: Rect, theme: &dyn Theme) {
        let muted = Style::new().foreground(theme.color("muted"));
        let mut rest = area;
        for error in &self.errors {
            if rest.height < 3 {
                break;
            }
            let (entry, after) = rest.split_top(3);
            rest = after;
            let (first, second) = entry.split_top(1);
            let (second, rule) = second.split_top(1);

            let kind = Content::from(Span::new(error.kind.clone()).bold());
            draw::content(buf, first, &kind, TextAlign::Left, Style::new(), theme);
            let stats = Content::from(Span::new(format!("{} occurrences", error.count)).bold())
                .then(Span::new(clock(&error.last_seen)).muted());
            draw::content(buf, first, &stats, TextAlign::Right, Style::new(), theme);
            draw::text(buf, second, &error.message, TextAlign::Left, muted);
            draw::rule(buf, rule, Style::new().foreground(theme.color("border")));
        }
    }

    fn body(&self, area: Rect) -> Rect {
        let (_, rest) = area.split_top(self.cards.iter().map(StatCard::height).max().unwrap_or(0) + 1);
        let (_, rest) = rest.split_top(CHART_HEIGHT + 1);
        let (_, rest) = rest.split_top(2);
        rest
    }
}

impl Screen for ObservabilityPage {
    fn title(&self) -> &str {
        "Observability"
    }

    fn subtitle(&self) -> &str {
        "Monitor platform health and performance"
    }

    fn render(&self, buf: &mut Buffer, area: Rect, theme: &dyn Theme) {
        let used = render_cards(buf, area, &self.cards, theme);
        let (_, rest) = area.split_top(used + 1);
        let (charts, rest) = rest.split_top(CHART_HEIGHT);
        let mut halves = charts.columns(2, 2).into_iter();
        if let Some(left) = halves.next() {
            self.failures_chart.render(buf, left, theme);
        }
        if let Some(right) = halves.next() {
            self.queue_chart.render(buf, right, theme);
        }
        let (_, rest) = rest.split_top(1);
        let (tabs, body) = rest.split_top(2);
        let labels = ["Webhook Failures".to_string(), "Error Summary".to_string()];
        let active = match self.tab {
            ObservabilityTab::Webhooks => 0,
            ObservabilityTab::Errors => 1,
        };
        render_tabs(buf, tabs, &labels, active, theme);
        match self.tab {
            ObservabilityTab::Webhooks => self.webhooks.render(buf, body, theme),
            ObservabilityTab::Errors => self.render_errors(buf, body, theme),
        }
    }

    fn handle_key(&mut self, key: &KeyEvent, notifier: &dyn Notifier) -> Option<Action> {
        if self.tab == ObservabilityTab::Webhooks && self.webhooks.handle_key(key) {
            return None;
        }
        match key.code {
            KeyCode::Char('t') | KeyCode::Char('T') => self.toggle_tab(),
            KeyCode::Char('r') if self.tab == ObservabilityTab::Webhooks => {
                if let Some(failure) = self.webhooks.current() {
                    log::info!("Retrying webhook {} to {}", failure.id, failure.endpoint);
                    notifier.notify(Toast::info("Webhook queued for retry"));
                }
            }
            _ => {}
        }
        None
    }

    fn handle_click(&mut self, area: Rect, x: u16, y: u16, _: &dyn Notifier) -> Option<Action> {
        if self.tab == ObservabilityTab::Webhooks {
            let body = self.body(area);
            self.webhooks.handle_click(body, x, y);
        }
        None
    }

    fn captures_input(&self) -> bool {
        self.tab == ObservabilityTab::Webhooks && self.webhooks.state().search_focused
    }
}
