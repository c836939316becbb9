use console_lib::model::{ActivityItem, DashboardSeries};
use console_lib::stats::{format_count, format_lakhs};
use console_term::text::TextAlign;
use console_term::{Buffer, Rect, Style};
use console_widgets::chart::BarChart;
use console_widgets::content::{Content, Span, Tone};
use console_widgets::draw;
use console_widgets::stat_card::{StatCard, StatVariant};
use console_widgets::theme::Theme;
use console_widgets::toast::Notifier;
use crossterm::event::KeyEvent;

use super::{Action, Screen, render_cards};

const CHART_HEIGHT: u16 = 10;

pub struct DashboardPage {
    primary: Vec<StatCard>,
    secondary: Vec<StatCard>,
    revenue: BarChart,
    messages: BarChart,
    activity: Vec<ActivityItem>,
}

impl DashboardPage {
    pub fn new(series: &DashboardSeries) -> Self {
        let m = &series.metrics;
        let primary = vec![
            StatCard::new("Total Tenants", format_count(i64::from(m.total_tenants)))
                .change(f64::from(m.tenants_change), "vs last month")
                .icon("▣"),
            StatCard::new("Active Users", format_count(i64::from(m.total_users)))
                .change(f64::from(m.users_change), "vs last month")
                .icon("◎"),
            StatCard::new("Monthly Revenue", format_lakhs(m.monthly_revenue))
                .change(f64::from(m.revenue_change), "vs last month")
                .icon("₹")
                .variant(StatVariant::Success),
            StatCard::new("Messages Today", format_count(i64::from(m.messages_sent_today)))
                .change(f64::from(m.messages_change), "vs yesterday")
                .icon("✉"),
        ];
        let secondary = vec![
            StatCard::new("Failed Messages", format_count(i64::from(m.messages_failed_today)))
                .icon("▲")
                .variant(StatVariant::Destructive),
            StatCard::new("Queue Length", format_count(i64::from(m.queue_length)))
                .icon("◷")
                .variant(StatVariant::Warning),
            StatCard::new("Webhook Failures (24h)", m.webhook_failures_24h.to_string())
                .icon("∿")
                .variant(StatVariant::Warning),
            StatCard::new("Avg Response Time", format!("{}ms", m.avg_response_time_ms))
                .icon("↗")
                .variant(StatVariant::Success),
        ];
        let revenue = BarChart::new(
            "Revenue Trend",
            series
                .revenue_by_month
                .iter()
                .map(|r| (r.name.clone(), r.revenue as f64))
                .collect(),
        );
        let messages = BarChart::new(
            "Message Delivery",
            series
                .messages_by_day
                .iter()
                .map(|d| (d.name.clone(), f64::from(d.sent)))
                .collect(),
        )
        .tone(Tone::Success);
        Self {
            primary,
            secondary,
            revenue,
            messages,
            activity: series.recent_activity.clone(),
        }
    }

    fn render_activity(&self, buf: &mut Buffer, area: Rect, theme: &dyn Theme) {
        let inner = draw::border(
            buf,
            area,
            Some("Recent Activity"),
            Style::new().foreground(theme.color("border")),
        )
        .shrink(0, 1, 0, 1);
        for (i, item) in self.activity.iter().enumerate() {
            if i as u16 >= inner.height {
                break;
            }
            let row = Rect::new(inner.x, inner.y + i as u16, inner.width, 1);
            let line = Content::from(Span::new("●").tone(Tone::Primary))
                .then(Span::new(item.action.clone()).bold())
                .then(Span::new(item.tenant.clone()).muted());
            draw::content(buf, row, &line, TextAlign::Left, Style::new(), theme);
            let time = Content::from(Span::new(item.time.clone()).muted());
            draw::content(buf, row, &time, TextAlign::Right, Style::new(), theme);
        }
    }
}

impl Screen for DashboardPage {
    fn title(&self) -> &str {
        "Platform Dashboard"
    }

    fn subtitle(&self) -> &str {
        "Monitor platform health and key metrics"
    }

    fn render(&self, buf: &mut Buffer, area: Rect, theme: &dyn Theme) {
        let used = render_cards(buf, area, &self.primary, theme);
        let (_, rest) = area.split_top(used + 1);
        let used = render_cards(buf, rest, &self.secondary, theme);
        let (_, rest) = rest.split_top(used + 1);

        let (charts, rest) = rest.split_top(CHART_HEIGHT);
        let mut halves = charts.columns(2, 2).into_iter();
        if let Some(left) = halves.next() {
            self.revenue.render(buf, left, theme);
        }
        if let Some(right) = halves.next() {
            self.messages.render(buf, right, theme);
        }

        let (_, rest) = rest.split_top(1);
        let height = (self.activity.len() as u16 + 2).min(rest.height);
        let (activity, _) = rest.split_top(height);
        self.render_activity(buf, activity, theme);
    }

    fn handle_key(&mut self, _: &KeyEvent, _: &dyn Notifier) -> Option<Action> {
        None
    }
}
