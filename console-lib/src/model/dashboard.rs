use serde::{Deserialize, Serialize};

use super::observability::PlatformMetrics;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthRevenue {
    pub name: String,
    pub revenue: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayMessages {
    pub name: String,
    pub sent: u32,
    pub failed: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourFailures {
    pub hour: String,
    pub failures: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueSample {
    pub time: String,
    pub length: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub id: u32,
    pub action: String,
    pub tenant: String,
    /// Already humanised ("2 min ago").
    pub time: String,
}

/// Chart series and headline metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSeries {
    pub metrics: PlatformMetrics,
    pub revenue_by_month: Vec<MonthRevenue>,
    pub messages_by_day: Vec<DayMessages>,
    pub webhook_failures_by_hour: Vec<HourFailures>,
    pub queue_length: Vec<QueueSample>,
    pub recent_activity: Vec<ActivityItem>,
}
