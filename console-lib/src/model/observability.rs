use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::query::{Record, Value};

/// A tenant webhook delivery that kept failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookFailure {
    pub id: String,
    pub tenant_id: String,
    pub tenant_name: String,
    pub endpoint: String,
    pub status_code: u16,
    pub error_message: String,
    pub payload_preview: String,
    pub retry_count: u32,
    pub created_at: DateTime<Utc>,
}

impl Record for WebhookFailure {
    const NAME: &'static str = "webhook failure";
    const FIELDS: &'static [&'static str] = &[
        "id",
        "tenant_id",
        "tenant_name",
        "endpoint",
        "status_code",
        "error_message",
        "retry_count",
        "created_at",
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<Value> {
        Some(match name {
            "id" => Value::from(&self.id),
            "tenant_id" => Value::from(&self.tenant_id),
            "tenant_name" => Value::from(&self.tenant_name),
            "endpoint" => Value::from(&self.endpoint),
            "status_code" => Value::from(u32::from(self.status_code)),
            "error_message" => Value::from(&self.error_message),
            "retry_count" => Value::from(self.retry_count),
            "created_at" => Value::from(self.created_at),
            _ => return None,
        })
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.tenant_name, &self.endpoint]
    }
}

/// A class of backend error grouped by type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorSummary {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub count: u32,
    pub last_seen: DateTime<Utc>,
}

/// Headline numbers for the dashboard and observability pages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformMetrics {
    pub total_tenants: u32,
    /// Percent change against last month.
    pub tenants_change: i32,
    pub total_users: u32,
    pub users_change: i32,
    /// In rupees.
    pub monthly_revenue: i64,
    pub revenue_change: i32,
    pub messages_sent_today: u32,
    /// Percent change against yesterday.
    pub messages_change: i32,
    pub messages_failed_today: u32,
    pub queue_length: u32,
    pub webhook_failures_24h: u32,
    pub avg_response_time_ms: u32,
    pub active_jobs: u32,
}
