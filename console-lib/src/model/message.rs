use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::query::{Record, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Queued,
    Sent,
    Delivered,
    Failed,
    Read,
}

impl MessageStatus {
    pub const ALL: [MessageStatus; 5] = [
        MessageStatus::Queued,
        MessageStatus::Sent,
        MessageStatus::Delivered,
        MessageStatus::Failed,
        MessageStatus::Read,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MessageStatus::Queued => "queued",
            MessageStatus::Sent => "sent",
            MessageStatus::Delivered => "delivered",
            MessageStatus::Failed => "failed",
            MessageStatus::Read => "read",
        }
    }
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An outbound WhatsApp message in the delivery queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueuedMessage {
    pub id: String,
    pub tenant_id: String,
    pub tenant_name: String,
    /// E.164 phone number.
    pub recipient: String,
    pub template_name: String,
    pub status: MessageStatus,
    pub retry_count: u32,
    #[serde(default)]
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub sent_at: Option<DateTime<Utc>>,
}

impl Record for QueuedMessage {
    const NAME: &'static str = "message";
    const FIELDS: &'static [&'static str] = &[
        "id",
        "tenant_id",
        "tenant_name",
        "recipient",
        "template_name",
        "status",
        "retry_count",
        "error_message",
        "created_at",
        "sent_at",
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<Value> {
        Some(match name {
            "id" => Value::from(&self.id),
            "tenant_id" => Value::from(&self.tenant_id),
            "tenant_name" => Value::from(&self.tenant_name),
            "recipient" => Value::from(&self.recipient),
            "template_name" => Value::from(&self.template_name),
            "status" => Value::from(self.status.as_str()),
            "retry_count" => Value::from(self.retry_count),
            "error_message" => Value::from(self.error_message.clone()),
            "created_at" => Value::from(self.created_at),
            "sent_at" => Value::from(self.sent_at),
            _ => return None,
        })
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.template_name, &self.tenant_name]
    }

    fn search_exact(&self) -> Vec<&str> {
        vec![&self.recipient]
    }
}
