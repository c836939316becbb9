use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as Json};

use crate::query::{Record, Value};

/// One entry in the platform audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLog {
    pub id: String,
    /// Platform-level actions have no tenant.
    #[serde(default)]
    pub tenant_id: Option<String>,
    #[serde(default)]
    pub tenant_name: Option<String>,
    pub user_id: String,
    pub user_email: String,
    /// `IMPERSONATE_START`, `USER_CREATED`, ...
    pub action: String,
    pub resource_type: String,
    pub resource_id: String,
    #[serde(default)]
    pub details: Map<String, Json>,
    pub ip_address: String,
    pub created_at: DateTime<Utc>,
}

impl AuditLog {
    /// `key: value` pairs from `details`, comma separated.
    pub fn details_summary(&self) -> String {
        self.details
            .iter()
            .map(|(key, value)| match value {
                Json::String(s) => format!("{}: {}", key, s),
                other => format!("{}: {}", key, other),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Record for AuditLog {
    const NAME: &'static str = "audit log";
    const FIELDS: &'static [&'static str] = &[
        "id",
        "tenant_id",
        "tenant_name",
        "user_id",
        "user_email",
        "action",
        "resource_type",
        "resource_id",
        "ip_address",
        "created_at",
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<Value> {
        Some(match name {
            "id" => Value::from(&self.id),
            "tenant_id" => Value::from(self.tenant_id.clone()),
            "tenant_name" => Value::from(self.tenant_name.clone()),
            "user_id" => Value::from(&self.user_id),
            "user_email" => Value::from(&self.user_email),
            "action" => Value::from(&self.action),
            "resource_type" => Value::from(&self.resource_type),
            "resource_id" => Value::from(&self.resource_id),
            "ip_address" => Value::from(&self.ip_address),
            "created_at" => Value::from(self.created_at),
            _ => return None,
        })
    }

    fn search_text(&self) -> Vec<&str> {
        let mut fields = vec![self.user_email.as_str(), self.action.as_str()];
        if let Some(tenant) = &self.tenant_name {
            fields.push(tenant);
        }
        fields
    }
}
