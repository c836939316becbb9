use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::query::{Record, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateStatus {
    Pending,
    Approved,
    Rejected,
}

impl TemplateStatus {
    pub const ALL: [TemplateStatus; 3] = [
        TemplateStatus::Pending,
        TemplateStatus::Approved,
        TemplateStatus::Rejected,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateStatus::Pending => "pending",
            TemplateStatus::Approved => "approved",
            TemplateStatus::Rejected => "rejected",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TemplateStatus::Pending => "Pending",
            TemplateStatus::Approved => "Approved",
            TemplateStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for TemplateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A WhatsApp message template submitted by a tenant for approval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhatsAppTemplate {
    pub id: String,
    pub tenant_id: String,
    pub tenant_name: String,
    pub name: String,
    /// `UTILITY`, `MARKETING`, ...
    pub category: String,
    pub language: String,
    pub status: TemplateStatus,
    pub provider: String,
    pub variables: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl WhatsAppTemplate {
    /// First two variables, with a `+N` suffix for the rest.
    pub fn variables_preview(&self) -> String {
        let mut shown = self
            .variables
            .iter()
            .take(2)
            .cloned()
            .collect::<Vec<_>>()
            .join(" ");
        let more = self.variables.len().saturating_sub(2);
        if more > 0 {
            shown.push_str(&format!(" +{}", more));
        }
        shown
    }
}

impl Record for WhatsAppTemplate {
    const NAME: &'static str = "template";
    const FIELDS: &'static [&'static str] = &[
        "id",
        "tenant_id",
        "tenant_name",
        "name",
        "category",
        "language",
        "status",
        "provider",
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
            "name" => Value::from(&self.name),
            "category" => Value::from(&self.category),
            "language" => Value::from(&self.language),
            "status" => Value::from(self.status.as_str()),
            "provider" => Value::from(&self.provider),
            "created_at" => Value::from(self.created_at),
            _ => return None,
        })
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.tenant_name]
    }
}
