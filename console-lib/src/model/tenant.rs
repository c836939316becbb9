use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::query::{Record, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TenantStatus {
    Active,
    Inactive,
    Suspended,
    Onboarding,
}

impl TenantStatus {
    pub const ALL: [TenantStatus; 4] = [
        TenantStatus::Active,
        TenantStatus::Inactive,
        TenantStatus::Suspended,
        TenantStatus::Onboarding,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TenantStatus::Active => "active",
            TenantStatus::Inactive => "inactive",
            TenantStatus::Suspended => "suspended",
            TenantStatus::Onboarding => "onboarding",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TenantStatus::Active => "Active",
            TenantStatus::Inactive => "Inactive",
            TenantStatus::Suspended => "Suspended",
            TenantStatus::Onboarding => "Onboarding",
        }
    }
}

impl fmt::Display for TenantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TenantPlan {
    Free,
    Starter,
    Growth,
    Enterprise,
}

impl TenantPlan {
    pub const ALL: [TenantPlan; 4] = [
        TenantPlan::Free,
        TenantPlan::Starter,
        TenantPlan::Growth,
        TenantPlan::Enterprise,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TenantPlan::Free => "free",
            TenantPlan::Starter => "starter",
            TenantPlan::Growth => "growth",
            TenantPlan::Enterprise => "enterprise",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TenantPlan::Free => "Free",
            TenantPlan::Starter => "Starter",
            TenantPlan::Growth => "Growth",
            TenantPlan::Enterprise => "Enterprise",
        }
    }
}

impl fmt::Display for TenantPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A customer organisation on the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub plan: TenantPlan,
    pub status: TenantStatus,
    pub owner_email: String,
    pub whatsapp_configured: bool,
    pub razorpay_configured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub product_count: u32,
    pub user_count: u32,
    /// In rupees.
    pub monthly_revenue: i64,
}

impl Record for Tenant {
    const NAME: &'static str = "tenant";
    const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "slug",
        "plan",
        "status",
        "owner_email",
        "whatsapp_configured",
        "razorpay_configured",
        "created_at",
        "updated_at",
        "product_count",
        "user_count",
        "monthly_revenue",
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<Value> {
        Some(match name {
            "id" => Value::from(&self.id),
            "name" => Value::from(&self.name),
            "slug" => Value::from(&self.slug),
            "plan" => Value::from(self.plan.as_str()),
            "status" => Value::from(self.status.as_str()),
            "owner_email" => Value::from(&self.owner_email),
            "whatsapp_configured" => Value::from(self.whatsapp_configured),
            "razorpay_configured" => Value::from(self.razorpay_configured),
            "created_at" => Value::from(self.created_at),
            "updated_at" => Value::from(self.updated_at),
            "product_count" => Value::from(self.product_count),
            "user_count" => Value::from(self.user_count),
            "monthly_revenue" => Value::from(self.monthly_revenue),
            _ => return None,
        })
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.slug, &self.owner_email]
    }
}
