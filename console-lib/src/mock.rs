//! Embedded mock dataset.
//!
//! The console has no backend; every page reads from these fixtures.

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::model::{
    AuditLog, DashboardSeries, ErrorSummary, Invoice, PlatformUser, QueuedMessage, Tenant,
    WebhookFailure, WhatsAppTemplate,
};

const TENANTS: &str = include_str!("../data/tenants.json");
const USERS: &str = include_str!("../data/users.json");
const TEMPLATES: &str = include_str!("../data/templates.json");
const INVOICES: &str = include_str!("../data/invoices.json");
const MESSAGES: &str = include_str!("../data/messages.json");
const AUDIT_LOGS: &str = include_str!("../data/audit_logs.json");
const WEBHOOK_FAILURES: &str = include_str!("../data/webhook_failures.json");
const ERRORS: &str = include_str!("../data/errors.json");
const DASHBOARD: &str = include_str!("../data/dashboard.json");

/// Every fixture, parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct MockData {
    pub tenants: Vec<Tenant>,
    pub users: Vec<PlatformUser>,
    pub templates: Vec<WhatsAppTemplate>,
    pub invoices: Vec<Invoice>,
    pub messages: Vec<QueuedMessage>,
    pub audit_logs: Vec<AuditLog>,
    pub webhook_failures: Vec<WebhookFailure>,
    pub errors: Vec<ErrorSummary>,
    pub dashboard: DashboardSeries,
}

impl MockData {
    pub fn load() -> Result<Self> {
        let data = Self {
            tenants: parse("tenants", TENANTS)?,
            users: parse("users", USERS)?,
            templates: parse("templates", TEMPLATES)?,
            invoices: parse("invoices", INVOICES)?,
            messages: parse("messages", MESSAGES)?,
            audit_logs: parse("audit_logs", AUDIT_LOGS)?,
            webhook_failures: parse("webhook_failures", WEBHOOK_FAILURES)?,
            errors: parse("errors", ERRORS)?,
            dashboard: parse("dashboard", DASHBOARD)?,
        };
        log::info!(
            "Loaded mock data: {} tenants, {} users, {} messages",
            data.tenants.len(),
            data.users.len(),
            data.messages.len()
        );
        Ok(data)
    }
}

pub(crate) fn parse<T: DeserializeOwned>(name: &'static str, json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|source| Error::Fixture { name, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broken_fixture_names_the_file() {
        let err = parse::<Vec<Tenant>>("tenants", "[{\"id\": 1}]").unwrap_err();
        assert!(matches!(err, Error::Fixture { name: "tenants", .. }));
        assert!(err.to_string().starts_with("failed to parse fixture 'tenants'"));
    }
}
