use console_lib::MockData;
use console_lib::model::{InvoiceStatus, MessageStatus, TenantStatus, UserRole};
use console_lib::stats;

fn data() -> MockData {
    MockData::load().unwrap()
}

#[test]
fn test_fixtures_load() {
    let data = data();
    assert_eq!(data.tenants.len(), 5);
    assert_eq!(data.users.len(), 4);
    assert_eq!(data.templates.len(), 4);
    assert_eq!(data.invoices.len(), 4);
    assert_eq!(data.messages.len(), 5);
    assert_eq!(data.audit_logs.len(), 5);
    assert_eq!(data.webhook_failures.len(), 3);
    assert_eq!(data.errors.len(), 3);
    assert_eq!(data.dashboard.revenue_by_month.len(), 7);
    assert_eq!(data.dashboard.metrics.total_tenants, 1284);
}

#[test]
fn test_enums_and_optionals_parse() {
    let data = data();
    assert_eq!(data.tenants[4].status, TenantStatus::Suspended);
    assert_eq!(data.users[0].role, UserRole::PlatformAdmin);
    assert_eq!(data.invoices[3].status, InvoiceStatus::Draft);
    assert_eq!(data.invoices[3].razorpay_order_id, None);
    assert_eq!(data.messages[1].status, MessageStatus::Failed);
    assert!(data.messages[1].sent_at.is_none());
    assert!(data.audit_logs[1].tenant_name.is_none());
    assert_eq!(data.errors[0].kind, "DatabaseConnectionError");
}

#[test]
fn test_invoice_totals() {
    let data = data();
    let totals = stats::invoice_totals(&data.invoices);
    assert_eq!(totals.invoiced, 525_000);
    assert_eq!(totals.collected, 125_000);
    assert_eq!(totals.outstanding(), 400_000);
    assert_eq!(stats::format_rupees(totals.invoiced), "₹525,000");
}

#[test]
fn test_page_counts() {
    let data = data();
    assert_eq!(stats::count_messages(&data.messages, MessageStatus::Queued), 1);
    assert_eq!(stats::count_messages(&data.messages, MessageStatus::Failed), 2);
    assert_eq!(stats::pending_templates(&data.templates), 2);
    assert_eq!(
        stats::users_per_role(&data.users),
        vec![
            (UserRole::PlatformAdmin, 1),
            (UserRole::Support, 2),
            (UserRole::Finance, 1)
        ]
    );
    assert_eq!(
        stats::audit_actions(&data.audit_logs),
        vec![
            "IMPERSONATE_START",
            "INVOICE_SENT",
            "PLAN_UPDATED",
            "TEMPLATE_APPROVED",
            "USER_CREATED"
        ]
    );
}

#[test]
fn test_audit_details_summary() {
    let data = data();
    assert_eq!(data.audit_logs[0].details_summary(), "reason: Support ticket #1234");
}
