//! Aggregates shown in page summary cards, and number formatting.

use std::collections::BTreeSet;

use crate::model::{
    AuditLog, Invoice, InvoiceStatus, MessageStatus, PlatformUser, QueuedMessage, TemplateStatus,
    UserRole, WhatsAppTemplate,
};

/// Totals for the invoice summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InvoiceTotals {
    pub invoiced: i64,
    pub collected: i64,
}

impl InvoiceTotals {
    pub fn outstanding(&self) -> i64 {
        self.invoiced - self.collected
    }
}

pub fn invoice_totals<'a>(invoices: impl IntoIterator<Item = &'a Invoice>) -> InvoiceTotals {
    invoices
        .into_iter()
        .fold(InvoiceTotals::default(), |mut totals, invoice| {
            totals.invoiced += invoice.amount;
            if invoice.status == InvoiceStatus::Paid {
                totals.collected += invoice.amount;
            }
            totals
        })
}

pub fn count_messages(messages: &[QueuedMessage], status: MessageStatus) -> usize {
    messages.iter().filter(|m| m.status == status).count()
}

pub fn pending_templates(templates: &[WhatsAppTemplate]) -> usize {
    templates
        .iter()
        .filter(|t| t.status == TemplateStatus::Pending)
        .count()
}

/// Users per role, in [`UserRole::ALL`] order.
pub fn users_per_role(users: &[PlatformUser]) -> Vec<(UserRole, usize)> {
    UserRole::ALL
        .iter()
        .map(|role| (*role, users.iter().filter(|u| u.role == *role).count()))
        .collect()
}

/// Distinct audit actions, sorted.
pub fn audit_actions(logs: &[AuditLog]) -> Vec<String> {
    logs.iter()
        .map(|log| log.action.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// `1284` -> `1,284`
pub fn format_count(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if n < 0 {
        out.insert(0, '-');
    }
    out
}

/// `125000` -> `₹125,000`
pub fn format_rupees(amount: i64) -> String {
    format!("₹{}", format_count(amount))
}

/// Compact rupees in lakhs: `7240000` -> `₹72.4L`. Below one lakh, plain rupees.
pub fn format_lakhs(amount: i64) -> String {
    const LAKH: f64 = 100_000.0;
    if amount.abs() < 100_000 {
        return format_rupees(amount);
    }
    let lakhs = amount as f64 / LAKH;
    let text = format!("{:.1}", lakhs);
    let text = text.strip_suffix(".0").unwrap_or(&text);
    format!("₹{}L", text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_grouped_in_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1284), "1,284");
        assert_eq!(format_count(1234567), "1,234,567");
        assert_eq!(format_count(-4500), "-4,500");
    }

    #[test]
    fn lakhs() {
        assert_eq!(format_lakhs(7_240_000), "₹72.4L");
        assert_eq!(format_lakhs(500_000), "₹5L");
        assert_eq!(format_lakhs(45_000), "₹45,000");
    }
}
