use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::query::{Record, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
    Cancelled,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 5] = [
        InvoiceStatus::Draft,
        InvoiceStatus::Sent,
        InvoiceStatus::Paid,
        InvoiceStatus::Overdue,
        InvoiceStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Sent => "sent",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
            InvoiceStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "Draft",
            InvoiceStatus::Sent => "Sent",
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Overdue => "Overdue",
            InvoiceStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub tenant_id: String,
    pub tenant_name: String,
    pub invoice_number: String,
    /// In whole currency units.
    pub amount: i64,
    pub currency: String,
    pub status: InvoiceStatus,
    #[serde(default)]
    pub razorpay_order_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
}

impl Record for Invoice {
    const NAME: &'static str = "invoice";
    const FIELDS: &'static [&'static str] = &[
        "id",
        "tenant_id",
        "tenant_name",
        "invoice_number",
        "amount",
        "currency",
        "status",
        "razorpay_order_id",
        "created_at",
        "due_date",
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<Value> {
        Some(match name {
            "id" => Value::from(&self.id),
            "tenant_id" => Value::from(&self.tenant_id),
            "tenant_name" => Value::from(&self.tenant_name),
            "invoice_number" => Value::from(&self.invoice_number),
            "amount" => Value::from(self.amount),
            "currency" => Value::from(&self.currency),
            "status" => Value::from(self.status.as_str()),
            "razorpay_order_id" => Value::from(self.razorpay_order_id.clone()),
            "created_at" => Value::from(self.created_at),
            "due_date" => Value::from(self.due_date),
            _ => return None,
        })
    }

    fn search_text(&self) -> Vec<&str> {
        let mut fields = vec![self.invoice_number.as_str(), self.tenant_name.as_str()];
        if let Some(order) = &self.razorpay_order_id {
            fields.push(order);
        }
        fields
    }
}
