//! Typed records shown by the console.

mod audit;
mod dashboard;
mod invoice;
mod message;
mod observability;
mod template;
mod tenant;
mod user;

pub use audit::AuditLog;
pub use dashboard::{ActivityItem, DashboardSeries, DayMessages, HourFailures, MonthRevenue, QueueSample};
pub use invoice::{Invoice, InvoiceStatus};
pub use message::{MessageStatus, QueuedMessage};
pub use observability::{ErrorSummary, PlatformMetrics, WebhookFailure};
pub use template::{TemplateStatus, WhatsAppTemplate};
pub use tenant::{Tenant, TenantPlan, TenantStatus};
pub use user::{PlatformUser, UserRole};
