//! Status badges.

use crate::content::{Content, Span, Tone};

/// Label and tone for a lifecycle status such as `active` or `overdue`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: String,
    pub tone: Tone,
}

impl StatusBadge {
    /// Look up the badge for a status string.
    ///
    /// Unknown statuses show the raw string with a muted tone.
    pub fn new(status: &str) -> Self {
        let known = match status {
            "active" => Some(("Active", Tone::Success)),
            "inactive" => Some(("Inactive", Tone::Muted)),
            "suspended" => Some(("Suspended", Tone::Destructive)),
            "onboarding" => Some(("Onboarding", Tone::Accent)),
            "pending" => Some(("Pending", Tone::Accent)),
            "approved" => Some(("Approved", Tone::Success)),
            "rejected" => Some(("Rejected", Tone::Destructive)),
            "queued" => Some(("Queued", Tone::Muted)),
            "sent" => Some(("Sent", Tone::Primary)),
            "delivered" => Some(("Delivered", Tone::Success)),
            "failed" => Some(("Failed", Tone::Destructive)),
            "read" => Some(("Read", Tone::Success)),
            "draft" => Some(("Draft", Tone::Muted)),
            "paid" => Some(("Paid", Tone::Success)),
            "overdue" => Some(("Overdue", Tone::Destructive)),
            "cancelled" => Some(("Cancelled", Tone::Muted)),
            _ => None,
        };
        match known {
            Some((label, tone)) => Self {
                label: label.to_string(),
                tone,
            },
            None => Self {
                label: status.to_string(),
                tone: Tone::Muted,
            },
        }
    }

    pub fn span(&self) -> Span {
        Span::new(format!("● {}", self.label)).tone(self.tone)
    }

    pub fn content(&self) -> Content {
        Content::from(self.span())
    }
}
