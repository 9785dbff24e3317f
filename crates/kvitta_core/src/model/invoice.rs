//! Invoice domain record.
//!
//! # Responsibility
//! - Define the canonical invoice shape shared by fixtures and overrides.
//! - Expose the status-override precedence rule used by detail screens.
//!
//! # Invariants
//! - `id` is stable and never reused for another invoice.
//! - `category` is a stored fact assigned by the record author; the store
//!   never recomputes it from due dates.

use crate::model::amount::Amount;
use crate::model::{Record, RecordId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Query/filter tag assigned to every invoice at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InvoiceCategory {
    /// Past due and still unpaid.
    Overdue,
    /// Upcoming within the merchant's due window.
    DueSoon,
    /// Handled: payment scheduled but not yet executed.
    HandledScheduled,
    /// Handled: payment completed.
    HandledPaid,
}

/// Canonical invoice record.
///
/// Dates are integer day offsets from the demo clock anchor, never absolute
/// timestamps, so fixtures stay stable regardless of when the app runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Stable global ID used as the override merge key.
    pub id: RecordId,
    pub merchant: String,
    pub amount: Amount,
    /// Days from the anchor until due. Negative means already past due.
    pub due_offset_days: i64,
    /// Days from the anchor at which the invoice was issued.
    pub issued_offset_days: i64,
    /// Baseline status text authored with the record.
    pub status: String,
    /// User-introduced status that supersedes `status` when present.
    #[serde(default)]
    pub status_override: Option<String>,
    pub category: InvoiceCategory,
    pub is_overdue: bool,
    /// Presentation hints carried through untouched by the store.
    pub icon: String,
    pub tint: String,
}

impl Invoice {
    /// Creates a new invoice with a generated stable ID and default
    /// presentation hints.
    pub fn new(
        merchant: impl Into<String>,
        amount: Amount,
        due_offset_days: i64,
        category: InvoiceCategory,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            merchant: merchant.into(),
            amount,
            due_offset_days,
            issued_offset_days: due_offset_days - 14,
            status: String::new(),
            status_override: None,
            category,
            is_overdue: matches!(category, InvoiceCategory::Overdue),
            icon: "doc.text".to_string(),
            tint: "accent".to_string(),
        }
    }

    /// Returns the status to display: the override when set, else the
    /// authored status.
    pub fn display_status(&self) -> &str {
        self.status_override.as_deref().unwrap_or(&self.status)
    }
}

impl Record for Invoice {
    fn record_id(&self) -> RecordId {
        self.id
    }
}
