//! Transaction domain record.
//!
//! # Responsibility
//! - Define purchase/payment rows shown in account and activity feeds.
//!
//! # Invariants
//! - `id` is stable and never reused for another transaction.
//! - `account_id`, when set, should reference an invoice account in the same
//!   persona. The store does not enforce this; a dangling reference simply
//!   matches nothing on lookup.

use crate::model::amount::Amount;
use crate::model::{Record, RecordId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Optional classification for transaction rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransactionCategory {
    Purchase,
    Payment,
    Refund,
    Other,
}

/// Canonical transaction record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Stable global ID used as the override merge key.
    pub id: RecordId,
    pub description: String,
    pub amount: Amount,
    /// Days from the anchor date. Negative means in the past.
    pub offset_days: i64,
    /// Presentation hint for amount color, carried through untouched.
    pub amount_tint: String,
    #[serde(default)]
    pub merchant: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub category: Option<TransactionCategory>,
    /// Foreign key into the persona's invoice accounts.
    #[serde(default)]
    pub account_id: Option<RecordId>,
}

impl Transaction {
    /// Creates a new transaction with a generated stable ID and no optional
    /// metadata set.
    pub fn new(description: impl Into<String>, amount: Amount, offset_days: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount,
            offset_days,
            amount_tint: "primary".to_string(),
            merchant: None,
            payment_method: None,
            category: None,
            account_id: None,
        }
    }
}

impl Record for Transaction {
    fn record_id(&self) -> RecordId {
        self.id
    }
}
