//! Invoice account (installment plan) domain record.
//!
//! # Responsibility
//! - Define the running financing plan shown on account detail screens.
//! - Provide the autopay-source substring match used for merchant
//!   attribution.
//!
//! # Invariants
//! - `id` is stable and never reused for another account.
//! - `progress` is expected in `0.0..=1.0` but producers are not policed;
//!   presenters should read `clamped_progress()`.

use crate::model::amount::Amount;
use crate::model::{Record, RecordId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Canonical invoice account record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceAccount {
    /// Stable global ID used as the override merge key.
    pub id: RecordId,
    pub title: String,
    pub subtitle: String,
    /// Remaining balance shown in list rows.
    pub amount: Amount,
    /// Fraction of the plan paid off. Loosely 0.0–1.0, not enforced.
    pub progress: f64,
    pub installment_amount: Amount,
    pub total_amount: Amount,
    pub payments_made: u32,
    pub payments_total: u32,
    /// Display string for the next charge date.
    pub next_due_date: String,
    /// Funding-source label, matched by substring for merchant attribution.
    pub autopay_source: String,
}

impl InvoiceAccount {
    /// Creates a new account with a generated stable ID.
    pub fn new(title: impl Into<String>, amount: Amount, total_amount: Amount) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            subtitle: String::new(),
            amount,
            progress: 0.0,
            installment_amount: Amount::kronor(0),
            total_amount,
            payments_made: 0,
            payments_total: 0,
            next_due_date: String::new(),
            autopay_source: String::new(),
        }
    }

    /// Returns `progress` clamped into `0.0..=1.0` for presentation.
    pub fn clamped_progress(&self) -> f64 {
        self.progress.clamp(0.0, 1.0)
    }

    /// Case-insensitive substring match against the autopay-source label.
    ///
    /// Used to attribute an account to a merchant when no explicit link
    /// exists in the data.
    pub fn matches_autopay_source(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return false;
        }
        self.autopay_source
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }
}

impl Record for InvoiceAccount {
    fn record_id(&self) -> RecordId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::InvoiceAccount;
    use crate::model::amount::Amount;

    #[test]
    fn progress_is_clamped_for_presentation() {
        let mut account =
            InvoiceAccount::new("Soffa", Amount::kronor(4_000), Amount::kronor(12_000));
        account.progress = 1.4;
        assert_eq!(account.clamped_progress(), 1.0);
        account.progress = -0.2;
        assert_eq!(account.clamped_progress(), 0.0);
    }

    #[test]
    fn autopay_match_is_case_insensitive_substring() {
        let mut account =
            InvoiceAccount::new("TV", Amount::kronor(7_500), Amount::kronor(15_000));
        account.autopay_source = "Autogiro via Elgiganten".to_string();

        assert!(account.matches_autopay_source("elgiganten"));
        assert!(account.matches_autopay_source("ELGIGANTEN"));
        assert!(!account.matches_autopay_source("mediamarkt"));
        assert!(!account.matches_autopay_source(""));
    }
}
