//! Bundled baseline data, one JSON document per persona and entity kind.
//!
//! # Responsibility
//! - Decode the embedded fixture documents for the requested persona.
//! - Fail open: a malformed document yields an empty collection for that
//!   entity kind only, never an error.
//!
//! # Invariants
//! - Fixture records use day offsets, never absolute dates, so data stays
//!   stable regardless of when the app runs.
//! - Loading is total: it never panics and never returns `Err`.

use crate::model::invoice::Invoice;
use crate::model::invoice_account::InvoiceAccount;
use crate::model::persona::Persona;
use crate::model::transaction::Transaction;
use crate::model::EntityKind;
use log::warn;
use serde::Deserialize;

/// Wire shape of one fixture document.
///
/// Every document carries all three arrays even though a given file
/// conventionally populates only one; the unused arrays stay empty.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct FixtureDocument {
    invoices: Vec<Invoice>,
    transactions: Vec<Transaction>,
    invoice_accounts: Vec<InvoiceAccount>,
}

/// Baseline collections for one persona.
#[derive(Debug, Default)]
pub struct DefaultCollections {
    pub invoices: Vec<Invoice>,
    pub transactions: Vec<Transaction>,
    pub invoice_accounts: Vec<InvoiceAccount>,
}

/// Loads the three baseline collections for `persona`.
///
/// Partial failure in one document does not block the other two.
pub fn load_defaults(persona: Persona) -> DefaultCollections {
    DefaultCollections {
        invoices: decode_document(persona, EntityKind::Invoices).invoices,
        transactions: decode_document(persona, EntityKind::Transactions).transactions,
        invoice_accounts: decode_document(persona, EntityKind::InvoiceAccounts).invoice_accounts,
    }
}

fn decode_document(persona: Persona, kind: EntityKind) -> FixtureDocument {
    let source = fixture_source(persona, kind);
    match serde_json::from_str(source) {
        Ok(document) => document,
        Err(err) => {
            warn!(
                "event=fixture_decode module=fixtures status=error persona={persona} kind={kind} error={err}"
            );
            FixtureDocument::default()
        }
    }
}

fn fixture_source(persona: Persona, kind: EntityKind) -> &'static str {
    match (persona, kind) {
        (Persona::Maja, EntityKind::Invoices) => include_str!("data/maja_invoices.json"),
        (Persona::Maja, EntityKind::Transactions) => include_str!("data/maja_transactions.json"),
        (Persona::Maja, EntityKind::InvoiceAccounts) => {
            include_str!("data/maja_invoice_accounts.json")
        }
        (Persona::Viktor, EntityKind::Invoices) => include_str!("data/viktor_invoices.json"),
        (Persona::Viktor, EntityKind::Transactions) => {
            include_str!("data/viktor_transactions.json")
        }
        (Persona::Viktor, EntityKind::InvoiceAccounts) => {
            include_str!("data/viktor_invoice_accounts.json")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::load_defaults;
    use crate::model::invoice::InvoiceCategory;
    use crate::model::persona::Persona;
    use std::collections::HashSet;

    #[test]
    fn every_persona_decodes_cleanly() {
        for persona in Persona::ALL {
            let defaults = load_defaults(persona);
            assert!(!defaults.invoices.is_empty(), "persona {persona} invoices");
            assert!(
                !defaults.transactions.is_empty(),
                "persona {persona} transactions"
            );
            assert!(
                !defaults.invoice_accounts.is_empty(),
                "persona {persona} accounts"
            );
        }
    }

    #[test]
    fn fixture_ids_are_unique_within_a_persona() {
        for persona in Persona::ALL {
            let defaults = load_defaults(persona);
            let mut seen = HashSet::new();
            for invoice in &defaults.invoices {
                assert!(seen.insert(invoice.id), "duplicate invoice id {}", invoice.id);
            }
            for transaction in &defaults.transactions {
                assert!(
                    seen.insert(transaction.id),
                    "duplicate transaction id {}",
                    transaction.id
                );
            }
            for account in &defaults.invoice_accounts {
                assert!(seen.insert(account.id), "duplicate account id {}", account.id);
            }
        }
    }

    #[test]
    fn maja_fixtures_cover_all_invoice_categories() {
        let defaults = load_defaults(Persona::Maja);
        let categories: HashSet<_> = defaults
            .invoices
            .iter()
            .map(|invoice| invoice.category)
            .collect();
        for expected in [
            InvoiceCategory::Overdue,
            InvoiceCategory::DueSoon,
            InvoiceCategory::HandledScheduled,
            InvoiceCategory::HandledPaid,
        ] {
            assert!(categories.contains(&expected), "missing {expected:?}");
        }
    }

    #[test]
    fn transaction_account_links_resolve_within_the_persona() {
        for persona in Persona::ALL {
            let defaults = load_defaults(persona);
            let account_ids: HashSet<_> = defaults
                .invoice_accounts
                .iter()
                .map(|account| account.id)
                .collect();
            for transaction in &defaults.transactions {
                if let Some(account_id) = transaction.account_id {
                    assert!(
                        account_ids.contains(&account_id),
                        "dangling account link on `{}`",
                        transaction.description
                    );
                }
            }
        }
    }
}
