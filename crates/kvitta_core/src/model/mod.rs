//! Domain records for the financing prototype.
//!
//! # Responsibility
//! - Define canonical record types shared by fixtures, overrides and queries.
//! - Define the identity contract the merge protocol keys on.
//!
//! # Invariants
//! - Every record carries a stable `RecordId` assigned at creation and never
//!   reassigned. Identity is the sole merge key between layers.
//! - Records are value types; the store replaces whole records, never fields.

pub mod amount;
pub mod invoice;
pub mod invoice_account;
pub mod persona;
pub mod transaction;

use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// The three record collections managed by the store.
///
/// `as_str()` values are baked into persisted override rows and fixture
/// lookup; they must never change meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Invoices,
    Transactions,
    InvoiceAccounts,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [
        EntityKind::Invoices,
        EntityKind::Transactions,
        EntityKind::InvoiceAccounts,
    ];

    /// Stable key used in storage namespacing and fixture lookup.
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Invoices => "invoices",
            EntityKind::Transactions => "transactions",
            EntityKind::InvoiceAccounts => "invoice_accounts",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable identifier shared by all persisted record kinds.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RecordId = Uuid;

/// Identity contract for records that participate in override merging.
pub trait Record {
    /// Returns the stable merge identity of this record.
    fn record_id(&self) -> RecordId;
}
