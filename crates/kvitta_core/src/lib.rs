//! Core data logic for the Kvitta financing prototype.
//! This crate is the single source of truth for store invariants.

pub mod clock;
pub mod db;
pub mod fixtures;
pub mod logging;
pub mod model;
pub mod store;

pub use fixtures::{load_defaults, DefaultCollections};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::amount::{Amount, Currency};
pub use model::invoice::{Invoice, InvoiceCategory};
pub use model::invoice_account::InvoiceAccount;
pub use model::persona::Persona;
pub use model::transaction::{Transaction, TransactionCategory};
pub use model::{EntityKind, Record, RecordId};
pub use store::data_manager::DataManager;
pub use store::override_store::{OverrideStore, SqliteOverrideStore};
pub use store::{StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
