//! Merged in-memory store for the active persona.
//!
//! # Responsibility
//! - Compose fixture baselines with persisted overrides into the live
//!   collections every screen reads.
//! - Funnel all reads and writes through one handle; persist each mutation
//!   as a full-collection override snapshot.
//!
//! # Invariants
//! - Construct once at application start and pass by handle; there is no
//!   process-wide singleton.
//! - Single logical owner: mutations take `&mut self` and there is no
//!   internal locking. Cross-thread use requires external mutual exclusion,
//!   since merge-then-replace is not safe under concurrent writers.
//! - Queries are pure projections over the merged state and never fail.

use crate::fixtures::load_defaults;
use crate::model::invoice::{Invoice, InvoiceCategory};
use crate::model::invoice_account::InvoiceAccount;
use crate::model::persona::Persona;
use crate::model::transaction::Transaction;
use crate::model::{EntityKind, RecordId};
use crate::store::override_store::OverrideStore;
use crate::store::{merge_overrides, upsert_by_id, StoreResult};
use log::info;

/// Observer invoked after a collection changes.
pub type ChangeListener = Box<dyn Fn(EntityKind)>;

/// Single source of truth for the active persona's merged records.
pub struct DataManager<S: OverrideStore> {
    store: S,
    persona: Persona,
    invoices: Vec<Invoice>,
    transactions: Vec<Transaction>,
    invoice_accounts: Vec<InvoiceAccount>,
    listeners: Vec<ChangeListener>,
}

impl<S: OverrideStore> DataManager<S> {
    /// Creates a manager over `store` and runs the load protocol for
    /// `persona`.
    pub fn new(store: S, persona: Persona) -> Self {
        let mut manager = Self {
            store,
            persona,
            invoices: Vec::new(),
            transactions: Vec::new(),
            invoice_accounts: Vec::new(),
            listeners: Vec::new(),
        };
        manager.load();
        manager
    }

    /// Returns the active persona.
    pub fn persona(&self) -> Persona {
        self.persona
    }

    /// Runs the load protocol: fixtures first, then the persona's override
    /// snapshots merged override-over-base by identity.
    ///
    /// Total: fixture or override decode failures degrade to empty inputs
    /// upstream, so loading always lands in a usable state.
    pub fn load(&mut self) {
        let defaults = load_defaults(self.persona);

        self.invoices = defaults.invoices;
        merge_overrides(
            &mut self.invoices,
            self.store.load_records(self.persona, EntityKind::Invoices),
        );

        self.transactions = defaults.transactions;
        merge_overrides(
            &mut self.transactions,
            self.store
                .load_records(self.persona, EntityKind::Transactions),
        );

        self.invoice_accounts = defaults.invoice_accounts;
        merge_overrides(
            &mut self.invoice_accounts,
            self.store
                .load_records(self.persona, EntityKind::InvoiceAccounts),
        );

        info!(
            "event=store_load module=store status=ok persona={} invoices={} transactions={} invoice_accounts={}",
            self.persona,
            self.invoices.len(),
            self.transactions.len(),
            self.invoice_accounts.len()
        );
        self.notify_all();
    }

    /// Clears the active persona's override snapshots and reloads from
    /// fixtures only. Other personas are untouched.
    pub fn reset(&mut self) -> StoreResult<()> {
        for kind in EntityKind::ALL {
            self.store.clear(self.persona, kind)?;
        }
        info!(
            "event=store_reset module=store status=ok persona={}",
            self.persona
        );
        self.load();
        Ok(())
    }

    /// Switches the active persona and re-runs the load protocol.
    ///
    /// The previous persona's in-memory state is discarded; its persisted
    /// overrides remain for when it is switched back.
    pub fn switch_persona(&mut self, persona: Persona) {
        if persona == self.persona {
            return;
        }
        info!(
            "event=persona_switch module=store status=ok from={} to={persona}",
            self.persona
        );
        self.persona = persona;
        self.load();
    }

    /// Upserts an invoice and persists the full invoice collection as the
    /// override snapshot. Each save is a standalone commit.
    pub fn save_invoice(&mut self, invoice: Invoice) -> StoreResult<()> {
        upsert_by_id(&mut self.invoices, invoice);
        self.store
            .save_records(self.persona, EntityKind::Invoices, &self.invoices)?;
        self.committed(EntityKind::Invoices, self.invoices.len());
        Ok(())
    }

    /// Upserts a transaction and persists the full transaction collection.
    pub fn save_transaction(&mut self, transaction: Transaction) -> StoreResult<()> {
        upsert_by_id(&mut self.transactions, transaction);
        self.store
            .save_records(self.persona, EntityKind::Transactions, &self.transactions)?;
        self.committed(EntityKind::Transactions, self.transactions.len());
        Ok(())
    }

    /// Upserts an invoice account and persists the full account collection.
    pub fn save_invoice_account(&mut self, account: InvoiceAccount) -> StoreResult<()> {
        upsert_by_id(&mut self.invoice_accounts, account);
        self.store.save_records(
            self.persona,
            EntityKind::InvoiceAccounts,
            &self.invoice_accounts,
        )?;
        self.committed(EntityKind::InvoiceAccounts, self.invoice_accounts.len());
        Ok(())
    }

    /// Full merged invoice collection, in load/merge order.
    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    /// Full merged transaction collection, in load/merge order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Full merged invoice account collection, in load/merge order.
    pub fn invoice_accounts(&self) -> &[InvoiceAccount] {
        &self.invoice_accounts
    }

    /// Invoices whose category equals `category`, relative order preserved.
    ///
    /// Not re-sorted by date; consumers compose composites ("overdue plus
    /// due soon") from this primitive.
    pub fn invoices_by_category(&self, category: InvoiceCategory) -> Vec<Invoice> {
        self.invoices
            .iter()
            .filter(|invoice| invoice.category == category)
            .cloned()
            .collect()
    }

    /// Transactions linked to `account_id`, order preserved.
    ///
    /// A dangling or unknown id yields an empty list; absence is a valid
    /// outcome, not a failure.
    pub fn transactions_for_account(&self, account_id: RecordId) -> Vec<Transaction> {
        self.transactions
            .iter()
            .filter(|transaction| transaction.account_id == Some(account_id))
            .cloned()
            .collect()
    }

    /// First invoice account with the given identity, if any.
    pub fn invoice_account(&self, id: RecordId) -> Option<InvoiceAccount> {
        self.invoice_accounts
            .iter()
            .find(|account| account.id == id)
            .cloned()
    }

    /// Registers an observer fired after a collection changes.
    pub fn subscribe(&mut self, listener: impl Fn(EntityKind) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn committed(&self, kind: EntityKind, len: usize) {
        info!(
            "event=store_save module=store status=ok persona={} kind={kind} records={len}",
            self.persona
        );
        self.notify(kind);
    }

    fn notify(&self, kind: EntityKind) {
        for listener in &self.listeners {
            listener(kind);
        }
    }

    fn notify_all(&self) {
        for kind in EntityKind::ALL {
            self.notify(kind);
        }
    }
}
