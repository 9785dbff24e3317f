use kvitta_core::store::override_store::OverrideStore;
use kvitta_core::{
    load_defaults, Amount, DataManager, EntityKind, Invoice, InvoiceCategory, Persona,
    SqliteOverrideStore, Transaction,
};
use tempfile::TempDir;

fn db_path(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("overrides.sqlite3")
}

#[test]
fn override_wins_over_base_record_with_same_identity() {
    let dir = TempDir::new().unwrap();
    let path = db_path(&dir);

    let base = load_defaults(Persona::Maja);
    let mut edited = base.invoices[0].clone();
    edited.amount = Amount::kronor(999);
    edited.status_override = Some("Disputed".to_string());

    // Persist the override as a prior session would have.
    let store = SqliteOverrideStore::open(&path).unwrap();
    store
        .save_records(Persona::Maja, EntityKind::Invoices, &[edited.clone()])
        .unwrap();
    drop(store);

    let manager = DataManager::new(SqliteOverrideStore::open(&path).unwrap(), Persona::Maja);
    let visible = &manager.invoices()[0];
    assert_eq!(visible, &edited);
    assert_eq!(visible.amount.to_string(), "999 kr");
    assert_eq!(visible.display_status(), "Disputed");
}

#[test]
fn base_records_without_overrides_stay_present_and_unchanged() {
    let dir = TempDir::new().unwrap();
    let path = db_path(&dir);

    let base = load_defaults(Persona::Maja);
    let mut edited = base.invoices[0].clone();
    edited.merchant = "Edited".to_string();

    let store = SqliteOverrideStore::open(&path).unwrap();
    store
        .save_records(Persona::Maja, EntityKind::Invoices, &[edited])
        .unwrap();
    drop(store);

    let manager = DataManager::new(SqliteOverrideStore::open(&path).unwrap(), Persona::Maja);
    assert_eq!(manager.invoices().len(), base.invoices.len());
    for (index, fixture) in base.invoices.iter().enumerate().skip(1) {
        assert_eq!(&manager.invoices()[index], fixture);
    }
}

#[test]
fn override_replaces_in_place_and_net_new_appends() {
    let store = SqliteOverrideStore::in_memory().unwrap();
    let mut manager = DataManager::new(store, Persona::Maja);

    let base = load_defaults(Persona::Maja);
    let edited_index = 2;
    let mut edited = base.invoices[edited_index].clone();
    edited.status = "Repriced".to_string();
    manager.save_invoice(edited.clone()).unwrap();

    // Position preserved for the replaced record.
    assert_eq!(manager.invoices()[edited_index], edited);

    let net_new = Invoice::new(
        "Clas Ohlson",
        Amount::kronor(329),
        3,
        InvoiceCategory::DueSoon,
    );
    manager.save_invoice(net_new.clone()).unwrap();
    assert_eq!(manager.invoices().last().unwrap(), &net_new);
    assert_eq!(manager.invoices().len(), base.invoices.len() + 1);
}

#[test]
fn reload_without_mutation_is_idempotent() {
    let store = SqliteOverrideStore::in_memory().unwrap();
    let mut manager = DataManager::new(store, Persona::Maja);

    let mut edited = manager.invoices()[1].clone();
    edited.status_override = Some("Snoozed".to_string());
    manager.save_invoice(edited).unwrap();

    manager.load();
    let first_pass: Vec<Invoice> = manager.invoices().to_vec();
    manager.load();
    assert_eq!(manager.invoices(), first_pass.as_slice());
}

#[test]
fn saving_a_record_identical_to_its_fixture_is_harmless() {
    let store = SqliteOverrideStore::in_memory().unwrap();
    let mut manager = DataManager::new(store, Persona::Maja);

    let untouched = manager.invoices()[0].clone();
    manager.save_invoice(untouched).unwrap();
    manager.load();

    let fixtures = load_defaults(Persona::Maja);
    assert_eq!(manager.invoices(), fixtures.invoices.as_slice());
}

#[test]
fn overrides_survive_a_new_store_instance_over_the_same_file() {
    let dir = TempDir::new().unwrap();
    let path = db_path(&dir);

    let mut first =
        DataManager::new(SqliteOverrideStore::open(&path).unwrap(), Persona::Maja);
    let added = Transaction::new("Cinema tickets", Amount::kronor(-280), -1);
    first.save_transaction(added.clone()).unwrap();
    drop(first);

    let second =
        DataManager::new(SqliteOverrideStore::open(&path).unwrap(), Persona::Maja);
    assert_eq!(second.transactions().last().unwrap(), &added);
}
