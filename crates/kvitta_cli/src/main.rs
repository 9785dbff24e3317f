//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `kvitta_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use kvitta_core::{load_defaults, Persona};

fn main() {
    println!("kvitta_core ping={}", kvitta_core::ping());
    println!("kvitta_core version={}", kvitta_core::core_version());

    for persona in Persona::ALL {
        let defaults = load_defaults(persona);
        println!(
            "persona={persona} invoices={} transactions={} invoice_accounts={}",
            defaults.invoices.len(),
            defaults.transactions.len(),
            defaults.invoice_accounts.len()
        );
    }
}
