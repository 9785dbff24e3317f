//! Persona identity.
//!
//! # Responsibility
//! - Name the simulated users shipped with the prototype.
//! - Provide the stable storage key used to namespace fixtures and
//!   overrides.
//!
//! # Invariants
//! - `as_str()` values are stable; they are baked into persisted override
//!   rows and must never change meaning.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A named, isolated data namespace (one simulated user).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    /// Default demo user with a busy invoice inbox.
    Maja,
    /// Secondary demo user with mostly handled invoices.
    Viktor,
}

impl Persona {
    /// All personas bundled with the prototype, in presentation order.
    pub const ALL: [Persona; 2] = [Persona::Maja, Persona::Viktor];

    /// Stable key used in storage namespacing and fixture lookup.
    pub fn as_str(self) -> &'static str {
        match self {
            Persona::Maja => "maja",
            Persona::Viktor => "viktor",
        }
    }
}

impl Default for Persona {
    fn default() -> Self {
        Persona::Maja
    }
}

impl Display for Persona {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
