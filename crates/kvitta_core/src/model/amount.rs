//! Monetary amount model.
//!
//! # Responsibility
//! - Hold money as integer minor units plus a currency, never as a display
//!   string.
//! - Render the display string (`1 245 kr`) only at the formatting boundary.
//!
//! # Invariants
//! - `minor_units` is exact; no floating point anywhere in money handling.
//! - Arithmetic across different currencies is rejected, not coerced.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Supported display currencies for the prototype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Currency {
    /// Swedish krona, rendered as `N kr` with space-grouped thousands.
    Sek,
    /// Euro, rendered as `€N`.
    Eur,
    /// US dollar, rendered as `$N`.
    Usd,
}

/// Exact monetary value in minor units (öre/cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Amount {
    /// Value in the currency's smallest unit. Negative values are valid
    /// (refunds render with a leading minus).
    pub minor_units: i64,
    pub currency: Currency,
}

impl Amount {
    pub const fn new(minor_units: i64, currency: Currency) -> Self {
        Self {
            minor_units,
            currency,
        }
    }

    /// Convenience constructor for whole kronor, the dominant fixture case.
    pub const fn kronor(whole: i64) -> Self {
        Self::new(whole * 100, Currency::Sek)
    }

    /// Adds two amounts of the same currency.
    ///
    /// Returns `None` on currency mismatch or integer overflow; consumers
    /// that aggregate ("sum of all due amounts") build on this primitive.
    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        if self.currency != other.currency {
            return None;
        }
        let minor_units = self.minor_units.checked_add(other.minor_units)?;
        Some(Amount::new(minor_units, self.currency))
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let negative = self.minor_units < 0;
        let magnitude = self.minor_units.unsigned_abs();
        let whole = group_thousands(magnitude / 100);
        let fraction = magnitude % 100;
        let sign = if negative { "-" } else { "" };

        match self.currency {
            Currency::Sek => {
                if fraction == 0 {
                    write!(f, "{sign}{whole} kr")
                } else {
                    write!(f, "{sign}{whole},{fraction:02} kr")
                }
            }
            Currency::Eur => {
                if fraction == 0 {
                    write!(f, "{sign}€{whole}")
                } else {
                    write!(f, "{sign}€{whole}.{fraction:02}")
                }
            }
            Currency::Usd => {
                if fraction == 0 {
                    write!(f, "{sign}${whole}")
                } else {
                    write!(f, "{sign}${whole}.{fraction:02}")
                }
            }
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;

    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && index % 3 == offset % 3 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    grouped
}
