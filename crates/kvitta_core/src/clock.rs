//! Deterministic demo clock.
//!
//! # Responsibility
//! - Resolve integer day offsets against a fixed anchor instant.
//! - Render relative ("Yesterday") and absolute ("Mar 9, 2025") date text.
//!
//! # Invariants
//! - `now()` returns the same instant for the whole process lifetime; demo
//!   data is authored relative to this anchor, not to the real calendar.
//! - Relative rendering works at day granularity only; the ±6 day window is
//!   inclusive, everything further renders as an absolute date.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;

/// Default pattern for absolute short dates, e.g. `Mar 9, 2025`.
pub const SHORT_DATE_PATTERN: &str = "%b %-d, %Y";

const RELATIVE_WINDOW_DAYS: i64 = 6;

static ANCHOR: Lazy<NaiveDateTime> = Lazy::new(|| {
    NaiveDate::from_ymd_opt(2025, 3, 14)
        .and_then(|date| date.and_hms_opt(9, 0, 0))
        .expect("anchor constant is a valid calendar date")
});

/// Returns the fixed anchor instant standing in for "now".
pub fn now() -> NaiveDateTime {
    *ANCHOR
}

/// Resolves a day offset into a calendar date relative to the anchor.
///
/// Negative offsets are valid and mean past dates. No bounds checking.
pub fn resolve(offset_days: i64) -> NaiveDate {
    now().date() + Duration::days(offset_days)
}

/// Formats a date with an explicit chrono pattern.
pub fn format_absolute(date: NaiveDate, pattern: &str) -> String {
    date.format(pattern).to_string()
}

/// Renders a day offset as relative text within ±6 days, absolute beyond.
///
/// Offsets of 7 or more days in either direction always render as an
/// absolute short date, never as "7 days ago".
pub fn format_relative(offset_days: i64) -> String {
    match offset_days {
        0 => "Today".to_string(),
        -1 => "Yesterday".to_string(),
        1 => "Tomorrow".to_string(),
        days if (-RELATIVE_WINDOW_DAYS..0).contains(&days) => {
            format!("{} days ago", -days)
        }
        days if (2..=RELATIVE_WINDOW_DAYS).contains(&days) => {
            format!("In {days} days")
        }
        days => format_absolute(resolve(days), SHORT_DATE_PATTERN),
    }
}
