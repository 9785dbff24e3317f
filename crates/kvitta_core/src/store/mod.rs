//! Persona-scoped store: override persistence and the merged data manager.
//!
//! # Responsibility
//! - Define the store error taxonomy and the override-over-base merge step.
//! - Host the durable override layer and the in-memory data manager.
//!
//! # Invariants
//! - Merge is keyed on `RecordId` only; an override replaces its base record
//!   in place (position preserved) or is appended when net-new.
//! - Deletion is not expressible: there is no tombstone concept, so a base
//!   record can never be removed by an override.

pub mod data_manager;
pub mod override_store;

use crate::db::DbError;
use crate::model::Record;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from the fallible (write-side) store surface.
///
/// Reads are total by design and never produce these.
#[derive(Debug)]
pub enum StoreError {
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// Override snapshot could not be JSON-encoded.
    Encode(serde_json::Error),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode override snapshot: {err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "override store requires schema version {expected_version}, got {actual_version}"
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Applies override records onto a base collection, override-over-base.
///
/// For each override: replace the base record sharing its identity in place,
/// else append. Base records with no matching override stay unchanged.
pub(crate) fn merge_overrides<T: Record>(base: &mut Vec<T>, overrides: Vec<T>) {
    for record in overrides {
        let id = record.record_id();
        match base.iter_mut().find(|existing| existing.record_id() == id) {
            Some(slot) => *slot = record,
            None => base.push(record),
        }
    }
}

/// Replaces a record by identity, else appends it. Returns the position the
/// record landed in.
pub(crate) fn upsert_by_id<T: Record>(collection: &mut Vec<T>, record: T) -> usize {
    let id = record.record_id();
    match collection
        .iter()
        .position(|existing| existing.record_id() == id)
    {
        Some(index) => {
            collection[index] = record;
            index
        }
        None => {
            collection.push(record);
            collection.len() - 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{merge_overrides, upsert_by_id};
    use crate::model::{Record, RecordId};
    use uuid::Uuid;

    #[derive(Debug, Clone, PartialEq)]
    struct Stub {
        id: RecordId,
        label: &'static str,
    }

    impl Record for Stub {
        fn record_id(&self) -> RecordId {
            self.id
        }
    }

    fn stub(label: &'static str) -> Stub {
        Stub {
            id: Uuid::new_v4(),
            label,
        }
    }

    #[test]
    fn merge_replaces_in_place_and_appends_net_new() {
        let a = stub("a");
        let b = stub("b");
        let mut base = vec![a.clone(), b.clone()];

        let a_edited = Stub {
            id: a.id,
            label: "a-edited",
        };
        let c = stub("c");
        merge_overrides(&mut base, vec![a_edited.clone(), c.clone()]);

        assert_eq!(base, vec![a_edited, b, c]);
    }

    #[test]
    fn merge_with_no_overrides_is_identity() {
        let mut base = vec![stub("a"), stub("b")];
        let snapshot = base.clone();
        merge_overrides(&mut base, Vec::new());
        assert_eq!(base, snapshot);
    }

    #[test]
    fn upsert_keeps_position_on_replace() {
        let a = stub("a");
        let b = stub("b");
        let mut collection = vec![a.clone(), b.clone()];

        let b_edited = Stub {
            id: b.id,
            label: "b-edited",
        };
        assert_eq!(upsert_by_id(&mut collection, b_edited.clone()), 1);
        assert_eq!(collection, vec![a, b_edited]);

        let c = stub("c");
        assert_eq!(upsert_by_id(&mut collection, c), 2);
    }
}
