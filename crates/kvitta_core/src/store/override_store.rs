//! Durable override layer over the SQLite key-value table.
//!
//! # Responsibility
//! - Persist full-collection override snapshots per (persona, entity kind).
//! - Fail open on reads: a missing or malformed snapshot loads as empty.
//!
//! # Invariants
//! - Storage rows are namespaced by persona and entity kind; personas never
//!   observe each other's snapshots.
//! - `save_records` replaces the whole stored list (last write wins), it is
//!   not an append log.

use crate::db::migrations::{current_user_version, latest_version};
use crate::model::persona::Persona;
use crate::model::EntityKind;
use crate::store::{StoreError, StoreResult};
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Durable record of user-introduced changes, independent of fixtures.
///
/// The seam is a trait so the data manager can be exercised against other
/// backings in tests.
pub trait OverrideStore {
    /// Loads the override snapshot for `(persona, kind)`.
    ///
    /// Total: a missing row, storage error or decode failure yields an empty
    /// list (logged), never an error.
    fn load_records<T: DeserializeOwned>(&self, persona: Persona, kind: EntityKind) -> Vec<T>;

    /// Replaces the full stored snapshot for `(persona, kind)`.
    fn save_records<T: Serialize>(
        &self,
        persona: Persona,
        kind: EntityKind,
        records: &[T],
    ) -> StoreResult<()>;

    /// Removes the persisted snapshot, reverting `(persona, kind)` to no
    /// overrides.
    fn clear(&self, persona: Persona, kind: EntityKind) -> StoreResult<()>;
}

/// SQLite-backed override store owning its migrated connection.
pub struct SqliteOverrideStore {
    conn: Connection,
}

impl SqliteOverrideStore {
    /// Wraps a connection after verifying the schema is fully migrated.
    pub fn try_new(conn: Connection) -> StoreResult<Self> {
        let expected_version = latest_version();
        let actual_version = current_user_version(&conn)?;
        if actual_version != expected_version {
            return Err(StoreError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }
        Ok(Self { conn })
    }

    /// Opens (or creates) the override database at `path`.
    pub fn open(path: impl AsRef<std::path::Path>) -> StoreResult<Self> {
        Self::try_new(crate::db::open_db(path)?)
    }

    /// Opens a throwaway in-memory override store.
    pub fn in_memory() -> StoreResult<Self> {
        Self::try_new(crate::db::open_db_in_memory()?)
    }
}

impl OverrideStore for SqliteOverrideStore {
    fn load_records<T: DeserializeOwned>(&self, persona: Persona, kind: EntityKind) -> Vec<T> {
        let row: Result<Option<String>, rusqlite::Error> = self
            .conn
            .query_row(
                "SELECT payload FROM overrides WHERE persona = ?1 AND entity_kind = ?2;",
                params![persona.as_str(), kind.as_str()],
                |row| row.get(0),
            )
            .optional();

        let payload = match row {
            Ok(Some(payload)) => payload,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(
                    "event=override_load module=store status=error persona={persona} kind={kind} error={err}"
                );
                return Vec::new();
            }
        };

        match serde_json::from_str(&payload) {
            Ok(records) => records,
            Err(err) => {
                // Malformed snapshots are discarded for this load cycle, not
                // auto-repaired.
                warn!(
                    "event=override_decode module=store status=error persona={persona} kind={kind} error={err}"
                );
                Vec::new()
            }
        }
    }

    fn save_records<T: Serialize>(
        &self,
        persona: Persona,
        kind: EntityKind,
        records: &[T],
    ) -> StoreResult<()> {
        let payload = serde_json::to_string(records).map_err(StoreError::Encode)?;
        self.conn.execute(
            "INSERT INTO overrides (persona, entity_kind, payload)
             VALUES (?1, ?2, ?3)
             ON CONFLICT (persona, entity_kind) DO UPDATE SET
                payload = excluded.payload,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![persona.as_str(), kind.as_str(), payload],
        )?;
        Ok(())
    }

    fn clear(&self, persona: Persona, kind: EntityKind) -> StoreResult<()> {
        self.conn.execute(
            "DELETE FROM overrides WHERE persona = ?1 AND entity_kind = ?2;",
            params![persona.as_str(), kind.as_str()],
        )?;
        Ok(())
    }
}
