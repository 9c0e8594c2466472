//! SQLite-backed table store.
//!
//! Each logical table is a single JSON document in a key-value table, which
//! keeps the storage contract to read-all / write-all per table.

use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use super::{data_dir, TableStore};
use crate::error::StoreError;

/// SQLite database holding one row per logical table.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open the database at `<data dir>/focusxp.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the data directory is unusable or the database
    /// cannot be opened or migrated.
    pub fn open() -> Result<Self, StoreError> {
        let dir = data_dir().map_err(|e| StoreError::QueryFailed(e.to_string()))?;
        Self::open_at(dir.join("focusxp.db"))
    }

    /// Open (or create) the database at an explicit path.
    pub fn open_at(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|source| StoreError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    /// Open an in-memory database.
    pub fn open_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<(), StoreError> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS kv (
                    key        TEXT PRIMARY KEY,
                    value      TEXT NOT NULL,
                    updated_at TEXT NOT NULL
                );",
            )
            .map_err(|e| StoreError::MigrationFailed(e.to_string()))
    }
}

impl TableStore for SqliteStore {
    fn load(&self, table: &str) -> Result<Option<String>, StoreError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![table],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn save(&mut self, table: &str, contents: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)",
            params![table, contents, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_table_is_none() {
        let store = SqliteStore::open_memory().unwrap();
        assert!(store.load("projects").unwrap().is_none());
    }

    #[test]
    fn save_overwrites() {
        let mut store = SqliteStore::open_memory().unwrap();
        store.save("projects", "[]").unwrap();
        store.save("projects", "[1]").unwrap();
        assert_eq!(store.load("projects").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("focusxp.db");
        {
            let mut store = SqliteStore::open_at(&path).unwrap();
            store.save("xp_logs", "[]").unwrap();
        }
        let store = SqliteStore::open_at(&path).unwrap();
        assert_eq!(store.load("xp_logs").unwrap().as_deref(), Some("[]"));
    }
}
