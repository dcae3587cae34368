//! SQLite-backed state storage.
//!
//! Keeps a small key-value table; the state blob lives under
//! [`STATE_KEY`]. The same table can hold other application values.

use std::path::Path;

use rusqlite::{params, Connection};

use super::{data_dir, StateStorage, BACKUP_KEY, STATE_KEY};
use crate::error::StorageError;

/// SQLite database holding the state blob.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Open the database at `~/.config/lifetrack/lifetrack.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open_default() -> Result<Self, StorageError> {
        Self::open(data_dir()?.join("lifetrack.db"))
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|e| StorageError::OpenFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), StorageError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, rusqlite::Error> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}

impl StateStorage for SqliteStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.kv_get(STATE_KEY)?)
    }

    fn write(&mut self, blob: &str) -> Result<(), StorageError> {
        self.kv_set(STATE_KEY, blob)
            .map_err(|e| StorageError::WriteFailed(e.to_string()))
    }

    fn backup(&mut self, blob: &str) -> Result<(), StorageError> {
        self.kv_set(BACKUP_KEY, blob)
            .map_err(|e| StorageError::WriteFailed(e.to_string()))
    }
}
