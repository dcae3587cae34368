//! Durable storage for the application state and configuration.
//!
//! The whole [`crate::AppState`] is written as one JSON blob under a fixed
//! key. Backends implement [`StateStorage`]; the store reads once at open
//! and rewrites the full blob after every change.

mod config;
pub mod database;
mod file;

pub use config::{Config, GrammarConfig, LogConfig, NotificationsConfig, StorageBackend, StorageConfig};
pub use database::SqliteStorage;
pub use file::FileStorage;

use std::path::PathBuf;

use crate::error::StorageError;

/// Key the state blob is stored under.
pub const STATE_KEY: &str = "life_state_v3";

/// Key an unreadable blob is moved to before it is overwritten.
pub const BACKUP_KEY: &str = "life_state_v3.unreadable";

/// Persistence port for the state blob.
pub trait StateStorage {
    /// The stored blob, or `None` if nothing has been written yet.
    fn read(&self) -> Result<Option<String>, StorageError>;

    /// Replace the stored blob.
    fn write(&mut self, blob: &str) -> Result<(), StorageError>;

    /// Keep a copy of a blob that could not be loaded, out of the way of
    /// the next [`StateStorage::write`].
    fn backup(&mut self, blob: &str) -> Result<(), StorageError>;
}

impl<S: StateStorage + ?Sized> StateStorage for Box<S> {
    fn read(&self) -> Result<Option<String>, StorageError> {
        (**self).read()
    }

    fn write(&mut self, blob: &str) -> Result<(), StorageError> {
        (**self).write(blob)
    }

    fn backup(&mut self, blob: &str) -> Result<(), StorageError> {
        (**self).backup(blob)
    }
}

/// In-memory backend. Nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    blob: Option<String>,
    backup: Option<String>,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing blob, as if loaded from disk.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
            ..Self::default()
        }
    }

    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }

    pub fn backup_blob(&self) -> Option<&str> {
        self.backup.as_deref()
    }

    /// Number of writes since creation.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl StateStorage for MemoryStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.blob.clone())
    }

    fn write(&mut self, blob: &str) -> Result<(), StorageError> {
        self.blob = Some(blob.to_string());
        self.writes += 1;
        Ok(())
    }

    fn backup(&mut self, blob: &str) -> Result<(), StorageError> {
        self.backup = Some(blob.to_string());
        Ok(())
    }
}

/// Returns `~/.config/lifetrack[-dev]/`.
///
/// `LIFETRACK_HOME` overrides the location entirely. Otherwise
/// `LIFETRACK_ENV=dev` selects the development directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = match std::env::var_os("LIFETRACK_HOME") {
        Some(home) => PathBuf::from(home),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("LIFETRACK_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("lifetrack-dev")
            } else {
                base_dir.join("lifetrack")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|e| StorageError::NoDataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_counts_writes() {
        let mut storage = MemoryStorage::new();
        assert!(storage.read().unwrap().is_none());
        storage.write("{}").unwrap();
        storage.write("{\"darkMode\":true}").unwrap();
        assert_eq!(storage.writes(), 2);
        assert_eq!(storage.read().unwrap().as_deref(), Some("{\"darkMode\":true}"));
    }
}
