//! Plain JSON file backend.

use std::path::{Path, PathBuf};

use super::{data_dir, StateStorage, STATE_KEY};
use crate::error::StorageError;

#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data_dir>/life_state_v3.json`
    pub fn open_default() -> Result<Self, StorageError> {
        Ok(Self::new(data_dir()?.join(format!("{STATE_KEY}.json"))))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where [`StateStorage::backup`] puts an unreadable blob.
    pub fn backup_path(&self) -> PathBuf {
        self.path.with_extension("json.unreadable")
    }
}

impl StateStorage for FileStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::ReadFailed(format!("{}: {e}", self.path.display()))),
        }
    }

    fn write(&mut self, blob: &str) -> Result<(), StorageError> {
        // Write beside the target and rename so a crash never leaves half a blob.
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, blob)
            .and_then(|_| std::fs::rename(&tmp, &self.path))
            .map_err(|e| StorageError::WriteFailed(format!("{}: {e}", self.path.display())))
    }

    fn backup(&mut self, blob: &str) -> Result<(), StorageError> {
        let path = self.backup_path();
        std::fs::write(&path, blob)
            .map_err(|e| StorageError::WriteFailed(format!("{}: {e}", path.display())))
    }
}
