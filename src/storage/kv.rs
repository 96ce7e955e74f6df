//! File-backed key-value store.
//!
//! One file per logical key inside a single directory. Writes are
//! best-effort: a failed write is logged and dropped, never propagated;
//! the stored data is a local mirror the user can re-derive.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileKv {
    dir: PathBuf,
}

impl FileKv {
    /// Open (creating if needed) the store directory.
    pub fn open(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    /// Read a key's value. Missing keys are `None`; unreadable keys are
    /// logged and treated as missing.
    pub fn get(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Some(value),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!(key, %err, "failed to read stored value, treating as absent");
                None
            }
        }
    }

    /// Write a key's value, best-effort.
    pub fn set(&self, key: &str, value: &str) {
        if let Err(err) = fs::write(self.key_path(key), value) {
            tracing::warn!(key, %err, "dropping failed write");
        }
    }

    /// Remove a key. Removing an absent key is not an error.
    pub fn remove(&self, key: &str) {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => tracing::warn!(key, %err, "failed to remove stored value"),
        }
    }
}
