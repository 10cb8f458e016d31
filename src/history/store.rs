use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use fs2::FileExt;
use tracing::debug;

use super::types::HistoryEntry;
use crate::error::HistoryError;

/// Distinguishes temp files of writers within one process.
static TMP_SEQUENCE: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// # Errors
    ///
    /// Returns [`HistoryError::Missing`] when no history has been written yet
    /// and [`HistoryError::Corrupt`] when the file is not a JSON array of
    /// entries.
    pub fn load(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(HistoryError::Missing {
                    path: self.path.clone(),
                });
            }
            Err(err) => {
                return Err(HistoryError::Read {
                    path: self.path.clone(),
                    source: err,
                });
            }
        };
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&content).map_err(|err| HistoryError::Corrupt {
            path: self.path.clone(),
            source: err,
        })
    }

    /// Appends one entry. An exclusive lock on a sibling `.lock` file is
    /// held across load, push and rename, so concurrent invocations never
    /// drop each other's entries. The log is rewritten through a temp file
    /// and renamed into place, so readers never see a half-written array.
    ///
    /// # Errors
    ///
    /// Returns an error when the lock cannot be taken, when the existing log
    /// is unreadable or corrupt (it is left untouched), or when the new log
    /// cannot be written.
    pub fn append(&self, entry: HistoryEntry) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|err| HistoryError::CreateDir {
                path: parent.to_path_buf(),
                source: err,
            })?;
        }

        let lock_path = self.sibling_path(".lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(|err| HistoryError::Lock {
                path: lock_path.clone(),
                source: err,
            })?;
        lock_file
            .lock_exclusive()
            .map_err(|err| HistoryError::Lock {
                path: lock_path.clone(),
                source: err,
            })?;

        let result = self.append_locked(entry);
        if let Err(err) = FileExt::unlock(&lock_file) {
            debug!("Failed to release history lock {}: {}", lock_path.display(), err);
        }
        result
    }

    fn append_locked(&self, entry: HistoryEntry) -> Result<(), HistoryError> {
        let mut entries = match self.load() {
            Ok(entries) => entries,
            Err(HistoryError::Missing { .. }) => Vec::new(),
            Err(err) => return Err(err),
        };
        entries.push(entry);

        let encoded = serde_json::to_string_pretty(&entries)
            .map_err(|err| HistoryError::Encode { source: err })?;
        let sequence = TMP_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        let tmp_path =
            self.sibling_path(&format!(".{}.{}.tmp", std::process::id(), sequence));
        std::fs::write(&tmp_path, encoded).map_err(|err| HistoryError::Write {
            path: tmp_path.clone(),
            source: err,
        })?;
        if let Err(err) = std::fs::rename(&tmp_path, &self.path) {
            drop(std::fs::remove_file(&tmp_path));
            return Err(HistoryError::Write {
                path: self.path.clone(),
                source: err,
            });
        }

        debug!(path = %self.path.display(), entries = entries.len(), "History updated");
        Ok(())
    }

    fn sibling_path(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(ToOwned::to_owned)
            .unwrap_or_default();
        name.push(suffix);
        self.path.with_file_name(name)
    }
}
