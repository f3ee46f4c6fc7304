use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::NamedTempFile;

use shoplist_core::models::item::Item;

use crate::error::StorageError;
use crate::store::ListStore;

/// Stores the list as one pretty-printed JSON array at `path`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

fn io_error(path: &Path, source: std::io::Error) -> StorageError {
    StorageError::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[async_trait]
impl ListStore for JsonFileStore {
    async fn read_all(&self) -> Vec<Item> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no list file yet, starting empty");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read list file");
                return Vec::new();
            }
        };

        match serde_json::from_slice::<Vec<Item>>(&bytes) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "list file is not a valid item array");
                Vec::new()
            }
        }
    }

    /// Write to a uniquely named temp file beside the target, then rename it
    /// over the target. Overlapping writers each persist their own file; the
    /// last rename wins.
    async fn write_all(&self, items: &[Item]) -> Result<(), StorageError> {
        let json = serde_json::to_vec_pretty(items)?;
        let dir = self.dir();
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || persist(&dir, &path, &json))
            .await
            .map_err(|e| StorageError::Unavailable(format!("write task failed: {e}")))??;

        tracing::debug!(path = %self.path.display(), count = items.len(), "list written");
        Ok(())
    }
}

fn persist(dir: &Path, path: &Path, json: &[u8]) -> Result<(), StorageError> {
    std::fs::create_dir_all(dir).map_err(|e| io_error(dir, e))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| io_error(dir, e))?;
    let tmp_path = tmp.path().to_path_buf();
    tmp.write_all(json).map_err(|e| io_error(&tmp_path, e))?;
    tmp.persist(path).map_err(|e| io_error(path, e.error))?;
    Ok(())
}
