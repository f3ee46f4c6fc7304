use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use shoplist_core::models::item::Item;

use crate::error::StorageError;
use crate::store::ListStore;

/// In-memory list store for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<Vec<Item>>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: Mutex::new(items),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Make every subsequent `write_all` fail with [`StorageError::Unavailable`].
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub async fn snapshot(&self) -> Vec<Item> {
        self.items.lock().await.clone()
    }
}

#[async_trait]
impl ListStore for MemoryStore {
    async fn read_all(&self) -> Vec<Item> {
        self.items.lock().await.clone()
    }

    async fn write_all(&self, items: &[Item]) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("writes disabled".to_string()));
        }
        *self.items.lock().await = items.to_vec();
        Ok(())
    }
}
