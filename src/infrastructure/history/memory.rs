//! In-memory history storage

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::application::ports::{HistoryStorage, StorageError};

/// Keeps the stored value in memory. Clones share the same slot, so a
/// reopened store sees what an earlier one persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistoryStorage {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryHistoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage pre-filled with a raw value
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(value.into()))),
        }
    }

    /// Current raw value
    pub fn value(&self) -> Option<String> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl HistoryStorage for MemoryHistoryStorage {
    async fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.value())
    }

    async fn write(&self, value: &str) -> Result<(), StorageError> {
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = Some(value.to_string());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
