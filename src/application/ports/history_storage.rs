//! History storage port interface

use async_trait::async_trait;
use thiserror::Error;

/// History storage errors
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("Failed to read history: {0}")]
    ReadFailed(String),

    #[error("Failed to write history: {0}")]
    WriteFailed(String),
}

/// Port for the single persisted history entry
#[async_trait]
pub trait HistoryStorage: Send + Sync {
    /// Read the stored value.
    ///
    /// # Returns
    /// `Ok(None)` if nothing has been stored yet
    async fn read(&self) -> Result<Option<String>, StorageError>;

    /// Replace the stored value
    async fn write(&self, value: &str) -> Result<(), StorageError>;

    /// Human-readable location of the stored value
    fn location(&self) -> String;
}
