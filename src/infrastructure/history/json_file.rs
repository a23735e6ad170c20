//! JSON file history storage

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::{HistoryStorage, StorageError};

/// File name of the persisted history
pub const HISTORY_FILE_NAME: &str = "vibe_history.json";

/// Stores history as a JSON file under the user's data directory
pub struct JsonFileHistoryStorage {
    path: PathBuf,
}

impl JsonFileHistoryStorage {
    /// Create storage at the default path
    pub fn new() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("~/.local/share"))
            .join("vibe-shift");

        Self {
            path: data_dir.join(HISTORY_FILE_NAME),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileHistoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryStorage for JsonFileHistoryStorage {
    async fn read(&self) -> Result<Option<String>, StorageError> {
        match fs::read(&self.path).await {
            Ok(bytes) => String::from_utf8(bytes)
                .map(Some)
                .map_err(|e| StorageError::ReadFailed(format!("history is not UTF-8: {}", e))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::ReadFailed(e.to_string())),
        }
    }

    async fn write(&self, value: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        }

        // Write a sibling temp file, then rename over the target
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, value)
            .await
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| StorageError::WriteFailed(e.to_string()))
    }

    fn location(&self) -> String {
        self.path.to_string_lossy().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::HistoryStore;

    #[test]
    fn default_path_is_under_data_dir() {
        let storage = JsonFileHistoryStorage::new();
        let path = storage.location();
        assert!(path.contains("vibe-shift"));
        assert!(path.ends_with(HISTORY_FILE_NAME));
    }

    #[tokio::test]
    async fn missing_file_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileHistoryStorage::with_path(dir.path().join("nope.json"));
        assert_eq!(storage.read().await.unwrap(), None);
    }

    #[tokio::test]
    async fn write_creates_parent_and_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("history.json");
        let storage = JsonFileHistoryStorage::with_path(&path);

        storage.write("[]").await.unwrap();
        assert_eq!(storage.read().await.unwrap(), Some("[]".to_string()));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn invalid_utf8_is_a_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, [0xff, 0xfe, b'[']).unwrap();

        let storage = JsonFileHistoryStorage::with_path(&path);
        assert!(matches!(
            storage.read().await,
            Err(StorageError::ReadFailed(_))
        ));
    }

    #[tokio::test]
    async fn invalid_utf8_inside_entry_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        let mut bytes = br#"[{"id":"ABC123","originalText":"hi "#.to_vec();
        bytes.push(0xff);
        bytes.extend_from_slice(
            br#"","translatedText":"yo","timestamp":"2024-05-01T12:30:00Z","vibeStats":{"primary":1,"secondary":2,"tertiary":3,"quaternary":4},"era":"modern","direction":"to-slang"}]"#,
        );
        std::fs::write(&path, &bytes).unwrap();

        let store = HistoryStore::open(JsonFileHistoryStorage::with_path(&path)).await;
        assert!(store.all().is_empty());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(64))]

            #[test]
            fn arbitrary_bytes_load_empty(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
                let dir = tempfile::tempdir().unwrap();
                let path = dir.path().join("history.json");
                std::fs::write(&path, &bytes).unwrap();

                let runtime = tokio::runtime::Runtime::new().unwrap();
                let loaded = runtime.block_on(async {
                    HistoryStore::open(JsonFileHistoryStorage::with_path(&path))
                        .await
                        .all()
                        .len()
                });
                prop_assert_eq!(loaded, 0);
            }
        }
    }
}
