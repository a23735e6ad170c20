//! History store use case

use crate::domain::history::{HistoryLedger, Translation};

use super::ports::{HistoryStorage, StorageError};

/// Decode persisted history. Anything unreadable yields an empty ledger.
pub fn decode_history(raw: &str) -> HistoryLedger {
    if raw.trim().is_empty() {
        return HistoryLedger::new();
    }
    match serde_json::from_str::<Vec<Translation>>(raw) {
        Ok(entries) => HistoryLedger::from_entries(entries),
        Err(e) => {
            tracing::warn!(error = %e, "discarding corrupt history");
            HistoryLedger::new()
        }
    }
}

/// Encode history for storage
pub fn encode_history(entries: &[Translation]) -> Result<String, StorageError> {
    serde_json::to_string_pretty(entries).map_err(|e| StorageError::WriteFailed(e.to_string()))
}

/// Bounded, persisted history of completed translations.
///
/// Mutations only touch memory; call `persist` afterwards to write the
/// current (already capped) sequence to storage.
pub struct HistoryStore<S>
where
    S: HistoryStorage,
{
    storage: S,
    ledger: HistoryLedger,
}

impl<S> HistoryStore<S>
where
    S: HistoryStorage,
{
    /// Create an empty store without reading storage
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            ledger: HistoryLedger::new(),
        }
    }

    /// Create a store and restore its persisted state
    pub async fn open(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.load().await;
        store
    }

    /// Restore persisted state, replacing what is in memory.
    ///
    /// Missing, unreadable, or corrupt data yields an empty history; this
    /// never fails.
    pub async fn load(&mut self) -> &[Translation] {
        self.ledger = match self.storage.read().await {
            Ok(Some(raw)) => decode_history(&raw),
            Ok(None) => {
                tracing::debug!(location = %self.storage.location(), "no stored history");
                HistoryLedger::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "history unreadable, starting empty");
                HistoryLedger::new()
            }
        };
        self.ledger.entries()
    }

    /// Insert a new entry at the front, evicting the oldest beyond capacity
    pub fn append(&mut self, entry: Translation) {
        tracing::debug!(id = %entry.id(), "appending history entry");
        self.ledger.push_front(entry);
    }

    /// Current contents, newest first
    pub fn all(&self) -> &[Translation] {
        self.ledger.entries()
    }

    /// Find an entry by id (case-insensitive)
    pub fn find(&self, id: &str) -> Option<&Translation> {
        self.ledger.find(id)
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.ledger.clear();
    }

    /// Write the current sequence to storage
    pub async fn persist(&self) -> Result<(), StorageError> {
        let encoded = encode_history(self.ledger.entries())?;
        self.storage.write(&encoded).await?;
        tracing::debug!(entries = self.ledger.len(), location = %self.storage.location(), "history persisted");
        Ok(())
    }

    /// Where the history is stored
    pub fn location(&self) -> String {
        self.storage.location()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::history::{TranslationId, HISTORY_CAPACITY};
    use crate::domain::vibe::{Direction, Era, VibeStats};
    use crate::infrastructure::history::MemoryHistoryStorage;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};

    fn entry(n: usize) -> Translation {
        Translation::from_parts(
            TranslationId::from(format!("T{:05}", n).as_str()),
            format!("original {}", n),
            format!("translated {}", n),
            Utc.timestamp_opt(1_700_000_000 + n as i64, 123_456_789).unwrap(),
            VibeStats::new((n % 101) as i64, 50, 25, 100).unwrap(),
            if n % 2 == 0 { Era::Modern } else { Era::Legacy2016 },
            if n % 3 == 0 { Direction::ToNormal } else { Direction::ToSlang },
        )
    }

    #[tokio::test]
    async fn round_trip_preserves_sequence() {
        for len in [0usize, 1, 7, HISTORY_CAPACITY] {
            let storage = MemoryHistoryStorage::new();
            let mut store = HistoryStore::new(storage.clone());
            for n in 0..len {
                store.append(entry(n));
            }
            store.persist().await.unwrap();

            let reopened = HistoryStore::open(storage).await;
            assert_eq!(reopened.all(), store.all());
        }
    }

    #[tokio::test]
    async fn sixteen_appends_keep_fifteen() {
        let mut store = HistoryStore::new(MemoryHistoryStorage::new());
        for n in 1..=16 {
            store.append(entry(n));
        }
        assert_eq!(store.all().len(), HISTORY_CAPACITY);
        assert!(store.find("T00001").is_none());
        assert_eq!(store.all()[0].id().as_str(), "T00016");
    }

    #[tokio::test]
    async fn corrupt_data_loads_empty() {
        let samples = [
            "not json at all",
            "{\"id\": 1}",
            "[1, 2, 3]",
            "[{\"id\":\"X\",\"originalText\":\"a\"}]",
            "\u{0}\u{1}garbage",
            "null",
        ];
        for raw in samples {
            let storage = MemoryHistoryStorage::with_value(raw);
            let store = HistoryStore::open(storage).await;
            assert!(store.all().is_empty(), "{:?} should load empty", raw);
        }
    }

    #[tokio::test]
    async fn out_of_range_stats_in_storage_load_empty() {
        let mut value = serde_json::to_value(vec![entry(1)]).unwrap();
        value[0]["vibeStats"]["primary"] = serde_json::json!(250);
        let storage = MemoryHistoryStorage::with_value(value.to_string());
        let store = HistoryStore::open(storage).await;
        assert!(store.all().is_empty());
    }

    #[tokio::test]
    async fn oversized_storage_is_capped() {
        let entries: Vec<_> = (0..20).map(entry).collect();
        let raw = serde_json::to_string(&entries).unwrap();
        let store = HistoryStore::open(MemoryHistoryStorage::with_value(raw)).await;
        assert_eq!(store.all().len(), HISTORY_CAPACITY);
        assert_eq!(store.all()[0].id().as_str(), "T00000");
    }

    struct BrokenStorage;

    #[async_trait]
    impl HistoryStorage for BrokenStorage {
        async fn read(&self) -> Result<Option<String>, StorageError> {
            Err(StorageError::ReadFailed("disk on fire".to_string()))
        }

        async fn write(&self, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::WriteFailed("disk on fire".to_string()))
        }

        fn location(&self) -> String {
            "broken".to_string()
        }
    }

    #[tokio::test]
    async fn unreadable_storage_loads_empty() {
        let mut store = HistoryStore::open(BrokenStorage).await;
        assert!(store.all().is_empty());
        store.append(entry(1));
        assert!(store.persist().await.is_err());
        assert_eq!(store.all().len(), 1);
    }

    #[tokio::test]
    async fn clear_then_persist_stores_empty_list() {
        let storage = MemoryHistoryStorage::new();
        let mut store = HistoryStore::new(storage.clone());
        store.append(entry(1));
        store.persist().await.unwrap();
        store.clear();
        store.persist().await.unwrap();

        let reopened = HistoryStore::open(storage).await;
        assert!(reopened.all().is_empty());
    }
}
