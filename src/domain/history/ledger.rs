//! Bounded, newest-first history ledger

use super::translation::Translation;

/// Maximum number of entries retained
pub const HISTORY_CAPACITY: usize = 15;

/// Ordered sequence of translations, newest first.
///
/// Invariant: never holds more than `HISTORY_CAPACITY` entries. Entries are
/// never edited in place; eviction drops the oldest from the tail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryLedger {
    entries: Vec<Translation>,
}

impl HistoryLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from newest-first entries, keeping at most the first
    /// `HISTORY_CAPACITY`
    pub fn from_entries(mut entries: Vec<Translation>) -> Self {
        entries.truncate(HISTORY_CAPACITY);
        Self { entries }
    }

    /// Insert at the front and evict from the tail beyond capacity
    pub fn push_front(&mut self, entry: Translation) {
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    /// All entries, newest first
    pub fn entries(&self) -> &[Translation] {
        &self.entries
    }

    /// Find an entry by id (case-insensitive)
    pub fn find(&self, id: &str) -> Option<&Translation> {
        self.entries.iter().find(|t| t.id().matches(id))
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::history::TranslationId;
    use crate::domain::vibe::{Direction, Era, VibeStats};
    use chrono::{TimeZone, Utc};

    fn entry(n: usize) -> Translation {
        Translation::from_parts(
            TranslationId::from(format!("ID{:04}", n).as_str()),
            format!("original {}", n),
            format!("translated {}", n),
            Utc.timestamp_opt(1_700_000_000 + n as i64, 0).unwrap(),
            VibeStats::new(1, 2, 3, 4).unwrap(),
            Era::Modern,
            Direction::ToSlang,
        )
    }

    #[test]
    fn push_front_places_newest_first() {
        let mut ledger = HistoryLedger::new();
        ledger.push_front(entry(1));
        ledger.push_front(entry(2));
        assert_eq!(ledger.entries()[0].id().as_str(), "ID0002");
        assert_eq!(ledger.entries()[1].id().as_str(), "ID0001");
    }

    #[test]
    fn sixteen_appends_evict_the_first() {
        let mut ledger = HistoryLedger::new();
        for n in 1..=16 {
            ledger.push_front(entry(n));
        }
        assert_eq!(ledger.len(), HISTORY_CAPACITY);
        assert!(ledger.find("ID0001").is_none());
        assert_eq!(ledger.entries()[0].id().as_str(), "ID0016");
        assert_eq!(ledger.entries()[14].id().as_str(), "ID0002");
    }

    #[test]
    fn from_entries_caps_length() {
        let entries: Vec<_> = (0..20).map(entry).collect();
        let ledger = HistoryLedger::from_entries(entries);
        assert_eq!(ledger.len(), HISTORY_CAPACITY);
        assert_eq!(ledger.entries()[0].id().as_str(), "ID0000");
    }

    #[test]
    fn find_is_case_insensitive() {
        let mut ledger = HistoryLedger::new();
        ledger.push_front(entry(7));
        assert!(ledger.find("id0007").is_some());
        assert!(ledger.find("ID0008").is_none());
    }

    #[test]
    fn clear_empties() {
        let mut ledger = HistoryLedger::from_entries(vec![entry(1), entry(2)]);
        ledger.clear();
        assert!(ledger.is_empty());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn retains_most_recent_in_reverse_order(appends in 0usize..60) {
                let mut ledger = HistoryLedger::new();
                for n in 0..appends {
                    ledger.push_front(entry(n));
                    prop_assert!(ledger.len() <= HISTORY_CAPACITY);
                    prop_assert_eq!(ledger.entries()[0].id().as_str(), format!("ID{:04}", n));
                }

                let expected: Vec<_> = (0..appends).rev().take(HISTORY_CAPACITY).collect();
                let actual: Vec<_> = ledger
                    .entries()
                    .iter()
                    .map(|t| t.id().as_str().to_string())
                    .collect();
                let expected_ids: Vec<_> = expected
                    .iter()
                    .map(|n| format!("ID{:04}", n))
                    .collect();
                prop_assert_eq!(actual, expected_ids);
            }
        }
    }
}
