//! Recent-search history: most recent first, deduplicated, bounded.

use crate::storage::{KeyValueStore, StorageError};
use config::constants::RECENT_SEARCHES_KEY;
use tracing::warn;

pub const MAX_RECENT_SEARCHES: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentSearches {
    entries: Vec<String>,
}

impl RecentSearches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored entries, enforcing the ordering invariants.
    pub fn from_entries(entries: impl IntoIterator<Item = String>) -> Self {
        let mut history = Self::new();
        // oldest first so the first stored entry ends up in front
        let mut entries: Vec<_> = entries.into_iter().collect();
        entries.reverse();
        for entry in entries {
            history.promote_or_insert(entry);
        }
        history
    }

    /// Load from `store`. Missing, unreadable or malformed data is an empty
    /// history.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let Some(raw) = store.read(RECENT_SEARCHES_KEY) else {
            return Self::new();
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(entries) => Self::from_entries(entries),
            Err(e) => {
                warn!("Ignoring malformed recent searches: {}", e);
                Self::new()
            }
        }
    }

    /// Write to `store`. Failures are logged and otherwise ignored.
    pub fn persist(&self, store: &mut impl KeyValueStore) {
        let result = serde_json::to_string(&self.entries)
            .map_err(StorageError::from)
            .and_then(|json| store.write(RECENT_SEARCHES_KEY, &json));
        if let Err(e) = result {
            warn!("Failed to persist recent searches: {}", e);
        }
    }

    /// Move `entry` to the front, inserting it if absent, then evict past the
    /// bound.
    pub fn promote_or_insert(&mut self, entry: String) {
        self.entries.retain(|existing| *existing != entry);
        self.entries.insert(0, entry);
        while self.entries.len() > MAX_RECENT_SEARCHES {
            self.evict_oldest();
        }
    }

    pub fn evict_oldest(&mut self) -> Option<String> {
        self.entries.pop()
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
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
    use crate::storage::MemoryStore;

    fn history(entries: &[&str]) -> RecentSearches {
        RecentSearches::from_entries(entries.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_from_entries_keeps_order() {
        assert_eq!(history(&["x", "y", "z"]).entries(), ["x", "y", "z"]);
    }

    #[test]
    fn test_from_entries_drops_duplicates_and_overflow() {
        let h = history(&["a", "b", "a", "c", "d", "e", "f", "g"]);
        assert_eq!(h.entries(), ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_promote_existing_entry() {
        let mut h = history(&["x", "y", "z"]);
        h.promote_or_insert("z".to_string());
        assert_eq!(h.entries(), ["z", "x", "y"]);
        h.promote_or_insert("z".to_string());
        assert_eq!(h.entries(), ["z", "x", "y"]);
    }

    #[test]
    fn test_sixth_entry_evicts_oldest() {
        let mut h = history(&["x", "y", "z", "w", "v"]);
        h.promote_or_insert("u".to_string());
        assert_eq!(h.entries(), ["u", "x", "y", "z", "w"]);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut h = history(&["x"]);
        assert_eq!(h.remove(3), None);
        assert_eq!(h.remove(0).as_deref(), Some("x"));
        assert!(h.is_empty());
    }

    #[test]
    fn test_load_and_persist() {
        let mut store = MemoryStore::new();
        let h = history(&["b", "a"]);
        h.persist(&mut store);
        assert_eq!(store.read(RECENT_SEARCHES_KEY).as_deref(), Some(r#"["b","a"]"#));
        assert_eq!(RecentSearches::load(&store), h);
    }

    #[test]
    fn test_load_malformed_is_empty() {
        let store = MemoryStore::with_entry(RECENT_SEARCHES_KEY, "{oops");
        assert!(RecentSearches::load(&store).is_empty());

        let store = MemoryStore::with_entry(RECENT_SEARCHES_KEY, r#"{"a":1}"#);
        assert!(RecentSearches::load(&store).is_empty());
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn read(&self, _key: &str) -> Option<String> {
            None
        }

        fn write(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("quota exceeded".into()))
        }
    }

    #[test]
    fn test_persist_failure_is_swallowed() {
        let h = history(&["a"]);
        h.persist(&mut BrokenStore);
        assert_eq!(h.entries(), ["a"]);
    }
}
