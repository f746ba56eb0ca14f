//! Recent search queries, most recent first.
//!
//! The list is bounded and duplicate-free. It is persisted as a flat JSON
//! array of strings under [`HISTORY_KEY`] and rewritten in full after every
//! change. A missing or unreadable stored list starts an empty history.

use log::{debug, warn};
use std::sync::Arc;

use crate::error::Result;
use crate::storage::KeyValueStore;

/// Storage key of the persisted list
pub const HISTORY_KEY: &str = "recentSearches";

/// Default number of remembered queries
pub const DEFAULT_LIMIT: usize = 10;

pub struct SearchHistory {
    store: Arc<dyn KeyValueStore>,
    entries: Vec<String>,
    limit: usize,
}

impl std::fmt::Debug for SearchHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchHistory")
            .field("entries", &self.entries)
            .field("limit", &self.limit)
            .finish()
    }
}

impl SearchHistory {
    /// Load the persisted history
    ///
    /// Read failures and malformed contents are logged and treated as an
    /// empty history. A stored list longer than `limit` is cut down.
    pub async fn load(store: Arc<dyn KeyValueStore>, limit: usize) -> Self {
        let entries = match store.get(HISTORY_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(mut entries) => {
                    entries.truncate(limit);
                    entries
                }
                Err(e) => {
                    debug!("Ignoring unreadable search history: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read search history: {}", e);
                Vec::new()
            }
        };

        Self {
            store,
            entries,
            limit,
        }
    }

    /// Remember a query
    ///
    /// The query is trimmed first. Blank queries and queries already in the
    /// list leave it untouched; an existing entry keeps its position.
    /// Returns whether the list changed.
    pub async fn record(&mut self, query: &str) -> Result<bool> {
        let query = query.trim();
        if self.limit == 0 || query.is_empty() || self.entries.iter().any(|e| e == query) {
            return Ok(false);
        }

        self.entries.insert(0, query.to_string());
        self.entries.truncate(self.limit);
        self.persist().await?;
        Ok(true)
    }

    /// Forget every query
    pub async fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.persist().await
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&str> {
        self.entries.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    async fn persist(&self) -> Result<()> {
        let raw = serde_json::to_string(&self.entries)?;
        self.store.set(HISTORY_KEY, &raw).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    async fn empty_history(limit: usize) -> (Arc<MemoryStore>, SearchHistory) {
        let store = Arc::new(MemoryStore::new());
        let history = SearchHistory::load(store.clone(), limit).await;
        (store, history)
    }

    #[tokio::test]
    async fn test_record_prepends_and_persists() {
        let (store, mut history) = empty_history(DEFAULT_LIMIT).await;

        assert!(history.record("dosa").await.unwrap());
        assert!(history.record("  sambar ").await.unwrap());

        assert_eq!(history.entries(), ["sambar", "dosa"]);
        assert_eq!(history.latest(), Some("sambar"));
        assert_eq!(
            store.get(HISTORY_KEY).await.unwrap().as_deref(),
            Some(r#"["sambar","dosa"]"#)
        );
    }

    #[tokio::test]
    async fn test_zero_limit_records_nothing() {
        let (store, mut history) = empty_history(0).await;
        assert!(!history.record("rasam").await.unwrap());
        assert!(history.is_empty());
        assert!(store.get(HISTORY_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_blank_query_is_ignored() {
        let (store, mut history) = empty_history(DEFAULT_LIMIT).await;

        assert!(!history.record("").await.unwrap());
        assert!(!history.record("   ").await.unwrap());

        assert!(history.is_empty());
        assert_eq!(store.get(HISTORY_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_existing_entry_is_not_promoted() {
        let (_store, mut history) = empty_history(DEFAULT_LIMIT).await;
        history.record("idli").await.unwrap();
        history.record("vada").await.unwrap();

        assert!(!history.record("idli").await.unwrap());
        assert!(!history.record(" idli ").await.unwrap());

        assert_eq!(history.entries(), ["vada", "idli"]);
    }

    #[tokio::test]
    async fn test_duplicates_are_case_sensitive() {
        let (_store, mut history) = empty_history(DEFAULT_LIMIT).await;
        history.record("Dosa").await.unwrap();
        assert!(history.record("dosa").await.unwrap());
        assert_eq!(history.entries(), ["dosa", "Dosa"]);
    }

    #[tokio::test]
    async fn test_bound_drops_oldest() {
        let (_store, mut history) = empty_history(3).await;
        for query in ["a", "b", "c", "d", "e"] {
            history.record(query).await.unwrap();
            assert!(history.len() <= 3);
        }
        assert_eq!(history.entries(), ["e", "d", "c"]);
    }

    #[tokio::test]
    async fn test_load_existing_list() {
        let store = Arc::new(MemoryStore::with_value(HISTORY_KEY, r#"["rasam","pongal"]"#));
        let history = SearchHistory::load(store, DEFAULT_LIMIT).await;
        assert_eq!(history.entries(), ["rasam", "pongal"]);
    }

    #[tokio::test]
    async fn test_load_truncates_to_limit() {
        let store = Arc::new(MemoryStore::with_value(HISTORY_KEY, r#"["a","b","c","d"]"#));
        let history = SearchHistory::load(store, 2).await;
        assert_eq!(history.entries(), ["a", "b"]);
    }

    #[tokio::test]
    async fn test_malformed_history_is_empty() {
        for raw in ["not json", r#"{"a": 1}"#, "[1, 2]", ""] {
            let store = Arc::new(MemoryStore::with_value(HISTORY_KEY, raw));
            let history = SearchHistory::load(store, DEFAULT_LIMIT).await;
            assert!(history.is_empty(), "expected empty history for {:?}", raw);
        }
    }

    #[tokio::test]
    async fn test_malformed_history_is_overwritten_on_record() {
        let store = Arc::new(MemoryStore::with_value(HISTORY_KEY, "garbage"));
        let mut history = SearchHistory::load(store.clone(), DEFAULT_LIMIT).await;
        history.record("kesari").await.unwrap();
        assert_eq!(
            store.get(HISTORY_KEY).await.unwrap().as_deref(),
            Some(r#"["kesari"]"#)
        );
    }

    #[tokio::test]
    async fn test_clear_persists_empty_list() {
        let (store, mut history) = empty_history(DEFAULT_LIMIT).await;
        history.record("upma").await.unwrap();
        history.clear().await.unwrap();
        assert!(history.is_empty());
        assert_eq!(store.get(HISTORY_KEY).await.unwrap().as_deref(), Some("[]"));
    }
}
