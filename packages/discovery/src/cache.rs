//! Freshness policy over a cache store.
//!
//! `SearchCache` wraps any [`CacheStore`] and decides what counts as a
//! hit. Expiry is lazy: staleness is judged at lookup time, and stale
//! rows are left in place to be overwritten by the next store for the
//! same query.

use chrono::{Duration, Utc};
use tracing::{debug, info};

use crate::error::{CacheError, CacheResult};
use crate::traits::store::{CacheStore, CachedSearch};
use crate::types::search::SearchResult;

/// How long a cached result stays fresh.
const DEFAULT_FRESHNESS_HOURS: i64 = 24;

/// Query-keyed result cache with a freshness window.
///
/// Keys are the query strings exactly as given. Lookups are
/// case-sensitive and whitespace-sensitive; any normalization is the
/// caller's policy, applied before both lookup and store.
pub struct SearchCache<S: CacheStore> {
    store: S,
    freshness: Duration,
}

impl<S: CacheStore> SearchCache<S> {
    /// Cache with the default 24 hour freshness window.
    pub fn new(store: S) -> Self {
        Self {
            store,
            freshness: Duration::hours(DEFAULT_FRESHNESS_HOURS),
        }
    }

    /// Override the freshness window.
    pub fn with_freshness(mut self, freshness: Duration) -> Self {
        self.freshness = freshness;
        self
    }

    /// The underlying store.
    pub fn store_backend(&self) -> &S {
        &self.store
    }

    /// Look up a fresh result for `query`.
    ///
    /// Returns `None` on a true miss and on a stale hit. An entry aged
    /// exactly the freshness window is still fresh; only strictly older
    /// entries are stale.
    pub async fn lookup(&self, query: &str) -> CacheResult<Option<SearchResult>> {
        match self.store.get(query).await? {
            None => {
                debug!(query = %query, "cache miss");
                Ok(None)
            }
            Some(entry) => {
                let age = entry.age(Utc::now());
                if age > self.freshness {
                    debug!(query = %query, age_hours = age.num_hours(), "cache entry stale");
                    Ok(None)
                } else {
                    debug!(query = %query, age_hours = age.num_hours(), "cache hit");
                    Ok(Some(entry.result))
                }
            }
        }
    }

    /// Store a result under its own query, stamped now.
    ///
    /// Storing is an upsert: a fresh timestamp replaces whatever was
    /// there before. Empty results are refused so that a failure is
    /// never remembered as an answer.
    pub async fn store(&self, result: &SearchResult) -> CacheResult<()> {
        if result.is_empty() {
            return Err(CacheError::EmptyResult);
        }

        let entry = CachedSearch::new(result.clone());
        self.store.put(&entry).await?;

        info!(
            query = %result.query,
            dataset_count = result.total_count,
            "cached search result"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::memory::MemoryStore;
    use crate::types::dataset::{Dataset, Domain};

    fn sample_result(query: &str) -> SearchResult {
        let dataset = Dataset {
            name: "Tide Gauge Records".to_string(),
            description: "Hourly sea level readings from coastal stations, spanning several \
                          decades of continuous observation."
                .to_string(),
            url: "https://example.gov/tides".to_string(),
            domain: Domain::Government,
            use_cases: vec!["sea level research".to_string(), "flood modeling".to_string()],
            relevance_score: 1.0,
            timestamp: Utc::now(),
        };
        SearchResult::new(query, vec![dataset])
    }

    #[tokio::test]
    async fn test_lookup_returns_fresh_entry() {
        let cache = SearchCache::new(MemoryStore::new());
        cache.store(&sample_result("tides")).await.unwrap();

        let hit = cache.lookup("tides").await.unwrap();
        assert_eq!(hit.unwrap().query, "tides");
    }

    #[tokio::test]
    async fn test_lookup_misses_on_absent_query() {
        let cache = SearchCache::new(MemoryStore::new());
        assert!(cache.lookup("never stored").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_stale_entry_is_not_returned() {
        let store = MemoryStore::new();
        let entry = CachedSearch {
            result: sample_result("old news"),
            cached_at: Utc::now() - Duration::hours(25),
        };
        store.put(&entry).await.unwrap();

        let cache = SearchCache::new(store);
        assert!(cache.lookup("old news").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_entry_within_window_is_returned() {
        let store = MemoryStore::new();
        let entry = CachedSearch {
            result: sample_result("recent"),
            cached_at: Utc::now() - Duration::hours(23),
        };
        store.put(&entry).await.unwrap();

        let cache = SearchCache::new(store);
        assert!(cache.lookup("recent").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_empty_result_is_refused() {
        let cache = SearchCache::new(MemoryStore::new());
        let empty = SearchResult::new("nothing", vec![]);

        let err = cache.store(&empty).await.unwrap_err();
        assert!(matches!(err, CacheError::EmptyResult));
        assert!(cache.store_backend().is_empty());
    }

    #[tokio::test]
    async fn test_store_upserts_same_query() {
        let cache = SearchCache::new(MemoryStore::new());

        let mut first = sample_result("ports");
        first.datasets[0].name = "First Answer".to_string();
        cache.store(&first).await.unwrap();

        let mut second = sample_result("ports");
        second.datasets[0].name = "Second Answer".to_string();
        cache.store(&second).await.unwrap();

        let hit = cache.lookup("ports").await.unwrap().unwrap();
        assert_eq!(hit.datasets[0].name, "Second Answer");
        assert_eq!(cache.store_backend().len(), 1);
    }

    #[tokio::test]
    async fn test_custom_freshness_window() {
        let store = MemoryStore::new();
        let entry = CachedSearch {
            result: sample_result("short lived"),
            cached_at: Utc::now() - Duration::minutes(10),
        };
        store.put(&entry).await.unwrap();

        let cache = SearchCache::new(store).with_freshness(Duration::minutes(5));
        assert!(cache.lookup("short lived").await.unwrap().is_none());
    }
}
