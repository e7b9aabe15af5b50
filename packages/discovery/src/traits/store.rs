//! Storage trait for the search cache.
//!
//! The backing store holds entries and knows nothing about freshness;
//! the 24 hour policy lives in `SearchCache`. Keeping the trait this
//! narrow means any string-keyed KV store can back the cache.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CacheResult;
use crate::types::search::SearchResult;

/// A cached search result with its storage timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedSearch {
    /// The cached result; `result.query` is the storage key
    pub result: SearchResult,

    /// When the entry was written (distinct from the datasets' own timestamps)
    pub cached_at: DateTime<Utc>,
}

impl CachedSearch {
    /// Wrap a result, stamping it with the current time.
    pub fn new(result: SearchResult) -> Self {
        Self {
            result,
            cached_at: Utc::now(),
        }
    }

    /// Age of this entry relative to `now`.
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.cached_at
    }
}

/// Backing store for cached search results.
///
/// `put` is an upsert keyed by `result.query`; concurrent writers for the
/// same key resolve last-writer-wins. `get` returns whatever is stored,
/// fresh or stale.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Get the entry for a query, if any.
    async fn get(&self, query: &str) -> CacheResult<Option<CachedSearch>>;

    /// Insert or replace the entry for `entry.result.query`.
    async fn put(&self, entry: &CachedSearch) -> CacheResult<()>;
}
