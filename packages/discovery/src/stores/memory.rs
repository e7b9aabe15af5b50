//! In-memory cache store for tests and single-process use.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::CacheResult;
use crate::traits::store::{CacheStore, CachedSearch};

/// Process-local store backed by a `HashMap`.
///
/// Entries are keyed by the exact query string. Nothing here expires;
/// staleness is the cache layer's concern.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, CachedSearch>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every entry.
    pub fn clear(&self) {
        self.entries.write().unwrap().clear();
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn get(&self, query: &str) -> CacheResult<Option<CachedSearch>> {
        Ok(self.entries.read().unwrap().get(query).cloned())
    }

    async fn put(&self, entry: &CachedSearch) -> CacheResult<()> {
        self.entries
            .write()
            .unwrap()
            .insert(entry.result.query.clone(), entry.clone());
        Ok(())
    }
}
