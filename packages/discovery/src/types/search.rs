//! Search results - one query's outcome.

use serde::{Deserialize, Serialize};

use super::dataset::Dataset;

/// The outcome of one dataset search.
///
/// `query` is the input text exactly as typed. It doubles as the cache
/// key, and cache lookups match it case-sensitively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The search text, verbatim
    pub query: String,

    /// Datasets ordered by relevance; model order breaks ties
    pub datasets: Vec<Dataset>,

    /// Always equals `datasets.len()`
    pub total_count: usize,
}

impl SearchResult {
    /// Create a result. `total_count` is derived, never passed in.
    pub fn new(query: impl Into<String>, datasets: Vec<Dataset>) -> Self {
        let total_count = datasets.len();
        Self {
            query: query.into(),
            datasets,
            total_count,
        }
    }

    /// True when the result carries no datasets.
    ///
    /// An empty result is a failure signal upstream and is never cached.
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}
