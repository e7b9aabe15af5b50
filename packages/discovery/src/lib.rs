//! LLM-Backed Dataset Discovery Library
//!
//! Turns a natural-language topic into a curated list of dataset records
//! by prompting a text-completion model and parsing its free-form reply
//! into typed, policy-checked records. The model is treated as an
//! unreliable collaborator: the pipeline extracts a JSON array from
//! whatever text comes back, repairs the common formatting slips, and
//! validates each record individually so one bad entry never sinks a
//! batch. Results are cached per query with a 24 hour freshness window.
//!
//! # Usage
//!
//! ```rust,ignore
//! use discovery::{SearchCache, Searcher, MemoryStore};
//! use discovery::ai::AnthropicModel;
//!
//! let searcher = Searcher::new(AnthropicModel::from_env()?);
//! let cache = SearchCache::new(MemoryStore::new());
//!
//! let result = match cache.lookup("climate change indicators").await? {
//!     Some(hit) => hit,
//!     None => {
//!         let fresh = searcher.search("climate change indicators").await?;
//!         if let Err(e) = cache.store(&fresh).await {
//!             tracing::warn!(error = %e, "caching failed, returning result anyway");
//!         }
//!         fresh
//!     }
//! };
//! ```
//!
//! # Modules
//!
//! - [`types`] - `Dataset`, `Domain`, `SearchResult`
//! - [`traits`] - Collaborator seams (`CompletionModel`, `CacheStore`)
//! - [`pipeline`] - Prompt, parser, validator, and the searcher
//! - [`cache`] - Freshness policy over a cache store
//! - [`stores`] - Store backends (`MemoryStore`, `PostgresStore`)
//! - [`view`] - Filter and sort helpers for presentation layers
//! - [`testing`] - `MockModel` for tests

pub mod cache;
pub mod error;
pub mod pipeline;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;
pub mod view;

#[cfg(feature = "anthropic")]
pub mod ai;

// Re-export core types at crate root
pub use cache::SearchCache;
pub use error::{CacheError, MalformedResponseError, SearchError, ValidationError};
pub use pipeline::Searcher;
pub use stores::MemoryStore;
pub use traits::{
    model::CompletionModel,
    store::{CacheStore, CachedSearch},
};
pub use types::{
    dataset::{Dataset, Domain},
    search::SearchResult,
};

#[cfg(feature = "postgres")]
pub use stores::PostgresStore;
