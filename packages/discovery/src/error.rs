//! Typed errors for the discovery library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling. Callers branch on the
//! variant, never on message text.

use thiserror::Error;

/// Errors from parsing a model response into candidate records.
#[derive(Debug, Error)]
pub enum MalformedResponseError {
    /// No JSON array delimiters found in the response text
    #[error("no array found in model response")]
    NoArray,

    /// The extracted span parsed to something other than an array
    #[error("model response is not a JSON array")]
    NotArray,

    /// The extracted span failed to parse even after repair
    #[error("JSON parse failed near {snippet:?}: {source}")]
    Json {
        /// Prefix of the repaired text, for diagnostics
        snippet: String,
        source: serde_json::Error,
    },
}

/// Per-record validation failures.
///
/// Caught by the searcher, logged, and skipped. Never surfaced from
/// `search` - one bad record must not sink the batch.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Candidate is not a JSON object
    #[error("record is not a JSON object")]
    NotAnObject,

    /// Required field absent
    #[error("missing field: {field}")]
    MissingField { field: &'static str },

    /// Required text field present but empty
    #[error("field must not be empty: {field}")]
    EmptyField { field: &'static str },

    /// Field present with the wrong JSON type
    #[error("wrong type for {field}: expected {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    /// Description outside the allowed character range
    #[error("description must be 50-200 characters, got {count}")]
    DescriptionLength { count: usize },

    /// Domain value outside the closed set
    #[error(
        "unknown domain {value:?}, expected one of: Academic, Government, Research, Commercial"
    )]
    UnknownDomain { value: String },

    /// use_cases outside the allowed cardinality
    #[error("use_cases must contain 2-5 entries, got {count}")]
    UseCaseCount { count: usize },

    /// use_cases element is not a string
    #[error("use_cases[{index}] is not a string")]
    UseCaseNotText { index: usize },
}

/// Errors that can occur during a dataset search.
///
/// The sole failure mode of `Searcher::search`.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Model collaborator unavailable or failed
    #[error("model error: {0}")]
    Model(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Model responded, but the text yielded no usable records
    #[error("malformed response: {0}")]
    MalformedResponse(#[from] MalformedResponseError),

    /// Every candidate record failed validation
    #[error("no valid datasets found")]
    NoValidDatasets,
}

/// Errors from the cache layer.
#[derive(Debug, Error)]
pub enum CacheError {
    /// Backing store operation failed
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Cached payload could not be (de)serialized
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Refusing to cache a result with zero datasets
    #[error("refusing to cache empty result")]
    EmptyResult,
}

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Result type alias for cache operations.
pub type CacheResult<T> = std::result::Result<T, CacheError>;
