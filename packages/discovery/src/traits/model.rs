//! Completion model trait - the LLM collaborator seam.

use async_trait::async_trait;

use crate::error::Result;

/// Text-completion model behind the search pipeline.
///
/// Implementations wrap a specific provider and pin the decoding
/// parameters the pipeline depends on: deterministic sampling
/// (temperature 0.0), a fixed model id, and a fixed output budget.
/// Each call is a single-turn exchange; no retries happen at this layer.
///
/// Transport, auth, and provider failures surface as `SearchError::Model`
/// wrapping the cause.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Complete a prompt, returning the raw response text.
    async fn complete(&self, prompt: &str) -> Result<String>;
}
