//! Anthropic implementation of the completion model trait.
//!
//! The reference model collaborator: wraps `anthropic-client` and pins
//! the decoding parameters the pipeline depends on.
//!
//! # Example
//!
//! ```rust,ignore
//! use discovery::ai::AnthropicModel;
//! use discovery::Searcher;
//!
//! let model = AnthropicModel::from_env()?;
//! let searcher = Searcher::new(model);
//! ```

use anthropic_client::{AnthropicClient, Message, MessageRequest};
use async_trait::async_trait;
use tracing::debug;

use crate::error::{Result, SearchError};
use crate::traits::model::CompletionModel;

/// Default model identifier.
const DEFAULT_MODEL: &str = "claude-3-opus-20240229";

/// Default output budget, in tokens.
const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Anthropic-backed completion model.
///
/// Temperature is pinned to 0.0 so repeated searches for the same query
/// converge on the same response text. Each call is a single-turn,
/// single-message exchange with no retries.
#[derive(Clone)]
pub struct AnthropicModel {
    client: AnthropicClient,
    model: String,
    max_tokens: u32,
}

impl AnthropicModel {
    /// Wrap an existing client with the default decoding parameters.
    pub fn new(client: AnthropicClient) -> Self {
        Self {
            client,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Create from environment variable `ANTHROPIC_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let client = AnthropicClient::from_env().map_err(|e| SearchError::Model(Box::new(e)))?;
        Ok(Self::new(client))
    }

    /// Override the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the output token budget.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// The configured model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionModel for AnthropicModel {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = MessageRequest::new(&self.model)
            .message(Message::user(prompt))
            .temperature(0.0)
            .max_tokens(self.max_tokens);

        let response = self
            .client
            .create_message(request)
            .await
            .map_err(|e| SearchError::Model(Box::new(e)))?;

        debug!(
            model = %self.model,
            response_len = response.content.len(),
            stop_reason = ?response.stop_reason,
            "completion received"
        );

        Ok(response.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides_defaults() {
        let model = AnthropicModel::new(AnthropicClient::new("sk-ant-test"))
            .with_model("claude-3-haiku-20240307")
            .with_max_tokens(1024);

        assert_eq!(model.model(), "claude-3-haiku-20240307");
        assert_eq!(model.max_tokens, 1024);
    }

    #[test]
    fn test_defaults_pin_opus() {
        let model = AnthropicModel::new(AnthropicClient::new("sk-ant-test"));
        assert_eq!(model.model(), DEFAULT_MODEL);
        assert_eq!(model.max_tokens, DEFAULT_MAX_TOKENS);
    }
}
