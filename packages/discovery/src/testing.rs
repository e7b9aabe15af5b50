//! Testing utilities including mock implementations.
//!
//! Useful for testing applications that use the discovery library
//! without making real LLM calls.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{Result, SearchError};
use crate::traits::model::CompletionModel;

/// A mock completion model for testing.
///
/// Returns a canned response (or a scripted failure) and records every
/// prompt it receives so tests can assert on what was sent.
#[derive(Default, Clone)]
pub struct MockModel {
    response: Arc<RwLock<Option<String>>>,
    failure: Arc<RwLock<Option<String>>>,
    prompts: Arc<RwLock<Vec<String>>>,
}

impl MockModel {
    /// Create a mock with no canned response; `complete` fails until
    /// one is set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the response text returned by every `complete` call.
    pub fn with_response(self, text: impl Into<String>) -> Self {
        *self.response.write().unwrap() = Some(text.into());
        self
    }

    /// Script a failure: every `complete` call returns a model error
    /// with this message.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        *self.failure.write().unwrap() = Some(message.into());
        self
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.read().unwrap().clone()
    }

    /// Number of `complete` calls made.
    pub fn call_count(&self) -> usize {
        self.prompts.read().unwrap().len()
    }
}

#[async_trait]
impl CompletionModel for MockModel {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.prompts.write().unwrap().push(prompt.to_string());

        if let Some(message) = self.failure.read().unwrap().as_ref() {
            return Err(SearchError::Model(message.clone().into()));
        }

        match self.response.read().unwrap().as_ref() {
            Some(text) => Ok(text.clone()),
            None => Err(SearchError::Model("no canned response configured".into())),
        }
    }
}
