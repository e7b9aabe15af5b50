//! Model adapters for concrete LLM providers.

pub mod anthropic;

pub use anthropic::AnthropicModel;
