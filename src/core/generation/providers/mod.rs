//! Generation providers
//!
//! Two interchangeable chat-completion backends. Both receive the same
//! system prompt, history, and user message, and both hand back raw reply
//! text; everything after the HTTP call belongs to the parser.

pub mod anthropic;
pub mod openai;
pub mod provider;

pub use anthropic::AnthropicProvider;
pub use openai::OpenAiProvider;
pub use provider::{ProviderError, SqlGenerator};
