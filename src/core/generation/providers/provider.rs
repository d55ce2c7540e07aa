//! Provider contract

use async_trait::async_trait;
use thiserror::Error;

use crate::core::types::ChatTurn;

/// A text-generation backend that can draft SQL from a conversation.
///
/// Implementations must sample deterministically (temperature zero) so a
/// re-sent prompt cannot drift for reasons other than the prompt itself,
/// and must bound the request with their configured timeout.
#[async_trait]
pub trait SqlGenerator: Send + Sync {
    /// Stable name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Produce the raw reply text for one exchange.
    async fn generate(
        &self,
        system_prompt: &str,
        message: &str,
        history: &[ChatTurn],
    ) -> Result<String, ProviderError>;
}

/// Errors a single provider attempt can fail with
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("authentication failed for {provider}: {message}")]
    Authentication {
        provider: &'static str,
        message: String,
    },

    #[error("request to {provider} timed out: {message}")]
    Timeout {
        provider: &'static str,
        message: String,
    },

    #[error("network error for {provider}: {message}")]
    Network {
        provider: &'static str,
        message: String,
    },

    #[error("{provider} returned status {status}: {message}")]
    Api {
        provider: &'static str,
        status: u16,
        message: String,
    },

    #[error("{provider} returned a response with no content")]
    MalformedResponse { provider: &'static str },

    #[error("configuration error for {provider}: {message}")]
    Configuration {
        provider: &'static str,
        message: String,
    },
}

/// Helper functions for creating specific errors
impl ProviderError {
    pub fn authentication<S: Into<String>>(provider: &'static str, message: S) -> Self {
        Self::Authentication {
            provider,
            message: message.into(),
        }
    }

    pub fn timeout<S: Into<String>>(provider: &'static str, message: S) -> Self {
        Self::Timeout {
            provider,
            message: message.into(),
        }
    }

    pub fn network<S: Into<String>>(provider: &'static str, message: S) -> Self {
        Self::Network {
            provider,
            message: message.into(),
        }
    }

    pub fn api<S: Into<String>>(provider: &'static str, status: u16, message: S) -> Self {
        Self::Api {
            provider,
            status,
            message: message.into(),
        }
    }

    pub fn malformed(provider: &'static str) -> Self {
        Self::MalformedResponse { provider }
    }

    pub fn configuration<S: Into<String>>(provider: &'static str, message: S) -> Self {
        Self::Configuration {
            provider,
            message: message.into(),
        }
    }

    /// Which backend produced the failure.
    pub fn provider(&self) -> &'static str {
        match self {
            Self::Authentication { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::Network { provider, .. }
            | Self::Api { provider, .. }
            | Self::MalformedResponse { provider }
            | Self::Configuration { provider, .. } => provider,
        }
    }
}
