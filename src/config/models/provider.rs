//! Generation provider configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Which backend API a provider entry speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    OpenAi,
    Anthropic,
}

/// One generation provider. Order in the config list is fallback order;
/// the first entry is the primary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Backend API
    pub kind: ProviderKind,
    /// API key, usually injected from the environment
    #[serde(default)]
    pub api_key: String,
    /// Base URL of the provider API
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// Completion token cap per request
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl ProviderConfig {
    /// The stock OpenAI entry used when the config file lists no providers.
    pub fn openai() -> Self {
        Self {
            kind: ProviderKind::OpenAi,
            api_key: String::new(),
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o".to_string(),
            request_timeout_secs: default_request_timeout(),
            connect_timeout_secs: default_connect_timeout(),
            max_tokens: default_max_tokens(),
        }
    }

    /// The stock Anthropic fallback entry.
    pub fn anthropic() -> Self {
        Self {
            kind: ProviderKind::Anthropic,
            api_key: String::new(),
            base_url: "https://api.anthropic.com".to_string(),
            model: "claude-sonnet-4-5-20250929".to_string(),
            request_timeout_secs: default_request_timeout(),
            connect_timeout_secs: default_connect_timeout(),
            max_tokens: default_max_tokens(),
        }
    }
}

/// Primary plus fallback, in fallback order.
pub fn default_providers() -> Vec<ProviderConfig> {
    vec![ProviderConfig::openai(), ProviderConfig::anthropic()]
}
