//! Provider fallback
//!
//! Providers are tried in configuration order and the first reply wins.
//! A failed attempt is logged and swallowed; only when the whole list is
//! exhausted does the caller see an error, carrying every attempt's
//! failure for the operator.

use std::sync::Arc;
use tracing::warn;

use super::parser::parse_model_reply;
use super::providers::SqlGenerator;
use crate::core::types::{ChatTurn, GeneratedQuery};
use crate::utils::error::{GatewayError, Result};

pub struct GenerationOrchestrator {
    providers: Vec<Arc<dyn SqlGenerator>>,
    system_prompt: String,
}

impl GenerationOrchestrator {
    pub fn new(providers: Vec<Arc<dyn SqlGenerator>>, system_prompt: String) -> Self {
        Self {
            providers,
            system_prompt,
        }
    }

    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Try each provider in order and parse the first reply that arrives.
    pub async fn generate(&self, message: &str, history: &[ChatTurn]) -> Result<GeneratedQuery> {
        if self.providers.is_empty() {
            return Err(GatewayError::providers_unavailable(
                "no generation providers are configured",
            ));
        }

        let mut attempts: Vec<String> = Vec::new();
        for provider in &self.providers {
            match provider
                .generate(&self.system_prompt, message, history)
                .await
            {
                Ok(raw) => return Ok(parse_model_reply(&raw)),
                Err(error) => {
                    warn!("provider {} failed: {}", provider.name(), error);
                    attempts.push(format!("{}: {}", provider.name(), error));
                }
            }
        }

        Err(GatewayError::providers_unavailable(format!(
            "all generation providers failed ({})",
            attempts.join("; ")
        )))
    }
}
