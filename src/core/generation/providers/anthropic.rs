//! Anthropic messages backend

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde_json::{Value, json};
use tokio::time::timeout;

use super::provider::{ProviderError, SqlGenerator};
use crate::config::models::ProviderConfig;
use crate::core::types::ChatTurn;

pub const PROVIDER_NAME: &str = "anthropic";

const API_VERSION: &str = "2023-06-01";

/// Client for the Anthropic `/v1/messages` API.
#[derive(Debug, Clone)]
pub struct AnthropicProvider {
    config: ProviderConfig,
    http_client: Client,
}

impl AnthropicProvider {
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        if config.api_key.is_empty() {
            return Err(ProviderError::configuration(
                PROVIDER_NAME,
                "api key is not set",
            ));
        }

        let http_client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| {
                ProviderError::network(PROVIDER_NAME, format!("failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// The system prompt rides in a top-level field here, not as a message.
    fn build_request(&self, system_prompt: &str, message: &str, history: &[ChatTurn]) -> Value {
        let mut messages: Vec<Value> = history
            .iter()
            .map(|turn| json!({"role": turn.role, "content": turn.content}))
            .collect();
        messages.push(json!({"role": "user", "content": message}));

        json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "temperature": 0,
            "system": system_prompt,
            "messages": messages,
        })
    }

    fn map_http_error(status: u16, body: &str) -> ProviderError {
        match status {
            401 | 403 => ProviderError::authentication(PROVIDER_NAME, "invalid or missing API key"),
            _ => ProviderError::api(PROVIDER_NAME, status, body),
        }
    }
}

#[async_trait]
impl SqlGenerator for AnthropicProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn generate(
        &self,
        system_prompt: &str,
        message: &str,
        history: &[ChatTurn],
    ) -> Result<String, ProviderError> {
        let url = format!("{}/v1/messages", self.config.base_url.trim_end_matches('/'));
        let body = self.build_request(system_prompt, message, history);

        let response = timeout(
            Duration::from_secs(self.config.request_timeout_secs),
            self.http_client
                .post(&url)
                .header("x-api-key", &self.config.api_key)
                .header("anthropic-version", API_VERSION)
                .json(&body)
                .send(),
        )
        .await
        .map_err(|_| ProviderError::timeout(PROVIDER_NAME, "request timed out"))?
        .map_err(|e| ProviderError::network(PROVIDER_NAME, format!("network error: {e}")))?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| {
            ProviderError::network(PROVIDER_NAME, format!("failed to read response: {e}"))
        })?;

        if !(200..300).contains(&status) {
            return Err(Self::map_http_error(status, &text));
        }

        let payload: Value =
            serde_json::from_str(&text).map_err(|_| ProviderError::malformed(PROVIDER_NAME))?;
        let blocks = payload["content"]
            .as_array()
            .ok_or_else(|| ProviderError::malformed(PROVIDER_NAME))?;

        let mut reply = String::new();
        let mut saw_text_block = false;
        for block in blocks {
            if block["type"] == "text" {
                saw_text_block = true;
                if let Some(chunk) = block["text"].as_str() {
                    reply.push_str(chunk);
                }
            }
        }
        if !saw_text_block {
            return Err(ProviderError::malformed(PROVIDER_NAME));
        }
        Ok(reply)
    }
}
