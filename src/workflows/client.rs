//! HTTP client for the workflow engine's executions API
//!
//! Upstream responses pass through verbatim; the gateway adds authentication
//! and default filters but does not reshape the payload.

use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use serde_json::Value;
use tracing::debug;

use crate::config::models::WorkflowConfig;
use crate::utils::error::{GatewayError, Result};

/// The engine authenticates with a custom header rather than a bearer token.
const API_KEY_HEADER: &str = "X-N8N-API-KEY";

/// Client for the workflow engine's REST API.
#[derive(Debug, Clone)]
pub struct WorkflowClient {
    config: WorkflowConfig,
    http_client: Client,
}

impl WorkflowClient {
    pub fn new(config: WorkflowConfig) -> Result<Self> {
        let http_client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| {
                GatewayError::internal(format!("failed to create workflow HTTP client: {e}"))
            })?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Whether upstream credentials are present. Checked by the handlers so
    /// an unconfigured deployment answers 503 instead of failing mid-call.
    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    /// List recent executions, optionally filtered by status.
    ///
    /// `workflow_id` falls back to the configured chatbot workflow and
    /// `limit` to the configured page size.
    pub async fn list_executions(
        &self,
        status: Option<&str>,
        workflow_id: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Value> {
        let (base_url, api_key) = self.credentials()?;

        let mut query: Vec<(&str, String)> = vec![
            (
                "workflowId",
                workflow_id
                    .unwrap_or(&self.config.default_workflow_id)
                    .to_string(),
            ),
            ("limit", limit.unwrap_or(self.config.default_limit).to_string()),
        ];
        if let Some(status) = status.filter(|s| !s.is_empty()) {
            query.push(("status", status.to_string()));
        }

        let url = format!("{}/executions", base_url.trim_end_matches('/'));
        debug!(%url, "Listing workflow executions");
        self.fetch(self.http_client.get(&url).query(&query), api_key)
            .await
    }

    /// Fetch one execution including its run data.
    pub async fn execution_detail(&self, id: &str) -> Result<Value> {
        let (base_url, api_key) = self.credentials()?;

        let url = format!("{}/executions/{}", base_url.trim_end_matches('/'), id);
        debug!(%url, "Fetching workflow execution detail");
        self.fetch(
            self.http_client.get(&url).query(&[("includeData", "true")]),
            api_key,
        )
        .await
    }

    fn credentials(&self) -> Result<(&str, &str)> {
        match (self.config.api_url.as_deref(), self.config.api_key.as_deref()) {
            (Some(url), Some(key)) if !url.is_empty() && !key.is_empty() => Ok((url, key)),
            _ => Err(GatewayError::WorkflowUnconfigured),
        }
    }

    async fn fetch(&self, request: reqwest::RequestBuilder, api_key: &str) -> Result<Value> {
        let response = request
            .header(API_KEY_HEADER, api_key)
            .send()
            .await
            .map_err(|e| GatewayError::workflow_upstream(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::workflow_upstream(format!(
                "upstream returned {status}"
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|_| GatewayError::workflow_upstream("malformed upstream response"))
    }
}
