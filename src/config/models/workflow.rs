//! Workflow engine configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Connection to the n8n instance that runs the chatbot workflow. Both
/// `api_url` and `api_key` must be present for the proxy endpoints to
/// work; otherwise they answer 503.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowConfig {
    /// Base URL of the n8n REST API
    pub api_url: Option<String>,
    /// API key sent as X-N8N-API-KEY
    pub api_key: Option<String>,
    /// Workflow queried when the caller does not name one
    #[serde(default = "default_workflow_id")]
    pub default_workflow_id: String,
    /// Executions fetched per poll when the caller does not say
    #[serde(default = "default_workflow_limit")]
    pub default_limit: u32,
    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            api_key: None,
            default_workflow_id: default_workflow_id(),
            default_limit: default_workflow_limit(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl WorkflowConfig {
    /// Merge workflow configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        if other.api_url.is_some() {
            self.api_url = other.api_url;
        }
        if other.api_key.is_some() {
            self.api_key = other.api_key;
        }
        if other.default_workflow_id != default_workflow_id() {
            self.default_workflow_id = other.default_workflow_id;
        }
        if other.default_limit != default_workflow_limit() {
            self.default_limit = other.default_limit;
        }
        if other.request_timeout_secs != default_request_timeout() {
            self.request_timeout_secs = other.request_timeout_secs;
        }
        self
    }

    /// Whether both pieces needed to reach n8n are present.
    pub fn is_configured(&self) -> bool {
        self.api_url.as_deref().is_some_and(|url| !url.is_empty())
            && self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }
}

/// The production chatbot workflow.
pub fn default_workflow_id() -> String {
    "7tp9fz1NxbfamadU".to_string()
}
