//! Configuration management for the gateway
//!
//! Configuration loads from a YAML file, then environment variables
//! override the secrets (database URL, provider keys, workflow
//! credentials) so those never have to live on disk.

pub mod models;

pub use models::*;

use crate::utils::error::{GatewayError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the gateway
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Gateway configuration
    pub gateway: GatewayConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GatewayError::Config(format!("Failed to read config file: {}", e)))?;

        let gateway: GatewayConfig = serde_yaml::from_str(&content)
            .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))?;

        debug!("Configuration loaded successfully");
        Ok(Self { gateway })
    }

    /// Overlay secrets and endpoints from the environment.
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            if !url.is_empty() {
                self.gateway.database.url = url;
            }
        }
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            if !key.is_empty() {
                self.set_provider_key(ProviderKind::OpenAi, &key);
            }
        }
        if let Ok(key) = std::env::var("ANTHROPIC_API_KEY") {
            if !key.is_empty() {
                self.set_provider_key(ProviderKind::Anthropic, &key);
            }
        }
        if let Ok(url) = std::env::var("WORKFLOW_API_URL") {
            if !url.is_empty() {
                self.gateway.workflows.api_url = Some(url);
            }
        }
        if let Ok(key) = std::env::var("WORKFLOW_API_KEY") {
            if !key.is_empty() {
                self.gateway.workflows.api_key = Some(key);
            }
        }
    }

    fn set_provider_key(&mut self, kind: ProviderKind, key: &str) {
        for provider in &mut self.gateway.providers {
            if provider.kind == kind {
                provider.api_key = key.to_string();
            }
        }
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.gateway.server
    }

    /// Get providers configuration
    pub fn providers(&self) -> &[ProviderConfig] {
        &self.gateway.providers
    }

    /// Get database configuration
    pub fn database(&self) -> &DatabaseConfig {
        &self.gateway.database
    }

    /// Get rate limit configuration
    pub fn rate_limit(&self) -> &RateLimitConfig {
        &self.gateway.rate_limit
    }

    /// Get workflow configuration
    pub fn workflows(&self) -> &WorkflowConfig {
        &self.gateway.workflows
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.gateway
            .server
            .validate()
            .map_err(|e| GatewayError::Config(format!("Server config error: {}", e)))?;

        if self.gateway.database.url.is_empty() {
            return Err(GatewayError::Config(
                "Database URL is required (set DATABASE_URL or database.url)".to_string(),
            ));
        }

        if self.gateway.providers.is_empty() {
            return Err(GatewayError::Config(
                "At least one generation provider must be configured".to_string(),
            ));
        }

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.gateway = self.gateway.merge(other.gateway);
        self
    }
}

/// Top-level configuration file contents
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct GatewayConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Generation providers, in fallback order
    #[serde(default = "default_providers")]
    pub providers: Vec<ProviderConfig>,
    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Rate limiting configuration
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    /// Workflow engine configuration
    #[serde(default)]
    pub workflows: WorkflowConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            providers: default_providers(),
            database: DatabaseConfig::default(),
            rate_limit: RateLimitConfig::default(),
            workflows: WorkflowConfig::default(),
        }
    }
}

impl GatewayConfig {
    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.server = self.server.merge(other.server);
        if other.providers != default_providers() {
            self.providers = other.providers;
        }
        self.database = self.database.merge(other.database);
        self.rate_limit = self.rate_limit.merge(other.rate_limit);
        self.workflows = self.workflows.merge(other.workflows);
        self
    }
}
