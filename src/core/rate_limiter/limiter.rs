//! Admission policy
//!
//! Each endpoint carries its own requests-per-minute budget; capacity
//! refills continuously at budget/60 tokens per second and every admitted
//! request consumes one token.

use std::sync::Arc;
use tracing::debug;

use super::store::RateLimitStore;
use super::types::AdmissionDecision;
use crate::config::models::RateLimitConfig;
use crate::utils::error::{GatewayError, Result};

pub const CHAT_ENDPOINT: &str = "/api/chat";
pub const QUERY_ENDPOINT: &str = "/api/query";
pub const EXPORT_ENDPOINT: &str = "/api/export";
pub const WORKFLOWS_ENDPOINT: &str = "/api/workflows";

/// Per-endpoint token-bucket rate limiter.
pub struct RateLimiter {
    config: RateLimitConfig,
    store: Arc<dyn RateLimitStore>,
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig, store: Arc<dyn RateLimitStore>) -> Self {
        Self { config, store }
    }

    /// Check and record one request from `client` against `endpoint`.
    pub async fn check(&self, client: &str, endpoint: &str) -> AdmissionDecision {
        if !self.config.enabled {
            return AdmissionDecision::admitted();
        }
        let limit = self.limit_for(endpoint);
        let key = bucket_key(client, endpoint);
        let decision = self
            .store
            .try_consume(&key, f64::from(limit), f64::from(limit) / 60.0)
            .await;
        if !decision.allowed {
            debug!("rate limit exceeded for {}", key);
        }
        decision
    }

    /// Like [`check`](Self::check) but refuses with the error the HTTP
    /// boundary returns as 429.
    pub async fn admit(&self, client: &str, endpoint: &str) -> Result<()> {
        let decision = self.check(client, endpoint).await;
        if decision.allowed {
            Ok(())
        } else {
            Err(GatewayError::RateLimited {
                retry_after_secs: decision.retry_after_secs.unwrap_or(1),
            })
        }
    }

    fn limit_for(&self, endpoint: &str) -> u32 {
        match endpoint {
            CHAT_ENDPOINT => self.config.chat_rpm,
            QUERY_ENDPOINT => self.config.query_rpm,
            EXPORT_ENDPOINT => self.config.export_rpm,
            WORKFLOWS_ENDPOINT => self.config.workflows_rpm,
            _ => self.config.default_rpm,
        }
    }
}

/// Buckets are scoped per client and endpoint so exhausting one budget
/// leaves the others untouched.
fn bucket_key(client: &str, endpoint: &str) -> String {
    format!("{}:{}", client, endpoint)
}

/// Derive the client identity from a forwarded-for style header value,
/// taking the first entry of a comma-separated list. Absent or empty
/// headers collapse to one shared identity; that fails open toward
/// availability rather than distinguishing clients, which is an accepted
/// weakness of header-derived identity.
pub fn client_identity(forwarded_for: Option<&str>) -> String {
    forwarded_for
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| "unknown".to_string())
}
