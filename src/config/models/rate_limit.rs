//! Rate limiting configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Per-endpoint requests-per-minute budgets.
///
/// Each budget doubles as the bucket capacity, so a fresh client can burst
/// a full minute's allowance at once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Enable admission control
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Chat generation budget
    #[serde(default = "default_chat_rpm")]
    pub chat_rpm: u32,
    /// Direct query execution budget
    #[serde(default = "default_query_rpm")]
    pub query_rpm: u32,
    /// CSV export budget
    #[serde(default = "default_export_rpm")]
    pub export_rpm: u32,
    /// Workflow status polling budget
    #[serde(default = "default_workflows_rpm")]
    pub workflows_rpm: u32,
    /// Budget for any endpoint without its own entry
    #[serde(default = "default_rpm")]
    pub default_rpm: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            chat_rpm: default_chat_rpm(),
            query_rpm: default_query_rpm(),
            export_rpm: default_export_rpm(),
            workflows_rpm: default_workflows_rpm(),
            default_rpm: default_rpm(),
        }
    }
}

impl RateLimitConfig {
    /// Merge rate limit configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        if !other.enabled {
            self.enabled = other.enabled;
        }
        if other.chat_rpm != default_chat_rpm() {
            self.chat_rpm = other.chat_rpm;
        }
        if other.query_rpm != default_query_rpm() {
            self.query_rpm = other.query_rpm;
        }
        if other.export_rpm != default_export_rpm() {
            self.export_rpm = other.export_rpm;
        }
        if other.workflows_rpm != default_workflows_rpm() {
            self.workflows_rpm = other.workflows_rpm;
        }
        if other.default_rpm != default_rpm() {
            self.default_rpm = other.default_rpm;
        }
        self
    }
}
