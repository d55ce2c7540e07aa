//! Configuration data models
//!
//! Everything the gateway reads from its YAML file, one module per
//! section.

#![allow(missing_docs)]

pub mod database;
pub mod provider;
pub mod rate_limit;
pub mod server;
pub mod workflow;

pub use database::*;
pub use provider::*;
pub use rate_limit::*;
pub use server::*;
pub use workflow::*;

/// Default bind host
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default bind port
pub fn default_port() -> u16 {
    8000
}

pub fn default_true() -> bool {
    true
}

pub fn default_cors_max_age() -> u32 {
    86_400
}

pub fn default_max_connections() -> u32 {
    10
}

pub fn default_connection_timeout() -> u64 {
    5
}

pub fn default_request_timeout() -> u64 {
    30
}

pub fn default_connect_timeout() -> u64 {
    10
}

pub fn default_max_tokens() -> u32 {
    2000
}

pub fn default_chat_rpm() -> u32 {
    10
}

pub fn default_query_rpm() -> u32 {
    60
}

pub fn default_export_rpm() -> u32 {
    5
}

pub fn default_workflows_rpm() -> u32 {
    30
}

pub fn default_rpm() -> u32 {
    60
}

pub fn default_workflow_limit() -> u32 {
    250
}
