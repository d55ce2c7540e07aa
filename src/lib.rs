//! # NLQ Gateway
//!
//! Natural-language-to-SQL analytics gateway. Questions come in over HTTP,
//! an LLM provider chain turns them into SQL, a strict validator decides
//! whether that SQL is allowed to run, and results come back masked,
//! bounded, and chart-annotated.
//!
//! ## Features
//!
//! - **Provider fallback**: OpenAI first, Anthropic second, same prompt
//! - **Strict SQL policy**: single read-only SELECT against an allow-list,
//!   re-prompting the model once with the validator's refusal
//! - **PII masking**: Brazilian phone numbers leave the gateway masked
//! - **Admission control**: per-client, per-endpoint token buckets
//! - **Workflow monitoring**: read-only proxy over the chatbot's
//!   automation engine
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nlq_gateway::server;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Loads config/gateway.yaml (or NLQ_GATEWAY_CONFIG), applies
//!     // environment overrides, and serves until shutdown.
//!     server::run_server().await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;
pub mod workflows;

// Re-export main types
pub use config::Config;
pub use utils::error::{GatewayError, Result};

pub use crate::core::generation::{CycleOutcome, GenerationOrchestrator, run_cycle};
pub use crate::core::types::{ChatTurn, GeneratedQuery, TurnRole};
pub use crate::core::validator::{ValidationError, validate_sql};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
