//! Shared utilities for the gateway
//!
//! Error handling lives here. Everything with a domain of its own
//! (validation, generation, post-processing) lives under `core`.

pub mod error;

pub use error::{GatewayError, Result};
