//! Error handling for the gateway
//!
//! This module defines all error types used throughout the gateway and the
//! mapping from each error to its HTTP status and response body.

#![allow(missing_docs)]

use crate::core::generation::providers::ProviderError;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use thiserror::Error;

/// Result type alias for the gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Provider errors that escaped the fallback chain
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Request refused by the rate limiter
    #[error("Rate limit exceeded")]
    RateLimited { retry_after_secs: u64 },

    /// Malformed or incomplete client request
    #[error("{0}")]
    BadRequest(String),

    /// SQL refused by the validation policy
    #[error("{0}")]
    Validation(String),

    /// Every generation attempt produced SQL the validator refused
    #[error("could not produce a valid query")]
    NoValidQuery { sql: String, explanation: String },

    /// All configured generation providers failed for one request
    #[error("{0}")]
    ProvidersUnavailable(String),

    /// Workflow proxy called without upstream credentials
    #[error("workflow service is not configured")]
    WorkflowUnconfigured,

    /// Workflow upstream rejected or dropped the request
    #[error("workflow upstream error: {0}")]
    WorkflowUpstream(String),

    /// Query execution failures that are not database driver errors
    #[error("{0}")]
    Execution(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            GatewayError::BadRequest(_) | GatewayError::Validation(_) => StatusCode::BAD_REQUEST,
            GatewayError::NoValidQuery { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            GatewayError::ProvidersUnavailable(_) | GatewayError::WorkflowUnconfigured => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            GatewayError::WorkflowUpstream(_) | GatewayError::HttpClient(_) => {
                StatusCode::BAD_GATEWAY
            }
            GatewayError::Provider(ProviderError::Timeout { .. }) => StatusCode::GATEWAY_TIMEOUT,
            GatewayError::Provider(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            // The retry hint rides in a header so the flat body stays uniform.
            GatewayError::RateLimited { retry_after_secs } => HttpResponse::TooManyRequests()
                .insert_header(("Retry-After", retry_after_secs.to_string()))
                .json(ErrorBody {
                    error: self.to_string(),
                }),
            // Exhausted generation returns the rejected SQL so callers can see
            // what the model produced instead of an opaque failure.
            GatewayError::NoValidQuery { sql, explanation } => {
                HttpResponse::UnprocessableEntity().json(RejectedQueryBody {
                    error: self.to_string(),
                    sql: sql.clone(),
                    explanation: explanation.clone(),
                    results: None,
                    suggested_chart: None,
                })
            }
            _ => HttpResponse::build(self.status_code()).json(ErrorBody {
                error: self.to_string(),
            }),
        }
    }
}

/// Flat error body used by every endpoint
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Body returned when generation exhausted its retry budget
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedQueryBody {
    pub error: String,
    pub sql: String,
    pub explanation: String,
    pub results: Option<Vec<serde_json::Value>>,
    pub suggested_chart: Option<String>,
}

/// Helper functions for creating specific errors
impl GatewayError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn execution<S: Into<String>>(message: S) -> Self {
        Self::Execution(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn providers_unavailable<S: Into<String>>(message: S) -> Self {
        Self::ProvidersUnavailable(message.into())
    }

    pub fn workflow_upstream<S: Into<String>>(message: S) -> Self {
        Self::WorkflowUpstream(message.into())
    }
}

impl From<crate::core::validator::ValidationError> for GatewayError {
    fn from(err: crate::core::validator::ValidationError) -> Self {
        GatewayError::Validation(err.to_string())
    }
}
