//! Error handling integration tests
//!
//! Verifies that domain errors map to the HTTP statuses, headers, and
//! messages the API promises, and that foreign error types convert into
//! the gateway error with the right classification.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    use nlq_gateway::GatewayError;
    use nlq_gateway::config::models::RateLimitConfig;
    use nlq_gateway::core::generation::providers::ProviderError;
    use nlq_gateway::core::rate_limiter::{CHAT_ENDPOINT, MemoryStore, RateLimiter};

    // ==================== HTTP Status Mapping ====================

    /// Malformed requests and refused SQL are client mistakes, not server
    /// failures.
    #[test]
    fn test_client_errors_map_to_bad_request() {
        assert_eq!(
            GatewayError::bad_request("message is required").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            GatewayError::validation("only SELECT queries allowed").status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    /// Refused admission is a 429 that tells the client when to retry.
    #[test]
    fn test_rate_limited_maps_to_429_with_retry_hint() {
        let error = GatewayError::RateLimited {
            retry_after_secs: 42,
        };
        assert_eq!(error.status_code(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(error.to_string(), "Rate limit exceeded");

        let response = error.error_response();
        assert_eq!(response.headers().get("Retry-After").unwrap(), "42");
    }

    /// Exhausted generation is a 422, not a 500: the request was well
    /// formed, the model just could not satisfy the policy.
    #[test]
    fn test_rejected_query_maps_to_422() {
        let error = GatewayError::NoValidQuery {
            sql: "SELECT * FROM payments".to_string(),
            explanation: "query rejected by validator: table not allowed: payments".to_string(),
        };
        assert_eq!(error.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(error.to_string(), "could not produce a valid query");
    }

    /// Dependency failures distinguish unavailable (503), broken upstream
    /// (502), and upstream timeout (504).
    #[test]
    fn test_upstream_failures_map_to_5xx() {
        assert_eq!(
            GatewayError::providers_unavailable("all generation providers failed").status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            GatewayError::WorkflowUnconfigured.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            GatewayError::workflow_upstream("upstream returned 500").status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            GatewayError::from(ProviderError::timeout("openai", "request timed out"))
                .status_code(),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            GatewayError::from(ProviderError::api("anthropic", 529, "overloaded")).status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    /// Everything else is an opaque 500.
    #[test]
    fn test_internal_failures_map_to_500() {
        assert_eq!(
            GatewayError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            GatewayError::execution("row decode failed").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            GatewayError::config("bad config").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    // ==================== Foreign Error Conversions ====================

    /// Database driver errors convert without losing their message.
    #[test]
    fn test_database_error_converts() {
        let error: GatewayError = sea_orm::DbErr::Custom("connection reset".to_string()).into();
        assert!(matches!(error, GatewayError::Database(_)));
        assert!(error.to_string().contains("connection reset"));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    /// JSON decode failures classify as serialization errors.
    #[test]
    fn test_serialization_error_converts() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: GatewayError = json_error.into();
        assert!(matches!(error, GatewayError::Serialization(_)));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    /// IO failures classify as IO errors.
    #[test]
    fn test_io_error_converts() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let error: GatewayError = io_error.into();
        assert!(matches!(error, GatewayError::Io(_)));
    }

    /// Provider errors keep their provider attribution through conversion.
    #[test]
    fn test_provider_error_keeps_attribution() {
        let error: GatewayError = ProviderError::authentication("openai", "invalid api key").into();
        assert!(error.to_string().contains("openai"));
        assert_eq!(error.status_code(), StatusCode::BAD_GATEWAY);
    }

    // ==================== Admission Control ====================

    /// A drained bucket surfaces as the rate limit error with a retry
    /// hint the handler turns into a Retry-After header.
    #[tokio::test]
    async fn test_drained_bucket_is_rate_limited() {
        let config = RateLimitConfig {
            chat_rpm: 1,
            ..RateLimitConfig::default()
        };
        let limiter = RateLimiter::new(config, Arc::new(MemoryStore::new()));

        limiter.admit("203.0.113.9", CHAT_ENDPOINT).await.unwrap();
        let error = limiter
            .admit("203.0.113.9", CHAT_ENDPOINT)
            .await
            .unwrap_err();
        match error {
            GatewayError::RateLimited { retry_after_secs } => {
                assert_eq!(retry_after_secs, 60);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    /// A disabled limiter admits everything.
    #[tokio::test]
    async fn test_disabled_limiter_admits_unbounded() {
        let config = RateLimitConfig {
            enabled: false,
            chat_rpm: 1,
            ..RateLimitConfig::default()
        };
        let limiter = RateLimiter::new(config, Arc::new(MemoryStore::new()));

        for _ in 0..5 {
            limiter.admit("203.0.113.9", CHAT_ENDPOINT).await.unwrap();
        }
    }
}
