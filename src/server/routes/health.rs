//! Health check endpoint

use actix_web::HttpResponse;
use serde_json::json;

/// Liveness probe for load balancers and uptime monitors. Static by
/// intent: it must answer even when the database or providers are down,
/// and it is never rate-limited.
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
