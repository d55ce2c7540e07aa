//! HTTP route handlers
//!
//! One module per endpoint. Handlers return `Result<HttpResponse>` and let
//! [`GatewayError`](crate::utils::error::GatewayError) render every failure,
//! so response shapes stay consistent across endpoints.

use actix_web::{HttpRequest, web};

use crate::core::rate_limiter::client_identity;

pub mod chat;
pub mod export;
pub mod health;
pub mod query;
pub mod workflows;

/// Mount the public API under `/api`. `/health` stays outside so probes
/// never pass through admission control.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/chat", web::post().to(chat::chat))
            .route("/query", web::post().to(query::execute))
            .route("/export", web::post().to(export::export))
            .route("/workflows", web::get().to(workflows::list))
            .route("/workflows/{id}", web::get().to(workflows::detail)),
    );
}

/// Client identity for rate limiting, taken from the proxy's forwarded
/// header. The gateway always sits behind a reverse proxy in production.
pub(crate) fn request_client(req: &HttpRequest) -> String {
    client_identity(
        req.headers()
            .get("x-forwarded-for")
            .and_then(|value| value.to_str().ok()),
    )
}
