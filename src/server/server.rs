//! HTTP server core
//!
//! Wires configuration into live collaborators and mounts the routes.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{App, HttpServer as ActixHttpServer, middleware::Logger, web};
use tracing::{info, warn};

use crate::config::Config;
use crate::config::models::{ProviderKind, ServerConfig};
use crate::core::generation::GenerationOrchestrator;
use crate::core::generation::providers::{AnthropicProvider, OpenAiProvider, SqlGenerator};
use crate::core::rate_limiter::{MemoryStore, RateLimiter};
use crate::core::schema_context::SCHEMA_CONTEXT;
use crate::server::routes;
use crate::server::state::AppState;
use crate::storage::{Database, QueryExecutor};
use crate::utils::error::{GatewayError, Result};
use crate::workflows::WorkflowClient;

/// HTTP server
pub struct HttpServer {
    config: ServerConfig,
    state: AppState,
}

impl HttpServer {
    /// Build every collaborator from configuration. Fails fast on the
    /// database; a provider that refuses to initialize is skipped so one
    /// missing key does not take the whole gateway down.
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let executor: Arc<dyn QueryExecutor> =
            Arc::new(Database::connect(&config.gateway.database).await?);

        let mut providers: Vec<Arc<dyn SqlGenerator>> = Vec::new();
        for provider_config in &config.gateway.providers {
            let provider: std::result::Result<Arc<dyn SqlGenerator>, _> = match provider_config.kind
            {
                ProviderKind::OpenAi => OpenAiProvider::new(provider_config.clone())
                    .map(|p| Arc::new(p) as Arc<dyn SqlGenerator>),
                ProviderKind::Anthropic => AnthropicProvider::new(provider_config.clone())
                    .map(|p| Arc::new(p) as Arc<dyn SqlGenerator>),
            };
            match provider {
                Ok(provider) => {
                    info!("Registered generation provider: {}", provider.name());
                    providers.push(provider);
                }
                Err(e) => {
                    warn!("Skipping generation provider: {}", e);
                }
            }
        }
        if providers.is_empty() {
            warn!("No generation providers available; chat requests will answer 503");
        }
        let orchestrator = GenerationOrchestrator::new(providers, SCHEMA_CONTEXT.to_string());

        let rate_limiter = RateLimiter::new(
            config.gateway.rate_limit.clone(),
            Arc::new(MemoryStore::new()),
        );

        let workflows = WorkflowClient::new(config.gateway.workflows.clone())?;
        if !workflows.is_configured() {
            info!("Workflow proxy is not configured; /api/workflows will answer 503");
        }

        let state = AppState::new(config.clone(), rate_limiter, orchestrator, executor, workflows);

        Ok(Self {
            config: config.gateway.server.clone(),
            state,
        })
    }

    /// Create the Actix-web application
    pub(crate) fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let cors_config = &state.config.gateway.server.cors;
        let mut cors = Cors::default();

        if cors_config.enabled {
            // With no origins configured the dashboard is expected to be
            // served same-origin; cross-origin callers are refused.
            for origin in &cors_config.allowed_origins {
                cors = cors.allowed_origin(origin);
            }
            cors = cors
                .allowed_methods(vec!["GET", "POST"])
                .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
                .max_age(cors_config.max_age as usize);
        }

        App::new()
            .app_data(state)
            .wrap(cors)
            .wrap(Logger::default())
            .route("/health", web::get().to(routes::health::health_check))
            .configure(routes::configure_api)
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);
        let workers = self.config.workers;

        let mut server = ActixHttpServer::new(move || Self::create_app(state.clone()));
        if let Some(workers) = workers {
            server = server.workers(workers);
        }

        let server = server
            .bind(&bind_addr)
            .map_err(|e| Self::format_bind_error(e, &bind_addr))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| GatewayError::internal(format!("Server error: {e}")))?;

        info!("HTTP server stopped");
        Ok(())
    }

    fn format_bind_error(error: std::io::Error, bind_addr: &str) -> GatewayError {
        if error.kind() == std::io::ErrorKind::AddrInUse {
            return GatewayError::internal(format!(
                "{bind_addr} is already in use; stop the other process or change server.port"
            ));
        }
        GatewayError::internal(format!("Failed to bind to {bind_addr}: {error}"))
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
