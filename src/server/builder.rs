//! Startup sequence
//!
//! Loads configuration, applies environment overrides, and runs the server
//! until shutdown.

use tracing::info;

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::Result;

/// Default configuration file, overridable via `NLQ_GATEWAY_CONFIG`.
const DEFAULT_CONFIG_PATH: &str = "config/gateway.yaml";

/// Run the server with automatic configuration loading.
///
/// A missing config file is not fatal: defaults plus environment variables
/// cover the common deployment where only `DATABASE_URL` and one provider
/// key are set.
pub async fn run_server() -> Result<()> {
    // Load .env if present; ignored in environments that inject real vars.
    let _ = dotenvy::dotenv();

    let config_path = std::env::var("NLQ_GATEWAY_CONFIG")
        .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    info!("Loading configuration file: {}", config_path);

    let mut config = match Config::from_file(&config_path).await {
        Ok(config) => {
            info!("Configuration file loaded");
            config
        }
        Err(e) => {
            info!("Configuration file unavailable ({}), using defaults", e);
            Config::default()
        }
    };
    config.apply_env();
    config.validate()?;

    let server = HttpServer::new(&config).await?;
    info!("Server starting at http://{}", config.server().address());
    info!("API endpoints:");
    info!("   GET  /health         - Health check");
    info!("   POST /api/chat       - Natural-language question to SQL and results");
    info!("   POST /api/query      - Validated SQL execution");
    info!("   POST /api/export     - CSV export");
    info!("   GET  /api/workflows  - Workflow execution monitoring");

    server.start().await
}
