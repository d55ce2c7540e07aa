//! Application state shared across HTTP handlers

use std::sync::Arc;

use crate::config::Config;
use crate::core::generation::GenerationOrchestrator;
use crate::core::rate_limiter::RateLimiter;
use crate::storage::QueryExecutor;
use crate::workflows::WorkflowClient;

/// Shared resources handed to every handler through `web::Data`.
///
/// The executor sits behind a trait object so handler tests can swap in a
/// stub without a running database.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Admission control for the public endpoints
    pub rate_limiter: Arc<RateLimiter>,
    /// Provider fallback chain that turns questions into SQL
    pub orchestrator: Arc<GenerationOrchestrator>,
    /// Validated-statement execution
    pub executor: Arc<dyn QueryExecutor>,
    /// Read-only proxy to the workflow engine
    pub workflows: Arc<WorkflowClient>,
}

impl AppState {
    pub fn new(
        config: Config,
        rate_limiter: RateLimiter,
        orchestrator: GenerationOrchestrator,
        executor: Arc<dyn QueryExecutor>,
        workflows: WorkflowClient,
    ) -> Self {
        Self {
            config: Arc::new(config),
            rate_limiter: Arc::new(rate_limiter),
            orchestrator: Arc::new(orchestrator),
            executor,
            workflows: Arc::new(workflows),
        }
    }
}
