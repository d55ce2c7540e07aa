//! Workflow execution monitoring endpoints
//!
//! Thin pass-through handlers; filtering defaults and upstream error
//! mapping live in [`WorkflowClient`](crate::workflows::WorkflowClient).
//! Both routes draw from the same admission budget.

use actix_web::{HttpRequest, HttpResponse, web};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use super::request_client;
use crate::core::rate_limiter::WORKFLOWS_ENDPOINT;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};

static EXECUTION_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\w-]+$").unwrap());

#[derive(Debug, Deserialize)]
pub struct ExecutionListQuery {
    pub status: Option<String>,
    #[serde(rename = "workflowId")]
    pub workflow_id: Option<String>,
    pub limit: Option<u32>,
}

pub async fn list(
    state: web::Data<AppState>,
    req: HttpRequest,
    params: web::Query<ExecutionListQuery>,
) -> Result<HttpResponse> {
    let client = request_client(&req);
    state.rate_limiter.admit(&client, WORKFLOWS_ENDPOINT).await?;

    let params = params.into_inner();
    let body = state
        .workflows
        .list_executions(
            params.status.as_deref(),
            params.workflow_id.as_deref(),
            params.limit,
        )
        .await?;
    Ok(HttpResponse::Ok().json(body))
}

pub async fn detail(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let client = request_client(&req);
    state.rate_limiter.admit(&client, WORKFLOWS_ENDPOINT).await?;

    let id = path.into_inner();
    // The id lands in the upstream URL, so anything beyond word characters
    // and hyphens is refused before it leaves the gateway.
    if !EXECUTION_ID_RE.is_match(&id) {
        return Err(GatewayError::bad_request("invalid execution id"));
    }

    let body = state.workflows.execution_detail(&id).await?;
    Ok(HttpResponse::Ok().json(body))
}
