//! Direct SQL execution endpoint
//!
//! Runs caller-supplied SQL through the same validation policy as generated
//! SQL. Dashboards use this to re-run a query the chat endpoint produced,
//! with different parameters or a higher row cap.

use actix_web::{HttpRequest, HttpResponse, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::request_client;
use crate::core::postprocess::{QUERY_ROW_CAP, process};
use crate::core::rate_limiter::QUERY_ENDPOINT;
use crate::core::validator::validate_sql;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub sql: String,
    #[serde(default)]
    pub params: Vec<Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    pub data: Vec<Value>,
    pub row_count: usize,
    pub truncated: bool,
}

pub async fn execute(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<QueryRequest>,
) -> Result<HttpResponse> {
    let client = request_client(&req);
    state.rate_limiter.admit(&client, QUERY_ENDPOINT).await?;

    let request = body.into_inner();
    if request.sql.trim().is_empty() {
        return Err(GatewayError::bad_request("sql is required"));
    }
    validate_sql(&request.sql)?;

    let rows = state.executor.fetch_rows(&request.sql, &request.params).await?;
    let processed = process(rows, QUERY_ROW_CAP);

    Ok(HttpResponse::Ok().json(QueryResponse {
        data: processed.rows,
        row_count: processed.row_count_total,
        truncated: processed.truncated,
    }))
}
