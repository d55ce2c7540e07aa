//! Natural-language chat endpoint
//!
//! The main entry point: question in, SQL plus masked results out. Drives
//! the generation cycle and post-processes whatever the database returns.

use actix_web::{HttpRequest, HttpResponse, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use super::request_client;
use crate::core::generation::{CycleOutcome, run_cycle};
use crate::core::postprocess::{CHAT_ROW_CAP, process, suggest_chart};
use crate::core::rate_limiter::CHAT_ENDPOINT;
use crate::core::types::ChatTurn;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub sql: Option<String>,
    pub explanation: String,
    pub results: Option<Vec<Value>>,
    /// Pre-truncation total; absent on conversational answers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_count: Option<usize>,
    pub suggested_chart: Option<String>,
}

impl ChatResponse {
    fn conversational(explanation: String) -> Self {
        Self {
            sql: None,
            explanation,
            results: None,
            row_count: None,
            suggested_chart: None,
        }
    }
}

pub async fn chat(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<ChatRequest>,
) -> Result<HttpResponse> {
    let request = body.into_inner();

    // A request with no question is malformed regardless of quota, so this
    // check runs before admission and never consumes a token.
    if request.message.trim().is_empty() {
        return Err(GatewayError::bad_request("message is required"));
    }

    let client = request_client(&req);
    state.rate_limiter.admit(&client, CHAT_ENDPOINT).await?;

    let outcome = run_cycle(&state.orchestrator, &request.message, &request.history).await?;

    match outcome {
        CycleOutcome::Conversational(query) => {
            Ok(HttpResponse::Ok().json(ChatResponse::conversational(query.explanation)))
        }
        CycleOutcome::ExhaustedInvalid { query, error } => Err(GatewayError::NoValidQuery {
            sql: query.sql,
            explanation: format!("query rejected by validator: {error}"),
        }),
        CycleOutcome::Valid(query) => {
            let rows = state.executor.fetch_rows(&query.sql, &query.params).await?;
            let processed = process(rows, CHAT_ROW_CAP);
            info!(
                rows = processed.row_count_total,
                truncated = processed.truncated,
                "chat query executed"
            );

            let suggested_chart = suggest_chart(&processed.rows).to_string();
            Ok(HttpResponse::Ok().json(ChatResponse {
                sql: Some(query.sql),
                explanation: query.explanation,
                results: Some(processed.rows),
                row_count: Some(processed.row_count_total),
                suggested_chart: Some(suggested_chart),
            }))
        }
    }
}
