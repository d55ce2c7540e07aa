//! CSV export endpoint
//!
//! Same input contract as the query endpoint, but the result leaves as a
//! file download. Oversized results are refused outright - a silently
//! truncated export would misrepresent the data.

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, web};

use super::query::QueryRequest;
use super::request_client;
use crate::core::postprocess::{EXPORT_ROW_CAP, mask_rows, rows_to_csv};
use crate::core::rate_limiter::EXPORT_ENDPOINT;
use crate::core::validator::validate_sql;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};

pub async fn export(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<QueryRequest>,
) -> Result<HttpResponse> {
    let client = request_client(&req);
    state.rate_limiter.admit(&client, EXPORT_ENDPOINT).await?;

    let request = body.into_inner();
    if request.sql.trim().is_empty() {
        return Err(GatewayError::bad_request("sql is required"));
    }
    validate_sql(&request.sql)?;

    let mut rows = state.executor.fetch_rows(&request.sql, &request.params).await?;
    if rows.len() > EXPORT_ROW_CAP {
        return Err(GatewayError::bad_request(format!(
            "result exceeds the export limit of {EXPORT_ROW_CAP} rows; narrow the query with filters"
        )));
    }

    mask_rows(&mut rows);
    let csv = rows_to_csv(&rows);
    let filename = format!("export-{}.csv", chrono::Utc::now().timestamp_millis());

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ))
        .body(csv))
}
