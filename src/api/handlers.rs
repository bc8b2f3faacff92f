//! REST API endpoint handlers

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::{info, warn};

use crate::api::types::{HealthResponse, QueryResponse, StockQueryRequest};
use crate::data::parse_day;
use crate::error::AppError;
use crate::services::StockService;
use crate::state::AppState;

/// Health check endpoint - GET /health
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Stock query endpoint - POST /api/stocks
///
/// Body: `{ "ticker": ..., "startDate": "YYYY-MM-DD", "endDate": "YYYY-MM-DD" }`.
/// Absent (or empty) fields are rejected with 400 before the dataset is
/// touched; a matching query returns 200 even when the result is empty.
pub async fn query_stocks(
    State(state): State<Arc<AppState>>,
    Json(req): Json<StockQueryRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (ticker, start_date, end_date) = match (&req.ticker, &req.start_date, &req.end_date) {
        (Some(t), Some(s), Some(e)) if !t.is_empty() && !s.is_empty() && !e.is_empty() => {
            (t, s, e)
        }
        _ => {
            warn!("Rejected stock query with missing fields");
            return Err(AppError::MissingFields);
        }
    };

    let start = parse_day(start_date).ok_or_else(|| AppError::InvalidDate(start_date.clone()))?;
    let end = parse_day(end_date).ok_or_else(|| AppError::InvalidDate(end_date.clone()))?;

    let data = StockService::query(&state, ticker, start, end)?;
    info!("Stock query for {} returned {} rows", ticker, data.len());

    Ok((StatusCode::OK, Json(QueryResponse::success(data))))
}
