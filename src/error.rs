//! Application error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Dataset unavailable: {0}")]
    DataUnavailable(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("A submission is already in progress")]
    Busy,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Wire-level error body: `{ "error": "..." }`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl AppError {
    /// HTTP status this error surfaces as
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingFields | AppError::InvalidDate(_) | AppError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::DataUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorBody {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
