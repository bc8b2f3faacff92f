//! REST API request/response types

use serde::{Deserialize, Serialize};

use crate::data::StockRecord;

/// Stock query request - POST /api/stocks
///
/// All fields are optional at the wire level so that an absent field can be
/// rejected with the documented 400 body instead of a deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockQueryRequest {
    #[serde(default)]
    pub ticker: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

impl StockQueryRequest {
    pub fn new(ticker: &str, start_date: &str, end_date: &str) -> Self {
        Self {
            ticker: Some(ticker.to_string()),
            start_date: Some(start_date.to_string()),
            end_date: Some(end_date.to_string()),
        }
    }
}

/// Successful query response: `{ "message": "Success", "data": [...] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub message: String,
    pub data: Vec<StockRecord>,
}

impl QueryResponse {
    pub fn success(data: Vec<StockRecord>) -> Self {
        Self {
            message: "Success".to_string(),
            data,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
