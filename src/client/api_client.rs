//! HTTP client for the stock query endpoint

use tracing::warn;

use crate::api::types::{QueryResponse, StockQueryRequest};
use crate::data::StockRecord;
use crate::error::{AppError, Result};

/// Client for the stock query API
pub struct StockApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl StockApiClient {
    /// Create a client against `base_url`, e.g. `http://127.0.0.1:8787`
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch records for one ticker over an inclusive date range.
    ///
    /// Transport errors and non-2xx statuses both surface as errors; the
    /// caller does not distinguish them further.
    pub async fn fetch_stock_data(
        &self,
        ticker: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<StockRecord>> {
        let url = format!("{}/api/stocks", self.base_url);
        let request = StockQueryRequest::new(ticker, start_date, end_date);

        let response = self.http.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            warn!(
                "Stock query for {} failed with status {}",
                ticker,
                response.status()
            );
            return Err(AppError::Api(format!(
                "request for {} failed with status {}",
                ticker,
                response.status()
            )));
        }

        let body: QueryResponse = response.json().await?;
        Ok(body.data)
    }
}
