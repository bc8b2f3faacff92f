//! Form submission controller
//!
//! Owns the ticker/date selection workflow: validate the selection, issue
//! one query per ticker sequentially, and hand the aggregated series to the
//! rendering layer. Submission phases follow
//! Idle -> Submitting -> {Success, Failed}; a new submission moves the
//! controller back through Submitting, and while Submitting further
//! submissions are rejected. No retry, no timeout, no cancellation.

use parking_lot::RwLock;
use serde::Serialize;
use tracing::{info, warn};

use crate::client::StockApiClient;
use crate::data::StockRecord;
use crate::error::{AppError, Result};

/// Message shown when the selection is incomplete
pub const VALIDATION_MESSAGE: &str = "Please select at least one ticker and fill in all fields.";

/// Message shown when any per-ticker query fails
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching stock data.";

/// User selection for one submission
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub tickers: Vec<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Aggregated query result for one ticker
#[derive(Debug, Clone, Serialize)]
pub struct TickerSeries {
    pub ticker: String,
    pub records: Vec<StockRecord>,
}

/// Submission phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
    Success,
    Failed(String),
}

/// Controller for the analysis form
pub struct FormController {
    client: StockApiClient,
    phase: RwLock<SubmitPhase>,
}

impl FormController {
    pub fn new(client: StockApiClient) -> Self {
        Self {
            client,
            phase: RwLock::new(SubmitPhase::Idle),
        }
    }

    /// Current submission phase
    pub fn phase(&self) -> SubmitPhase {
        self.phase.read().clone()
    }

    /// Validate and submit a selection.
    ///
    /// Queries run one at a time, in selection order. The first failure
    /// aborts the submission and discards any partial results; the caller
    /// sees a single aggregate failure.
    pub async fn submit(&self, selection: &Selection) -> Result<Vec<TickerSeries>> {
        let (start_date, end_date) = validate(selection)?;

        self.begin()?;

        let mut series = Vec::with_capacity(selection.tickers.len());
        for ticker in &selection.tickers {
            match self
                .client
                .fetch_stock_data(ticker, &start_date, &end_date)
                .await
            {
                Ok(records) => series.push(TickerSeries {
                    ticker: ticker.clone(),
                    records,
                }),
                Err(e) => {
                    warn!("Submission aborted: query for {} failed: {}", ticker, e);
                    *self.phase.write() = SubmitPhase::Failed(FETCH_ERROR_MESSAGE.to_string());
                    return Err(AppError::Api(FETCH_ERROR_MESSAGE.to_string()));
                }
            }
        }

        info!("Submission fetched {} series", series.len());
        *self.phase.write() = SubmitPhase::Success;
        Ok(series)
    }

    /// Move into Submitting, rejecting re-entrant submissions.
    fn begin(&self) -> Result<()> {
        let mut phase = self.phase.write();
        if *phase == SubmitPhase::Submitting {
            return Err(AppError::Busy);
        }
        *phase = SubmitPhase::Submitting;
        Ok(())
    }
}

/// Presence checks. Runs before any request is issued; an incomplete
/// selection never reaches the network.
fn validate(selection: &Selection) -> Result<(String, String)> {
    let start = selection.start_date.as_deref().unwrap_or("").trim();
    let end = selection.end_date.as_deref().unwrap_or("").trim();

    if selection.tickers.is_empty() || start.is_empty() || end.is_empty() {
        return Err(AppError::Validation(VALIDATION_MESSAGE.to_string()));
    }

    Ok((start.to_string(), end.to_string()))
}
