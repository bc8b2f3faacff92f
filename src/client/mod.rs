//! Client-side query workflow
//!
//! Provides:
//! - `StockApiClient` - HTTP client for the query endpoint
//! - `FormController` - validation, sequential per-ticker fetching and the
//!   submission state machine that backs the analysis form

mod api_client;
mod form;

pub use api_client::StockApiClient;
pub use form::{
    FormController, Selection, SubmitPhase, TickerSeries, FETCH_ERROR_MESSAGE, VALIDATION_MESSAGE,
};
