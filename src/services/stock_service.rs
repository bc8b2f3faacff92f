//! Stock Service
//!
//! Handles date-filtered price queries against the CSV dataset.
//! Called by both the REST API and the integration tests.

use chrono::NaiveDate;
use tracing::info;

use crate::data::{DatasetLoader, StockRecord};
use crate::error::Result;
use crate::state::AppState;

/// Stock service for business logic
pub struct StockService;

impl StockService {
    /// Fetch all records for `ticker` whose date falls in
    /// `[start_date, end_date]` inclusive, at day granularity.
    ///
    /// The dataset is reopened and re-parsed on every call and results keep
    /// file order. An inverted range yields an empty result rather than an
    /// error. Ticker comparison is case-sensitive.
    pub fn query(
        state: &AppState,
        ticker: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<StockRecord>> {
        info!(
            "StockService::query - {} {} to {}",
            ticker, start_date, end_date
        );

        let loader = DatasetLoader::new(&state.config.dataset_path);
        let records = loader.load()?;

        Ok(records
            .into_iter()
            .filter(|r| r.ticker == ticker && r.date >= start_date && r.date <= end_date)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn state_with_dataset(contents: &str) -> (AppState, NamedTempFile) {
        let mut file = NamedTempFile::new().expect("temp dataset");
        file.write_all(contents.as_bytes()).expect("write dataset");

        let config = ServerConfig {
            dataset_path: file.path().to_path_buf(),
            ..ServerConfig::default()
        };
        (AppState::new(config), file)
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const TWO_MONTHS: &str = "Date,Close,Ticker\n\
                              2024-01-01,100,AAPL\n\
                              2024-02-01,110,AAPL\n";

    #[test]
    fn range_filter_is_inclusive_at_day_granularity() {
        let (state, _file) = state_with_dataset(TWO_MONTHS);

        let records =
            StockService::query(&state, "AAPL", day(2024, 1, 1), day(2024, 1, 31)).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date, day(2024, 1, 1));
        assert_eq!(records[0].close, 100.0);
    }

    #[test]
    fn every_result_matches_ticker_and_range() {
        let (state, _file) = state_with_dataset(
            "Date,Close,Ticker\n\
             2024-01-01,100,AAPL\n\
             2024-01-01,390,MSFT\n\
             2024-01-02,101,AAPL\n\
             2024-03-01,115,AAPL\n",
        );

        let start = day(2024, 1, 1);
        let end = day(2024, 1, 31);
        let records = StockService::query(&state, "AAPL", start, end).unwrap();

        assert_eq!(records.len(), 2);
        for record in &records {
            assert_eq!(record.ticker, "AAPL");
            assert!(record.date >= start && record.date <= end);
        }
    }

    #[test]
    fn inverted_range_yields_empty() {
        let (state, _file) = state_with_dataset(TWO_MONTHS);

        let records =
            StockService::query(&state, "AAPL", day(2024, 2, 1), day(2024, 1, 1)).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn absent_ticker_yields_empty() {
        let (state, _file) = state_with_dataset(TWO_MONTHS);

        let records =
            StockService::query(&state, "GOOG", day(2024, 1, 1), day(2024, 12, 31)).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn ticker_comparison_is_case_sensitive() {
        let (state, _file) = state_with_dataset(TWO_MONTHS);

        let records =
            StockService::query(&state, "aapl", day(2024, 1, 1), day(2024, 12, 31)).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn repeated_queries_are_identical() {
        let (state, _file) = state_with_dataset(TWO_MONTHS);

        let start = day(2024, 1, 1);
        let end = day(2024, 12, 31);
        let first = StockService::query(&state, "AAPL", start, end).unwrap();
        let second = StockService::query(&state, "AAPL", start, end).unwrap();
        assert_eq!(first, second);
    }
}
