//! CSV dataset loader
//!
//! The dataset is a flat delimited file with a header row containing at
//! least `Date`, `Close` and `Ticker` (matched case-insensitively) plus any
//! number of passthrough columns. The file is reopened and re-parsed on
//! every query; there is no cache and no mutation.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use tracing::debug;

use crate::data::StockRecord;
use crate::error::{AppError, Result};

/// Loader for the CSV price dataset.
pub struct DatasetLoader {
    path: PathBuf,
}

impl DatasetLoader {
    /// Create a loader for the dataset at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and parse the whole dataset, preserving file order.
    pub fn load(&self) -> Result<Vec<StockRecord>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .map_err(|e| {
                if matches!(e.kind(), csv::ErrorKind::Io(_)) {
                    AppError::DataUnavailable(format!("{}: {}", self.path.display(), e))
                } else {
                    AppError::Csv(e)
                }
            })?;

        let headers: Vec<String> = rdr.headers()?.iter().map(|s| s.to_string()).collect();
        let columns = ColumnIndex::from_headers(&headers)?;

        let mut records = Vec::new();
        for (idx, row) in rdr.records().enumerate() {
            let row = row?;
            // Header row is line 1.
            let line = idx as u64 + 2;
            records.push(columns.parse_row(&row, &headers, line)?);
        }

        debug!("Loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }

    /// Sorted distinct tickers present in the dataset.
    pub fn tickers(&self) -> Result<Vec<String>> {
        let mut tickers: Vec<String> = self.load()?.into_iter().map(|r| r.ticker).collect();
        tickers.sort();
        tickers.dedup();
        Ok(tickers)
    }
}

/// Positions of the required columns within the header row.
struct ColumnIndex {
    date: usize,
    ticker: usize,
    close: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &[String]) -> Result<Self> {
        let find = |name: &str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(name))
                .ok_or_else(|| AppError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            date: find("date")?,
            ticker: find("ticker")?,
            close: find("close")?,
        })
    }

    fn parse_row(
        &self,
        row: &csv::StringRecord,
        headers: &[String],
        line: u64,
    ) -> Result<StockRecord> {
        let field = |idx: usize| row.get(idx).unwrap_or("");

        let date = parse_day(field(self.date)).ok_or_else(|| {
            AppError::InvalidData(format!(
                "line {}: unparseable date {:?}",
                line,
                field(self.date)
            ))
        })?;

        let close: f64 = field(self.close).parse().map_err(|_| {
            AppError::InvalidData(format!(
                "line {}: unparseable close {:?}",
                line,
                field(self.close)
            ))
        })?;

        let ticker = field(self.ticker).to_string();

        let mut extra = BTreeMap::new();
        for (idx, header) in headers.iter().enumerate() {
            if idx == self.date || idx == self.ticker || idx == self.close {
                continue;
            }
            if let Some(value) = row.get(idx) {
                extra.insert(header.clone(), value.to_string());
            }
        }

        Ok(StockRecord {
            date,
            ticker,
            close,
            extra,
        })
    }
}

/// Parse a calendar day, zeroing any time-of-day component.
///
/// Accepts plain `YYYY-MM-DD` as well as timestamped variants, which are
/// truncated to their date.
pub fn parse_day(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    None
}
