//! Price dataset types and loading

pub mod loader;

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use loader::{parse_day, DatasetLoader};

/// One row of the historical price dataset.
///
/// The required columns are parsed into typed fields; any further columns
/// are passed through untouched under their original header names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    pub date: NaiveDate,
    pub ticker: String,
    pub close: f64,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_with_lowercase_fields() {
        let record = StockRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            ticker: "AAPL".to_string(),
            close: 100.0,
            extra: BTreeMap::new(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "2024-01-01");
        assert_eq!(json["ticker"], "AAPL");
        assert_eq!(json["close"], 100.0);
    }

    #[test]
    fn extra_columns_flatten_into_the_object() {
        let mut extra = BTreeMap::new();
        extra.insert("Volume".to_string(), "1200".to_string());

        let record = StockRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            ticker: "AAPL".to_string(),
            close: 100.0,
            extra,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["Volume"], "1200");
    }
}
