//! Stock query REST API
//!
//! Provides:
//! - POST /api/stocks - date-filtered price query against the CSV dataset
//! - GET /health - liveness probe

pub mod handlers;
mod server;
pub mod types;

pub use server::ApiServer;
pub use types::{HealthResponse, QueryResponse, StockQueryRequest};
