//! REST API handlers grouped by domain.

pub mod error;
pub mod filter;
pub mod status;

use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

/// Standard error response: `{"error": message}`.
pub fn err_json(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "error": message })))
}
