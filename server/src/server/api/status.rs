//! Liveness endpoints.

use axum::Json;
use serde_json::{json, Value};

/// GET /
pub async fn index() -> Json<Value> {
    Json(json!({ "ok": true, "msg": "Hola" }))
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "OK" }))
}
