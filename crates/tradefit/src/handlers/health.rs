//! Health check endpoint.

use axum::Json;
use chrono::Utc;

/// GET /health - Basic liveness probe.
///
/// Returns 200 with a timestamp. Used to check that the server is up and
/// accepting connections; no storage access happens here.
#[axum::debug_handler]
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "time": Utc::now().to_rfc3339(),
    }))
}
