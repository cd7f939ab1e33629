//! Service index and API documentation handlers.

use axum::Json;

/// GET / - Service index.
///
/// Returns the service name, version and a list of available endpoints.
#[axum::debug_handler]
pub async fn index() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": "TradeFit Scan API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "GET /",
            "GET /docs",
            "GET /health",
            "GET /api/traders",
            "POST /api/traders",
            "GET /api/traders/{id}",
            "PATCH /api/traders/{id}",
            "DELETE /api/traders/{id}",
            "GET /api/scans",
            "POST /api/scans",
            "GET /api/scans/{id}",
            "PATCH /api/scans/{id}",
            "DELETE /api/scans/{id}",
        ],
        "docs": "/docs",
    }))
}

/// GET /docs - API documentation.
///
/// Returns a machine-readable catalog of every endpoint with request and
/// query parameter descriptions.
#[axum::debug_handler]
pub async fn docs() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "title": "TradeFit Scan API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Morning trade-readiness scans. Each scan combines account \
            value with sleep and exercise inputs to produce a health-adjusted \
            bankroll, risk budget and position size for a symbol.",
        "endpoints": [
            {
                "path": "/",
                "method": "GET",
                "summary": "Service index",
            },
            {
                "path": "/docs",
                "method": "GET",
                "summary": "This document",
            },
            {
                "path": "/health",
                "method": "GET",
                "summary": "Liveness probe",
            },
            {
                "path": "/api/traders",
                "method": "GET",
                "summary": "List traders, ordered by name",
            },
            {
                "path": "/api/traders",
                "method": "POST",
                "summary": "Create a trader",
                "request_body": {
                    "name": "required, unique display name",
                    "email": "optional contact address",
                },
            },
            {
                "path": "/api/traders/{id}",
                "method": "GET",
                "summary": "Fetch one trader",
                "path_params": { "id": "trader UUID" },
            },
            {
                "path": "/api/traders/{id}",
                "method": "PATCH",
                "summary": "Update a trader's name or email",
                "request_body": {
                    "name": "optional new display name",
                    "email": "optional new contact address",
                },
            },
            {
                "path": "/api/traders/{id}",
                "method": "DELETE",
                "summary": "Delete a trader; their scans are kept but detached",
            },
            {
                "path": "/api/scans",
                "method": "GET",
                "summary": "List scan summaries, newest first",
                "query_params": {
                    "symbol": "optional ticker filter, case-insensitive",
                    "trader_id": "optional trader UUID filter",
                    "limit": "page size, 1-500 (default 50)",
                    "offset": "number of scans to skip (default 0)",
                },
            },
            {
                "path": "/api/scans",
                "method": "POST",
                "summary": "Run a morning scan and store the resulting plan",
                "request_body": {
                    "trade_symbol": "required ticker",
                    "total_value": "required account value in USD, must be positive",
                    "sleep_hours": "required, 0-12",
                    "exercise_minutes": "required, 0-120",
                    "entry_price": "optional price override; otherwise quoted",
                    "trader_id": "optional owning trader UUID",
                },
            },
            {
                "path": "/api/scans/{id}",
                "method": "GET",
                "summary": "Full scan detail with inputs and computed plan",
                "path_params": { "id": "scan UUID" },
            },
            {
                "path": "/api/scans/{id}",
                "method": "PATCH",
                "summary": "Revise scan inputs; the plan is recomputed",
                "request_body": {
                    "trade_symbol": "optional new ticker",
                    "total_value": "optional new account value",
                    "sleep_hours": "optional, 0-12",
                    "exercise_minutes": "optional, 0-120",
                    "entry_price": "optional price override",
                    "trader_id": "optional trader UUID to reassign the scan to",
                },
            },
            {
                "path": "/api/scans/{id}",
                "method": "DELETE",
                "summary": "Delete a scan",
            },
        ],
        "notes": [
            "Prices come from a built-in quote table unless entry_price is given.",
            "Unknown fields in request bodies are rejected.",
            "Stored values keep full precision; report fields are rounded for display.",
        ],
    }))
}
