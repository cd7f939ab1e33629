use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::health,
        root::{docs, index},
        scans::{create_scan, delete_scan, get_scan, list_scans, update_scan},
        traders::{create_trader, delete_trader, get_trader, list_traders, update_trader},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    // API routes with CORS
    let api_routes = Router::new()
        // Trader routes
        .route("/traders", get(list_traders).post(create_trader))
        .route(
            "/traders/{id}",
            get(get_trader).patch(update_trader).delete(delete_trader),
        )
        // Scan routes
        .route("/scans", get(list_scans).post(create_scan))
        .route(
            "/scans/{id}",
            get(get_scan).patch(update_scan).delete(delete_scan),
        )
        .layer(cors);

    // Main application router
    Router::new()
        .route("/", get(index))
        .route("/docs", get(docs))
        .route("/health", get(health))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}
