//! Application error type shared by all handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use tradefit_core::market::QuoteError;
use tradefit_core::scan::ScanError;
use tradefit_core::storage::{repository_error_to_status_code, RepositoryError};
use tradefit_core::trader::TraderError;

/// Request payload could not be parsed.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct PayloadError(pub String);

/// Wrapper around `anyhow::Error` that renders as a JSON error response.
///
/// The HTTP status code is derived from the underlying error type; anything
/// unrecognized becomes a 500.
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            let code = repository_error_to_status_code(repo_error);
            return StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        }
        if self.0.downcast_ref::<ScanError>().is_some()
            || self.0.downcast_ref::<TraderError>().is_some()
            || self.0.downcast_ref::<PayloadError>().is_some()
        {
            return StatusCode::UNPROCESSABLE_ENTITY;
        }
        if self.0.downcast_ref::<QuoteError>().is_some() {
            return StatusCode::BAD_GATEWAY;
        }
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.0.to_string();

        if status.is_server_error() {
            tracing::error!(status = %status, message = %message, "request failed");
        } else {
            tracing::warn!(status = %status, message = %message, "request rejected");
        }

        let body = Json(serde_json::json!({
            "status": status.as_u16(),
            "message": message,
        }));

        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// Shorthand for rejecting a request with a 422 and the given detail.
pub fn payload_error(detail: impl Into<String>) -> AppError {
    AppError(PayloadError(detail.into()).into())
}
