//! Trader CRUD handlers.
//!
//! These handlers use repository trait objects for database access. Name
//! uniqueness is enforced by the storage layer; the rename path pre-checks it
//! so the conflict response can name the taken name.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use tradefit_core::storage::RepositoryError;
use tradefit_core::trader::{validate_trader, CreateTraderRequest, Trader, UpdateTraderRequest};

use crate::{
    handlers::error::{payload_error, AppError},
    state::AppState,
};

// ============================================================================
// List Traders
// ============================================================================

/// List all traders (GET /api/traders).
pub async fn list_traders(State(state): State<AppState>) -> Result<Json<Vec<Trader>>, AppError> {
    let traders = state.trader_repo.list_traders().await?;

    Ok(Json(traders))
}

// ============================================================================
// Create Trader
// ============================================================================

/// Create a new trader (POST /api/traders).
pub async fn create_trader(
    State(state): State<AppState>,
    payload: Result<Json<CreateTraderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Trader>), AppError> {
    let Json(payload) = payload.map_err(|e| payload_error(e.body_text()))?;

    tracing::debug!(payload = ?payload, "Received create trader request");

    let trader = payload.into_trader();
    validate_trader(&trader)?;

    state.trader_repo.create_trader(&trader).await?;

    tracing::info!(trader_id = %trader.id, name = %trader.name, "Created trader");

    Ok((StatusCode::CREATED, Json(trader)))
}

// ============================================================================
// Get Trader
// ============================================================================

/// Get a single trader by ID (GET /api/traders/{id}).
pub async fn get_trader(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Trader>, AppError> {
    let trader = state.trader_repo.get_trader(id).await?;

    match trader {
        Some(t) => Ok(Json(t)),
        None => Err(RepositoryError::NotFound {
            entity_type: "Trader",
            id: id.to_string(),
        }
        .into()),
    }
}

// ============================================================================
// Update Trader
// ============================================================================

/// Update a trader by ID (PATCH /api/traders/{id}).
pub async fn update_trader(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<UpdateTraderRequest>, JsonRejection>,
) -> Result<Json<Trader>, AppError> {
    let Json(payload) = payload.map_err(|e| payload_error(e.body_text()))?;

    tracing::debug!(trader_id = %id, payload = ?payload, "Received update trader request");

    let mut trader = state.trader_repo.get_trader(id).await?.ok_or_else(|| {
        AppError::from(RepositoryError::NotFound {
            entity_type: "Trader",
            id: id.to_string(),
        })
    })?;

    let renamed = payload
        .name
        .as_deref()
        .map(str::trim)
        .is_some_and(|n| n != trader.name);

    payload.apply_to(&mut trader);
    validate_trader(&trader)?;

    // A rename must not take another trader's name
    if renamed {
        if let Some(existing) = state.trader_repo.get_trader_by_name(&trader.name).await? {
            if existing.id != trader.id {
                return Err(RepositoryError::AlreadyExists {
                    entity_type: "Trader",
                    id: existing.name,
                }
                .into());
            }
        }
    }

    state.trader_repo.update_trader(&trader).await?;

    tracing::info!(trader_id = %trader.id, "Updated trader");

    Ok(Json(trader))
}

// ============================================================================
// Delete Trader
// ============================================================================

/// Delete a trader by ID (DELETE /api/traders/{id}).
///
/// The trader's scans are kept and detached, not deleted.
pub async fn delete_trader(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    tracing::debug!(trader_id = %id, "Received delete trader request");

    state.trader_repo.delete_trader(id).await?;

    tracing::info!(trader_id = %id, "Deleted trader");

    Ok(StatusCode::OK)
}
