//! Scan CRUD handlers.
//!
//! A scan runs the readiness scoring and position sizing pipeline against the
//! submitted inputs and stores the result. Updates recompute the whole plan
//! from the revised inputs.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use tradefit_core::scan::{
    plan_position, CreateScanRequest, ScanDetail, ScanError, ScanRecord, ScanReport, ScanSummary,
    UpdateScanRequest,
};
use tradefit_core::storage::{RepositoryError, ScanFilter};

use crate::{
    handlers::error::{payload_error, AppError},
    state::AppState,
};

/// Query parameters for listing scans.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListScansQuery {
    /// Filter by symbol (case-insensitive)
    pub symbol: Option<String>,
    /// Filter by owning trader
    pub trader_id: Option<Uuid>,
    /// Page size, clamped to 1-500 (default: 50)
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Number of scans to skip (default: 0)
    #[serde(default)]
    pub offset: u32,
}

fn default_limit() -> u32 {
    ScanFilter::DEFAULT_LIMIT
}

impl ListScansQuery {
    fn into_filter(self) -> ScanFilter {
        let mut filter = ScanFilter::new().with_page(self.limit, self.offset);
        if let Some(symbol) = self.symbol {
            filter = filter.with_symbol(symbol);
        }
        if let Some(trader_id) = self.trader_id {
            filter = filter.with_trader(trader_id);
        }
        filter
    }
}

/// Resolve the price a plan is computed at.
///
/// An explicit price from the payload wins; otherwise the quote source is
/// asked, and a symbol it does not know is a validation error.
async fn resolve_price(
    state: &AppState,
    symbol: &str,
    explicit: Option<f64>,
) -> Result<f64, AppError> {
    if let Some(price) = explicit {
        return Ok(price);
    }

    match state.quotes.latest_price(symbol).await? {
        Some(price) => Ok(price),
        None => Err(ScanError::NoPriceData(symbol.to_string()).into()),
    }
}

/// Verify that a referenced trader exists.
async fn require_trader(state: &AppState, trader_id: Uuid) -> Result<(), AppError> {
    let trader = state.trader_repo.get_trader(trader_id).await?;
    if trader.is_none() {
        return Err(RepositoryError::InvalidData(format!("Trader {trader_id} not found")).into());
    }
    Ok(())
}

// ============================================================================
// List Scans
// ============================================================================

/// List scan summaries with optional filters (GET /api/scans).
pub async fn list_scans(
    State(state): State<AppState>,
    query: Result<Query<ListScansQuery>, QueryRejection>,
) -> Result<Json<Vec<ScanSummary>>, AppError> {
    let Query(query) = query.map_err(|e| payload_error(e.body_text()))?;

    let scans = state.scan_repo.list_scans(query.into_filter()).await?;
    let summaries = scans.iter().map(ScanSummary::from_record).collect();

    Ok(Json(summaries))
}

// ============================================================================
// Create Scan
// ============================================================================

/// Run and store a new scan (POST /api/scans).
pub async fn create_scan(
    State(state): State<AppState>,
    payload: Result<Json<CreateScanRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ScanReport>), AppError> {
    let Json(payload) = payload.map_err(|e| payload_error(e.body_text()))?;

    tracing::debug!(payload = ?payload, "Received create scan request");

    let entry_price = payload.entry_price;
    let trader_id = payload.trader_id;

    let inputs = payload.into_inputs();
    inputs.validate()?;

    // Verify the owning trader exists before computing anything
    if let Some(trader_id) = trader_id {
        require_trader(&state, trader_id).await?;
    }

    let price = resolve_price(&state, &inputs.symbol, entry_price).await?;
    let plan = plan_position(&inputs, price, &state.policy)?;
    let record = ScanRecord::new(trader_id, inputs, &state.policy, plan);

    state.scan_repo.create_scan(&record).await?;

    tracing::info!(scan_id = %record.id, symbol = %record.symbol, "Created scan");

    Ok((StatusCode::CREATED, Json(ScanReport::from_record(&record))))
}

// ============================================================================
// Get Scan
// ============================================================================

/// Get full scan detail by ID (GET /api/scans/{id}).
pub async fn get_scan(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ScanDetail>, AppError> {
    let scan = state.scan_repo.get_scan(id).await?;

    match scan {
        Some(s) => Ok(Json(ScanDetail::from_record(&s))),
        None => Err(RepositoryError::NotFound {
            entity_type: "ScanRecord",
            id: id.to_string(),
        }
        .into()),
    }
}

// ============================================================================
// Update Scan
// ============================================================================

/// Revise a scan's inputs and recompute the plan (PATCH /api/scans/{id}).
pub async fn update_scan(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<UpdateScanRequest>, JsonRejection>,
) -> Result<Json<ScanReport>, AppError> {
    let Json(payload) = payload.map_err(|e| payload_error(e.body_text()))?;

    tracing::debug!(scan_id = %id, payload = ?payload, "Received update scan request");

    let mut record = state.scan_repo.get_scan(id).await?.ok_or_else(|| {
        AppError::from(RepositoryError::NotFound {
            entity_type: "ScanRecord",
            id: id.to_string(),
        })
    })?;

    let explicit_price = payload.entry_price;
    let trader_patch = payload.trader_id;

    let prior_symbol = record.symbol.clone();
    let mut inputs = record.inputs();
    payload.apply_to(&mut inputs);
    inputs.validate()?;

    if let Some(trader_id) = trader_patch {
        require_trader(&state, trader_id).await?;
    }

    // A new symbol invalidates the stored price unless the patch set one
    let price = match explicit_price {
        Some(price) => price,
        None if inputs.symbol != prior_symbol => {
            resolve_price(&state, &inputs.symbol, None).await?
        }
        None => record.entry_price,
    };

    let plan = plan_position(&inputs, price, &state.policy)?;
    record.apply_plan(inputs, &state.policy, plan);
    if let Some(trader_id) = trader_patch {
        record.trader_id = Some(trader_id);
    }

    state.scan_repo.update_scan(&record).await?;

    tracing::info!(scan_id = %record.id, "Updated scan");

    Ok(Json(ScanReport::from_record(&record)))
}

// ============================================================================
// Delete Scan
// ============================================================================

/// Delete a scan by ID (DELETE /api/scans/{id}).
pub async fn delete_scan(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    tracing::debug!(scan_id = %id, "Received delete scan request");

    state.scan_repo.delete_scan(id).await?;

    tracing::info!(scan_id = %id, "Deleted scan");

    Ok(StatusCode::OK)
}
