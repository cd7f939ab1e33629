mod error;
mod report;
mod requests;
mod scoring;
mod sizing;
mod types;

pub use error::ScanError;
pub use report::{
    BankrollBlock, HealthBlock, PositionBlock, RiskBlock, ScanComputedView, ScanDetail,
    ScanInputsView, ScanReport, ScanSummary,
};
pub use requests::{CreateScanRequest, UpdateScanRequest};
pub use scoring::{
    assess_readiness, health_factor, readiness_note, score_exercise, score_sleep, ReadinessAlert,
    WellnessBand,
};
pub use sizing::{plan_position, PositionPlan, SizingPolicy};
pub use types::{ScanInputs, ScanRecord};
