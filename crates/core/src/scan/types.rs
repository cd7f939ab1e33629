use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::ScanError;
use super::scoring::ReadinessAlert;
use super::sizing::{PositionPlan, SizingPolicy};

/// The wellness and account inputs a scan is computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanInputs {
    /// Trade symbol, stored uppercased.
    pub symbol: String,
    /// Total account value in dollars.
    pub total_value: f64,
    pub sleep_hours: f64,
    pub exercise_minutes: i64,
}

impl ScanInputs {
    /// Validates the raw inputs before any computation or persistence.
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.symbol.trim().is_empty() {
            return Err(ScanError::EmptySymbol);
        }
        if self.symbol.len() > 12 {
            return Err(ScanError::SymbolTooLong);
        }
        if self.total_value <= 0.0 || self.total_value.is_nan() {
            return Err(ScanError::NonPositiveTotalValue);
        }
        if !(0.0..=12.0).contains(&self.sleep_hours) {
            return Err(ScanError::SleepOutOfRange);
        }
        if !(0..=120).contains(&self.exercise_minutes) {
            return Err(ScanError::ExerciseOutOfRange);
        }
        Ok(())
    }
}

/// A persisted morning scan: the inputs, the policy snapshot it was sized
/// under, and every derived value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanRecord {
    pub id: Uuid,
    /// The trader who recorded this scan, if any. Cleared when the trader
    /// is deleted.
    pub trader_id: Option<Uuid>,
    pub symbol: String,
    pub total_value: f64,
    pub sleep_hours: f64,
    pub exercise_minutes: i64,
    /// Policy snapshot: risk budget fraction in effect when sizing ran.
    pub risk_per_trade_pct: f64,
    /// Policy snapshot: stop-loss fraction in effect when sizing ran.
    pub stop_loss_pct: f64,
    pub bankroll_pct: f64,
    pub bankroll_amount: f64,
    pub health_factor: f64,
    pub health_alert: ReadinessAlert,
    pub health_note: String,
    pub risk_per_trade_usd: f64,
    pub position_usd: f64,
    pub entry_price: f64,
    pub est_shares: f64,
    pub stop_loss_per_share: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ScanRecord {
    /// Builds a record from validated inputs and a computed plan.
    pub fn new(
        trader_id: Option<Uuid>,
        inputs: ScanInputs,
        policy: &SizingPolicy,
        plan: PositionPlan,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            trader_id,
            symbol: inputs.symbol,
            total_value: inputs.total_value,
            sleep_hours: inputs.sleep_hours,
            exercise_minutes: inputs.exercise_minutes,
            risk_per_trade_pct: policy.risk_per_trade_pct,
            stop_loss_pct: policy.stop_loss_pct,
            bankroll_pct: plan.bankroll_pct,
            bankroll_amount: plan.bankroll_amount,
            health_factor: plan.health_factor,
            health_alert: plan.health_alert,
            health_note: plan.health_note,
            risk_per_trade_usd: plan.risk_per_trade_usd,
            position_usd: plan.position_usd,
            entry_price: plan.entry_price,
            est_shares: plan.est_shares,
            stop_loss_per_share: plan.stop_loss_per_share,
            created_at: now,
            updated_at: now,
        }
    }

    /// The inputs this record was computed from.
    pub fn inputs(&self) -> ScanInputs {
        ScanInputs {
            symbol: self.symbol.clone(),
            total_value: self.total_value,
            sleep_hours: self.sleep_hours,
            exercise_minutes: self.exercise_minutes,
        }
    }

    /// Replaces the inputs and derived values after a recompute, stamping
    /// a new updated_at. The creation time is preserved.
    pub fn apply_plan(&mut self, inputs: ScanInputs, policy: &SizingPolicy, plan: PositionPlan) {
        self.symbol = inputs.symbol;
        self.total_value = inputs.total_value;
        self.sleep_hours = inputs.sleep_hours;
        self.exercise_minutes = inputs.exercise_minutes;
        self.risk_per_trade_pct = policy.risk_per_trade_pct;
        self.stop_loss_pct = policy.stop_loss_pct;
        self.bankroll_pct = plan.bankroll_pct;
        self.bankroll_amount = plan.bankroll_amount;
        self.health_factor = plan.health_factor;
        self.health_alert = plan.health_alert;
        self.health_note = plan.health_note;
        self.risk_per_trade_usd = plan.risk_per_trade_usd;
        self.position_usd = plan.position_usd;
        self.entry_price = plan.entry_price;
        self.est_shares = plan.est_shares;
        self.stop_loss_per_share = plan.stop_loss_per_share;
        self.updated_at = Utc::now();
    }
}
