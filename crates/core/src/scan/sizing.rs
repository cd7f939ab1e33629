//! Health-aware position sizing.
//!
//! The bankroll committed for the day is a configured fraction of account
//! value, optionally scaled by the health factor. A fixed fraction of that
//! bankroll becomes the dollar risk budget, and the position is the risk
//! budget divided by the stop-loss distance, capped at the bankroll itself.

use serde::{Deserialize, Serialize};

use super::error::ScanError;
use super::scoring::{self, ReadinessAlert};
use super::types::ScanInputs;

/// Position-sizing policy knobs, loaded from configuration by the server.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizingPolicy {
    /// Base fraction of total account value committed as bankroll.
    pub bankroll_base_pct: f64,
    /// Whether the bankroll fraction is scaled by the health factor.
    pub bankroll_health_scale: bool,
    /// Fraction of the bankroll risked on a single trade.
    pub risk_per_trade_pct: f64,
    /// Stop-loss distance as a fraction of position size.
    pub stop_loss_pct: f64,
}

impl Default for SizingPolicy {
    fn default() -> Self {
        Self {
            bankroll_base_pct: 0.10,
            bankroll_health_scale: true,
            risk_per_trade_pct: 0.05,
            stop_loss_pct: 0.01,
        }
    }
}

/// Everything derived from one scan's inputs by [`plan_position`].
#[derive(Debug, Clone, PartialEq)]
pub struct PositionPlan {
    pub health_factor: f64,
    pub health_alert: ReadinessAlert,
    pub health_note: String,
    pub bankroll_pct: f64,
    pub bankroll_amount: f64,
    pub risk_per_trade_usd: f64,
    pub position_usd: f64,
    pub entry_price: f64,
    pub est_shares: f64,
    pub stop_loss_per_share: f64,
}

/// Scores the inputs and sizes the position at the given entry price.
///
/// Values are returned at full precision; rounding happens only when a
/// report is built.
pub fn plan_position(
    inputs: &ScanInputs,
    entry_price: f64,
    policy: &SizingPolicy,
) -> Result<PositionPlan, ScanError> {
    if entry_price <= 0.0 || entry_price.is_nan() {
        return Err(ScanError::NonPositivePrice);
    }
    if policy.stop_loss_pct <= 0.0 {
        return Err(ScanError::InvalidStopLoss);
    }

    let sleep = scoring::score_sleep(inputs.sleep_hours);
    let exercise = scoring::score_exercise(inputs.exercise_minutes);
    let health_factor = scoring::health_factor(sleep, exercise);
    let (health_alert, _) = scoring::assess_readiness(sleep, exercise);
    let health_note = scoring::readiness_note(sleep, exercise);

    let bankroll_pct = if policy.bankroll_health_scale {
        policy.bankroll_base_pct * health_factor
    } else {
        policy.bankroll_base_pct
    };
    let bankroll_amount = inputs.total_value * bankroll_pct;
    if bankroll_amount <= 0.0 {
        return Err(ScanError::ZeroBankroll);
    }

    let risk_per_trade_usd = bankroll_amount * policy.risk_per_trade_pct;

    // Position sized off the risk budget, never exceeding the bankroll
    let raw_position_usd = risk_per_trade_usd / policy.stop_loss_pct;
    let position_usd = raw_position_usd.min(bankroll_amount);

    let est_shares = position_usd / entry_price;
    let stop_loss_per_share = (position_usd * policy.stop_loss_pct) / est_shares;

    Ok(PositionPlan {
        health_factor,
        health_alert,
        health_note,
        bankroll_pct,
        bankroll_amount,
        risk_per_trade_usd,
        position_usd,
        entry_price,
        est_shares,
        stop_loss_per_share,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(total_value: f64, sleep_hours: f64, exercise_minutes: i64) -> ScanInputs {
        ScanInputs {
            symbol: "AAPL".to_string(),
            total_value,
            sleep_hours,
            exercise_minutes,
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_plan_with_full_health() {
        let policy = SizingPolicy::default();
        let plan = plan_position(&inputs(10_000.0, 8.0, 95), 200.0, &policy).unwrap();

        // factor 1.0, so bankroll is the full 10% base
        assert_eq!(plan.health_factor, 1.0);
        assert_eq!(plan.health_alert, ReadinessAlert::Optimal);
        assert!(close(plan.bankroll_pct, 0.10));
        assert!(close(plan.bankroll_amount, 1_000.0));
        assert!(close(plan.risk_per_trade_usd, 50.0));
        // Raw position 50 / 0.01 = 5000 is capped at the bankroll
        assert!(close(plan.position_usd, 1_000.0));
        assert!(close(plan.est_shares, 5.0));
        assert!(close(plan.stop_loss_per_share, 2.0));
    }

    #[test]
    fn test_plan_scales_bankroll_by_health() {
        let policy = SizingPolicy::default();
        // Moderate sleep + poor exercise: factor (0.5 + 0.2) / 2 = 0.35
        let plan = plan_position(&inputs(10_000.0, 6.0, 30), 200.0, &policy).unwrap();

        assert!(close(plan.health_factor, 0.35));
        assert!(close(plan.bankroll_pct, 0.035));
        assert!(close(plan.bankroll_amount, 350.0));
        assert!(close(plan.risk_per_trade_usd, 17.5));
        assert!(close(plan.position_usd, 350.0));
    }

    #[test]
    fn test_plan_without_health_scaling() {
        let policy = SizingPolicy {
            bankroll_health_scale: false,
            ..SizingPolicy::default()
        };
        let plan = plan_position(&inputs(10_000.0, 3.0, 0), 200.0, &policy).unwrap();

        // Poor health still reported, but the bankroll stays at the base
        assert_eq!(plan.health_factor, 0.2);
        assert_eq!(plan.health_alert, ReadinessAlert::HighRisk);
        assert!(close(plan.bankroll_pct, 0.10));
        assert!(close(plan.bankroll_amount, 1_000.0));
    }

    #[test]
    fn test_plan_uncapped_when_stop_is_wide() {
        let policy = SizingPolicy {
            stop_loss_pct: 0.10,
            ..SizingPolicy::default()
        };
        let plan = plan_position(&inputs(10_000.0, 8.0, 95), 100.0, &policy).unwrap();

        // Raw position 50 / 0.10 = 500 sits below the 1000 bankroll
        assert!(close(plan.position_usd, 500.0));
        assert!(close(plan.est_shares, 5.0));
        assert!(close(plan.stop_loss_per_share, 10.0));
    }

    #[test]
    fn test_plan_rejects_non_positive_price() {
        let policy = SizingPolicy::default();

        let result = plan_position(&inputs(10_000.0, 8.0, 95), 0.0, &policy);
        assert_eq!(result, Err(ScanError::NonPositivePrice));

        let result = plan_position(&inputs(10_000.0, 8.0, 95), -5.0, &policy);
        assert_eq!(result, Err(ScanError::NonPositivePrice));
    }

    #[test]
    fn test_plan_rejects_zero_stop_loss() {
        let policy = SizingPolicy {
            stop_loss_pct: 0.0,
            ..SizingPolicy::default()
        };

        let result = plan_position(&inputs(10_000.0, 8.0, 95), 200.0, &policy);
        assert_eq!(result, Err(ScanError::InvalidStopLoss));
    }

    #[test]
    fn test_plan_rejects_zero_bankroll() {
        let policy = SizingPolicy::default();

        let result = plan_position(&inputs(0.0, 8.0, 95), 200.0, &policy);
        assert_eq!(result, Err(ScanError::ZeroBankroll));
    }
}
