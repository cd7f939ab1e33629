//! Response views of a stored scan.
//!
//! Records are persisted at full precision; these views round values for
//! presentation. Dollar amounts round to 2 decimal places, fractions to 4,
//! the health factor to 3, and prices and share counts to 4.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::ScanRecord;

/// Rounds to `digits` decimal places for presentation.
fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round() / scale
}

/// Wellness portion of a scan report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthBlock {
    pub sleep_hours: f64,
    pub exercise_minutes: i64,
    pub factor: f64,
    pub alert: String,
    pub note: String,
    pub guidance: String,
}

/// Bankroll portion of a scan report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankrollBlock {
    pub amount: f64,
    pub pct_of_total: f64,
}

/// Risk budget portion of a scan report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskBlock {
    pub risk_per_trade_pct: f64,
    pub risk_per_trade_usd: f64,
    pub stop_loss_pct: f64,
}

/// Position sizing portion of a scan report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionBlock {
    pub position_usd: f64,
    pub entry_price: f64,
    pub est_shares: f64,
    pub stop_loss_per_share: f64,
}

/// Full scan response returned by the create and update operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    pub record_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trader_id: Option<Uuid>,
    pub symbol: String,
    pub timestamp_utc: DateTime<Utc>,
    pub health: HealthBlock,
    pub bankroll: BankrollBlock,
    pub risk: RiskBlock,
    pub position: PositionBlock,
}

impl ScanReport {
    /// Builds the rounded report view of a stored record.
    pub fn from_record(record: &ScanRecord) -> Self {
        Self {
            record_id: record.id,
            trader_id: record.trader_id,
            symbol: record.symbol.clone(),
            timestamp_utc: record.created_at,
            health: HealthBlock {
                sleep_hours: record.sleep_hours,
                exercise_minutes: record.exercise_minutes,
                factor: round_to(record.health_factor, 3),
                alert: record.health_alert.label().to_string(),
                note: record.health_note.clone(),
                guidance: record.health_alert.guidance().to_string(),
            },
            bankroll: BankrollBlock {
                amount: round_to(record.bankroll_amount, 2),
                pct_of_total: round_to(record.bankroll_pct, 4),
            },
            risk: RiskBlock {
                risk_per_trade_pct: round_to(record.risk_per_trade_pct, 4),
                risk_per_trade_usd: round_to(record.risk_per_trade_usd, 2),
                stop_loss_pct: round_to(record.stop_loss_pct, 4),
            },
            position: PositionBlock {
                position_usd: round_to(record.position_usd, 2),
                entry_price: round_to(record.entry_price, 4),
                est_shares: round_to(record.est_shares, 4),
                stop_loss_per_share: round_to(record.stop_loss_per_share, 4),
            },
        }
    }
}

/// Condensed row for scan listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trader_id: Option<Uuid>,
    pub position_usd: f64,
    pub risk_per_trade_usd: f64,
    pub stop_loss_pct: f64,
}

impl ScanSummary {
    /// Builds the rounded listing view of a stored record.
    pub fn from_record(record: &ScanRecord) -> Self {
        Self {
            id: record.id,
            created_at: record.created_at,
            symbol: record.symbol.clone(),
            trader_id: record.trader_id,
            position_usd: round_to(record.position_usd, 2),
            risk_per_trade_usd: round_to(record.risk_per_trade_usd, 2),
            stop_loss_pct: round_to(record.stop_loss_pct, 4),
        }
    }
}

/// Inputs section of a detailed scan view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanInputsView {
    pub total_value: f64,
    pub sleep_hours: f64,
    pub exercise_minutes: i64,
}

/// Computed section of a detailed scan view. Stored values are returned
/// as persisted except prices and shares, which round like the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanComputedView {
    pub risk_per_trade_pct: f64,
    pub stop_loss_pct: f64,
    pub bankroll_pct: f64,
    pub bankroll_amount: f64,
    pub health_factor: f64,
    pub health_alert: String,
    pub health_note: String,
    pub risk_per_trade_usd: f64,
    pub position_usd: f64,
    pub entry_price: f64,
    pub est_shares: f64,
    pub stop_loss_per_share: f64,
}

/// Detailed view of one stored scan with nested input and computed blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanDetail {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trader_id: Option<Uuid>,
    pub symbol: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub inputs: ScanInputsView,
    pub computed: ScanComputedView,
}

impl ScanDetail {
    /// Builds the detailed view of a stored record.
    pub fn from_record(record: &ScanRecord) -> Self {
        Self {
            id: record.id,
            trader_id: record.trader_id,
            symbol: record.symbol.clone(),
            created_at: record.created_at,
            updated_at: record.updated_at,
            inputs: ScanInputsView {
                total_value: record.total_value,
                sleep_hours: record.sleep_hours,
                exercise_minutes: record.exercise_minutes,
            },
            computed: ScanComputedView {
                risk_per_trade_pct: record.risk_per_trade_pct,
                stop_loss_pct: record.stop_loss_pct,
                bankroll_pct: record.bankroll_pct,
                bankroll_amount: record.bankroll_amount,
                health_factor: record.health_factor,
                health_alert: record.health_alert.label().to_string(),
                health_note: record.health_note.clone(),
                risk_per_trade_usd: record.risk_per_trade_usd,
                position_usd: record.position_usd,
                entry_price: round_to(record.entry_price, 4),
                est_shares: round_to(record.est_shares, 4),
                stop_loss_per_share: round_to(record.stop_loss_per_share, 4),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::sizing::{plan_position, SizingPolicy};
    use crate::scan::types::ScanInputs;

    fn sample_record() -> ScanRecord {
        let inputs = ScanInputs {
            symbol: "AAPL".to_string(),
            total_value: 10_000.0,
            sleep_hours: 8.0,
            exercise_minutes: 95,
        };
        let policy = SizingPolicy::default();
        let plan = plan_position(&inputs, 227.5, &policy).unwrap();
        ScanRecord::new(None, inputs, &policy, plan)
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(1.23456, 4), 1.2346);
        assert_eq!(round_to(0.6, 3), 0.6);
        assert_eq!(round_to(4.395604395604396, 4), 4.3956);
    }

    #[test]
    fn test_report_rounds_position_values() {
        let record = sample_record();
        let report = ScanReport::from_record(&record);

        assert_eq!(report.symbol, "AAPL");
        assert_eq!(report.health.factor, 1.0);
        assert_eq!(report.health.alert, "Optimal");
        assert_eq!(report.bankroll.amount, 1_000.0);
        assert_eq!(report.risk.risk_per_trade_usd, 50.0);
        assert_eq!(report.position.position_usd, 1_000.0);
        assert_eq!(report.position.entry_price, 227.5);
        // 1000 / 227.5 = 4.395604..., rounded to 4 places
        assert_eq!(report.position.est_shares, 4.3956);
    }

    #[test]
    fn test_report_carries_guidance() {
        let record = sample_record();
        let report = ScanReport::from_record(&record);

        assert_eq!(
            report.health.guidance,
            "Conditions are favorable; trade normally within risk rules"
        );
        assert!(report.health.note.starts_with("Optimal | "));
    }

    #[test]
    fn test_summary_condenses_record() {
        let record = sample_record();
        let summary = ScanSummary::from_record(&record);

        assert_eq!(summary.id, record.id);
        assert_eq!(summary.symbol, "AAPL");
        assert_eq!(summary.position_usd, 1_000.0);
        assert_eq!(summary.stop_loss_pct, 0.01);
    }

    #[test]
    fn test_detail_nests_inputs_and_computed() {
        let record = sample_record();
        let detail = ScanDetail::from_record(&record);

        assert_eq!(detail.inputs.total_value, 10_000.0);
        assert_eq!(detail.inputs.sleep_hours, 8.0);
        assert_eq!(detail.computed.bankroll_amount, record.bankroll_amount);
        assert_eq!(detail.computed.est_shares, 4.3956);
        assert_eq!(detail.computed.health_alert, "Optimal");
    }

    #[test]
    fn test_report_omits_absent_trader() {
        let record = sample_record();
        let report = ScanReport::from_record(&record);

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("trader_id").is_none());
    }
}
