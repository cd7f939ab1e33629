//! API request types for scan operations.
//!
//! Pure data types with no I/O, shared between handlers and tests. Unknown
//! fields are rejected at deserialization so client typos surface as
//! validation errors instead of being silently dropped.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::ScanInputs;

/// Request payload for performing a new scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateScanRequest {
    pub trade_symbol: String,
    pub total_value: f64,
    pub sleep_hours: f64,
    pub exercise_minutes: i64,
    /// Explicit entry price. When absent the quote source is consulted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_price: Option<f64>,
    /// Trader recording this scan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trader_id: Option<Uuid>,
}

impl CreateScanRequest {
    /// Create a new request from the required inputs.
    pub fn new(
        trade_symbol: impl Into<String>,
        total_value: f64,
        sleep_hours: f64,
        exercise_minutes: i64,
    ) -> Self {
        Self {
            trade_symbol: trade_symbol.into(),
            total_value,
            sleep_hours,
            exercise_minutes,
            entry_price: None,
            trader_id: None,
        }
    }

    /// Set an explicit entry price, bypassing the quote source.
    pub fn with_entry_price(mut self, entry_price: f64) -> Self {
        self.entry_price = Some(entry_price);
        self
    }

    /// Set the recording trader.
    pub fn with_trader(mut self, trader_id: Uuid) -> Self {
        self.trader_id = Some(trader_id);
        self
    }

    /// Convert into normalized scan inputs (symbol trimmed and uppercased).
    pub fn into_inputs(self) -> ScanInputs {
        ScanInputs {
            symbol: self.trade_symbol.trim().to_uppercase(),
            total_value: self.total_value,
            sleep_hours: self.sleep_hours,
            exercise_minutes: self.exercise_minutes,
        }
    }
}

/// Request payload for updating a scan. Only inputs can be patched;
/// every derived value is recomputed from the merged inputs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateScanRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_minutes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trader_id: Option<Uuid>,
}

impl UpdateScanRequest {
    /// Create an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the trade symbol.
    pub fn with_symbol(mut self, trade_symbol: impl Into<String>) -> Self {
        self.trade_symbol = Some(trade_symbol.into());
        self
    }

    /// Set the total account value.
    pub fn with_total_value(mut self, total_value: f64) -> Self {
        self.total_value = Some(total_value);
        self
    }

    /// Set the sleep hours.
    pub fn with_sleep_hours(mut self, sleep_hours: f64) -> Self {
        self.sleep_hours = Some(sleep_hours);
        self
    }

    /// Set the exercise minutes.
    pub fn with_exercise_minutes(mut self, exercise_minutes: i64) -> Self {
        self.exercise_minutes = Some(exercise_minutes);
        self
    }

    /// Set an explicit entry price for the recompute.
    pub fn with_entry_price(mut self, entry_price: f64) -> Self {
        self.entry_price = Some(entry_price);
        self
    }

    /// Reassign the scan to another trader.
    pub fn with_trader(mut self, trader_id: Uuid) -> Self {
        self.trader_id = Some(trader_id);
        self
    }

    /// Merge the patched fields into existing inputs, normalizing the
    /// symbol the same way create does.
    pub fn apply_to(self, inputs: &mut ScanInputs) {
        if let Some(symbol) = self.trade_symbol {
            inputs.symbol = symbol.trim().to_uppercase();
        }
        if let Some(total_value) = self.total_value {
            inputs.total_value = total_value;
        }
        if let Some(sleep_hours) = self.sleep_hours {
            inputs.sleep_hours = sleep_hours;
        }
        if let Some(exercise_minutes) = self.exercise_minutes {
            inputs.exercise_minutes = exercise_minutes;
        }
    }
}
