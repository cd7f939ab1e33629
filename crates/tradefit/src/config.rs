use std::env;

use tradefit_core::scan::SizingPolicy;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file (default: "tradefit.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[allow(dead_code)]
    pub sqlite_path: String,
    /// Base fraction of account value committed as bankroll (default: 0.10)
    pub bankroll_base_pct: f64,
    /// Whether the bankroll fraction is scaled by the health factor (default: true)
    pub bankroll_health_scale: bool,
    /// Fraction of the bankroll risked on a single trade (default: 0.05)
    pub risk_per_trade_pct: f64,
    /// Stop-loss distance as a fraction of position size (default: 0.01)
    pub stop_loss_pct: f64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQLITE_PATH` - SQLite database path (default: "tradefit.db")
    /// - `BANKROLL_BASE_PCT` - Base bankroll fraction (default: 0.10)
    /// - `BANKROLL_HEALTH_SCALE` - Scale bankroll by health factor (default: true)
    /// - `RISK_PER_TRADE_PCT` - Risk fraction per trade (default: 0.05)
    /// - `STOP_LOSS_PCT` - Stop-loss fraction (default: 0.01)
    pub fn from_env() -> Self {
        Self {
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "tradefit.db".to_string()),
            bankroll_base_pct: env::var("BANKROLL_BASE_PCT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.10),
            bankroll_health_scale: env::var("BANKROLL_HEALTH_SCALE")
                .ok()
                .map(|v| parse_bool(&v))
                .unwrap_or(true),
            risk_per_trade_pct: env::var("RISK_PER_TRADE_PCT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.05),
            stop_loss_pct: env::var("STOP_LOSS_PCT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.01),
        }
    }

    /// Get the sizing policy described by this configuration.
    pub fn sizing_policy(&self) -> SizingPolicy {
        SizingPolicy {
            bankroll_base_pct: self.bankroll_base_pct,
            bankroll_health_scale: self.bankroll_health_scale,
            risk_per_trade_pct: self.risk_per_trade_pct,
            stop_loss_pct: self.stop_loss_pct,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "y"
    )
}
