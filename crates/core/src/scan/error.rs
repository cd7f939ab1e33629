use thiserror::Error;

/// Errors that can occur when validating scan inputs or sizing a position.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("Trade symbol cannot be empty")]
    EmptySymbol,
    #[error("Trade symbol too long (max 12 characters)")]
    SymbolTooLong,
    #[error("Total value must be greater than zero")]
    NonPositiveTotalValue,
    #[error("Sleep hours must be between 0 and 12")]
    SleepOutOfRange,
    #[error("Exercise minutes must be between 0 and 120")]
    ExerciseOutOfRange,
    #[error("No price data available for {0}")]
    NoPriceData(String),
    #[error("Entry price must be greater than zero")]
    NonPositivePrice,
    #[error("Stop loss percentage must be greater than zero")]
    InvalidStopLoss,
    #[error("Computed bankroll is zero, check inputs")]
    ZeroBankroll,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_error_display() {
        assert_eq!(
            ScanError::EmptySymbol.to_string(),
            "Trade symbol cannot be empty"
        );
        assert_eq!(
            ScanError::NoPriceData("ZZZZ".to_string()).to_string(),
            "No price data available for ZZZZ"
        );
        assert_eq!(
            ScanError::SleepOutOfRange.to_string(),
            "Sleep hours must be between 0 and 12"
        );
    }
}
