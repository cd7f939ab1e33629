use thiserror::Error;

/// Errors that can occur when validating or manipulating traders.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TraderError {
    #[error("Trader name cannot be empty")]
    EmptyName,
    #[error("Trader name too long (max 100 characters)")]
    NameTooLong,
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trader_error_display() {
        assert_eq!(
            TraderError::EmptyName.to_string(),
            "Trader name cannot be empty"
        );
        assert_eq!(
            TraderError::NameTooLong.to_string(),
            "Trader name too long (max 100 characters)"
        );
        assert_eq!(
            TraderError::InvalidEmail("nope".to_string()).to_string(),
            "Invalid email address: nope"
        );
    }
}
