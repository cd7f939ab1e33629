use super::error::TraderError;
use super::types::Trader;

/// Validates a trader before creation or update.
pub fn validate_trader(trader: &Trader) -> Result<(), TraderError> {
    if trader.name.trim().is_empty() {
        return Err(TraderError::EmptyName);
    }
    if trader.name.len() > 100 {
        return Err(TraderError::NameTooLong);
    }
    if let Some(email) = &trader.email {
        if !is_valid_email(email) {
            return Err(TraderError::InvalidEmail(email.clone()));
        }
    }
    Ok(())
}

/// Checks if an email address is plausible (local part, @, domain with a dot).
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_trader_success() {
        let trader = Trader::new("Ada").with_email("ada@example.com");
        assert!(validate_trader(&trader).is_ok());
    }

    #[test]
    fn test_validate_trader_without_email() {
        let trader = Trader::new("Ada");
        assert!(validate_trader(&trader).is_ok());
    }

    #[test]
    fn test_validate_trader_empty_name() {
        let trader = Trader::new("");
        assert_eq!(validate_trader(&trader), Err(TraderError::EmptyName));

        let trader = Trader::new("   ");
        assert_eq!(validate_trader(&trader), Err(TraderError::EmptyName));
    }

    #[test]
    fn test_validate_trader_name_too_long() {
        let trader = Trader::new("a".repeat(101));
        assert_eq!(validate_trader(&trader), Err(TraderError::NameTooLong));
    }

    #[test]
    fn test_validate_trader_invalid_email() {
        let trader = Trader::new("Ada").with_email("not-an-email");
        assert!(matches!(
            validate_trader(&trader),
            Err(TraderError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("a.b@sub.example.com"));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("ada"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada@nodot"));
        assert!(!is_valid_email("ada@.com"));
    }
}
