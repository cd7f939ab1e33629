use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A trader who records morning readiness scans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trader {
    pub id: Uuid,
    /// Display name, unique across all traders.
    pub name: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Trader {
    /// Creates a new trader with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the email address for this trader.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets a specific ID for this trader (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trader_builder() {
        let trader = Trader::new("Ada").with_email("ada@example.com");

        assert_eq!(trader.name, "Ada");
        assert_eq!(trader.email, Some("ada@example.com".to_string()));
        assert_eq!(trader.created_at, trader.updated_at);
    }

    #[test]
    fn test_trader_with_id() {
        let id = Uuid::parse_str("00000000-0000-0000-0000-000000000001").unwrap();
        let trader = Trader::new("Ada").with_id(id);

        assert_eq!(trader.id, id);
    }
}
