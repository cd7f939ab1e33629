//! API request types for trader operations.
//!
//! Pure data types with no I/O, shared between handlers and tests. Unknown
//! fields are rejected at deserialization so client typos surface as
//! validation errors instead of being silently dropped.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::types::Trader;

/// Request payload for creating a new trader.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateTraderRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl CreateTraderRequest {
    /// Create a new request with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
        }
    }

    /// Set the trader email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Convert into a Trader with a fresh ID and timestamps.
    pub fn into_trader(self) -> Trader {
        let mut trader = Trader::new(self.name.trim());
        if let Some(email) = self.email {
            trader = trader.with_email(email);
        }
        trader
    }
}

/// Request payload for updating a trader.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateTraderRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UpdateTraderRequest {
    /// Create an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the trader name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the trader email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Apply updates to an existing trader, stamping a new updated_at.
    pub fn apply_to(self, trader: &mut Trader) {
        if let Some(name) = self.name {
            trader.name = name.trim().to_string();
        }
        if let Some(email) = self.email {
            trader.email = Some(email);
        }
        trader.updated_at = Utc::now();
    }
}
