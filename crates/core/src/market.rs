//! Market data abstraction.
//!
//! Scans need an entry price for the chosen symbol. Callers may supply one
//! explicitly; otherwise the server consults a [`QuoteSource`].

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when looking up a quote.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuoteError {
    #[error("Quote lookup failed: {0}")]
    LookupFailed(String),
}

/// Source of latest market prices.
///
/// The built-in implementation serves a fixed table; a live market-data
/// client can implement this trait without touching the scan flow.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Latest price for a symbol, or `None` when the source has no data
    /// for it.
    async fn latest_price(&self, symbol: &str) -> Result<Option<f64>, QuoteError>;
}
