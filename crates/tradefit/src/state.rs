//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It uses repository trait objects for storage abstraction
//! and supports different backends via feature flags.

use std::sync::Arc;

use tradefit_core::market::QuoteSource;
use tradefit_core::scan::SizingPolicy;
use tradefit_core::storage::{ScanRepository, TraderRepository};

use crate::config::Config;
use crate::quotes::StaticQuoteSource;

// ============================================================================
// Compile-time feature validation
// ============================================================================

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!("Cannot enable both 'sqlite' and 'inmemory' storage features");

#[cfg(not(any(feature = "sqlite", feature = "inmemory")))]
compile_error!("Must enable exactly one storage feature: 'sqlite' or 'inmemory'");

/// Shared application state.
///
/// This is cloned for each request handler and contains shared resources
/// including repository trait objects for database access.
#[derive(Clone)]
pub struct AppState {
    /// Trader repository.
    pub trader_repo: Arc<dyn TraderRepository>,
    /// Scan record repository.
    pub scan_repo: Arc<dyn ScanRepository>,
    /// Price lookup for symbols without an explicit entry price.
    pub quotes: Arc<dyn QuoteSource>,
    /// Position sizing policy applied to every scan.
    pub policy: SizingPolicy,
}

impl AppState {
    /// Creates a new AppState from its parts.
    fn build(
        trader_repo: Arc<dyn TraderRepository>,
        scan_repo: Arc<dyn ScanRepository>,
        quotes: Arc<dyn QuoteSource>,
        policy: SizingPolicy,
    ) -> Self {
        Self {
            trader_repo,
            scan_repo,
            quotes,
            policy,
        }
    }
}

// ============================================================================
// Factory functions for the storage backends
// ============================================================================

#[cfg(feature = "sqlite")]
mod sqlite_backend {
    use super::*;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);

            Ok(Self::build(
                repo.clone(),
                repo,
                Arc::new(StaticQuoteSource::new()),
                config.sizing_policy(),
            ))
        }
    }
}

#[cfg(feature = "inmemory")]
mod inmemory_backend {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        /// Useful for demos without any external dependencies.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(InMemoryRepository::new());

            Ok(Self::build(
                repo.clone(),
                repo,
                Arc::new(StaticQuoteSource::new()),
                config.sizing_policy(),
            ))
        }
    }
}

// ============================================================================
// Test support - throwaway state for unit tests
// ============================================================================
