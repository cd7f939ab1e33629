use async_trait::async_trait;
use uuid::Uuid;

use crate::scan::ScanRecord;
use crate::trader::Trader;

use super::{Result, ScanFilter};

/// Repository for trader operations.
#[async_trait]
pub trait TraderRepository: Send + Sync {
    /// Gets a trader by their ID.
    async fn get_trader(&self, id: Uuid) -> Result<Option<Trader>>;

    /// Gets a trader by their unique name.
    async fn get_trader_by_name(&self, name: &str) -> Result<Option<Trader>>;

    /// Gets all traders, ordered by name.
    async fn list_traders(&self) -> Result<Vec<Trader>>;

    /// Creates a new trader.
    async fn create_trader(&self, trader: &Trader) -> Result<()>;

    /// Updates an existing trader.
    async fn update_trader(&self, trader: &Trader) -> Result<()>;

    /// Deletes a trader by their ID. Their scans are kept and detached.
    async fn delete_trader(&self, id: Uuid) -> Result<()>;
}

/// Repository for scan record operations.
#[async_trait]
pub trait ScanRepository: Send + Sync {
    /// Gets a scan record by its ID.
    async fn get_scan(&self, id: Uuid) -> Result<Option<ScanRecord>>;

    /// Gets scan records matching a filter, newest first.
    async fn list_scans(&self, filter: ScanFilter) -> Result<Vec<ScanRecord>>;

    /// Creates a new scan record.
    async fn create_scan(&self, scan: &ScanRecord) -> Result<()>;

    /// Updates an existing scan record.
    async fn update_scan(&self, scan: &ScanRecord) -> Result<()>;

    /// Deletes a scan record by its ID.
    async fn delete_scan(&self, id: Uuid) -> Result<()>;
}
