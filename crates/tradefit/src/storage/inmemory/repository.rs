//! In-memory repository implementation.
//!
//! Implements the repository traits from `tradefit_core::storage` on top of
//! `HashMap`s guarded by async locks. Data lives for the lifetime of the
//! process, which makes this backend a good fit for tests and demos.
//!
//! Behavior mirrors the SQLite backend: trader names are unique, deleting a
//! trader detaches their scans, and listing follows the same ordering.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use tradefit_core::scan::ScanRecord;
use tradefit_core::storage::{
    RepositoryError, Result, ScanFilter, ScanRepository, TraderRepository,
};
use tradefit_core::trader::Trader;

/// In-memory repository implementation.
///
/// Uses HashMaps wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    traders: Arc<RwLock<HashMap<Uuid, Trader>>>,
    scans: Arc<RwLock<HashMap<Uuid, ScanRecord>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            traders: Arc::new(RwLock::new(HashMap::new())),
            scans: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

// ============================================================================
// TraderRepository implementation
// ============================================================================

#[async_trait]
impl TraderRepository for InMemoryRepository {
    async fn get_trader(&self, id: Uuid) -> Result<Option<Trader>> {
        let traders = self.traders.read().await;
        Ok(traders.get(&id).cloned())
    }

    async fn get_trader_by_name(&self, name: &str) -> Result<Option<Trader>> {
        let traders = self.traders.read().await;
        Ok(traders.values().find(|t| t.name == name).cloned())
    }

    async fn list_traders(&self) -> Result<Vec<Trader>> {
        let traders = self.traders.read().await;
        let mut all: Vec<Trader> = traders.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn create_trader(&self, trader: &Trader) -> Result<()> {
        let mut traders = self.traders.write().await;
        let name_taken = traders.values().any(|t| t.name == trader.name);
        if traders.contains_key(&trader.id) || name_taken {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Trader",
                id: trader.name.clone(),
            });
        }
        traders.insert(trader.id, trader.clone());
        Ok(())
    }

    async fn update_trader(&self, trader: &Trader) -> Result<()> {
        let mut traders = self.traders.write().await;
        if !traders.contains_key(&trader.id) {
            return Err(RepositoryError::NotFound {
                entity_type: "Trader",
                id: trader.id.to_string(),
            });
        }
        let name_taken = traders
            .values()
            .any(|t| t.id != trader.id && t.name == trader.name);
        if name_taken {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Trader",
                id: trader.name.clone(),
            });
        }
        traders.insert(trader.id, trader.clone());
        Ok(())
    }

    async fn delete_trader(&self, id: Uuid) -> Result<()> {
        let mut traders = self.traders.write().await;
        if traders.remove(&id).is_none() {
            return Err(RepositoryError::NotFound {
                entity_type: "Trader",
                id: id.to_string(),
            });
        }
        drop(traders);

        // Detach the deleted trader's scans, same as the SQLite ON DELETE SET NULL
        let mut scans = self.scans.write().await;
        for scan in scans.values_mut() {
            if scan.trader_id == Some(id) {
                scan.trader_id = None;
            }
        }
        Ok(())
    }
}

// ============================================================================
// ScanRepository implementation
// ============================================================================

#[async_trait]
impl ScanRepository for InMemoryRepository {
    async fn get_scan(&self, id: Uuid) -> Result<Option<ScanRecord>> {
        let scans = self.scans.read().await;
        Ok(scans.get(&id).cloned())
    }

    async fn list_scans(&self, filter: ScanFilter) -> Result<Vec<ScanRecord>> {
        let scans = self.scans.read().await;
        let mut matching: Vec<ScanRecord> = scans
            .values()
            .filter(|s| match &filter.symbol {
                Some(symbol) => &s.symbol == symbol,
                None => true,
            })
            .filter(|s| match filter.trader_id {
                Some(trader_id) => s.trader_id == Some(trader_id),
                None => true,
            })
            .cloned()
            .collect();

        // Newest first, id as a tiebreaker for a stable order
        matching.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(matching
            .into_iter()
            .skip(filter.offset as usize)
            .take(filter.limit as usize)
            .collect())
    }

    async fn create_scan(&self, scan: &ScanRecord) -> Result<()> {
        if let Some(trader_id) = scan.trader_id {
            let traders = self.traders.read().await;
            if !traders.contains_key(&trader_id) {
                return Err(RepositoryError::InvalidData(format!(
                    "Foreign key constraint violation for ScanRecord {}",
                    scan.id
                )));
            }
        }

        let mut scans = self.scans.write().await;
        if scans.contains_key(&scan.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "ScanRecord",
                id: scan.id.to_string(),
            });
        }
        scans.insert(scan.id, scan.clone());
        Ok(())
    }

    async fn update_scan(&self, scan: &ScanRecord) -> Result<()> {
        if let Some(trader_id) = scan.trader_id {
            let traders = self.traders.read().await;
            if !traders.contains_key(&trader_id) {
                return Err(RepositoryError::InvalidData(format!(
                    "Foreign key constraint violation for ScanRecord {}",
                    scan.id
                )));
            }
        }

        let mut scans = self.scans.write().await;
        if !scans.contains_key(&scan.id) {
            return Err(RepositoryError::NotFound {
                entity_type: "ScanRecord",
                id: scan.id.to_string(),
            });
        }
        scans.insert(scan.id, scan.clone());
        Ok(())
    }

    async fn delete_scan(&self, id: Uuid) -> Result<()> {
        let mut scans = self.scans.write().await;
        if scans.remove(&id).is_none() {
            return Err(RepositoryError::NotFound {
                entity_type: "ScanRecord",
                id: id.to_string(),
            });
        }
        Ok(())
    }
}
