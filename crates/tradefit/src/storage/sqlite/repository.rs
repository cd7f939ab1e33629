//! SQLite repository implementation.
//!
//! Implements the repository traits from `tradefit_core::storage` using a
//! single tokio-rusqlite connection.

use async_trait::async_trait;
use tokio_rusqlite::Connection;
use uuid::Uuid;

use tradefit_core::scan::ScanRecord;
use tradefit_core::storage::{
    RepositoryError, Result, ScanFilter, ScanRepository, TraderRepository,
};
use tradefit_core::trader::Trader;

use super::conversions::{alert_to_string, format_datetime, row_to_scan, row_to_trader};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// Provides async access to SQLite storage for traders and scan records.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema and connection pragmas.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

// ============================================================================
// TraderRepository implementation
// ============================================================================

#[async_trait]
impl TraderRepository for SqliteRepository {
    async fn get_trader(&self, id: Uuid) -> Result<Option<Trader>> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_TRADER_BY_ID)
                    .map_err(wrap_err)?;
                match stmt.query_row([&id_str], row_to_trader) {
                    Ok(trader) => Ok(Some(trader)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Trader", id.to_string()))
    }

    async fn get_trader_by_name(&self, name: &str) -> Result<Option<Trader>> {
        let name_owned = name.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_TRADER_BY_NAME)
                    .map_err(wrap_err)?;
                match stmt.query_row([&name_owned], row_to_trader) {
                    Ok(trader) => Ok(Some(trader)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Trader", name.to_string()))
    }

    async fn list_traders(&self) -> Result<Vec<Trader>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_ALL_TRADERS)
                    .map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_trader).map_err(wrap_err)?;

                let mut traders = Vec::new();
                for row_result in rows {
                    traders.push(row_result.map_err(wrap_err)?);
                }
                Ok(traders)
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    async fn create_trader(&self, trader: &Trader) -> Result<()> {
        let id = trader.id.to_string();
        let name = trader.name.clone();
        let email = trader.email.clone();
        let created_at = format_datetime(&trader.created_at);
        let updated_at = format_datetime(&trader.updated_at);
        // On a unique-name clash the conflict is reported by name
        let conflict_id = trader.name.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_TRADER,
                    rusqlite::params![id, name, email, created_at, updated_at],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Trader", conflict_id))
    }

    async fn update_trader(&self, trader: &Trader) -> Result<()> {
        let id = trader.id.to_string();
        let name = trader.name.clone();
        let email = trader.email.clone();
        let updated_at = format_datetime(&trader.updated_at);
        let trader_id = trader.id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_TRADER,
                        rusqlite::params![id, name, email, updated_at],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Trader", trader_id))
    }

    async fn delete_trader(&self, id: Uuid) -> Result<()> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_TRADER, [&id_str])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Trader", id.to_string()))
    }
}

// ============================================================================
// ScanRepository implementation
// ============================================================================

#[async_trait]
impl ScanRepository for SqliteRepository {
    async fn get_scan(&self, id: Uuid) -> Result<Option<ScanRecord>> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_SCAN_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([&id_str], row_to_scan) {
                    Ok(scan) => Ok(Some(scan)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "ScanRecord", id.to_string()))
    }

    async fn list_scans(&self, filter: ScanFilter) -> Result<Vec<ScanRecord>> {
        let symbol = filter.symbol.clone();
        let trader_id = filter.trader_id.map(|id| id.to_string());
        let limit = filter.limit;
        let offset = filter.offset;

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_SCANS_FILTERED)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map(
                        rusqlite::params![symbol, trader_id, limit, offset],
                        row_to_scan,
                    )
                    .map_err(wrap_err)?;

                let mut scans = Vec::new();
                for row_result in rows {
                    scans.push(row_result.map_err(wrap_err)?);
                }
                Ok(scans)
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    async fn create_scan(&self, scan: &ScanRecord) -> Result<()> {
        let id = scan.id.to_string();
        let trader_id = scan.trader_id.map(|id| id.to_string());
        let symbol = scan.symbol.clone();
        let total_value = scan.total_value;
        let sleep_hours = scan.sleep_hours;
        let exercise_minutes = scan.exercise_minutes;
        let risk_per_trade_pct = scan.risk_per_trade_pct;
        let stop_loss_pct = scan.stop_loss_pct;
        let bankroll_pct = scan.bankroll_pct;
        let bankroll_amount = scan.bankroll_amount;
        let health_factor = scan.health_factor;
        let health_alert = alert_to_string(&scan.health_alert);
        let health_note = scan.health_note.clone();
        let risk_per_trade_usd = scan.risk_per_trade_usd;
        let position_usd = scan.position_usd;
        let entry_price = scan.entry_price;
        let est_shares = scan.est_shares;
        let stop_loss_per_share = scan.stop_loss_per_share;
        let created_at = format_datetime(&scan.created_at);
        let updated_at = format_datetime(&scan.updated_at);
        let scan_id = scan.id.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_SCAN,
                    rusqlite::params![
                        id,
                        trader_id,
                        symbol,
                        total_value,
                        sleep_hours,
                        exercise_minutes,
                        risk_per_trade_pct,
                        stop_loss_pct,
                        bankroll_pct,
                        bankroll_amount,
                        health_factor,
                        health_alert,
                        health_note,
                        risk_per_trade_usd,
                        position_usd,
                        entry_price,
                        est_shares,
                        stop_loss_per_share,
                        created_at,
                        updated_at
                    ],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "ScanRecord", scan_id))
    }

    async fn update_scan(&self, scan: &ScanRecord) -> Result<()> {
        let id = scan.id.to_string();
        let trader_id = scan.trader_id.map(|id| id.to_string());
        let symbol = scan.symbol.clone();
        let total_value = scan.total_value;
        let sleep_hours = scan.sleep_hours;
        let exercise_minutes = scan.exercise_minutes;
        let risk_per_trade_pct = scan.risk_per_trade_pct;
        let stop_loss_pct = scan.stop_loss_pct;
        let bankroll_pct = scan.bankroll_pct;
        let bankroll_amount = scan.bankroll_amount;
        let health_factor = scan.health_factor;
        let health_alert = alert_to_string(&scan.health_alert);
        let health_note = scan.health_note.clone();
        let risk_per_trade_usd = scan.risk_per_trade_usd;
        let position_usd = scan.position_usd;
        let entry_price = scan.entry_price;
        let est_shares = scan.est_shares;
        let stop_loss_per_share = scan.stop_loss_per_share;
        let updated_at = format_datetime(&scan.updated_at);
        let scan_id = scan.id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_SCAN,
                        rusqlite::params![
                            id,
                            trader_id,
                            symbol,
                            total_value,
                            sleep_hours,
                            exercise_minutes,
                            risk_per_trade_pct,
                            stop_loss_pct,
                            bankroll_pct,
                            bankroll_amount,
                            health_factor,
                            health_alert,
                            health_note,
                            risk_per_trade_usd,
                            position_usd,
                            entry_price,
                            est_shares,
                            stop_loss_per_share,
                            updated_at
                        ],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "ScanRecord", scan_id))
    }

    async fn delete_scan(&self, id: Uuid) -> Result<()> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_SCAN, [&id_str])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "ScanRecord", id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use tradefit_core::scan::{plan_position, ScanInputs, SizingPolicy};

    fn scan_inputs(symbol: &str) -> ScanInputs {
        ScanInputs {
            symbol: symbol.to_string(),
            total_value: 10_000.0,
            sleep_hours: 8.0,
            exercise_minutes: 95,
        }
    }

    fn sample_scan(symbol: &str, trader_id: Option<Uuid>) -> ScanRecord {
        let inputs = scan_inputs(symbol);
        let policy = SizingPolicy::default();
        let plan = plan_position(&inputs, 227.5, &policy).unwrap();
        ScanRecord::new(trader_id, inputs, &policy, plan)
    }

    // ==================== Trader tests ====================

    #[tokio::test]
    async fn test_trader_create_and_get_round_trip() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let trader = Trader::new("Ada").with_email("ada@example.com");

        repo.create_trader(&trader).await.unwrap();
        let fetched = repo.get_trader(trader.id).await.unwrap();

        assert_eq!(fetched, Some(trader));
    }

    #[tokio::test]
    async fn test_get_nonexistent_trader_returns_none() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        let fetched = repo.get_trader(Uuid::new_v4()).await.unwrap();

        assert_eq!(fetched, None);
    }

    #[tokio::test]
    async fn test_get_trader_by_name() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let trader = Trader::new("Ada");
        repo.create_trader(&trader).await.unwrap();

        let fetched = repo.get_trader_by_name("Ada").await.unwrap();
        assert_eq!(fetched, Some(trader));

        let missing = repo.get_trader_by_name("Grace").await.unwrap();
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn test_duplicate_trader_name_is_conflict() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        repo.create_trader(&Trader::new("Ada")).await.unwrap();

        let result = repo.create_trader(&Trader::new("Ada")).await;

        assert_eq!(
            result,
            Err(RepositoryError::AlreadyExists {
                entity_type: "Trader",
                id: "Ada".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_list_traders_ordered_by_name() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        repo.create_trader(&Trader::new("Grace")).await.unwrap();
        repo.create_trader(&Trader::new("Ada")).await.unwrap();

        let traders = repo.list_traders().await.unwrap();

        let names: Vec<_> = traders.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Ada", "Grace"]);
    }

    #[tokio::test]
    async fn test_update_trader() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let mut trader = Trader::new("Ada");
        repo.create_trader(&trader).await.unwrap();

        trader.name = "Ada Lovelace".to_string();
        trader.email = Some("ada@example.com".to_string());
        repo.update_trader(&trader).await.unwrap();

        let fetched = repo.get_trader(trader.id).await.unwrap();
        assert_eq!(fetched, Some(trader));
    }

    #[tokio::test]
    async fn test_update_nonexistent_trader_is_not_found() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let trader = Trader::new("Ghost");

        let result = repo.update_trader(&trader).await;

        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_trader() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let trader = Trader::new("Ada");
        repo.create_trader(&trader).await.unwrap();

        repo.delete_trader(trader.id).await.unwrap();

        assert_eq!(repo.get_trader(trader.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_nonexistent_trader_is_not_found() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        let result = repo.delete_trader(Uuid::new_v4()).await;

        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    // ==================== Scan record tests ====================

    #[tokio::test]
    async fn test_scan_create_and_get_round_trip() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let scan = sample_scan("AAPL", None);

        repo.create_scan(&scan).await.unwrap();
        let fetched = repo.get_scan(scan.id).await.unwrap();

        assert_eq!(fetched, Some(scan));
    }

    #[tokio::test]
    async fn test_get_nonexistent_scan_returns_none() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        assert_eq!(repo.get_scan(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_scan_with_unknown_trader_violates_foreign_key() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let scan = sample_scan("AAPL", Some(Uuid::new_v4()));

        let result = repo.create_scan(&scan).await;

        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
    }

    #[tokio::test]
    async fn test_delete_trader_detaches_their_scans() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let trader = Trader::new("Ada");
        repo.create_trader(&trader).await.unwrap();
        let scan = sample_scan("AAPL", Some(trader.id));
        repo.create_scan(&scan).await.unwrap();

        repo.delete_trader(trader.id).await.unwrap();

        let fetched = repo.get_scan(scan.id).await.unwrap().unwrap();
        assert_eq!(fetched.trader_id, None);
    }

    #[tokio::test]
    async fn test_list_scans_newest_first() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let now = Utc::now();

        let mut oldest = sample_scan("AAPL", None);
        oldest.created_at = now - Duration::minutes(20);
        let mut middle = sample_scan("MSFT", None);
        middle.created_at = now - Duration::minutes(10);
        let mut newest = sample_scan("NVDA", None);
        newest.created_at = now;

        for scan in [&oldest, &middle, &newest] {
            repo.create_scan(scan).await.unwrap();
        }

        let scans = repo.list_scans(ScanFilter::new()).await.unwrap();

        let symbols: Vec<_> = scans.iter().map(|s| s.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["NVDA", "MSFT", "AAPL"]);
    }

    #[tokio::test]
    async fn test_list_scans_filters_by_symbol() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        repo.create_scan(&sample_scan("AAPL", None)).await.unwrap();
        repo.create_scan(&sample_scan("MSFT", None)).await.unwrap();
        repo.create_scan(&sample_scan("AAPL", None)).await.unwrap();

        let filter = ScanFilter::new().with_symbol("aapl");
        let scans = repo.list_scans(filter).await.unwrap();

        assert_eq!(scans.len(), 2);
        assert!(scans.iter().all(|s| s.symbol == "AAPL"));
    }

    #[tokio::test]
    async fn test_list_scans_filters_by_trader() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let trader = Trader::new("Ada");
        repo.create_trader(&trader).await.unwrap();
        repo.create_scan(&sample_scan("AAPL", Some(trader.id)))
            .await
            .unwrap();
        repo.create_scan(&sample_scan("MSFT", None)).await.unwrap();

        let filter = ScanFilter::new().with_trader(trader.id);
        let scans = repo.list_scans(filter).await.unwrap();

        assert_eq!(scans.len(), 1);
        assert_eq!(scans[0].trader_id, Some(trader.id));
    }

    #[tokio::test]
    async fn test_list_scans_pages_with_limit_and_offset() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let now = Utc::now();
        for i in 0..5 {
            let mut scan = sample_scan("AAPL", None);
            scan.created_at = now - Duration::minutes(i);
            repo.create_scan(&scan).await.unwrap();
        }

        let page = repo
            .list_scans(ScanFilter::new().with_page(2, 2))
            .await
            .unwrap();

        assert_eq!(page.len(), 2);
        // Second page starts two scans down from the newest
        assert_eq!(page[0].created_at, now - Duration::minutes(2));
    }

    #[tokio::test]
    async fn test_update_scan() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let mut scan = sample_scan("AAPL", None);
        repo.create_scan(&scan).await.unwrap();

        let policy = SizingPolicy::default();
        let mut inputs = scan.inputs();
        inputs.sleep_hours = 4.0;
        let plan = plan_position(&inputs, 227.5, &policy).unwrap();
        scan.apply_plan(inputs, &policy, plan);
        repo.update_scan(&scan).await.unwrap();

        let fetched = repo.get_scan(scan.id).await.unwrap();
        assert_eq!(fetched, Some(scan));
    }

    #[tokio::test]
    async fn test_update_nonexistent_scan_is_not_found() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let scan = sample_scan("AAPL", None);

        let result = repo.update_scan(&scan).await;

        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_scan() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let scan = sample_scan("AAPL", None);
        repo.create_scan(&scan).await.unwrap();

        repo.delete_scan(scan.id).await.unwrap();

        assert_eq!(repo.get_scan(scan.id).await.unwrap(), None);
        assert!(matches!(
            repo.delete_scan(scan.id).await,
            Err(RepositoryError::NotFound { .. })
        ));
    }
}
