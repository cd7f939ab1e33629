//! SQLite schema definitions and SQL query constants.

/// SQL statements to create all tables and indexes.
pub const CREATE_TABLES: &str = r#"
-- Foreign key enforcement is per connection and off by default
PRAGMA foreign_keys = ON;

-- Traders table
CREATE TABLE IF NOT EXISTS traders (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    email TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Scan records table. Inputs, the policy snapshot used for sizing, and
-- every derived value; timestamps are RFC 3339 text.
CREATE TABLE IF NOT EXISTS scan_records (
    id TEXT PRIMARY KEY,
    trader_id TEXT,
    symbol TEXT NOT NULL,
    total_value REAL NOT NULL,
    sleep_hours REAL NOT NULL,
    exercise_minutes INTEGER NOT NULL,
    risk_per_trade_pct REAL NOT NULL,
    stop_loss_pct REAL NOT NULL,
    bankroll_pct REAL NOT NULL,
    bankroll_amount REAL NOT NULL,
    health_factor REAL NOT NULL,
    health_alert TEXT NOT NULL,
    health_note TEXT NOT NULL,
    risk_per_trade_usd REAL NOT NULL,
    position_usd REAL NOT NULL,
    entry_price REAL NOT NULL,
    est_shares REAL NOT NULL,
    stop_loss_per_share REAL NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    FOREIGN KEY (trader_id) REFERENCES traders(id) ON DELETE SET NULL
);

-- Indexes for the list filters
CREATE INDEX IF NOT EXISTS idx_scan_records_symbol ON scan_records(symbol);
CREATE INDEX IF NOT EXISTS idx_scan_records_trader_id ON scan_records(trader_id);
CREATE INDEX IF NOT EXISTS idx_scan_records_created_at ON scan_records(created_at);
"#;

// Trader queries

pub const INSERT_TRADER: &str = r#"
INSERT INTO traders (id, name, email, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5)
"#;

pub const SELECT_TRADER_BY_ID: &str = r#"
SELECT id, name, email, created_at, updated_at
FROM traders
WHERE id = ?1
"#;

pub const SELECT_TRADER_BY_NAME: &str = r#"
SELECT id, name, email, created_at, updated_at
FROM traders
WHERE name = ?1
"#;

pub const SELECT_ALL_TRADERS: &str = r#"
SELECT id, name, email, created_at, updated_at
FROM traders
ORDER BY name ASC
"#;

pub const UPDATE_TRADER: &str = r#"
UPDATE traders
SET name = ?2, email = ?3, updated_at = ?4
WHERE id = ?1
"#;

pub const DELETE_TRADER: &str = r#"
DELETE FROM traders
WHERE id = ?1
"#;

// Scan record queries

pub const INSERT_SCAN: &str = r#"
INSERT INTO scan_records (
    id, trader_id, symbol, total_value, sleep_hours, exercise_minutes,
    risk_per_trade_pct, stop_loss_pct, bankroll_pct, bankroll_amount,
    health_factor, health_alert, health_note, risk_per_trade_usd,
    position_usd, entry_price, est_shares, stop_loss_per_share,
    created_at, updated_at
)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20)
"#;

pub const SELECT_SCAN_BY_ID: &str = r#"
SELECT id, trader_id, symbol, total_value, sleep_hours, exercise_minutes,
       risk_per_trade_pct, stop_loss_pct, bankroll_pct, bankroll_amount,
       health_factor, health_alert, health_note, risk_per_trade_usd,
       position_usd, entry_price, est_shares, stop_loss_per_share,
       created_at, updated_at
FROM scan_records
WHERE id = ?1
"#;

/// NULL filter parameters match every row, so one statement serves all
/// symbol/trader combinations.
pub const SELECT_SCANS_FILTERED: &str = r#"
SELECT id, trader_id, symbol, total_value, sleep_hours, exercise_minutes,
       risk_per_trade_pct, stop_loss_pct, bankroll_pct, bankroll_amount,
       health_factor, health_alert, health_note, risk_per_trade_usd,
       position_usd, entry_price, est_shares, stop_loss_per_share,
       created_at, updated_at
FROM scan_records
WHERE (?1 IS NULL OR symbol = ?1)
  AND (?2 IS NULL OR trader_id = ?2)
ORDER BY created_at DESC, id DESC
LIMIT ?3 OFFSET ?4
"#;

pub const UPDATE_SCAN: &str = r#"
UPDATE scan_records
SET trader_id = ?2, symbol = ?3, total_value = ?4, sleep_hours = ?5,
    exercise_minutes = ?6, risk_per_trade_pct = ?7, stop_loss_pct = ?8,
    bankroll_pct = ?9, bankroll_amount = ?10, health_factor = ?11,
    health_alert = ?12, health_note = ?13, risk_per_trade_usd = ?14,
    position_usd = ?15, entry_price = ?16, est_shares = ?17,
    stop_loss_per_share = ?18, updated_at = ?19
WHERE id = ?1
"#;

pub const DELETE_SCAN: &str = r#"
DELETE FROM scan_records
WHERE id = ?1
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_defines_both_tables() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS traders"));
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS scan_records"));
    }

    #[test]
    fn test_create_tables_enables_foreign_keys() {
        assert!(CREATE_TABLES.contains("PRAGMA foreign_keys = ON"));
        assert!(CREATE_TABLES.contains("ON DELETE SET NULL"));
    }

    #[test]
    fn test_create_tables_enforces_unique_trader_names() {
        assert!(CREATE_TABLES.contains("name TEXT NOT NULL UNIQUE"));
    }

    #[test]
    fn test_filtered_select_orders_newest_first() {
        assert!(SELECT_SCANS_FILTERED.contains("ORDER BY created_at DESC, id DESC"));
        assert!(SELECT_SCANS_FILTERED.contains("LIMIT ?3 OFFSET ?4"));
    }

    #[test]
    fn test_scan_queries_cover_all_columns() {
        for column in [
            "trader_id",
            "symbol",
            "health_alert",
            "health_note",
            "est_shares",
            "stop_loss_per_share",
        ] {
            assert!(INSERT_SCAN.contains(column), "INSERT_SCAN missing {column}");
            assert!(UPDATE_SCAN.contains(column), "UPDATE_SCAN missing {column}");
        }
    }
}
