//! SQLite row conversion functions.
//!
//! Converts between domain types and their SQLite representations. UUIDs
//! and timestamps are stored as text, the alert level as a lowercase token.

use chrono::{DateTime, Utc};
use rusqlite::Row;
use uuid::Uuid;

use tradefit_core::scan::{ReadinessAlert, ScanRecord};
use tradefit_core::trader::Trader;

/// Convert a SQLite row to a Trader.
///
/// Expected columns: id, name, email, created_at, updated_at
pub fn row_to_trader(row: &Row) -> rusqlite::Result<Trader> {
    let id: String = row.get(0)?;
    let created_at: String = row.get(3)?;
    let updated_at: String = row.get(4)?;

    Ok(Trader {
        id: parse_uuid(&id)?,
        name: row.get(1)?,
        email: row.get(2)?,
        created_at: parse_datetime(&created_at)?,
        updated_at: parse_datetime(&updated_at)?,
    })
}

/// Convert a SQLite row to a ScanRecord.
///
/// Expected columns follow the scan_records table order.
pub fn row_to_scan(row: &Row) -> rusqlite::Result<ScanRecord> {
    let id: String = row.get(0)?;
    let trader_id: Option<String> = row.get(1)?;
    let health_alert: String = row.get(11)?;
    let created_at: String = row.get(18)?;
    let updated_at: String = row.get(19)?;

    Ok(ScanRecord {
        id: parse_uuid(&id)?,
        trader_id: trader_id.as_deref().map(parse_uuid).transpose()?,
        symbol: row.get(2)?,
        total_value: row.get(3)?,
        sleep_hours: row.get(4)?,
        exercise_minutes: row.get(5)?,
        risk_per_trade_pct: row.get(6)?,
        stop_loss_pct: row.get(7)?,
        bankroll_pct: row.get(8)?,
        bankroll_amount: row.get(9)?,
        health_factor: row.get(10)?,
        health_alert: parse_alert(&health_alert)?,
        health_note: row.get(12)?,
        risk_per_trade_usd: row.get(13)?,
        position_usd: row.get(14)?,
        entry_price: row.get(15)?,
        est_shares: row.get(16)?,
        stop_loss_per_share: row.get(17)?,
        created_at: parse_datetime(&created_at)?,
        updated_at: parse_datetime(&updated_at)?,
    })
}

/// Serialize a ReadinessAlert to its storage token.
pub fn alert_to_string(alert: &ReadinessAlert) -> &'static str {
    match alert {
        ReadinessAlert::Optimal => "optimal",
        ReadinessAlert::Caution => "caution",
        ReadinessAlert::ModerateRisk => "moderate_risk",
        ReadinessAlert::ElevatedRisk => "elevated_risk",
        ReadinessAlert::HighRisk => "high_risk",
    }
}

/// Parse a ReadinessAlert from its storage token.
fn parse_alert(s: &str) -> rusqlite::Result<ReadinessAlert> {
    match s {
        "optimal" => Ok(ReadinessAlert::Optimal),
        "caution" => Ok(ReadinessAlert::Caution),
        "moderate_risk" => Ok(ReadinessAlert::ModerateRisk),
        "elevated_risk" => Ok(ReadinessAlert::ElevatedRisk),
        "high_risk" => Ok(ReadinessAlert::HighRisk),
        _ => Err(rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Unknown alert level: {s}"),
            )),
        )),
    }
}

/// Parse a UUID from its string representation.
fn parse_uuid(s: &str) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(s).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Parse a datetime from its RFC 3339 string representation.
fn parse_datetime(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
}

/// Format a datetime for SQLite storage (RFC 3339).
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_token_round_trip() {
        for alert in [
            ReadinessAlert::Optimal,
            ReadinessAlert::Caution,
            ReadinessAlert::ModerateRisk,
            ReadinessAlert::ElevatedRisk,
            ReadinessAlert::HighRisk,
        ] {
            let token = alert_to_string(&alert);
            assert_eq!(parse_alert(token).unwrap(), alert);
        }
    }

    #[test]
    fn test_parse_alert_rejects_unknown_token() {
        assert!(parse_alert("panic").is_err());
    }

    #[test]
    fn test_datetime_round_trip() {
        let dt = Utc::now();
        let formatted = format_datetime(&dt);
        let parsed = parse_datetime(&formatted).unwrap();

        assert_eq!(parsed, dt);
    }

    #[test]
    fn test_parse_datetime_rejects_garbage() {
        assert!(parse_datetime("yesterday").is_err());
    }

    #[test]
    fn test_parse_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(parse_uuid(&id.to_string()).unwrap(), id);
        assert!(parse_uuid("not-a-uuid").is_err());
    }
}
