use chrono::{DateTime, TimeZone, Utc};

use crate::models::TradeRecord;

/// Reference clock for tests: 2025-01-15 12:00:00 UTC.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
}

/// Render a timestamp the way the backend sends it.
pub fn stamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// A real-account record with the given status, stake, payout and timestamp.
pub fn trade(id: &str, status: &str, amount: i64, win: i64, created_at: &str) -> TradeRecord {
    TradeRecord {
        id: id.to_string(),
        asset_name: "EUR/USD".to_string(),
        asset_ric: "EURUSD=X".to_string(),
        status: status.to_string(),
        trend: "put".to_string(),
        amount,
        win,
        open_rate: None,
        close_rate: None,
        payment_rate: 85,
        created_at: created_at.to_string(),
        is_demo_account: false,
    }
}
