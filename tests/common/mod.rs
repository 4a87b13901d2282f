use chrono::{DateTime, Duration, Utc};
use trade_ledger::models::TradeRecord;

/// Reference clock: 2025-01-15 12:00:00 UTC.
pub fn now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-01-15T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

/// Build a record `age` before `now()`, in the backend's ISO form.
pub fn record(id: &str, status: &str, amount: i64, win: i64, age: Duration) -> TradeRecord {
    TradeRecord {
        id: id.to_string(),
        asset_name: "EUR/USD".to_string(),
        asset_ric: "EURUSD=X".to_string(),
        status: status.to_string(),
        trend: "call".to_string(),
        amount,
        win,
        open_rate: Some(1.08512),
        close_rate: None,
        payment_rate: 85,
        created_at: (now() - age).format("%Y-%m-%dT%H:%M:%S").to_string(),
        is_demo_account: false,
    }
}

/// A mixed history: one win and one loss this week, an old win, an open
/// position, a demo trade and a record with a broken timestamp.
pub fn mixed_history() -> Vec<TradeRecord> {
    let mut demo = record("demo-1", "won", 5000, 9000, Duration::days(2));
    demo.is_demo_account = true;

    let mut broken = record("broken-1", "lost", 1000, 0, Duration::zero());
    broken.created_at = "yesterday-ish".to_string();

    vec![
        record("w-1", "won", 10000, 18500, Duration::days(1)),
        record("l-1", "lost", 10000, 0, Duration::days(3)),
        record("w-old", "won", 10000, 18500, Duration::days(40)),
        record("o-1", "opened", 2000, 0, Duration::hours(2)),
        demo,
        broken,
    ]
}
