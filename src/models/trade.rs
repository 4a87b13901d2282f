use serde::{Deserialize, Deserializer, Serialize};

use crate::models::{TradeStatus, TradeTrend};

/// A single trade as delivered by the history endpoint.
///
/// Amounts are integers in minor currency units. Records are read-only
/// snapshots; nothing in this crate mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub asset_name: String,
    #[serde(default)]
    pub asset_ric: String,
    pub status: String,
    #[serde(default)]
    pub trend: String,
    pub amount: i64,
    #[serde(default)]
    pub win: i64,
    #[serde(default)]
    pub open_rate: Option<f64>,
    #[serde(default)]
    pub close_rate: Option<f64>,
    #[serde(default)]
    pub payment_rate: i64,
    pub created_at: String,
    #[serde(default)]
    pub is_demo_account: bool,
}

impl TradeRecord {
    /// Signed result of the trade in minor units.
    pub fn profit(&self) -> i64 {
        self.win - self.amount
    }

    pub fn status_kind(&self) -> TradeStatus {
        TradeStatus::parse(&self.status)
    }

    pub fn trend_kind(&self) -> TradeTrend {
        TradeTrend::parse(&self.trend)
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_payload() {
        let json = r#"{
            "id": 42,
            "assetName": "EUR/USD",
            "assetRic": "EURUSD=X",
            "status": "won",
            "trend": "call",
            "amount": 10000,
            "win": 18500,
            "openRate": 1.08512,
            "closeRate": null,
            "paymentRate": 85,
            "createdAt": "2025-01-15T10:30:00",
            "isDemoAccount": true
        }"#;

        let record: TradeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "42");
        assert_eq!(record.asset_ric, "EURUSD=X");
        assert_eq!(record.open_rate, Some(1.08512));
        assert_eq!(record.close_rate, None);
        assert!(record.is_demo_account);
        assert_eq!(record.profit(), 8500);
        assert_eq!(record.status_kind(), TradeStatus::Won);
        assert_eq!(record.trend_kind(), TradeTrend::Call);
    }

    #[test]
    fn optional_fields_default() {
        let json = r#"{"id":"t-1","status":"opened","amount":500,"createdAt":"2025-01-15 10:30:00"}"#;
        let record: TradeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "t-1");
        assert_eq!(record.win, 0);
        assert!(!record.is_demo_account);
        assert_eq!(record.profit(), -500);
    }
}
