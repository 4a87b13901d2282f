use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;
use crate::format::parse_timestamp;
use crate::models::TradeRecord;

/// Length of the trailing window used by [`HistoryFilter::Week`].
pub const WEEK_WINDOW_DAYS: i64 = 7;

/// Tabs of the history screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryFilter {
    #[default]
    All,
    Won,
    Lost,
    Opened,
    Week,
}

impl HistoryFilter {
    pub const ALL: [HistoryFilter; 5] = [
        HistoryFilter::All,
        HistoryFilter::Won,
        HistoryFilter::Lost,
        HistoryFilter::Opened,
        HistoryFilter::Week,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryFilter::All => "all",
            HistoryFilter::Won => "won",
            HistoryFilter::Lost => "lost",
            HistoryFilter::Opened => "opened",
            HistoryFilter::Week => "week",
        }
    }

    /// Status filters compare the raw status exactly; the week filter
    /// drops records whose timestamp cannot be parsed.
    pub fn matches(&self, record: &TradeRecord, now: DateTime<Utc>) -> bool {
        match self {
            HistoryFilter::All => true,
            HistoryFilter::Won => record.status == "won",
            HistoryFilter::Lost => record.status == "lost",
            HistoryFilter::Opened => record.status == "opened",
            HistoryFilter::Week => is_within_last_week(&record.created_at, now),
        }
    }
}

impl FromStr for HistoryFilter {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HistoryFilter::ALL
            .into_iter()
            .find(|f| f.as_str() == s.trim())
            .ok_or_else(|| LedgerError::UnknownFilter(s.to_string()))
    }
}

impl fmt::Display for HistoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `created_at` falls in `[now - 7d, now]`.
pub fn is_within_last_week(created_at: &str, now: DateTime<Utc>) -> bool {
    let start = now - Duration::days(WEEK_WINDOW_DAYS);
    parse_timestamp(created_at).is_some_and(|ts| ts >= start && ts <= now)
}

/// Lazily yields the records selected by `filter`, in input order.
pub fn filter_trades<'a>(
    records: &'a [TradeRecord],
    filter: HistoryFilter,
    now: DateTime<Utc>,
) -> impl Iterator<Item = &'a TradeRecord> + 'a {
    records.iter().filter(move |r| filter.matches(r, now))
}
