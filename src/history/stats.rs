use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::history::filter::{filter_trades, HistoryFilter};
use crate::models::TradeRecord;

/// Win rate, in percent, from which a stats block is styled as favorable.
pub const FAVORABLE_WIN_RATE: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TradeStats {
    pub total_trades: usize,
    pub won_trades: usize,
    /// Percent, 0..=100. Zero when there are no trades.
    pub win_rate: f64,
    /// Sum of `win - amount` in minor units.
    pub net_profit: i64,
}

impl TradeStats {
    /// Single pass over `records`. Only the exact status `won` counts as a win.
    pub fn compute<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a TradeRecord>,
    {
        let (total_trades, won_trades, net_profit) =
            records
                .into_iter()
                .fold((0usize, 0usize, 0i64), |(total, won, net), r| {
                    (
                        total + 1,
                        won + usize::from(r.status == "won"),
                        net + r.profit(),
                    )
                });

        Self {
            total_trades,
            won_trades,
            win_rate: win_rate(won_trades, total_trades),
            net_profit,
        }
    }

    pub fn is_favorable(&self) -> bool {
        self.win_rate >= FAVORABLE_WIN_RATE
    }
}

/// `won / total * 100`, or 0 for an empty set.
pub fn win_rate(won: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        won as f64 / total as f64 * 100.0
    }
}

/// Both stats blocks shown above the history list.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HistoryStats {
    pub last_week: TradeStats,
    pub all_time: TradeStats,
}

impl HistoryStats {
    pub fn compute(records: &[TradeRecord], now: DateTime<Utc>) -> Self {
        Self {
            last_week: TradeStats::compute(filter_trades(records, HistoryFilter::Week, now)),
            all_time: TradeStats::compute(records),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{fixed_now, stamp, trade};
    use chrono::Duration;

    #[test]
    fn empty_set_is_all_zero() {
        let none: Vec<TradeRecord> = Vec::new();
        let stats = TradeStats::compute(&none);
        assert_eq!(stats.total_trades, 0);
        assert_eq!(stats.won_trades, 0);
        assert_eq!(stats.win_rate, 0.0);
        assert_eq!(stats.net_profit, 0);
        assert!(!stats.is_favorable());
    }

    #[test]
    fn counts_and_net_profit() {
        let now = fixed_now();
        let records = vec![
            trade("1", "won", 1000, 1850, &stamp(now)),
            trade("2", "lost", 1000, 0, &stamp(now)),
            trade("3", "won", 2000, 3700, &stamp(now)),
            trade("4", "opened", 500, 0, &stamp(now)),
        ];
        let stats = TradeStats::compute(&records);
        assert_eq!(stats.total_trades, 4);
        assert_eq!(stats.won_trades, 2);
        assert!((stats.win_rate - 50.0).abs() < 1e-9);
        assert_eq!(stats.net_profit, 850 - 1000 + 1700 - 500);
        assert!(stats.is_favorable());
    }

    #[test]
    fn synonyms_do_not_count_as_wins() {
        let now = fixed_now();
        let records = vec![
            trade("1", "win", 1000, 1850, &stamp(now)),
            trade("2", "WON", 1000, 1850, &stamp(now)),
            trade("3", "won", 1000, 1850, &stamp(now)),
        ];
        let stats = TradeStats::compute(&records);
        assert_eq!(stats.won_trades, 1);
        assert!(!stats.is_favorable());
    }

    #[test]
    fn week_and_all_time_blocks() {
        let now = fixed_now();
        let records = vec![
            trade("1", "won", 1000, 1850, &stamp(now - Duration::days(1))),
            trade("2", "lost", 1000, 0, &stamp(now - Duration::days(10))),
            trade("3", "lost", 1000, 0, "bad timestamp"),
        ];
        let stats = HistoryStats::compute(&records, now);
        assert_eq!(stats.last_week.total_trades, 1);
        assert_eq!(stats.last_week.win_rate, 100.0);
        assert_eq!(stats.last_week.net_profit, 850);
        assert_eq!(stats.all_time.total_trades, 3);
        assert_eq!(stats.all_time.net_profit, 850 - 2000);
        assert!(!stats.all_time.is_favorable());
    }

    #[test]
    fn win_rate_helper() {
        assert_eq!(win_rate(0, 0), 0.0);
        assert_eq!(win_rate(1, 4), 25.0);
    }
}
