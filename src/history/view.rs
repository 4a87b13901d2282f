use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::format::{
    format_compact, format_currency, format_signed, format_trade_time, week_range_label,
};
use crate::history::filter::{filter_trades, HistoryFilter};
use crate::history::stats::{HistoryStats, TradeStats};
use crate::models::{AccountKind, TradeRecord, UserSettings};

/// Placeholder for a missing open or close rate.
const NO_RATE: &str = "-";

/// One card of the history list, fully formatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeRow {
    pub id: String,
    pub asset_name: String,
    pub asset_ric: String,
    pub status_label: String,
    pub trend_label: String,
    pub is_up: bool,
    pub amount_text: String,
    pub profit_text: String,
    pub payout_text: String,
    pub open_rate_text: String,
    pub close_rate_text: String,
    pub time_text: String,
    pub is_profitable: bool,
}

impl TradeRow {
    pub fn from_record(record: &TradeRecord, settings: &UserSettings) -> Self {
        let trend = record.trend_kind();
        let profit = record.profit();
        Self {
            id: record.id.clone(),
            asset_name: record.asset_name.clone(),
            asset_ric: record.asset_ric.clone(),
            status_label: record.status_kind().as_label(),
            trend_label: trend.as_label(),
            is_up: trend.is_up(),
            amount_text: format_currency(record.amount, &settings.currency),
            profit_text: format_signed(profit, &settings.currency),
            payout_text: format!("{}%", record.payment_rate),
            open_rate_text: rate_text(record.open_rate),
            close_rate_text: rate_text(record.close_rate),
            time_text: format_trade_time(&record.created_at, &settings.time_zone, settings.language),
            is_profitable: profit > 0,
        }
    }
}

fn rate_text(rate: Option<f64>) -> String {
    rate.map_or_else(|| NO_RATE.to_string(), |r| format!("{:.5}", r))
}

/// Formatted stats block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsBlock {
    pub total_trades: usize,
    pub won_trades: usize,
    pub win_rate_text: String,
    pub net_profit_text: String,
    pub net_profit_compact: String,
    pub is_favorable: bool,
}

impl StatsBlock {
    pub fn from_stats(stats: &TradeStats, currency: &str) -> Self {
        Self {
            total_trades: stats.total_trades,
            won_trades: stats.won_trades,
            win_rate_text: format!("{:.1}%", stats.win_rate),
            net_profit_text: format_signed(stats.net_profit, currency),
            net_profit_compact: format_compact(stats.net_profit / 100, currency),
            is_favorable: stats.is_favorable(),
        }
    }
}

/// Everything the history screen displays for one account and tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryScreen {
    pub filter: HistoryFilter,
    pub account: AccountKind,
    pub week_label: String,
    pub stats: HistoryStats,
    pub last_week: StatsBlock,
    pub all_time: StatsBlock,
    pub rows: Vec<TradeRow>,
}

impl HistoryScreen {
    /// Stats cover the whole selected account; rows follow the tab filter.
    pub fn build(
        records: &[TradeRecord],
        filter: HistoryFilter,
        settings: &UserSettings,
        now: DateTime<Utc>,
    ) -> Self {
        let account_records: Vec<TradeRecord> = records
            .iter()
            .filter(|r| AccountKind::from_demo_flag(r.is_demo_account) == settings.account)
            .cloned()
            .collect();

        let stats = HistoryStats::compute(&account_records, now);
        let rows: Vec<TradeRow> = filter_trades(&account_records, filter, now)
            .map(|r| TradeRow::from_record(r, settings))
            .collect();

        debug!(
            account = %settings.account,
            filter = %filter,
            total = account_records.len(),
            shown = rows.len(),
            "built history screen"
        );

        Self {
            filter,
            account: settings.account,
            week_label: week_range_label(now, &settings.time_zone, settings.language),
            last_week: StatsBlock::from_stats(&stats.last_week, &settings.currency),
            all_time: StatsBlock::from_stats(&stats.all_time, &settings.currency),
            stats,
            rows,
        }
    }
}
