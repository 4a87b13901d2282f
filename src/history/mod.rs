pub mod filter;
pub mod stats;
pub mod view;

pub use filter::{filter_trades, is_within_last_week, HistoryFilter};
pub use stats::{HistoryStats, TradeStats, FAVORABLE_WIN_RATE};
pub use view::{HistoryScreen, StatsBlock, TradeRow};
