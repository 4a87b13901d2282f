pub mod settings;
pub mod status;
pub mod trade;

pub use settings::{AccountKind, Language, UserSettings};
pub use status::{TradeStatus, TradeTrend};
pub use trade::TradeRecord;
