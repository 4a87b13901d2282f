pub mod currency;
pub mod date;

pub use currency::{
    format_compact, format_currency, format_currency_with_symbol, format_signed, CurrencyStyle,
};
pub use date::{format_day_month, format_trade_time, parse_timestamp, week_range_label};
