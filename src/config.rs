use chrono_tz::Tz;
use std::str::FromStr;
use tracing::warn;

use crate::error::LedgerError;
use crate::format::CurrencyStyle;
use crate::models::{AccountKind, Language, UserSettings};

const DEFAULT_CURRENCY: &str = "IDR";
const DEFAULT_LANGUAGE: &str = "en";
const DEFAULT_TIME_ZONE: &str = "Asia/Jakarta";
const DEFAULT_ACCOUNT: &str = "real";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Display preferences
    pub currency: String,
    pub language: Language,
    pub time_zone: Tz,
    pub account: AccountKind,

    // Data
    pub trades_file: String,

    // Logging
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Values that fail to parse fall
    /// back to their defaults with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = |key: &str, default: &str| -> String {
            lookup(key).unwrap_or_else(|| default.to_string())
        };

        let currency = env("LEDGER_CURRENCY", DEFAULT_CURRENCY).trim().to_uppercase();
        if !CurrencyStyle::is_known(&currency) {
            warn!("Unknown currency {}, amounts will use US formatting", currency);
        }

        let language = Language::from_str(&env("LEDGER_LANGUAGE", DEFAULT_LANGUAGE))
            .unwrap_or_else(|e| {
                warn!("{}, using {}", e, DEFAULT_LANGUAGE);
                Language::English
            });

        let time_zone = parse_time_zone(&env("LEDGER_TIME_ZONE", DEFAULT_TIME_ZONE))
            .unwrap_or_else(|e| {
                warn!("{}, using {}", e, DEFAULT_TIME_ZONE);
                chrono_tz::Asia::Jakarta
            });

        let account = AccountKind::from_str(&env("LEDGER_ACCOUNT", DEFAULT_ACCOUNT))
            .unwrap_or_else(|e| {
                warn!("{}, using {}", e, DEFAULT_ACCOUNT);
                AccountKind::Real
            });

        Config {
            currency,
            language,
            time_zone,
            account,
            trades_file: env("LEDGER_TRADES_FILE", "data/trades.json"),
            log_level: env("LOG_LEVEL", "info"),
        }
    }

    pub fn settings(&self) -> UserSettings {
        UserSettings {
            currency: self.currency.clone(),
            language: self.language,
            time_zone: self.time_zone,
            account: self.account,
        }
    }
}

/// Parses an IANA zone name such as `Asia/Jakarta`.
pub fn parse_time_zone(name: &str) -> Result<Tz, LedgerError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| LedgerError::UnknownTimeZone(name.to_string()))
}
