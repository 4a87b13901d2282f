use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

const ENGLISH_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const INDONESIAN_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Indonesian,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Indonesian => "id",
        }
    }

    /// Abbreviated month name, `month` is 1-based. Out of range months
    /// yield an empty string.
    pub fn month_abbrev(&self, month: u32) -> &'static str {
        let table = match self {
            Language::English => &ENGLISH_MONTHS,
            Language::Indonesian => &INDONESIAN_MONTHS,
        };
        month
            .checked_sub(1)
            .and_then(|i| table.get(i as usize))
            .copied()
            .unwrap_or("")
    }
}

impl FromStr for Language {
    type Err = LedgerError;

    /// Accepts bare codes (`en`) and tagged ones (`en-US`, `id_ID`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Ok(Language::English),
            "id" | "in" => Ok(Language::Indonesian),
            _ => Err(LedgerError::UnknownLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Which balance a trade was placed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Demo,
    Real,
}

impl AccountKind {
    pub fn from_demo_flag(is_demo: bool) -> Self {
        if is_demo {
            AccountKind::Demo
        } else {
            AccountKind::Real
        }
    }
}

impl FromStr for AccountKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "demo" => Ok(AccountKind::Demo),
            "real" => Ok(AccountKind::Real),
            _ => Err(LedgerError::UnknownAccount(s.to_string())),
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountKind::Demo => write!(f, "demo"),
            AccountKind::Real => write!(f, "real"),
        }
    }
}

/// Display preferences the screens are rendered with.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSettings {
    pub currency: String,
    pub language: Language,
    pub time_zone: Tz,
    pub account: AccountKind,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            currency: "IDR".to_string(),
            language: Language::English,
            time_zone: chrono_tz::Asia::Jakarta,
            account: AccountKind::Real,
        }
    }
}
