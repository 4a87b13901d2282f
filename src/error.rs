use thiserror::Error;

/// Errors raised while interpreting user-supplied settings and selectors.
///
/// Record-level problems (bad timestamps, unknown statuses) are never errors;
/// they degrade to fallback display values instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("unknown history filter: {0}")]
    UnknownFilter(String),

    #[error("unsupported language code: {0}")]
    UnknownLanguage(String),

    #[error("unknown account kind: {0}")]
    UnknownAccount(String),

    #[error("unknown time zone: {0}")]
    UnknownTimeZone(String),
}
