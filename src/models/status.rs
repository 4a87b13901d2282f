use std::fmt;

/// Outcome of a trade as reported by the backend.
///
/// Parsing is lenient: case-insensitive, and `win` / `lose` / `loss` are
/// accepted as synonyms. Anything else is kept verbatim in `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TradeStatus {
    Won,
    Lost,
    Opened,
    Unknown(String),
}

impl TradeStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "won" | "win" => TradeStatus::Won,
            "lost" | "lose" | "loss" => TradeStatus::Lost,
            "opened" => TradeStatus::Opened,
            _ => TradeStatus::Unknown(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TradeStatus::Won => "won",
            TradeStatus::Lost => "lost",
            TradeStatus::Opened => "opened",
            TradeStatus::Unknown(raw) => raw,
        }
    }

    /// Badge text shown on a history card.
    pub fn as_label(&self) -> String {
        match self {
            TradeStatus::Won => "WON".to_string(),
            TradeStatus::Lost => "LOST".to_string(),
            TradeStatus::Opened => "OPEN".to_string(),
            TradeStatus::Unknown(raw) => raw.to_uppercase(),
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, TradeStatus::Won | TradeStatus::Lost)
    }
}

impl fmt::Display for TradeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction the trader picked when opening the position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TradeTrend {
    Call,
    Put,
    Buy,
    Sell,
    Unknown(String),
}

impl TradeTrend {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "call" => TradeTrend::Call,
            "put" => TradeTrend::Put,
            "buy" => TradeTrend::Buy,
            "sell" => TradeTrend::Sell,
            _ => TradeTrend::Unknown(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TradeTrend::Call => "call",
            TradeTrend::Put => "put",
            TradeTrend::Buy => "buy",
            TradeTrend::Sell => "sell",
            TradeTrend::Unknown(raw) => raw,
        }
    }

    pub fn as_label(&self) -> String {
        self.as_str().to_uppercase()
    }

    /// Call and buy bet on a rising price. Unknown directions are treated as
    /// downward, matching the default arrow of the history card.
    pub fn is_up(&self) -> bool {
        matches!(self, TradeTrend::Call | TradeTrend::Buy)
    }
}

impl fmt::Display for TradeTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
