use serde::Serialize;

use crate::format::{format_currency_with_symbol, format_signed};
use crate::history::stats::win_rate;
use crate::models::{AccountKind, TradeRecord, TradeStatus, UserSettings};

/// Per-account figures on the profile screen.
///
/// Unlike the history stats, outcomes here are classified leniently, so
/// `WIN` or `loss` from older backend versions still count.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct AccountSummary {
    pub total_trades: usize,
    pub wins: usize,
    pub losses: usize,
    pub open_positions: usize,
    pub win_rate: f64,
    pub net_profit: i64,
    pub total_volume: i64,
}

impl AccountSummary {
    pub fn compute(records: &[TradeRecord], account: AccountKind) -> Self {
        let mut summary = Self::default();

        for record in records
            .iter()
            .filter(|r| AccountKind::from_demo_flag(r.is_demo_account) == account)
        {
            summary.total_trades += 1;
            summary.net_profit += record.profit();
            summary.total_volume += record.amount;
            match record.status_kind() {
                TradeStatus::Won => summary.wins += 1,
                TradeStatus::Lost => summary.losses += 1,
                TradeStatus::Opened => summary.open_positions += 1,
                TradeStatus::Unknown(_) => {}
            }
        }

        summary.win_rate = win_rate(summary.wins, summary.total_trades);
        summary
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSummary {
    pub demo: AccountSummary,
    pub real: AccountSummary,
    pub currency: String,
    pub language: String,
}

impl ProfileSummary {
    pub fn compute(records: &[TradeRecord], settings: &UserSettings) -> Self {
        Self {
            demo: AccountSummary::compute(records, AccountKind::Demo),
            real: AccountSummary::compute(records, AccountKind::Real),
            currency: settings.currency.clone(),
            language: settings.language.code().to_string(),
        }
    }

    pub fn for_account(&self, account: AccountKind) -> &AccountSummary {
        match account {
            AccountKind::Demo => &self.demo,
            AccountKind::Real => &self.real,
        }
    }

    /// Lines for the account summary card.
    pub fn summary_lines(&self, account: AccountKind) -> Vec<String> {
        let s = self.for_account(account);
        vec![
            format!("Account: {}", account),
            format!(
                "Trades: {} ({} won / {} lost / {} open)",
                s.total_trades, s.wins, s.losses, s.open_positions
            ),
            format!("Win rate: {:.1}%", s.win_rate),
            format!("Volume: {}", format_currency_with_symbol(s.total_volume, &self.currency)),
            format!("Net P/L: {}", format_signed(s.net_profit, &self.currency)),
        ]
    }
}
