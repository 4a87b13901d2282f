use anyhow::Result;
use chrono::Utc;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use trade_ledger::config::Config;
use trade_ledger::history::{HistoryFilter, HistoryScreen, StatsBlock};
use trade_ledger::profile::ProfileSummary;
use trade_ledger::source::{JsonFileSource, TradeSource};

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    // Optional first argument selects the history tab
    let tab: HistoryFilter = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => HistoryFilter::All,
    };

    let settings = cfg.settings();
    info!(
        "Currency {} | language {} | zone {} | account {}",
        settings.currency, settings.language, settings.time_zone, settings.account
    );

    let source = JsonFileSource::new(&cfg.trades_file);
    let records = source.fetch_trades().await?;

    let now = Utc::now();
    let profile = ProfileSummary::compute(&records, &settings);
    let screen = HistoryScreen::build(&records, tab, &settings, now);

    println!("== Profile ==");
    for line in profile.summary_lines(settings.account) {
        println!("  {}", line);
    }
    println!();

    println!("== This week ({}) ==", screen.week_label);
    print_stats(&screen.last_week);
    println!("== All time ==");
    print_stats(&screen.all_time);
    println!();

    println!("== History [{}] ==", screen.filter);
    if screen.rows.is_empty() {
        println!("  No trades");
    }
    for row in &screen.rows {
        let arrow = if row.is_up { "▲" } else { "▼" };
        println!(
            "  {} {:<10} {} {:<6} {:>14} {:>14}  {}",
            row.time_text,
            row.asset_name,
            arrow,
            row.status_label,
            row.amount_text,
            row.profit_text,
            row.payout_text
        );
    }

    Ok(())
}

fn print_stats(block: &StatsBlock) {
    let mood = if block.is_favorable { "+" } else { "-" };
    println!(
        "  [{}] {} trades | {} won | WR {} | P/L {} ({})",
        mood,
        block.total_trades,
        block.won_trades,
        block.win_rate_text,
        block.net_profit_text,
        block.net_profit_compact
    );
}
