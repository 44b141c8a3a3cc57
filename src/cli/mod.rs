//! CLI interface for arbscan
//!
//! Provides subcommands for:
//! - `scan`: One-shot detection on a snapshot file
//! - `watch`: Poll a snapshot file and report each cycle
//! - `spread`: Minimum profitable spread between two venues
//! - `fees`: Show the effective fee table
//! - `config`: Show the effective configuration

mod fees;
mod scan;
mod spread;
mod watch;

pub use fees::render_fee_table;
pub use scan::ScanArgs;
pub use spread::SpreadArgs;
pub use watch::WatchArgs;

use crate::arbitrage::{format_opportunity_message, ArbitrageOpportunity};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "arbscan")]
#[command(about = "Fee-adjusted BTC/JPY arbitrage scanner across Japanese exchanges")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect opportunities in a snapshot file once
    Scan(ScanArgs),
    /// Re-scan a snapshot file on an interval
    Watch(WatchArgs),
    /// Show the minimum profitable spread between two venues
    Spread(SpreadArgs),
    /// Show the effective fee table
    Fees,
    /// Show the effective configuration
    Config,
}

/// Print opportunities to stdout, one line each or as a JSON array
pub(crate) fn print_opportunities(
    opportunities: &[ArbitrageOpportunity],
    json: bool,
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(opportunities)?);
        return Ok(());
    }

    if opportunities.is_empty() {
        println!("No arbitrage opportunities");
    }
    for opportunity in opportunities {
        println!("{}", format_opportunity_message(opportunity));
    }
    Ok(())
}
