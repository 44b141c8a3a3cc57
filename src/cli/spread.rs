//! Spread command implementation

use crate::arbitrage::{format_jpy, format_percentage};
use crate::config::Config;
use crate::profit::{minimum_profitable_spread_at, SpreadRequirement, DEFAULT_REFERENCE_PRICE};
use clap::Args;
use rust_decimal::Decimal;

#[derive(Args, Debug)]
pub struct SpreadArgs {
    /// Venue to buy on
    #[arg(long)]
    pub buy: String,

    /// Venue to sell on
    #[arg(long)]
    pub sell: String,

    /// Trade size in BTC
    #[arg(long, default_value = "1")]
    pub amount: Decimal,

    /// Price to evaluate costs at
    #[arg(long)]
    pub reference_price: Option<Decimal>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl SpreadArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let fees = config.fees.to_schedule();
        for venue in [&self.buy, &self.sell] {
            if !fees.is_known(venue) {
                tracing::warn!(exchange = %venue, "Venue not in fee table, using default fees");
            }
        }

        let requirement = minimum_profitable_spread_at(
            &fees,
            &self.buy,
            &self.sell,
            self.amount,
            self.reference_price.unwrap_or(DEFAULT_REFERENCE_PRICE),
        )?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&requirement)?);
        } else {
            print!("{}", render_requirement(&requirement));
        }
        Ok(())
    }
}

fn render_requirement(r: &SpreadRequirement) -> String {
    format!(
        "{} → {} ({} BTC at {})\n  total costs:       {}\n  minimum spread:    {} ({})\n  break-even spread: {}\n",
        r.buy_exchange,
        r.sell_exchange,
        r.amount,
        format_jpy(r.reference_price),
        format_jpy(r.total_costs),
        format_jpy(r.min_spread),
        format_percentage(r.min_spread_percentage),
        format_jpy(r.break_even_spread),
    )
}
