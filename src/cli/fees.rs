//! Fee table rendering

use crate::arbitrage::format_jpy;
use crate::fees::{FeeSchedule, VenueFees};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn rate(value: Decimal) -> String {
    format!("{}%", (value * dec!(100)).normalize())
}

fn row(name: &str, maker: &str, taker: &str, fiat: &str, crypto: &str) -> String {
    format!("{name:<12} {maker:>9} {taker:>9} {fiat:>9} {crypto:>10}\n")
}

fn venue_row(name: &str, fees: &VenueFees) -> String {
    row(
        name,
        &rate(fees.trading.maker),
        &rate(fees.trading.taker),
        &format_jpy(fees.withdrawal.fiat),
        &fees.withdrawal.crypto.normalize().to_string(),
    )
}

/// Fee table as printed by the `fees` command
pub fn render_fee_table(schedule: &FeeSchedule) -> String {
    let mut out = row("venue", "maker", "taker", "fiat", "crypto");
    for (name, fees) in schedule.venues() {
        out.push_str(&venue_row(name, fees));
    }
    out.push_str(&venue_row("(default)", schedule.default_fees()));
    out.push_str(&format!("network fee: {}\n", rate(schedule.network_fee())));
    out
}
