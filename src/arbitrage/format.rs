//! Human-readable opportunity rendering

use super::ArbitrageOpportunity;
use rust_decimal::{Decimal, RoundingStrategy};

fn round_half_away(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Format a yen amount as `￥1,234,567`
///
/// Rounded to whole yen, half away from zero. Negative amounts are
/// prefixed with `-`.
pub fn format_jpy(amount: Decimal) -> String {
    let rounded = round_half_away(amount, 0);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-￥{grouped}")
    } else {
        format!("￥{grouped}")
    }
}

/// Format a percentage with two decimals, e.g. `1.79%`
pub fn format_percentage(value: Decimal) -> String {
    format!("{:.2}%", round_half_away(value, 2))
}

/// One-line summary of an opportunity
///
/// `bitFlyer → Coincheck | buy ￥5,000,000 sell ￥5,100,000 | spread ￥100,000 (2.00%) | net ￥89,593 (1.79%) | profitable`
pub fn format_opportunity_message(opportunity: &ArbitrageOpportunity) -> String {
    let verdict = if opportunity.is_profitable_after_fees {
        "profitable"
    } else {
        "unprofitable after fees"
    };

    format!(
        "{} → {} | buy {} sell {} | spread {} ({}) | net {} ({}) | {}",
        opportunity.exchange_from,
        opportunity.exchange_to,
        format_jpy(opportunity.price_from),
        format_jpy(opportunity.price_to),
        format_jpy(opportunity.price_difference),
        format_percentage(opportunity.percentage_difference),
        format_jpy(opportunity.net_profit),
        format_percentage(opportunity.net_profit_percentage),
        verdict,
    )
}
