//! Spread advisor
//!
//! Solves net_profit(spread) = 0 for a venue pair. Trading and transfer
//! costs scale with trade value while the fiat withdrawal fee is fixed, so
//! the per-unit spread needed falls as the trade amount grows.

use super::{calculate_arbitrage_costs, CostError, SpreadRequirement};
use crate::fees::FeeSchedule;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Price the costs are evaluated at when none is given (BTC/JPY)
pub const DEFAULT_REFERENCE_PRICE: Decimal = dec!(5000000);

/// Safety margin applied on top of the break-even point
pub const BREAK_EVEN_MARGIN: Decimal = dec!(1.1);

/// Minimum spread at the default reference price
pub fn minimum_profitable_spread(
    fees: &FeeSchedule,
    buy_exchange: &str,
    sell_exchange: &str,
    amount: Decimal,
) -> Result<SpreadRequirement, CostError> {
    minimum_profitable_spread_at(
        fees,
        buy_exchange,
        sell_exchange,
        amount,
        DEFAULT_REFERENCE_PRICE,
    )
}

/// Minimum spread with both legs priced at `reference_price`
pub fn minimum_profitable_spread_at(
    fees: &FeeSchedule,
    buy_exchange: &str,
    sell_exchange: &str,
    amount: Decimal,
    reference_price: Decimal,
) -> Result<SpreadRequirement, CostError> {
    let costs = calculate_arbitrage_costs(
        fees,
        buy_exchange,
        sell_exchange,
        amount,
        reference_price,
        reference_price,
    )?;
    let total_costs = costs.total_costs.total;

    let min_spread = total_costs
        .checked_div(amount)
        .ok_or(CostError::Overflow("minimum spread"))?;
    let min_spread_percentage = min_spread
        .checked_div(reference_price)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .ok_or(CostError::Overflow("minimum spread percentage"))?;
    let break_even_spread = min_spread
        .checked_mul(BREAK_EVEN_MARGIN)
        .ok_or(CostError::Overflow("break-even spread"))?;

    tracing::debug!(
        buy = buy_exchange,
        sell = sell_exchange,
        amount = %amount,
        min_spread = %min_spread,
        break_even_spread = %break_even_spread,
        "Computed minimum profitable spread"
    );

    Ok(SpreadRequirement {
        buy_exchange: buy_exchange.to_string(),
        sell_exchange: sell_exchange.to_string(),
        amount,
        reference_price,
        total_costs,
        min_spread,
        min_spread_percentage,
        break_even_spread,
    })
}
