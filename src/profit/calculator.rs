//! Trade leg and round trip cost calculation

use super::{ArbitrageCosts, CostBreakdown, CostDetail, CostError, FeeTier, Side, TradingCost};
use crate::fees::{CurrencyKind, FeeSchedule};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn checked(value: Option<Decimal>, what: &'static str) -> Result<Decimal, CostError> {
    value.ok_or(CostError::Overflow(what))
}

fn require_positive(value: Decimal, name: &str) -> Result<(), CostError> {
    if value <= Decimal::ZERO {
        return Err(CostError::InvalidArgument(format!(
            "{name} must be positive, got {value}"
        )));
    }
    Ok(())
}

/// Cost of one trade leg
///
/// The fee is charged at the magnitude of the configured rate, so a
/// negative maker rate (rebate) increases cost instead of reducing it.
pub fn calculate_trading_costs(
    fees: &FeeSchedule,
    exchange: &str,
    amount: Decimal,
    price: Decimal,
    side: Side,
    tier: FeeTier,
) -> Result<TradingCost, CostError> {
    require_positive(amount, "amount")?;
    require_positive(price, "price")?;

    let trade_value = checked(amount.checked_mul(price), "trade value")?;

    let rates = fees.trading_fee(exchange);
    let fee_rate = match tier {
        FeeTier::Maker => rates.maker,
        FeeTier::Taker => rates.taker,
    };
    let trading_fee = checked(fee_rate.abs().checked_mul(trade_value), "trading fee")?;

    let net_value = match side {
        Side::Buy => checked(trade_value.checked_add(trading_fee), "net value")?,
        Side::Sell => checked(trade_value.checked_sub(trading_fee), "net value")?,
    };

    Ok(TradingCost {
        exchange: exchange.to_string(),
        side,
        tier,
        amount,
        price,
        trade_value,
        fee_rate,
        trading_fee,
        net_value,
    })
}

/// Cost and net profit of buying on one venue and selling on another
///
/// Both legs are charged at the taker rate. The fiat withdrawal fee comes
/// from the sell venue; the crypto transfer cost is the network fee plus
/// the buy venue's crypto withdrawal fee, applied to the buy-side value.
pub fn calculate_arbitrage_costs(
    fees: &FeeSchedule,
    buy_exchange: &str,
    sell_exchange: &str,
    amount: Decimal,
    buy_price: Decimal,
    sell_price: Decimal,
) -> Result<ArbitrageCosts, CostError> {
    let buy = calculate_trading_costs(
        fees,
        buy_exchange,
        amount,
        buy_price,
        Side::Buy,
        FeeTier::Taker,
    )?;
    let sell = calculate_trading_costs(
        fees,
        sell_exchange,
        amount,
        sell_price,
        Side::Sell,
        FeeTier::Taker,
    )?;

    let gross_profit = checked(
        sell_price
            .checked_sub(buy_price)
            .and_then(|spread| amount.checked_mul(spread)),
        "gross profit",
    )?;

    let network_fee = fees.network_fee();
    let fiat_withdrawal_fee = fees.withdrawal_fee(sell_exchange, CurrencyKind::Fiat);
    let crypto_withdrawal_fee = fees.withdrawal_fee(buy_exchange, CurrencyKind::Crypto);
    let crypto_transfer_cost = checked(
        network_fee
            .checked_add(crypto_withdrawal_fee)
            .and_then(|rate| rate.checked_mul(buy.trade_value)),
        "crypto transfer cost",
    )?;

    let total = checked(
        buy.trading_fee
            .checked_add(sell.trading_fee)
            .and_then(|t| t.checked_add(fiat_withdrawal_fee))
            .and_then(|t| t.checked_add(crypto_transfer_cost)),
        "total cost",
    )?;

    let net_profit = checked(gross_profit.checked_sub(total), "net profit")?;
    let profit_reduction = checked(gross_profit.checked_sub(net_profit), "profit reduction")?;

    Ok(ArbitrageCosts {
        buy_exchange: buy_exchange.to_string(),
        sell_exchange: sell_exchange.to_string(),
        amount,
        buy_price,
        sell_price,
        gross_profit,
        total_costs: CostBreakdown {
            buy_trading_fee: buy.trading_fee,
            sell_trading_fee: sell.trading_fee,
            fiat_withdrawal_fee,
            crypto_transfer_cost,
            total,
        },
        net_profit,
        profit_reduction,
        breakdown: CostDetail {
            buy,
            sell,
            network_fee,
            crypto_withdrawal_fee,
            fiat_withdrawal_fee,
        },
    })
}

/// Symmetric percentage difference between two values
///
/// |a − b| relative to their midpoint, times 100. Zero when either value
/// is zero. `None` only if the result does not fit a `Decimal`.
pub fn percentage_difference(a: Decimal, b: Decimal) -> Option<Decimal> {
    if a.is_zero() || b.is_zero() {
        return Some(Decimal::ZERO);
    }

    let half_a = a / Decimal::TWO;
    let half_b = b / Decimal::TWO;
    let midpoint = half_a.checked_add(half_b)?.abs();
    if midpoint.is_zero() {
        return Some(Decimal::ZERO);
    }

    // |a − b| / midpoint == (|a − b| / 2) / midpoint × 2
    let half_diff = half_a.checked_sub(half_b)?.abs();
    half_diff.checked_div(midpoint)?.checked_mul(dec!(200))
}
