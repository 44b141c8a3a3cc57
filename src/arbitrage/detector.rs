//! Pairwise arbitrage detection
//!
//! Every ordered pair of distinct venues is evaluated as "buy on the first,
//! sell on the second". Pairs are only kept when the sell price is higher;
//! the calculator then prices the full round trip. Detection is a pure
//! function of the fee schedule, the config and the snapshot.

use super::ArbitrageOpportunity;
use crate::config::DetectionConfig;
use crate::feed::{PriceQuote, PriceSnapshot};
use crate::fees::FeeSchedule;
use crate::profit::{calculate_arbitrage_costs, CostError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

/// Detection policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectorConfig {
    /// Trade size (BTC) each pair is evaluated at
    pub trade_amount: Decimal,
    /// Sell − buy price difference must exceed this (and zero)
    pub min_price_difference: Decimal,
    /// Drop pairs whose net profit is not positive
    pub require_profitable: bool,
    /// Drop pairs below this net profit percentage
    pub min_net_profit_percentage: Option<Decimal>,
    /// Exclude quotes priced above this
    pub max_price: Option<Decimal>,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            trade_amount: Decimal::ONE,
            min_price_difference: Decimal::ZERO,
            require_profitable: false,
            min_net_profit_percentage: None,
            max_price: None,
        }
    }
}

impl From<&DetectionConfig> for DetectorConfig {
    fn from(config: &DetectionConfig) -> Self {
        Self {
            trade_amount: config.trade_amount,
            min_price_difference: config.min_price_difference,
            require_profitable: config.require_profitable,
            min_net_profit_percentage: config.min_net_profit_percentage,
            max_price: config.max_price,
        }
    }
}

impl DetectorConfig {
    /// Reject settings no pair could ever satisfy
    pub fn validate(&self) -> Result<(), CostError> {
        if self.trade_amount <= Decimal::ZERO {
            return Err(CostError::InvalidArgument(format!(
                "trade amount must be positive, got {}",
                self.trade_amount
            )));
        }
        if let Some(max) = self.max_price {
            if max <= Decimal::ZERO {
                return Err(CostError::InvalidArgument(format!(
                    "max price must be positive, got {max}"
                )));
            }
        }
        Ok(())
    }
}

/// Valid quotes, one per venue, in first-seen venue order
///
/// When a venue appears more than once, its last valid quote wins.
fn usable_quotes<'a>(snapshot: &'a PriceSnapshot, max_price: Option<Decimal>) -> Vec<&'a PriceQuote> {
    let mut quotes: Vec<&PriceQuote> = Vec::with_capacity(snapshot.len());
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for quote in snapshot.quotes() {
        if let Err(e) = quote.validate_with_max(max_price) {
            tracing::warn!(
                exchange = %quote.exchange,
                error = %e,
                "Excluding invalid quote from this cycle"
            );
            continue;
        }

        match positions.get(quote.exchange.as_str()) {
            Some(&index) => {
                tracing::debug!(exchange = %quote.exchange, "Duplicate venue, keeping latest quote");
                quotes[index] = quote;
            }
            None => {
                positions.insert(quote.exchange.as_str(), quotes.len());
                quotes.push(quote);
            }
        }
    }

    quotes
}

/// Evaluate buying on `buy` and selling on `sell`
///
/// `Ok(None)` means the pair does not meet the policy; `Err` means a value
/// could not be computed and the pair must be skipped.
fn evaluate_pair(
    fees: &FeeSchedule,
    config: &DetectorConfig,
    buy: &PriceQuote,
    sell: &PriceQuote,
) -> Result<Option<ArbitrageOpportunity>, CostError> {
    let price_difference = sell
        .price
        .checked_sub(buy.price)
        .ok_or(CostError::Overflow("price difference"))?;
    if price_difference <= config.min_price_difference.max(Decimal::ZERO) {
        return Ok(None);
    }

    let percentage_difference = price_difference
        .abs()
        .checked_div(buy.price)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .ok_or(CostError::Overflow("percentage difference"))?;

    let costs = calculate_arbitrage_costs(
        fees,
        &buy.exchange,
        &sell.exchange,
        config.trade_amount,
        buy.price,
        sell.price,
    )?;

    let net_profit_percentage = costs
        .breakdown
        .buy
        .trade_value
        .checked_div(dec!(100))
        .and_then(|one_pct| costs.net_profit.checked_div(one_pct))
        .ok_or(CostError::Overflow("net profit percentage"))?;

    let is_profitable_after_fees = costs.is_profitable();
    if config.require_profitable && !is_profitable_after_fees {
        return Ok(None);
    }
    if let Some(min) = config.min_net_profit_percentage {
        if net_profit_percentage < min {
            return Ok(None);
        }
    }

    Ok(Some(ArbitrageOpportunity {
        exchange_from: buy.exchange.clone(),
        exchange_to: sell.exchange.clone(),
        price_from: buy.price,
        price_to: sell.price,
        price_difference,
        percentage_difference,
        amount: config.trade_amount,
        gross_profit: costs.gross_profit,
        net_profit: costs.net_profit,
        net_profit_percentage,
        total_fees: costs.total_costs.total,
        costs: costs.total_costs,
        is_profitable_after_fees,
        timestamp: buy.timestamp.max(sell.timestamp),
    }))
}

/// Find and rank arbitrage opportunities in a snapshot
///
/// Invalid quotes and pairs whose figures overflow are skipped, never
/// failing the cycle. The result is sorted by net profit percentage
/// (highest first), then by buy venue and sell venue name.
pub fn detect_arbitrage_opportunities(
    fees: &FeeSchedule,
    config: &DetectorConfig,
    snapshot: &PriceSnapshot,
) -> Vec<ArbitrageOpportunity> {
    if let Err(e) = config.validate() {
        tracing::warn!(error = %e, "Detector config rejected, no pairs evaluated");
        return Vec::new();
    }

    let quotes = usable_quotes(snapshot, config.max_price);
    if quotes.len() < 2 {
        tracing::debug!(venues = quotes.len(), "Not enough venues to pair");
        return Vec::new();
    }

    let mut opportunities = Vec::new();
    for buy in &quotes {
        for sell in &quotes {
            if buy.exchange == sell.exchange {
                continue;
            }

            match evaluate_pair(fees, config, buy, sell) {
                Ok(Some(opportunity)) => {
                    tracing::debug!(
                        from = %opportunity.exchange_from,
                        to = %opportunity.exchange_to,
                        price_difference = %opportunity.price_difference,
                        net_profit = %opportunity.net_profit,
                        net_profit_pct = %opportunity.net_profit_percentage,
                        "Arbitrage candidate"
                    );
                    opportunities.push(opportunity);
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::debug!(
                        from = %buy.exchange,
                        to = %sell.exchange,
                        error = %e,
                        "Skipping pair"
                    );
                }
            }
        }
    }

    opportunities.sort_by(|a, b| {
        b.net_profit_percentage
            .cmp(&a.net_profit_percentage)
            .then_with(|| a.exchange_from.cmp(&b.exchange_from))
            .then_with(|| a.exchange_to.cmp(&b.exchange_to))
    });

    opportunities
}

/// Detector bound to a fee schedule and policy
///
/// Holds no mutable state, so one instance can serve concurrent cycles.
#[derive(Debug, Clone)]
pub struct ArbitrageDetector {
    fees: FeeSchedule,
    config: DetectorConfig,
}

impl ArbitrageDetector {
    /// Create a detector with the default policy
    pub fn new(fees: FeeSchedule) -> Self {
        Self {
            fees,
            config: DetectorConfig::default(),
        }
    }

    /// Create a detector with a custom policy
    pub fn with_config(fees: FeeSchedule, config: DetectorConfig) -> Result<Self, CostError> {
        config.validate()?;
        Ok(Self { fees, config })
    }

    /// Detect opportunities in a snapshot
    pub fn detect(&self, snapshot: &PriceSnapshot) -> Vec<ArbitrageOpportunity> {
        detect_arbitrage_opportunities(&self.fees, &self.config, snapshot)
    }

    /// Fee schedule in use
    pub fn fees(&self) -> &FeeSchedule {
        &self.fees
    }

    /// Policy in use
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }
}

impl Default for ArbitrageDetector {
    fn default() -> Self {
        Self::new(FeeSchedule::builtin())
    }
}
