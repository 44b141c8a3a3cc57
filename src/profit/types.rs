//! Profitability types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from direct calculator and spread advisor calls
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CostError {
    /// Caller passed a non-positive amount/price or an unknown side/tier
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// A cost component could not be represented
    #[error("Arithmetic overflow computing {0}")]
    Overflow(&'static str),
}

/// Direction of a trade leg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl FromStr for Side {
    type Err = CostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "buy" => Ok(Side::Buy),
            "sell" => Ok(Side::Sell),
            _ => Err(CostError::InvalidArgument(format!("unknown side '{s}'"))),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "buy"),
            Side::Sell => write!(f, "sell"),
        }
    }
}

/// Fee tier an order is charged at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeTier {
    /// Order adds liquidity
    Maker,
    /// Order removes liquidity
    Taker,
}

impl FromStr for FeeTier {
    type Err = CostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "maker" => Ok(FeeTier::Maker),
            "taker" => Ok(FeeTier::Taker),
            _ => Err(CostError::InvalidArgument(format!("unknown fee tier '{s}'"))),
        }
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeeTier::Maker => write!(f, "maker"),
            FeeTier::Taker => write!(f, "taker"),
        }
    }
}

/// Cost of a single trade leg on one venue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingCost {
    pub exchange: String,
    pub side: Side,
    pub tier: FeeTier,
    pub amount: Decimal,
    pub price: Decimal,
    /// amount × price
    pub trade_value: Decimal,
    /// Signed rate from the fee schedule
    pub fee_rate: Decimal,
    /// Fee magnitude charged on the leg
    pub trading_fee: Decimal,
    /// Cash paid (buy) or received (sell) including the fee
    pub net_value: Decimal,
}

/// Summed cost components of a round trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub buy_trading_fee: Decimal,
    pub sell_trading_fee: Decimal,
    pub fiat_withdrawal_fee: Decimal,
    pub crypto_transfer_cost: Decimal,
    pub total: Decimal,
}

/// Inputs behind each cost component, kept for observability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostDetail {
    pub buy: TradingCost,
    pub sell: TradingCost,
    pub network_fee: Decimal,
    /// Crypto withdrawal fee of the buy venue
    pub crypto_withdrawal_fee: Decimal,
    /// Fiat withdrawal fee of the sell venue
    pub fiat_withdrawal_fee: Decimal,
}

/// Full buy/sell round trip economics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArbitrageCosts {
    pub buy_exchange: String,
    pub sell_exchange: String,
    pub amount: Decimal,
    pub buy_price: Decimal,
    pub sell_price: Decimal,
    /// amount × (sell_price − buy_price)
    pub gross_profit: Decimal,
    pub total_costs: CostBreakdown,
    /// gross_profit − total_costs.total
    pub net_profit: Decimal,
    /// gross_profit − net_profit
    pub profit_reduction: Decimal,
    pub breakdown: CostDetail,
}

impl ArbitrageCosts {
    /// Whether the round trip makes money after all costs
    pub fn is_profitable(&self) -> bool {
        self.net_profit > Decimal::ZERO
    }
}

/// Spread needed for a round trip between two venues to break even
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpreadRequirement {
    pub buy_exchange: String,
    pub sell_exchange: String,
    pub amount: Decimal,
    /// Price the costs were evaluated at
    pub reference_price: Decimal,
    /// Total round trip cost at the reference price
    pub total_costs: Decimal,
    /// Per-unit spread at which net profit is zero
    pub min_spread: Decimal,
    /// min_spread as a percentage of the reference price
    pub min_spread_percentage: Decimal,
    /// min_spread with the safety margin applied
    pub break_even_spread: Decimal,
}
