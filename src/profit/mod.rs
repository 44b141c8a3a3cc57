//! Profitability module
//!
//! Trade leg costs, round trip net profit, and the spread a venue pair
//! needs before a round trip pays for itself.

mod calculator;
mod spread;
mod types;

pub use calculator::{calculate_arbitrage_costs, calculate_trading_costs, percentage_difference};
pub use spread::{
    minimum_profitable_spread, minimum_profitable_spread_at, BREAK_EVEN_MARGIN,
    DEFAULT_REFERENCE_PRICE,
};
pub use types::{
    ArbitrageCosts, CostBreakdown, CostDetail, CostError, FeeTier, Side, SpreadRequirement,
    TradingCost,
};
