//! Arbitrage opportunity types

use crate::profit::CostBreakdown;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Buy on `exchange_from`, sell on `exchange_to`
///
/// `price_difference` is always positive for opportunities produced by the
/// detector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArbitrageOpportunity {
    /// Buy venue
    pub exchange_from: String,
    /// Sell venue
    pub exchange_to: String,
    pub price_from: Decimal,
    pub price_to: Decimal,
    /// price_to − price_from
    pub price_difference: Decimal,
    /// |price_difference| / price_from × 100
    pub percentage_difference: Decimal,
    /// Trade size the profit figures are computed for
    pub amount: Decimal,
    /// amount × price_difference
    pub gross_profit: Decimal,
    /// Gross profit minus all fees and transfer cost
    pub net_profit: Decimal,
    /// net_profit / (amount × price_from) × 100
    pub net_profit_percentage: Decimal,
    pub total_fees: Decimal,
    pub costs: CostBreakdown,
    pub is_profitable_after_fees: bool,
    /// Later of the two quote timestamps
    pub timestamp: DateTime<Utc>,
}
