//! Fee schedule types

use super::table::{builtin_venues, DEFAULT_NETWORK_FEE};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use thiserror::Error;

/// Maker/taker trading fee rates
///
/// Rates are fractions of trade value (0.0015 = 0.15%). A negative maker
/// rate is a rebate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingFee {
    /// Rate for orders that add liquidity
    pub maker: Decimal,
    /// Rate for orders that remove liquidity
    pub taker: Decimal,
}

/// Fixed withdrawal fees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalFee {
    /// Fiat (JPY) withdrawal fee, in fiat units
    pub fiat: Decimal,
    /// Crypto (BTC) withdrawal fee, in coin units
    pub crypto: Decimal,
}

impl WithdrawalFee {
    /// Fee for the given currency kind
    pub fn get(&self, kind: CurrencyKind) -> Decimal {
        match kind {
            CurrencyKind::Fiat => self.fiat,
            CurrencyKind::Crypto => self.crypto,
        }
    }
}

/// Complete fee schedule of one venue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueFees {
    pub trading: TradingFee,
    pub withdrawal: WithdrawalFee,
}

impl VenueFees {
    /// Create a venue schedule from its four rates
    pub fn new(maker: Decimal, taker: Decimal, fiat: Decimal, crypto: Decimal) -> Self {
        Self {
            trading: TradingFee { maker, taker },
            withdrawal: WithdrawalFee { fiat, crypto },
        }
    }
}

impl Default for VenueFees {
    /// Schedule applied to venues missing from the table
    fn default() -> Self {
        Self::new(dec!(0.001), dec!(0.001), dec!(500), dec!(0.0005))
    }
}

/// Kind of currency being withdrawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyKind {
    /// Fiat currency (JPY)
    Fiat,
    /// Crypto currency (BTC)
    Crypto,
}

/// Currency code that is neither fiat nor crypto
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown currency kind: {0}")]
pub struct UnknownCurrency(pub String);

impl FromStr for CurrencyKind {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fiat" | "jpy" => Ok(CurrencyKind::Fiat),
            "crypto" | "btc" => Ok(CurrencyKind::Crypto),
            _ => Err(UnknownCurrency(s.to_string())),
        }
    }
}

/// Immutable fee configuration for all venues
///
/// Built once (from the built-in table or from config) and passed by
/// reference into the calculator, spread advisor and detector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeSchedule {
    venues: BTreeMap<String, VenueFees>,
    default: VenueFees,
    network_fee: Decimal,
}

impl FeeSchedule {
    /// Create a schedule from explicit parts
    pub fn new(
        venues: impl IntoIterator<Item = (String, VenueFees)>,
        default: VenueFees,
        network_fee: Decimal,
    ) -> Self {
        Self {
            venues: venues.into_iter().collect(),
            default,
            network_fee,
        }
    }

    /// Schedule with the built-in venue table
    pub fn builtin() -> Self {
        Self::new(builtin_venues(), VenueFees::default(), DEFAULT_NETWORK_FEE)
    }

    /// Schedule with no venues; every lookup uses the default
    pub fn empty() -> Self {
        Self::new(Vec::new(), VenueFees::default(), DEFAULT_NETWORK_FEE)
    }

    /// Add or replace a venue
    pub fn with_venue(mut self, exchange: impl Into<String>, fees: VenueFees) -> Self {
        self.venues.insert(exchange.into(), fees);
        self
    }

    /// Replace the fallback schedule for unknown venues
    pub fn with_default(mut self, fees: VenueFees) -> Self {
        self.default = fees;
        self
    }

    /// Replace the network fee
    pub fn with_network_fee(mut self, network_fee: Decimal) -> Self {
        self.network_fee = network_fee;
        self
    }

    /// Whether the venue has its own schedule
    pub fn is_known(&self, exchange: &str) -> bool {
        self.venues.contains_key(exchange)
    }

    /// Schedule for a venue, falling back to the default
    pub fn venue(&self, exchange: &str) -> &VenueFees {
        match self.venues.get(exchange) {
            Some(fees) => fees,
            None => {
                tracing::debug!(exchange, "Unknown venue, using default fee schedule");
                &self.default
            }
        }
    }

    /// Trading fee rates for a venue
    pub fn trading_fee(&self, exchange: &str) -> TradingFee {
        self.venue(exchange).trading
    }

    /// Withdrawal fee for a venue and currency kind
    pub fn withdrawal_fee(&self, exchange: &str, kind: CurrencyKind) -> Decimal {
        self.venue(exchange).withdrawal.get(kind)
    }

    /// Withdrawal fee looked up by currency code ("jpy", "btc", "fiat", "crypto")
    ///
    /// Unknown codes cost nothing.
    pub fn withdrawal_fee_by_code(&self, exchange: &str, code: &str) -> Decimal {
        match code.parse::<CurrencyKind>() {
            Ok(kind) => self.withdrawal_fee(exchange, kind),
            Err(e) => {
                tracing::debug!(exchange, error = %e, "No withdrawal fee for currency");
                Decimal::ZERO
            }
        }
    }

    /// Network fee as a fraction of transferred value
    pub fn network_fee(&self) -> Decimal {
        self.network_fee
    }

    /// Fallback schedule for unknown venues
    pub fn default_fees(&self) -> &VenueFees {
        &self.default
    }

    /// Venues with their own schedule, in name order
    pub fn venues(&self) -> impl Iterator<Item = (&str, &VenueFees)> {
        self.venues.iter().map(|(name, fees)| (name.as_str(), fees))
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self::builtin()
    }
}
