//! Price quote types

use super::parse_timestamp;
use chrono::{DateTime, Utc};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Venue names at or above this length are rejected
pub const MAX_EXCHANGE_NAME_LEN: usize = 50;

/// Why a quote cannot take part in a detection cycle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    /// Empty, overlong, or control-character venue name
    #[error("Invalid exchange name: {0:?}")]
    InvalidExchange(String),
    /// Missing, NaN or infinite number in raw feed data
    #[error("{0} is missing or not finite")]
    NonFinite(&'static str),
    /// Finite number too large in magnitude for a decimal
    #[error("{0} is outside the representable range")]
    OutOfRange(&'static str),
    /// Zero or negative price field
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: Decimal },
    /// Best bid above the quoted price
    #[error("bid {bid} is above price {price}")]
    BidAbovePrice { bid: Decimal, price: Decimal },
    /// Best ask below the quoted price
    #[error("ask {ask} is below price {price}")]
    AskBelowPrice { ask: Decimal, price: Decimal },
    /// Price above the configured ceiling
    #[error("price {price} exceeds maximum {max}")]
    AboveMaximum { price: Decimal, max: Decimal },
    /// Timestamp that is neither RFC 3339 nor Japan time
    #[error("Unparseable timestamp: {0:?}")]
    InvalidTimestamp(String),
}

/// Quote from one venue at one instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Venue identifier (e.g., "bitFlyer")
    pub exchange: String,
    /// Last traded / reference price
    pub price: Decimal,
    /// Best bid
    pub bid: Decimal,
    /// Best ask
    pub ask: Decimal,
    /// When the venue reported the quote
    pub timestamp: DateTime<Utc>,
}

impl PriceQuote {
    /// Create a quote
    pub fn new(
        exchange: impl Into<String>,
        price: Decimal,
        bid: Decimal,
        ask: Decimal,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            exchange: exchange.into(),
            price,
            bid,
            ask,
            timestamp,
        }
    }

    /// Check the quote is usable for pairing
    pub fn validate(&self) -> Result<(), QuoteError> {
        let name = self.exchange.trim();
        if name.is_empty()
            || self.exchange.chars().count() >= MAX_EXCHANGE_NAME_LEN
            || self.exchange.chars().any(char::is_control)
        {
            return Err(QuoteError::InvalidExchange(self.exchange.clone()));
        }

        for (field, value) in [("price", self.price), ("bid", self.bid), ("ask", self.ask)] {
            if value <= Decimal::ZERO {
                return Err(QuoteError::NonPositive { field, value });
            }
        }

        if self.bid > self.price {
            return Err(QuoteError::BidAbovePrice {
                bid: self.bid,
                price: self.price,
            });
        }
        if self.ask < self.price {
            return Err(QuoteError::AskBelowPrice {
                ask: self.ask,
                price: self.price,
            });
        }

        Ok(())
    }

    /// Validate, additionally rejecting prices above `max_price`
    pub fn validate_with_max(&self, max_price: Option<Decimal>) -> Result<(), QuoteError> {
        self.validate()?;
        match max_price {
            Some(max) if self.price > max => Err(QuoteError::AboveMaximum {
                price: self.price,
                max,
            }),
            _ => Ok(()),
        }
    }
}

/// Quote as delivered by a feed: floating point numbers and a string time
///
/// JSON feeds serialize NaN and infinities as `null`, so a missing number
/// is read as `None` and rejected as non-finite on conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawQuote {
    pub exchange: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub bid: Option<f64>,
    #[serde(default)]
    pub ask: Option<f64>,
    pub timestamp: String,
}

fn finite_decimal(value: Option<f64>, field: &'static str) -> Result<Decimal, QuoteError> {
    let value = match value {
        Some(value) if value.is_finite() => value,
        _ => return Err(QuoteError::NonFinite(field)),
    };
    Decimal::from_f64(value).ok_or(QuoteError::OutOfRange(field))
}

impl TryFrom<RawQuote> for PriceQuote {
    type Error = QuoteError;

    /// Converts numbers and time; range checks are left to `validate`
    fn try_from(raw: RawQuote) -> Result<Self, Self::Error> {
        Ok(PriceQuote {
            price: finite_decimal(raw.price, "price")?,
            bid: finite_decimal(raw.bid, "bid")?,
            ask: finite_decimal(raw.ask, "ask")?,
            timestamp: parse_timestamp(&raw.timestamp)?,
            exchange: raw.exchange,
        })
    }
}

/// Roughly simultaneous quotes across venues, in arrival order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceSnapshot {
    quotes: Vec<PriceQuote>,
}

impl PriceSnapshot {
    /// Create a snapshot from quotes
    pub fn new(quotes: Vec<PriceQuote>) -> Self {
        Self { quotes }
    }

    /// All quotes, including invalid and duplicate ones
    pub fn quotes(&self) -> &[PriceQuote] {
        &self.quotes
    }

    /// Number of quotes
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Whether the snapshot has no quotes
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

impl From<Vec<PriceQuote>> for PriceSnapshot {
    fn from(quotes: Vec<PriceQuote>) -> Self {
        Self::new(quotes)
    }
}

impl FromIterator<PriceQuote> for PriceSnapshot {
    fn from_iter<I: IntoIterator<Item = PriceQuote>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
