//! Arbitrage detection module
//!
//! Scans every ordered venue pair of a snapshot for a fee-adjusted
//! buy-low / sell-high round trip and ranks the results.

mod detector;
mod format;
mod types;

pub use detector::{detect_arbitrage_opportunities, ArbitrageDetector, DetectorConfig};
pub use format::{format_jpy, format_opportunity_message, format_percentage};
pub use types::ArbitrageOpportunity;
