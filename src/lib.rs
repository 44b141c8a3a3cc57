//! arbscan: Fee-adjusted BTC/JPY arbitrage scanner for Japanese exchanges
//!
//! This library provides the core components for:
//! - Per-venue trading and withdrawal fee schedules
//! - Trade leg and round trip cost calculation
//! - Minimum profitable spread advice
//! - Pairwise opportunity detection and ranking over price snapshots
//! - Snapshot sources and a polling scanner
//! - Logging and metrics

pub mod arbitrage;
pub mod cli;
pub mod config;
pub mod feed;
pub mod fees;
pub mod profit;
pub mod scanner;
pub mod telemetry;
