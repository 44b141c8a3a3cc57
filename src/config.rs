//! Configuration types for arbscan

use crate::fees::{builtin_venues, FeeSchedule, VenueFees, DEFAULT_NETWORK_FEE};
use crate::telemetry::LogFormat;
use anyhow::Context;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Root configuration structure
///
/// Every section is optional; missing keys take their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub detector: DetectionConfig,
    #[serde(default)]
    pub fees: FeeConfig,
    #[serde(default)]
    pub watch: WatchConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Arbitrage detection policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Trade size in BTC each venue pair is evaluated at
    #[serde(default = "default_trade_amount")]
    pub trade_amount: Decimal,

    /// Minimum sell − buy price difference in JPY
    #[serde(default)]
    pub min_price_difference: Decimal,

    /// Only report pairs with positive net profit
    #[serde(default)]
    pub require_profitable: bool,

    /// Only report pairs at or above this net profit percentage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_net_profit_percentage: Option<Decimal>,

    /// Reject quotes priced above this (e.g. 100000000)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<Decimal>,
}

fn default_trade_amount() -> Decimal {
    Decimal::ONE
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            trade_amount: default_trade_amount(),
            min_price_difference: Decimal::ZERO,
            require_profitable: false,
            min_net_profit_percentage: None,
            max_price: None,
        }
    }
}

/// Fee schedule configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeConfig {
    /// Start from the built-in venue table
    #[serde(default = "default_true")]
    pub include_builtin: bool,

    /// Blockchain network fee rate applied to transfers
    #[serde(default = "default_network_fee")]
    pub network_fee: Decimal,

    /// Schedule for venues not listed anywhere
    #[serde(default)]
    pub default: VenueFees,

    /// Per-venue schedules; these replace built-in entries of the same name
    #[serde(default)]
    pub venues: BTreeMap<String, VenueFees>,
}

fn default_true() -> bool {
    true
}
fn default_network_fee() -> Decimal {
    DEFAULT_NETWORK_FEE
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self {
            include_builtin: true,
            network_fee: DEFAULT_NETWORK_FEE,
            default: VenueFees::default(),
            venues: BTreeMap::new(),
        }
    }
}

impl FeeConfig {
    /// Build the immutable fee schedule this config describes
    pub fn to_schedule(&self) -> FeeSchedule {
        let builtin = if self.include_builtin {
            builtin_venues()
        } else {
            Vec::new()
        };
        let overrides = self
            .venues
            .iter()
            .map(|(name, fees)| (name.clone(), *fees));

        FeeSchedule::new(
            builtin.into_iter().chain(overrides),
            self.default,
            self.network_fee,
        )
    }
}

/// Polling loop configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Snapshot file read on every cycle
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: PathBuf,

    /// Seconds between cycles
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from("snapshot.json")
}
fn default_interval_secs() -> u64 {
    5
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
            interval_secs: default_interval_secs(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
    /// Serve Prometheus metrics on this port when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics_port: Option<u16>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            metrics_port: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the scanner cannot run with
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.detector.trade_amount <= Decimal::ZERO {
            anyhow::bail!("detector.trade_amount must be positive");
        }
        if self.detector.min_price_difference < Decimal::ZERO {
            anyhow::bail!("detector.min_price_difference must not be negative");
        }
        if matches!(self.detector.max_price, Some(max) if max <= Decimal::ZERO) {
            anyhow::bail!("detector.max_price must be positive");
        }
        if self.fees.network_fee < Decimal::ZERO {
            anyhow::bail!("fees.network_fee must not be negative");
        }
        if self.watch.interval_secs == 0 {
            anyhow::bail!("watch.interval_secs must be at least 1");
        }
        Ok(())
    }
}
