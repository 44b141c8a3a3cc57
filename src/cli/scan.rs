//! Scan command implementation

use super::print_opportunities;
use crate::arbitrage::{ArbitrageDetector, DetectorConfig};
use crate::config::Config;
use crate::feed::{FileSnapshotSource, PriceSource};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// JSON snapshot file of venue quotes
    #[arg(short, long)]
    pub snapshot: PathBuf,

    /// Only show opportunities profitable after fees
    #[arg(long)]
    pub profitable_only: bool,

    /// Print opportunities as JSON
    #[arg(long)]
    pub json: bool,
}

impl ScanArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let mut detector_config = DetectorConfig::from(&config.detector);
        detector_config.require_profitable |= self.profitable_only;
        let detector = ArbitrageDetector::with_config(config.fees.to_schedule(), detector_config)?;

        let snapshot = FileSnapshotSource::new(&self.snapshot)
            .fetch_snapshot()
            .await?;
        tracing::info!(
            path = %self.snapshot.display(),
            quotes = snapshot.len(),
            "Scanning snapshot"
        );

        let opportunities = detector.detect(&snapshot);
        print_opportunities(&opportunities, self.json)
    }
}
