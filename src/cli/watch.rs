//! Watch command implementation

use super::print_opportunities;
use crate::arbitrage::{ArbitrageDetector, DetectorConfig};
use crate::config::Config;
use crate::feed::FileSnapshotSource;
use crate::scanner::Scanner;
use clap::Args;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Snapshot file to poll (defaults to watch.snapshot_path)
    #[arg(short, long)]
    pub snapshot: Option<PathBuf>,

    /// Seconds between cycles (defaults to watch.interval_secs)
    #[arg(short, long)]
    pub interval: Option<u64>,

    /// Print each cycle's opportunities as a JSON line
    #[arg(long)]
    pub json: bool,
}

impl WatchArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let path = self
            .snapshot
            .clone()
            .unwrap_or_else(|| config.watch.snapshot_path.clone());
        let interval_secs = self.interval.unwrap_or(config.watch.interval_secs);
        if interval_secs == 0 {
            anyhow::bail!("interval must be at least 1 second");
        }

        let detector = ArbitrageDetector::with_config(
            config.fees.to_schedule(),
            DetectorConfig::from(&config.detector),
        )?;
        let scanner = Scanner::new(
            FileSnapshotSource::new(&path),
            detector,
            Duration::from_secs(interval_secs),
        );

        tracing::info!(path = %path.display(), interval_secs, "Watching snapshot");

        let json = self.json;
        scanner
            .run(
                async {
                    let _ = tokio::signal::ctrl_c().await;
                },
                |report| {
                    if let Err(e) = print_opportunities(&report.opportunities, json) {
                        tracing::warn!(error = %e, "Failed to print cycle");
                    }
                },
            )
            .await?;

        Ok(())
    }
}
