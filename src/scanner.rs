//! Polling scanner
//!
//! Fetches a snapshot from a price source on a fixed interval, runs
//! detection on it and hands each cycle's report to the caller.

use crate::arbitrage::{format_opportunity_message, ArbitrageDetector, ArbitrageOpportunity};
use crate::feed::{japan_time, PriceSource};
use crate::telemetry::{record_latency, set_gauge, GaugeMetric, LatencyMetric};
use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use std::future::Future;
use std::time::{Duration, Instant};

/// Result of one fetch + detect cycle
#[derive(Debug, Clone)]
pub struct CycleReport {
    /// Quotes in the fetched snapshot, valid or not
    pub quotes: usize,
    /// Ranked opportunities
    pub opportunities: Vec<ArbitrageOpportunity>,
    pub completed_at: DateTime<Utc>,
}

impl CycleReport {
    /// Opportunities that remain profitable after fees
    pub fn profitable(&self) -> impl Iterator<Item = &ArbitrageOpportunity> {
        self.opportunities
            .iter()
            .filter(|o| o.is_profitable_after_fees)
    }

    /// Highest ranked opportunity
    pub fn best(&self) -> Option<&ArbitrageOpportunity> {
        self.opportunities.first()
    }
}

/// Periodic arbitrage scanner over a price source
pub struct Scanner<S> {
    source: S,
    detector: ArbitrageDetector,
    interval: Duration,
}

impl<S: PriceSource> Scanner<S> {
    /// Create a scanner
    pub fn new(source: S, detector: ArbitrageDetector, interval: Duration) -> Self {
        Self {
            source,
            detector,
            interval,
        }
    }

    /// Detector in use
    pub fn detector(&self) -> &ArbitrageDetector {
        &self.detector
    }

    /// Run a single cycle
    pub async fn scan_once(&self) -> anyhow::Result<CycleReport> {
        let fetch_start = Instant::now();
        let snapshot = self.source.fetch_snapshot().await?;
        record_latency(LatencyMetric::SnapshotFetch, fetch_start.elapsed());

        let detect_start = Instant::now();
        let opportunities = self.detector.detect(&snapshot);
        record_latency(LatencyMetric::Detection, detect_start.elapsed());

        let report = CycleReport {
            quotes: snapshot.len(),
            opportunities,
            completed_at: Utc::now(),
        };

        set_gauge(GaugeMetric::QuotesReceived, report.quotes as f64);
        set_gauge(GaugeMetric::Opportunities, report.opportunities.len() as f64);
        set_gauge(
            GaugeMetric::ProfitableOpportunities,
            report.profitable().count() as f64,
        );
        if let Some(pct) = report
            .best()
            .and_then(|best| best.net_profit_percentage.to_f64())
        {
            set_gauge(GaugeMetric::BestNetProfitPct, pct);
        }

        Ok(report)
    }

    /// Poll until `shutdown` resolves, returning the number of cycles run
    ///
    /// A failed cycle is logged and the loop carries on with the next tick.
    pub async fn run<F, Fut>(&self, shutdown: Fut, mut on_cycle: F) -> anyhow::Result<u64>
    where
        F: FnMut(&CycleReport),
        Fut: Future<Output = ()>,
    {
        let mut interval = tokio::time::interval(self.interval);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        tokio::pin!(shutdown);

        tracing::info!(interval_ms = self.interval.as_millis() as u64, "Scanner started");

        let mut cycles = 0u64;
        loop {
            tokio::select! {
                biased;

                _ = &mut shutdown => {
                    tracing::info!("Received shutdown signal");
                    break;
                }

                _ = interval.tick() => {
                    cycles += 1;
                    match self.scan_once().await {
                        Ok(report) => {
                            log_cycle(cycles, &report);
                            on_cycle(&report);
                        }
                        Err(e) => {
                            tracing::warn!(cycle = cycles, error = %e, "Scan cycle failed");
                        }
                    }
                }
            }
        }

        tracing::info!(cycles, "Scanner stopped");
        Ok(cycles)
    }
}

fn log_cycle(cycle: u64, report: &CycleReport) {
    tracing::info!(
        cycle,
        time = %japan_time(report.completed_at),
        quotes = report.quotes,
        opportunities = report.opportunities.len(),
        profitable = report.profitable().count(),
        "Scan cycle complete"
    );
    for opportunity in report.profitable() {
        tracing::info!("{}", format_opportunity_message(opportunity));
    }
}
