//! Scanner metrics
//!
//! Recorded through the `metrics` facade; a no-op unless an exporter is
//! installed.

use std::time::Duration;

/// Latency metric types
#[derive(Debug, Clone, Copy)]
pub enum LatencyMetric {
    /// Reading and parsing a snapshot
    SnapshotFetch,
    /// Pairing and pricing one snapshot
    Detection,
}

/// Gauge metric types
#[derive(Debug, Clone, Copy)]
pub enum GaugeMetric {
    /// Quotes in the last snapshot
    QuotesReceived,
    /// Opportunities reported in the last cycle
    Opportunities,
    /// Opportunities profitable after fees in the last cycle
    ProfitableOpportunities,
    /// Best net profit percentage in the last cycle
    BestNetProfitPct,
}

impl LatencyMetric {
    /// Metric name
    pub fn name(self) -> &'static str {
        match self {
            LatencyMetric::SnapshotFetch => "arbscan_snapshot_fetch_latency_ms",
            LatencyMetric::Detection => "arbscan_detection_latency_ms",
        }
    }
}

impl GaugeMetric {
    /// Metric name
    pub fn name(self) -> &'static str {
        match self {
            GaugeMetric::QuotesReceived => "arbscan_quotes_received",
            GaugeMetric::Opportunities => "arbscan_opportunities",
            GaugeMetric::ProfitableOpportunities => "arbscan_profitable_opportunities",
            GaugeMetric::BestNetProfitPct => "arbscan_best_net_profit_pct",
        }
    }
}

/// Record a latency measurement
pub fn record_latency(metric: LatencyMetric, duration: Duration) {
    let value_ms = duration.as_secs_f64() * 1000.0;
    metrics::histogram!(metric.name()).record(value_ms);
    tracing::debug!(metric = metric.name(), value_ms, "Recording latency");
}

/// Set a gauge value
pub fn set_gauge(metric: GaugeMetric, value: f64) {
    metrics::gauge!(metric.name()).set(value);
    tracing::debug!(metric = metric.name(), value = value, "Setting gauge");
}
