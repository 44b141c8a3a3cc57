//! End-to-end integration tests

use arbscan::arbitrage::{format_opportunity_message, ArbitrageDetector, DetectorConfig};
use arbscan::config::Config;
use arbscan::feed::FileSnapshotSource;
use arbscan::scanner::Scanner;
use rust_decimal_macros::dec;
use std::io::Write;
use std::time::Duration;

const SNAPSHOT: &str = r#"[
    {"exchange": "bitFlyer",  "price": 5000000, "bid": 4999000, "ask": 5001000, "timestamp": "2024-03-01T10:00:00Z"},
    {"exchange": "Coincheck", "price": 5100000, "bid": 5099000, "ask": 5101000, "timestamp": "2024-03-01T10:00:01Z"},
    {"exchange": "Zaif",      "price": 5001000, "bid": 5000000, "ask": 5002000, "timestamp": "2024-03-01T10:00:02Z"}
]"#;

fn write_temp(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_config_example_loads() {
    let config = Config::load(concat!(env!("CARGO_MANIFEST_DIR"), "/config.toml.example")).unwrap();
    assert_eq!(config.detector.trade_amount, dec!(1));
    assert_eq!(config.detector.max_price, Some(dec!(100000000)));
    assert_eq!(config.fees.to_schedule().network_fee(), dec!(0.0001));
}

#[tokio::test]
async fn test_scan_from_config_and_snapshot_files() {
    let config_file = write_temp(
        r#"
        [detector]
        require_profitable = true

        [fees.venues.Zaif]
        trading = { maker = 0, taker = 0.01 }
        withdrawal = { fiat = 385, crypto = 0.0001 }
        "#,
    );
    let snapshot_file = write_temp(SNAPSHOT);

    let config = Config::load(config_file.path()).unwrap();
    let detector = ArbitrageDetector::with_config(
        config.fees.to_schedule(),
        DetectorConfig::from(&config.detector),
    )
    .unwrap();
    let scanner = Scanner::new(
        FileSnapshotSource::new(snapshot_file.path()),
        detector,
        Duration::from_secs(1),
    );

    let report = scanner.scan_once().await.unwrap();
    assert_eq!(report.quotes, 3);
    assert!(report.opportunities.iter().all(|o| o.is_profitable_after_fees));

    // The 1% Zaif taker fee now makes bitFlyer the better buy venue
    let best = report.best().unwrap();
    assert_eq!(
        format_opportunity_message(best),
        "bitFlyer → Coincheck | buy ￥5,000,000 sell ￥5,100,000 | spread ￥100,000 (2.00%) | net ￥89,593 (1.79%) | profitable"
    );
    assert_eq!(best.timestamp.to_rfc3339(), "2024-03-01T10:00:01+00:00");
}

#[tokio::test]
async fn test_scanner_picks_up_file_changes() {
    let snapshot_file = write_temp("[]");
    let scanner = Scanner::new(
        FileSnapshotSource::new(snapshot_file.path()),
        ArbitrageDetector::default(),
        Duration::from_secs(1),
    );

    let report = scanner.scan_once().await.unwrap();
    assert!(report.opportunities.is_empty());

    std::fs::write(snapshot_file.path(), SNAPSHOT).unwrap();
    let report = scanner.scan_once().await.unwrap();
    assert_eq!(report.opportunities.len(), 3);
}

#[tokio::test]
async fn test_opportunities_serialize_to_json() {
    let snapshot_file = write_temp(SNAPSHOT);
    let scanner = Scanner::new(
        FileSnapshotSource::new(snapshot_file.path()),
        ArbitrageDetector::default(),
        Duration::from_secs(1),
    );
    let report = scanner.scan_once().await.unwrap();

    let json: serde_json::Value = serde_json::to_value(&report.opportunities).unwrap();
    let first = &json[0];
    assert_eq!(first["exchange_from"], "Zaif");
    assert_eq!(first["exchange_to"], "Coincheck");
    assert_eq!(first["is_profitable_after_fees"], true);
}
