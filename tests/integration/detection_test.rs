//! Detection over realistic multi-venue snapshots

use arbscan::arbitrage::{detect_arbitrage_opportunities, ArbitrageDetector, DetectorConfig};
use arbscan::feed::{parse_snapshot, PriceSnapshot};
use arbscan::fees::{FeeSchedule, KNOWN_VENUES};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const MARKET: &str = r#"{"prices": [
    {"exchange": "bitFlyer",  "price": 5012000, "bid": 5011000, "ask": 5013000, "timestamp": "2024-03-01T19:00:00"},
    {"exchange": "Coincheck", "price": 4998000, "bid": 4997000, "ask": 4999000, "timestamp": "2024-03-01T19:00:00"},
    {"exchange": "Zaif",      "price": 5031000, "bid": 5030000, "ask": 5032000, "timestamp": "2024-03-01T19:00:01"},
    {"exchange": "GMOコイン", "price": 5005000, "bid": 5004000, "ask": 5006000, "timestamp": "2024-03-01T19:00:01"},
    {"exchange": "bitbank",   "price": 5020000, "bid": 5019000, "ask": 5021000, "timestamp": "2024-03-01T19:00:02"},
    {"exchange": "BITPoint",  "price": 4985000, "bid": 4984000, "ask": 4986000, "timestamp": "2024-03-01T19:00:02"}
]}"#;

fn market() -> PriceSnapshot {
    parse_snapshot(MARKET).unwrap()
}

#[test]
fn test_market_snapshot_covers_builtin_venues() {
    let snapshot = market();
    let fees = FeeSchedule::builtin();
    assert_eq!(snapshot.len(), KNOWN_VENUES.len());
    assert!(snapshot.quotes().iter().all(|q| fees.is_known(&q.exchange)));
}

#[test]
fn test_every_opportunity_is_consistent() {
    let opportunities = ArbitrageDetector::default().detect(&market());
    assert_eq!(opportunities.len(), 15);

    for o in &opportunities {
        assert!(o.price_difference > Decimal::ZERO);
        assert_eq!(o.price_difference, o.price_to - o.price_from);
        assert_eq!(o.gross_profit, o.amount * o.price_difference);
        assert_eq!(o.net_profit, o.gross_profit - o.total_fees);
        assert_eq!(o.total_fees, o.costs.total);
        assert_eq!(o.is_profitable_after_fees, o.net_profit > Decimal::ZERO);
        assert!(o.total_fees >= Decimal::ZERO);
    }
}

#[test]
fn test_ranking_is_total_and_stable() {
    let detector = ArbitrageDetector::default();
    let first = detector.detect(&market());
    let second = detector.detect(&market());
    assert_eq!(first, second);

    for pair in first.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.net_profit_percentage > b.net_profit_percentage
                || (a.net_profit_percentage == b.net_profit_percentage
                    && (&a.exchange_from, &a.exchange_to) <= (&b.exchange_from, &b.exchange_to))
        );
    }
}

#[test]
fn test_best_opportunity_in_market() {
    let opportunities = ArbitrageDetector::default().detect(&market());
    let best = &opportunities[0];

    // Cheapest venue into the most expensive one
    assert_eq!(best.exchange_from, "BITPoint");
    assert_eq!(best.exchange_to, "Zaif");
    assert_eq!(best.price_difference, dec!(46000));
    assert!(best.is_profitable_after_fees);
}

#[test]
fn test_profitable_filter_is_subset() {
    let all = ArbitrageDetector::default().detect(&market());
    let config = DetectorConfig {
        require_profitable: true,
        ..Default::default()
    };
    let profitable = detect_arbitrage_opportunities(&FeeSchedule::builtin(), &config, &market());

    let expected: Vec<_> = all
        .into_iter()
        .filter(|o| o.is_profitable_after_fees)
        .collect();
    assert_eq!(profitable, expected);
}

#[test]
fn test_reversed_prices_reverse_direction() {
    let json = r#"[
        {"exchange": "bitFlyer",  "price": 5100000, "bid": 5099000, "ask": 5101000, "timestamp": "2024-03-01T10:00:00Z"},
        {"exchange": "Coincheck", "price": 5000000, "bid": 4999000, "ask": 5001000, "timestamp": "2024-03-01T10:00:00Z"}
    ]"#;
    let opportunities = ArbitrageDetector::default().detect(&parse_snapshot(json).unwrap());

    assert_eq!(opportunities.len(), 1);
    assert_eq!(opportunities[0].exchange_from, "Coincheck");
    assert_eq!(opportunities[0].exchange_to, "bitFlyer");
}

#[test]
fn test_bad_feed_entries_do_not_break_the_cycle() {
    let json = r#"[
        {"exchange": "bitFlyer",  "price": 5000000, "bid": 4999000, "ask": 5001000, "timestamp": "2024-03-01T10:00:00Z"},
        {"exchange": "",          "price": 4000000, "bid": 3999000, "ask": 4001000, "timestamp": "2024-03-01T10:00:00Z"},
        {"exchange": "Zaif",      "price": 0,       "bid": 0,       "ask": 0,       "timestamp": "2024-03-01T10:00:00Z"},
        {"exchange": "bitbank",   "price": 5200000, "bid": 5300000, "ask": 5201000, "timestamp": "2024-03-01T10:00:00Z"},
        {"exchange": "Coincheck", "price": 5100000, "bid": 5099000, "ask": 5101000, "timestamp": "bad"},
        {"exchange": "BITPoint",  "price": 5100000, "bid": 5099000, "ask": 5101000, "timestamp": "2024-03-01T10:00:00Z"}
    ]"#;
    let snapshot = parse_snapshot(json).unwrap();
    // The unparseable timestamp is dropped at the boundary
    assert_eq!(snapshot.len(), 5);

    let opportunities = ArbitrageDetector::default().detect(&snapshot);
    assert_eq!(opportunities.len(), 1);
    assert_eq!(opportunities[0].exchange_from, "bitFlyer");
    assert_eq!(opportunities[0].exchange_to, "BITPoint");
}
