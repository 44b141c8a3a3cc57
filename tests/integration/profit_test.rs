//! Cost calculation and spread advice across the fee table

use arbscan::fees::{CurrencyKind, FeeSchedule, KNOWN_VENUES};
use arbscan::profit::{
    calculate_arbitrage_costs, calculate_trading_costs, minimum_profitable_spread,
    percentage_difference, CostError, FeeTier, Side, BREAK_EVEN_MARGIN,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_break_even_at_min_spread() {
    let fees = FeeSchedule::builtin();

    // Selling at reference + min_spread nets zero when the sell venue has no taker fee
    let r = minimum_profitable_spread(&fees, "bitFlyer", "Coincheck", dec!(1)).unwrap();
    let costs = calculate_arbitrage_costs(
        &fees,
        "bitFlyer",
        "Coincheck",
        dec!(1),
        r.reference_price,
        r.reference_price + r.min_spread,
    )
    .unwrap();
    assert_eq!(costs.net_profit, Decimal::ZERO);
}

#[test]
fn test_spread_requirements_for_all_venue_pairs() {
    let fees = FeeSchedule::builtin();

    for buy in KNOWN_VENUES {
        for sell in KNOWN_VENUES {
            if buy == sell {
                continue;
            }
            let r = minimum_profitable_spread(&fees, buy, sell, dec!(1)).unwrap();
            assert!(r.min_spread >= Decimal::ZERO, "{buy} → {sell}");
            assert_eq!(r.break_even_spread, r.min_spread * BREAK_EVEN_MARGIN);
            assert_eq!(r.min_spread * r.amount, r.total_costs);
        }
    }
}

#[test]
fn test_fixed_fee_amortizes_with_amount() {
    let fees = FeeSchedule::builtin();
    let small = minimum_profitable_spread(&fees, "bitbank", "bitFlyer", dec!(0.1)).unwrap();
    let large = minimum_profitable_spread(&fees, "bitbank", "bitFlyer", dec!(10)).unwrap();
    assert!(large.min_spread < small.min_spread);
}

#[test]
fn test_rebate_rate_is_charged() {
    let fees = FeeSchedule::builtin();
    let leg = calculate_trading_costs(
        &fees,
        "bitbank",
        dec!(1),
        dec!(5000000),
        Side::Buy,
        FeeTier::Maker,
    )
    .unwrap();
    assert_eq!(leg.fee_rate, dec!(-0.0002));
    assert_eq!(leg.trading_fee, dec!(1000));
    assert_eq!(leg.net_value, dec!(5001000));
}

#[test]
fn test_invalid_arguments() {
    let fees = FeeSchedule::builtin();
    assert!(matches!(
        calculate_arbitrage_costs(&fees, "bitFlyer", "Zaif", dec!(-1), dec!(1), dec!(2)),
        Err(CostError::InvalidArgument(_))
    ));
    assert!(matches!(
        minimum_profitable_spread(&fees, "bitFlyer", "Zaif", Decimal::ZERO),
        Err(CostError::InvalidArgument(_))
    ));
    assert!("market".parse::<FeeTier>().is_err());
}

#[test]
fn test_currency_codes() {
    let fees = FeeSchedule::builtin();
    assert_eq!(fees.withdrawal_fee_by_code("Zaif", "JPY"), dec!(385));
    assert_eq!(fees.withdrawal_fee_by_code("Zaif", "btc"), dec!(0.0001));
    assert_eq!(fees.withdrawal_fee_by_code("Zaif", "eth"), Decimal::ZERO);
    assert_eq!("fiat".parse::<CurrencyKind>().unwrap(), CurrencyKind::Fiat);
}

#[test]
fn test_percentage_difference_properties() {
    let values = [dec!(1), dec!(99.5), dec!(5000000), dec!(5100000), dec!(-250)];
    for a in values {
        for b in values {
            let ab = percentage_difference(a, b).unwrap();
            let ba = percentage_difference(b, a).unwrap();
            assert_eq!(ab.abs(), ba.abs(), "{a} vs {b}");
        }
        assert_eq!(percentage_difference(a, a).unwrap(), Decimal::ZERO);
        assert_eq!(percentage_difference(a, Decimal::ZERO).unwrap(), Decimal::ZERO);
    }
}
