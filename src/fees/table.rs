//! Built-in fee table for the supported Japanese venues

use super::VenueFees;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixed network fee, applied as a fraction of the transferred trade value
pub const DEFAULT_NETWORK_FEE: Decimal = dec!(0.0001);

/// Venues that ship with a fee schedule
pub const KNOWN_VENUES: [&str; 6] = [
    "bitFlyer",
    "Coincheck",
    "Zaif",
    "GMOコイン",
    "bitbank",
    "BITPoint",
];

/// Fee schedules for every entry of [`KNOWN_VENUES`]
pub fn builtin_venues() -> Vec<(String, VenueFees)> {
    vec![
        (
            "bitFlyer".to_string(),
            VenueFees::new(dec!(0.0001), dec!(0.0015), dec!(550), dec!(0.0004)),
        ),
        (
            "Coincheck".to_string(),
            VenueFees::new(dec!(0), dec!(0), dec!(407), dec!(0.0005)),
        ),
        (
            "Zaif".to_string(),
            VenueFees::new(dec!(0), dec!(0.001), dec!(385), dec!(0.0001)),
        ),
        (
            // Negative maker fee is a rebate
            "GMOコイン".to_string(),
            VenueFees::new(dec!(-0.0001), dec!(0.0005), dec!(0), dec!(0)),
        ),
        (
            "bitbank".to_string(),
            VenueFees::new(dec!(-0.0002), dec!(0.0012), dec!(550), dec!(0.0006)),
        ),
        (
            "BITPoint".to_string(),
            VenueFees::new(dec!(0), dec!(0), dec!(0), dec!(0)),
        ),
    ]
}
