//! Fee model
//!
//! Static per-venue trading and withdrawal fees, with a default schedule
//! for venues that are not in the table.

mod table;
mod types;

pub use table::{builtin_venues, DEFAULT_NETWORK_FEE, KNOWN_VENUES};
pub use types::{CurrencyKind, FeeSchedule, TradingFee, UnknownCurrency, VenueFees, WithdrawalFee};
