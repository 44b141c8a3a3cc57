//! Price source module
//!
//! Boundary where quote snapshots enter the scanner. Raw feed data is
//! converted into validated-on-demand `PriceQuote`s here.

mod file;
mod time;
mod types;

pub use file::{parse_snapshot, FileSnapshotSource};
pub use time::{japan_time, parse_timestamp};
pub use types::{PriceQuote, PriceSnapshot, QuoteError, RawQuote, MAX_EXCHANGE_NAME_LEN};

use async_trait::async_trait;

/// Trait for snapshot providers polled once per cycle
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch the most recent snapshot of quotes across venues
    async fn fetch_snapshot(&self) -> anyhow::Result<PriceSnapshot>;
}
