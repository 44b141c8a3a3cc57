//! Timestamp helpers
//!
//! Venues report times either as RFC 3339 or as zone-less Japan time.

use super::QuoteError;
use chrono::{DateTime, Duration, NaiveDateTime, Utc};

const JAPAN_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const JST_OFFSET_HOURS: i64 = 9;

/// Render an instant as Japan Standard Time, `YYYY-MM-DDTHH:MM:SS`
///
/// Instants within nine hours of the end of chrono's range have no Japan
/// time and are rendered as RFC 3339 UTC instead.
pub fn japan_time(instant: DateTime<Utc>) -> String {
    match instant.checked_add_signed(Duration::hours(JST_OFFSET_HOURS)) {
        Some(local) => local.naive_utc().format(JAPAN_TIME_FORMAT).to_string(),
        None => instant.to_rfc3339(),
    }
}

/// Parse an RFC 3339 timestamp, or a zone-less one taken as Japan time
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, QuoteError> {
    let s = s.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Ok(ts.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(s, JAPAN_TIME_FORMAT)
        .ok()
        .and_then(|naive| naive.checked_sub_signed(Duration::hours(JST_OFFSET_HOURS)))
        .map(|utc| utc.and_utc())
        .ok_or_else(|| QuoteError::InvalidTimestamp(s.to_string()))
}
