//! Exchange millisecond epochs to UTC timestamps.

use chrono::{DateTime, Utc};
use log::warn;

/// Converts a millisecond epoch to a UTC timestamp.
///
/// Non-positive input means "not set" and returns `None`; this is also how "no expiration"
/// is told apart from an expiration at the epoch. Epochs past the calendar range are
/// reported as unset too.
pub fn mts_to_time(mts: i64) -> Option<DateTime<Utc>> {
    if mts <= 0 {
        return None;
    }
    let t = DateTime::from_timestamp_millis(mts);
    if t.is_none() {
        warn!("timestamp out of range mts={}", mts);
    }
    t
}
