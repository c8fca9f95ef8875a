//! Order type and expiration epoch to FIX TimeInForce and ExpireTime.

use super::order_type::is_fill_or_kill;
use super::timestamp::mts_to_time;
use crate::fix::TimeInForce;
use chrono::{DateTime, Utc};

/// An expiration always wins and yields GTD with its timestamp. Otherwise FOK tokens
/// yield FOK and everything else GTC. The timestamp is `Some` only for GTD.
pub fn time_in_force_to_fix(order_type: &str, mts_tif: i64) -> (TimeInForce, Option<DateTime<Utc>>) {
    if let Some(expire) = mts_to_time(mts_tif) {
        return (TimeInForce::GoodTillDate, Some(expire));
    }
    if is_fill_or_kill(order_type) {
        (TimeInForce::FillOrKill, None)
    } else {
        (TimeInForce::GoodTillCancel, None)
    }
}
