//! Exchange order type token to FIX OrdType and the margin flag.
//!
//! Margin trading is a type-name variant (`MARGIN LIMIT`) rather than a flag. Rewriting
//! the first `MARGIN` to `EXCHANGE` lets one table classify both variants.

use crate::fix::OrdType;
use crate::types::{
    EXCHANGE_MARKER, MARGIN_MARKER, TYPE_EXCHANGE_FOK, TYPE_EXCHANGE_LIMIT, TYPE_EXCHANGE_MARKET,
    TYPE_EXCHANGE_STOP, TYPE_EXCHANGE_TRAILING_STOP, TYPE_FOK, TYPE_LIMIT, TYPE_MARKET, TYPE_STOP,
    TYPE_STOP_LIMIT, TYPE_TRAILING_STOP,
};
use log::debug;

/// Returns the FIX order type and whether the token names a margin order.
///
/// Fill-or-kill maps to LIMIT; FIX carries FOK as a time-in-force. Unknown tokens map to
/// MARKET.
pub fn ord_type_to_fix(order_type: &str) -> (OrdType, bool) {
    let is_margin = order_type.contains(MARGIN_MARKER);
    let normalized = order_type.replacen(MARGIN_MARKER, EXCHANGE_MARKER, 1);
    let ord_type = match normalized.as_str() {
        TYPE_EXCHANGE_LIMIT | TYPE_LIMIT => OrdType::Limit,
        TYPE_EXCHANGE_MARKET | TYPE_MARKET => OrdType::Market,
        TYPE_STOP | TYPE_TRAILING_STOP | TYPE_EXCHANGE_TRAILING_STOP | TYPE_EXCHANGE_STOP => {
            OrdType::Stop
        }
        TYPE_STOP_LIMIT => OrdType::StopLimit,
        TYPE_FOK | TYPE_EXCHANGE_FOK => OrdType::Limit,
        _ => {
            debug!("unrecognized order type order_type={:?}, defaulting to market", order_type);
            OrdType::Market
        }
    };
    (ord_type, is_margin)
}

/// True for both trailing stop tokens.
pub(crate) fn is_trailing_stop(order_type: &str) -> bool {
    matches!(order_type, TYPE_TRAILING_STOP | TYPE_EXCHANGE_TRAILING_STOP)
}

/// True for both fill-or-kill tokens.
pub(crate) fn is_fill_or_kill(order_type: &str) -> bool {
    matches!(order_type, TYPE_FOK | TYPE_EXCHANGE_FOK)
}
