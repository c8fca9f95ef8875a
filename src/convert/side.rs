//! Signed amount to FIX Side.

use crate::fix::Side;

/// Positive is a buy, negative a sell. Exactly zero (either sign) is undisclosed; callers
/// that need a definite side must not pass rounding noise.
pub fn side_to_fix(amount: f64) -> Side {
    if amount > 0.0 {
        Side::Buy
    } else if amount < 0.0 {
        Side::Sell
    } else {
        Side::Undisclosed
    }
}
