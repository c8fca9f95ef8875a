//! Float quantities and prices to fixed-precision decimal field values.

use crate::error::ConvertError;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal FIX fields and the number of fractional digits each is rendered with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecimalField {
    LeavesQty,
    LastShares,
    CumQty,
    AvgPx,
    Price,
    StopPx,
    LastPx,
    MdEntryPx,
    MdEntrySize,
}

impl DecimalField {
    pub fn scale(self) -> u32 {
        match self {
            DecimalField::LeavesQty | DecimalField::LastShares | DecimalField::MdEntrySize => 4,
            DecimalField::CumQty
            | DecimalField::AvgPx
            | DecimalField::Price
            | DecimalField::StopPx
            | DecimalField::LastPx
            | DecimalField::MdEntryPx => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DecimalField::LeavesQty => "LeavesQty",
            DecimalField::LastShares => "LastShares",
            DecimalField::CumQty => "CumQty",
            DecimalField::AvgPx => "AvgPx",
            DecimalField::Price => "Price",
            DecimalField::StopPx => "StopPx",
            DecimalField::LastPx => "LastPx",
            DecimalField::MdEntryPx => "MDEntryPx",
            DecimalField::MdEntrySize => "MDEntrySize",
        }
    }
}

/// Converts `value` to a decimal with exactly `field.scale()` fractional digits.
///
/// The float is taken at its shortest decimal representation, then rounded half away
/// from zero. Fails with [`ConvertError::InvalidNumber`] for NaN or infinities, and for
/// values too large to carry the field's scale.
pub fn to_fix_decimal(value: f64, field: DecimalField) -> Result<Decimal, ConvertError> {
    let d = Decimal::from_f64(value).ok_or(ConvertError::InvalidNumber {
        field: field.name(),
        value,
    })?;
    let scale = field.scale();
    let mut fixed = d.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    // `rescale` silently keeps fewer digits when the mantissa would overflow 96 bits.
    fixed.rescale(scale);
    if fixed.scale() != scale {
        return Err(ConvertError::InvalidNumber {
            field: field.name(),
            value,
        });
    }
    Ok(fixed)
}

pub fn leaves_qty_to_fix(amount: f64) -> Result<Decimal, ConvertError> {
    to_fix_decimal(amount, DecimalField::LeavesQty)
}

pub fn last_shares_to_fix(qty: f64) -> Result<Decimal, ConvertError> {
    to_fix_decimal(qty, DecimalField::LastShares)
}

pub fn cum_qty_to_fix(cum_qty: f64) -> Result<Decimal, ConvertError> {
    to_fix_decimal(cum_qty, DecimalField::CumQty)
}

pub fn avg_px_to_fix(price_avg: f64) -> Result<Decimal, ConvertError> {
    to_fix_decimal(price_avg, DecimalField::AvgPx)
}
