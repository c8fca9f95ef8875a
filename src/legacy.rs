//! Legacy order records to the normalized [`Order`] model.

use crate::error::ConvertError;
use crate::types::{
    LegacyOrder, Order, OrderFlags, STATUS_ACTIVE, STATUS_CANCELED, TYPE_EXCHANGE_LIMIT,
    TYPE_LIMIT, TYPE_MARKET, TYPE_STOP, TYPE_TRAILING_STOP,
};
use log::debug;

fn parse_number(field: &'static str, value: &str) -> Result<f64, ConvertError> {
    value.trim().parse::<f64>().map_err(|_| ConvertError::Parse {
        field,
        value: value.to_string(),
    })
}

fn legacy_type_token(legacy_type: &str) -> Option<&'static str> {
    match legacy_type {
        "market" => Some(TYPE_MARKET),
        "limit" => Some(TYPE_LIMIT),
        "exchange limit" => Some(TYPE_EXCHANGE_LIMIT),
        "stop" => Some(TYPE_STOP),
        "trailing-stop" => Some(TYPE_TRAILING_STOP),
        _ => None,
    }
}

/// Normalizes a legacy record.
///
/// Fails on the first numeric field that does not parse, naming it; nothing is returned
/// for a partially converted record. Unrecognized legacy types leave `order_type` empty.
pub fn order_from_legacy(o: &LegacyOrder) -> Result<Order, ConvertError> {
    let ts = parse_number("timestamp", &o.timestamp)?;
    let price = parse_number("price", &o.price)?;
    let price_avg = parse_number("avg_execution_price", &o.avg_execution_price)?;
    let amount_orig = parse_number("original_amount", &o.original_amount)?;
    let remaining = parse_number("remaining_amount", &o.remaining_amount)?;

    let status = if o.is_canceled {
        STATUS_CANCELED
    } else if o.is_live {
        STATUS_ACTIVE
    } else {
        ""
    };

    let sign = if o.side == "sell" { -1.0 } else { 1.0 };

    let order_type = match legacy_type_token(&o.order_type) {
        Some(t) => t.to_string(),
        None => {
            debug!("unrecognized legacy order type id={} type={:?}", o.id, o.order_type);
            String::new()
        }
    };

    let mts = ts as i64;
    Ok(Order {
        id: o.id,
        symbol: o.symbol.clone(),
        mts_created: mts,
        mts_updated: mts,
        amount: remaining * sign,
        amount_orig,
        order_type,
        flags: if o.is_hidden {
            OrderFlags::HIDDEN
        } else {
            OrderFlags::default()
        },
        status: status.to_string(),
        price,
        price_avg,
        hidden: o.is_hidden,
        ..Order::default()
    })
}
