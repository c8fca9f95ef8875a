//! Decoding of untyped exchange payloads into typed models.
//!
//! The exchange sends orders, fills, and book levels as positional JSON arrays. Each
//! field is extracted once, here, with its type checked: a missing required field or a
//! field of the wrong JSON type fails the whole decode. `null` is accepted only for
//! optional fields.

use crate::error::DecodeError;
use crate::types::{BookUpdate, Order, OrderFlags, TradeExecution};
use serde_json::Value;

/// Positional view over one payload array.
struct Fields<'a> {
    values: &'a [Value],
}

impl<'a> Fields<'a> {
    fn new(payload: &'a Value) -> Result<Self, DecodeError> {
        match payload {
            Value::Array(values) => Ok(Self { values }),
            _ => Err(DecodeError::NotAnArray),
        }
    }

    /// `None` for an absent index or `null`.
    fn get(&self, idx: usize) -> Option<&'a Value> {
        self.values.get(idx).filter(|v| !v.is_null())
    }

    fn required(&self, idx: usize, field: &'static str) -> Result<&'a Value, DecodeError> {
        self.get(idx).ok_or(DecodeError::Missing { field })
    }

    fn i64(&self, idx: usize, field: &'static str) -> Result<i64, DecodeError> {
        as_i64(self.required(idx, field)?, field)
    }

    fn opt_i64(&self, idx: usize, field: &'static str) -> Result<Option<i64>, DecodeError> {
        self.get(idx).map(|v| as_i64(v, field)).transpose()
    }

    fn f64(&self, idx: usize, field: &'static str) -> Result<f64, DecodeError> {
        as_f64(self.required(idx, field)?, field)
    }

    fn opt_f64(&self, idx: usize, field: &'static str) -> Result<Option<f64>, DecodeError> {
        self.get(idx).map(|v| as_f64(v, field)).transpose()
    }

    fn string(&self, idx: usize, field: &'static str) -> Result<String, DecodeError> {
        as_string(self.required(idx, field)?, field)
    }

    fn opt_string(&self, idx: usize, field: &'static str) -> Result<Option<String>, DecodeError> {
        self.get(idx).map(|v| as_string(v, field)).transpose()
    }

    /// Absent is `false`. The exchange also sends `-1` for false.
    fn flag(&self, idx: usize, field: &'static str) -> Result<bool, DecodeError> {
        match self.get(idx) {
            None => Ok(false),
            Some(Value::Bool(b)) => Ok(*b),
            Some(v) => match v.as_i64() {
                Some(0) | Some(-1) => Ok(false),
                Some(1) => Ok(true),
                _ => Err(DecodeError::WrongType {
                    field,
                    expected: "boolean",
                }),
            },
        }
    }
}

fn as_i64(v: &Value, field: &'static str) -> Result<i64, DecodeError> {
    v.as_i64().ok_or(DecodeError::WrongType {
        field,
        expected: "integer",
    })
}

fn as_f64(v: &Value, field: &'static str) -> Result<f64, DecodeError> {
    v.as_f64().ok_or(DecodeError::WrongType {
        field,
        expected: "number",
    })
}

fn as_string(v: &Value, field: &'static str) -> Result<String, DecodeError> {
    v.as_str().map(str::to_string).ok_or(DecodeError::WrongType {
        field,
        expected: "string",
    })
}

/// Decodes an order array.
pub fn order_from_raw(payload: &Value) -> Result<Order, DecodeError> {
    let f = Fields::new(payload)?;
    Ok(Order {
        id: f.i64(0, "id")?,
        group_id: f.opt_i64(1, "gid")?,
        client_id: f.opt_i64(2, "cid")?.unwrap_or_default(),
        symbol: f.string(3, "symbol")?,
        mts_created: f.i64(4, "mts_create")?,
        mts_updated: f.i64(5, "mts_update")?,
        amount: f.f64(6, "amount")?,
        amount_orig: f.f64(7, "amount_orig")?,
        order_type: f.string(8, "type")?,
        order_type_prev: f.opt_string(9, "type_prev")?,
        mts_tif: f.opt_i64(10, "mts_tif")?.unwrap_or_default(),
        flags: OrderFlags(f.opt_i64(12, "flags")?.unwrap_or_default()),
        status: f.string(13, "status")?,
        price: f.f64(16, "price")?,
        price_avg: f.opt_f64(17, "price_avg")?.unwrap_or_default(),
        price_trailing: f.opt_f64(18, "price_trailing")?,
        price_aux_limit: f.opt_f64(19, "price_aux_limit")?,
        hidden: f.flag(24, "hidden")?,
        placed_id: f.opt_i64(25, "placed_id")?,
    })
}

/// Decodes a trade execution array.
pub fn trade_from_raw(payload: &Value) -> Result<TradeExecution, DecodeError> {
    let f = Fields::new(payload)?;
    Ok(TradeExecution {
        id: f.i64(0, "id")?,
        symbol: f.string(1, "symbol")?,
        mts: f.i64(2, "mts_create")?,
        order_id: f.i64(3, "order_id")?,
        exec_amount: f.f64(4, "exec_amount")?,
        exec_price: f.f64(5, "exec_price")?,
        order_type: f.opt_string(6, "order_type")?.unwrap_or_default(),
        order_price: f.opt_f64(7, "order_price")?.unwrap_or_default(),
        maker: f.flag(8, "maker")?,
        fee: f.opt_f64(9, "fee")?,
        fee_currency: f.opt_string(10, "fee_currency")?,
    })
}

/// Decodes a `[price, count, amount]` book level.
pub fn book_from_raw(symbol: &str, payload: &Value) -> Result<BookUpdate, DecodeError> {
    let f = Fields::new(payload)?;
    Ok(BookUpdate {
        symbol: symbol.to_string(),
        price: f.f64(0, "price")?,
        count: f.i64(1, "count")?,
        amount: f.f64(2, "amount")?,
    })
}
