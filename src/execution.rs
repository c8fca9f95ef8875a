//! ExecutionReport field values for one order (and optionally one fill).
//!
//! [`report_from_order`] runs every field conversion an ExecutionReport (35=8) needs and
//! returns the typed values. Optional fields are `None` when the message must omit them.

use crate::convert::{
    display_method_to_fix, exec_inst_to_fix, exec_type_to_fix, mts_to_time, ord_status_to_fix,
    ord_type_to_fix, side_to_fix, time_in_force_to_fix, to_fix_decimal, DecimalField,
};
use crate::error::ConvertError;
use crate::fix::{DisplayMethod, ExecInst, ExecType, OrdStatus, OrdType, Side, TimeInForce};
use crate::types::{Order, TradeExecution};
use chrono::{DateTime, Utc};
use log::info;
use rust_decimal::Decimal;

/// Field values for one ExecutionReport.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ExecutionReportFields {
    pub order_id: i64,
    pub cl_ord_id: i64,
    pub symbol: String,
    pub ord_status: OrdStatus,
    pub exec_type: ExecType,
    pub side: Side,
    pub ord_type: OrdType,
    pub is_margin: bool,
    pub time_in_force: TimeInForce,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expire_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exec_inst: Option<ExecInst>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_method: Option<DisplayMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_px: Option<Decimal>,
    pub leaves_qty: Decimal,
    pub cum_qty: Decimal,
    pub avg_px: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_shares: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_px: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transact_time: Option<DateTime<Utc>>,
}

/// Side of an order whose remaining amount may already be zero.
fn order_side(order: &Order) -> Side {
    match side_to_fix(order.amount) {
        Side::Undisclosed => side_to_fix(order.amount_orig),
        side => side,
    }
}

/// Builds report fields for `order`. With a `fill`, LastShares/LastPx are set and the
/// exec type is TRADE.
pub fn report_from_order(
    order: &Order,
    fill: Option<&TradeExecution>,
) -> Result<ExecutionReportFields, ConvertError> {
    let (ord_type, is_margin) = ord_type_to_fix(&order.order_type);
    let (time_in_force, expire_time) = time_in_force_to_fix(&order.order_type, order.mts_tif);

    // `f64::max` swallows NaN, so a non-finite original amount must fail before clamping.
    if !order.amount_orig.is_finite() {
        return Err(ConvertError::InvalidNumber {
            field: DecimalField::CumQty.name(),
            value: order.amount_orig,
        });
    }
    let leaves = order.amount.abs();
    let cum = (order.amount_orig.abs() - leaves).max(0.0);

    let stop_px = if ord_type.has_stop_price() {
        Some(to_fix_decimal(order.price, DecimalField::StopPx)?)
    } else {
        None
    };
    // Stop-limit orders carry the trigger in `price` and the limit in `price_aux_limit`.
    let price = if ord_type.has_limit_price() {
        let limit = match ord_type {
            OrdType::StopLimit => order.price_aux_limit.unwrap_or(order.price),
            _ => order.price,
        };
        Some(to_fix_decimal(limit, DecimalField::Price)?)
    } else {
        None
    };

    let (exec_type, last_shares, last_px) = match fill {
        Some(t) => (
            ExecType::Trade,
            Some(to_fix_decimal(t.exec_amount.abs(), DecimalField::LastShares)?),
            Some(to_fix_decimal(t.exec_price, DecimalField::LastPx)?),
        ),
        None => (exec_type_to_fix(&order.status), None, None),
    };

    let report = ExecutionReportFields {
        order_id: order.id,
        cl_ord_id: order.client_id,
        symbol: order.symbol.clone(),
        ord_status: ord_status_to_fix(&order.status),
        exec_type,
        side: order_side(order),
        ord_type,
        is_margin,
        time_in_force,
        expire_time,
        exec_inst: exec_inst_to_fix(&order.order_type, order.flags),
        display_method: display_method_to_fix(order.flags),
        price,
        stop_px,
        leaves_qty: to_fix_decimal(leaves, DecimalField::LeavesQty)?,
        cum_qty: to_fix_decimal(cum, DecimalField::CumQty)?,
        avg_px: to_fix_decimal(order.price_avg, DecimalField::AvgPx)?,
        last_shares,
        last_px,
        transact_time: mts_to_time(order.mts_updated),
    };
    info!(
        "execution_report order_id={} exec_type={:?} ord_status={:?} leaves={} cum={}",
        report.order_id, report.exec_type, report.ord_status, report.leaves_qty, report.cum_qty
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fix::ExecInstCode;
    use crate::types::OrderFlags;

    fn init_log() {
        let _ = env_logger::try_init();
    }

    fn order(order_type: &str, status: &str, amount: f64, amount_orig: f64) -> Order {
        Order {
            id: 7,
            client_id: 99,
            symbol: "tBTCUSD".into(),
            mts_created: 1_700_000_000_000,
            mts_updated: 1_700_000_001_000,
            amount,
            amount_orig,
            order_type: order_type.into(),
            status: status.into(),
            price: 100.25,
            price_avg: 100.0,
            ..Order::default()
        }
    }

    #[test]
    fn new_limit_buy() {
        init_log();
        let r = report_from_order(&order("EXCHANGE LIMIT", "ACTIVE", 2.0, 2.0), None).unwrap();
        assert_eq!(r.ord_status, OrdStatus::New);
        assert_eq!(r.exec_type, ExecType::New);
        assert_eq!(r.side, Side::Buy);
        assert_eq!(r.ord_type, OrdType::Limit);
        assert!(!r.is_margin);
        assert_eq!(r.time_in_force, TimeInForce::GoodTillCancel);
        assert_eq!(r.expire_time, None);
        assert_eq!(r.price.unwrap().to_string(), "100.25");
        assert_eq!(r.stop_px, None);
        assert_eq!(r.leaves_qty.to_string(), "2.0000");
        assert_eq!(r.cum_qty.to_string(), "0.00");
        assert_eq!(r.avg_px.to_string(), "100.00");
        assert_eq!(r.last_shares, None);
        assert_eq!(r.transact_time.map(|t| t.timestamp_millis()), Some(1_700_000_001_000));
    }

    #[test]
    fn filled_sell_takes_side_from_original_amount() {
        init_log();
        let r = report_from_order(
            &order("MARGIN MARKET", "EXECUTED @ 100.0(-1.0)", 0.0, -1.0),
            None,
        )
        .unwrap();
        assert_eq!(r.ord_status, OrdStatus::Filled);
        assert_eq!(r.exec_type, ExecType::Trade);
        assert_eq!(r.side, Side::Sell);
        assert_eq!(r.ord_type, OrdType::Market);
        assert!(r.is_margin);
        assert_eq!(r.price, None);
        assert_eq!(r.leaves_qty.to_string(), "0.0000");
        assert_eq!(r.cum_qty.to_string(), "1.00");
    }

    #[test]
    fn fill_sets_last_shares_and_trade_exec_type() {
        init_log();
        let o = order("EXCHANGE LIMIT", "PARTIALLY FILLED @ 100.0(0.3)", 0.7, 1.0);
        let fill = TradeExecution {
            id: 1,
            symbol: "tBTCUSD".into(),
            mts: 1_700_000_001_000,
            order_id: 7,
            exec_amount: 0.3,
            exec_price: 100.0,
            ..TradeExecution::default()
        };
        let r = report_from_order(&o, Some(&fill)).unwrap();
        assert_eq!(r.exec_type, ExecType::Trade);
        assert_eq!(r.ord_status, OrdStatus::PartiallyFilled);
        assert_eq!(r.last_shares.unwrap().to_string(), "0.3000");
        assert_eq!(r.last_px.unwrap().to_string(), "100.00");
        assert_eq!(r.leaves_qty.to_string(), "0.7000");
        assert_eq!(r.cum_qty.to_string(), "0.30");
    }

    #[test]
    fn trailing_stop_post_only_hidden_with_expiry() {
        init_log();
        let mut o = order("EXCHANGE TRAILING STOP", "ACTIVE", -1.0, -1.0);
        o.flags = OrderFlags::POST_ONLY.with(OrderFlags::HIDDEN);
        o.mts_tif = 1_800_000_000_000;
        let r = report_from_order(&o, None).unwrap();
        assert_eq!(r.ord_type, OrdType::Stop);
        assert_eq!(r.stop_px.unwrap().to_string(), "100.25");
        assert_eq!(r.price, None);
        let inst = r.exec_inst.unwrap();
        assert!(inst.contains(ExecInstCode::PrimaryPeg));
        assert!(inst.contains(ExecInstCode::ParticipantDontInitiate));
        assert_eq!(r.display_method, Some(DisplayMethod::Undisclosed));
        assert_eq!(r.time_in_force, TimeInForce::GoodTillDate);
        assert_eq!(r.expire_time.map(|t| t.timestamp_millis()), Some(1_800_000_000_000));
    }

    #[test]
    fn stop_limit_uses_aux_limit_price() {
        init_log();
        let mut o = order("STOP LIMIT", "ACTIVE", 1.0, 1.0);
        o.price_aux_limit = Some(101.5);
        let r = report_from_order(&o, None).unwrap();
        assert_eq!(r.ord_type, OrdType::StopLimit);
        assert_eq!(r.stop_px.unwrap().to_string(), "100.25");
        assert_eq!(r.price.unwrap().to_string(), "101.50");
    }

    #[test]
    fn fok_is_limit_with_fill_or_kill() {
        init_log();
        let r = report_from_order(&order("EXCHANGE FOK", "CANCELED", 1.0, 1.0), None).unwrap();
        assert_eq!(r.ord_type, OrdType::Limit);
        assert_eq!(r.time_in_force, TimeInForce::FillOrKill);
        assert_eq!(r.ord_status, OrdStatus::Canceled);
        assert_eq!(r.exec_type, ExecType::Canceled);
    }

    #[test]
    fn non_finite_average_price_fails() {
        init_log();
        let mut o = order("LIMIT", "ACTIVE", 1.0, 1.0);
        o.price_avg = f64::NAN;
        let err = report_from_order(&o, None).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidNumber { field: "AvgPx", .. }));
    }

    #[test]
    fn non_finite_original_amount_fails() {
        init_log();
        let mut o = order("LIMIT", "ACTIVE", 1.0, 1.0);
        o.amount_orig = f64::NAN;
        let err = report_from_order(&o, None).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidNumber { field: "CumQty", .. }));
        o.amount_orig = f64::INFINITY;
        assert!(report_from_order(&o, None).is_err());
    }

    #[test]
    fn serializes_wire_codes_and_omits_absent_fields() {
        init_log();
        let r = report_from_order(&order("EXCHANGE LIMIT", "ACTIVE", 2.0, 2.0), None).unwrap();
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["ord_status"], "0");
        assert_eq!(v["ord_type"], "2");
        assert_eq!(v["side"], "1");
        assert_eq!(v["leaves_qty"], "2.0000");
        assert!(v.get("exec_inst").is_none());
        assert!(v.get("display_method").is_none());
        assert!(v.get("expire_time").is_none());
    }
}
