//! Property-based tests for the field conversions.
//!
//! Uses proptest to generate status strings, order types, flag sets, epochs, and amounts,
//! and asserts the precedence and threshold rules hold for all of them.

use fix_translate::convert::{
    exec_inst_to_fix, exec_type_to_fix, mts_to_time, ord_status_to_fix, ord_type_to_fix,
    side_to_fix, time_in_force_to_fix,
};
use fix_translate::fix::{ExecType, OrdStatus, Side, TimeInForce};
use fix_translate::sample_gen::{replay_payloads, Generator, GeneratorConfig};
use fix_translate::{order_from_legacy, LegacyOrder, OrderFlags};
use proptest::prelude::*;

const ORDER_TYPES: &[&str] = &[
    "LIMIT",
    "MARKET",
    "STOP",
    "STOP LIMIT",
    "TRAILING STOP",
    "FOK",
    "EXCHANGE LIMIT",
    "EXCHANGE MARKET",
    "EXCHANGE STOP",
    "EXCHANGE TRAILING STOP",
    "EXCHANGE FOK",
    "SOMETHING ELSE",
];

const EXCHANGE_TYPES: &[&str] = &[
    "EXCHANGE LIMIT",
    "EXCHANGE MARKET",
    "EXCHANGE STOP",
    "EXCHANGE TRAILING STOP",
    "EXCHANGE FOK",
];

const STATUS_FRAGMENTS: &[&str] = &["ACTIVE", "PARTIALLY FILLED", "CANCELED", "was", "@ 1.0", ": ", " "];

fn order_type() -> impl Strategy<Value = &'static str> {
    proptest::sample::select(ORDER_TYPES)
}

fn status_fragment() -> impl Strategy<Value = &'static str> {
    proptest::sample::select(STATUS_FRAGMENTS)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// A status containing EXECUTED is FILLED, whatever else it contains.
    #[test]
    fn executed_always_filled(
        before in proptest::collection::vec(status_fragment(), 0..4),
        after in proptest::collection::vec(status_fragment(), 0..4),
    ) {
        let s = format!("{}EXECUTED{}", before.concat(), after.concat());
        prop_assert_eq!(ord_status_to_fix(&s), OrdStatus::Filled);
    }

    /// Exec type is derived independently: ACTIVE wins there even when EXECUTED is present.
    #[test]
    fn active_always_new_exec_type(prefix in "[A-Z ]{0,12}", suffix in "[A-Z ]{0,12}") {
        let s = format!("{}ACTIVE{}", prefix, suffix);
        prop_assert_eq!(exec_type_to_fix(&s), ExecType::New);
    }

    /// Swapping the EXCHANGE marker for MARGIN keeps the order type and flips the margin flag.
    #[test]
    fn margin_variant_same_ord_type(t in proptest::sample::select(EXCHANGE_TYPES)) {
        let margin = t.replacen("EXCHANGE", "MARGIN", 1);
        let (exchange_type, exchange_margin) = ord_type_to_fix(t);
        let (margin_type, margin_margin) = ord_type_to_fix(&margin);
        prop_assert_eq!(exchange_type, margin_type);
        prop_assert!(!exchange_margin);
        prop_assert!(margin_margin);
    }

    /// Any positive expiration gives GTD with that expiration, regardless of type.
    #[test]
    fn expiration_always_gtd(t in order_type(), mts in 1i64..4_000_000_000_000i64) {
        let (tif, expire) = time_in_force_to_fix(t, mts);
        prop_assert_eq!(tif, TimeInForce::GoodTillDate);
        prop_assert_eq!(expire, mts_to_time(mts));
        prop_assert!(expire.is_some());
    }

    /// Without an expiration the timestamp is never set.
    #[test]
    fn no_expiration_no_timestamp(t in order_type(), mts in i64::MIN..=0i64) {
        let (tif, expire) = time_in_force_to_fix(t, mts);
        prop_assert!(expire.is_none());
        prop_assert_ne!(tif, TimeInForce::GoodTillDate);
    }

    /// Adding post-only to a flag set without an instruction always yields one.
    #[test]
    fn post_only_monotonic(t in order_type(), bits in any::<i64>()) {
        let flags = OrderFlags(bits);
        if exec_inst_to_fix(t, flags).is_none() {
            prop_assert!(exec_inst_to_fix(t, flags.with(OrderFlags::POST_ONLY)).is_some());
        }
    }

    #[test]
    fn side_threshold_at_zero(x in any::<f64>()) {
        let side = side_to_fix(x);
        if x > 0.0 {
            prop_assert_eq!(side, Side::Buy);
        } else if x < 0.0 {
            prop_assert_eq!(side, Side::Sell);
        } else {
            prop_assert_eq!(side, Side::Undisclosed);
        }
    }

    /// Remaining amount is signed by the legacy side token.
    #[test]
    fn legacy_sign_follows_side(units in 0u32..1_000_000u32, sell in any::<bool>()) {
        let remaining = units as f64 / 100.0;
        let record = LegacyOrder {
            price: "1".into(),
            avg_execution_price: "0".into(),
            side: if sell { "sell".into() } else { "buy".into() },
            timestamp: "1".into(),
            original_amount: format!("{}", remaining),
            remaining_amount: format!("{}", remaining),
            ..LegacyOrder::default()
        };
        let order = order_from_legacy(&record).unwrap();
        let expected = if sell { -remaining } else { remaining };
        prop_assert_eq!(order.amount, expected);
    }

    /// Every generated payload stream decodes and converts without error.
    #[test]
    fn generated_stream_converts(seed in 0u64..100_000u64, num_orders in 1usize..100usize) {
        let payloads = Generator::new(GeneratorConfig {
            seed,
            num_orders,
            ..Default::default()
        })
        .all_payloads();
        let reports = replay_payloads(&payloads).unwrap();
        prop_assert_eq!(reports.len(), num_orders);
        for r in &reports {
            prop_assert!(r.leaves_qty >= rust_decimal::Decimal::ZERO);
            prop_assert!(r.cum_qty >= rust_decimal::Decimal::ZERO);
            prop_assert_eq!(r.leaves_qty.scale(), 4);
            prop_assert_eq!(r.cum_qty.scale(), 2);
        }
    }
}

#[test]
fn status_examples() {
    let cases = [
        ("ACTIVE", OrdStatus::New, ExecType::New),
        ("PARTIALLY FILLED @ 1.0", OrdStatus::PartiallyFilled, ExecType::Trade),
        (
            "EXECUTED @ 1.0: was PARTIALLY FILLED @ 0.5",
            OrdStatus::Filled,
            ExecType::Trade,
        ),
    ];
    for (s, status, exec_type) in cases {
        assert_eq!(ord_status_to_fix(s), status, "{}", s);
        assert_eq!(exec_type_to_fix(s), exec_type, "{}", s);
    }
}

#[test]
fn side_special_values() {
    assert_eq!(side_to_fix(-0.0), Side::Undisclosed);
    assert_eq!(side_to_fix(5e-324), Side::Buy);
    assert_eq!(side_to_fix(-5e-324), Side::Sell);
}

#[test]
fn legacy_sell_and_buy_examples() {
    let mut record = LegacyOrder {
        price: "1".into(),
        avg_execution_price: "0".into(),
        side: "sell".into(),
        timestamp: "1".into(),
        original_amount: "5.0".into(),
        remaining_amount: "5.0".into(),
        ..LegacyOrder::default()
    };
    assert_eq!(order_from_legacy(&record).unwrap().amount, -5.0);
    record.side = "buy".into();
    assert_eq!(order_from_legacy(&record).unwrap().amount, 5.0);
}
