//! Synthetic exchange order payloads.
//!
//! Deterministic, configurable stream of order arrays in the exchange's positional layout,
//! for property tests, benchmarks, and demos. Same seed ⇒ same sequence of payloads.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Value};

use crate::error::TranslateError;
use crate::execution::{report_from_order, ExecutionReportFields};
use crate::payload::order_from_raw;
use crate::types::OrderFlags;

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
    "EXCHANGE IOC",
];

/// Configuration for the synthetic payload generator. Ranges are inclusive.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// RNG seed. Same seed ⇒ same payload stream.
    pub seed: u64,
    pub symbol: String,
    pub num_orders: usize,
    /// Probability of a buy (positive amount).
    pub buy_ratio: f64,
    /// Probability that an `EXCHANGE` type is spelled with the `MARGIN` marker instead.
    pub margin_ratio: f64,
    /// Probability of an expiration epoch being set.
    pub expiry_ratio: f64,
    /// Probability of each of the hidden and post-only flags.
    pub flag_ratio: f64,
    /// Price range in cents.
    pub price_min_cents: i64,
    pub price_max_cents: i64,
    /// Original amount range in 1/10000 units.
    pub amount_min: u64,
    pub amount_max: u64,
    /// First created epoch (ms); each order is 1 ms later.
    pub start_mts: i64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            symbol: "tBTCUSD".into(),
            num_orders: 1000,
            buy_ratio: 0.5,
            margin_ratio: 0.3,
            expiry_ratio: 0.1,
            flag_ratio: 0.2,
            price_min_cents: 9_500,
            price_max_cents: 10_500,
            amount_min: 1,
            amount_max: 1_000_000,
            start_mts: 1_700_000_000_000,
        }
    }
}

/// Deterministic payload stream. Create with [`Generator::new`].
pub struct Generator {
    rng: StdRng,
    config: GeneratorConfig,
    next_id: i64,
    next_mts: i64,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            rng,
            next_id: 1,
            next_mts: config.start_mts,
            config,
        }
    }

    fn order_type(&mut self) -> String {
        let t = ORDER_TYPES[self.rng.gen_range(0..ORDER_TYPES.len())];
        if t.starts_with("EXCHANGE") && self.rng.gen::<f64>() < self.config.margin_ratio {
            t.replacen("EXCHANGE", "MARGIN", 1)
        } else {
            t.to_string()
        }
    }

    /// Status token and remaining amount for an order of `orig` (signed).
    fn status(&mut self, orig: f64, price: f64) -> (String, f64) {
        let filled = (orig * self.rng.gen_range(1..=9) as f64 / 10.0 * 10_000.0).round() / 10_000.0;
        match self.rng.gen_range(0..5) {
            0 => ("ACTIVE".into(), orig),
            1 => (format!("PARTIALLY FILLED @ {:.2}({})", price, filled), orig - filled),
            2 => (format!("EXECUTED @ {:.2}({})", price, orig), 0.0),
            3 => (
                format!("EXECUTED @ {:.2}({}): was PARTIALLY FILLED @ {:.2}({})", price, orig - filled, price, filled),
                0.0,
            ),
            _ => ("CANCELED".into(), orig),
        }
    }

    /// Generates the next order payload.
    pub fn next_payload(&mut self) -> Value {
        let id = self.next_id;
        self.next_id += 1;
        let mts = self.next_mts;
        self.next_mts += 1;

        let units = self.rng.gen_range(self.config.amount_min..=self.config.amount_max) as f64 / 10_000.0;
        let orig = if self.rng.gen::<f64>() < self.config.buy_ratio {
            units
        } else {
            -units
        };
        let price = self
            .rng
            .gen_range(self.config.price_min_cents..=self.config.price_max_cents) as f64
            / 100.0;
        let order_type = self.order_type();
        let (status, amount) = self.status(orig, price);
        let mts_tif = if self.rng.gen::<f64>() < self.config.expiry_ratio {
            Value::from(mts + 86_400_000)
        } else {
            Value::Null
        };
        let mut flags = OrderFlags::default();
        if self.rng.gen::<f64>() < self.config.flag_ratio {
            flags = flags.with(OrderFlags::HIDDEN);
        }
        if self.rng.gen::<f64>() < self.config.flag_ratio {
            flags = flags.with(OrderFlags::POST_ONLY);
        }
        let hidden = i64::from(flags.contains(OrderFlags::HIDDEN));

        json!([
            id, null, id * 10, self.config.symbol, mts, mts, amount, orig, order_type, null,
            mts_tif, null, flags.0, status, null, null, price, price, null, null, null, null,
            null, 0, hidden, null
        ])
    }

    pub fn take_payloads(&mut self, n: usize) -> Vec<Value> {
        (0..n).map(|_| self.next_payload()).collect()
    }

    /// Returns the full stream as defined by `config.num_orders`.
    pub fn all_payloads(&mut self) -> Vec<Value> {
        self.take_payloads(self.config.num_orders)
    }
}

/// Decodes each payload and builds its report. Stops at the first failure.
pub fn replay_payloads<'a>(
    payloads: impl IntoIterator<Item = &'a Value>,
) -> Result<Vec<ExecutionReportFields>, TranslateError> {
    payloads
        .into_iter()
        .map(|p| -> Result<ExecutionReportFields, TranslateError> {
            let order = order_from_raw(p)?;
            Ok(report_from_order(&order, None)?)
        })
        .collect()
}
