//! Exchange-side data models and tokens.
//!
//! [`Order`] is the current normalized order model: numbers are native, one status
//! token, and the sign of `amount` encodes the side. [`LegacyOrder`] is the older
//! string-typed record that [`crate::legacy`] normalizes into [`Order`].

use serde::{Deserialize, Serialize};

pub const STATUS_ACTIVE: &str = "ACTIVE";
pub const STATUS_EXECUTED: &str = "EXECUTED";
pub const STATUS_PARTIALLY_FILLED: &str = "PARTIALLY FILLED";
pub const STATUS_CANCELED: &str = "CANCELED";

pub const TYPE_LIMIT: &str = "LIMIT";
pub const TYPE_MARKET: &str = "MARKET";
pub const TYPE_STOP: &str = "STOP";
pub const TYPE_STOP_LIMIT: &str = "STOP LIMIT";
pub const TYPE_TRAILING_STOP: &str = "TRAILING STOP";
pub const TYPE_FOK: &str = "FOK";
pub const TYPE_EXCHANGE_LIMIT: &str = "EXCHANGE LIMIT";
pub const TYPE_EXCHANGE_MARKET: &str = "EXCHANGE MARKET";
pub const TYPE_EXCHANGE_STOP: &str = "EXCHANGE STOP";
pub const TYPE_EXCHANGE_TRAILING_STOP: &str = "EXCHANGE TRAILING STOP";
pub const TYPE_EXCHANGE_FOK: &str = "EXCHANGE FOK";

/// Marker the exchange embeds in margin order types, in place of [`EXCHANGE_MARKER`].
pub const MARGIN_MARKER: &str = "MARGIN";
pub const EXCHANGE_MARKER: &str = "EXCHANGE";

/// Order flag bitmask. Bit values match the exchange's assignment and must not change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderFlags(pub i64);

impl OrderFlags {
    pub const HIDDEN: OrderFlags = OrderFlags(64);
    pub const CLOSE: OrderFlags = OrderFlags(512);
    pub const POST_ONLY: OrderFlags = OrderFlags(4096);
    pub const OCO: OrderFlags = OrderFlags(16384);

    /// True if every bit of `other` is set.
    pub fn contains(self, other: OrderFlags) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    pub fn with(self, other: OrderFlags) -> OrderFlags {
        OrderFlags(self.0 | other.0)
    }
}

/// Book action: a price level entry was added/updated, or removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookAction {
    Entry,
    RemoveEntry,
}

/// Normalized exchange order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub group_id: Option<i64>,
    pub client_id: i64,
    pub symbol: String,
    pub mts_created: i64,
    pub mts_updated: i64,
    /// Remaining amount. Positive is a buy, negative a sell.
    pub amount: f64,
    pub amount_orig: f64,
    /// Order type token, e.g. `EXCHANGE LIMIT`. Empty when unset.
    pub order_type: String,
    pub order_type_prev: Option<String>,
    /// Expiration epoch in milliseconds; non-positive means none.
    pub mts_tif: i64,
    pub flags: OrderFlags,
    /// Status token, possibly composite. Empty when unset.
    pub status: String,
    pub price: f64,
    pub price_avg: f64,
    pub price_trailing: Option<f64>,
    pub price_aux_limit: Option<f64>,
    pub hidden: bool,
    pub placed_id: Option<i64>,
}

/// Legacy order record with string-encoded numbers and split status flags.
///
/// Field names follow the legacy REST payload so it deserializes directly.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyOrder {
    pub id: i64,
    pub symbol: String,
    pub exchange: String,
    pub price: String,
    pub avg_execution_price: String,
    /// `buy` or `sell`.
    pub side: String,
    #[serde(rename = "type")]
    pub order_type: String,
    /// Creation time as a decimal string.
    pub timestamp: String,
    pub is_live: bool,
    #[serde(rename = "is_cancelled")]
    pub is_canceled: bool,
    pub is_hidden: bool,
    pub was_forced: bool,
    pub original_amount: String,
    pub remaining_amount: String,
    pub executed_amount: String,
}

/// One fill on an order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TradeExecution {
    pub id: i64,
    pub symbol: String,
    pub mts: i64,
    pub order_id: i64,
    /// Filled amount. Positive is a buy, negative a sell.
    pub exec_amount: f64,
    pub exec_price: f64,
    pub order_type: String,
    pub order_price: f64,
    pub maker: bool,
    pub fee: Option<f64>,
    pub fee_currency: Option<String>,
}

/// One price level update from a book feed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BookUpdate {
    pub symbol: String,
    pub price: f64,
    /// Number of orders at the level. Zero removes the level.
    pub count: i64,
    /// Size at the level. Positive is a bid, negative an offer.
    pub amount: f64,
}

impl BookUpdate {
    pub fn action(&self) -> BookAction {
        if self.count > 0 {
            BookAction::Entry
        } else {
            BookAction::RemoveEntry
        }
    }

    pub fn is_bid(&self) -> bool {
        self.amount > 0.0
    }
}
