//! # FIX Translate
//!
//! Translation of exchange order, fill, and book values into FIX 4.4 field values:
//! enumerations, fixed-precision decimals, and flag-derived instructions.
//!
//! ## Entry points
//!
//! Field-level conversions live in [`convert`]; each is a pure function of its inputs.
//! [`report_from_order`] and [`md_entry_from_book`] compose them into the values of one
//! ExecutionReport or one MDIncrementalRefresh entry. Untyped payloads are decoded with
//! [`payload`], legacy records normalized with [`order_from_legacy`].
//!
//! ## Example
//!
//! ```rust
//! use fix_translate::convert::{ord_status_to_fix, ord_type_to_fix, exec_type_to_fix};
//! use fix_translate::fix::{ExecType, OrdStatus, OrdType};
//!
//! let status = "EXECUTED @ 1.0: was PARTIALLY FILLED @ 0.5";
//! assert_eq!(ord_status_to_fix(status), OrdStatus::Filled);
//! assert_eq!(exec_type_to_fix(status), ExecType::Trade);
//! assert_eq!(ord_type_to_fix("MARGIN STOP"), (OrdType::Stop, true));
//! ```
//!
//! Wire encoding, sessions, and exchange connectivity are left to the caller.

pub mod convert;
pub mod error;
pub mod execution;
pub mod fix;
pub mod legacy;
pub mod market_data;
pub mod payload;
pub mod sample_gen;
pub mod types;

pub use error::{ConvertError, DecodeError, TranslateError};
pub use execution::{report_from_order, ExecutionReportFields};
pub use legacy::order_from_legacy;
pub use market_data::{md_entry_from_book, MdEntry};
pub use payload::{book_from_raw, order_from_raw, trade_from_raw};
pub use types::{BookAction, BookUpdate, LegacyOrder, Order, OrderFlags, TradeExecution};
