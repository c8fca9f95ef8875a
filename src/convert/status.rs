//! Order status token to FIX OrdStatus and ExecType.
//!
//! The exchange reports composite states as concatenated substrings, e.g.
//! `EXECUTED @ 107.6(-0.2): was PARTIALLY FILLED @ 107.6(-0.1)`. OrdStatus and ExecType
//! are derived from the same token through two independent precedence chains.

use crate::fix::{ExecType, OrdStatus};
use crate::types::{STATUS_ACTIVE, STATUS_CANCELED, STATUS_EXECUTED, STATUS_PARTIALLY_FILLED};

/// Most terminal state wins: executed, then partially filled, then canceled, else new.
pub fn ord_status_to_fix(status: &str) -> OrdStatus {
    if status.contains(STATUS_EXECUTED) {
        OrdStatus::Filled
    } else if status.contains(STATUS_PARTIALLY_FILLED) {
        OrdStatus::PartiallyFilled
    } else if status.contains(STATUS_CANCELED) {
        OrdStatus::Canceled
    } else {
        OrdStatus::New
    }
}

/// Latest event on the order; [`ExecType::OrderStatus`] when nothing is recognized.
pub fn exec_type_to_fix(status: &str) -> ExecType {
    if status.contains(STATUS_ACTIVE) {
        ExecType::New
    } else if status.contains(STATUS_CANCELED) {
        ExecType::Canceled
    } else if status.contains(STATUS_PARTIALLY_FILLED) || status.contains(STATUS_EXECUTED) {
        ExecType::Trade
    } else {
        ExecType::OrderStatus
    }
}
