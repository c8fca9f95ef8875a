//! Order flag bitmask to FIX ExecInst and DisplayMethod.
//!
//! Both results are optional: FIX omits the field entirely when nothing applies. The
//! close and OCO bits are not consumed here.

use super::order_type::is_trailing_stop;
use crate::fix::{DisplayMethod, ExecInst, ExecInstCode};
use crate::types::OrderFlags;

/// Trailing stops peg to the primary; post-only orders never initiate.
pub fn exec_inst_to_fix(order_type: &str, flags: OrderFlags) -> Option<ExecInst> {
    let mut codes = Vec::with_capacity(2);
    if is_trailing_stop(order_type) {
        codes.push(ExecInstCode::PrimaryPeg);
    }
    if flags.contains(OrderFlags::POST_ONLY) {
        codes.push(ExecInstCode::ParticipantDontInitiate);
    }
    ExecInst::from_codes(codes)
}

pub fn display_method_to_fix(flags: OrderFlags) -> Option<DisplayMethod> {
    if flags.contains(OrderFlags::HIDDEN) {
        Some(DisplayMethod::Undisclosed)
    } else {
        None
    }
}
