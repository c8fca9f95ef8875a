//! FIX 4.4 field vocabulary produced by the conversions.
//!
//! Values only: tag numbers and tag-value framing belong to the message assembler.

pub mod enums;

pub use enums::{
    DisplayMethod, ExecInst, ExecInstCode, ExecType, MdEntryType, MdUpdateAction, OrdStatus,
    OrdType, Side, TimeInForce,
};
