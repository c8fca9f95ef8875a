//! Field-level conversions from exchange values to FIX values.
//!
//! Every function here is pure. Classifiers are total and fall back to a documented
//! default; only decimal encoding returns an error.

pub mod book;
pub mod flags;
pub mod numeric;
pub mod order_type;
pub mod side;
pub mod status;
pub mod time_in_force;
pub mod timestamp;

pub use book::book_action_to_fix;
pub use flags::{display_method_to_fix, exec_inst_to_fix};
pub use numeric::{
    avg_px_to_fix, cum_qty_to_fix, last_shares_to_fix, leaves_qty_to_fix, to_fix_decimal,
    DecimalField,
};
pub use order_type::ord_type_to_fix;
pub use side::side_to_fix;
pub use status::{exec_type_to_fix, ord_status_to_fix};
pub use time_in_force::time_in_force_to_fix;
pub use timestamp::mts_to_time;
