//! MDIncrementalRefresh entry values for book updates.

use crate::convert::{book_action_to_fix, to_fix_decimal, DecimalField};
use crate::error::ConvertError;
use crate::fix::{MdEntryType, MdUpdateAction};
use crate::types::BookUpdate;
use rust_decimal::Decimal;

/// One repeating-group entry of an incremental refresh.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MdEntry {
    pub symbol: String,
    pub update_action: MdUpdateAction,
    pub entry_type: MdEntryType,
    pub price: Decimal,
    pub size: Decimal,
}

/// Removals keep price and entry type so the consumer can find the level to delete.
pub fn md_entry_from_book(update: &BookUpdate) -> Result<MdEntry, ConvertError> {
    let entry_type = if update.is_bid() {
        MdEntryType::Bid
    } else {
        MdEntryType::Offer
    };
    Ok(MdEntry {
        symbol: update.symbol.clone(),
        update_action: book_action_to_fix(update.action()),
        entry_type,
        price: to_fix_decimal(update.price, DecimalField::MdEntryPx)?,
        size: to_fix_decimal(update.amount.abs(), DecimalField::MdEntrySize)?,
    })
}
