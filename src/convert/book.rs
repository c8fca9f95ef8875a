//! Book action to FIX MDUpdateAction.

use crate::fix::MdUpdateAction;
use crate::types::BookAction;

pub fn book_action_to_fix(action: BookAction) -> MdUpdateAction {
    match action {
        BookAction::Entry => MdUpdateAction::New,
        BookAction::RemoveEntry => MdUpdateAction::Delete,
    }
}
