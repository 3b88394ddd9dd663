use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Action, Result};
use crate::index::NumberArg;
use crate::store::DataStore;

use super::helpers::{recover_user_error, resolve_number};

pub fn run<S: DataStore>(store: &mut S, arg: &NumberArg) -> Result<CmdResult> {
    recover_user_error(delete(store, arg))
}

fn delete<S: DataStore>(store: &mut S, arg: &NumberArg) -> Result<CmdResult> {
    let resolved = resolve_number(store, arg, Action::Delete)?;
    let number = resolved.number;
    let (text, remaining) = resolved.take();

    store.save_pending(&remaining)?;
    tracing::info!(number, todo = %text, "deleted todo");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Deleted todo #{}", number)));
    Ok(result.with_affected_todos(vec![text]))
}
