use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Action, Result};
use crate::index::NumberArg;
use crate::model::CompletedTodo;
use crate::store::DataStore;
use chrono::NaiveDate;

use super::helpers::{recover_user_error, resolve_number};

pub fn run<S: DataStore>(store: &mut S, arg: &NumberArg, today: NaiveDate) -> Result<CmdResult> {
    recover_user_error(complete(store, arg, today))
}

fn complete<S: DataStore>(store: &mut S, arg: &NumberArg, today: NaiveDate) -> Result<CmdResult> {
    let resolved = resolve_number(store, arg, Action::Complete)?;
    let number = resolved.number;
    let (text, remaining) = resolved.take();

    // Append before rewriting pending: the todo must never be missing from both lists.
    let entry = CompletedTodo::new(today, text.clone());
    store.append_completed(&entry.to_string())?;
    store.save_pending(&remaining)?;
    tracing::info!(number, todo = %text, "completed todo");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Marked todo #{} as done.",
        number
    )));
    Ok(result.with_affected_todos(vec![text]))
}
