use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Action, Result, TodoError};
use crate::store::DataStore;

use super::helpers::recover_user_error;

pub fn run<S: DataStore>(store: &mut S, text: Option<&str>) -> Result<CmdResult> {
    recover_user_error(add(store, text))
}

fn add<S: DataStore>(store: &mut S, text: Option<&str>) -> Result<CmdResult> {
    let raw = match text {
        Some(t) if !t.trim().is_empty() => t,
        _ => return Err(TodoError::MissingArgument(Action::Add)),
    };

    let text = single_line(raw);
    store.append_pending(&text)?;
    tracing::info!(todo = %text, "added todo");

    let mut result = CmdResult::default();
    if text != raw {
        result.add_message(CmdMessage::warning("Line breaks replaced with spaces."));
    }
    result.add_message(CmdMessage::success(format!("Added todo: \"{}\"", text)));
    Ok(result.with_affected_todos(vec![text]))
}

/// Joins the non-empty lines of `raw` with single spaces.
fn single_line(raw: &str) -> String {
    if !raw.contains(['\n', '\r']) {
        return raw.to_string();
    }
    raw.split(['\n', '\r'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
