use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Action, Result, TodoError};
use crate::index::{storage_index, NumberArg};
use crate::store::DataStore;

/// A display number resolved against the current pending list.
#[derive(Debug)]
pub struct Resolved {
    pub number: i64,
    pub storage_index: usize,
    pub pending: Vec<String>,
}

impl Resolved {
    /// Removes the resolved todo, returning its text and the remaining list in storage order.
    pub fn take(mut self) -> (String, Vec<String>) {
        let text = self.pending.remove(self.storage_index);
        (text, self.pending)
    }
}

/// Reads the pending list and maps `arg` onto it.
///
/// `Missing` is always a missing argument. `Invalid` is treated as `#0` for deletes
/// and as a missing argument for completions.
pub fn resolve_number<S: DataStore>(store: &S, arg: &NumberArg, action: Action) -> Result<Resolved> {
    let number = match (arg, action) {
        (NumberArg::Given(n), _) => *n,
        (NumberArg::Invalid(_), Action::Delete) => 0,
        _ => return Err(TodoError::MissingArgument(action)),
    };

    let pending = store.load_pending()?;
    let index = storage_index(number, pending.len()).ok_or(TodoError::InvalidIndex {
        number,
        action,
    })?;
    tracing::debug!(%arg, number, index, count = pending.len(), "resolved display number");

    Ok(Resolved {
        number,
        storage_index: index,
        pending,
    })
}

/// Turns a user error into an error message on an otherwise empty result.
/// Any other error is passed through.
pub fn recover_user_error(result: Result<CmdResult>) -> Result<CmdResult> {
    match result {
        Err(err) if err.is_user_error() => {
            tracing::debug!(error = %err, "command rejected input");
            let mut res = CmdResult::default();
            res.add_message(CmdMessage::error(err.to_string()));
            Ok(res)
        }
        other => other,
    }
}
