use thiserror::Error;

/// The operation a user error was raised for. Selects the wording of the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Delete,
    Complete,
}

impl Action {
    fn missing_argument_message(self) -> &'static str {
        match self {
            Action::Add => "Error: Missing todo string. Nothing added!",
            Action::Delete => "Error: Missing NUMBER for deleting todo.",
            Action::Complete => "Error: Missing NUMBER for marking todo as done.",
        }
    }

    fn nothing_done(self) -> &'static str {
        match self {
            Action::Add => "Nothing added.",
            Action::Delete => "Nothing deleted.",
            Action::Complete => "Nothing Marked as done.",
        }
    }
}

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("{}", .0.missing_argument_message())]
    MissingArgument(Action),

    #[error("Error: todo #{} does not exist. {}", .number, .action.nothing_done())]
    InvalidIndex { number: i64, action: Action },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl TodoError {
    /// User errors are reported as messages and never fail the process.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            TodoError::MissingArgument(_) | TodoError::InvalidIndex { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, TodoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_argument_messages() {
        assert_eq!(
            TodoError::MissingArgument(Action::Add).to_string(),
            "Error: Missing todo string. Nothing added!"
        );
        assert_eq!(
            TodoError::MissingArgument(Action::Delete).to_string(),
            "Error: Missing NUMBER for deleting todo."
        );
        assert_eq!(
            TodoError::MissingArgument(Action::Complete).to_string(),
            "Error: Missing NUMBER for marking todo as done."
        );
    }

    #[test]
    fn invalid_index_messages() {
        let err = TodoError::InvalidIndex {
            number: 4,
            action: Action::Delete,
        };
        assert_eq!(err.to_string(), "Error: todo #4 does not exist. Nothing deleted.");

        let err = TodoError::InvalidIndex {
            number: 0,
            action: Action::Complete,
        };
        assert_eq!(
            err.to_string(),
            "Error: todo #0 does not exist. Nothing Marked as done."
        );
    }

    #[test]
    fn io_errors_are_not_user_errors() {
        let err = TodoError::from(std::io::Error::other("disk full"));
        assert!(!err.is_user_error());
        assert!(TodoError::MissingArgument(Action::Add).is_user_error());
    }
}
