use crate::index::DisplayTodo;
use crate::model::Report;

pub mod add;
pub mod delete;
pub mod done;
pub mod help;
pub mod helpers;
pub mod list;
pub mod report;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Todos added, removed or completed by the command, as stored text.
    pub affected_todos: Vec<String>,
    pub listed_todos: Vec<DisplayTodo>,
    pub report: Option<Report>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_todos(mut self, todos: Vec<String>) -> Self {
        self.affected_todos = todos;
        self
    }

    pub fn with_listed_todos(mut self, todos: Vec<DisplayTodo>) -> Self {
        self.listed_todos = todos;
        self
    }

    pub fn with_report(mut self, report: Report) -> Self {
        self.report = Some(report);
        self
    }

    /// True when the command reported a user error instead of doing its work.
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
