use chrono::NaiveDate;
use std::fmt;

/// Calendar date format used for completion entries and reports.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A finished task as it is written to the completed list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedTodo {
    pub date: NaiveDate,
    pub text: String,
}

impl CompletedTodo {
    pub fn new(date: NaiveDate, text: impl Into<String>) -> Self {
        Self {
            date,
            text: text.into(),
        }
    }
}

impl fmt::Display for CompletedTodo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x {} {}", self.date.format(DATE_FORMAT), self.text)
    }
}

/// Pending and completed counts for a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub date: NaiveDate,
    pub pending: usize,
    pub completed: usize,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Pending : {} Completed : {}",
            self.date.format(DATE_FORMAT),
            self.pending,
            self.completed
        )
    }
}
