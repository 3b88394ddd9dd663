//! # Display Numbering
//!
//! Pending todos are stored oldest-first (append order) but shown newest-first.
//! The number a user sees is therefore derived from position, never stored:
//!
//! ```text
//! storage index   0        1        2
//! todo.txt        water    feed     walk
//! display number  [3]      [2]      [1]
//! ```
//!
//! For a list of length `n`, display number `d` maps to storage index `n - d`.
//! Only `1..=n` is valid. Because every command reads the file fresh, a number is
//! only meaningful against the list it was computed from.

use std::fmt;
use std::str::FromStr;

/// A pending todo paired with the number it is displayed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTodo {
    pub number: usize,
    pub text: String,
}

impl fmt::Display for DisplayTodo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.number, self.text)
    }
}

/// Assigns display numbers to todos given in storage order.
///
/// The returned list is newest first: the last stored line is `[1]`.
pub fn index_todos(todos: Vec<String>) -> Vec<DisplayTodo> {
    let count = todos.len();
    todos
        .into_iter()
        .enumerate()
        .rev()
        .map(|(storage_index, text)| DisplayTodo {
            number: count - storage_index,
            text,
        })
        .collect()
}

/// Converts a display number into a storage index for a list of `count` items.
///
/// Returns `None` when the number is outside `1..=count`.
pub fn storage_index(number: i64, count: usize) -> Option<usize> {
    let number = usize::try_from(number).ok()?;
    if number < 1 || number > count {
        return None;
    }
    Some(count - number)
}

/// The parsed form of a numeric command argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberArg {
    /// No argument was supplied.
    Missing,
    /// An argument was supplied but is not an integer.
    Invalid(String),
    Given(i64),
}

impl NumberArg {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => NumberArg::Missing,
            Some(s) => s.parse().unwrap_or_else(|_| NumberArg::Invalid(s.to_string())),
        }
    }
}

impl FromStr for NumberArg {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(NumberArg::Given)
    }
}

impl fmt::Display for NumberArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberArg::Missing => write!(f, "<missing>"),
            NumberArg::Invalid(raw) => write!(f, "\"{}\"", raw),
            NumberArg::Given(n) => write!(f, "{}", n),
        }
    }
}
