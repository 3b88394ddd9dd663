//! # Storage Layer
//!
//! The [`DataStore`] trait abstracts the two line-oriented lists the tool keeps:
//! the pending list and the completed list.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage in two plain text files
//!   - pending list (`todo.txt`): one todo per line, oldest first
//!   - completed list (`done.txt`): `x YYYY-MM-DD <text>` per line, append-only
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!
//! ## Contract
//!
//! - A list that does not exist yet reads as empty.
//! - Loaded lists never contain empty lines.
//! - `save_pending` replaces the whole pending list; there are no in-place edits.
//! - The completed list only ever grows.

use crate::error::Result;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Pending todos in storage order (oldest first)
    fn load_pending(&self) -> Result<Vec<String>>;

    /// Append one todo to the end of the pending list
    fn append_pending(&mut self, text: &str) -> Result<()>;

    /// Replace the pending list
    fn save_pending(&mut self, todos: &[String]) -> Result<()>;

    /// Completed entries in completion order
    fn load_completed(&self) -> Result<Vec<String>>;

    /// Append one formatted entry to the completed list
    fn append_completed(&mut self, line: &str) -> Result<()>;
}
