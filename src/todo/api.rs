//! # API Facade
//!
//! The API layer is a thin facade over the command layer and the single entry point
//! for every todo operation.
//!
//! It:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (raw number arguments become [`NumberArg`] parse results)
//! - **Fixes "today"** once per instance so every operation in an invocation agrees on the date
//!
//! It does not print, format or exit. `TodoApi<S: DataStore>` is generic over the
//! storage backend: `FileStore` in production, `InMemoryStore` in tests.

use crate::commands;
use crate::error::Result;
use crate::index::NumberArg;
use crate::router::{Command, Invocation};
use crate::store::DataStore;
use chrono::{Local, NaiveDate};

pub struct TodoApi<S: DataStore> {
    store: S,
    today: NaiveDate,
}

impl<S: DataStore> TodoApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            today: Local::now().date_naive(),
        }
    }

    /// Use a fixed date instead of the local calendar date.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn list_todos(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn add_todo(&mut self, text: Option<&str>) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, text)
    }

    pub fn delete_todo(&mut self, number: Option<&str>) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, &NumberArg::parse(number))
    }

    pub fn complete_todo(&mut self, number: Option<&str>) -> Result<commands::CmdResult> {
        commands::done::run(&mut self.store, &NumberArg::parse(number), self.today)
    }

    pub fn report(&self) -> Result<commands::CmdResult> {
        commands::report::run(&self.store, self.today)
    }

    pub fn help(&self) -> commands::CmdResult {
        commands::help::run()
    }

    /// Runs a routed invocation.
    pub fn dispatch(&mut self, invocation: &Invocation) -> Result<commands::CmdResult> {
        let arg = invocation.argument.as_deref();
        tracing::debug!(command = %invocation.command, ?arg, "dispatching");
        match invocation.command {
            Command::Help => Ok(self.help()),
            Command::List => self.list_todos(),
            Command::Add => self.add_todo(arg),
            Command::Delete => self.delete_todo(arg),
            Command::Done => self.complete_todo(arg),
            Command::Report => self.report(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
