//! Maps raw command-line words onto commands.
//!
//! Command names are matched case-insensitively after trimming. Anything
//! unrecognized, including no command at all, routes to [`Command::Help`].

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    List,
    Add,
    Delete,
    Done,
    Report,
}

impl Command {
    pub fn route(raw: Option<&str>) -> Self {
        match raw.map(Command::from_str) {
            Some(Ok(cmd)) => cmd,
            Some(Err(unknown)) => {
                tracing::debug!(command = %unknown, "unknown command, showing help");
                Command::Help
            }
            None => Command::Help,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::List => "ls",
            Command::Add => "add",
            Command::Delete => "del",
            Command::Done => "done",
            Command::Report => "report",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "help" => Ok(Command::Help),
            "ls" => Ok(Command::List),
            "add" => Ok(Command::Add),
            "del" => Ok(Command::Delete),
            "done" => Ok(Command::Done),
            "report" => Ok(Command::Report),
            _ => Err(s.to_string()),
        }
    }
}

/// A routed command and its sole argument, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub argument: Option<String>,
}

impl Invocation {
    /// Builds an invocation from the first two positional words. Further words are ignored.
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let first = args.next();
        let argument = args.next();
        Self {
            command: Command::route(first.as_deref()),
            argument,
        }
    }
}
