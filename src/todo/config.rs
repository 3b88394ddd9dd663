use crate::error::{Result, TodoError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "todo-config.json";
const DEFAULT_TODO_FILE: &str = "todo.txt";
const DEFAULT_DONE_FILE: &str = "done.txt";

/// Locations of the two list files, stored in `todo-config.json`.
///
/// Relative paths are resolved against the directory the config was loaded for.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TodoConfig {
    /// Pending list, one todo per line.
    #[serde(default = "default_todo_file")]
    pub todo_file: PathBuf,

    /// Completed list, `x <date> <text>` per line.
    #[serde(default = "default_done_file")]
    pub done_file: PathBuf,
}

fn default_todo_file() -> PathBuf {
    PathBuf::from(DEFAULT_TODO_FILE)
}

fn default_done_file() -> PathBuf {
    PathBuf::from(DEFAULT_DONE_FILE)
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            todo_file: default_todo_file(),
            done_file: default_done_file(),
        }
    }
}

impl TodoConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: TodoConfig = serde_json::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// Apply overrides from the environment or command line. `None` keeps the current value.
    pub fn with_overrides(mut self, todo_file: Option<PathBuf>, done_file: Option<PathBuf>) -> Self {
        if let Some(path) = todo_file {
            self.todo_file = path;
        }
        if let Some(path) = done_file {
            self.done_file = path;
        }
        self
    }

    /// Absolute paths of both lists, resolved against `base`.
    pub fn resolve(&self, base: &Path) -> Result<(PathBuf, PathBuf)> {
        self.validate()?;
        Ok((base.join(&self.todo_file), base.join(&self.done_file)))
    }

    fn validate(&self) -> Result<()> {
        if self.todo_file.as_os_str().is_empty() || self.done_file.as_os_str().is_empty() {
            return Err(TodoError::Config("list file paths cannot be empty".into()));
        }
        if self.todo_file == self.done_file {
            return Err(TodoError::Config(format!(
                "pending and completed lists must be different files (both are {})",
                self.todo_file.display()
            )));
        }
        Ok(())
    }
}
