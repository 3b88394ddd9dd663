use super::DataStore;
use crate::error::Result;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

pub struct FileStore {
    todo_path: PathBuf,
    done_path: PathBuf,
}

impl FileStore {
    pub fn new(todo_path: PathBuf, done_path: PathBuf) -> Self {
        Self {
            todo_path,
            done_path,
        }
    }

    #[cfg(test)]
    fn todo_path(&self) -> &Path {
        &self.todo_path
    }

    fn read_lines(path: &Path) -> Result<Vec<String>> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "list file missing, treating as empty");
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path)?;
        Ok(content
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn append_line(path: &Path, line: &str) -> Result<()> {
        ensure_parent(path)?;
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        write!(file, "{}{}", line, LINE_ENDING)?;
        Ok(())
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Write `content` to a sibling temp file, then rename it over `path`.
fn replace_file(path: &Path, content: &str) -> Result<()> {
    ensure_parent(path)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

impl DataStore for FileStore {
    fn load_pending(&self) -> Result<Vec<String>> {
        Self::read_lines(&self.todo_path)
    }

    fn append_pending(&mut self, text: &str) -> Result<()> {
        tracing::debug!(path = %self.todo_path.display(), "appending todo");
        Self::append_line(&self.todo_path, text)
    }

    fn save_pending(&mut self, todos: &[String]) -> Result<()> {
        tracing::debug!(
            path = %self.todo_path.display(),
            count = todos.len(),
            "rewriting pending list"
        );
        let content: String = todos
            .iter()
            .map(|todo| format!("{}{}", todo, LINE_ENDING))
            .collect();
        replace_file(&self.todo_path, &content)
    }

    fn load_completed(&self) -> Result<Vec<String>> {
        Self::read_lines(&self.done_path)
    }

    fn append_completed(&mut self, line: &str) -> Result<()> {
        tracing::debug!(path = %self.done_path.display(), "appending completed entry");
        Self::append_line(&self.done_path, line)
    }
}
