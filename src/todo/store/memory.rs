use super::DataStore;
use crate::error::Result;

/// Keeps both lists in memory. Used by command and API tests.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    pending: Vec<String>,
    completed: Vec<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn load_pending(&self) -> Result<Vec<String>> {
        Ok(self
            .pending
            .iter()
            .filter(|line| !line.is_empty())
            .cloned()
            .collect())
    }

    fn append_pending(&mut self, text: &str) -> Result<()> {
        self.pending.push(text.to_string());
        Ok(())
    }

    fn save_pending(&mut self, todos: &[String]) -> Result<()> {
        self.pending = todos.to_vec();
        Ok(())
    }

    fn load_completed(&self) -> Result<Vec<String>> {
        Ok(self
            .completed
            .iter()
            .filter(|line| !line.is_empty())
            .cloned()
            .collect())
    }

    fn append_completed(&mut self, line: &str) -> Result<()> {
        self.completed.push(line.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds `Task 1` .. `Task count` in that order, so `Task count` is displayed as `[1]`.
        pub fn with_todos(mut self, count: usize) -> Self {
            for i in 0..count {
                self.store.append_pending(&format!("Task {}", i + 1)).unwrap();
            }
            self
        }

        pub fn with_todo(mut self, text: &str) -> Self {
            self.store.append_pending(text).unwrap();
            self
        }

        pub fn with_completed(mut self, line: &str) -> Self {
            self.store.append_completed(line).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn starts_empty() {
        let store = InMemoryStore::new();
        assert!(store.load_pending().unwrap().is_empty());
        assert!(store.load_completed().unwrap().is_empty());
    }

    #[test]
    fn fixture_keeps_storage_order() {
        let fixture = StoreFixture::new().with_todos(3);
        assert_eq!(
            fixture.store.load_pending().unwrap(),
            vec!["Task 1", "Task 2", "Task 3"]
        );
    }

    #[test]
    fn save_replaces_pending() {
        let mut store = StoreFixture::new().with_todos(2).store;
        store.save_pending(&["only".to_string()]).unwrap();
        assert_eq!(store.load_pending().unwrap(), vec!["only"]);
    }
}
