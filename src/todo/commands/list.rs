use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_todos;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let pending = store.load_pending()?;
    tracing::debug!(count = pending.len(), "listing pending todos");

    let mut result = CmdResult::default();
    if pending.is_empty() {
        result.add_message(CmdMessage::info("There are no pending todos!"));
    }
    Ok(result.with_listed_todos(index_todos(pending)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn newest_is_one_listed_first_oldest_is_k_listed_last() {
        let store = StoreFixture::new().with_todos(3).store;
        let result = run(&store).unwrap();
        let numbers: Vec<usize> = result.listed_todos.iter().map(|t| t.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        let lines: Vec<String> = result.listed_todos.iter().map(|t| t.to_string()).collect();
        assert_eq!(lines, vec!["[1] Task 3", "[2] Task 2", "[3] Task 1"]);
    }

    #[test]
    fn empty_list_says_so() {
        let store = InMemoryStore::new();
        let result = run(&store).unwrap();
        assert!(result.listed_todos.is_empty());
        assert_eq!(result.messages[0].content, "There are no pending todos!");
    }

    #[test]
    fn skips_empty_lines() {
        let store = StoreFixture::new()
            .with_todo("a")
            .with_todo("")
            .with_todo("b")
            .store;
        let result = run(&store).unwrap();
        let lines: Vec<String> = result.listed_todos.iter().map(|t| t.to_string()).collect();
        assert_eq!(lines, vec!["[1] b", "[2] a"]);
    }
}
