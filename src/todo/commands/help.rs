use crate::commands::{CmdMessage, CmdResult};

pub const USAGE: &str = r#"Usage :-
$ ./todo add "todo item"  # Add a new todo
$ ./todo ls               # Show remaining todos
$ ./todo del NUMBER       # Delete a todo
$ ./todo done NUMBER      # Complete a todo
$ ./todo help             # Show usage
$ ./todo report           # Statistics"#;

pub fn run() -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(USAGE));
    result
}
