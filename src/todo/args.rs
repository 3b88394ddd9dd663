use clap::Parser;
use std::path::PathBuf;

/// Options go before the command. Everything from the command on is passed through as-is,
/// so `todo add -h` stores `-h` and an unknown leading flag falls back to usage.
#[derive(Parser, Debug)]
#[command(name = "todo", version, disable_help_flag = true)]
#[command(about = "Plain-text todo list for the command line", long_about = None)]
pub struct Cli {
    /// Pending list file [default: todo.txt]
    #[arg(long, env = "TODO_FILE", value_name = "PATH")]
    pub todo_file: Option<PathBuf>,

    /// Completed list file [default: done.txt]
    #[arg(long, env = "TODO_DONE_FILE", value_name = "PATH")]
    pub done_file: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// COMMAND (help, ls, add, del, done, report) followed by its argument
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub words: Vec<String>,
}
