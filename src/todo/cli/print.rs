use colored::Colorize;
use todo::api::{CmdMessage, CmdResult, MessageLevel};
use todo::index::DisplayTodo;

pub(crate) fn print_result(result: &CmdResult) {
    print_todos(&result.listed_todos);
    if let Some(report) = &result.report {
        println!("{}", report);
    }
    print_messages(&result.messages);
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_todos(todos: &[DisplayTodo]) {
    for todo in todos {
        println!("{} {}", format!("[{}]", todo.number).yellow(), todo.text);
    }
}
