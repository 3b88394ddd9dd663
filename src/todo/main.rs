use clap::Parser;
use clap::error::ErrorKind;
use todo::api::TodoApi;
use todo::commands;
use todo::config::TodoConfig;
use todo::error::Result;
use todo::router::Invocation;
use todo::store::fs::FileStore;
use tracing_subscriber::EnvFilter;

mod args;
mod cli;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::DisplayVersion => {
            e.print()?;
            return Ok(());
        }
        Err(e) => {
            // Bad options count as a user error: usage on stdout, exit 0.
            e.print()?;
            cli::print_result(&commands::help::run());
            return Ok(());
        }
    };
    init_logging(cli.verbose);

    let mut api = init_api(&cli)?;
    let invocation = Invocation::from_args(cli.words.iter().cloned());
    let result = api.dispatch(&invocation)?;
    cli::print_result(&result);
    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn init_api(cli: &Cli) -> Result<TodoApi<FileStore>> {
    let cwd = std::env::current_dir()?;
    let config = TodoConfig::load(&cwd)?
        .with_overrides(cli.todo_file.clone(), cli.done_file.clone());
    let (todo_path, done_path) = config.resolve(&cwd)?;
    tracing::debug!(
        todo = %todo_path.display(),
        done = %done_path.display(),
        "using list files"
    );

    Ok(TodoApi::new(FileStore::new(todo_path, done_path)))
}
