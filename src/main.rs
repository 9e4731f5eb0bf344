use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use clap::Parser;
use todo_tui::cli::commands::Cli;
use todo_tui::cli::handlers;
use todo_tui::io::config_io::{load_config, resolve_todo_file};
use todo_tui::tui::{self, RunOptions};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let config = load_config(cli.config.as_deref(), &cwd)?;

    // The TUI owns the terminal, so logs only ever go to a file
    let log_file = cli.log_file.as_deref().or(config.log.file.as_deref());
    if let Some(path) = log_file {
        init_logging(&cwd.join(path))?;
    }

    let todo_file = resolve_todo_file(&config, cli.file.as_deref(), &cwd);

    match cli.command {
        // No subcommand → launch TUI
        None => tui::run(RunOptions { todo_file, config }),
        Some(command) => handlers::dispatch(command, cli.json, &todo_file),
    }
}

/// Append tracing output to `path`, filtered by `RUST_LOG` (default `info`)
fn init_logging(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| -> Box<dyn std::error::Error> { e })?;
    Ok(())
}
