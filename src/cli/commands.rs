use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "todo", about = concat!("[ ] todo v", env!("CARGO_PKG_VERSION"), " - a todo list for the terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Todo list file (overrides [storage] file)
    #[arg(short = 'f', long = "file", global = true)]
    pub file: Option<PathBuf>,

    /// Config file (default: ./todo.toml when present)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file (overrides [log] file)
    #[arg(long = "log-file", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every todo in list order
    List,
    /// Append a todo and save
    Add(AddArgs),
    /// Print the distinct tags, optionally filtered
    Tags(TagsArgs),
}

#[derive(Args)]
pub struct AddArgs {
    /// Todo text
    pub text: String,
    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    pub due: Option<String>,
    /// Priority: urgent, medium or low
    #[arg(short, long)]
    pub priority: Option<String>,
    /// Tag to attach (repeatable)
    #[arg(short, long = "tag")]
    pub tags: Vec<String>,
}

#[derive(Args)]
pub struct TagsArgs {
    /// Case-insensitive substring to match
    pub filter: Option<String>,
}
