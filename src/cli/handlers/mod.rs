use std::path::Path;

use tracing::info;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::store::TodoStore;
use crate::model::todo::{Priority, Todo, parse_due_date, parse_tags_csv};
use crate::ops::tags::{filter_tags, tag_counts};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run a non-interactive subcommand against the resolved todo file
pub fn dispatch(
    command: Commands,
    json: bool,
    todo_file: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = TodoStore::new(todo_file);
    match command {
        Commands::List => cmd_list(&store, json),
        Commands::Add(args) => cmd_add(&store, args),
        Commands::Tags(args) => cmd_tags(&store, args, json),
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(store: &TodoStore, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let todos = store.load()?;
    if json {
        let items: Vec<TodoJson> = todos
            .iter()
            .enumerate()
            .map(|(i, t)| todo_to_json(i, t))
            .collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for (i, todo) in todos.iter().enumerate() {
            println!("{}", format_todo_line(i, todo));
        }
    }
    Ok(())
}

fn cmd_tags(
    store: &TodoStore,
    args: TagsArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let todos = store.load()?;
    let matching = filter_tags(&todos, args.filter.as_deref().unwrap_or(""));
    if json {
        let counts = tag_counts(&todos);
        let items: Vec<TagJson> = counts
            .into_iter()
            .filter(|(tag, _)| matching.contains(tag))
            .map(|(tag, count)| TagJson { tag, count })
            .collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for tag in matching {
            println!("{}", tag);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

/// Validate the arguments the same way the add wizard validates its drafts
fn build_todo(args: AddArgs) -> Result<Todo, String> {
    let text = args.text.trim();
    if text.is_empty() {
        return Err("todo text is empty".to_string());
    }

    let due_date = match args.due.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(due) => Some(
            parse_due_date(due)
                .ok_or_else(|| format!("invalid due date '{}': use YYYY-MM-DD", due))?,
        ),
    };

    let priority = match args.priority.as_deref() {
        None => Priority::default(),
        Some(p) => Priority::parse(p).ok_or_else(|| {
            format!("invalid priority '{}': expected urgent, medium or low", p)
        })?,
    };

    // `--tag a,b` and `--tag a --tag b` are equivalent
    let tags = parse_tags_csv(&args.tags.join(","));

    Ok(Todo::new(text)
        .with_priority(priority)
        .with_due_date(due_date)
        .with_tags(tags))
}

fn cmd_add(store: &TodoStore, args: AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let todo = build_todo(args)?;
    let mut todos = store.load()?;
    todos.push(todo);
    store.save(&todos)?;
    info!(count = todos.len(), "added todo from command line");
    println!("Added todo #{}", todos.len());
    Ok(())
}
