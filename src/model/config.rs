use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Default data file, shared with lists written by the legacy free-text format
pub const DEFAULT_TODO_FILE: &str = "todolist.txt";

/// Configuration from todo.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the todo list file, relative to the working directory
    #[serde(default = "default_todo_file")]
    pub file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            file: default_todo_file(),
        }
    }
}

fn default_todo_file() -> PathBuf {
    PathBuf::from(DEFAULT_TODO_FILE)
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the key hint line under the status row
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Color overrides by theme slot name, as `#RRGGBB`
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Per-tag colors, as `#RRGGBB`
    #[serde(default)]
    pub tag_colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
            tag_colors: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogConfig {
    /// Where to write tracing output. Logging is off when unset.
    #[serde(default)]
    pub file: Option<PathBuf>,
}
