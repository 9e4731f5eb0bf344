use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// Config file looked up in the working directory when `--config` is not given
pub const CONFIG_FILE_NAME: &str = "todo.toml";

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError { path: PathBuf, source: io::Error },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Read and parse a config file. A missing file yields the defaults.
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(source) => {
            return Err(ConfigError::ReadError {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    toml::from_str(&text).map_err(|source| ConfigError::ParseError {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the config from an explicit path, or from `todo.toml` in `cwd`.
/// Only the implicit `todo.toml` may be absent.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<Config, ConfigError> {
    match explicit {
        Some(path) if !path.exists() => Err(ConfigError::ReadError {
            path: path.to_path_buf(),
            source: io::Error::from(io::ErrorKind::NotFound),
        }),
        Some(path) => read_config(path),
        None => read_config(&cwd.join(CONFIG_FILE_NAME)),
    }
}

/// Resolve the todo file: the `--file` override wins over `[storage] file`.
/// Relative paths are taken from `cwd`.
pub fn resolve_todo_file(config: &Config, override_path: Option<&Path>, cwd: &Path) -> PathBuf {
    let path = override_path.unwrap_or(&config.storage.file);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
