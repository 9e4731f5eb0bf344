use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::model::todo::TodoList;
use crate::parse::{RecordFormat, decode_record, encode};

/// Error type for todo list persistence
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("could not write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("could not encode todo: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Reads and rewrites the whole todo list file, one record per line.
///
/// There is no partial update: every save replaces the file.
#[derive(Debug, Clone)]
pub struct TodoStore {
    path: PathBuf,
}

impl TodoStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TodoStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full list. A missing file is an empty list.
    pub fn load(&self) -> Result<TodoList, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "todo file missing, starting empty");
                return Ok(TodoList::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let mut legacy = 0usize;
        let list: TodoList = content
            .lines()
            .filter_map(decode_record)
            .map(|(todo, format)| {
                if format == RecordFormat::Legacy {
                    legacy += 1;
                }
                todo
            })
            .collect();

        if legacy > 0 {
            warn!(
                path = %self.path.display(),
                legacy,
                "read legacy records; they will be rewritten on next save"
            );
        }
        info!(path = %self.path.display(), count = list.len(), "loaded todos");
        Ok(list)
    }

    /// Replace the file with the encoded list, in list order.
    pub fn save(&self, list: &TodoList) -> Result<(), StoreError> {
        let mut content = String::new();
        for todo in list {
            content.push_str(&encode(todo)?);
            content.push('\n');
        }

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        atomic_write(&self.path, content.as_bytes()).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), count = list.len(), "saved todos");
        Ok(())
    }
}

/// Write via a temp file in the same directory, then rename over the target
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
