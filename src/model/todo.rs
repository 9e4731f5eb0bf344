use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Todo priority, ordered from most to least pressing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Urgent,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// All priorities in selector order (index 0..=2)
    pub const ALL: [Priority; 3] = [Priority::Urgent, Priority::Medium, Priority::Low];

    /// Map a selector index onto a priority. Out-of-range indices clamp to `Low`.
    pub fn from_index(index: usize) -> Priority {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }

    /// Position of this priority in the selector
    pub fn index(self) -> usize {
        match self {
            Priority::Urgent => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Urgent => "urgent",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Parse a bare priority word (`urgent`, `medium`, `low`), case-insensitive
    pub fn parse(s: &str) -> Option<Priority> {
        match s.trim().to_ascii_lowercase().as_str() {
            "urgent" => Some(Priority::Urgent),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Display text, always trimmed and non-empty once stored
    pub text: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub done: bool,
    /// Tags in display order, no empties, no duplicates
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Todo {
    /// Create an open, medium-priority todo with no due date or tags
    pub fn new(text: impl Into<String>) -> Self {
        Todo {
            text: text.into().trim().to_string(),
            priority: Priority::Medium,
            due_date: None,
            done: false,
            tags: Vec::new(),
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags = clean_tags(tags);
        self
    }

    /// Re-establish the stored-form invariants: trimmed text, clean tags.
    pub fn normalize(&mut self) {
        let trimmed = self.text.trim();
        if trimmed.len() != self.text.len() {
            self.text = trimmed.to_string();
        }
        self.tags = clean_tags(&self.tags);
    }

    /// True when the todo is open and its due date lies before `today`
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.done && self.due_date.is_some_and(|due| due < today)
    }

    /// Tags rendered as a comma-separated list, as the wizard edits them
    pub fn tags_csv(&self) -> String {
        self.tags.join(", ")
    }
}

/// Trim tags, dropping empty entries and later duplicates (first occurrence wins).
pub fn clean_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.as_ref().trim();
        if tag.is_empty() || out.iter().any(|t| t == tag) {
            continue;
        }
        out.push(tag.to_string());
    }
    out
}

/// Split a comma-separated tag string into clean tags
pub fn parse_tags_csv(csv: &str) -> Vec<String> {
    clean_tags(csv.split(','))
}

/// Parse a strict `YYYY-MM-DD` calendar date.
///
/// chrono accepts single-digit months and days for `%m`/`%d`, so the shape is
/// checked first.
pub fn parse_due_date(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shaped {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Ordered list of todos, the unit of persistence.
///
/// Index bookkeeping (clamped inserts, cursor clamping after removal) lives
/// here so callers never re-derive it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<Todo>,
}

impl TodoList {
    pub fn new() -> Self {
        TodoList { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Todo> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Todo> {
        self.items.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Todo] {
        &self.items
    }

    pub fn push(&mut self, todo: Todo) {
        self.items.push(todo);
    }

    /// Insert at `min(index, len)` and return the index actually used
    pub fn splice_at(&mut self, index: usize, todo: Todo) -> usize {
        let at = index.min(self.items.len());
        self.items.insert(at, todo);
        at
    }

    /// Remove the item at `index`, or `None` when out of range
    pub fn remove(&mut self, index: usize) -> Option<Todo> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Clamp a cursor into `[0, len-1]` after the list shrank (0 when empty)
    pub fn clamped_cursor_after_removal(&self, cursor: usize) -> usize {
        cursor.min(self.items.len().saturating_sub(1))
    }
}

impl From<Vec<Todo>> for TodoList {
    fn from(items: Vec<Todo>) -> Self {
        TodoList { items }
    }
}

impl FromIterator<Todo> for TodoList {
    fn from_iter<T: IntoIterator<Item = Todo>>(iter: T) -> Self {
        TodoList {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
