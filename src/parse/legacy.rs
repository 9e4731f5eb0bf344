use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::model::todo::{Priority, Todo, parse_due_date};

use super::record::{RecordDecoder, RecordFormat};

/// `[urgent]`, `[medium]` or `[low]` anywhere in the line
static PRIORITY_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[(urgent|medium|low)\]").expect("valid regex"));

/// `@token` at a word start; only calendar-valid tokens become the due date
static DUE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|\s)@(\S+)").expect("valid regex"));

/// Trailing ` #12345` id suffix
static ID_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+#[[:alnum:]]+$").expect("valid regex"));

/// Free-text lines written before the structured format:
///
/// ```text
/// [x] Buy milk @2025-01-01 [urgent] #48213377
/// ```
///
/// Every part is optional. Never fails: anything it cannot interpret stays in
/// the text.
pub struct LegacyDecoder;

impl RecordDecoder for LegacyDecoder {
    fn format(&self) -> RecordFormat {
        RecordFormat::Legacy
    }

    fn decode(&self, line: &str) -> Option<Todo> {
        Some(parse_legacy_line(line))
    }
}

/// Split a leading `[x]` / `[ ]` checkbox off the line
fn strip_checkbox(line: &str) -> (bool, &str) {
    for (marker, done) in [("[x]", true), ("[X]", true), ("[ ]", false)] {
        if let Some(rest) = line.strip_prefix(marker) {
            return (done, rest.trim_start());
        }
    }
    (false, line)
}

pub(crate) fn parse_legacy_line(line: &str) -> Todo {
    let line = line.trim();
    let (done, rest) = strip_checkbox(line);

    let rest = ID_SUFFIX.replace(rest, "");

    // Last priority token wins; all of them leave the text
    let priority = PRIORITY_TOKEN
        .captures_iter(&rest)
        .filter_map(|caps| Priority::parse(&caps[1]))
        .last()
        .unwrap_or_default();
    let rest = PRIORITY_TOKEN.replace_all(&rest, " ");

    let mut due_date = None;
    let rest = DUE_TOKEN.replace_all(&rest, |caps: &Captures| {
        if due_date.is_none()
            && let Some(date) = parse_due_date(&caps[2])
        {
            due_date = Some(date);
            return " ".to_string();
        }
        caps[0].to_string()
    });

    let text = rest.split_whitespace().collect::<Vec<_>>().join(" ");
    let text = if text.is_empty() { line.to_string() } else { text };

    Todo {
        text,
        priority,
        due_date,
        done,
        tags: Vec::new(),
    }
}
