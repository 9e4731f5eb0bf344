use crate::model::todo::Todo;

use super::legacy::LegacyDecoder;

/// Which on-disk format a record was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    /// One JSON object per line (what `encode` writes)
    Structured,
    /// Historical free-text line: `[x] text @2025-01-01 [urgent] #12345`
    Legacy,
}

/// One record format the reader understands.
///
/// Decoders are tried in priority order; the first that returns `Some` wins.
pub trait RecordDecoder {
    fn format(&self) -> RecordFormat;

    /// Decode a single non-blank, trimmed line. `None` hands the line to the
    /// next decoder in the chain.
    fn decode(&self, line: &str) -> Option<Todo>;
}

/// The current JSON-per-line format
pub struct StructuredDecoder;

impl RecordDecoder for StructuredDecoder {
    fn format(&self) -> RecordFormat {
        RecordFormat::Structured
    }

    fn decode(&self, line: &str) -> Option<Todo> {
        if !line.starts_with('{') {
            return None;
        }
        let mut todo: Todo = serde_json::from_str(line).ok()?;
        todo.normalize();
        if todo.text.is_empty() {
            return None;
        }
        Some(todo)
    }
}

/// Decoders in the order they are attempted. The last entry never fails.
const DECODERS: &[&dyn RecordDecoder] = &[&StructuredDecoder, &LegacyDecoder];

/// Encode a todo as a single structured record line (no trailing newline)
pub fn encode(todo: &Todo) -> Result<String, serde_json::Error> {
    serde_json::to_string(todo)
}

/// Decode one line, reporting which format matched.
///
/// Returns `None` only for blank lines, which carry no record.
pub fn decode_record(line: &str) -> Option<(Todo, RecordFormat)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    DECODERS
        .iter()
        .find_map(|decoder| decoder.decode(line).map(|todo| (todo, decoder.format())))
}

/// Decode one line into a todo, whatever format it is in.
///
/// Unrecognised lines come back as best-effort text. Blank lines yield `None`.
pub fn decode(line: &str) -> Option<Todo> {
    decode_record(line).map(|(todo, _)| todo)
}
