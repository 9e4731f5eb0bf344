use ratatui::text::Span;

use crate::model::Todo;
use crate::util::unicode;

/// Markdown-style checkbox for a todo
pub(super) fn checkbox(todo: &Todo) -> &'static str {
    if todo.done { "[x]" } else { "[ ]" }
}

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// First row to draw so that `cursor` stays inside a window of `height` rows
pub(super) fn scroll_offset(cursor: usize, height: usize) -> usize {
    if height == 0 || cursor < height {
        0
    } else {
        cursor + 1 - height
    }
}
