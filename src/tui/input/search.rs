use crate::tui::session::{Mode, Session};
use crate::util::unicode::pop_grapheme;

use super::Key;

/// Live tag filter editing. Never touches the todos.
pub(super) fn handle_tag_search(session: &mut Session, key: Key) -> Mode {
    match key {
        Key::Esc | Key::Enter => {
            session.status = "Exited tag search".to_string();
            return Mode::View;
        }
        Key::Char(c) => session.tag_filter.push(c),
        Key::Space => session.tag_filter.push(' '),
        Key::Backspace => pop_grapheme(&mut session.tag_filter),
        _ => {}
    }
    let matches = session.visible_tags().len();
    session.status = match matches {
        0 => "No matching tags".to_string(),
        1 => "1 matching tag".to_string(),
        n => format!("{n} matching tags"),
    };
    Mode::TagSearch
}
