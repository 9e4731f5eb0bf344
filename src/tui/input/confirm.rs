use crate::tui::session::{Effect, Mode, Session};

use super::Key;

fn is_confirm(key: Key) -> bool {
    matches!(key, Key::Char('y') | Key::Enter)
}

fn is_cancel(key: Key) -> bool {
    matches!(key, Key::Char('n') | Key::Esc)
}

pub(super) fn handle_confirm_delete(
    session: &mut Session,
    index: usize,
    key: Key,
    effects: &mut Vec<Effect>,
) -> Mode {
    if is_confirm(key) {
        confirm_delete(session, index, effects);
        Mode::View
    } else if is_cancel(key) {
        session.status = "Delete cancelled".to_string();
        Mode::View
    } else {
        Mode::ConfirmDelete { index }
    }
}

pub(super) fn handle_confirm_delete_all(
    session: &mut Session,
    key: Key,
    effects: &mut Vec<Effect>,
) -> Mode {
    if is_confirm(key) {
        session.todos.clear();
        // A full wipe is not undoable
        session.undo.clear();
        session.cursor = 0;
        session.status = "All todos deleted".to_string();
        effects.push(Effect::Save);
        Mode::View
    } else if is_cancel(key) {
        session.status = "Delete all cancelled".to_string();
        Mode::View
    } else {
        Mode::ConfirmDeleteAll
    }
}

fn confirm_delete(session: &mut Session, index: usize, effects: &mut Vec<Effect>) {
    let Some(item) = session.todos.remove(index) else {
        return;
    };
    session.undo.record(item, index);
    session.cursor = session.todos.clamped_cursor_after_removal(session.cursor);
    session.status = "Todo deleted (press 'u' to undo)".to_string();
    effects.push(Effect::Save);
}
