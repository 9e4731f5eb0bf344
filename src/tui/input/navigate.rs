use crate::tui::session::{Effect, Mode, Session, Wizard, WizardStep};

use super::Key;

pub(super) fn handle_view(session: &mut Session, key: Key, effects: &mut Vec<Effect>) -> Mode {
    match key {
        Key::Char('q') => effects.push(Effect::Quit),
        Key::Up | Key::Char('k') => {
            session.cursor = session.cursor.saturating_sub(1);
        }
        Key::Down | Key::Char('j') => {
            if session.cursor + 1 < session.todos.len() {
                session.cursor += 1;
            }
        }
        Key::Char('a') => {
            session.status = WizardStep::Text.prompt().to_string();
            return Mode::Add(Wizard::for_add());
        }
        Key::Char('e') => {
            if let Some(todo) = session.todos.get(session.cursor) {
                let wizard = Wizard::for_edit(session.cursor, todo);
                session.status = format!("Editing todo #{}", session.cursor + 1);
                return Mode::Edit(wizard);
            }
        }
        Key::Char('d') => {
            if !session.todos.is_empty() {
                session.status = format!("Delete todo #{}? (y/n)", session.cursor + 1);
                return Mode::ConfirmDelete {
                    index: session.cursor,
                };
            }
        }
        Key::Char('D') => {
            if !session.todos.is_empty() {
                session.status = "Are you sure you want to delete ALL todos? (y/n)".to_string();
                return Mode::ConfirmDeleteAll;
            }
        }
        Key::Space => toggle_done(session, effects),
        Key::Char('r') => {
            effects.push(Effect::Reload);
            session.status = "Reloaded todos from file".to_string();
        }
        Key::Char('u') => undo_delete(session, effects),
        Key::Char('h') | Key::Char('?') => {
            session.status = "Help (press any key to return)".to_string();
            return Mode::Help;
        }
        Key::Char('t') | Key::Char('/') => {
            session.tag_filter.clear();
            session.status = "Tag search: type to filter, Esc to return".to_string();
            return Mode::TagSearch;
        }
        _ => {}
    }
    Mode::View
}

fn toggle_done(session: &mut Session, effects: &mut Vec<Effect>) {
    let Some(todo) = session.todos.get_mut(session.cursor) else {
        return;
    };
    todo.done = !todo.done;
    session.status = if todo.done {
        "Marked done".to_string()
    } else {
        "Marked not done".to_string()
    };
    effects.push(Effect::Save);
}

fn undo_delete(session: &mut Session, effects: &mut Vec<Effect>) {
    match session.undo.restore_into(&mut session.todos) {
        Some(index) => {
            session.cursor = index;
            session.status = "Undo: restored deleted todo".to_string();
            effects.push(Effect::Save);
        }
        None => {
            session.status = "Nothing to undo".to_string();
        }
    }
}
