mod confirm;
mod navigate;
mod search;
mod wizard;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::session::{Effect, Mode, Session};

use confirm::{handle_confirm_delete, handle_confirm_delete_all};
use navigate::handle_view;
use search::handle_tag_search;
use wizard::handle_wizard;

/// A discrete input event, independent of how keys are captured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Esc,
    Backspace,
    Space,
    Char(char),
    /// Ctrl-C: quit from any mode
    Interrupt,
}

/// Map a terminal key event onto a [`Key`]. Releases, repeats of
/// non-press kinds, bare modifiers and unbound chords yield `None`.
pub fn key_from_event(key: KeyEvent) -> Option<Key> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let ctrl_or_alt = key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Key::Interrupt)
        }
        KeyCode::Char(_) if ctrl_or_alt => None,
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => {
            // Some terminals report Shift+d as 'd' with SHIFT set
            if key.modifiers.contains(KeyModifiers::SHIFT) && c.is_ascii_lowercase() {
                Some(Key::Char(c.to_ascii_uppercase()))
            } else {
                Some(Key::Char(c))
            }
        }
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Esc),
        KeyCode::Backspace => Some(Key::Backspace),
        _ => None,
    }
}

/// Dispatch a key on the current mode. Each handler consumes the mode it
/// was in and returns the next one.
pub(crate) fn handle_key(session: &mut Session, key: Key) -> Vec<Effect> {
    let mut effects = Vec::new();
    if key == Key::Interrupt {
        effects.push(Effect::Quit);
        return effects;
    }

    let mode = std::mem::take(&mut session.mode);
    session.mode = match mode {
        Mode::View => handle_view(session, key, &mut effects),
        Mode::Add(wizard) | Mode::Edit(wizard) => {
            handle_wizard(session, wizard, key, &mut effects)
        }
        Mode::ConfirmDelete { index } => {
            handle_confirm_delete(session, index, key, &mut effects)
        }
        Mode::ConfirmDeleteAll => handle_confirm_delete_all(session, key, &mut effects),
        Mode::Help => {
            session.status = "Exited help".to_string();
            Mode::View
        }
        Mode::TagSearch => handle_tag_search(session, key),
    };
    effects
}
