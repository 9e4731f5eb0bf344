use crate::model::todo::{Todo, parse_due_date};
use crate::tui::session::{Effect, Mode, Session, Wizard, WizardStep};
use crate::util::unicode::pop_grapheme;

use super::Key;

/// Longest accepted due-date draft (`YYYY-MM-DD`)
const DUE_DRAFT_MAX: usize = 10;

const PRIORITY_MAX_INDEX: usize = 2;

pub(super) fn handle_wizard(
    session: &mut Session,
    mut wizard: Wizard,
    key: Key,
    effects: &mut Vec<Effect>,
) -> Mode {
    if key == Key::Esc {
        session.status = cancel_message(&wizard).to_string();
        return Mode::View;
    }

    match wizard.step {
        WizardStep::Text => match key {
            Key::Enter => {
                if wizard.text.trim().is_empty() {
                    session.status = if wizard.is_edit() {
                        "Edit cancelled: empty text".to_string()
                    } else {
                        "Empty todo not added".to_string()
                    };
                    return Mode::View;
                }
                advance(session, &mut wizard, WizardStep::DueDate);
            }
            _ => edit_text(&mut wizard.text, key),
        },
        WizardStep::DueDate => match key {
            Key::Enter => {
                let due = wizard.due.trim();
                if !due.is_empty() && parse_due_date(due).is_none() {
                    session.status = "Invalid date format. Use YYYY-MM-DD.".to_string();
                } else {
                    advance(session, &mut wizard, WizardStep::Priority);
                }
            }
            Key::Backspace => {
                wizard.due.pop();
            }
            Key::Char(c)
                if (c.is_ascii_digit() || c == '-') && wizard.due.len() < DUE_DRAFT_MAX =>
            {
                wizard.due.push(c);
            }
            _ => {}
        },
        WizardStep::Priority => match key {
            Key::Left => wizard.priority_index = wizard.priority_index.saturating_sub(1),
            Key::Right => {
                wizard.priority_index = (wizard.priority_index + 1).min(PRIORITY_MAX_INDEX)
            }
            Key::Enter => advance(session, &mut wizard, WizardStep::Tags),
            _ => {}
        },
        WizardStep::Tags => match key {
            Key::Enter => return commit(session, wizard, effects),
            _ => edit_text(&mut wizard.tags_csv, key),
        },
    }
    wizard.into_mode()
}

fn advance(session: &mut Session, wizard: &mut Wizard, step: WizardStep) {
    wizard.step = step;
    session.status = step.prompt().to_string();
}

/// Free-text editing shared by the text and tags steps
fn edit_text(buffer: &mut String, key: Key) {
    match key {
        Key::Char(c) => buffer.push(c),
        Key::Space => buffer.push(' '),
        Key::Backspace => pop_grapheme(buffer),
        _ => {}
    }
}

fn cancel_message(wizard: &Wizard) -> &'static str {
    if wizard.is_edit() {
        "Edit cancelled"
    } else {
        "Add cancelled"
    }
}

/// Apply the finished wizard: append (add) or replace in place (edit)
fn commit(session: &mut Session, wizard: Wizard, effects: &mut Vec<Effect>) -> Mode {
    let Some(todo) = wizard.build() else {
        session.status = cancel_message(&wizard).to_string();
        return Mode::View;
    };

    match wizard.target {
        None => {
            session.todos.push(todo);
            session.status = "Added todo".to_string();
            effects.push(Effect::Save);
        }
        Some(index) => match session.todos.get_mut(index) {
            Some(existing) => {
                *existing = Todo {
                    done: existing.done,
                    ..todo
                };
                session.status = "Todo edited".to_string();
                effects.push(Effect::Save);
            }
            None => {
                session.status = "Edit cancelled: todo no longer exists".to_string();
            }
        },
    }
    Mode::View
}
