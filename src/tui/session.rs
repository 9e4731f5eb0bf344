use crate::model::todo::{Priority, Todo, TodoList, parse_due_date, parse_tags_csv};
use crate::ops::tags::filter_tags;

use super::input::{self, Key};
use super::undo::UndoSlot;

/// Side effects requested by a transition, executed by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Persist the full list
    Save,
    /// Replace the list with what is on disk
    Reload,
    Quit,
}

/// Steps of the add/edit wizard, in the order they are visited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Text,
    DueDate,
    Priority,
    Tags,
}

impl WizardStep {
    /// Prompt shown in the status row when the step becomes active
    pub fn prompt(self) -> &'static str {
        match self {
            WizardStep::Text => "Type the todo text, Enter to continue, Esc to cancel",
            WizardStep::DueDate => "Enter due date (YYYY-MM-DD) or leave blank and press Enter",
            WizardStep::Priority => "Select priority with \u{2190}/\u{2192} and press Enter",
            WizardStep::Tags => "Enter tags separated by commas, Enter to save",
        }
    }
}

/// Drafts for one add or edit flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wizard {
    pub step: WizardStep,
    pub text: String,
    pub due: String,
    /// 0 urgent, 1 medium, 2 low
    pub priority_index: usize,
    pub tags_csv: String,
    /// Index of the item being edited; `None` when adding
    pub target: Option<usize>,
}

impl Wizard {
    /// Blank drafts for a new todo (priority preselected to medium)
    pub fn for_add() -> Self {
        Wizard {
            step: WizardStep::Text,
            text: String::new(),
            due: String::new(),
            priority_index: Priority::Medium.index(),
            tags_csv: String::new(),
            target: None,
        }
    }

    /// Drafts seeded from an existing todo, so untouched steps keep its values
    pub fn for_edit(index: usize, todo: &Todo) -> Self {
        Wizard {
            step: WizardStep::Text,
            text: todo.text.clone(),
            due: todo
                .due_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            priority_index: todo.priority.index(),
            tags_csv: todo.tags_csv(),
            target: Some(index),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.target.is_some()
    }

    pub fn priority(&self) -> Priority {
        Priority::from_index(self.priority_index)
    }

    /// Build the todo the drafts describe. `None` when the text is empty or
    /// the due date is not a calendar date.
    pub fn build(&self) -> Option<Todo> {
        let text = self.text.trim();
        if text.is_empty() {
            return None;
        }
        let due = self.due.trim();
        let due_date = if due.is_empty() {
            None
        } else {
            Some(parse_due_date(due)?)
        };
        Some(
            Todo::new(text)
                .with_priority(self.priority())
                .with_due_date(due_date)
                .with_tags(parse_tags_csv(&self.tags_csv)),
        )
    }

    /// Wrap back into the mode it belongs to
    pub(crate) fn into_mode(self) -> Mode {
        if self.is_edit() {
            Mode::Edit(self)
        } else {
            Mode::Add(self)
        }
    }
}

/// Current interaction mode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    View,
    Add(Wizard),
    Edit(Wizard),
    ConfirmDelete {
        index: usize,
    },
    ConfirmDeleteAll,
    Help,
    TagSearch,
}

pub const WELCOME_STATUS: &str = "Press 'a' to add, 'd' to delete, 'h' for help, 'q' to quit.";

/// Everything presentation needs to draw a frame.
///
/// Mutated only through [`update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub(crate) mode: Mode,
    pub(crate) todos: TodoList,
    pub(crate) cursor: usize,
    pub(crate) undo: UndoSlot,
    pub(crate) status: String,
    pub(crate) tag_filter: String,
}

impl Session {
    pub fn new(todos: TodoList) -> Self {
        Session {
            mode: Mode::View,
            todos,
            cursor: 0,
            undo: UndoSlot::new(),
            status: WELCOME_STATUS.to_string(),
            tag_filter: String::new(),
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn todos(&self) -> &TodoList {
        &self.todos
    }

    /// Cursor into [`Session::todos`]; meaningless when the list is empty
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn can_undo(&self) -> bool {
        self.undo.is_available()
    }

    pub fn tag_filter(&self) -> &str {
        &self.tag_filter
    }

    /// Active wizard drafts, when adding or editing
    pub fn wizard(&self) -> Option<&Wizard> {
        match &self.mode {
            Mode::Add(w) | Mode::Edit(w) => Some(w),
            _ => None,
        }
    }

    /// Tags matching the current tag search filter
    pub fn visible_tags(&self) -> Vec<String> {
        filter_tags(&self.todos, &self.tag_filter)
    }

    /// Swap in a freshly loaded list (reload), keeping the cursor in bounds
    pub fn replace_todos(&mut self, todos: TodoList) {
        self.todos = todos;
        self.cursor = self.todos.clamped_cursor_after_removal(self.cursor);
    }
}

/// The transition function: apply one key to a session.
pub fn update(mut session: Session, key: Key) -> (Session, Vec<Effect>) {
    let effects = input::handle_key(&mut session, key);
    (session, effects)
}
