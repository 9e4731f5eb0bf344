use chrono::NaiveDate;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::io::store::TodoStore;
use crate::model::{Priority, Todo, TodoList, UiConfig};
use crate::tui::app::App;
use crate::tui::input::Key;
use crate::tui::session::{Session, update};

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Fixed "today" so overdue rendering is deterministic
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

/// Build an App over the given todos. The store is never written by render tests.
pub fn app_with(todos: TodoList) -> App {
    let store = TodoStore::new("/tmp/todo-tui-render-test/todolist.txt");
    let mut app = App::new(store, todos, &UiConfig::default());
    app.today = test_today();
    app
}

/// Drive the session with keys, without running any effects
pub fn press(app: &mut App, keys: &[Key]) {
    for key in keys {
        let session = std::mem::replace(&mut app.session, Session::new(TodoList::new()));
        let (session, _effects) = update(session, *key);
        app.session = session;
    }
}

/// A small list covering done, overdue and tagged items.
pub fn sample_todos() -> TodoList {
    vec![
        Todo::new("Buy milk")
            .with_priority(Priority::Urgent)
            .with_due_date(NaiveDate::from_ymd_opt(2025, 6, 1))
            .with_tags(["errand", "home"]),
        Todo {
            done: true,
            ..Todo::new("File taxes").with_priority(Priority::Low)
        },
        Todo::new("Call mom").with_tags(["family"]),
    ]
    .into()
}
