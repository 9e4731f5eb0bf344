use std::io;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info};

use crate::io::store::{StoreError, TodoStore};
use crate::model::{Config, TodoList, UiConfig};

use super::input::{Key, key_from_event};
use super::render;
use super::session::{Effect, Session, update};
use super::theme::Theme;

/// What the TUI needs from the command line and config
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Resolved path of the todo list file
    pub todo_file: PathBuf,
    pub config: Config,
}

/// Main application state: the session plus what the driver owns around it
pub struct App {
    pub session: Session,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Reference date for overdue highlighting
    pub today: NaiveDate,
    pub should_quit: bool,
    store: TodoStore,
}

impl App {
    pub fn new(store: TodoStore, todos: TodoList, ui: &UiConfig) -> Self {
        App {
            session: Session::new(todos),
            theme: Theme::from_config(ui),
            show_key_hints: ui.show_key_hints,
            today: Local::now().date_naive(),
            should_quit: false,
            store,
        }
    }

    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    /// Apply one key to the session, then execute the effects it requested
    /// in order. A failed save or reload stops the session.
    pub fn handle_key(&mut self, key: Key) -> Result<(), StoreError> {
        let session = std::mem::replace(&mut self.session, Session::new(TodoList::new()));
        let (session, effects) = update(session, key);
        self.session = session;
        for effect in effects {
            self.apply(effect)?;
        }
        Ok(())
    }

    fn apply(&mut self, effect: Effect) -> Result<(), StoreError> {
        match effect {
            Effect::Save => self.store.save(self.session.todos())?,
            Effect::Reload => {
                let todos = self.store.load()?;
                info!(count = todos.len(), "reloaded todos");
                self.session.replace_todos(todos);
            }
            Effect::Quit => {
                debug!("quit requested");
                self.should_quit = true;
            }
        }
        Ok(())
    }
}

/// Run the TUI application
pub fn run(options: RunOptions) -> Result<(), Box<dyn std::error::Error>> {
    let store = TodoStore::new(options.todo_file);
    let todos = store.load()?;
    info!(path = %store.path().display(), count = todos.len(), "starting session");

    let mut app = App::new(store, todos, &options.config.ui);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("session ended");
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.today = Local::now().date_naive();
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && let Some(key) = key_from_event(key)
        {
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
