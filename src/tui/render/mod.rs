pub mod help_overlay;
mod helpers;
pub mod list_view;
pub mod prompt_panel;
pub mod status_row;
pub mod tag_search;

#[cfg(test)]
pub(crate) mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::util::unicode::{display_width, truncate_to_width};

use super::app::App;
use super::session::Mode;

/// Main render function: dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let mode = app.session.mode();
    let hints_height = u16::from(app.show_key_hints);

    // Layout: header | content | prompt panel | status row | key hints
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(prompt_panel::panel_height(mode)),
            Constraint::Length(1),
            Constraint::Length(hints_height),
        ])
        .split(area);

    render_header(frame, app, chunks[0]);

    match mode {
        Mode::TagSearch => tag_search::render_tag_search(frame, app, chunks[1]),
        _ => list_view::render_list_view(frame, app, chunks[1]),
    }

    prompt_panel::render_prompt_panel(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);
    if app.show_key_hints {
        status_row::render_key_hints(frame, app, chunks[4]);
    }

    // Help overlay (rendered on top of everything)
    if *mode == Mode::Help {
        help_overlay::render_help_overlay(frame, app, area);
    }
}

/// Title with item counts on the left, data file on the right
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let todos = app.session.todos();
    let done = todos.iter().filter(|t| t.done).count();

    let title = format!(" Todo  {} items, {} done", todos.len(), done);
    let mut spans = vec![Span::styled(
        title,
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];

    let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
    let room = width.saturating_sub(used + 2);
    if room > 3 {
        let path = app.store().path().display().to_string();
        let path = format!("{} ", truncate_to_width(&path, room - 1));
        let padding = width.saturating_sub(used + display_width(&path));
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(path, Style::default().fg(app.theme.dim).bg(bg)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}
