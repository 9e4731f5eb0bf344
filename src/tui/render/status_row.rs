use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::tui::session::{Mode, WizardStep};
use crate::util::unicode::{display_width, truncate_to_width};

/// Render the status row: the last status message, with an undo marker on the right
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let indicator = if app.session.can_undo() {
        "[u] undo"
    } else {
        ""
    };
    let indicator_w = display_width(indicator);
    let message_w = if indicator_w > 0 {
        width.saturating_sub(indicator_w + 1)
    } else {
        width
    };

    let message = truncate_to_width(&format!(" {}", app.session.status()), message_w);
    let mut spans = vec![Span::styled(
        message,
        Style::default().fg(app.theme.text_bright).bg(bg),
    )];

    if indicator_w > 0 {
        let content_width = display_width(&spans[0].content);
        if content_width + indicator_w < width {
            let padding = width - content_width - indicator_w;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(
                indicator,
                Style::default().fg(app.theme.dim).bg(bg),
            ));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Short key reminder for the current mode
pub fn key_hints(mode: &Mode) -> &'static str {
    match mode {
        Mode::View => "a add  e edit  space done  d delete  u undo  t tags  h help  q quit",
        Mode::Add(w) | Mode::Edit(w) => match w.step {
            WizardStep::Priority => "\u{2190}\u{2192} choose  Enter next  Esc cancel",
            WizardStep::Tags => "Enter save  Esc cancel",
            _ => "Enter next  Esc cancel",
        },
        Mode::ConfirmDelete { .. } | Mode::ConfirmDeleteAll => "y confirm  n cancel",
        Mode::Help => "any key to return",
        Mode::TagSearch => "type to filter  Esc back",
    }
}

/// Render the key hint row under the status row
pub fn render_key_hints(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let hints = truncate_to_width(
        &format!(" {}", key_hints(app.session.mode())),
        area.width as usize,
    );
    let paragraph = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(app.theme.dim).bg(bg),
    )))
    .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
