use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Todo;
use crate::tui::app::App;
use crate::util::unicode::{display_width, fit_to_width};

use super::helpers::{checkbox, scroll_offset, spans_width};

const MARKER_W: usize = 2;
const NUM_W: usize = 4;
const CHECK_W: usize = 4;
const DUE_W: usize = 10;
const PRIO_W: usize = 6;
const TAGS_MAX_W: usize = 20;

/// Column widths for a given terminal width. Text gets whatever is left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    text: usize,
    tags: usize,
}

impl Columns {
    fn for_width(width: usize) -> Self {
        let tags = (width / 5).min(TAGS_MAX_W);
        // One separating space after text, due and priority
        let fixed = MARKER_W + NUM_W + CHECK_W + DUE_W + 1 + PRIO_W + 1 + tags + 1;
        Columns {
            text: width.saturating_sub(fixed),
            tags,
        }
    }
}

/// Render the todo table: a header row, then one row per todo
pub fn render_list_view(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let todos = app.session.todos();
    let bg = theme.background;

    if todos.is_empty() {
        let empty = Paragraph::new(" No todos. Press 'a' to add one.")
            .style(Style::default().fg(theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let width = area.width as usize;
    let cols = Columns::for_width(width);
    let mut lines: Vec<Line> = Vec::new();

    let header = format!(
        "{}{:>3} {:<4}{} {} {} {}",
        " ".repeat(MARKER_W),
        "#",
        "",
        fit_to_width("Todo", cols.text),
        fit_to_width("Due", DUE_W),
        fit_to_width("Prio", PRIO_W),
        "Tags"
    );
    lines.push(Line::from(Span::styled(
        header,
        Style::default()
            .fg(theme.dim)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )));

    let rows = (area.height as usize).saturating_sub(1);
    let cursor = app.session.cursor();
    let offset = scroll_offset(cursor, rows);

    for (i, todo) in todos.iter().enumerate().skip(offset).take(rows) {
        lines.push(todo_line(app, i, todo, i == cursor, cols, width));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn todo_line<'a>(
    app: &App,
    index: usize,
    todo: &'a Todo,
    is_cursor: bool,
    cols: Columns,
    width: usize,
) -> Line<'a> {
    let theme = &app.theme;
    let bg = if is_cursor {
        theme.selection_bg
    } else {
        theme.background
    };
    let base = Style::default().bg(bg);
    let muted = base.fg(theme.dim);

    let mut spans: Vec<Span> = Vec::new();

    let marker = if is_cursor { "\u{25B8} " } else { "  " };
    spans.push(Span::styled(marker, base.fg(theme.highlight)));
    spans.push(Span::styled(format!("{:>3} ", index + 1), muted));

    let check_style = if todo.done {
        base.fg(theme.green)
    } else {
        base.fg(theme.text)
    };
    spans.push(Span::styled(format!("{} ", checkbox(todo)), check_style));

    let text_style = if todo.done {
        muted.add_modifier(Modifier::CROSSED_OUT)
    } else if is_cursor {
        base.fg(theme.text_bright).add_modifier(Modifier::BOLD)
    } else {
        base.fg(theme.text_bright)
    };
    spans.push(Span::styled(fit_to_width(&todo.text, cols.text), text_style));
    spans.push(Span::styled(" ", base));

    let due = todo
        .due_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let due_style = if todo.done {
        muted
    } else if todo.is_overdue(app.today) {
        base.fg(theme.overdue).add_modifier(Modifier::BOLD)
    } else {
        base.fg(theme.cyan)
    };
    spans.push(Span::styled(fit_to_width(&due, DUE_W), due_style));
    spans.push(Span::styled(" ", base));

    let prio_style = if todo.done {
        muted
    } else {
        base.fg(theme.priority_color(todo.priority))
    };
    spans.push(Span::styled(
        fit_to_width(todo.priority.as_str(), PRIO_W),
        prio_style,
    ));
    spans.push(Span::styled(" ", base));

    push_tag_spans(&mut spans, app, todo, cols.tags, base);

    // Fill the rest of the row so the selection background spans the width
    let used = spans_width(&spans);
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), base));
    }
    Line::from(spans)
}

/// `#tag` spans in their tag colors, cut with an ellipsis when they overflow
fn push_tag_spans<'a>(
    spans: &mut Vec<Span<'a>>,
    app: &App,
    todo: &'a Todo,
    budget: usize,
    base: Style,
) {
    let mut used = 0;
    for (i, tag) in todo.tags.iter().enumerate() {
        let label = if i == 0 {
            format!("#{tag}")
        } else {
            format!(" #{tag}")
        };
        let w = display_width(&label);
        if used + w > budget {
            if used < budget {
                spans.push(Span::styled("\u{2026}", base.fg(app.theme.dim)));
            }
            return;
        }
        used += w;
        let style = if todo.done {
            base.fg(app.theme.dim)
        } else {
            base.fg(app.theme.tag_color(tag))
        };
        spans.push(Span::styled(label, style));
    }
}
