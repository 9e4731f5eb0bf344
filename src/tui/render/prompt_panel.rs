use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::Priority;
use crate::tui::app::App;
use crate::tui::session::{Mode, Wizard, WizardStep};
use crate::tui::theme::Theme;
use crate::util::unicode::{display_width, truncate_to_width};

const LABEL_W: usize = 11;

/// Rows the prompt panel needs for a mode, borders included. Zero hides it.
pub fn panel_height(mode: &Mode) -> u16 {
    match mode {
        Mode::Add(_) | Mode::Edit(_) => 6,
        Mode::ConfirmDelete { .. } | Mode::ConfirmDeleteAll => 3,
        _ => 0,
    }
}

/// Render the wizard drafts or a delete confirmation above the status row
pub fn render_prompt_panel(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let inner_w = (area.width as usize).saturating_sub(2);

    let (title, lines) = match app.session.mode() {
        Mode::Add(wizard) => (" Add todo ".to_string(), wizard_lines(wizard, theme, inner_w)),
        Mode::Edit(wizard) => (
            format!(" Edit todo #{} ", wizard.target.map_or(0, |i| i + 1)),
            wizard_lines(wizard, theme, inner_w),
        ),
        Mode::ConfirmDelete { index } => {
            let text = app
                .session
                .todos()
                .get(*index)
                .map(|t| t.text.as_str())
                .unwrap_or_default();
            let question = format!(" Delete \"{}\"? ", text);
            (" Confirm ".to_string(), vec![confirm_line(&question, theme, inner_w)])
        }
        Mode::ConfirmDeleteAll => {
            let question = format!(" Delete ALL {} todos? ", app.session.todos().len());
            (" Confirm ".to_string(), vec![confirm_line(&question, theme, inner_w)])
        }
        _ => return,
    };

    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.highlight).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn confirm_line<'a>(question: &str, theme: &Theme, width: usize) -> Line<'a> {
    let hint = "(y/n)";
    let question = truncate_to_width(question, width.saturating_sub(hint.len()));
    Line::from(vec![
        Span::styled(question, Style::default().fg(theme.text_bright).bg(theme.background)),
        Span::styled(
            hint,
            Style::default()
                .fg(theme.highlight)
                .bg(theme.background)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

/// One line per wizard step. The active step gets a marker and a cursor.
fn wizard_lines<'a>(wizard: &Wizard, theme: &Theme, width: usize) -> Vec<Line<'a>> {
    let value_w = width.saturating_sub(LABEL_W + 1);
    vec![
        draft_line(wizard, WizardStep::Text, "Text", &wizard.text, theme, value_w),
        draft_line(wizard, WizardStep::DueDate, "Due", &wizard.due, theme, value_w),
        priority_line(wizard, theme),
        draft_line(wizard, WizardStep::Tags, "Tags", &wizard.tags_csv, theme, value_w),
    ]
}

fn label_spans<'a>(wizard: &Wizard, step: WizardStep, label: &str, theme: &Theme) -> Vec<Span<'a>> {
    let bg = theme.background;
    let active = wizard.step == step;
    let marker = if active { "\u{25B8} " } else { "  " };
    let style = if active {
        Style::default()
            .fg(theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.dim).bg(bg)
    };
    vec![
        Span::styled(marker, style),
        Span::styled(format!("{:<width$}", label, width = LABEL_W - 2), style),
    ]
}

fn draft_line<'a>(
    wizard: &Wizard,
    step: WizardStep,
    label: &str,
    value: &str,
    theme: &Theme,
    value_w: usize,
) -> Line<'a> {
    let bg = theme.background;
    let active = wizard.step == step;
    let mut spans = label_spans(wizard, step, label, theme);

    let value_style = if active {
        Style::default().fg(theme.text_bright).bg(bg)
    } else {
        Style::default().fg(theme.text).bg(bg)
    };
    if step == WizardStep::DueDate && value.is_empty() && !active {
        spans.push(Span::styled("none", Style::default().fg(theme.dim).bg(bg)));
    } else {
        // Keep the tail visible while typing past the edge
        let shown = if active {
            tail_to_width(value, value_w.saturating_sub(1))
        } else {
            truncate_to_width(value, value_w)
        };
        spans.push(Span::styled(shown, value_style));
    }
    if active {
        spans.push(Span::styled("\u{258C}", Style::default().fg(theme.highlight).bg(bg)));
    }
    Line::from(spans)
}

fn priority_line<'a>(wizard: &Wizard, theme: &Theme) -> Line<'a> {
    let bg = theme.background;
    let active = wizard.step == WizardStep::Priority;
    let mut spans = label_spans(wizard, WizardStep::Priority, "Priority", theme);
    let selected = wizard.priority();

    for (i, priority) in Priority::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ", Style::default().bg(bg)));
        }
        if *priority == selected {
            let style = Style::default()
                .fg(theme.priority_color(*priority))
                .bg(bg)
                .add_modifier(if active {
                    Modifier::BOLD | Modifier::REVERSED
                } else {
                    Modifier::BOLD
                });
            spans.push(Span::styled(format!("[{}]", priority.as_str()), style));
        } else {
            spans.push(Span::styled(
                format!(" {} ", priority.as_str()),
                Style::default().fg(theme.dim).bg(bg),
            ));
        }
    }
    if active {
        spans.push(Span::styled(
            "  \u{2190}/\u{2192}",
            Style::default().fg(theme.dim).bg(bg),
        ));
    }
    Line::from(spans)
}

/// Keep the end of `s`, dropping leading characters until it fits
fn tail_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    // Leave one cell for the ellipsis
    let start = s
        .char_indices()
        .map(|(i, _)| i)
        .find(|&i| display_width(&s[i..]) < max_cells)
        .unwrap_or(s.len());
    format!("\u{2026}{}", &s[start..])
}
