use std::collections::HashMap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::tags::tag_counts;
use crate::tui::app::App;

/// Render the live tag filter and the tags it matches, in place of the list
pub fn render_tag_search(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let session = &app.session;

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled(
                " Filter: ",
                Style::default()
                    .fg(theme.text_bright)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                session.tag_filter().to_string(),
                Style::default().fg(theme.text_bright).bg(bg),
            ),
            Span::styled("\u{258C}", Style::default().fg(theme.highlight).bg(bg)),
        ]),
        Line::from(""),
    ];

    let visible = session.visible_tags();
    if visible.is_empty() {
        lines.push(Line::from(Span::styled(
            "   No matching tags",
            Style::default().fg(theme.dim).bg(bg),
        )));
    } else {
        let counts: HashMap<String, usize> = tag_counts(session.todos()).into_iter().collect();
        for tag in &visible {
            let n = counts.get(tag).copied().unwrap_or(0);
            let noun = if n == 1 { "todo" } else { "todos" };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("   #{tag}"),
                    Style::default().fg(theme.tag_color(tag)).bg(bg),
                ),
                Span::styled(
                    format!("  ({n} {noun})"),
                    Style::default().fg(theme.dim).bg(bg),
                ),
            ]));
        }
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
