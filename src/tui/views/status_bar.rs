//! Status bar view
//!
//! Shows remaining amount, edit mode, status messages and key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::storage::KeyValueStore;
use crate::tui::app::App;

/// Render the status bar
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<'_, S>, area: Rect) {
    let remaining = app.editor.remaining();
    let remaining_color = if remaining == 0 {
        Color::Green
    } else {
        Color::Yellow
    };

    let mut spans = vec![
        Span::styled(" Left: ", Style::default().fg(Color::White)),
        Span::styled(
            app.settings.format_amount(remaining),
            Style::default()
                .fg(remaining_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
    ];

    match app.editor.edit_index() {
        Some(index) => spans.push(Span::styled(
            format!("EDIT #{}", index),
            Style::default().fg(Color::Green),
        )),
        None => spans.push(Span::styled("NEW", Style::default().fg(Color::Cyan))),
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = " q:Quit  ?:Help  Tab:Switch panel ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
