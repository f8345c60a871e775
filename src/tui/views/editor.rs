//! Budget editor view
//!
//! One gauge per category, the running total, and the available actions.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::models::Field;
use crate::storage::KeyValueStore;
use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::EditorLayout;

/// Render the editor panel
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<'_, S>, area: Rect) {
    let focused = app.focused_panel == FocusedPanel::Editor;
    let border_color = if focused { Color::Cyan } else { Color::Gray };

    let title = match app.editor.edit_index() {
        Some(index) => format!(" Edit saved budget #{} ", index),
        None => " New budget ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = EditorLayout::new(inner);
    for (field, slot) in Field::ALL.into_iter().zip(layout.sliders) {
        render_slider(frame, app, field, focused && field == app.selected_field, slot);
    }

    render_total(frame, app, layout.total);
    render_actions(frame, app, layout.actions);
}

fn render_slider<S: KeyValueStore>(
    frame: &mut Frame,
    app: &App<'_, S>,
    field: Field,
    selected: bool,
    area: Rect,
) {
    let value = app.editor.value(field);
    let max = app.editor.max();
    let ratio = if max == 0 {
        0.0
    } else {
        (value as f64 / max as f64).clamp(0.0, 1.0)
    };

    let (border_style, gauge_color) = if selected {
        (Style::default().fg(Color::Yellow), Color::Yellow)
    } else {
        (Style::default().fg(Color::DarkGray), Color::Blue)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!(
                    " {}: {} ",
                    field.label(),
                    app.settings.format_amount(value)
                ))
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .gauge_style(Style::default().fg(gauge_color).bg(Color::Black))
        .ratio(ratio)
        .label(format!("{:.1}%", ratio * 100.0));

    frame.render_widget(gauge, area);
}

fn render_total<S: KeyValueStore>(frame: &mut Frame, app: &App<'_, S>, area: Rect) {
    let total = app.editor.total();
    let color = if app.editor.can_save() {
        Color::Green
    } else {
        Color::Yellow
    };

    let line = Line::from(vec![
        Span::raw(" Total allocated amount: "),
        Span::styled(
            app.settings.format_amount(total),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" / {}", app.settings.format_amount(app.editor.max())),
            Style::default().fg(Color::Gray),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_actions<S: KeyValueStore>(frame: &mut Frame, app: &App<'_, S>, area: Rect) {
    let save_style = if app.editor.can_save() {
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![Span::raw(" "), Span::styled(" [s] Save budget ", save_style)];

    if app.editor.is_editing() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            " [c] Cancel edit mode ",
            Style::default().fg(Color::White).bg(Color::Blue),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
