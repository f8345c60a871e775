//! Help dialog
//!
//! Lists keyboard shortcuts for both panels.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        section("Global Keys"),
        key_line("q", "Quit application"),
        key_line("?", "Show/hide help"),
        key_line("Tab", "Switch panel focus"),
        key_line("Esc / c", "Cancel edit mode"),
        Line::from(""),
        section("Editor"),
        key_line("j/k", "Select category"),
        key_line("h/l", "Decrease/increase by one step"),
        key_line("H/L", "Decrease/increase by a large step"),
        key_line("Home/End", "Set to zero / as much as allowed"),
        key_line("s / Enter", "Save budget (full amount allocated)"),
        Line::from(""),
        section("Saved Budgets"),
        key_line("j/k", "Move selection"),
        key_line("e / Enter", "Edit selected budget"),
        key_line("d / Del", "Remove selected budget"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::Gray),
        )),
    ]
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    ))
}

fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<12}", key), Style::default().fg(Color::Cyan)),
        Span::raw(description),
    ])
}
