//! Saved budgets view
//!
//! Lists every saved budget and highlights the one being edited.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::storage::KeyValueStore;
use crate::tui::app::{App, FocusedPanel};

/// Render the saved budgets panel
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<'_, S>, area: Rect) {
    let focused = app.focused_panel == FocusedPanel::SavedBudgets;
    let border_color = if focused { Color::Cyan } else { Color::Gray };

    let budgets = app.editor.budgets();
    let block = Block::default()
        .title(format!(" Saved budgets ({}) ", budgets.len()))
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if budgets.is_empty() {
        let text = Paragraph::new("No saved budgets yet. Allocate the full amount and press s.")
            .style(Style::default().fg(Color::Gray))
            .block(block);
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(4),
        Constraint::Min(12),
        Constraint::Min(12),
        Constraint::Min(12),
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("#").style(bold),
        Cell::from("Market").style(bold),
        Cell::from("Development").style(bold),
        Cell::from("Sales").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let edit_index = app.editor.edit_index();
    let settings = app.settings;
    let rows: Vec<Row> = budgets
        .iter()
        .enumerate()
        .map(|(index, budget)| {
            let row = Row::new(vec![
                Cell::from(index.to_string()),
                Cell::from(settings.format_amount(budget.market)),
                Cell::from(settings.format_amount(budget.development)),
                Cell::from(settings.format_amount(budget.sell)),
            ]);
            if edit_index == Some(index) {
                row.style(Style::default().fg(Color::Green).add_modifier(Modifier::ITALIC))
            } else {
                row
            }
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    if focused {
        state.select(Some(app.selected_budget_index));
    }

    frame.render_stateful_widget(table, area, &mut state);
}
