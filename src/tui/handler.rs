//! Event handler for the TUI
//!
//! Routes key events to the focused panel or the open dialog.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::storage::KeyValueStore;

use super::app::{ActiveDialog, App, FocusedPanel};
use super::event::Event;

/// Slider steps moved by a large jump (Shift or PageUp/PageDown)
const LARGE_JUMP: i64 = 50;

/// Handle an incoming event
pub fn handle_event<S: KeyValueStore>(app: &mut App<'_, S>, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick | Event::Resize(_, _) => Ok(()),
    }
}

fn handle_key_event<S: KeyValueStore>(app: &mut App<'_, S>, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
        return Ok(());
    }

    match key.code {
        KeyCode::Char('q') => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.toggle_panel_focus();
            return Ok(());
        }
        KeyCode::Esc | KeyCode::Char('c') => {
            app.cancel_edit();
            return Ok(());
        }
        _ => {}
    }

    match app.focused_panel {
        FocusedPanel::Editor => handle_editor_key(app, key),
        FocusedPanel::SavedBudgets => handle_saved_key(app, key),
    }

    Ok(())
}

fn handle_dialog_key<S: KeyValueStore>(app: &mut App<'_, S>, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::ConfirmRemove(index) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                app.close_dialog();
                app.remove_budget(index);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
            _ => {}
        },
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::None => {}
    }
}

fn handle_editor_key<S: KeyValueStore>(app: &mut App<'_, S>, key: KeyEvent) {
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    match key.code {
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),

        KeyCode::Left if shift => app.nudge_selected(-LARGE_JUMP),
        KeyCode::Right if shift => app.nudge_selected(LARGE_JUMP),
        KeyCode::Char('h') | KeyCode::Left => app.nudge_selected(-1),
        KeyCode::Char('l') | KeyCode::Right => app.nudge_selected(1),
        KeyCode::Char('H') | KeyCode::PageDown => app.nudge_selected(-LARGE_JUMP),
        KeyCode::Char('L') | KeyCode::PageUp => app.nudge_selected(LARGE_JUMP),
        KeyCode::Home | KeyCode::Char('0') => app.set_selected(0),
        KeyCode::End | KeyCode::Char('$') => app.set_selected(app.editor.max()),

        KeyCode::Char('s') | KeyCode::Enter => app.save_budget(),

        _ => {}
    }
}

fn handle_saved_key<S: KeyValueStore>(app: &mut App<'_, S>, key: KeyEvent) {
    match key.code {
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('e') | KeyCode::Enter => app.edit_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_remove_selected(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::models::Field;
    use crate::services::BudgetEditor;
    use crate::storage::MemoryStore;

    fn press(app: &mut App<'_, MemoryStore>, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    #[test]
    fn test_keyboard_allocation_and_save() {
        let settings = Settings::default();
        let mut app = App::new(BudgetEditor::new(MemoryStore::new()), &settings);

        press(&mut app, KeyCode::End);
        assert_eq!(app.editor.value(Field::Market), 1_200_000);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.editor.value(Field::Development), 0);

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.editor.budgets().len(), 1);

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.active_dialog, ActiveDialog::ConfirmRemove(0));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.editor.budgets().is_empty());
        assert!(!app.has_dialog());

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_escape_cancels_edit() {
        let settings = Settings::default();
        let mut app = App::new(BudgetEditor::new(MemoryStore::new()), &settings);

        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        assert!(app.editor.is_editing());

        press(&mut app, KeyCode::Esc);
        assert!(!app.editor.is_editing());
        assert_eq!(app.editor.total(), 0);
    }
}
