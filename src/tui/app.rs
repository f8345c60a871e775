//! Application state for the TUI
//!
//! The App struct holds the budget editor plus the UI-only state needed for
//! rendering and handling events.

use tracing::warn;

use crate::config::settings::Settings;
use crate::error::AllocatorError;
use crate::models::Field;
use crate::services::BudgetEditor;
use crate::storage::KeyValueStore;

use super::widgets::{Notification, NotificationQueue};

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Editor,
    SavedBudgets,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    /// Confirm removal of the saved budget at this index
    ConfirmRemove(usize),
}

/// Main application state
pub struct App<'a, S: KeyValueStore> {
    pub editor: BudgetEditor<S>,

    pub settings: &'a Settings,

    pub should_quit: bool,

    pub focused_panel: FocusedPanel,

    pub active_dialog: ActiveDialog,

    /// Slider under the cursor in the editor panel
    pub selected_field: Field,

    /// Row under the cursor in the saved budgets panel
    pub selected_budget_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    pub notifications: NotificationQueue,
}

impl<'a, S: KeyValueStore> App<'a, S> {
    pub fn new(editor: BudgetEditor<S>, settings: &'a Settings) -> Self {
        Self {
            editor,
            settings,
            should_quit: false,
            focused_panel: FocusedPanel::default(),
            active_dialog: ActiveDialog::default(),
            selected_field: Field::Market,
            selected_budget_index: 0,
            status_message: None,
            notifications: NotificationQueue::new(),
        }
    }

    /// Load saved budgets, reporting unreadable storage as a warning
    pub fn hydrate(&mut self) {
        if let Err(e) = self.editor.hydrate() {
            let message = if e.is_corrupt() {
                "Saved budgets could not be read; starting with an empty list".to_string()
            } else {
                format!("Could not load saved budgets: {}", e)
            };
            self.notify(Notification::warning(message).with_duration(6));
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Toggle focus between the editor and the saved budgets list
    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Editor => FocusedPanel::SavedBudgets,
            FocusedPanel::SavedBudgets => FocusedPanel::Editor,
        };
    }

    /// Move the cursor up in the focused panel
    pub fn move_up(&mut self) {
        match self.focused_panel {
            FocusedPanel::Editor => self.selected_field = self.selected_field.prev(),
            FocusedPanel::SavedBudgets => {
                self.selected_budget_index = self.selected_budget_index.saturating_sub(1);
            }
        }
    }

    /// Move the cursor down in the focused panel
    pub fn move_down(&mut self) {
        match self.focused_panel {
            FocusedPanel::Editor => self.selected_field = self.selected_field.next(),
            FocusedPanel::SavedBudgets => {
                let count = self.editor.budgets().len();
                if self.selected_budget_index + 1 < count {
                    self.selected_budget_index += 1;
                }
            }
        }
    }

    /// Move the selected slider by a number of steps
    pub fn nudge_selected(&mut self, steps: i64) {
        let field = self.selected_field;
        let before = self.editor.value(field);
        self.editor.nudge(field, steps);

        if steps > 0 && self.editor.value(field) == before {
            self.set_status("Full amount allocated; lower another category first");
        } else {
            self.clear_status();
        }
    }

    /// Set the selected slider to an absolute value (clamped)
    pub fn set_selected(&mut self, requested: u64) {
        self.editor.adjust(self.selected_field, requested);
        self.clear_status();
    }

    /// Save the current allocation
    pub fn save_budget(&mut self) {
        let editing = self.editor.edit_index();
        match self.editor.save_budget() {
            Ok(index) => {
                let message = match editing {
                    Some(_) => format!("Budget #{} updated", index),
                    None => format!("Budget #{} saved", index),
                };
                self.selected_budget_index = index;
                self.notify(Notification::success(message));
            }
            Err(AllocatorError::BudgetIncomplete { total, max }) if total > max => {
                self.notify(Notification::warning(format!(
                    "Total exceeds {}; reduce by {} before saving",
                    self.settings.format_amount(max),
                    self.settings.format_amount(total - max)
                )));
            }
            Err(AllocatorError::BudgetIncomplete { total, max }) => {
                self.notify(Notification::warning(format!(
                    "Allocate the full {} before saving ({} left)",
                    self.settings.format_amount(max),
                    self.settings.format_amount(max.saturating_sub(total))
                )));
            }
            Err(e) => {
                warn!(error = %e, "save failed");
                self.notify(Notification::error(format!("Save failed: {}", e)));
            }
        }
    }

    /// Load the budget under the list cursor into the editor
    pub fn edit_selected(&mut self) {
        match self.editor.edit_budget(self.selected_budget_index) {
            Ok(()) => {
                self.focused_panel = FocusedPanel::Editor;
                self.set_status(format!("Editing budget #{}", self.selected_budget_index));
            }
            Err(e) => self.notify(Notification::error(e.to_string())),
        }
    }

    pub fn cancel_edit(&mut self) {
        if self.editor.is_editing() {
            self.editor.cancel_edit();
            self.set_status("Edit cancelled");
        }
    }

    /// Ask for confirmation before removing the budget under the list cursor
    pub fn request_remove_selected(&mut self) {
        if self.selected_budget_index < self.editor.budgets().len() {
            self.open_dialog(ActiveDialog::ConfirmRemove(self.selected_budget_index));
        }
    }

    pub fn remove_budget(&mut self, index: usize) {
        match self.editor.remove_budget(index) {
            Ok(_) => {
                let count = self.editor.budgets().len();
                if self.selected_budget_index >= count {
                    self.selected_budget_index = count.saturating_sub(1);
                }
                self.notify(Notification::info(format!("Budget #{} removed", index)));
            }
            Err(e) => {
                warn!(error = %e, index, "remove failed");
                self.notify(Notification::error(format!("Remove failed: {}", e)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::tui::widgets::NotificationType;

    fn with_app(test: impl FnOnce(&mut App<'_, MemoryStore>)) {
        let settings = Settings::default();
        let mut app = App::new(BudgetEditor::new(MemoryStore::new()), &settings);
        app.hydrate();
        test(&mut app);
    }

    #[test]
    fn test_save_incomplete_warns() {
        with_app(|app| {
            app.nudge_selected(10);
            app.save_budget();
            assert!(app.editor.budgets().is_empty());
            assert!(!app.notifications.is_empty());
        });
    }

    #[test]
    fn test_edit_and_remove_flow() {
        with_app(|app| {
            app.set_selected(1_200_000);
            app.save_budget();
            assert_eq!(app.editor.budgets().len(), 1);

            app.focused_panel = FocusedPanel::SavedBudgets;
            app.edit_selected();
            assert!(app.editor.is_editing());
            assert_eq!(app.focused_panel, FocusedPanel::Editor);

            app.request_remove_selected();
            assert_eq!(app.active_dialog, ActiveDialog::ConfirmRemove(0));
            app.close_dialog();
            app.remove_budget(0);
            assert!(app.editor.budgets().is_empty());
            assert!(!app.editor.is_editing());
        });
    }

    #[test]
    fn test_field_cursor_wraps() {
        with_app(|app| {
            app.move_up();
            assert_eq!(app.selected_field, Field::Sell);
            app.move_down();
            assert_eq!(app.selected_field, Field::Market);
        });
    }

    #[test]
    fn test_corrupt_store_notifies() {
        let settings = Settings::default();
        let store = MemoryStore::with_item(crate::storage::BUDGETS_KEY, "garbage");
        let mut app = App::new(BudgetEditor::new(store), &settings);

        app.hydrate();
        assert!(app.editor.budgets().is_empty());
        assert_eq!(app.notifications.len(), 1);
    }

    #[test]
    fn test_over_cap_saved_budget_does_not_panic() {
        let settings = Settings::default();
        let store = MemoryStore::with_item(
            crate::storage::BUDGETS_KEY,
            r#"[{"market":1000000,"development":300000,"sell":0}]"#,
        );
        let mut app = App::new(BudgetEditor::new(store), &settings);

        app.hydrate();
        app.edit_selected();
        app.save_budget();

        assert_eq!(app.editor.budgets().len(), 1);
        assert_eq!(app.editor.total(), 1_300_000);
        let warning = app.notifications.current().unwrap();
        assert_eq!(warning.notification_type, NotificationType::Warning);
        assert!(warning.message.contains("reduce by 100000 kr"));
    }
}
