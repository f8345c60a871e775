//! TUI views
//!
//! The editor panel, the saved budgets list and the status bar.

pub mod editor;
pub mod saved_list;
pub mod status_bar;

use ratatui::Frame;

use crate::storage::KeyValueStore;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{toast_rect, AppLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &mut App<'_, S>) {
    let layout = AppLayout::new(frame.area());

    editor::render(frame, app, layout.editor);
    saved_list::render(frame, app, layout.saved);
    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::ConfirmRemove(index) => {
            let message = format!("Remove saved budget #{}?", index);
            dialogs::confirm::render(frame, &message);
        }
        ActiveDialog::None => {}
    }

    if let Some(notification) = app.notifications.current() {
        let area = toast_rect(44, 4, frame.area());
        frame.render_widget(NotificationWidget::new(notification), area);
    }
}
