//! Terminal User Interface module
//!
//! A ratatui front end for the budget editor: sliders on the left, saved
//! budgets on the right, dialogs and toasts on top.

pub mod app;
pub mod dialogs;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
