//! Terminal User Interface module
//!
//! The whole application is one screen built with ratatui: an expense, a
//! category and a goal section, each with its own form, plus a status bar.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
