//! Dialog modules for the TUI
//!
//! Overlays drawn on top of the sections

pub mod help;
