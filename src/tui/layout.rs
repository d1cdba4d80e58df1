//! Layout definitions for the TUI
//!
//! One screen: the three sections stacked vertically above a status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    pub expenses: Rect,
    pub categories: Rect,
    pub goals: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Sections
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Ratio(2, 5), // Expenses has the most rows
                Constraint::Ratio(1, 5),
                Constraint::Ratio(2, 5),
            ])
            .split(vertical[0]);

        Self {
            expenses: sections[0],
            categories: sections[1],
            goals: sections[2],
            status_bar: vertical[1],
        }
    }
}

/// Split a section's inner area into the form part and the record list
pub fn section_split(area: Rect, form_height: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(form_height), Constraint::Min(0)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
