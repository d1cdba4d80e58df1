//! Reusable widgets for the TUI
//!
//! Form fields render to a single `Line` so a section can stack them with
//! its error list and button.

pub mod currency_input;
pub mod dropdown;
pub mod input;

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

pub use currency_input::CurrencyInput;
pub use input::TextInput;

/// Style of the block cursor in focused fields
pub const CURSOR_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Cyan);

/// "Label: " span, highlighted when the field has focus
pub fn field_label(label: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    Span::styled(format!("{}: ", label), style)
}
