//! Category dropdown
//!
//! Renders the current selection inline and cycles through the options with
//! the arrow keys. The options themselves come from the ledger.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use crate::ledger::CategoryOption;

use super::field_label;

/// Placeholder shown while nothing is selected
pub const PLACEHOLDER: &str = "Select Category";

/// Value after `current` in `options`, wrapping; the first when `current` is absent
pub fn next_value(options: &[CategoryOption], current: &str) -> Option<String> {
    if options.is_empty() {
        return None;
    }
    let index = match options.iter().position(|o| o.value == current) {
        Some(i) => (i + 1) % options.len(),
        None => 0,
    };
    Some(options[index].value.clone())
}

/// Value before `current` in `options`, wrapping; the last when `current` is absent
pub fn prev_value(options: &[CategoryOption], current: &str) -> Option<String> {
    if options.is_empty() {
        return None;
    }
    let index = match options.iter().position(|o| o.value == current) {
        Some(0) | None => options.len() - 1,
        Some(i) => i - 1,
    };
    Some(options[index].value.clone())
}

/// Render a dropdown as a single line
pub fn line(label: &str, options: &[CategoryOption], selected: &str, focused: bool) -> Line<'static> {
    let shown = options
        .iter()
        .find(|o| o.value == selected)
        .map(|o| o.label.clone());

    let value_span = match shown {
        Some(text) => {
            let style = if focused {
                Style::default().fg(Color::White).bg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            };
            Span::styled(format!(" {} ", text), style)
        }
        None => Span::styled(
            format!(" {} ", PLACEHOLDER),
            Style::default().fg(Color::DarkGray),
        ),
    };

    let hint = if focused { " ◀ h/l ▶" } else { "" };

    Line::from(vec![
        field_label(label, focused),
        value_span,
        Span::styled(hint, Style::default().fg(Color::Yellow)),
    ])
}
