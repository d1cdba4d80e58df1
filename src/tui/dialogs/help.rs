//! Help dialog
//!
//! Lists the keyboard shortcuts for buttons and each kind of field

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        heading("Everywhere"),
        key_line("Tab/Down", "Next field or button"),
        key_line("S-Tab/Up", "Previous field or button"),
        key_line("Enter", "New / Create for this section"),
        key_line("Ctrl+c", "Quit"),
        Line::from(""),
        heading("Buttons"),
        key_line("Space", "Same as Enter"),
        key_line("?", "Show this help"),
        key_line("q/Esc", "Quit"),
        Line::from(""),
        heading("Fields"),
        key_line("0-9", "Shift digit into amount"),
        key_line("-", "Toggle sign of amount"),
        key_line("h/l", "Previous/next category"),
        key_line("Esc", "Back to the button"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    ))
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>10}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
