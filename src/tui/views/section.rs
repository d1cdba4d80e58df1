//! Entity sections
//!
//! Each section shows, top to bottom: the form (while visible), the errors
//! from the last failed submit, the button, and the records created so far.
//! When records overflow the section the newest ones stay in view.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ledger::EntityKind;
use crate::tui::app::{App, Focus};
use crate::tui::layout::section_split;
use crate::tui::widgets::dropdown;

/// Render one section
pub fn render(frame: &mut Frame, app: &App, kind: EntityKind, area: Rect) {
    let active = app.focus.section() == kind;
    let border_color = if active { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(format!(" {} ({}) ", kind.heading(), record_count(app, kind)))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form = form_lines(app, kind);
    let (form_area, list_area) = section_split(inner, form.len() as u16);
    frame.render_widget(Paragraph::new(form), form_area);

    let rows = record_rows(app, kind);
    let start = rows.len().saturating_sub(list_area.height as usize);
    frame.render_widget(Paragraph::new(rows[start..].to_vec()), list_area);
}

fn record_count(app: &App, kind: EntityKind) -> usize {
    match kind {
        EntityKind::Expense => app.ledger.expenses().len(),
        EntityKind::Category => app.ledger.categories().len(),
        EntityKind::Goal => app.ledger.goals().len(),
    }
}

/// Fields, errors and the button
fn form_lines(app: &App, kind: EntityKind) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let currency = &app.settings.currency;

    if app.ledger.is_visible(kind) {
        let options: Vec<_> = app.ledger.list_category_options().collect();
        for field in Focus::fields(kind) {
            let focused = app.focus == *field;
            let line = match field {
                Focus::ExpenseDescription => app.expense_description.line(focused),
                Focus::ExpenseAmount => app.expense_amount.line(focused, currency),
                Focus::CategoryName => app.category_name.line(focused),
                Focus::GoalAmount => app.goal_amount.line(focused, currency),
                _ => dropdown::line("Category", &options, app.selected_category(kind), focused),
            };
            lines.push(line);
        }
    }

    for error in app.ledger.errors(kind) {
        lines.push(Line::from(Span::styled(
            format!("• {}", error),
            Style::default().fg(Color::Red),
        )));
    }

    let button_style = if app.focus == Focus::button(kind) {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };
    lines.push(Line::from(Span::styled(
        format!("[ {} ]", app.ledger.button_label(kind)),
        button_style,
    )));

    lines
}

/// One line per record, oldest first
fn record_rows(app: &App, kind: EntityKind) -> Vec<Line<'static>> {
    let currency = &app.settings.currency;
    let category_style = Style::default().fg(Color::Magenta);
    let amount_style = Style::default().fg(Color::Yellow);

    let rows: Vec<Line<'static>> = match kind {
        EntityKind::Expense => app
            .ledger
            .expenses()
            .iter()
            .map(|expense| {
                Line::from(vec![
                    Span::raw(format!("{:<24}", expense.description)),
                    Span::styled(
                        format!("{:>14}", expense.amount.format_with(currency)),
                        amount_style,
                    ),
                    Span::raw("  "),
                    Span::styled(category_label(expense.category_name()), category_style),
                ])
            })
            .collect(),
        EntityKind::Category => app
            .ledger
            .categories()
            .iter()
            .map(|category| Line::from(Span::styled(category.name.clone(), category_style)))
            .collect(),
        EntityKind::Goal => app
            .ledger
            .goals()
            .iter()
            .map(|goal| {
                Line::from(vec![
                    Span::styled(
                        format!("{:<24}", category_label(goal.category_name())),
                        category_style,
                    ),
                    Span::styled(
                        format!("{:>14}", goal.amount.format_with(currency)),
                        amount_style,
                    ),
                ])
            })
            .collect(),
    };

    if rows.is_empty() {
        return vec![Line::from(Span::styled(
            format!("No {} yet", kind.heading().to_lowercase()),
            Style::default().fg(Color::DarkGray),
        ))];
    }
    rows
}

fn category_label(name: Option<&str>) -> String {
    name.unwrap_or("(no category)").to_string()
}
