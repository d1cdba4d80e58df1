//! TUI Views module
//!
//! The expense, category and goal sections plus the status bar.

pub mod section;
pub mod status_bar;

use ratatui::Frame;

use super::app::App;
use super::dialogs;
use super::layout::AppLayout;
use crate::ledger::EntityKind;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    section::render(frame, app, EntityKind::Expense, layout.expenses);
    section::render(frame, app, EntityKind::Category, layout.categories);
    section::render(frame, app, EntityKind::Goal, layout.goals);

    status_bar::render(frame, app, layout.status_bar);

    if app.show_help {
        dialogs::help::render(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::Money;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(app: &App) -> String {
        let backend = TestBackend::new(80, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_initial_screen() {
        let settings = Settings::default();
        let app = App::new(&settings);
        let text = screen_text(&app);

        assert!(text.contains("Expenses (0)"));
        assert!(text.contains("Categories (1)"));
        assert!(text.contains("Goals (0)"));
        assert!(text.contains("[ New Expense ]"));
        assert!(text.contains("[ New Category ]"));
        assert!(text.contains("[ New Goal ]"));
        assert!(text.contains("Undefined"));
        assert!(text.contains("No expenses yet"));
    }

    #[test]
    fn test_visible_form_and_errors() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.press(EntityKind::Expense);
        app.press(EntityKind::Expense);
        let text = screen_text(&app);

        assert!(text.contains("[ Create Expense ]"));
        assert!(text.contains("Expense description should not be empty"));
        assert!(text.contains("Expense amount should not be empty"));
        assert!(!text.contains("Expense category should not be empty"));
    }

    #[test]
    fn test_records_listed_with_currency_format() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.press(EntityKind::Expense);
        app.ledger.set_expense_description("Laptop");
        app.ledger.set_expense_amount(Money::from_cents(123_450));
        app.press(EntityKind::Expense);

        let text = screen_text(&app);
        assert!(text.contains("Laptop"));
        assert!(text.contains("1,234.50"));
        assert!(text.contains("Expenses (1)"));
    }

    #[test]
    fn test_help_overlay() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.show_help = true;
        let text = screen_text(&app);
        assert!(text.contains("Help"));
        assert!(text.contains("Toggle sign"));
    }
}
