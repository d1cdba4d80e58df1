//! Application state for the TUI
//!
//! The App struct holds the ledger plus everything needed for rendering and
//! handling events: focus, input widgets and the status line.

use crate::config::settings::Settings;
use crate::ledger::{EntityKind, LedgerFormManager, SubmitOutcome};

use super::widgets::dropdown;
use super::widgets::{CurrencyInput, TextInput};

/// Focusable element on the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    ExpenseDescription,
    ExpenseAmount,
    ExpenseCategory,
    #[default]
    ExpenseButton,
    CategoryName,
    CategoryButton,
    GoalAmount,
    GoalCategory,
    GoalButton,
}

impl Focus {
    /// Section the element belongs to
    pub fn section(&self) -> EntityKind {
        match self {
            Focus::ExpenseDescription
            | Focus::ExpenseAmount
            | Focus::ExpenseCategory
            | Focus::ExpenseButton => EntityKind::Expense,
            Focus::CategoryName | Focus::CategoryButton => EntityKind::Category,
            Focus::GoalAmount | Focus::GoalCategory | Focus::GoalButton => EntityKind::Goal,
        }
    }

    /// Form fields of a section, top to bottom
    pub fn fields(kind: EntityKind) -> &'static [Focus] {
        match kind {
            EntityKind::Expense => &[
                Focus::ExpenseDescription,
                Focus::ExpenseAmount,
                Focus::ExpenseCategory,
            ],
            EntityKind::Category => &[Focus::CategoryName],
            EntityKind::Goal => &[Focus::GoalAmount, Focus::GoalCategory],
        }
    }

    /// The submit button of a section
    pub fn button(kind: EntityKind) -> Focus {
        match kind {
            EntityKind::Expense => Focus::ExpenseButton,
            EntityKind::Category => Focus::CategoryButton,
            EntityKind::Goal => Focus::GoalButton,
        }
    }

    pub fn is_button(&self) -> bool {
        *self == Focus::button(self.section())
    }
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Records and form sessions
    pub ledger: LedgerFormManager,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Whether the help overlay is shown
    pub show_help: bool,

    /// Focused element
    pub focus: Focus,

    /// Status message to display
    pub status_message: Option<String>,

    pub expense_description: TextInput,
    pub expense_amount: CurrencyInput,
    pub category_name: TextInput,
    pub goal_amount: CurrencyInput,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            ledger: LedgerFormManager::new(),
            should_quit: false,
            show_help: false,
            focus: Focus::default(),
            status_message: None,
            expense_description: TextInput::new()
                .label("Description")
                .placeholder("Expense Description"),
            expense_amount: CurrencyInput::new().label("Amount"),
            category_name: TextInput::new()
                .label("Name")
                .placeholder("Category Name"),
            goal_amount: CurrencyInput::new().label("Amount"),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Focusable elements in screen order; hidden form fields are skipped
    pub fn focus_order(&self) -> Vec<Focus> {
        let mut order = Vec::new();
        for kind in EntityKind::ALL {
            if self.ledger.is_visible(kind) {
                order.extend_from_slice(Focus::fields(kind));
            }
            order.push(Focus::button(kind));
        }
        order
    }

    /// Move focus to the next element, wrapping
    pub fn focus_next(&mut self) {
        let order = self.focus_order();
        let index = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(index + 1) % order.len()];
    }

    /// Move focus to the previous element, wrapping
    pub fn focus_prev(&mut self) {
        let order = self.focus_order();
        let index = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(index + order.len() - 1) % order.len()];
    }

    /// Press the button of `kind`
    pub fn press(&mut self, kind: EntityKind) -> SubmitOutcome {
        let outcome = self.ledger.submit(kind);
        match outcome {
            SubmitOutcome::Revealed => {
                self.focus = Focus::fields(kind)[0];
            }
            SubmitOutcome::Created => {
                self.sync_inputs();
                self.focus = Focus::button(kind);
                self.set_status(format!("{} created", kind.label()));
            }
            SubmitOutcome::Rejected(count) => {
                let noun = if count == 1 { "problem" } else { "problems" };
                self.set_status(format!("{} {} with the {} form", count, noun, kind.label()));
            }
        }
        outcome
    }

    /// Reload widget contents from the ledger's field values
    pub fn sync_inputs(&mut self) {
        let expense = self.ledger.expense_form().fields();
        self.expense_description.set_content(expense.description.clone());
        self.expense_amount.set_value(expense.amount);

        let category = self.ledger.category_form().fields();
        self.category_name.set_content(category.name.clone());

        let goal = self.ledger.goal_form().fields();
        self.goal_amount.set_value(goal.amount);
    }

    /// Push widget contents into the ledger after an edit
    pub fn commit_inputs(&mut self) {
        self.ledger
            .set_expense_description(self.expense_description.value());
        self.ledger.set_expense_amount(self.expense_amount.value());
        self.ledger.set_category_name(self.category_name.value());
        self.ledger.set_goal_amount(self.goal_amount.value());
    }

    /// Currently selected category name of a section's dropdown
    pub fn selected_category(&self, kind: EntityKind) -> &str {
        match kind {
            EntityKind::Goal => &self.ledger.goal_form().fields().category,
            _ => &self.ledger.expense_form().fields().category,
        }
    }

    /// Step a section's dropdown forward or backward
    pub fn cycle_category(&mut self, kind: EntityKind, forward: bool) {
        let options: Vec<_> = self.ledger.list_category_options().collect();
        let current = self.selected_category(kind);
        let next = if forward {
            dropdown::next_value(&options, current)
        } else {
            dropdown::prev_value(&options, current)
        };
        let Some(next) = next else {
            return;
        };
        match kind {
            EntityKind::Goal => self.ledger.set_goal_category(next),
            _ => self.ledger.set_expense_category(next),
        }
    }
}
