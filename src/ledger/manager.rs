//! The ledger form manager
//!
//! Owns the three append-only record collections and the three form
//! sessions. The presentation layer reads state from here and forwards
//! input into the field setters and `submit`.

use tracing::{debug, info};

use crate::models::{Category, Expense, Goal, Money};

use super::fields::{resolve_category, CategoryFields, ExpenseFields, GoalFields};
use super::form::{FormFields, FormSession, Submission, ValidationError};

/// Which create flow an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Expense,
    Category,
    Goal,
}

impl EntityKind {
    /// All kinds in screen order
    pub const ALL: [EntityKind; 3] = [EntityKind::Expense, EntityKind::Category, EntityKind::Goal];

    /// Singular display name
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Expense => "Expense",
            EntityKind::Category => "Category",
            EntityKind::Goal => "Goal",
        }
    }

    /// Section heading
    pub fn heading(&self) -> &'static str {
        match self {
            EntityKind::Expense => "Expenses",
            EntityKind::Category => "Categories",
            EntityKind::Goal => "Goals",
        }
    }
}

/// Result of pressing a form's button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form was hidden and is now shown
    Revealed,
    /// A record was appended and the form closed
    Created,
    /// Validation failed with this many messages
    Rejected(usize),
}

/// One entry for the category selection widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub label: String,
    pub value: String,
    pub key: String,
}

impl CategoryOption {
    fn from_category(category: &Category) -> Self {
        Self {
            label: category.name.clone(),
            value: category.name.clone(),
            key: category.name.clone(),
        }
    }
}

/// Owner of all ledger state
#[derive(Debug, Clone)]
pub struct LedgerFormManager {
    categories: Vec<Category>,
    expenses: Vec<Expense>,
    goals: Vec<Goal>,
    expense_form: FormSession<ExpenseFields>,
    category_form: FormSession<CategoryFields>,
    goal_form: FormSession<GoalFields>,
}

impl Default for LedgerFormManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerFormManager {
    /// Start with only the "Undefined" category and all forms hidden
    pub fn new() -> Self {
        Self {
            categories: vec![Category::undefined()],
            expenses: Vec::new(),
            goals: Vec::new(),
            expense_form: FormSession::new(),
            category_form: FormSession::new(),
            goal_form: FormSession::new(),
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn expense_form(&self) -> &FormSession<ExpenseFields> {
        &self.expense_form
    }

    pub fn category_form(&self) -> &FormSession<CategoryFields> {
        &self.category_form
    }

    pub fn goal_form(&self) -> &FormSession<GoalFields> {
        &self.goal_form
    }

    /// Whether the form for `kind` is shown
    pub fn is_visible(&self, kind: EntityKind) -> bool {
        match kind {
            EntityKind::Expense => self.expense_form.is_visible(),
            EntityKind::Category => self.category_form.is_visible(),
            EntityKind::Goal => self.goal_form.is_visible(),
        }
    }

    /// Messages from the last failed submit of `kind`
    pub fn errors(&self, kind: EntityKind) -> &[ValidationError] {
        match kind {
            EntityKind::Expense => self.expense_form.errors(),
            EntityKind::Category => self.category_form.errors(),
            EntityKind::Goal => self.goal_form.errors(),
        }
    }

    /// "New X" while the form is hidden, "Create X" while it is shown
    pub fn button_label(&self, kind: EntityKind) -> String {
        if self.is_visible(kind) {
            format!("Create {}", kind.label())
        } else {
            format!("New {}", kind.label())
        }
    }

    /// Check the current field values of `kind` without changing anything
    pub fn validate(&self, kind: EntityKind) -> Vec<ValidationError> {
        match kind {
            EntityKind::Expense => self.expense_form.fields().validate(),
            EntityKind::Category => self.category_form.fields().validate(),
            EntityKind::Goal => self.goal_form.fields().validate(),
        }
    }

    /// Press the button for `kind`
    pub fn submit(&mut self, kind: EntityKind) -> SubmitOutcome {
        match kind {
            EntityKind::Expense => {
                let submission = self.expense_form.submit(&self.categories);
                let errors = self.expense_form.errors().len();
                apply(kind, submission, errors, &mut self.expenses)
            }
            EntityKind::Category => {
                let submission = self.category_form.submit(&self.categories);
                let errors = self.category_form.errors().len();
                apply(kind, submission, errors, &mut self.categories)
            }
            EntityKind::Goal => {
                let submission = self.goal_form.submit(&self.categories);
                let errors = self.goal_form.errors().len();
                apply(kind, submission, errors, &mut self.goals)
            }
        }
    }

    /// Options for the category dropdown, in creation order
    pub fn list_category_options(&self) -> impl Iterator<Item = CategoryOption> + '_ {
        self.categories.iter().map(CategoryOption::from_category)
    }

    /// First category with this exact name
    pub fn find_category(&self, name: &str) -> Option<Category> {
        resolve_category(&self.categories, name)
    }

    pub fn set_expense_description(&mut self, description: impl Into<String>) {
        self.expense_form.fields_mut().description = description.into();
    }

    pub fn set_expense_amount(&mut self, amount: Money) {
        self.expense_form.fields_mut().amount = amount;
    }

    pub fn set_expense_category(&mut self, name: impl Into<String>) {
        self.expense_form.fields_mut().category = name.into();
    }

    pub fn set_category_name(&mut self, name: impl Into<String>) {
        self.category_form.fields_mut().name = name.into();
    }

    pub fn set_goal_amount(&mut self, amount: Money) {
        self.goal_form.fields_mut().amount = amount;
    }

    pub fn set_goal_category(&mut self, name: impl Into<String>) {
        self.goal_form.fields_mut().category = name.into();
    }
}

fn apply<R>(
    kind: EntityKind,
    submission: Submission<R>,
    error_count: usize,
    records: &mut Vec<R>,
) -> SubmitOutcome {
    match submission {
        Submission::Revealed => {
            debug!(form = kind.label(), "form revealed");
            SubmitOutcome::Revealed
        }
        Submission::Rejected => SubmitOutcome::Rejected(error_count),
        Submission::Accepted(record) => {
            records.push(record);
            info!(form = kind.label(), total = records.len(), "record created");
            SubmitOutcome::Created
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(manager: &LedgerFormManager, kind: EntityKind) -> Vec<String> {
        manager
            .errors(kind)
            .iter()
            .map(|e| e.message.clone())
            .collect()
    }

    fn create_category(manager: &mut LedgerFormManager, name: &str) {
        if !manager.is_visible(EntityKind::Category) {
            manager.submit(EntityKind::Category);
        }
        manager.set_category_name(name);
        assert_eq!(manager.submit(EntityKind::Category), SubmitOutcome::Created);
    }

    #[test]
    fn test_initial_state() {
        let manager = LedgerFormManager::new();
        assert_eq!(manager.categories().len(), 1);
        assert_eq!(manager.categories()[0].name, "Undefined");
        assert!(manager.expenses().is_empty());
        assert!(manager.goals().is_empty());
        for kind in EntityKind::ALL {
            assert!(!manager.is_visible(kind));
            assert!(manager.errors(kind).is_empty());
        }
    }

    #[test]
    fn test_hidden_submit_reveals_without_record() {
        for kind in EntityKind::ALL {
            let mut manager = LedgerFormManager::new();
            // Fully valid values must still not produce a record while hidden
            manager.set_expense_description("Coffee");
            manager.set_expense_amount(Money::from_cents(350));
            manager.set_category_name("Food");
            manager.set_goal_amount(Money::from_cents(100));
            manager.set_goal_category("Undefined");

            assert_eq!(manager.submit(kind), SubmitOutcome::Revealed);
            assert!(manager.is_visible(kind));
            assert!(manager.expenses().is_empty());
            assert_eq!(manager.categories().len(), 1);
            assert!(manager.goals().is_empty());
        }
    }

    #[test]
    fn test_button_labels() {
        let mut manager = LedgerFormManager::new();
        assert_eq!(manager.button_label(EntityKind::Expense), "New Expense");
        manager.submit(EntityKind::Expense);
        assert_eq!(manager.button_label(EntityKind::Expense), "Create Expense");
        assert_eq!(manager.button_label(EntityKind::Goal), "New Goal");
        assert_eq!(manager.button_label(EntityKind::Category), "New Category");
    }

    #[test]
    fn test_coffee_scenario() {
        let mut manager = LedgerFormManager::new();
        assert_eq!(manager.submit(EntityKind::Expense), SubmitOutcome::Revealed);
        assert!(manager.expenses().is_empty());

        manager.set_expense_description("Coffee");
        manager.set_expense_amount(Money::from_cents(350));
        manager.set_expense_category("Undefined");
        assert_eq!(manager.submit(EntityKind::Expense), SubmitOutcome::Created);

        assert_eq!(manager.expenses().len(), 1);
        let expense = &manager.expenses()[0];
        assert_eq!(expense.description, "Coffee");
        assert_eq!(expense.amount, Money::from_cents(350));
        assert_eq!(expense.category_name(), Some("Undefined"));
        assert_eq!(expense.category.as_ref(), Some(&manager.categories()[0]));
        assert!(!manager.is_visible(EntityKind::Expense));
        assert!(manager.errors(EntityKind::Expense).is_empty());
    }

    #[test]
    fn test_empty_category_name_scenario() {
        let mut manager = LedgerFormManager::new();
        manager.submit(EntityKind::Category);
        manager.set_category_name("");

        assert_eq!(manager.submit(EntityKind::Category), SubmitOutcome::Rejected(1));
        assert_eq!(
            messages(&manager, EntityKind::Category),
            vec!["Category Name should not be empty"]
        );
        assert_eq!(manager.categories().len(), 1);
        assert!(manager.is_visible(EntityKind::Category));
    }

    #[test]
    fn test_food_scenario() {
        let mut manager = LedgerFormManager::new();
        create_category(&mut manager, "Food");

        manager.submit(EntityKind::Expense);
        manager.set_expense_description("Groceries");
        manager.set_expense_amount(Money::from_cents(4_200));
        manager.set_expense_category("Food");
        manager.submit(EntityKind::Expense);

        let expense = &manager.expenses()[0];
        assert_eq!(expense.category_name(), Some("Food"));
        assert_eq!(expense.category.as_ref().map(|c| c.id), Some(manager.categories()[1].id));
    }

    #[test]
    fn test_rejected_submit_preserves_fields() {
        let mut manager = LedgerFormManager::new();
        manager.submit(EntityKind::Expense);
        manager.set_expense_description("Lunch");

        assert_eq!(manager.submit(EntityKind::Expense), SubmitOutcome::Rejected(1));
        assert_eq!(
            messages(&manager, EntityKind::Expense),
            vec!["Expense amount should not be empty"]
        );
        assert_eq!(manager.expense_form().fields().description, "Lunch");
        assert_eq!(manager.expense_form().fields().category, "Undefined");
        assert!(manager.expenses().is_empty());
    }

    #[test]
    fn test_errors_replaced_then_cleared() {
        let mut manager = LedgerFormManager::new();
        manager.submit(EntityKind::Goal);
        assert_eq!(manager.submit(EntityKind::Goal), SubmitOutcome::Rejected(2));

        manager.set_goal_amount(Money::from_cents(20_000));
        assert_eq!(manager.submit(EntityKind::Goal), SubmitOutcome::Rejected(1));
        assert_eq!(
            messages(&manager, EntityKind::Goal),
            vec!["Goal Category should not be empty"]
        );

        manager.set_goal_category("Undefined");
        assert_eq!(manager.submit(EntityKind::Goal), SubmitOutcome::Created);
        assert!(manager.errors(EntityKind::Goal).is_empty());
        assert_eq!(manager.goal_form().fields(), &GoalFields::default());
        assert_eq!(manager.goals()[0].amount.cents(), 20_000);
    }

    #[test]
    fn test_zero_amount_rejected_as_empty() {
        let mut manager = LedgerFormManager::new();
        manager.submit(EntityKind::Expense);
        manager.set_expense_description("Free sample");
        manager.set_expense_amount(Money::zero());

        assert_eq!(manager.submit(EntityKind::Expense), SubmitOutcome::Rejected(1));
        assert_eq!(
            messages(&manager, EntityKind::Expense),
            vec!["Expense amount should not be empty"]
        );
    }

    #[test]
    fn test_expense_selection_cleared_after_create() {
        let mut manager = LedgerFormManager::new();
        manager.submit(EntityKind::Expense);
        manager.set_expense_description("Coffee");
        manager.set_expense_amount(Money::from_cents(350));
        manager.submit(EntityKind::Expense);

        manager.submit(EntityKind::Expense);
        manager.set_expense_description("Tea");
        manager.set_expense_amount(Money::from_cents(250));
        assert_eq!(manager.submit(EntityKind::Expense), SubmitOutcome::Rejected(1));
        assert_eq!(
            messages(&manager, EntityKind::Expense),
            vec!["Expense category should not be empty"]
        );
    }

    #[test]
    fn test_duplicate_category_names_allowed() {
        let mut manager = LedgerFormManager::new();
        create_category(&mut manager, "Food");
        create_category(&mut manager, "Food");

        let names: Vec<_> = manager.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Undefined", "Food", "Food"]);
        assert_eq!(manager.find_category("Food").map(|c| c.id), Some(manager.categories()[1].id));
    }

    #[test]
    fn test_category_options_mirror_collection() {
        let mut manager = LedgerFormManager::new();
        create_category(&mut manager, "Food");
        create_category(&mut manager, "Rent");

        let options: Vec<CategoryOption> = manager.list_category_options().collect();
        assert_eq!(options.len(), manager.categories().len());
        for (option, category) in options.iter().zip(manager.categories()) {
            assert_eq!(option.label, category.name);
            assert_eq!(option.value, category.name);
            assert_eq!(option.key, category.name);
        }
        assert_eq!(options[0].label, "Undefined");
    }

    #[test]
    fn test_records_append_in_order() {
        let mut manager = LedgerFormManager::new();
        for (i, description) in ["Coffee", "Bus", "Book"].iter().enumerate() {
            let before = manager.expenses().to_vec();
            manager.submit(EntityKind::Expense);
            manager.set_expense_description(*description);
            manager.set_expense_amount(Money::from_cents(100 * (i as i64 + 1)));
            manager.set_expense_category("Undefined");
            assert_eq!(manager.submit(EntityKind::Expense), SubmitOutcome::Created);

            assert_eq!(manager.expenses().len(), i + 1);
            assert_eq!(&manager.expenses()[..i], before.as_slice());
            assert_eq!(manager.expenses()[i].description, *description);
        }
    }

    #[test]
    fn test_validate_does_not_mutate() {
        let mut manager = LedgerFormManager::new();
        manager.submit(EntityKind::Goal);
        let errors = manager.validate(EntityKind::Goal);
        assert_eq!(errors.len(), 2);
        assert!(manager.errors(EntityKind::Goal).is_empty());
    }

    #[test]
    fn test_unmatched_selection_yields_no_category() {
        let mut manager = LedgerFormManager::new();
        manager.submit(EntityKind::Goal);
        manager.set_goal_amount(Money::from_cents(5_000));
        manager.set_goal_category("Travel");
        assert_eq!(manager.submit(EntityKind::Goal), SubmitOutcome::Created);
        assert!(manager.goals()[0].category.is_none());
    }
}
