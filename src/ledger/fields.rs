//! Field sets for the expense, category and goal forms
//!
//! Required-field rules follow a simple presence check: text must not be
//! empty (whitespace counts as content) and amounts must not be zero. A zero
//! amount is therefore reported as "empty" even when the user meant it.

use crate::models::{Category, Expense, Goal, Money, DEFAULT_CATEGORY_NAME};

use super::form::{FormFields, ValidationError};

/// First category whose name matches exactly
pub fn resolve_category(categories: &[Category], name: &str) -> Option<Category> {
    categories.iter().find(|c| c.name == name).cloned()
}

/// Values typed into the expense form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseFields {
    pub description: String,
    pub amount: Money,
    /// Selected category name; empty when nothing is selected
    pub category: String,
}

impl Default for ExpenseFields {
    fn default() -> Self {
        Self {
            description: String::new(),
            amount: Money::zero(),
            category: DEFAULT_CATEGORY_NAME.to_string(),
        }
    }
}

impl FormFields for ExpenseFields {
    type Record = Expense;

    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.description.is_empty() {
            errors.push(ValidationError::new("Expense description should not be empty"));
        }
        if self.amount.is_zero() {
            errors.push(ValidationError::new("Expense amount should not be empty"));
        }
        if self.category.is_empty() {
            errors.push(ValidationError::new("Expense category should not be empty"));
        }
        errors
    }

    fn build(&self, categories: &[Category]) -> Expense {
        Expense::new(
            self.description.clone(),
            self.amount,
            resolve_category(categories, &self.category),
        )
    }

    // The selection is cleared rather than restored to "Undefined", so the
    // next expense needs an explicit category.
    fn reset(&mut self) {
        self.description.clear();
        self.amount = Money::zero();
        self.category.clear();
    }
}

/// Values typed into the category form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFields {
    pub name: String,
}

impl FormFields for CategoryFields {
    type Record = Category;

    fn validate(&self) -> Vec<ValidationError> {
        if self.name.is_empty() {
            vec![ValidationError::new("Category Name should not be empty")]
        } else {
            Vec::new()
        }
    }

    fn build(&self, _categories: &[Category]) -> Category {
        Category::new(self.name.clone())
    }

    fn reset(&mut self) {
        self.name.clear();
    }
}

/// Values typed into the goal form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalFields {
    pub amount: Money,
    /// Selected category name; empty when nothing is selected
    pub category: String,
}

impl FormFields for GoalFields {
    type Record = Goal;

    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.amount.is_zero() {
            errors.push(ValidationError::new("Goal Amount should not be empty"));
        }
        if self.category.is_empty() {
            errors.push(ValidationError::new("Goal Category should not be empty"));
        }
        errors
    }

    fn build(&self, categories: &[Category]) -> Goal {
        Goal::new(resolve_category(categories, &self.category), self.amount)
    }

    fn reset(&mut self) {
        self.amount = Money::zero();
        self.category.clear();
    }
}
