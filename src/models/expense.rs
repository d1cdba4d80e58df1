//! Expense records

use chrono::{DateTime, Utc};

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;

/// A single recorded expense
///
/// The category is captured when the expense is created. It is `None` when
/// the selected name did not match any category at that moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,
    pub amount: Money,
    pub category: Option<Category>,
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense
    pub fn new(description: impl Into<String>, amount: Money, category: Option<Category>) -> Self {
        Self {
            id: ExpenseId::new(),
            description: description.into(),
            amount,
            category,
            created_at: Utc::now(),
        }
    }

    /// Name of the captured category, if any
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }
}
