//! Budget goal records

use chrono::{DateTime, Utc};

use super::category::Category;
use super::ids::GoalId;
use super::money::Money;

/// A spending goal for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    pub id: GoalId,
    pub category: Option<Category>,
    pub amount: Money,
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// Create a new goal
    pub fn new(category: Option<Category>, amount: Money) -> Self {
        Self {
            id: GoalId::new(),
            category,
            amount,
            created_at: Utc::now(),
        }
    }

    /// Name of the captured category, if any
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }
}
