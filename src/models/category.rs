//! Spending categories
//!
//! Categories are created through the category form and never renamed or
//! removed. Names are not required to be unique.

use chrono::{DateTime, Utc};
use std::fmt;

use super::ids::CategoryId;

/// Name of the category that exists before the user creates any
pub const DEFAULT_CATEGORY_NAME: &str = "Undefined";

/// A spending category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Stable identifier, independent of the display name
    pub id: CategoryId,

    /// Category name
    pub name: String,

    /// When the category was created
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Create a new category
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            created_at: Utc::now(),
        }
    }

    /// The category present at startup
    pub fn undefined() -> Self {
        Self::new(DEFAULT_CATEGORY_NAME)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
