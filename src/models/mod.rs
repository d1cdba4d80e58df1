//! Core data models for Pocket Ledger
//!
//! Categories, expenses and goals, plus the money and ID types they share.
//! All records are immutable once created.

pub mod category;
pub mod expense;
pub mod goal;
pub mod ids;
pub mod money;

pub use category::{Category, DEFAULT_CATEGORY_NAME};
pub use expense::Expense;
pub use goal::Goal;
pub use ids::{CategoryId, ExpenseId, GoalId};
pub use money::Money;
