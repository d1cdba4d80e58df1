//! Pocket Ledger - a single-screen expense, category and goal tracker
//!
//! Records live only in memory for the length of a session. The crate is
//! split into a terminal-independent core and the TUI that drives it.
//!
//! # Architecture
//!
//! - `config`: Path resolution and user settings
//! - `error`: Application error types
//! - `logging`: Log file setup
//! - `models`: Categories, expenses, goals and money
//! - `ledger`: Form sessions, validation and the form manager
//! - `tui`: The ratatui screen
//!
//! # Example
//!
//! ```
//! use pocket_ledger::ledger::{EntityKind, LedgerFormManager, SubmitOutcome};
//! use pocket_ledger::models::Money;
//!
//! let mut ledger = LedgerFormManager::new();
//! assert_eq!(ledger.submit(EntityKind::Expense), SubmitOutcome::Revealed);
//!
//! ledger.set_expense_description("Coffee");
//! ledger.set_expense_amount(Money::from_cents(350));
//! assert_eq!(ledger.submit(EntityKind::Expense), SubmitOutcome::Created);
//! assert_eq!(ledger.expenses()[0].category_name(), Some("Undefined"));
//! ```

pub mod config;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod tui;

pub use error::LedgerError;
