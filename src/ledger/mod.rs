//! Ledger state and the create/validate flows
//!
//! Everything here is independent of the terminal. `LedgerFormManager` is
//! the single owner of records and form sessions; the TUI only reads from it
//! and forwards input.

pub mod fields;
pub mod form;
pub mod manager;

pub use fields::{CategoryFields, ExpenseFields, GoalFields};
pub use form::{FormFields, FormSession, Submission, ValidationError};
pub use manager::{CategoryOption, EntityKind, LedgerFormManager, SubmitOutcome};
