//! Form sessions
//!
//! A form session backs one create flow: whether the form is shown, the
//! values typed so far, and the messages from the last failed submit.
//! The submit button has two phases. Pressing it while the form is hidden
//! only reveals the form; pressing it while visible validates and, when
//! nothing is wrong, yields a record and resets the session.

use std::fmt;

use crate::models::Category;

/// A single failed field rule, shown to the user as-is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// The field set of one form
pub trait FormFields: Default {
    /// Record produced by a successful submit
    type Record;

    /// Check every required-field rule, in display order
    fn validate(&self) -> Vec<ValidationError>;

    /// Build the record, resolving category selections against `categories`
    fn build(&self, categories: &[Category]) -> Self::Record;

    /// Clear the fields after a record was created
    fn reset(&mut self);
}

/// What a submit press did to a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission<R> {
    /// The form was hidden and is now shown
    Revealed,
    /// Validation failed; the errors are stored on the session
    Rejected,
    /// A record was built; the session is hidden and reset
    Accepted(R),
}

/// Visibility, values and errors for one create flow
#[derive(Debug, Clone, Default)]
pub struct FormSession<F> {
    visible: bool,
    fields: F,
    errors: Vec<ValidationError>,
}

impl<F: FormFields> FormSession<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the form is shown
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Current field values
    pub fn fields(&self) -> &F {
        &self.fields
    }

    /// Mutable access for input handlers
    pub fn fields_mut(&mut self) -> &mut F {
        &mut self.fields
    }

    /// Messages from the last failed submit
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Run the two-phase submit
    pub fn submit(&mut self, categories: &[Category]) -> Submission<F::Record> {
        if !self.visible {
            self.visible = true;
            return Submission::Revealed;
        }

        let errors = self.fields.validate();
        if !errors.is_empty() {
            self.errors = errors;
            return Submission::Rejected;
        }

        let record = self.fields.build(categories);
        self.fields.reset();
        self.errors.clear();
        self.visible = false;
        Submission::Accepted(record)
    }
}
