//! Currency input widget
//!
//! Digits are shifted in from the right as cents, so typing `3`, `5`, `0`
//! produces `3.50`. Backspace shifts the last digit out and `-` flips the
//! sign. Display uses the configured delimiter and separator.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use crate::config::CurrencySettings;
use crate::models::Money;

use super::{field_label, CURSOR_STYLE};

/// Largest magnitude accepted, in cents
const MAX_CENTS: i64 = 999_999_999_999;

/// A numeric amount field
#[derive(Debug, Clone, Default)]
pub struct CurrencyInput {
    value: Money,
    /// Label
    pub label: String,
}

impl CurrencyInput {
    /// Create a new input holding zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Current amount
    pub fn value(&self) -> Money {
        self.value
    }

    /// Replace the amount
    pub fn set_value(&mut self, value: Money) {
        self.value = value;
    }

    /// Shift a digit in as the new last cent. Ignored past the maximum.
    pub fn push_digit(&mut self, digit: u32) {
        let magnitude = self.value.cents().abs();
        let Some(next) = magnitude
            .checked_mul(10)
            .and_then(|m| m.checked_add(i64::from(digit)))
            .filter(|m| *m <= MAX_CENTS)
        else {
            return;
        };
        let signed = if self.value.is_negative() { -next } else { next };
        self.value = Money::from_cents(signed);
    }

    /// Drop the last digit
    pub fn backspace(&mut self) {
        self.value = Money::from_cents(self.value.cents() / 10);
    }

    /// Flip between positive and negative
    pub fn toggle_sign(&mut self) {
        self.value = -self.value;
    }

    /// Reset to zero
    pub fn clear(&mut self) {
        self.value = Money::zero();
    }

    /// Render as a single line, drawing the cursor when focused
    pub fn line(&self, focused: bool, currency: &CurrencySettings) -> Line<'static> {
        let mut spans = vec![
            field_label(&self.label, focused),
            Span::styled(
                self.value.format_with(currency),
                Style::default().fg(Color::White),
            ),
        ];
        if focused {
            spans.push(Span::styled(" ", CURSOR_STYLE));
        }
        Line::from(spans)
    }
}
