//! Composite mask operations bound to field events.

use centavo_shared::Amount;
use rust_decimal::Decimal;

use super::digits::digits_to_amount;
use super::format::format_amount;
use super::parse::parse_display;

/// Result of re-masking a field after raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskOutput {
    /// New display string for the field.
    pub display: String,
    /// Amount derived from the digit stream.
    pub amount: Amount,
}

impl MaskOutput {
    /// Canonical numeric value carried by value-changed notifications.
    #[must_use]
    pub fn numeric_value(&self) -> Decimal {
        self.amount.to_decimal()
    }
}

/// Collapses the current field text to "all digits are cents" and re-renders it.
#[must_use]
pub fn on_raw_input(current_display: &str) -> MaskOutput {
    let amount = digits_to_amount(current_display);
    MaskOutput {
        display: format_amount(amount),
        amount,
    }
}

/// Re-normalizes a field that may have been left in an intermediate state.
///
/// Negative values clamp to zero.
#[must_use]
pub fn on_focus_lost(current_display: &str) -> String {
    format_amount(Amount::from_decimal(parse_display(current_display)))
}

/// Renders the seed text found in a field when the mask is attached.
///
/// Empty text becomes `0,00`; anything else is read as a display string or
/// machine number.
#[must_use]
pub fn render_seed(seed: &str) -> String {
    if seed.trim().is_empty() {
        return format_amount(Amount::ZERO);
    }
    on_focus_lost(seed)
}
