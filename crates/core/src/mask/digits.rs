//! Digit-stream interpretation: every typed digit is a cent.

use centavo_shared::Amount;

/// Interprets the ASCII digits of `raw` as a cent count.
///
/// Every other character is ignored; no digits yields zero. Streams longer
/// than [`Amount::MAX`] saturate. Never fails.
#[must_use]
pub fn digits_to_amount(raw: &str) -> Amount {
    raw.chars()
        .filter_map(|c| c.to_digit(10))
        .filter_map(|d| u8::try_from(d).ok())
        .fold(Amount::ZERO, Amount::push_digit)
}

/// Returns only the ASCII digits of `raw`, in order.
#[must_use]
pub fn strip_non_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}
