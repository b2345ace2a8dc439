//! Property-based tests for the currency mask.
//!
//! - Digit streams map to their decimal value as cents
//! - Display strings re-enter the digit stream without losing cents
//! - Blur always leaves the canonical grouped two-decimal form

use centavo_shared::Amount;
use proptest::prelude::*;

use super::digits::{digits_to_amount, strip_non_digits};
use super::engine::{on_focus_lost, on_raw_input};
use super::format::format_amount;
use super::parse::parse_display;

/// Checks `^\d{1,3}(\.\d{3})*,\d{2}$`.
fn is_canonical_display(display: &str) -> bool {
    let Some((int_part, frac_part)) = display.split_once(',') else {
        return false;
    };
    if frac_part.len() != 2 || !frac_part.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    let groups: Vec<&str> = int_part.split('.').collect();
    let Some((first, rest)) = groups.split_first() else {
        return false;
    };
    (1..=3).contains(&first.len())
        && first.chars().all(|c| c.is_ascii_digit())
        && rest
            .iter()
            .all(|g| g.len() == 3 && g.chars().all(|c| c.is_ascii_digit()))
}

/// Strategy for cent counts below 10^12.
fn minor_units() -> impl Strategy<Value = u128> {
    0u128..1_000_000_000_000u128
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Any digit string is read as its decimal value in cents.
    #[test]
    fn prop_digit_stream_is_cent_count(digits in "[0-9]{0,20}") {
        let expected = if digits.is_empty() {
            0
        } else {
            digits.parse::<u128>().unwrap()
        };
        prop_assert_eq!(digits_to_amount(&digits).minor_units(), expected);
    }

    /// Noise between digits never changes the cent count.
    #[test]
    fn prop_noise_is_ignored(raw in "[0-9a-zA-Z.,$ -]{0,30}") {
        let digits = strip_non_digits(&raw);
        prop_assert_eq!(digits_to_amount(&raw), digits_to_amount(&digits));
    }

    /// A formatted display fed back through the digit stream gives the same cents,
    /// and its digit count is the input's minus collapsed leading zeros.
    #[test]
    fn prop_display_reenters_digit_stream(m in minor_units()) {
        let display = format_amount(Amount::from_minor_units(m));
        prop_assert_eq!(digits_to_amount(&display).minor_units(), m);

        let digits = strip_non_digits(&display);
        let significant = m.to_string().len();
        let expected_len = significant.max(3);
        prop_assert_eq!(digits.len(), expected_len);
    }

    /// Re-masking an already masked field is a no-op.
    #[test]
    fn prop_raw_input_is_idempotent_on_display(m in minor_units()) {
        let display = format_amount(Amount::from_minor_units(m));
        let output = on_raw_input(&display);
        prop_assert_eq!(&output.display, &display);
        prop_assert_eq!(output.amount.minor_units(), m);
    }

    /// Every rendered amount has the canonical shape and parses back exactly.
    #[test]
    fn prop_format_parse_round_trip(m in minor_units()) {
        let amount = Amount::from_minor_units(m);
        let display = format_amount(amount);
        prop_assert!(is_canonical_display(&display), "not canonical: {}", display);
        prop_assert_eq!(parse_display(&display), amount.to_decimal());
    }

    /// Blur leaves canonical form for any text with a numeric token.
    #[test]
    fn prop_focus_lost_is_canonical(
        prefix in "[a-zA-Z$ ]{0,3}",
        int_part in "[0-9]{1,12}",
        frac_part in "(,[0-9]{0,4})?",
        suffix in "[a-zA-Z ]{0,3}",
    ) {
        let text = format!("{prefix}{int_part}{frac_part}{suffix}");
        let display = on_focus_lost(&text);
        prop_assert!(is_canonical_display(&display), "{} -> {}", text, display);
    }

    /// Blur on a canonical display is a no-op.
    #[test]
    fn prop_focus_lost_is_idempotent(m in minor_units()) {
        let display = format_amount(Amount::from_minor_units(m));
        prop_assert_eq!(on_focus_lost(&display), display);
    }

    /// Arbitrary text never breaks blur normalization.
    #[test]
    fn prop_focus_lost_handles_any_text(text in "\\PC{0,24}") {
        let display = on_focus_lost(&text);
        prop_assert!(is_canonical_display(&display), "{:?} -> {}", text, display);
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_canonical_checker() {
        assert!(is_canonical_display("0,00"));
        assert!(is_canonical_display("1.234,56"));
        assert!(is_canonical_display("123.456.789,01"));
        assert!(!is_canonical_display("1234,56"));
        assert!(!is_canonical_display("1.23,45"));
        assert!(!is_canonical_display("1,5"));
        assert!(!is_canonical_display(".123,00"));
    }

    #[test]
    fn test_zero_and_example_amounts() {
        assert_eq!(format_amount(Amount::ZERO), "0,00");
        assert_eq!(format_amount(Amount::from_minor_units(123_456)), "1.234,56");
    }
}
