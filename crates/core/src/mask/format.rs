//! Display formatting for amounts and canonical numeric values.

use centavo_shared::Amount;
use rust_decimal::Decimal;
use rust_decimal::prelude::*;

/// Separator inserted between groups of three integer digits.
pub const GROUP_SEPARATOR: char = '.';

/// Separator between the integer part and the two fractional digits.
pub const DECIMAL_SEPARATOR: char = ',';

/// Renders an amount as a display string, e.g. `1.234,56`.
#[must_use]
pub fn format_amount(amount: Amount) -> String {
    let mut out = group_thousands(&amount.whole_units().to_string());
    out.push(DECIMAL_SEPARATOR);
    out.push_str(&format!("{:02}", amount.cents()));
    out
}

/// Renders a canonical numeric value with two fractional digits.
///
/// Rounds half away from zero. Negative values keep a leading `-`;
/// magnitudes above [`Amount::MAX`] saturate.
#[must_use]
pub fn format_value(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let body = format_amount(Amount::from_decimal(rounded.abs()));

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{body}")
    } else {
        body
    }
}

/// Renders a host floating-point value; NaN and infinities render as zero.
#[must_use]
pub fn format_f64(value: f64) -> String {
    format_value(Decimal::from_f64(value).unwrap_or(Decimal::ZERO))
}

/// Renders a value with a currency symbol, e.g. `R$ 1.234,56` or `-R$ 1.234,56`.
///
/// Uses banker's rounding to two places.
#[must_use]
pub fn format_brl(value: Decimal, symbol: &str) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    let body = format_amount(Amount::from_decimal(rounded.abs()));

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{symbol} {body}")
    } else {
        format!("{symbol} {body}")
    }
}

/// Template-filter variant of [`format_brl`] for raw machine text.
///
/// Empty or non-numeric text renders as zero with the symbol.
#[must_use]
pub fn format_brl_str(text: &str, symbol: &str) -> String {
    let value = Decimal::from_str(text.trim()).unwrap_or(Decimal::ZERO);
    format_brl(value, symbol)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 + 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}
