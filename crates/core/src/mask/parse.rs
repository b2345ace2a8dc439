//! Parsing display strings back into canonical numeric values.

use centavo_shared::{MaskError, MaskResult};
use rust_decimal::Decimal;
use rust_decimal::prelude::*;

use super::format::{DECIMAL_SEPARATOR, GROUP_SEPARATOR};

/// Largest scale a `Decimal` can carry.
const MAX_SCALE: i64 = 28;

/// Parses a display string (`1.234,56`) or a plain machine number (`1234.56`).
///
/// Text containing the decimal separator is read as a display string: every
/// `.` is removed and the first `,` becomes the decimal point. Text without
/// it is first tried as a plain machine decimal. The longest leading number
/// is then taken, so trailing garbage is ignored. Empty or unparseable text
/// yields zero.
#[must_use]
pub fn parse_display(text: &str) -> Decimal {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }

    if !trimmed.contains(DECIMAL_SEPARATOR) && is_plain_decimal(trimmed) {
        if let Ok(value) = Decimal::from_str(trimmed) {
            return value;
        }
    }

    let normalized = trimmed
        .replace(GROUP_SEPARATOR, "")
        .replacen(DECIMAL_SEPARATOR, ".", 1);

    leading_number(&normalized).unwrap_or(Decimal::ZERO)
}

/// Strict parse for submitted form values.
///
/// Accepts plain and scientific decimals as-is, strips currency symbols
/// and other noise, reads separator-free digit runs as cents, and applies
/// the display convention when a `,` is present. Empty text is zero.
pub fn parse_currency(text: &str) -> MaskResult<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Decimal::new(0, 2));
    }

    if let Ok(value) = Decimal::from_str(trimmed) {
        return Ok(value);
    }

    if let Some(mantissa) = scientific_mantissa(trimmed)
        && is_plain_decimal(mantissa)
    {
        return leading_number(trimmed)
            .ok_or_else(|| MaskError::InvalidAmount(text.to_string()));
    }

    let clean: String = trimmed
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == DECIMAL_SEPARATOR || *c == GROUP_SEPARATOR)
        .collect();

    if !clean.contains(DECIMAL_SEPARATOR) && !clean.contains(GROUP_SEPARATOR) {
        if clean.is_empty() {
            return Ok(Decimal::new(0, 2));
        }
        return Decimal::from_str(&clean)
            .ok()
            .and_then(|cents| cents.checked_div(Decimal::ONE_HUNDRED))
            .ok_or_else(|| MaskError::InvalidAmount(text.to_string()));
    }

    let normalized = if clean.contains(DECIMAL_SEPARATOR) {
        clean.replace(GROUP_SEPARATOR, "").replace(DECIMAL_SEPARATOR, ".")
    } else {
        clean
    };

    Decimal::from_str(&normalized).map_err(|_| MaskError::InvalidAmount(text.to_string()))
}

fn is_plain_decimal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['-', '+']).unwrap_or(text);
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    !(int_part.is_empty() && frac_part.is_empty())
        && int_part.chars().all(|c| c.is_ascii_digit())
        && frac_part.chars().all(|c| c.is_ascii_digit())
}

/// Returns `1.5` for `1.5e3` when the exponent is well formed.
fn scientific_mantissa(text: &str) -> Option<&str> {
    let (mantissa, exponent) = text.split_once(['e', 'E'])?;
    let digits = exponent.strip_prefix(['-', '+']).unwrap_or(exponent);
    (!digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())).then_some(mantissa)
}

/// Reads the longest numeric prefix: sign, digits, fraction, exponent.
fn leading_number(text: &str) -> Option<Decimal> {
    let bytes = text.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let int_start = pos;
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    let int_digits = &text[int_start..pos];

    let mut frac_digits = "";
    if bytes.get(pos) == Some(&b'.') {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
        frac_digits = &text[frac_start..end];
        if !frac_digits.is_empty() || !int_digits.is_empty() {
            pos = end;
        }
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let mut exponent = 0i64;
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut end = pos + 1;
        if matches!(bytes.get(end), Some(b'-' | b'+')) {
            end += 1;
        }
        let digits_start = end;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
        if end > digits_start {
            let digits = &text[pos + 1..end];
            // Absurd exponents over- or underflow below anyway.
            let saturated = if digits.starts_with('-') { i64::MIN } else { i64::MAX };
            exponent = digits.parse().unwrap_or(saturated);
        }
    }

    let sign = if negative { "-" } else { "" };
    let int_digits = if int_digits.is_empty() { "0" } else { int_digits };
    let mantissa = if frac_digits.is_empty() {
        format!("{sign}{int_digits}")
    } else {
        format!("{sign}{int_digits}.{frac_digits}")
    };

    let value = Decimal::from_str(&mantissa).ok()?;
    scale_by_power_of_ten(value, exponent)
}

/// Multiplies by `10^exponent`; results too small to represent become zero.
fn scale_by_power_of_ten(value: Decimal, exponent: i64) -> Option<Decimal> {
    if value.is_zero() {
        return Some(value);
    }
    if exponent >= 0 {
        // A non-zero mantissa overflows well before this many shifts.
        if exponent > 2 * MAX_SCALE {
            return None;
        }
        (0..exponent).try_fold(value, |acc, _| acc.checked_mul(Decimal::TEN))
    } else {
        let shifted = u32::try_from(exponent.unsigned_abs())
            .ok()
            .and_then(|shift| shift.checked_add(value.scale()))
            .filter(|scale| i64::from(*scale) <= MAX_SCALE);
        Some(match shifted {
            Some(scale) => {
                let mut scaled = value;
                scaled.set_scale(scale).ok()?;
                scaled
            }
            None => Decimal::ZERO,
        })
    }
}
