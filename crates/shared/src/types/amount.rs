//! Non-negative monetary amount held as a whole number of cents.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! The canonical numeric value is exposed as `rust_decimal::Decimal`.

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};

use crate::error::MaskError;

/// Largest cent count whose canonical value still fits in a `Decimal` mantissa.
const MAX_MINOR_UNITS: u128 = 79_228_162_514_264_337_593_543_950_335;

/// Number of fractional digits carried by every amount.
pub const FRACTION_DIGITS: u32 = 2;

/// A non-negative amount with exactly two fractional digits.
///
/// Stored as an integer count of minor units (cents) so that typing,
/// formatting and re-parsing never drift. Arithmetic that would exceed
/// [`Amount::MAX`] saturates instead of failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount {
    minor_units: u128,
}

impl Amount {
    /// The zero amount.
    pub const ZERO: Self = Self { minor_units: 0 };

    /// The largest representable amount.
    pub const MAX: Self = Self {
        minor_units: MAX_MINOR_UNITS,
    };

    /// Creates an amount from a cent count, saturating at [`Amount::MAX`].
    #[must_use]
    pub const fn from_minor_units(minor_units: u128) -> Self {
        if minor_units > MAX_MINOR_UNITS {
            Self::MAX
        } else {
            Self { minor_units }
        }
    }

    /// Returns the cent count.
    #[must_use]
    pub const fn minor_units(self) -> u128 {
        self.minor_units
    }

    /// Returns the whole currency units (the part before the decimal separator).
    #[must_use]
    pub const fn whole_units(self) -> u128 {
        self.minor_units / 100
    }

    /// Returns the cents past the whole units, always in `0..100`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn cents(self) -> u8 {
        (self.minor_units % 100) as u8
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.minor_units == 0
    }

    /// Appends one decimal digit to the cent count, shifting it left.
    ///
    /// `digit` must be in `0..=9`; larger values are reduced modulo 10.
    #[must_use]
    pub fn push_digit(self, digit: u8) -> Self {
        self.minor_units
            .checked_mul(10)
            .and_then(|shifted| shifted.checked_add(u128::from(digit % 10)))
            .map_or(Self::MAX, Self::from_minor_units)
    }

    /// Returns the canonical numeric value, `minor_units / 100`.
    #[must_use]
    pub fn to_decimal(self) -> Decimal {
        i128::try_from(self.minor_units)
            .ok()
            .and_then(|mantissa| Decimal::try_from_i128_with_scale(mantissa, FRACTION_DIGITS).ok())
            .unwrap_or(Decimal::MAX)
    }

    /// Converts a canonical numeric value to an amount.
    ///
    /// Rounds to cents (half away from zero), clamps negative values to
    /// zero and saturates values above [`Amount::MAX`].
    #[must_use]
    pub fn from_decimal(value: Decimal) -> Self {
        if value <= Decimal::ZERO {
            return Self::ZERO;
        }

        let rounded =
            value.round_dp_with_strategy(FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero);

        // After rounding the scale is at most FRACTION_DIGITS.
        let factor = 10u128.pow(FRACTION_DIGITS - rounded.scale());

        u128::try_from(rounded.mantissa())
            .ok()
            .and_then(|mantissa| mantissa.checked_mul(factor))
            .map_or(Self::MAX, Self::from_minor_units)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = MaskError;

    /// Strict conversion: rejects negative values and sub-cent precision.
    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(MaskError::NegativeAmount(value.to_string()));
        }
        if value.round_dp(FRACTION_DIGITS) != value {
            return Err(MaskError::SubCentPrecision(value.to_string()));
        }
        Ok(Self::from_decimal(value))
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.to_decimal()
    }
}

impl std::fmt::Display for Amount {
    /// Machine form with a `.` decimal point, e.g. `1234.56`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.whole_units(), self.cents())
    }
}

#[cfg(test)]
#[path = "amount_tests.rs"]
mod tests;
