//! Currency masking: digit streams, amounts, and display strings.
//!
//! Display convention: thousands grouped with `.`, decimal separator `,`,
//! exactly two fractional digits (`1.234,56`).

pub mod digits;
pub mod engine;
pub mod format;
pub mod parse;

#[cfg(test)]
mod props;

pub use digits::{digits_to_amount, strip_non_digits};
pub use engine::{MaskOutput, on_focus_lost, on_raw_input, render_seed};
pub use format::{
    DECIMAL_SEPARATOR, GROUP_SEPARATOR, format_amount, format_brl, format_brl_str, format_f64,
    format_value,
};
pub use parse::{parse_currency, parse_display};
