//! Lenient parsing of trader-entered decimal strings.
//!
//! Inputs are edited keystroke by keystroke, so half-typed values ("-", "1.",
//! "abc") are normal. Anything that does not parse is treated as unset rather
//! than reported as an error.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What a raw input field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedInput {
    Empty,
    /// Not a number, including half-typed text like "-" or "1.2.3".
    Unparseable,
    Value(Decimal),
    /// A well-formed number too large in magnitude for `Decimal`.
    OutOfRange { negative: bool },
}

impl ParsedInput {
    pub fn value(&self) -> Option<Decimal> {
        match self {
            ParsedInput::Value(v) => Some(*v),
            _ => None,
        }
    }

    /// Whether the magnitude is strictly above `bound`. Out of range numbers
    /// are above every bound, text that is not a number counts as zero.
    pub fn abs_exceeds(&self, bound: Decimal) -> bool {
        match self {
            ParsedInput::Value(v) => v.abs() > bound,
            ParsedInput::OutOfRange { .. } => true,
            ParsedInput::Empty | ParsedInput::Unparseable => Decimal::ZERO > bound,
        }
    }

    /// Whether the signed value is strictly above `bound`.
    pub fn exceeds(&self, bound: Decimal) -> bool {
        match self {
            ParsedInput::Value(v) => *v > bound,
            ParsedInput::OutOfRange { negative } => !negative,
            ParsedInput::Empty | ParsedInput::Unparseable => Decimal::ZERO > bound,
        }
    }
}

/// Classify an input field.
///
/// Scientific notation is accepted ("1e5" is 100000). More than 28 fractional
/// digits are rounded away, so "0.00000000000000000000000000001" reads as
/// zero. Numbers too large to represent come back as `OutOfRange` rather than
/// `Unparseable` so validators can still flag them.
pub fn classify_input(raw: &str) -> ParsedInput {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ParsedInput::Empty;
    }
    if let Ok(v) = Decimal::from_str(trimmed) {
        return ParsedInput::Value(v);
    }
    if let Ok(v) = Decimal::from_scientific(trimmed) {
        return ParsedInput::Value(v);
    }
    match integer_digits(trimmed) {
        None => ParsedInput::Unparseable,
        Some(order) if order > 0 => ParsedInput::OutOfRange {
            negative: trimmed.starts_with('-'),
        },
        // too small to represent
        Some(_) => ParsedInput::Value(Decimal::ZERO),
    }
}

// digits before the point once the exponent is applied: "123.4e2" -> 5,
// "0.001" -> -2. None when the text is not a number literal
fn integer_digits(text: &str) -> Option<i64> {
    let unsigned = text
        .strip_prefix(|c: char| c == '-' || c == '+')
        .unwrap_or(text);
    let (mantissa, exponent) = match unsigned.split_once(|c: char| c == 'e' || c == 'E') {
        Some((m, e)) => (m, e.parse::<i64>().ok()?),
        None => (unsigned, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !all_digits(int_part) || !all_digits(frac_part) {
        return None;
    }

    let significant = int_part.trim_start_matches('0');
    if !significant.is_empty() {
        return Some(significant.len() as i64 + exponent);
    }
    let frac_significant = frac_part.trim_start_matches('0');
    if frac_significant.is_empty() {
        return Some(0);
    }
    let leading_zeros = (frac_part.len() - frac_significant.len()) as i64;
    Some(exponent - leading_zeros)
}

/// Parse an input field. Empty, unparseable and out of range text yield
/// `None`; use [`classify_input`] to tell them apart.
pub fn parse_input(raw: &str) -> Option<Decimal> {
    classify_input(raw).value()
}

pub fn parse_or_zero(raw: &str) -> Decimal {
    parse_input(raw).unwrap_or(Decimal::ZERO)
}

/// Input text without any minus signs, as shown in an unsigned field.
pub fn strip_sign(raw: &str) -> String {
    raw.replace('-', "")
}

/// Number of decimals used when flooring a value for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayPrecision {
    Fixed(u32),
    /// Pick decimals from the value's magnitude.
    Suggested,
}

impl Default for DisplayPrecision {
    fn default() -> Self {
        Self::Suggested
    }
}

impl DisplayPrecision {
    pub fn decimals_for(&self, value: Decimal) -> u32 {
        match self {
            DisplayPrecision::Fixed(dp) => *dp,
            DisplayPrecision::Suggested => suggested_decimals(value),
        }
    }
}

// small values need more decimals to show anything meaningful
pub fn suggested_decimals(value: Decimal) -> u32 {
    let v = value.abs();
    if v >= dec!(100000) {
        0
    } else if v >= dec!(10) || v.is_zero() {
        2
    } else if v >= dec!(0.1) {
        4
    } else if v >= dec!(0.01) {
        5
    } else if v >= dec!(0.001) {
        6
    } else if v >= dec!(0.0001) {
        7
    } else if v >= dec!(0.00001) {
        8
    } else {
        11
    }
}

/// Round toward negative infinity at the resolved precision.
pub fn floor_to_precision(value: Decimal, precision: DisplayPrecision) -> Decimal {
    let dp = precision.decimals_for(value);
    value
        .round_dp_with_strategy(dp, RoundingStrategy::ToNegativeInfinity)
        .normalize()
}
