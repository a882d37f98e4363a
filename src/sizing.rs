// 2.0: close-position sizing. the trader types an unsigned amount to close and
// the sign comes from the side currently held: closing a long sells, closing
// a short buys.

use crate::input::{classify_input, strip_sign, ParsedInput};
use crate::position::PositionDetails;
use crate::types::Side;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outcome of an input check. Validators never fail, they only flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    pub invalid: bool,
}

impl Validation {
    pub fn valid() -> Self {
        Self { invalid: false }
    }

    pub fn invalid() -> Self {
        Self { invalid: true }
    }

    pub fn is_valid(&self) -> bool {
        !self.invalid
    }
}

/// Signed size delta as stored in the order inputs. Empty means unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeDelta(String);

impl SizeDelta {
    pub fn unset() -> Self {
        Self(String::new())
    }

    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn raw(&self) -> &str {
        &self.0
    }

    pub fn is_unset(&self) -> bool {
        self.0.is_empty()
    }

    pub fn parsed(&self) -> ParsedInput {
        classify_input(&self.0)
    }

    pub fn value(&self) -> Option<Decimal> {
        self.parsed().value()
    }

    pub fn value_or_zero(&self) -> Decimal {
        self.value().unwrap_or(Decimal::ZERO)
    }

    // the size field always shows an unsigned magnitude
    pub fn display(&self) -> String {
        strip_sign(&self.0)
    }
}

// 2.1: sign the entered magnitude against the held side
pub fn resolve_close_size_delta(entered: &str, current_side: Side) -> SizeDelta {
    let magnitude = strip_sign(entered);
    if magnitude.is_empty() {
        return SizeDelta::unset();
    }
    match current_side {
        Side::Long => SizeDelta(format!("-{magnitude}")),
        Side::Short => SizeDelta(magnitude),
    }
}

// 2.2: unset never blocks, only out of range values do
pub fn validate_size_delta(delta: &SizeDelta, max_tradable: Decimal) -> Validation {
    if delta.is_unset() {
        return Validation::valid();
    }
    Validation {
        invalid: delta.parsed().abs_exceeds(max_tradable),
    }
}

pub fn max_close_size(position: &PositionDetails) -> Decimal {
    position.size.abs()
}
