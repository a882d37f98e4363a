// 8.0.2: result types for engine operations. nothing here is an error:
// every outcome carries a value plus a validity flag.

use crate::sizing::{SizeDelta, Validation};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeOutcome {
    pub delta: SizeDelta,
    pub validation: Validation,
}

impl SizeOutcome {
    /// Unsigned text for the size field.
    pub fn display(&self) -> String {
        self.delta.display()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarginOutcome {
    pub margin_delta: Decimal,
    pub validation: Validation,
}
