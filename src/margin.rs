//! Margin allocation for new orders.
//!
//! Traders either type a margin amount or pick a share of their idle margin
//! with one of four fixed percentage buttons. The computed allocation is
//! floored to display precision so it can never exceed what is available.
//!
//! Sufficiency is only checked when amounts are entered in sUSD. In native
//! denomination the check is left to the downstream quote.

use crate::input::{classify_input, floor_to_precision, DisplayPrecision};
use crate::sizing::Validation;
use crate::types::InputDenomination;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PercentOption {
    Ten,
    TwentyFive,
    Fifty,
    Hundred,
}

impl PercentOption {
    /// Button order as displayed.
    pub const ALL: [PercentOption; 4] = [
        PercentOption::Ten,
        PercentOption::TwentyFive,
        PercentOption::Fifty,
        PercentOption::Hundred,
    ];

    pub fn percent(&self) -> Decimal {
        match self {
            PercentOption::Ten => Decimal::from(10),
            PercentOption::TwentyFive => Decimal::from(25),
            PercentOption::Fifty => Decimal::from(50),
            PercentOption::Hundred => Decimal::from(100),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PercentOption::Ten => "10%",
            PercentOption::TwentyFive => "25%",
            PercentOption::Fifty => "50%",
            PercentOption::Hundred => "100%",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.label() == label.trim())
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

pub fn margin_from_percent(
    idle_margin: Decimal,
    option: PercentOption,
    precision: DisplayPrecision,
) -> Decimal {
    let margin = idle_margin / Decimal::ONE_HUNDRED * option.percent();
    floor_to_precision(margin, precision)
}

pub fn validate_margin_delta(
    input: &str,
    max_margin: Decimal,
    denomination: InputDenomination,
) -> Validation {
    let invalid = denomination == InputDenomination::Usd
        && !input.is_empty()
        && classify_input(input).exceeds(max_margin);
    Validation { invalid }
}
