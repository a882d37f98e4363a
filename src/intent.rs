// 5.0: the order being edited. owned by the caller, updated one edit at a time.

use crate::input::DisplayPrecision;
use crate::margin::{margin_from_percent, PercentOption};
use crate::sizing::{resolve_close_size_delta, SizeDelta};
use crate::types::{InputDenomination, Side};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderIntent {
    pub native_size_delta: SizeDelta,
    /// Raw margin field text. Empty means unset.
    pub margin_delta: String,
    pub denomination: InputDenomination,
}

impl OrderIntent {
    pub fn new(denomination: InputDenomination) -> Self {
        Self {
            denomination,
            ..Self::default()
        }
    }

    pub fn edit_close_size(&mut self, entered: &str, current_side: Side) {
        self.native_size_delta = resolve_close_size_delta(entered, current_side);
    }

    pub fn edit_margin_delta(&mut self, value: impl Into<String>) {
        self.margin_delta = value.into();
    }

    // overwrites whatever was typed or picked before
    pub fn select_margin_percent(
        &mut self,
        idle_margin: Decimal,
        option: PercentOption,
        precision: DisplayPrecision,
    ) -> Decimal {
        let margin = margin_from_percent(idle_margin, option, precision);
        self.margin_delta = margin.to_string();
        margin
    }

    pub fn clear(&mut self) {
        self.native_size_delta = SizeDelta::unset();
        self.margin_delta.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn percent_selection_overwrites() {
        let mut intent = OrderIntent::new(InputDenomination::Usd);
        intent.edit_margin_delta("123");
        intent.select_margin_percent(dec!(1000), PercentOption::Ten, DisplayPrecision::Suggested);
        assert_eq!(intent.margin_delta, "100");
        intent.select_margin_percent(dec!(1000), PercentOption::Fifty, DisplayPrecision::Suggested);
        assert_eq!(intent.margin_delta, "500");
    }

    #[test]
    fn close_size_signed_from_side() {
        let mut intent = OrderIntent::default();
        intent.edit_close_size("0.5", Side::Long);
        assert_eq!(intent.native_size_delta.raw(), "-0.5");
        assert_eq!(intent.native_size_delta.display(), "0.5");
    }

    #[test]
    fn clear_resets_inputs() {
        let mut intent = OrderIntent::new(InputDenomination::Native);
        intent.edit_close_size("1", Side::Short);
        intent.edit_margin_delta("50");
        intent.clear();
        assert!(intent.native_size_delta.is_unset());
        assert!(intent.margin_delta.is_empty());
        assert_eq!(intent.denomination, InputDenomination::Native);
    }
}
