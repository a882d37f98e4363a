//! Close-size and margin input handling.

use super::core::SizingEngine;
use super::results::{MarginOutcome, SizeOutcome};
use crate::intent::OrderIntent;
use crate::margin::{margin_from_percent, validate_margin_delta, PercentOption};
use crate::sizing::{resolve_close_size_delta, validate_size_delta, SizeDelta, Validation};
use crate::types::{InputDenomination, Side};
use rust_decimal::Decimal;

impl SizingEngine {
    /// Sign the entered close amount and check it against the tradable max.
    pub fn resolve_close_size(&self, entered: &str, current_side: Side, max_tradable: Decimal) -> SizeOutcome {
        let delta = resolve_close_size_delta(entered, current_side);
        let validation = self.validate_close_size(&delta, max_tradable);
        log_decision!(
            self,
            side = %current_side,
            delta = delta.raw(),
            %max_tradable,
            invalid = validation.invalid,
            "resolved close size"
        );
        SizeOutcome { delta, validation }
    }

    pub fn validate_close_size(&self, delta: &SizeDelta, max_tradable: Decimal) -> Validation {
        validate_size_delta(delta, max_tradable)
    }

    pub fn allocate_margin(&self, idle_margin: Decimal, option: PercentOption) -> Decimal {
        margin_from_percent(idle_margin, option, self.config.margin_precision)
    }

    pub fn validate_margin(&self, input: &str, max_margin: Decimal, denomination: InputDenomination) -> Validation {
        let validation = validate_margin_delta(input, max_margin, denomination);
        if validation.invalid {
            log_decision!(self, input, %max_margin, ?denomination, "margin exceeds idle margin");
        }
        validation
    }

    // 8.3: apply a percent button to the intent and re-validate the new value
    pub fn apply_margin_percent(
        &self,
        intent: &mut OrderIntent,
        idle_margin: Decimal,
        option: PercentOption,
    ) -> MarginOutcome {
        let margin_delta = intent.select_margin_percent(idle_margin, option, self.config.margin_precision);
        let validation = self.validate_margin(&intent.margin_delta, idle_margin, intent.denomination);
        log_decision!(self, option = option.label(), %idle_margin, %margin_delta, "allocated margin");
        MarginOutcome {
            margin_delta,
            validation,
        }
    }

    pub fn edit_close_size(
        &self,
        intent: &mut OrderIntent,
        entered: &str,
        current_side: Side,
        max_tradable: Decimal,
    ) -> SizeOutcome {
        let outcome = self.resolve_close_size(entered, current_side, max_tradable);
        intent.native_size_delta = outcome.delta.clone();
        outcome
    }
}
