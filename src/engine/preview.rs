//! Trade preview assembly.

use super::core::SizingEngine;
use crate::intent::OrderIntent;
use crate::market::Market;
use crate::position::PositionDetails;
use crate::preview::{assemble_preview, PreviewInput, TradePreview, TradeQuote};
use crate::types::Side;

impl SizingEngine {
    pub fn preview(&self, input: &PreviewInput<'_>) -> TradePreview {
        let preview = assemble_preview(input, &self.config.preview);
        log_decision!(
            self,
            final_size = %preview.final_size,
            is_closing = preview.is_closing,
            total_deposit = %preview.total_deposit,
            impact_warning = preview.impact_warning,
            quoted = input.quote.is_some(),
            "assembled trade preview"
        );
        preview
    }

    /// Preview the intent's pending size delta. An unset delta counts as zero.
    pub fn preview_intent(
        &self,
        intent: &OrderIntent,
        position: Option<&PositionDetails>,
        quote: Option<&TradeQuote>,
        market: Option<&Market>,
        order_side: Option<Side>,
    ) -> TradePreview {
        self.preview(&PreviewInput {
            position,
            pending_size_delta: intent.native_size_delta.value_or_zero(),
            quote,
            market,
            order_side,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn intent_close_detected() {
        let engine = SizingEngine::default();
        let position = PositionDetails::new(Side::Short, dec!(3));
        let mut intent = OrderIntent::default();
        intent.edit_close_size("3", Side::Short);

        let preview = engine.preview_intent(&intent, Some(&position), None, None, Some(Side::Long));
        assert!(preview.is_closing);
    }

    #[test]
    fn unset_delta_keeps_position() {
        let engine = SizingEngine::default();
        let position = PositionDetails::new(Side::Long, dec!(3));
        let intent = OrderIntent::default();

        let preview = engine.preview_intent(&intent, Some(&position), None, None, None);
        assert_eq!(preview.final_size, dec!(3));
        assert!(!preview.is_closing);
    }
}
