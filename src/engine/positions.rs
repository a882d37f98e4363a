//! Positions table view.

use super::core::SizingEngine;
use crate::aggregate::{aggregate_positions, AggregationInput, EnrichedPosition};

impl SizingEngine {
    pub fn aggregate_positions(&self, input: &AggregationInput<'_>) -> Vec<EnrichedPosition> {
        let rows = aggregate_positions(input);
        let available = input.positions.for_mode(input.mode).len();
        if rows.len() < available {
            log_decision!(
                self,
                mode = ?input.mode,
                available,
                kept = rows.len(),
                "dropped positions without market or position data"
            );
        }
        tracing::trace!(mode = ?input.mode, current = %input.current_market, rows = rows.len(), "aggregated positions");
        rows
    }
}
