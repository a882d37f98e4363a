//! Positions table aggregation.
//!
//! Joins live positions with their market, the first open history record
//! and the current mark price, drops entries whose position or market is
//! missing, and moves the currently selected market to the top.
//!
//! Optional values stay `None` when absent. The table renders a dedicated
//! "no value" glyph for them, which a zero would hide.

use crate::market::{find_market, MarkPrices, Market};
use crate::position::{calculate_unrealized_pnl, find_open_history, FuturesPosition, PositionDetails, PositionHistory};
use crate::types::{AccountMode, Asset, Price, Quote};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Both position collections of one wallet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountPositions {
    pub cross_margin: Vec<FuturesPosition>,
    pub isolated_margin: Vec<FuturesPosition>,
}

impl AccountPositions {
    pub fn for_mode(&self, mode: AccountMode) -> &[FuturesPosition] {
        match mode {
            AccountMode::CrossMargin => &self.cross_margin,
            AccountMode::IsolatedMargin => &self.isolated_margin,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AggregationInput<'a> {
    pub positions: &'a AccountPositions,
    pub history: &'a [PositionHistory],
    pub markets: &'a [Market],
    pub mark_prices: &'a MarkPrices,
    pub current_market: &'a Asset,
    pub mode: AccountMode,
}

/// Everything needed to render a shareable position card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePayload {
    pub asset: Asset,
    pub position: PositionDetails,
    pub position_history: Option<PositionHistory>,
    /// Zero when the market has no mark price yet.
    pub mark_price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedPosition {
    pub market: Market,
    pub position: PositionDetails,
    pub avg_entry_price: Option<Price>,
    pub stop_loss: Option<Price>,
    pub take_profit: Option<Price>,
    pub share: SharePayload,
}

impl EnrichedPosition {
    /// PnL against the live mark. `None` without an entry price or a mark.
    pub fn unrealized_pnl_at_mark(&self) -> Option<Quote> {
        let entry = self.avg_entry_price?;
        let mark = Price::new(self.share.mark_price)?;
        Some(calculate_unrealized_pnl(self.position.signed_size(), entry, mark))
    }
}

pub fn aggregate_positions(input: &AggregationInput<'_>) -> Vec<EnrichedPosition> {
    let enriched = input
        .positions
        .for_mode(input.mode)
        .iter()
        .filter_map(|fp| enrich(fp, input));

    // stable partition: current market first, everything else keeps its order
    let (mut ordered, rest): (Vec<_>, Vec<_>) =
        enriched.partition(|e| &e.market.asset == input.current_market);
    ordered.extend(rest);
    ordered
}

fn enrich(fp: &FuturesPosition, input: &AggregationInput<'_>) -> Option<EnrichedPosition> {
    let market = find_market(input.markets, &fp.asset)?;
    let position = fp.position.as_ref()?;
    let history = find_open_history(input.history, &fp.asset);
    let mark_price = input.mark_prices.get_or_zero(&market.market_key);

    Some(EnrichedPosition {
        market: market.clone(),
        position: position.clone(),
        avg_entry_price: history.map(|h| h.avg_entry_price),
        stop_loss: fp.stop_loss.as_ref().map(|o| o.target_price),
        take_profit: fp.take_profit.as_ref().map(|o| o.target_price),
        share: SharePayload {
            asset: fp.asset.clone(),
            position: position.clone(),
            position_history: history.cloned(),
            mark_price,
        },
    })
}

/// Row actions offered in the positions table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionAction {
    EditSize,
    EditMargin,
    EditProtection,
    Close,
    Share,
}

// isolated margin positions can only be closed or shared from the table
pub fn available_actions(mode: AccountMode) -> Vec<PositionAction> {
    match mode {
        AccountMode::CrossMargin => vec![
            PositionAction::EditSize,
            PositionAction::EditMargin,
            PositionAction::EditProtection,
            PositionAction::Close,
            PositionAction::Share,
        ],
        AccountMode::IsolatedMargin => vec![PositionAction::Close, PositionAction::Share],
    }
}
