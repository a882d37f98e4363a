//! Trade confirmation preview.
//!
//! Combines the pending size delta with the latest quote and the market's
//! keeper settings into the rows shown before an order is submitted. A
//! missing quote or market renders zeros instead of failing, since the quote
//! arrives asynchronously and may still be pending.

use crate::format::{format_dollars, format_percent, format_seconds, format_size};
use crate::input::DisplayPrecision;
use crate::market::Market;
use crate::position::PositionDetails;
use crate::types::{Asset, Quote, Side, SignedSize};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Impact magnitude above which the impact row is highlighted.
pub const PRICE_IMPACT_WARNING_THRESHOLD: Decimal = dec!(0.45);

/// Quote for a prospective order from the pricing service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeQuote {
    /// Expected fill price.
    pub price: Decimal,
    pub fee: Quote,
    /// Signed, as a ratio (0.01 = 1%).
    pub price_impact: Decimal,
    pub liq_price: Decimal,
    pub leverage: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    Market,
    Limit,
    StopMarket,
    Delayed,
    DelayedOffchain,
}

impl OrderType {
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderType::Market => "Market",
            OrderType::Limit => "Limit",
            OrderType::StopMarket => "Stop Market",
            OrderType::Delayed => "Delayed",
            OrderType::DelayedOffchain => "Delayed Market",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfirmAction {
    CloseOrder,
    ConfirmOrder(Side),
}

impl ConfirmAction {
    pub fn label(&self) -> &'static str {
        match self {
            ConfirmAction::CloseOrder => "Close Order",
            ConfirmAction::ConfirmOrder(Side::Long) => "Confirm Long Order",
            ConfirmAction::ConfirmOrder(Side::Short) => "Confirm Short Order",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreviewRowKind {
    Size,
    Side,
    OrderType,
    EstimatedFill,
    PriceImpact,
    LiquidationPrice,
    TimeDelay,
    Fee,
    KeeperDeposit,
    TotalDeposit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewRow {
    pub kind: PreviewRowKind,
    pub label: &'static str,
    pub value: String,
    pub tooltip: Option<&'static str>,
    /// Highlight in the warning color.
    pub warning: bool,
    /// Every row but the first carries a top border.
    pub bordered: bool,
}

impl PreviewRow {
    fn new(kind: PreviewRowKind, label: &'static str, value: String) -> Self {
        Self {
            kind,
            label,
            value,
            tooltip: None,
            warning: false,
            bordered: true,
        }
    }

    fn tooltip(mut self, text: &'static str) -> Self {
        self.tooltip = Some(text);
        self
    }
}

// row 0 has no border, rows 1..n do
fn apply_borders(rows: &mut [PreviewRow]) {
    for (i, row) in rows.iter_mut().enumerate() {
        row.bordered = i != 0;
    }
}

/// Decimal handling for preview values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewFormat {
    /// Fill and liquidation prices.
    pub price: DisplayPrecision,
    /// Fees and deposits.
    pub money: DisplayPrecision,
}

impl Default for PreviewFormat {
    fn default() -> Self {
        Self {
            price: DisplayPrecision::Suggested,
            money: DisplayPrecision::Fixed(2),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PreviewInput<'a> {
    pub position: Option<&'a PositionDetails>,
    pub pending_size_delta: Decimal,
    pub quote: Option<&'a TradeQuote>,
    pub market: Option<&'a Market>,
    /// Side of the order being placed. Defaults to long.
    pub order_side: Option<Side>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TradePreview {
    pub signed_current_size: SignedSize,
    pub final_size: Decimal,
    pub is_closing: bool,
    pub total_deposit: Quote,
    pub impact_warning: bool,
    pub market_suspended: bool,
    pub leverage: Decimal,
    pub confirm_action: ConfirmAction,
    pub rows: Vec<PreviewRow>,
}

pub fn exceeds_impact_threshold(price_impact: Decimal) -> bool {
    price_impact.abs() > PRICE_IMPACT_WARNING_THRESHOLD
}

pub fn assemble_preview(input: &PreviewInput<'_>, format: &PreviewFormat) -> TradePreview {
    let signed_current_size = input
        .position
        .map(|p| p.signed_size())
        .unwrap_or_else(SignedSize::zero);
    let final_size = signed_current_size.add(input.pending_size_delta).abs();
    let is_closing = final_size.is_zero();

    let quote = input.quote.cloned().unwrap_or_default();
    let keeper_deposit = input.market.map(|m| m.keeper_deposit).unwrap_or_default();
    let min_age = input
        .market
        .map(|m| m.settings.offchain_delayed_order_min_age)
        .unwrap_or(0);
    let total_deposit = quote.fee.add(keeper_deposit);
    let impact_warning = exceeds_impact_threshold(quote.price_impact);

    let confirm_action = if is_closing {
        ConfirmAction::CloseOrder
    } else {
        ConfirmAction::ConfirmOrder(input.order_side.unwrap_or(Side::Long))
    };

    let mut impact_row = PreviewRow::new(
        PreviewRowKind::PriceImpact,
        "Estimated Price Impact",
        format_percent(quote.price_impact),
    );
    impact_row.warning = impact_warning;

    let mut rows = vec![
        PreviewRow::new(
            PreviewRowKind::EstimatedFill,
            "Estimated Fill Price",
            format_dollars(quote.price, format.price),
        )
        .tooltip("Delayed orders are filled by a keeper at the next available oracle price."),
        impact_row,
        PreviewRow::new(
            PreviewRowKind::LiquidationPrice,
            "Liquidation Price",
            format_dollars(quote.liq_price, format.price),
        ),
        PreviewRow::new(PreviewRowKind::TimeDelay, "Time Delay", format_seconds(min_age)),
        PreviewRow::new(
            PreviewRowKind::Fee,
            "Estimated Fee",
            format_dollars(quote.fee.value(), format.money),
        )
        .tooltip("Trading fee charged at execution, estimated at the current price."),
        PreviewRow::new(
            PreviewRowKind::KeeperDeposit,
            "Keeper Deposit",
            format_dollars(keeper_deposit.value(), format.money),
        )
        .tooltip("Paid to the keeper that executes the order."),
        PreviewRow::new(
            PreviewRowKind::TotalDeposit,
            "Total Deposit",
            format_dollars(total_deposit.value(), format.money),
        )
        .tooltip("Fee and keeper deposit are taken from margin when the order is submitted."),
    ];
    apply_borders(&mut rows);

    TradePreview {
        signed_current_size,
        final_size,
        is_closing,
        total_deposit,
        impact_warning,
        market_suspended: input.market.map(|m| m.is_suspended).unwrap_or(false),
        leverage: quote.leverage,
        confirm_action,
        rows,
    }
}

/// Rows for the compact (drawer) layout: size, side and order type first.
pub fn compact_rows(
    preview: &TradePreview,
    pending_size_delta: Decimal,
    asset: &Asset,
    order_side: Option<Side>,
    order_type: OrderType,
) -> Vec<PreviewRow> {
    let mut rows = vec![
        PreviewRow::new(
            PreviewRowKind::Size,
            "Size",
            format_size(pending_size_delta.abs(), asset.display_name()),
        ),
        PreviewRow::new(
            PreviewRowKind::Side,
            "Side",
            order_side.unwrap_or(Side::Long).as_upper().to_string(),
        ),
        PreviewRow::new(PreviewRowKind::OrderType, "Order Type", order_type.display_name().to_string()),
    ];
    rows.extend(preview.rows.iter().cloned());
    apply_borders(&mut rows);
    rows
}
