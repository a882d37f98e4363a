// 4.0: position snapshots as reported by the position provider.
// the engine never mutates these, it only reads and projects them.

use crate::types::{Asset, Price, Quote, Side, SignedSize, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionDetails {
    pub side: Side,
    /// Unsigned magnitude. Direction lives in `side`.
    pub size: Decimal,
    pub notional_value: Quote,
    pub initial_margin: Quote,
    pub leverage: Decimal,
    pub liquidation_price: Decimal,
    pub pnl: Quote,
    pub pnl_pct: Decimal,
    pub accrued_funding: Quote,
}

impl PositionDetails {
    pub fn new(side: Side, size: Decimal) -> Self {
        Self {
            side,
            size: size.abs(),
            notional_value: Quote::zero(),
            initial_margin: Quote::zero(),
            leverage: Decimal::ZERO,
            liquidation_price: Decimal::ZERO,
            pnl: Quote::zero(),
            pnl_pct: Decimal::ZERO,
            accrued_funding: Quote::zero(),
        }
    }

    // 4.1: signed exposure. long = +size, short = -size
    pub fn signed_size(&self) -> SignedSize {
        SignedSize::from_side(self.side, self.size)
    }
}

// 4.2: stop-loss / take-profit attached to a cross margin position. which one
// it is follows from the FuturesPosition field holding it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectiveOrder {
    pub target_price: Price,
}

impl ProtectiveOrder {
    pub fn new(target_price: Price) -> Self {
        Self { target_price }
    }
}

/// Provider record for one market. `position` is `None` when the provider
/// has the market entry but no live position data yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuturesPosition {
    pub asset: Asset,
    pub position: Option<PositionDetails>,
    pub stop_loss: Option<ProtectiveOrder>,
    pub take_profit: Option<ProtectiveOrder>,
}

impl FuturesPosition {
    pub fn new(asset: Asset, position: PositionDetails) -> Self {
        Self {
            asset,
            position: Some(position),
            stop_loss: None,
            take_profit: None,
        }
    }

    pub fn with_stop_loss(mut self, price: Price) -> Self {
        self.stop_loss = Some(ProtectiveOrder::new(price));
        self
    }

    pub fn with_take_profit(mut self, price: Price) -> Self {
        self.take_profit = Some(ProtectiveOrder::new(price));
        self
    }
}

// 4.3: trade history entry. only used to recover the average entry price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionHistory {
    pub asset: Asset,
    pub is_open: bool,
    pub side: Side,
    pub avg_entry_price: Price,
    pub size: Decimal,
    pub opened_at: Timestamp,
    pub closed_at: Option<Timestamp>,
}

impl PositionHistory {
    pub fn open(asset: Asset, side: Side, avg_entry_price: Price, size: Decimal, opened_at: Timestamp) -> Self {
        Self {
            asset,
            is_open: true,
            side,
            avg_entry_price,
            size,
            opened_at,
            closed_at: None,
        }
    }

    pub fn close(mut self, closed_at: Timestamp) -> Self {
        self.is_open = false;
        self.closed_at = Some(closed_at);
        self
    }
}

/// First open record for the asset. Duplicates are not merged: first wins.
pub fn find_open_history<'a>(history: &'a [PositionHistory], asset: &Asset) -> Option<&'a PositionHistory> {
    history.iter().find(|h| h.is_open && &h.asset == asset)
}

// size * (mark - entry). same formula as on-chain, signed by side
pub fn calculate_unrealized_pnl(size: SignedSize, entry_price: Price, mark_price: Price) -> Quote {
    Quote::new(size.value() * (mark_price.value() - entry_price.value()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn price(v: Decimal) -> Price {
        Price::new_unchecked(v)
    }

    #[test]
    fn signed_size_follows_side() {
        assert_eq!(PositionDetails::new(Side::Long, dec!(5)).signed_size().value(), dec!(5));
        assert_eq!(PositionDetails::new(Side::Short, dec!(5)).signed_size().value(), dec!(-5));
    }

    #[test]
    fn size_is_stored_unsigned() {
        assert_eq!(PositionDetails::new(Side::Short, dec!(-2)).size, dec!(2));
    }

    #[test]
    fn first_open_record_wins() {
        let eth = Asset::new("sETH");
        let history = vec![
            PositionHistory::open(eth.clone(), Side::Long, price(dec!(1500)), dec!(1), Timestamp(1))
                .close(Timestamp(2)),
            PositionHistory::open(eth.clone(), Side::Long, price(dec!(1700)), dec!(1), Timestamp(3)),
            PositionHistory::open(eth.clone(), Side::Long, price(dec!(1900)), dec!(1), Timestamp(4)),
        ];
        let found = find_open_history(&history, &eth).map(|h| h.avg_entry_price.value());
        assert_eq!(found, Some(dec!(1700)));
    }

    #[test]
    fn no_open_record() {
        let history = vec![PositionHistory::open(
            Asset::new("sBTC"),
            Side::Short,
            price(dec!(30000)),
            dec!(1),
            Timestamp(1),
        )];
        assert!(find_open_history(&history, &Asset::new("sETH")).is_none());
    }

    #[test]
    fn pnl_sign_by_side() {
        let long = calculate_unrealized_pnl(SignedSize::new(dec!(2)), price(dec!(100)), price(dec!(110)));
        assert_eq!(long.value(), dec!(20));
        let short = calculate_unrealized_pnl(SignedSize::new(dec!(-2)), price(dec!(100)), price(dec!(110)));
        assert_eq!(short.value(), dec!(-20));
    }
}
