//! Market snapshots and live mark prices.
//!
//! Both come from the market-data provider and are read-only here.

use crate::types::{Asset, MarketKey, Price, Quote};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Settings read from the market contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketSettings {
    /// Seconds an off-chain delayed order must wait before execution.
    pub offchain_delayed_order_min_age: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Market {
    pub asset: Asset,
    pub market_key: MarketKey,
    /// Human-readable name (e.g., "ETH/sUSD")
    pub market_name: String,
    pub is_suspended: bool,
    pub settings: MarketSettings,
    /// Paid up front to the keeper that executes the delayed order.
    pub keeper_deposit: Quote,
}

impl Market {
    pub fn new(asset: Asset, market_key: MarketKey, market_name: impl Into<String>) -> Self {
        Self {
            asset,
            market_key,
            market_name: market_name.into(),
            is_suspended: false,
            settings: MarketSettings::default(),
            keeper_deposit: Quote::zero(),
        }
    }

    pub fn with_keeper_deposit(mut self, deposit: Quote) -> Self {
        self.keeper_deposit = deposit;
        self
    }

    pub fn with_delayed_order_min_age(mut self, seconds: u64) -> Self {
        self.settings.offchain_delayed_order_min_age = seconds;
        self
    }

    pub fn suspended(mut self) -> Self {
        self.is_suspended = true;
        self
    }
}

pub fn find_market<'a>(markets: &'a [Market], asset: &Asset) -> Option<&'a Market> {
    markets.iter().find(|m| &m.asset == asset)
}

/// Latest mark price per market key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarkPrices(HashMap<MarketKey, Price>);

impl MarkPrices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: MarketKey, price: Price) {
        self.0.insert(key, price);
    }

    pub fn get(&self, key: &MarketKey) -> Option<Price> {
        self.0.get(key).copied()
    }

    // display fallback only. nothing that gates a transaction reads this
    pub fn get_or_zero(&self, key: &MarketKey) -> Decimal {
        self.get(key).map(|p| p.value()).unwrap_or(Decimal::ZERO)
    }
}

impl FromIterator<(MarketKey, Price)> for MarkPrices {
    fn from_iter<I: IntoIterator<Item = (MarketKey, Price)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
