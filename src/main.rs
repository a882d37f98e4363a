//! Order sizing walkthrough.
//!
//! Runs the close-position, margin allocation, positions table and trade
//! confirmation flows against fixed snapshots. Set RUST_LOG=debug to see
//! every engine decision.

use perps_sizing::*;
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("Perps Order Sizing Simulation\n");

    let engine = SizingEngine::new(Environment::Development.config());

    scenario_1_close_position(&engine);
    scenario_2_margin_allocation(&engine);
    scenario_3_positions_table(&engine);
    scenario_4_trade_confirmation(&engine);

    println!("\nAll simulations completed successfully.");
}

fn eth_market() -> Market {
    Market::new(Asset::new("sETH"), MarketKey::new("sETHPERP"), "ETH/sUSD")
        .with_keeper_deposit(Quote::new(dec!(2)))
        .with_delayed_order_min_age(12)
}

fn btc_market() -> Market {
    Market::new(Asset::new("sBTC"), MarketKey::new("sBTCPERP"), "BTC/sUSD")
        .with_keeper_deposit(Quote::new(dec!(2)))
        .with_delayed_order_min_age(12)
}

/// Closing part of a long, then trying to close more than is held.
fn scenario_1_close_position(engine: &SizingEngine) {
    println!("Scenario 1: Close Position Sizing\n");

    let position = PositionDetails::new(Side::Long, dec!(5));
    let max = max_close_size(&position);
    let mut intent = OrderIntent::default();

    let outcome = engine.edit_close_size(&mut intent, "3", position.side, max);
    println!("  Long 5 ETH, close 3 -> delta {} (shown as {}), invalid: {}", outcome.delta.raw(), outcome.display(), outcome.validation.invalid);

    let outcome = engine.edit_close_size(&mut intent, "6", position.side, max);
    println!("  Close 6 -> delta {}, invalid: {}", outcome.delta.raw(), outcome.validation.invalid);

    let outcome = engine.edit_close_size(&mut intent, "", position.side, max);
    println!("  Cleared -> unset: {}, invalid: {}\n", outcome.delta.is_unset(), outcome.validation.invalid);
}

/// Percent buttons and typed amounts in both denominations.
fn scenario_2_margin_allocation(engine: &SizingEngine) {
    println!("Scenario 2: Margin Allocation\n");

    let idle = dec!(1000);
    let mut intent = OrderIntent::new(InputDenomination::Usd);

    for option in PercentOption::ALL {
        let outcome = engine.apply_margin_percent(&mut intent, idle, option);
        println!("  {} of ${} idle -> {}", option.label(), idle, outcome.margin_delta);
    }

    intent.edit_margin_delta("1200");
    let usd = engine.validate_margin(&intent.margin_delta, idle, InputDenomination::Usd);
    let native = engine.validate_margin(&intent.margin_delta, idle, InputDenomination::Native);
    println!("  Typed 1200: invalid in sUSD: {}, invalid in native: {}\n", usd.invalid, native.invalid);
}

/// Current market sorts first; stale entries are dropped.
fn scenario_3_positions_table(engine: &SizingEngine) {
    println!("Scenario 3: Positions Table\n");

    let positions = AccountPositions {
        cross_margin: vec![
            FuturesPosition::new(Asset::new("sETH"), PositionDetails::new(Side::Long, dec!(2)))
                .with_stop_loss(Price::new_unchecked(dec!(1600))),
            FuturesPosition::new(Asset::new("sBTC"), PositionDetails::new(Side::Short, dec!(0.5))),
            FuturesPosition::new(Asset::new("sDOGE"), PositionDetails::new(Side::Long, dec!(1000))),
        ],
        isolated_margin: vec![],
    };
    let history = vec![PositionHistory::open(
        Asset::new("sETH"),
        Side::Long,
        Price::new_unchecked(dec!(1750)),
        dec!(2),
        Timestamp::now(),
    )];
    let markets = vec![eth_market(), btc_market()];
    let prices: MarkPrices = [(MarketKey::new("sETHPERP"), Price::new_unchecked(dec!(1850)))]
        .into_iter()
        .collect();
    let current = Asset::new("sBTC");

    let rows = engine.aggregate_positions(&AggregationInput {
        positions: &positions,
        history: &history,
        markets: &markets,
        mark_prices: &prices,
        current_market: &current,
        mode: AccountMode::CrossMargin,
    });

    for row in &rows {
        let entry = row.avg_entry_price.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string());
        let stop = row.stop_loss.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string());
        let pnl = row.unrealized_pnl_at_mark().map(|q| q.to_string()).unwrap_or_else(|| "-".to_string());
        println!(
            "  {} {} {}: entry {}, mark {}, SL {}, pnl {}",
            row.market.asset.display_name(),
            row.position.side,
            row.position.size,
            entry,
            row.share.mark_price,
            stop,
            pnl
        );
    }
    println!("  (sDOGE dropped: no market)\n");
}

/// Full close flips the confirmation to a close order.
fn scenario_4_trade_confirmation(engine: &SizingEngine) {
    println!("Scenario 4: Trade Confirmation\n");

    let market = eth_market();
    let position = PositionDetails::new(Side::Long, dec!(5));
    let quote = TradeQuote {
        price: dec!(1849.75),
        fee: Quote::new(dec!(4.62)),
        price_impact: dec!(0.0008),
        liq_price: dec!(0),
        leverage: dec!(0),
    };

    for entered in ["3", "5"] {
        let mut intent = OrderIntent::default();
        intent.edit_close_size(entered, position.side);
        let preview = engine.preview_intent(&intent, Some(&position), Some(&quote), Some(&market), Some(Side::Short));

        println!("  Close {} of 5 -> final size {}, button: {}", entered, preview.final_size, preview.confirm_action.label());
        for row in &preview.rows {
            let marker = if row.warning { " (!)" } else { "" };
            println!("    {:<24} {}{}", row.label, row.value, marker);
        }
        println!();
    }
}
