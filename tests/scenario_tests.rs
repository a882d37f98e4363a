//! End-to-end flows through the engine facade.

use perps_sizing::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn market(symbol: &str, keeper: Decimal) -> Market {
    Market::new(Asset::new(symbol), MarketKey::new(format!("{symbol}PERP")), symbol)
        .with_keeper_deposit(Quote::new(keeper))
        .with_delayed_order_min_age(20)
}

#[test]
fn margin_input_flow() {
    let engine = SizingEngine::default();
    let idle = dec!(1000);
    let mut intent = OrderIntent::new(InputDenomination::Usd);

    let outcome = engine.apply_margin_percent(&mut intent, idle, PercentOption::Fifty);
    assert_eq!(intent.margin_delta, "500");
    assert!(outcome.validation.is_valid());

    intent.edit_margin_delta("1200");
    assert!(engine.validate_margin(&intent.margin_delta, idle, InputDenomination::Usd).invalid);
    assert!(!engine.validate_margin(&intent.margin_delta, idle, InputDenomination::Native).invalid);
}

#[test]
fn percent_buttons_by_label() {
    let engine = SizingEngine::default();
    let mut intent = OrderIntent::new(InputDenomination::Usd);
    let labels = ["10%", "25%", "50%", "100%"];
    let expected = [dec!(80), dec!(200), dec!(400), dec!(800)];

    for (label, want) in labels.iter().zip(expected) {
        let option = PercentOption::from_label(label).expect("known label");
        let outcome = engine.apply_margin_percent(&mut intent, dec!(800), option);
        assert_eq!(outcome.margin_delta, want);
    }
    assert_eq!(intent.margin_delta, "800");
}

#[test]
fn close_long_position_end_to_end() {
    let engine = SizingEngine::default();
    let eth = market("sETH", dec!(2));
    let position = PositionDetails::new(Side::Long, dec!(5));
    let quote = TradeQuote {
        price: dec!(1800),
        fee: Quote::new(dec!(4.5)),
        price_impact: dec!(0.001),
        liq_price: dec!(0),
        leverage: dec!(0),
    };
    let mut intent = OrderIntent::default();

    let outcome = engine.edit_close_size(&mut intent, "5", position.side, max_close_size(&position));
    assert!(outcome.validation.is_valid());
    assert_eq!(outcome.display(), "5");

    let preview = engine.preview_intent(&intent, Some(&position), Some(&quote), Some(&eth), Some(Side::Short));
    assert!(preview.is_closing);
    assert_eq!(preview.confirm_action, ConfirmAction::CloseOrder);
    assert_eq!(preview.total_deposit.value(), dec!(6.5));
    assert_eq!(preview.rows[3].value, "20 sec");
    assert_eq!(preview.rows[6].value, "$6.50");

    let outcome = engine.edit_close_size(&mut intent, "3", position.side, max_close_size(&position));
    assert!(outcome.validation.is_valid());
    let preview = engine.preview_intent(&intent, Some(&position), Some(&quote), Some(&eth), Some(Side::Short));
    assert!(!preview.is_closing);
    assert_eq!(preview.final_size, dec!(2));
    assert_eq!(preview.confirm_action.label(), "Confirm Short Order");
}

#[test]
fn oversized_close_flagged() {
    let engine = SizingEngine::default();
    let position = PositionDetails::new(Side::Short, dec!(1.5));
    let mut intent = OrderIntent::default();

    let outcome = engine.edit_close_size(&mut intent, "2", position.side, max_close_size(&position));
    assert!(outcome.validation.invalid);
    assert_eq!(intent.native_size_delta.value(), Some(dec!(2)));
}

#[test]
fn positions_table_flow() {
    let engine = SizingEngine::default();
    let positions = AccountPositions {
        cross_margin: vec![
            FuturesPosition::new(Asset::new("sETH"), PositionDetails::new(Side::Long, dec!(2))),
            FuturesPosition::new(Asset::new("sBTC"), PositionDetails::new(Side::Short, dec!(1))),
            FuturesPosition::new(Asset::new("sLINK"), PositionDetails::new(Side::Long, dec!(10))),
            FuturesPosition::new(Asset::new("sOLD"), PositionDetails::new(Side::Long, dec!(1))),
        ],
        isolated_margin: vec![FuturesPosition::new(
            Asset::new("sETH"),
            PositionDetails::new(Side::Short, dec!(4)),
        )],
    };
    let history = vec![
        PositionHistory::open(Asset::new("sETH"), Side::Long, Price::new_unchecked(dec!(1700)), dec!(2), Timestamp(1)),
        PositionHistory::open(Asset::new("sETH"), Side::Long, Price::new_unchecked(dec!(1900)), dec!(2), Timestamp(2)),
    ];
    let markets = vec![market("sETH", dec!(2)), market("sBTC", dec!(2)), market("sLINK", dec!(2))];
    let prices: MarkPrices = [(MarketKey::new("sETHPERP"), Price::new_unchecked(dec!(1800)))]
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

    let order: Vec<&str> = rows.iter().map(|r| r.market.asset.as_str()).collect();
    assert_eq!(order, vec!["sBTC", "sETH", "sLINK"]);

    let eth = &rows[1];
    assert_eq!(eth.avg_entry_price.map(|p| p.value()), Some(dec!(1700)));
    assert_eq!(eth.share.mark_price, dec!(1800));
    assert_eq!(eth.unrealized_pnl_at_mark().map(|q| q.value()), Some(dec!(200)));

    let btc = &rows[0];
    assert_eq!(btc.avg_entry_price, None);
    assert_eq!(btc.share.mark_price, Decimal::ZERO);

    let isolated = engine.aggregate_positions(&AggregationInput {
        positions: &positions,
        history: &history,
        markets: &markets,
        mark_prices: &prices,
        current_market: &current,
        mode: AccountMode::IsolatedMargin,
    });
    assert_eq!(isolated.len(), 1);
    assert_eq!(isolated[0].position.side, Side::Short);
}

#[test]
fn preview_while_quote_pending() {
    let engine = SizingEngine::default();
    let mut intent = OrderIntent::default();
    intent.edit_close_size("abc", Side::Long);

    let preview = engine.preview_intent(&intent, None, None, None, None);
    assert!(preview.is_closing);
    assert_eq!(preview.total_deposit, Quote::zero());
    assert!(preview.rows.iter().all(|r| !r.warning));
}

#[test]
fn high_impact_warning() {
    let engine = SizingEngine::default();
    let quote = TradeQuote {
        price_impact: dec!(-0.5),
        ..TradeQuote::default()
    };
    let preview = engine.preview(&PreviewInput {
        position: None,
        pending_size_delta: dec!(10),
        quote: Some(&quote),
        market: None,
        order_side: Some(Side::Long),
    });
    assert!(preview.impact_warning);
    assert_eq!(preview.rows[1].kind, PreviewRowKind::PriceImpact);
    assert!(preview.rows[1].warning);
    assert_eq!(preview.confirm_action.label(), "Confirm Long Order");
}
