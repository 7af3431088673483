//! Unit tests for the indicator registry

use chartwise::indicators::registry::*;
use chartwise::models::CandleField;

#[test]
fn test_every_indicator_registered_once() {
    let catalog = IndicatorRegistry::catalog();
    let total: usize = catalog.values().map(Vec::len).sum();
    assert_eq!(total, IndicatorKind::ALL.len());
    assert_eq!(total, 13);
}

#[test]
fn test_by_category() {
    assert_eq!(
        IndicatorRegistry::by_category(IndicatorCategory::Trend),
        vec![IndicatorKind::Sma, IndicatorKind::Ema, IndicatorKind::Adx]
    );
    assert_eq!(
        IndicatorRegistry::by_category(IndicatorCategory::Momentum),
        vec![IndicatorKind::Macd, IndicatorKind::Rsi, IndicatorKind::Stochastic]
    );
    assert_eq!(
        IndicatorRegistry::by_category(IndicatorCategory::Volume),
        vec![IndicatorKind::Vwap]
    );
}

#[test]
fn test_required_fields() {
    assert_eq!(
        IndicatorKind::Atr.required_fields(),
        &[CandleField::Open, CandleField::High, CandleField::Low, CandleField::Close]
    );
    assert!(IndicatorKind::Vwap.required_fields().contains(&CandleField::Volume));
    assert_eq!(
        IndicatorKind::ParkinsonVolatility.required_fields(),
        &[CandleField::High, CandleField::Low]
    );
    assert!(IndicatorKind::Sma.required_fields().is_empty());
}

#[test]
fn test_input_shapes() {
    assert_eq!(IndicatorKind::Rsi.input_shape(), InputShape::Prices);
    assert_eq!(IndicatorKind::Stochastic.input_shape(), InputShape::Candles);
    assert_eq!(IndicatorKind::PivotPoints.input_shape(), InputShape::Snapshot);
    assert_eq!(IndicatorKind::ExpectedMove.input_shape(), InputShape::OptionQuote);
}

#[test]
fn test_names() {
    assert_eq!(IndicatorKind::BollingerBands.name(), "Bollinger Bands");
    assert_eq!(IndicatorKind::Vwap.name(), "VWAP");
}
