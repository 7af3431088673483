//! Unit tests for JSON input parsing

use chartwise::indicators::error::{ErrorKind, IndicatorError};
use chartwise::indicators::parser::*;
use chartwise::models::CandleField;

const HLC: &[CandleField] = &[CandleField::High, CandleField::Low, CandleField::Close];

#[test]
fn test_parse_prices() {
    let prices = parse_prices("[1, 2.5, 3]").unwrap();
    assert_eq!(prices, vec![1.0, 2.5, 3.0]);
    assert!(parse_prices("[]").unwrap().is_empty());
}

#[test]
fn test_parse_prices_from_candles_with_close() {
    let prices = parse_prices(r#"[{"high": 2, "low": 1, "close": 1.5}, {"close": 1.75}]"#).unwrap();
    assert_eq!(prices, vec![1.5, 1.75]);
}

#[test]
fn test_parse_prices_candle_without_close() {
    let err = parse_prices(r#"[{"close": 1}, {"high": 2}]"#).unwrap_err();
    assert_eq!(err.to_string(), "Candle 1 missing fields: close");
    assert_eq!(err.kind(), ErrorKind::Data);
}

#[test]
fn test_parse_prices_rejects_invalid_json() {
    let err = parse_prices("[1, 2,").unwrap_err();
    assert!(matches!(err, IndicatorError::MalformedInput(_)));
    assert_eq!(err.kind(), ErrorKind::Malformed);
}

#[test]
fn test_parse_prices_rejects_non_array_and_non_numbers() {
    assert!(matches!(
        parse_prices(r#"{"close": 1}"#),
        Err(IndicatorError::MalformedInput(_))
    ));
    assert!(matches!(
        parse_prices(r#"[1, "two"]"#),
        Err(IndicatorError::MalformedInput(_))
    ));
}

#[test]
fn test_parse_candles_optional_fields() {
    let input = r#"[
        {"open": 1, "high": 2, "low": 0.5, "close": 1.5, "volume": 300},
        {"high": 3, "low": 1, "close": 2}
    ]"#;
    let candles = parse_candles(input, HLC).unwrap();
    assert_eq!(candles.len(), 2);
    assert_eq!(candles[0].open, Some(1.0));
    assert_eq!(candles[0].volume, Some(300.0));
    assert_eq!(candles[1].open, None);
    assert_eq!(candles[1].volume, None);
    assert_eq!(candles[1].close, 2.0);
}

#[test]
fn test_parse_candles_lists_every_missing_field() {
    let input = r#"[{"high": 2, "low": 1, "close": 1}, {"close": 1}]"#;
    let err = parse_candles(input, HLC).unwrap_err();
    assert_eq!(err.to_string(), "Candle 1 missing fields: high, low");
}

#[test]
fn test_parse_candles_fields_not_required_may_be_absent() {
    let required = [CandleField::High, CandleField::Low];
    let candles = parse_candles(r#"[{"high": 2, "low": 1}]"#, &required).unwrap();
    assert_eq!(candles[0].high, 2.0);
    assert!(candles[0].close.is_nan());
}

#[test]
fn test_parse_candles_requires_objects() {
    let err = parse_candles("[1, 2]", HLC).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Malformed);
}

#[test]
fn test_parse_previous_candle() {
    let candle = parse_previous_candle(r#"{"high": 100, "low": 95, "close": 98}"#).unwrap();
    assert_eq!((candle.high, candle.low, candle.close), (100.0, 95.0, 98.0));

    let err = parse_previous_candle(r#"{"high": 100, "low": 95}"#).unwrap_err();
    assert_eq!(err.to_string(), "Previous candle missing fields: close");
}
