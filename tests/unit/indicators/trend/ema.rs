//! Unit tests for EMA indicator

use chartwise::indicators::trend::{calculate_ema, calculate_ema_default};
use chartwise::models::{EmaParams, PriceTrend};

#[test]
fn test_ema_insufficient_data() {
    let err = calculate_ema_default(&[100.0; 11]).unwrap_err();
    assert_eq!(err.to_string(), "Need at least 12 prices, got 11");
}

#[test]
fn test_ema_constant_series_is_at_ema() {
    let ema = calculate_ema_default(&[50.0; 20]).unwrap();
    assert_eq!(ema.ema, 50.0);
    assert_eq!(ema.current_price, 50.0);
    assert_eq!(ema.price_trend, PriceTrend::AtEma);
}

#[test]
fn test_ema_lags_rising_prices() {
    let prices: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
    let ema = calculate_ema(&prices, &EmaParams { period: 10 }).unwrap();
    assert!(ema.ema < 129.0);
    assert_eq!(ema.current_price, 129.0);
    assert_eq!(ema.price_trend, PriceTrend::AboveEma);
}

#[test]
fn test_ema_below_on_falling_prices() {
    let prices: Vec<f64> = (0..30).map(|i| 100.0 - i as f64).collect();
    let ema = calculate_ema(&prices, &EmaParams { period: 10 }).unwrap();
    assert_eq!(ema.price_trend, PriceTrend::BelowEma);
}

#[test]
fn test_ema_second_value() {
    // alpha = 2 / (3 + 1) = 0.5
    let ema = calculate_ema(&[10.0, 20.0, 20.0], &EmaParams { period: 3 }).unwrap();
    assert_eq!(ema.ema, 17.5);
}
