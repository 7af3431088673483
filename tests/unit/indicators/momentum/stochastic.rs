//! Unit tests for the stochastic oscillator

use chartwise::indicators::momentum::{calculate_stochastic, calculate_stochastic_default};
use chartwise::models::{Candle, StochasticParams, StochasticSignal};

fn candles(rows: &[(f64, f64, f64)]) -> Vec<Candle> {
    rows.iter().map(|&(h, l, c)| Candle::new(h, l, c)).collect()
}

fn short_params() -> StochasticParams {
    StochasticParams {
        k_period: 3,
        d_period: 2,
        ..StochasticParams::default()
    }
}

fn bounce() -> Vec<Candle> {
    candles(&[
        (110.0, 100.0, 101.0),
        (108.0, 98.0, 99.0),
        (106.0, 96.0, 97.0),
        (104.0, 94.0, 95.0),
        (103.0, 93.0, 102.0),
    ])
}

fn rollover() -> Vec<Candle> {
    candles(&[
        (100.0, 90.0, 99.0),
        (102.0, 92.0, 101.0),
        (104.0, 94.0, 103.0),
        (106.0, 96.0, 105.0),
        (105.0, 95.0, 96.0),
    ])
}

#[test]
fn test_stochastic_insufficient_data() {
    let rows = vec![(2.0, 1.0, 1.5); 15];
    let err = calculate_stochastic_default(&candles(&rows)).unwrap_err();
    assert_eq!(err.to_string(), "Need at least 16 candles, got 15");
}

#[test]
fn test_stochastic_bullish_crossover() {
    let stoch = calculate_stochastic(&bounce(), &short_params()).unwrap();
    assert_eq!(stoch.k_percent, 69.23);
    assert_eq!(stoch.d_percent, 38.19);
    assert_eq!(stoch.signal, StochasticSignal::BullishCrossover);
}

#[test]
fn test_stochastic_bullish_crossover_in_oversold_zone() {
    let params = StochasticParams {
        oversold: 70,
        ..short_params()
    };
    let stoch = calculate_stochastic(&bounce(), &params).unwrap();
    assert_eq!(stoch.signal, StochasticSignal::BullishCrossoverOversold);
    assert_eq!(stoch.oversold, 70);
}

#[test]
fn test_stochastic_bearish_crossover() {
    let stoch = calculate_stochastic(&rollover(), &short_params()).unwrap();
    assert_eq!(stoch.k_percent, 16.67);
    assert_eq!(stoch.d_percent, 54.76);
    assert_eq!(stoch.signal, StochasticSignal::BearishCrossover);

    let params = StochasticParams {
        overbought: 10,
        ..short_params()
    };
    let stoch = calculate_stochastic(&rollover(), &params).unwrap();
    assert_eq!(stoch.signal, StochasticSignal::BearishCrossoverOverbought);
}

#[test]
fn test_stochastic_overbought_without_crossover() {
    let rows: Vec<(f64, f64, f64)> = (0..6)
        .map(|i| {
            let base = f64::from(i);
            (100.0 + base, 90.0 + base, 99.5 + base)
        })
        .collect();
    let stoch = calculate_stochastic(&candles(&rows), &short_params()).unwrap();
    assert_eq!(stoch.k_percent, 95.83);
    assert_eq!(stoch.d_percent, 95.83);
    assert_eq!(stoch.signal, StochasticSignal::Overbought);
}

#[test]
fn test_stochastic_reports_parameters() {
    let stoch = calculate_stochastic(&bounce(), &short_params()).unwrap();
    assert_eq!((stoch.k_period, stoch.d_period), (3, 2));
    assert_eq!((stoch.overbought, stoch.oversold), (80, 20));
}
