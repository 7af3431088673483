//! Unit tests for Bollinger Bands indicator

use chartwise::indicators::volatility::{
    calculate_bollinger_bands, calculate_bollinger_bands_default, percent_b,
};
use chartwise::models::{BollingerParams, BollingerSignal};

#[test]
fn test_bollinger_insufficient_data() {
    let err = calculate_bollinger_bands_default(&[1.0; 19]).unwrap_err();
    assert_eq!(err.to_string(), "Need at least 20 prices, got 19");
}

#[test]
fn test_bollinger_bands_on_rising_prices() {
    let prices: Vec<f64> = (10..20).map(f64::from).collect();
    let params = BollingerParams {
        period: 5,
        std_dev: 2.0,
    };
    let bb = calculate_bollinger_bands(&prices, &params).unwrap();
    assert_eq!(bb.middle_band, 17.0);
    assert_eq!(bb.upper_band, 20.16);
    assert_eq!(bb.lower_band, 13.84);
    assert_eq!(bb.bandwidth, 6.32);
    assert_eq!(bb.percent_b, 0.816);
    assert_eq!(bb.current_price, 19.0);
    assert_eq!(bb.signal, BollingerSignal::NearUpper);
}

#[test]
fn test_bollinger_flat_prices_collapse_bands() {
    let bb = calculate_bollinger_bands_default(&[50.0; 20]).unwrap();
    assert_eq!(bb.upper_band, 50.0);
    assert_eq!(bb.lower_band, 50.0);
    assert_eq!(bb.bandwidth, 0.0);
    assert_eq!(bb.percent_b, 0.5);
    assert_eq!(bb.signal, BollingerSignal::Neutral);
}

#[test]
fn test_bollinger_breakout_is_overbought() {
    let mut prices = vec![100.0; 19];
    prices.push(130.0);
    let bb = calculate_bollinger_bands_default(&prices).unwrap();
    assert!(bb.percent_b > 1.0);
    assert_eq!(bb.signal, BollingerSignal::Overbought);
}

#[test]
fn test_percent_b_edges() {
    assert_eq!(percent_b(90.0, 90.0, 20.0), 0.0);
    assert_eq!(percent_b(110.0, 90.0, 20.0), 1.0);
    assert_eq!(percent_b(100.0, 100.0, 0.0), 0.5);
}

/// `period - 1` flat closes followed by one jump of `step`. The last close
/// sits `(period - 1) / sqrt(period)` sample deviations from the mean.
fn single_jump(period: usize, step: f64) -> Vec<f64> {
    let mut prices = vec![100.0; period + 4];
    prices.push(100.0 + step);
    prices
}

#[test]
fn test_percent_b_pinned_at_the_bands() {
    for period in [3, 5, 10, 20, 50] {
        let std_dev = (period as f64 - 1.0) / (period as f64).sqrt();
        let params = BollingerParams { period, std_dev };

        let up = calculate_bollinger_bands(&single_jump(period, 8.0), &params).unwrap();
        assert_eq!(up.percent_b, 1.0, "period {period}, std_dev {std_dev}");
        assert!((up.upper_band - up.current_price).abs() <= 0.01);

        let down = calculate_bollinger_bands(&single_jump(period, -8.0), &params).unwrap();
        assert_eq!(down.percent_b, 0.0, "period {period}, std_dev {std_dev}");
        assert!((down.lower_band - down.current_price).abs() <= 0.01);
    }
}
