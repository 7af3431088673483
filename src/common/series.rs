//! Per-position series derived from candles and price sequences

use crate::models::candle::Candle;

pub fn closes(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.close).collect()
}

pub fn highs(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.high).collect()
}

pub fn lows(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.low).collect()
}

/// True range per candle; NaN at index 0 where no previous close exists
pub fn true_range(candles: &[Candle]) -> Vec<f64> {
    let mut out = Vec::with_capacity(candles.len());
    if candles.is_empty() {
        return out;
    }

    out.push(f64::NAN);
    for pair in candles.windows(2) {
        out.push(pair[1].true_range(pair[0].close));
    }
    out
}

pub fn typical_price(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(Candle::typical_price).collect()
}

/// First difference; NaN at index 0
pub fn diff(values: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    if values.is_empty() {
        return out;
    }

    out.push(f64::NAN);
    out.extend(values.windows(2).map(|w| w[1] - w[0]));
    out
}

/// Simple returns `p_t / p_{t-1} - 1`. Undefined (NaN) returns, including the
/// leading one, are dropped.
pub fn simple_returns(values: &[f64]) -> Vec<f64> {
    values
        .windows(2)
        .map(|w| w[1] / w[0] - 1.0)
        .filter(|r| !r.is_nan())
        .collect()
}

/// Log returns `ln(p_t / p_{t-1})`, dropping undefined entries like
/// [`simple_returns`]
pub fn log_returns(values: &[f64]) -> Vec<f64> {
    values
        .windows(2)
        .map(|w| (w[1] / w[0]).ln())
        .filter(|r| !r.is_nan())
        .collect()
}
