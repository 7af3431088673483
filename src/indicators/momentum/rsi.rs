//! RSI (Relative Strength Index) indicator

use tracing::debug;

use crate::common::{math, series};
use crate::indicators::error::Result;
use crate::indicators::validation::{validate_length, validate_period, PRICES};
use crate::models::indicators::{RsiIndicator, RsiSignal};
use crate::models::params::RsiParams;

/// Calculate RSI indicator
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// Average gain and loss are plain rolling means over `period`, not Wilder
/// averages.
pub fn calculate_rsi(prices: &[f64], params: &RsiParams) -> Result<RsiIndicator> {
    validate_period("period", params.period)?;
    validate_length(prices.len(), params.period + 1, PRICES)?;
    debug!(period = params.period, points = prices.len(), "calculating RSI");

    let rsi = rsi_series(prices, params.period);
    let (_, value) = math::tail_pair(&rsi);

    Ok(RsiIndicator {
        rsi: math::round_to_decimals(value, 2),
        period: params.period,
        signal: rsi_signal(value, params),
    })
}

/// Calculate RSI with default period (14) and 70/30 thresholds
pub fn calculate_rsi_default(prices: &[f64]) -> Result<RsiIndicator> {
    calculate_rsi(prices, &RsiParams::default())
}

/// RSI for every position; NaN until `period` deltas are available
pub fn rsi_series(prices: &[f64], period: usize) -> Vec<f64> {
    let deltas = series::diff(prices);
    let gains: Vec<f64> = deltas
        .iter()
        .map(|&d| if d > 0.0 { d } else { 0.0 })
        .collect();
    let losses: Vec<f64> = deltas
        .iter()
        .map(|&d| if d < 0.0 { -d } else { 0.0 })
        .collect();

    let avg_gain = math::rolling_mean(&gains, period);
    let avg_loss = math::rolling_mean(&losses, period);

    // The leading delta is undefined, so the first window starts at index 1.
    avg_gain
        .iter()
        .zip(&avg_loss)
        .enumerate()
        .map(|(i, (&gain, &loss))| {
            if i < period {
                f64::NAN
            } else {
                rsi_from_averages(gain, loss)
            }
        })
        .collect()
}

/// 100 when there are no losses; NaN when there is no movement at all
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return if avg_gain == 0.0 { f64::NAN } else { 100.0 };
    }
    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}

/// Classify an RSI reading against the overbought/oversold thresholds
pub fn rsi_signal(rsi: f64, params: &RsiParams) -> RsiSignal {
    if rsi > f64::from(params.overbought) {
        RsiSignal::Overbought
    } else if rsi < f64::from(params.oversold) {
        RsiSignal::Oversold
    } else {
        RsiSignal::Neutral
    }
}
