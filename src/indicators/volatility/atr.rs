//! ATR (Average True Range) indicator

use tracing::debug;

use crate::common::{math, series};
use crate::indicators::error::Result;
use crate::indicators::validation::{validate_length, validate_open, validate_period, CANDLES};
use crate::models::candle::Candle;
use crate::models::indicators::AtrIndicator;
use crate::models::params::AtrParams;

/// Calculate ATR (Average True Range)
///
/// ATR here is the simple mean of the most recent `period` true ranges, not
/// a Wilder recurrence. Half and double ATR are reported for stop sizing.
pub fn calculate_atr(candles: &[Candle], params: &AtrParams) -> Result<AtrIndicator> {
    validate_period("period", params.period)?;
    validate_length(candles.len(), params.period + 1, CANDLES)?;
    validate_open(candles)?;
    debug!(period = params.period, points = candles.len(), "calculating ATR");

    let true_ranges: Vec<f64> = series::true_range(candles)
        .into_iter()
        .filter(|tr| !tr.is_nan())
        .collect();
    let recent = &true_ranges[true_ranges.len().saturating_sub(params.period)..];
    let atr = math::mean(recent);

    Ok(AtrIndicator {
        atr: math::round_to_decimals(atr, 2),
        half_atr: math::round_to_decimals(atr * 0.5, 2),
        double_atr: math::round_to_decimals(atr * 2.0, 2),
        period: params.period,
    })
}

/// Calculate ATR with default period (10)
pub fn calculate_atr_default(candles: &[Candle]) -> Result<AtrIndicator> {
    calculate_atr(candles, &AtrParams::default())
}
