//! VWAP (Volume Weighted Average Price) indicator

use tracing::debug;

use crate::common::{math, series};
use crate::indicators::error::Result;
use crate::indicators::validation::{validate_length, validate_volume, CANDLES};
use crate::models::candle::Candle;
use crate::models::indicators::{VwapIndicator, VwapSignal};

/// Calculate session VWAP over every supplied candle
///
/// VWAP = sum(typical_price * volume) / sum(volume), cumulative over the
/// whole series. The bands sit one volume-weighted standard deviation of
/// typical price around VWAP.
pub fn calculate_vwap(candles: &[Candle]) -> Result<VwapIndicator> {
    validate_length(candles.len(), 1, CANDLES)?;
    validate_volume(candles)?;
    debug!(points = candles.len(), "calculating VWAP");

    let typical = series::typical_price(candles);
    let volumes: Vec<f64> = candles.iter().map(|c| c.volume.unwrap_or_default()).collect();

    let total_volume: f64 = volumes.iter().sum();
    let price_volume: f64 = typical.iter().zip(&volumes).map(|(tp, v)| tp * v).sum();
    let vwap = price_volume / total_volume;

    let (_, current_price) = math::tail_pair(&series::closes(candles));
    let deviation = (current_price - vwap) / vwap * 100.0;

    let weighted_squares: f64 = typical
        .iter()
        .zip(&volumes)
        .map(|(tp, v)| (tp - vwap).powi(2) * v)
        .sum();
    let std_dev = (weighted_squares / total_volume).sqrt();

    Ok(VwapIndicator {
        vwap: math::round_to_decimals(vwap, 2),
        current_price: math::round_to_decimals(current_price, 2),
        deviation_pct: math::round_to_decimals(deviation, 2),
        upper_band: math::round_to_decimals(vwap + std_dev, 2),
        lower_band: math::round_to_decimals(vwap - std_dev, 2),
        signal: vwap_signal(deviation),
        // Truncates toward zero
        total_volume: total_volume as i64,
    })
}

fn vwap_signal(deviation_pct: f64) -> VwapSignal {
    if deviation_pct > 2.0 {
        VwapSignal::SignificantlyAbove
    } else if deviation_pct > 0.5 {
        VwapSignal::Above
    } else if deviation_pct < -2.0 {
        VwapSignal::SignificantlyBelow
    } else if deviation_pct < -0.5 {
        VwapSignal::Below
    } else {
        VwapSignal::NearVwap
    }
}
