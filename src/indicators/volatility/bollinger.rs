//! Bollinger Bands indicator

use tracing::debug;

use crate::common::math;
use crate::indicators::error::Result;
use crate::indicators::validation::{validate_length, validate_period, PRICES};
use crate::models::indicators::{BollingerBandsIndicator, BollingerSignal};
use crate::models::params::BollingerParams;

/// Calculate Bollinger Bands
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * standard deviation)
/// Lower Band = Middle - (std_dev * standard deviation)
///
/// %B locates the latest close inside the bands and is pinned to 0.5 when
/// the bands collapse to zero width.
pub fn calculate_bollinger_bands(
    prices: &[f64],
    params: &BollingerParams,
) -> Result<BollingerBandsIndicator> {
    validate_period("period", params.period)?;
    validate_length(prices.len(), params.period, PRICES)?;
    debug!(
        period = params.period,
        std_dev = params.std_dev,
        points = prices.len(),
        "calculating Bollinger Bands"
    );

    let (_, middle) = math::tail_pair(&math::rolling_mean(prices, params.period));
    let (_, std) = math::tail_pair(&math::rolling_std(prices, params.period));
    let (_, current_price) = math::tail_pair(prices);

    let upper = middle + (params.std_dev * std);
    let lower = middle - (params.std_dev * std);
    let bandwidth = upper - lower;
    let percent_b = percent_b(current_price, lower, bandwidth);

    Ok(BollingerBandsIndicator {
        upper_band: math::round_to_decimals(upper, 2),
        middle_band: math::round_to_decimals(middle, 2),
        lower_band: math::round_to_decimals(lower, 2),
        bandwidth: math::round_to_decimals(bandwidth, 2),
        percent_b: math::round_to_decimals(percent_b, 3),
        current_price: math::round_to_decimals(current_price, 2),
        signal: bollinger_signal(percent_b),
        period: params.period,
        std_dev: params.std_dev,
    })
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(prices: &[f64]) -> Result<BollingerBandsIndicator> {
    calculate_bollinger_bands(prices, &BollingerParams::default())
}

/// Position of `price` within the bands: 0 at the lower band, 1 at the upper
pub fn percent_b(price: f64, lower: f64, bandwidth: f64) -> f64 {
    if bandwidth != 0.0 {
        (price - lower) / bandwidth
    } else {
        0.5
    }
}

fn bollinger_signal(percent_b: f64) -> BollingerSignal {
    if percent_b > 1.0 {
        BollingerSignal::Overbought
    } else if percent_b < 0.0 {
        BollingerSignal::Oversold
    } else if percent_b > 0.8 {
        BollingerSignal::NearUpper
    } else if percent_b < 0.2 {
        BollingerSignal::NearLower
    } else {
        BollingerSignal::Neutral
    }
}
