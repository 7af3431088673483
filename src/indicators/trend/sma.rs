//! SMA (Simple Moving Average) indicator

use tracing::debug;

use crate::common::math;
use crate::indicators::error::Result;
use crate::indicators::validation::{validate_length, validate_period, PRICES};
use crate::models::indicators::SmaIndicator;
use crate::models::params::SmaParams;

/// Calculate SMA over the most recent `period` closes
pub fn calculate_sma(prices: &[f64], params: &SmaParams) -> Result<SmaIndicator> {
    validate_period("period", params.period)?;
    validate_length(prices.len(), params.period, PRICES)?;
    debug!(period = params.period, points = prices.len(), "calculating SMA");

    let sma = math::rolling_mean(prices, params.period);
    let (_, latest) = math::tail_pair(&sma);

    Ok(SmaIndicator {
        sma: math::round_to_decimals(latest, 2),
        period: params.period,
    })
}

/// Calculate SMA with default period (20)
pub fn calculate_sma_default(prices: &[f64]) -> Result<SmaIndicator> {
    calculate_sma(prices, &SmaParams::default())
}
