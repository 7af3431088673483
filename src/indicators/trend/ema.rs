//! EMA (Exponential Moving Average) indicator

use std::cmp::Ordering;

use tracing::debug;

use crate::common::math;
use crate::indicators::error::Result;
use crate::indicators::validation::{validate_length, validate_period, PRICES};
use crate::models::indicators::{EmaIndicator, PriceTrend};
use crate::models::params::EmaParams;

/// Calculate EMA for a specific period and classify the latest close
/// against it
pub fn calculate_ema(prices: &[f64], params: &EmaParams) -> Result<EmaIndicator> {
    validate_period("period", params.period)?;
    validate_length(prices.len(), params.period, PRICES)?;
    debug!(period = params.period, points = prices.len(), "calculating EMA");

    let ema = math::ema(prices, params.period);
    let (_, ema_value) = math::tail_pair(&ema);
    let (_, current_price) = math::tail_pair(prices);

    Ok(EmaIndicator {
        ema: math::round_to_decimals(ema_value, 2),
        period: params.period,
        current_price: math::round_to_decimals(current_price, 2),
        price_trend: price_trend(current_price, ema_value),
    })
}

/// Calculate EMA with default period (12)
pub fn calculate_ema_default(prices: &[f64]) -> Result<EmaIndicator> {
    calculate_ema(prices, &EmaParams::default())
}

fn price_trend(price: f64, ema: f64) -> PriceTrend {
    match price.partial_cmp(&ema) {
        Some(Ordering::Greater) => PriceTrend::AboveEma,
        Some(Ordering::Less) => PriceTrend::BelowEma,
        _ => PriceTrend::AtEma,
    }
}
