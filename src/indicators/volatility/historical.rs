//! Historical (close-to-close) and Parkinson (high/low range) volatility

use std::f64::consts::LN_2;

use tracing::debug;

use crate::common::{math, series};
use crate::indicators::error::{IndicatorError, Result};
use crate::indicators::validation::{validate_length, validate_period, CANDLES, PRICES};
use crate::models::candle::Candle;
use crate::models::indicators::{
    HistoricalVolatilityIndicator, ParkinsonVolatilityIndicator, VolatilityIndicator,
    VolatilityRegime,
};
use crate::models::params::{ParkinsonParams, VolatilityMethod, VolatilityParams};

const TRADING_DAYS_PER_WEEK: f64 = 5.0;
const TRADING_DAYS_PER_MONTH: f64 = 21.0;

/// Calculate close-to-close historical volatility
///
/// Returns are simple or logarithmic depending on `params.method`; the
/// rolling sample standard deviation of the returns is the daily
/// volatility, scaled by `sqrt(annualize_factor)` for the annual figure.
/// The latest reading is ranked against every rolling value in the series.
pub fn calculate_historical_volatility(
    prices: &[f64],
    params: &VolatilityParams,
) -> Result<HistoricalVolatilityIndicator> {
    if params.method == VolatilityMethod::Parkinson {
        return Err(IndicatorError::InvalidParameter {
            name: "method".to_string(),
            reason: "parkinson volatility needs high/low candles, not prices".to_string(),
        });
    }
    validate_period("period", params.period)?;
    validate_length(prices.len(), params.period + 1, PRICES)?;
    debug!(
        period = params.period,
        method = %params.method,
        points = prices.len(),
        "calculating historical volatility"
    );

    let returns = match params.method {
        VolatilityMethod::LogReturns => series::log_returns(prices),
        _ => series::simple_returns(prices),
    };
    let rolling_std = math::rolling_std(&returns, params.period);
    let (_, daily_vol) = math::tail_pair(&rolling_std);

    let annualizer = f64::from(params.annualize_factor).sqrt();
    let annualized_pct = daily_vol * annualizer * 100.0;

    let history: Vec<f64> = rolling_std.into_iter().filter(|v| !v.is_nan()).collect();
    let percentile_rank = percentile_rank(&history, daily_vol);
    let scaled = |v: f64| if history.is_empty() { 0.0 } else { v * annualizer * 100.0 };
    let min_vol = scaled(history.iter().copied().fold(f64::INFINITY, f64::min));
    let max_vol = scaled(history.iter().copied().fold(f64::NEG_INFINITY, f64::max));
    let mean_vol = scaled(math::mean(&history));

    Ok(HistoricalVolatilityIndicator {
        daily_vol: math::round_to_decimals(daily_vol * 100.0, 2),
        weekly_vol: math::round_to_decimals(daily_vol * TRADING_DAYS_PER_WEEK.sqrt() * 100.0, 2),
        monthly_vol: math::round_to_decimals(daily_vol * TRADING_DAYS_PER_MONTH.sqrt() * 100.0, 2),
        annualized_vol: math::round_to_decimals(annualized_pct, 2),
        percentile_rank: math::round_to_decimals(percentile_rank, 1),
        regime: volatility_regime(annualized_pct),
        min_vol: math::round_to_decimals(min_vol, 2),
        max_vol: math::round_to_decimals(max_vol, 2),
        mean_vol: math::round_to_decimals(mean_vol, 2),
        period: params.period,
        annualize_factor: params.annualize_factor,
    })
}

/// Calculate historical volatility with a 20-period window, 252 periods per
/// year, close-to-close returns
pub fn calculate_historical_volatility_default(
    prices: &[f64],
) -> Result<HistoricalVolatilityIndicator> {
    calculate_historical_volatility(prices, &VolatilityParams::default())
}

/// Calculate Parkinson volatility from the high/low range
///
/// sigma = sqrt(sum(ln(high / low)^2) / (4 * ln 2 * period)) over the
/// trailing `period` candles. Only `high` and `low` are read.
pub fn calculate_parkinson_volatility(
    candles: &[Candle],
    params: &ParkinsonParams,
) -> Result<ParkinsonVolatilityIndicator> {
    validate_period("period", params.period)?;
    validate_length(candles.len(), params.period, CANDLES)?;
    debug!(period = params.period, points = candles.len(), "calculating Parkinson volatility");

    let squared_log_ranges: Vec<f64> = candles
        .iter()
        .map(|c| (c.high / c.low).ln().powi(2))
        .collect();
    let rolling_sum = math::rolling_sum(&squared_log_ranges, params.period);
    let (_, latest_sum) = math::tail_pair(&rolling_sum);

    let daily_vol = (latest_sum / (params.period as f64 * 4.0 * LN_2)).sqrt();
    let annualized_vol = daily_vol * f64::from(params.annualize_factor).sqrt();

    Ok(ParkinsonVolatilityIndicator {
        parkinson_daily: math::round_to_decimals(daily_vol * 100.0, 2),
        parkinson_annualized: math::round_to_decimals(annualized_vol * 100.0, 2),
        period: params.period,
    })
}

/// Dispatch on `params.method`: Parkinson reads the candle ranges, the other
/// methods read the closes
pub fn calculate_volatility(
    candles: &[Candle],
    params: &VolatilityParams,
) -> Result<VolatilityIndicator> {
    match params.method {
        VolatilityMethod::Parkinson => {
            calculate_parkinson_volatility(candles, &ParkinsonParams::from(*params))
                .map(VolatilityIndicator::Parkinson)
        }
        _ => calculate_historical_volatility(&series::closes(candles), params)
            .map(VolatilityIndicator::Historical),
    }
}

/// Share of `history` strictly below `latest`, in percent; 50 when empty
fn percentile_rank(history: &[f64], latest: f64) -> f64 {
    if history.is_empty() {
        return 50.0;
    }
    let below = history.iter().filter(|&&v| v < latest).count();
    below as f64 / history.len() as f64 * 100.0
}

/// Bucket an annualised volatility percentage
pub fn volatility_regime(annualized_pct: f64) -> VolatilityRegime {
    if annualized_pct < 10.0 {
        VolatilityRegime::VeryLow
    } else if annualized_pct < 15.0 {
        VolatilityRegime::Low
    } else if annualized_pct < 20.0 {
        VolatilityRegime::Normal
    } else if annualized_pct < 30.0 {
        VolatilityRegime::Elevated
    } else if annualized_pct < 50.0 {
        VolatilityRegime::High
    } else {
        VolatilityRegime::Extreme
    }
}
