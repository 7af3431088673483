//! Stochastic Oscillator indicator

use tracing::debug;

use crate::common::{math, series};
use crate::indicators::error::Result;
use crate::indicators::validation::{validate_length, validate_period, CANDLES};
use crate::models::candle::Candle;
use crate::models::indicators::{StochasticIndicator, StochasticSignal};
use crate::models::params::StochasticParams;
use crate::signals::crossover::{detect_series_crossover, CrossoverType};

/// Calculate the stochastic oscillator
///
/// %K = 100 * (close - lowest low) / (highest high - lowest low) over
/// `k_period`; %D = SMA(%K, `d_period`).
pub fn calculate_stochastic(
    candles: &[Candle],
    params: &StochasticParams,
) -> Result<StochasticIndicator> {
    validate_period("k_period", params.k_period)?;
    validate_period("d_period", params.d_period)?;
    validate_length(candles.len(), params.k_period + params.d_period - 1, CANDLES)?;
    debug!(
        k_period = params.k_period,
        d_period = params.d_period,
        points = candles.len(),
        "calculating stochastic"
    );

    let closes = series::closes(candles);
    let lowest = math::rolling_min(&series::lows(candles), params.k_period);
    let highest = math::rolling_max(&series::highs(candles), params.k_period);

    let k_line: Vec<f64> = closes
        .iter()
        .zip(lowest.iter().zip(&highest))
        .map(|(close, (low, high))| 100.0 * ((close - low) / (high - low)))
        .collect();
    let d_line = math::rolling_mean(&k_line, params.d_period);

    let crossover = detect_series_crossover(&k_line, &d_line);
    let (_, k) = math::tail_pair(&k_line);
    let (_, d) = math::tail_pair(&d_line);

    Ok(StochasticIndicator {
        k_percent: math::round_to_decimals(k, 2),
        d_percent: math::round_to_decimals(d, 2),
        signal: classify(crossover, k, d, params),
        k_period: params.k_period,
        d_period: params.d_period,
        overbought: params.overbought,
        oversold: params.oversold,
    })
}

/// Calculate the stochastic oscillator with 14/3 periods and 80/20 thresholds
pub fn calculate_stochastic_default(candles: &[Candle]) -> Result<StochasticIndicator> {
    calculate_stochastic(candles, &StochasticParams::default())
}

fn classify(
    crossover: CrossoverType,
    k: f64,
    d: f64,
    params: &StochasticParams,
) -> StochasticSignal {
    let overbought = f64::from(params.overbought);
    let oversold = f64::from(params.oversold);

    match crossover {
        CrossoverType::Bullish if k < oversold => StochasticSignal::BullishCrossoverOversold,
        CrossoverType::Bullish => StochasticSignal::BullishCrossover,
        CrossoverType::Bearish if k > overbought => StochasticSignal::BearishCrossoverOverbought,
        CrossoverType::Bearish => StochasticSignal::BearishCrossover,
        CrossoverType::None if k > overbought && d > overbought => StochasticSignal::Overbought,
        CrossoverType::None if k < oversold && d < oversold => StochasticSignal::Oversold,
        CrossoverType::None if k > overbought => StochasticSignal::NearOverbought,
        CrossoverType::None if k < oversold => StochasticSignal::NearOversold,
        CrossoverType::None => StochasticSignal::Neutral,
    }
}
