//! MACD (Moving Average Convergence Divergence) indicator

use tracing::debug;

use crate::common::math;
use crate::indicators::error::Result;
use crate::indicators::validation::{validate_length, validate_period, PRICES};
use crate::models::indicators::{MacdIndicator, MacdSignal};
use crate::models::params::MacdParams;
use crate::signals::crossover::{detect_series_crossover, CrossoverType};

/// Full MACD series, one entry per input price
#[derive(Debug, Clone, PartialEq)]
pub struct MacdLines {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

/// Calculate MACD indicator
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of MACD
/// Histogram = MACD - Signal
pub fn calculate_macd(prices: &[f64], params: &MacdParams) -> Result<MacdIndicator> {
    validate_period("fast_period", params.fast_period)?;
    validate_period("slow_period", params.slow_period)?;
    validate_period("signal_period", params.signal_period)?;
    validate_length(prices.len(), params.slow_period + params.signal_period, PRICES)?;
    debug!(
        fast = params.fast_period,
        slow = params.slow_period,
        signal = params.signal_period,
        points = prices.len(),
        "calculating MACD"
    );

    let lines = macd_lines(prices, params);
    let (_, macd) = math::tail_pair(&lines.macd);
    let (_, signal) = math::tail_pair(&lines.signal);
    let (prev_histogram, histogram) = math::tail_pair(&lines.histogram);

    let crossover_signal = match detect_series_crossover(&lines.macd, &lines.signal) {
        CrossoverType::Bullish => MacdSignal::BullishCrossover,
        CrossoverType::Bearish => MacdSignal::BearishCrossover,
        CrossoverType::None => histogram_signal(prev_histogram, histogram),
    };

    Ok(MacdIndicator {
        macd: math::round_to_decimals(macd, 3),
        signal: math::round_to_decimals(signal, 3),
        histogram: math::round_to_decimals(histogram, 3),
        crossover_signal,
        fast_period: params.fast_period,
        slow_period: params.slow_period,
        signal_period: params.signal_period,
    })
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(prices: &[f64]) -> Result<MacdIndicator> {
    calculate_macd(prices, &MacdParams::default())
}

/// MACD, signal and histogram over the whole series
pub fn macd_lines(prices: &[f64], params: &MacdParams) -> MacdLines {
    let fast = math::ema(prices, params.fast_period);
    let slow = math::ema(prices, params.slow_period);

    let macd: Vec<f64> = fast.iter().zip(&slow).map(|(f, s)| f - s).collect();
    let signal = math::ema(&macd, params.signal_period);
    let histogram = macd.iter().zip(&signal).map(|(m, s)| m - s).collect();

    MacdLines {
        macd,
        signal,
        histogram,
    }
}

/// Histogram momentum when no crossover happened on the latest bar
fn histogram_signal(previous: f64, current: f64) -> MacdSignal {
    if current > 0.0 && current > previous {
        MacdSignal::BullishMomentum
    } else if current < 0.0 && current < previous {
        MacdSignal::BearishMomentum
    } else if current > 0.0 {
        MacdSignal::Bullish
    } else if current < 0.0 {
        MacdSignal::Bearish
    } else {
        MacdSignal::Neutral
    }
}
