//! ADX (Average Directional Index) indicator

use tracing::debug;

use crate::common::{math, series};
use crate::indicators::error::Result;
use crate::indicators::validation::{validate_length, validate_period, CANDLES};
use crate::models::candle::Candle;
use crate::models::indicators::{AdxIndicator, AdxSignal, TrendDirection, TrendStrength};
use crate::models::params::AdxParams;
use crate::signals::crossover::{detect_series_crossover, CrossoverType};

/// ADX above this level counts as trending for the momentum signals
const TRENDING_ADX: f64 = 25.0;

/// Smoothed directional series, one entry per candle transition
/// (index `i` describes candle `i + 1`)
struct DirectionalLines {
    plus_di: Vec<f64>,
    minus_di: Vec<f64>,
    adx: Vec<f64>,
}

/// Calculate ADX with +DI/-DI
///
/// ADX measures trend strength regardless of direction; the DI lines give
/// the direction. Needs `2 * period + 1` candles: `period` transitions to
/// seed the smoothed TR/DM, another `period` DX values to seed ADX, plus the
/// first candle which has no predecessor.
pub fn calculate_adx(candles: &[Candle], params: &AdxParams) -> Result<AdxIndicator> {
    let period = params.period;
    validate_period("period", period)?;
    validate_length(candles.len(), 2 * period + 1, CANDLES)?;
    debug!(period, points = candles.len(), "calculating ADX");

    let lines = directional_lines(candles, period);

    let (prev_adx, adx) = math::tail_pair(&lines.adx);
    let (_, plus_di) = math::tail_pair(&lines.plus_di);
    let (_, minus_di) = math::tail_pair(&lines.minus_di);

    let strength = trend_strength(adx);
    let direction = if plus_di > minus_di {
        TrendDirection::Bullish
    } else if minus_di > plus_di {
        TrendDirection::Bearish
    } else {
        TrendDirection::Neutral
    };

    let signal = match detect_series_crossover(&lines.plus_di, &lines.minus_di) {
        CrossoverType::Bullish => AdxSignal::BullishCrossover,
        CrossoverType::Bearish => AdxSignal::BearishCrossover,
        CrossoverType::None if adx > prev_adx && adx > TRENDING_ADX => {
            AdxSignal::TrendStrengthening
        }
        CrossoverType::None if adx < prev_adx && adx > TRENDING_ADX => AdxSignal::TrendWeakening,
        CrossoverType::None => strength.into(),
    };

    Ok(AdxIndicator {
        adx: math::round_to_decimals(adx, 2),
        plus_di: math::round_to_decimals(plus_di, 2),
        minus_di: math::round_to_decimals(minus_di, 2),
        trend_strength: strength,
        trend_direction: direction,
        signal,
        period,
    })
}

/// Calculate ADX with default period (14)
pub fn calculate_adx_default(candles: &[Candle]) -> Result<AdxIndicator> {
    calculate_adx(candles, &AdxParams::default())
}

/// Bucket an ADX reading into a trend-strength label
pub fn trend_strength(adx: f64) -> TrendStrength {
    if adx < 20.0 {
        TrendStrength::NoTrend
    } else if adx < 25.0 {
        TrendStrength::WeakTrend
    } else if adx < 50.0 {
        TrendStrength::StrongTrend
    } else if adx < 75.0 {
        TrendStrength::VeryStrongTrend
    } else {
        TrendStrength::ExtremelyStrongTrend
    }
}

fn directional_lines(candles: &[Candle], period: usize) -> DirectionalLines {
    let transitions = candles.len().saturating_sub(1);
    let mut plus_dm = Vec::with_capacity(transitions);
    let mut minus_dm = Vec::with_capacity(transitions);

    for pair in candles.windows(2) {
        let up_move = pair[1].high - pair[0].high;
        let down_move = pair[0].low - pair[1].low;

        plus_dm.push(if up_move > down_move && up_move > 0.0 {
            up_move
        } else {
            0.0
        });
        minus_dm.push(if down_move > up_move && down_move > 0.0 {
            down_move
        } else {
            0.0
        });
    }

    // Drop the undefined first entry so every series starts at candle 1
    let tr: Vec<f64> = series::true_range(candles).into_iter().skip(1).collect();

    let smoothed_tr = math::wilder(&tr, period);
    let smoothed_plus = math::wilder(&plus_dm, period);
    let smoothed_minus = math::wilder(&minus_dm, period);

    let plus_di: Vec<f64> = smoothed_plus
        .iter()
        .zip(&smoothed_tr)
        .map(|(dm, tr)| 100.0 * dm / tr)
        .collect();
    let minus_di: Vec<f64> = smoothed_minus
        .iter()
        .zip(&smoothed_tr)
        .map(|(dm, tr)| 100.0 * dm / tr)
        .collect();

    let dx: Vec<f64> = plus_di
        .iter()
        .zip(&minus_di)
        .map(|(plus, minus)| 100.0 * (plus - minus).abs() / (plus + minus))
        .collect();

    // DX is defined from index `period - 1`; ADX seeds on the first `period`
    // of those values and recurs from there.
    let warmup = period - 1;
    let mut adx = vec![f64::NAN; warmup.min(dx.len())];
    adx.extend(math::wilder(&dx[warmup.min(dx.len())..], period));

    DirectionalLines {
        plus_di,
        minus_di,
        adx,
    }
}
