//! Two-line crossover detection shared by MACD, ADX and the stochastic
//! oscillator

use serde::{Deserialize, Serialize};

use crate::common::math::tail_pair;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrossoverType {
    Bullish,
    Bearish,
    None,
}

/// Compare a fast line against a slow line across the last two points.
///
/// Bullish when the fast line was at or below the slow line and is now
/// strictly above it; bearish for the mirror case. A NaN anywhere (e.g. a
/// series with a single point) never crosses.
pub fn detect_crossover(prev_fast: f64, prev_slow: f64, fast: f64, slow: f64) -> CrossoverType {
    if prev_fast <= prev_slow && fast > slow {
        CrossoverType::Bullish
    } else if prev_fast >= prev_slow && fast < slow {
        CrossoverType::Bearish
    } else {
        CrossoverType::None
    }
}

/// [`detect_crossover`] over the tails of two equally long series
pub fn detect_series_crossover(fast: &[f64], slow: &[f64]) -> CrossoverType {
    let (prev_fast, fast) = tail_pair(fast);
    let (prev_slow, slow) = tail_pair(slow);
    detect_crossover(prev_fast, prev_slow, fast, slow)
}
