//! Pivot point levels (standard, Fibonacci, Camarilla) from one prior
//! period's high/low/close

use tracing::debug;

use crate::common::math;
use crate::indicators::error::Result;
use crate::models::candle::Candle;
use crate::models::indicators::{NearestLevel, PivotLevels, PivotPointsIndicator, PivotPosition};
use crate::models::params::{PivotParams, PivotType};

const FIB_LEVEL_1: f64 = 0.382;
const FIB_LEVEL_2: f64 = 0.618;
const FIB_LEVEL_3: f64 = 1.000;
const CAMARILLA_FACTOR: f64 = 1.1;

/// Calculate pivot levels from the previous period and, when
/// `params.current_price` is set, locate the nearest support and resistance
pub fn calculate_pivot_points(
    previous: &Candle,
    params: &PivotParams,
) -> Result<PivotPointsIndicator> {
    debug!(pivot_type = %params.pivot_type, "calculating pivot points");

    let levels = pivot_levels(previous.high, previous.low, previous.close, params.pivot_type);
    let mut result = PivotPointsIndicator {
        pivot_type: params.pivot_type,
        levels,
        current_price: None,
        nearest_resistance: None,
        nearest_support: None,
        position: None,
    };

    if let Some(price) = params.current_price {
        result.current_price = Some(math::round_to_decimals(price, 2));
        locate_price(&mut result, price);
    }

    Ok(result)
}

/// Standard pivots with no position analysis
pub fn calculate_pivot_points_default(previous: &Candle) -> Result<PivotPointsIndicator> {
    calculate_pivot_points(previous, &PivotParams::default())
}

/// Rounded (2dp) levels for the requested pivot variant
pub fn pivot_levels(high: f64, low: f64, close: f64, pivot_type: PivotType) -> PivotLevels {
    let r = |v: f64| math::round_to_decimals(v, 2);
    let range = high - low;

    match pivot_type {
        PivotType::Standard => {
            let pivot = (high + low + close) / 3.0;
            PivotLevels {
                r4: None,
                r3: r(high + 2.0 * (pivot - low)),
                r2: r(pivot + range),
                r1: r((2.0 * pivot) - low),
                pivot: r(pivot),
                s1: r((2.0 * pivot) - high),
                s2: r(pivot - range),
                s3: r(low - 2.0 * (high - pivot)),
                s4: None,
            }
        }
        PivotType::Fibonacci => {
            let pivot = (high + low + close) / 3.0;
            PivotLevels {
                r4: None,
                r3: r(pivot + (FIB_LEVEL_3 * range)),
                r2: r(pivot + (FIB_LEVEL_2 * range)),
                r1: r(pivot + (FIB_LEVEL_1 * range)),
                pivot: r(pivot),
                s1: r(pivot - (FIB_LEVEL_1 * range)),
                s2: r(pivot - (FIB_LEVEL_2 * range)),
                s3: r(pivot - (FIB_LEVEL_3 * range)),
                s4: None,
            }
        }
        PivotType::Camarilla => {
            // Camarilla levels hang off the close, which also serves as pivot
            let step = |divisor: f64| range * CAMARILLA_FACTOR / divisor;
            PivotLevels {
                r4: Some(r(close + step(2.0))),
                r3: r(close + step(4.0)),
                r2: r(close + step(6.0)),
                r1: r(close + step(12.0)),
                pivot: r(close),
                s1: r(close - step(12.0)),
                s2: r(close - step(6.0)),
                s3: r(close - step(4.0)),
                s4: Some(r(close - step(2.0))),
            }
        }
    }
}

/// Fill in position and nearest levels for `price`.
///
/// Above the pivot, resistance is the lowest r-level above price and support
/// the highest of pivot and the s-levels; below it the roles mirror. Ties
/// keep the first level in r4 to s4 order.
fn locate_price(result: &mut PivotPointsIndicator, price: f64) {
    let named = result.levels.named();
    let resistances = named.iter().filter(|(name, _)| name.starts_with('r'));
    let supports = named.iter().filter(|(name, _)| name.starts_with('s'));
    let pivot = named.iter().filter(|(name, _)| *name == "pivot");

    if price > result.levels.pivot {
        result.nearest_resistance = lowest(resistances.filter(|(_, v)| *v > price));
        result.nearest_support = highest(pivot.chain(supports));
        result.position = Some(PivotPosition::AbovePivot);
    } else {
        result.nearest_support = highest(supports.filter(|(_, v)| *v < price));
        result.nearest_resistance = lowest(resistances.chain(pivot));
        result.position = Some(PivotPosition::BelowPivot);
    }
}

fn highest<'a>(levels: impl Iterator<Item = &'a (&'static str, f64)>) -> Option<NearestLevel> {
    pick(levels, |candidate, best| candidate > best)
}

fn lowest<'a>(levels: impl Iterator<Item = &'a (&'static str, f64)>) -> Option<NearestLevel> {
    pick(levels, |candidate, best| candidate < best)
}

/// Keep the first level that no later level strictly beats
fn pick<'a>(
    levels: impl Iterator<Item = &'a (&'static str, f64)>,
    beats: impl Fn(f64, f64) -> bool,
) -> Option<NearestLevel> {
    levels
        .fold(None, |best: Option<&(&'static str, f64)>, level| match best {
            Some(current) if !beats(level.1, current.1) => Some(current),
            _ => Some(level),
        })
        .map(|(name, price)| NearestLevel {
            level: (*name).to_string(),
            price: *price,
        })
}
