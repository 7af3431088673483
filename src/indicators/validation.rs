//! Input checks shared by all indicators.
//!
//! Every check runs before any computation so a failing call never produces
//! a partial result.

use tracing::warn;

use crate::indicators::error::{IndicatorError, Result};
use crate::models::candle::Candle;

pub const PRICES: &str = "prices";
pub const CANDLES: &str = "candles";

/// Require at least `required` data points
pub fn validate_length(got: usize, required: usize, unit: &'static str) -> Result<()> {
    if got < required {
        warn!(required, got, unit, "insufficient data");
        return Err(IndicatorError::InsufficientData {
            required,
            got,
            unit,
        });
    }
    Ok(())
}

/// Periods and window lengths must be positive
pub fn validate_period(name: &str, value: usize) -> Result<()> {
    if value == 0 {
        warn!(parameter = name, "zero-length period");
        return Err(IndicatorError::InvalidParameter {
            name: name.to_string(),
            reason: "must be greater than 0".to_string(),
        });
    }
    Ok(())
}

/// Every candle must carry an `open` price
pub fn validate_open(candles: &[Candle]) -> Result<()> {
    validate_optional_field(candles, "open", |c| c.open)
}

/// Every candle must carry a `volume`
pub fn validate_volume(candles: &[Candle]) -> Result<()> {
    validate_optional_field(candles, "volume", |c| c.volume)
}

fn validate_optional_field(
    candles: &[Candle],
    field: &str,
    get: impl Fn(&Candle) -> Option<f64>,
) -> Result<()> {
    match candles.iter().position(|c| get(c).is_none()) {
        Some(index) => {
            warn!(index, field, "candle missing field");
            Err(IndicatorError::missing_fields(index, vec![field.to_string()]))
        }
        None => Ok(()),
    }
}
