//! Per-indicator parameters with their documented defaults.
//!
//! Parameters are plain values handed to each call; nothing here is global.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::indicators::error::IndicatorError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmaParams {
    pub period: usize,
}

impl Default for SmaParams {
    fn default() -> Self {
        Self { period: 20 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmaParams {
    pub period: usize,
}

impl Default for EmaParams {
    fn default() -> Self {
        Self { period: 12 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacdParams {
    pub fast_period: usize,
    pub slow_period: usize,
    pub signal_period: usize,
}

impl Default for MacdParams {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RsiParams {
    pub period: usize,
    pub overbought: u32,
    pub oversold: u32,
}

impl Default for RsiParams {
    fn default() -> Self {
        Self {
            period: 14,
            overbought: 70,
            oversold: 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtrParams {
    pub period: usize,
}

impl Default for AtrParams {
    fn default() -> Self {
        Self { period: 10 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdxParams {
    pub period: usize,
}

impl Default for AdxParams {
    fn default() -> Self {
        Self { period: 14 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BollingerParams {
    pub period: usize,
    /// Band width in standard deviations
    pub std_dev: f64,
}

impl Default for BollingerParams {
    fn default() -> Self {
        Self {
            period: 20,
            std_dev: 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StochasticParams {
    pub k_period: usize,
    pub d_period: usize,
    pub overbought: u32,
    pub oversold: u32,
}

impl Default for StochasticParams {
    fn default() -> Self {
        Self {
            k_period: 14,
            d_period: 3,
            overbought: 80,
            oversold: 20,
        }
    }
}

/// How historical volatility is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolatilityMethod {
    #[default]
    CloseToClose,
    LogReturns,
    /// Range-based; needs candles with high/low instead of closes
    Parkinson,
}

impl VolatilityMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            VolatilityMethod::CloseToClose => "close_to_close",
            VolatilityMethod::LogReturns => "log_returns",
            VolatilityMethod::Parkinson => "parkinson",
        }
    }
}

impl fmt::Display for VolatilityMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VolatilityMethod {
    type Err = IndicatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "close_to_close" => Ok(VolatilityMethod::CloseToClose),
            "log_returns" => Ok(VolatilityMethod::LogReturns),
            "parkinson" => Ok(VolatilityMethod::Parkinson),
            other => Err(IndicatorError::InvalidParameter {
                name: "method".to_string(),
                reason: format!(
                    "unknown method '{other}', expected close_to_close, log_returns or parkinson"
                ),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolatilityParams {
    pub period: usize,
    /// Periods per year (252 for equities, 365 for crypto)
    pub annualize_factor: u32,
    pub method: VolatilityMethod,
}

impl Default for VolatilityParams {
    fn default() -> Self {
        Self {
            period: 20,
            annualize_factor: 252,
            method: VolatilityMethod::CloseToClose,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParkinsonParams {
    pub period: usize,
    pub annualize_factor: u32,
}

impl Default for ParkinsonParams {
    fn default() -> Self {
        Self {
            period: 20,
            annualize_factor: 252,
        }
    }
}

impl From<VolatilityParams> for ParkinsonParams {
    fn from(params: VolatilityParams) -> Self {
        Self {
            period: params.period,
            annualize_factor: params.annualize_factor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PivotType {
    #[default]
    Standard,
    Fibonacci,
    Camarilla,
}

impl PivotType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PivotType::Standard => "standard",
            PivotType::Fibonacci => "fibonacci",
            PivotType::Camarilla => "camarilla",
        }
    }
}

impl fmt::Display for PivotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PivotType {
    type Err = IndicatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(PivotType::Standard),
            "fibonacci" => Ok(PivotType::Fibonacci),
            "camarilla" => Ok(PivotType::Camarilla),
            other => Err(IndicatorError::InvalidParameter {
                name: "type".to_string(),
                reason: format!(
                    "unknown pivot type '{other}', expected standard, fibonacci or camarilla"
                ),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PivotParams {
    pub pivot_type: PivotType,
    /// Enables nearest support/resistance and position analysis
    pub current_price: Option<f64>,
}

pub const DEFAULT_MOVE_MULTIPLIER: f64 = 0.85;

/// ATM option premiums for the premium-based expected move
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StraddleQuote {
    pub spot_price: f64,
    #[serde(default)]
    pub atm_call: Option<f64>,
    #[serde(default)]
    pub atm_put: Option<f64>,
    /// Takes precedence over `atm_call + atm_put` when present
    #[serde(default)]
    pub straddle_price: Option<f64>,
    #[serde(default = "default_move_multiplier")]
    pub multiplier: f64,
}

fn default_move_multiplier() -> f64 {
    DEFAULT_MOVE_MULTIPLIER
}

impl Default for StraddleQuote {
    fn default() -> Self {
        Self {
            spot_price: 0.0,
            atm_call: None,
            atm_put: None,
            straddle_price: None,
            multiplier: DEFAULT_MOVE_MULTIPLIER,
        }
    }
}

impl StraddleQuote {
    pub fn from_straddle(spot_price: f64, straddle_price: f64) -> Self {
        Self {
            spot_price,
            atm_call: None,
            atm_put: None,
            straddle_price: Some(straddle_price),
            multiplier: DEFAULT_MOVE_MULTIPLIER,
        }
    }

    pub fn from_call_put(spot_price: f64, atm_call: f64, atm_put: f64) -> Self {
        Self {
            spot_price,
            atm_call: Some(atm_call),
            atm_put: Some(atm_put),
            straddle_price: None,
            multiplier: DEFAULT_MOVE_MULTIPLIER,
        }
    }

    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }
}

/// Implied volatility input for the IV-based expected move
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpliedVolQuote {
    pub spot_price: f64,
    /// Annualised implied volatility as a decimal (0.30 = 30%)
    pub iv: f64,
    pub days_to_expiry: f64,
}
