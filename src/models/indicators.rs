//! Indicator results and their classification labels.
//!
//! Numeric fields are already rounded to their published precision; field
//! names and label strings are the serialized contract.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::params::PivotType;

/// Declares a label enum whose variants serialize to fixed snake_case strings.
macro_rules! signal_label {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

signal_label!(
    /// Latest close relative to its EMA
    PriceTrend {
        AboveEma => "above_ema",
        BelowEma => "below_ema",
        AtEma => "at_ema",
    }
);

signal_label!(MacdSignal {
    BullishCrossover => "bullish_crossover",
    BearishCrossover => "bearish_crossover",
    BullishMomentum => "bullish_momentum",
    BearishMomentum => "bearish_momentum",
    Bullish => "bullish",
    Bearish => "bearish",
    Neutral => "neutral",
});

signal_label!(RsiSignal {
    Overbought => "overbought",
    Oversold => "oversold",
    Neutral => "neutral",
});

signal_label!(
    /// ADX strength bucket
    TrendStrength {
        NoTrend => "no_trend",
        WeakTrend => "weak_trend",
        StrongTrend => "strong_trend",
        VeryStrongTrend => "very_strong_trend",
        ExtremelyStrongTrend => "extremely_strong_trend",
    }
);

signal_label!(TrendDirection {
    Bullish => "bullish",
    Bearish => "bearish",
    Neutral => "neutral",
});

signal_label!(
    /// DI crossover, trend momentum, or the strength bucket as a fallback
    AdxSignal {
        BullishCrossover => "bullish_crossover",
        BearishCrossover => "bearish_crossover",
        TrendStrengthening => "trend_strengthening",
        TrendWeakening => "trend_weakening",
        NoTrend => "no_trend",
        WeakTrend => "weak_trend",
        StrongTrend => "strong_trend",
        VeryStrongTrend => "very_strong_trend",
        ExtremelyStrongTrend => "extremely_strong_trend",
    }
);

impl From<TrendStrength> for AdxSignal {
    fn from(strength: TrendStrength) -> Self {
        match strength {
            TrendStrength::NoTrend => AdxSignal::NoTrend,
            TrendStrength::WeakTrend => AdxSignal::WeakTrend,
            TrendStrength::StrongTrend => AdxSignal::StrongTrend,
            TrendStrength::VeryStrongTrend => AdxSignal::VeryStrongTrend,
            TrendStrength::ExtremelyStrongTrend => AdxSignal::ExtremelyStrongTrend,
        }
    }
}

signal_label!(BollingerSignal {
    Overbought => "overbought",
    Oversold => "oversold",
    NearUpper => "near_upper",
    NearLower => "near_lower",
    Neutral => "neutral",
});

signal_label!(StochasticSignal {
    BullishCrossoverOversold => "bullish_crossover_oversold",
    BullishCrossover => "bullish_crossover",
    BearishCrossoverOverbought => "bearish_crossover_overbought",
    BearishCrossover => "bearish_crossover",
    Overbought => "overbought",
    Oversold => "oversold",
    NearOverbought => "near_overbought",
    NearOversold => "near_oversold",
    Neutral => "neutral",
});

signal_label!(VwapSignal {
    SignificantlyAbove => "significantly_above",
    Above => "above",
    SignificantlyBelow => "significantly_below",
    Below => "below",
    NearVwap => "near_vwap",
});

signal_label!(
    /// Annualised volatility bucket
    VolatilityRegime {
        VeryLow => "very_low",
        Low => "low",
        Normal => "normal",
        Elevated => "elevated",
        High => "high",
        Extreme => "extreme",
    }
);

signal_label!(PivotPosition {
    AbovePivot => "above_pivot",
    BelowPivot => "below_pivot",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmaIndicator {
    pub sma: f64,
    pub period: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmaIndicator {
    pub ema: f64,
    pub period: usize,
    pub current_price: f64,
    pub price_trend: PriceTrend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
    pub crossover_signal: MacdSignal,
    pub fast_period: usize,
    pub slow_period: usize,
    pub signal_period: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RsiIndicator {
    /// NaN (serialized as `null`) when the window has neither gains nor losses
    pub rsi: f64,
    pub period: usize,
    pub signal: RsiSignal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtrIndicator {
    pub atr: f64,
    pub half_atr: f64,
    pub double_atr: f64,
    pub period: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdxIndicator {
    pub adx: f64,
    pub plus_di: f64,
    pub minus_di: f64,
    pub trend_strength: TrendStrength,
    pub trend_direction: TrendDirection,
    pub signal: AdxSignal,
    pub period: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BollingerBandsIndicator {
    pub upper_band: f64,
    pub middle_band: f64,
    pub lower_band: f64,
    pub bandwidth: f64,
    pub percent_b: f64,
    pub current_price: f64,
    pub signal: BollingerSignal,
    pub period: usize,
    pub std_dev: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StochasticIndicator {
    pub k_percent: f64,
    pub d_percent: f64,
    pub signal: StochasticSignal,
    pub k_period: usize,
    pub d_period: usize,
    pub overbought: u32,
    pub oversold: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VwapIndicator {
    pub vwap: f64,
    pub current_price: f64,
    pub deviation_pct: f64,
    pub upper_band: f64,
    pub lower_band: f64,
    pub signal: VwapSignal,
    pub total_volume: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalVolatilityIndicator {
    pub daily_vol: f64,
    pub weekly_vol: f64,
    pub monthly_vol: f64,
    pub annualized_vol: f64,
    pub percentile_rank: f64,
    pub regime: VolatilityRegime,
    pub min_vol: f64,
    pub max_vol: f64,
    pub mean_vol: f64,
    pub period: usize,
    pub annualize_factor: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkinsonVolatilityIndicator {
    pub parkinson_daily: f64,
    pub parkinson_annualized: f64,
    pub period: usize,
}

/// Either flavour of volatility result, for callers that pick the method
/// at runtime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VolatilityIndicator {
    Historical(HistoricalVolatilityIndicator),
    Parkinson(ParkinsonVolatilityIndicator),
}

/// Pivot levels, highest first. `r4`/`s4` only exist for Camarilla.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotLevels {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r4: Option<f64>,
    pub r3: f64,
    pub r2: f64,
    pub r1: f64,
    pub pivot: f64,
    pub s1: f64,
    pub s2: f64,
    pub s3: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s4: Option<f64>,
}

impl PivotLevels {
    /// `(name, price)` pairs from the highest resistance down to the lowest
    /// support
    pub fn named(&self) -> Vec<(&'static str, f64)> {
        let mut levels = Vec::with_capacity(9);
        if let Some(r4) = self.r4 {
            levels.push(("r4", r4));
        }
        levels.extend([
            ("r3", self.r3),
            ("r2", self.r2),
            ("r1", self.r1),
            ("pivot", self.pivot),
            ("s1", self.s1),
            ("s2", self.s2),
            ("s3", self.s3),
        ]);
        if let Some(s4) = self.s4 {
            levels.push(("s4", s4));
        }
        levels
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearestLevel {
    pub level: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotPointsIndicator {
    #[serde(rename = "type")]
    pub pivot_type: PivotType,
    pub levels: PivotLevels,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nearest_resistance: Option<NearestLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nearest_support: Option<NearestLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<PivotPosition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectedMove {
    pub raw: f64,
    pub adjusted: f64,
    pub percentage: f64,
    pub raw_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveBoundaries {
    pub upper_1x: f64,
    pub lower_1x: f64,
    pub upper_2x: f64,
    pub lower_2x: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IronCondorStrikes {
    pub short_call: f64,
    pub short_put: f64,
    pub long_call: f64,
    pub long_put: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IronCondorSuggestions {
    pub conservative: IronCondorStrikes,
    pub aggressive: IronCondorStrikes,
}

/// Fixed normal-distribution approximations, in percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveProbabilities {
    pub stay_within_1x: u32,
    pub stay_within_2x: u32,
    pub touch_1x_boundary: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectedMoveIndicator {
    pub spot_price: f64,
    pub straddle_price: f64,
    pub expected_move: ExpectedMove,
    pub move_boundaries: MoveBoundaries,
    pub iron_condor_strikes: IronCondorSuggestions,
    pub probability_estimates: MoveProbabilities,
    pub multiplier_used: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpliedMove {
    pub one_std: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StdDevBoundaries {
    pub upper_1std: f64,
    pub lower_1std: f64,
    pub upper_2std: f64,
    pub lower_2std: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StdDevProbabilities {
    pub stay_within_1std: u32,
    pub stay_within_2std: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpliedMoveIndicator {
    pub spot_price: f64,
    pub implied_volatility: f64,
    pub days_to_expiry: f64,
    pub expected_move: ImpliedMove,
    pub move_boundaries: StdDevBoundaries,
    pub probability_estimates: StdDevProbabilities,
}
