//! Indicator registry: names, categories and input requirements

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::candle::CandleField;

/// Indicator category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorCategory {
    Trend,
    Momentum,
    Volatility,
    Volume,
    Structure,
    Options,
}

/// Shape of the data an indicator consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputShape {
    /// Array of closing prices
    Prices,
    /// Array of OHLC(V) records
    Candles,
    /// Single prior-period high/low/close record
    Snapshot,
    /// Option premiums or implied volatility, no series
    OptionQuote,
}

/// Every computation the engine exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    Sma,
    Ema,
    Macd,
    Rsi,
    Atr,
    Adx,
    BollingerBands,
    Stochastic,
    Vwap,
    HistoricalVolatility,
    ParkinsonVolatility,
    PivotPoints,
    ExpectedMove,
}

const HLC: &[CandleField] = &[CandleField::High, CandleField::Low, CandleField::Close];

impl IndicatorKind {
    pub const ALL: [IndicatorKind; 13] = [
        IndicatorKind::Sma,
        IndicatorKind::Ema,
        IndicatorKind::Macd,
        IndicatorKind::Rsi,
        IndicatorKind::Atr,
        IndicatorKind::Adx,
        IndicatorKind::BollingerBands,
        IndicatorKind::Stochastic,
        IndicatorKind::Vwap,
        IndicatorKind::HistoricalVolatility,
        IndicatorKind::ParkinsonVolatility,
        IndicatorKind::PivotPoints,
        IndicatorKind::ExpectedMove,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            IndicatorKind::Sma => "SMA",
            IndicatorKind::Ema => "EMA",
            IndicatorKind::Macd => "MACD",
            IndicatorKind::Rsi => "RSI",
            IndicatorKind::Atr => "ATR",
            IndicatorKind::Adx => "ADX",
            IndicatorKind::BollingerBands => "Bollinger Bands",
            IndicatorKind::Stochastic => "Stochastic Oscillator",
            IndicatorKind::Vwap => "VWAP",
            IndicatorKind::HistoricalVolatility => "Historical Volatility",
            IndicatorKind::ParkinsonVolatility => "Parkinson Volatility",
            IndicatorKind::PivotPoints => "Pivot Points",
            IndicatorKind::ExpectedMove => "Expected Move",
        }
    }

    pub fn category(&self) -> IndicatorCategory {
        match self {
            IndicatorKind::Sma | IndicatorKind::Ema | IndicatorKind::Adx => {
                IndicatorCategory::Trend
            }
            IndicatorKind::Macd | IndicatorKind::Rsi | IndicatorKind::Stochastic => {
                IndicatorCategory::Momentum
            }
            IndicatorKind::Atr
            | IndicatorKind::BollingerBands
            | IndicatorKind::HistoricalVolatility
            | IndicatorKind::ParkinsonVolatility => IndicatorCategory::Volatility,
            IndicatorKind::Vwap => IndicatorCategory::Volume,
            IndicatorKind::PivotPoints => IndicatorCategory::Structure,
            IndicatorKind::ExpectedMove => IndicatorCategory::Options,
        }
    }

    pub fn input_shape(&self) -> InputShape {
        match self {
            IndicatorKind::Sma
            | IndicatorKind::Ema
            | IndicatorKind::Macd
            | IndicatorKind::Rsi
            | IndicatorKind::BollingerBands
            | IndicatorKind::HistoricalVolatility => InputShape::Prices,
            IndicatorKind::Atr
            | IndicatorKind::Adx
            | IndicatorKind::Stochastic
            | IndicatorKind::Vwap
            | IndicatorKind::ParkinsonVolatility => InputShape::Candles,
            IndicatorKind::PivotPoints => InputShape::Snapshot,
            IndicatorKind::ExpectedMove => InputShape::OptionQuote,
        }
    }

    /// Fields every input record must carry; empty for non-record inputs
    pub fn required_fields(&self) -> &'static [CandleField] {
        match self {
            IndicatorKind::Atr => &[
                CandleField::Open,
                CandleField::High,
                CandleField::Low,
                CandleField::Close,
            ],
            IndicatorKind::Vwap => &[
                CandleField::High,
                CandleField::Low,
                CandleField::Close,
                CandleField::Volume,
            ],
            IndicatorKind::ParkinsonVolatility => &[CandleField::High, CandleField::Low],
            IndicatorKind::Adx | IndicatorKind::Stochastic | IndicatorKind::PivotPoints => HLC,
            _ => &[],
        }
    }
}

/// Indicator registry for organizing indicators by category
pub struct IndicatorRegistry;

impl IndicatorRegistry {
    /// Indicators belonging to `category`, in declaration order
    pub fn by_category(category: IndicatorCategory) -> Vec<IndicatorKind> {
        IndicatorKind::ALL
            .into_iter()
            .filter(|kind| kind.category() == category)
            .collect()
    }

    /// Every indicator grouped by category
    pub fn catalog() -> BTreeMap<IndicatorCategory, Vec<IndicatorKind>> {
        let mut catalog: BTreeMap<IndicatorCategory, Vec<IndicatorKind>> = BTreeMap::new();
        for kind in IndicatorKind::ALL {
            catalog.entry(kind.category()).or_default().push(kind);
        }
        catalog
    }
}
