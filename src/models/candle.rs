//! OHLC(V) candle record

use serde::{Deserialize, Serialize};

/// One sampled period of a price series, oldest first in any slice.
///
/// `open` is only demanded by ATR and `volume` only by VWAP, so both are
/// optional. `high >= low` is assumed and never checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

impl Candle {
    pub fn new(high: f64, low: f64, close: f64) -> Self {
        Self {
            high,
            low,
            close,
            open: None,
            volume: None,
        }
    }

    /// Full OHLCV candle
    pub fn ohlcv(open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self::new(high, low, close).with_open(open).with_volume(volume)
    }

    pub fn with_open(mut self, open: f64) -> Self {
        self.open = Some(open);
        self
    }

    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }

    /// `(high + low + close) / 3`
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }

    /// `max(high - low, |high - prev_close|, |low - prev_close|)`
    pub fn true_range(&self, prev_close: f64) -> f64 {
        let hl = self.high - self.low;
        let hc = (self.high - prev_close).abs();
        let lc = (self.low - prev_close).abs();
        hl.max(hc).max(lc)
    }
}

/// Named candle field, used when checking which fields a record carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandleField {
    Open,
    High,
    Low,
    Close,
    Volume,
}

impl CandleField {
    pub fn as_str(&self) -> &'static str {
        match self {
            CandleField::Open => "open",
            CandleField::High => "high",
            CandleField::Low => "low",
            CandleField::Close => "close",
            CandleField::Volume => "volume",
        }
    }
}
