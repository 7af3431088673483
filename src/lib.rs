//! Chartwise: technical-indicator calculations with signal classification
//!
//! Every indicator is a pure function over a price or candle series that
//! returns the latest reading, rounded for display, together with a
//! categorical label.

pub mod common;
pub mod config;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod signals;

pub use indicators::error::{ErrorKind, IndicatorError};
pub use models::candle::{Candle, CandleField};
