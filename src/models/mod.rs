//! Shared data models spanning the engine layers.

pub mod candle;
pub mod indicators;
pub mod params;

pub use candle::{Candle, CandleField};
pub use indicators::*;
pub use params::*;
