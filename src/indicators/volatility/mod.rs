//! Volatility indicators: ATR, Bollinger Bands, historical and Parkinson volatility

pub mod atr;
pub mod bollinger;
pub mod historical;

pub use atr::*;
pub use bollinger::*;
pub use historical::*;
