//! Signal classification helpers shared across indicators.

pub mod crossover;

pub use crossover::*;
