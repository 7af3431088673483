//! Market structure: pivot point support/resistance levels

pub mod pivot_points;

pub use pivot_points::*;
