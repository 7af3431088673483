//! Shared numeric primitives used by every indicator

pub mod math;
pub mod series;

pub use math::*;
pub use series::*;
