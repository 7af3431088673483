//! Option-derived measures: expected move

pub mod expected_move;

pub use expected_move::*;
