//! Shared test helpers

use chartwise::models::Candle;

/// Assert two floats agree within a tolerance (default 1e-9)
macro_rules! assert_approx {
    ($left:expr, $right:expr) => {
        assert_approx!($left, $right, 1e-9)
    };
    ($left:expr, $right:expr, $tolerance:expr) => {{
        let (left, right, tolerance): (f64, f64, f64) = ($left, $right, $tolerance);
        assert!(
            (left - right).abs() <= tolerance,
            "assertion failed: `{left} ≈ {right}` (tolerance {tolerance})"
        );
    }};
}

/// Steady uptrend: close rises 0.5 per candle with a fixed 2.0 range
#[allow(dead_code)]
pub fn rising_candles(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let close = 100.0 + i as f64 * 0.5;
            Candle::new(close + 1.0, close - 1.0, close)
        })
        .collect()
}

/// Mirror of [`rising_candles`]
#[allow(dead_code)]
pub fn falling_candles(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let close = 100.0 - i as f64 * 0.5;
            Candle::new(close + 1.0, close - 1.0, close)
        })
        .collect()
}
