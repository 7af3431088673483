//! Rolling aggregation and recursive smoothing over numeric sequences.
//!
//! Every function returns a fresh vector the same length as its input.
//! Positions that cannot be computed yet hold `f64::NAN`, and a NaN inside
//! a rolling window makes that window's result NaN.

/// Statistic reduced over each rolling window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregate {
    Mean,
    /// Sample standard deviation (N-1 denominator)
    StdDev,
    Min,
    Max,
    Sum,
}

impl Aggregate {
    fn reduce(self, window: &[f64]) -> f64 {
        if window.iter().any(|v| v.is_nan()) {
            return f64::NAN;
        }

        match self {
            Aggregate::Sum => window.iter().sum(),
            Aggregate::Mean => mean(window),
            Aggregate::StdDev => sample_std_dev(window),
            Aggregate::Min => window.iter().copied().fold(f64::INFINITY, f64::min),
            Aggregate::Max => window.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    }
}

/// Apply `aggregate` over every trailing window of length `window`.
///
/// Position `i` holds the statistic of `values[i + 1 - window..=i]` once
/// `i >= window - 1`; earlier positions are NaN. A zero window yields an
/// all-NaN vector.
pub fn rolling(values: &[f64], window: usize, aggregate: Aggregate) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if window == 0 || values.len() < window {
        return out;
    }

    for end in (window - 1)..values.len() {
        out[end] = aggregate.reduce(&values[end + 1 - window..=end]);
    }

    out
}

pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    rolling(values, window, Aggregate::Mean)
}

pub fn rolling_std(values: &[f64], window: usize) -> Vec<f64> {
    rolling(values, window, Aggregate::StdDev)
}

pub fn rolling_min(values: &[f64], window: usize) -> Vec<f64> {
    rolling(values, window, Aggregate::Min)
}

pub fn rolling_max(values: &[f64], window: usize) -> Vec<f64> {
    rolling(values, window, Aggregate::Max)
}

pub fn rolling_sum(values: &[f64], window: usize) -> Vec<f64> {
    rolling(values, window, Aggregate::Sum)
}

/// Arithmetic mean; NaN for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation; NaN with fewer than two values
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }

    let avg = mean(values);
    let squares: f64 = values.iter().map(|v| (v - avg).powi(2)).sum();
    (squares / (values.len() - 1) as f64).sqrt()
}

/// Exponential moving average without bias adjustment.
///
/// The first output equals the first input; afterwards
/// `ema_t = alpha * x_t + (1 - alpha) * ema_{t-1}` with
/// `alpha = 2 / (span + 1)`.
pub fn ema(values: &[f64], span: usize) -> Vec<f64> {
    let alpha = 2.0 / (span as f64 + 1.0);
    let decay = 1.0 - alpha;

    let mut out = Vec::with_capacity(values.len());
    let mut previous: Option<f64> = None;

    for &value in values {
        let next = match previous {
            None => value,
            // Dividing by the weight sum keeps float rounding in step with
            // the usual `adjust=false` recurrence.
            Some(prev) if prev != value => (decay * prev + alpha * value) / (decay + alpha),
            Some(prev) => prev,
        };
        out.push(next);
        previous = Some(next);
    }

    out
}

/// Wilder's smoothing.
///
/// Positions before `period - 1` are NaN. Index `period - 1` is seeded with
/// the simple mean of the first `period` values; every later index is
/// `(prev * (period - 1) + x_t) / period`.
pub fn wilder(values: &[f64], period: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if period == 0 || values.len() < period {
        return out;
    }

    let p = period as f64;
    out[period - 1] = mean(&values[..period]);

    for i in period..values.len() {
        out[i] = (out[i - 1] * (p - 1.0) + values[i]) / p;
    }

    out
}

/// Latest and previous entries of a series as `(previous, latest)`.
///
/// Missing entries come back as NaN so comparisons against them are false.
pub fn tail_pair(values: &[f64]) -> (f64, f64) {
    match values {
        [] => (f64::NAN, f64::NAN),
        [only] => (f64::NAN, *only),
        [.., previous, latest] => (*previous, *latest),
    }
}

/// Round to `decimals` places using correctly rounded decimal conversion,
/// so `0.35` rounds to `0.3` exactly as its binary value dictates.
pub fn round_to_decimals(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.decimals$}").parse().unwrap_or(value)
}
