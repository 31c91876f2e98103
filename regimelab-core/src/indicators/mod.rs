//! Indicator engine — pure functions of the bar series.
//!
//! Every derived value is `Option<f64>`: `Some` once the rolling window
//! is filled with defined inputs, `None` during warmup or when the
//! arithmetic degenerates (zero-range window, zero DI sum). `None` is
//! propagated through every downstream step, never coerced to zero.

pub mod adx;
pub mod bollinger;
pub mod sma;

pub use adx::{compute_adx, AdxSeries};
pub use bollinger::{compute_bollinger, BollingerSeries};
pub use sma::sma;

/// Trailing sum over the last `window` values.
///
/// Defined only where the full window is defined; any `None` in the
/// window makes the output `None`.
pub(crate) fn rolling_sum(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    rolling(values, window, |w| w.iter().sum())
}

/// Trailing simple mean over the last `window` values.
pub(crate) fn rolling_mean(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    rolling(values, window, |w| {
        w.iter().sum::<f64>() / w.len() as f64
    })
}

/// Trailing sample standard deviation (divide by N-1) over the last
/// `window` values. A window of 1 has no deviation and yields `None`.
pub(crate) fn rolling_sample_std(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    if window < 2 {
        return vec![None; values.len()];
    }
    rolling(values, window, |w| {
        let mean = w.iter().sum::<f64>() / w.len() as f64;
        let sum_sq: f64 = w.iter().map(|v| (v - mean) * (v - mean)).sum();
        (sum_sq / (w.len() - 1) as f64).sqrt()
    })
}

/// Shared rolling-window scaffold: collect the window into a scratch
/// buffer, bail to `None` on any undefined input, apply `f` otherwise.
///
/// Windows are recomputed from scratch rather than rolled incrementally
/// so the summation order is fixed and the output is bit-reproducible.
fn rolling<F>(values: &[Option<f64>], window: usize, f: F) -> Vec<Option<f64>>
where
    F: Fn(&[f64]) -> f64,
{
    let n = values.len();
    let mut result = vec![None; n];
    if window == 0 || n < window {
        return result;
    }

    let mut scratch = Vec::with_capacity(window);
    for i in (window - 1)..n {
        scratch.clear();
        let mut all_defined = true;
        for v in &values[(i + 1 - window)..=i] {
            match v {
                Some(x) => scratch.push(*x),
                None => {
                    all_defined = false;
                    break;
                }
            }
        }
        if all_defined {
            result[i] = Some(f(&scratch));
        }
    }

    result
}

/// Create synthetic bars from close prices for testing.
///
/// Generates plausible OHLV: open = prev_close (or close for first bar),
/// high = max(open,close) + 1.0, low = min(open,close) - 1.0, volume = 1000.
#[cfg(test)]
pub fn make_bars(closes: &[f64]) -> Vec<crate::domain::Bar> {
    use crate::domain::Bar;
    let base_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            let high = open.max(close) + 1.0;
            let low = open.min(close) - 1.0;
            Bar {
                date: base_date + chrono::Duration::days(i as i64),
                open,
                high,
                low,
                close,
                volume: 1000,
            }
        })
        .collect()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Assert an optional value is defined and approximately equal.
#[cfg(test)]
pub fn assert_approx_opt(actual: Option<f64>, expected: f64, epsilon: f64) {
    match actual {
        Some(v) => assert_approx(v, expected, epsilon),
        None => panic!("assert_approx_opt failed: expected {expected}, got None"),
    }
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
