//! Backtest simulator — lag-correct return accumulation.
//!
//! The position earned on day t is the one decided on day t-1: today's
//! close-to-close return is multiplied by yesterday's position. The
//! cumulative track is a running product carried left-to-right, never
//! re-derived from scratch.

use crate::domain::{Bar, Signal};

/// Per-bar realized performance of the position track.
#[derive(Debug, Clone)]
pub struct BacktestResult {
    /// Close-to-close return; undefined at t=0.
    pub daily_return: Vec<Option<f64>>,
    /// Lagged position times daily return. Zero-filled at t=0 and
    /// wherever the daily return is undefined — an explicit business
    /// rule, not propagation of the undefined marker.
    pub strategy_return: Vec<f64>,
    /// Compounded strategy return, running product of (1 + r) - 1.
    pub cumulative_return: Vec<f64>,
}

/// Simulate the lagged strategy over the bar series.
///
/// `positions` must be aligned to `bars` (one final position per bar).
pub fn simulate(bars: &[Bar], positions: &[Signal]) -> BacktestResult {
    debug_assert_eq!(bars.len(), positions.len());
    let n = bars.len();

    let mut daily_return = vec![None; n];
    for i in 1..n {
        daily_return[i] = Some(bars[i].close / bars[i - 1].close - 1.0);
    }

    let mut strategy_return = vec![0.0; n];
    for i in 1..n {
        if let Some(r) = daily_return[i] {
            strategy_return[i] = positions[i - 1].value() * r;
        }
    }

    let mut cumulative_return = vec![0.0; n];
    let mut growth = 1.0;
    for i in 0..n {
        growth *= 1.0 + strategy_return[i];
        cumulative_return[i] = growth - 1.0;
    }

    BacktestResult {
        daily_return,
        strategy_return,
        cumulative_return,
    }
}
