//! Simple Moving Average (SMA).
//!
//! Trailing mean of close prices; undefined until the window fills.

use crate::domain::Bar;
use crate::indicators::rolling_mean;

/// Trailing simple mean of close over `period` bars.
pub fn sma(bars: &[Bar], period: usize) -> Vec<Option<f64>> {
    let closes: Vec<Option<f64>> = bars.iter().map(|b| Some(b.close)).collect();
    rolling_mean(&closes, period)
}
