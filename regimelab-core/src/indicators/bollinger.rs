//! Bollinger Bands — moving average +/- standard deviation multiplier.
//!
//! - Middle: trailing mean of close over `period`
//! - Upper: middle + multiplier * stddev(close, period)
//! - Lower: middle - multiplier * stddev(close, period)
//!
//! Uses sample stddev (divide by N-1). Undefined until the window fills.

use crate::domain::Bar;
use crate::indicators::{rolling_mean, rolling_sample_std};

/// All four Bollinger tracks, aligned to the bar sequence.
#[derive(Debug, Clone)]
pub struct BollingerSeries {
    pub middle: Vec<Option<f64>>,
    pub std_dev: Vec<Option<f64>>,
    pub upper: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
}

/// Compute the Bollinger envelope over the close series.
pub fn compute_bollinger(bars: &[Bar], period: usize, multiplier: f64) -> BollingerSeries {
    let closes: Vec<Option<f64>> = bars.iter().map(|b| Some(b.close)).collect();

    let middle = rolling_mean(&closes, period);
    let std_dev = rolling_sample_std(&closes, period);

    let upper: Vec<Option<f64>> = middle
        .iter()
        .zip(&std_dev)
        .map(|(m, s)| match (m, s) {
            (Some(m), Some(s)) => Some(m + multiplier * s),
            _ => None,
        })
        .collect();
    let lower: Vec<Option<f64>> = middle
        .iter()
        .zip(&std_dev)
        .map(|(m, s)| match (m, s) {
            (Some(m), Some(s)) => Some(m - multiplier * s),
            _ => None,
        })
        .collect();

    BollingerSeries {
        middle,
        std_dev,
        upper,
        lower,
    }
}
