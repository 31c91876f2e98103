//! Trend-following signal — sign comparison of two moving averages.

use crate::domain::Signal;

/// Long when the short MA is strictly above the long MA, Short otherwise.
///
/// "Otherwise" deliberately includes the equal case and bars where
/// either MA is still undefined: both collapse to Short. This tie-break
/// is a known quirk of the strategy and is preserved exactly; the
/// combiner only consults this signal in a Trending regime, which bounds
/// the exposure of the warmup case.
pub fn trend_signal(ma_short: Option<f64>, ma_long: Option<f64>) -> Signal {
    match (ma_short, ma_long) {
        (Some(short), Some(long)) if short > long => Signal::Long,
        _ => Signal::Short,
    }
}

/// Map the two MA tracks to a trend signal track.
pub fn trend_signals(ma_short: &[Option<f64>], ma_long: &[Option<f64>]) -> Vec<Signal> {
    ma_short
        .iter()
        .zip(ma_long)
        .map(|(s, l)| trend_signal(*s, *l))
        .collect()
}
