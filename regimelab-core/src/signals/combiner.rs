//! Signal combiner — regime-gated selection with forward-fill.
//!
//! Per bar: a Trending regime takes the trend signal, a Choppy regime
//! takes the mean-reversion position, and a Transitional or Undefined
//! regime repeats the last emitted value. Before any value has been
//! emitted the track defaults to Flat.

use crate::domain::Signal;
use crate::regime::Regime;

/// Merge the two signal tracks into the final position track.
///
/// All three inputs must be aligned to the same bar sequence. The
/// "last known value" cell is explicit: only Trending and Choppy bars
/// refresh it, so a Transitional run is constant by construction.
pub fn combine(regimes: &[Regime], trend: &[Signal], mean_reversion: &[Signal]) -> Vec<Signal> {
    debug_assert_eq!(regimes.len(), trend.len());
    debug_assert_eq!(regimes.len(), mean_reversion.len());

    let mut last: Option<Signal> = None;
    regimes
        .iter()
        .enumerate()
        .map(|(i, regime)| match regime {
            Regime::Trending => {
                let sig = trend[i];
                last = Some(sig);
                sig
            }
            Regime::Choppy => {
                let sig = mean_reversion[i];
                last = Some(sig);
                sig
            }
            Regime::Transitional | Regime::Undefined => last.unwrap_or(Signal::Flat),
        })
        .collect()
}
