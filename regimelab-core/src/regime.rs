//! Regime classification — maps trend strength to a market regime.
//!
//! Pure per-bar function of ADX: strong trend hands control to the
//! trend-following rule, weak trend to mean reversion, and the band in
//! between carries the prior position forward (hysteresis lives in the
//! combiner, not here).

use serde::{Deserialize, Serialize};

/// Market regime for a single bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Regime {
    /// ADX above the trending threshold: the trend rule governs.
    Trending,
    /// ADX below the choppy threshold: the mean-reversion rule governs.
    Choppy,
    /// ADX between the thresholds (inclusive): carry the prior position.
    Transitional,
    /// ADX has no value yet (warmup or degenerate market).
    Undefined,
}

/// ADX thresholds separating the regimes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegimeThresholds {
    /// ADX strictly below this is Choppy.
    pub choppy_below: f64,
    /// ADX strictly above this is Trending.
    pub trending_above: f64,
}

impl Default for RegimeThresholds {
    fn default() -> Self {
        Self {
            choppy_below: 20.0,
            trending_above: 25.0,
        }
    }
}

/// Classify one bar's ADX value. No history dependence.
pub fn classify(adx: Option<f64>, thresholds: &RegimeThresholds) -> Regime {
    match adx {
        None => Regime::Undefined,
        Some(v) if v > thresholds.trending_above => Regime::Trending,
        Some(v) if v < thresholds.choppy_below => Regime::Choppy,
        Some(_) => Regime::Transitional,
    }
}

/// Classify the whole ADX track.
pub fn classify_series(adx: &[Option<f64>], thresholds: &RegimeThresholds) -> Vec<Regime> {
    adx.iter().map(|v| classify(*v, thresholds)).collect()
}
