//! Mean-reversion signal — band-touch entries with band-middle exits.
//!
//! The one stage that cannot be computed per bar in isolation: the
//! position carried out of each bar feeds the next bar's transition.
//! Implemented as an explicit left-to-right scan over the series.
//!
//! Transition rules, given the prior position and today's band touch:
//! - Flat: enter on any touch (lower → Long, upper → Short).
//! - Long: exit Flat when close recovers to the middle band or above;
//!   otherwise an upper-band touch flips directly to Short.
//! - Short: mirror image (close at or below middle exits; lower-band
//!   touch flips to Long).
//!
//! While the bands are still undefined no comparison fires, so the
//! state simply persists.

use crate::domain::{Bar, Signal};
use crate::indicators::BollingerSeries;

/// Raw band touch for one bar: Long at or below the lower band, Short at
/// or above the upper band, Flat in between or while bands are undefined.
///
/// The lower band is checked first. With a positive band width the two
/// touches are mutually exclusive; at zero width (constant price window)
/// the lower touch wins by evaluation order.
pub fn raw_band_touch(close: f64, upper: Option<f64>, lower: Option<f64>) -> Signal {
    if let Some(l) = lower {
        if close <= l {
            return Signal::Long;
        }
    }
    if let Some(u) = upper {
        if close >= u {
            return Signal::Short;
        }
    }
    Signal::Flat
}

/// The sequential position state of the mean-reversion rule.
///
/// Starts Flat. `step` consumes one bar (close plus that bar's bands)
/// and returns the position carried out of the bar.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanReversionState {
    position: Signal,
}

impl MeanReversionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Signal {
        self.position
    }

    /// Advance the state machine by one bar.
    pub fn step(
        &mut self,
        close: f64,
        upper: Option<f64>,
        middle: Option<f64>,
        lower: Option<f64>,
    ) -> Signal {
        let raw = raw_band_touch(close, upper, lower);

        self.position = match self.position {
            Signal::Flat => raw,
            Signal::Long => {
                if matches!(middle, Some(m) if close >= m) {
                    Signal::Flat
                } else if raw == Signal::Short {
                    // Direct flip without passing through Flat.
                    Signal::Short
                } else {
                    Signal::Long
                }
            }
            Signal::Short => {
                if matches!(middle, Some(m) if close <= m) {
                    Signal::Flat
                } else if raw == Signal::Long {
                    Signal::Long
                } else {
                    Signal::Short
                }
            }
        };

        self.position
    }
}

/// Run the scan over the whole series, one position per bar.
pub fn mean_reversion_positions(bars: &[Bar], bands: &BollingerSeries) -> Vec<Signal> {
    let mut state = MeanReversionState::new();
    bars.iter()
        .enumerate()
        .map(|(i, bar)| state.step(bar.close, bands.upper[i], bands.middle[i], bands.lower[i]))
        .collect()
}
