//! Signal rules and the regime-gated combiner.

pub mod combiner;
pub mod mean_reversion;
pub mod trend;

pub use combiner::combine;
pub use mean_reversion::{mean_reversion_positions, raw_band_touch, MeanReversionState};
pub use trend::{trend_signal, trend_signals};
