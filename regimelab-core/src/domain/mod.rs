//! Domain types for RegimeLab.

pub mod bar;
pub mod series;
pub mod signal;

pub use bar::Bar;
pub use series::{BarSeries, InputError};
pub use signal::Signal;
