//! Signal — the three-valued position signal shared by every stage.
//!
//! The trend rule, the mean-reversion state machine, and the combined
//! position track all speak the same alphabet: short, flat, long.

use serde::{Deserialize, Serialize};

/// Position signal: -1 short, 0 flat, +1 long.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    Short,
    #[default]
    Flat,
    Long,
}

impl Signal {
    /// Numeric value used by the return simulation.
    pub fn value(self) -> f64 {
        match self {
            Signal::Short => -1.0,
            Signal::Flat => 0.0,
            Signal::Long => 1.0,
        }
    }

    /// Integer encoding for reports.
    pub fn as_int(self) -> i8 {
        match self {
            Signal::Short => -1,
            Signal::Flat => 0,
            Signal::Long => 1,
        }
    }

    /// The opposite direction. Flat is its own opposite.
    pub fn opposite(self) -> Signal {
        match self {
            Signal::Short => Signal::Long,
            Signal::Flat => Signal::Flat,
            Signal::Long => Signal::Short,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_values() {
        assert_eq!(Signal::Short.value(), -1.0);
        assert_eq!(Signal::Flat.value(), 0.0);
        assert_eq!(Signal::Long.value(), 1.0);
    }

    #[test]
    fn signal_ints() {
        assert_eq!(Signal::Short.as_int(), -1);
        assert_eq!(Signal::Flat.as_int(), 0);
        assert_eq!(Signal::Long.as_int(), 1);
    }

    #[test]
    fn signal_opposite() {
        assert_eq!(Signal::Long.opposite(), Signal::Short);
        assert_eq!(Signal::Short.opposite(), Signal::Long);
        assert_eq!(Signal::Flat.opposite(), Signal::Flat);
    }

    #[test]
    fn signal_default_is_flat() {
        assert_eq!(Signal::default(), Signal::Flat);
    }
}
