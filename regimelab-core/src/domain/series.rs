//! BarSeries — validated, ordered bar history.
//!
//! The boundary between the data-loading collaborator and the pipeline.
//! Construction enforces the input contract once; everything downstream
//! can assume ordered, finite, sane bars and never re-validates.

use chrono::NaiveDate;

use super::Bar;

/// Errors rejected at the input boundary. Fatal to the run: a series that
/// fails validation produces no partial computation.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("bar series is empty")]
    Empty,

    #[error("duplicate date {date} at bar {index}")]
    DuplicateDate { index: usize, date: NaiveDate },

    #[error("non-monotonic date {date} at bar {index} (previous {previous})")]
    NonMonotonicDate {
        index: usize,
        date: NaiveDate,
        previous: NaiveDate,
    },

    #[error("non-finite price field at bar {index} ({date})")]
    NonFinitePrice { index: usize, date: NaiveDate },

    #[error("non-positive close {close} at bar {index} ({date})")]
    NonPositiveClose {
        index: usize,
        date: NaiveDate,
        close: f64,
    },

    #[error("inconsistent OHLC at bar {index} ({date}): high/low bracket violated")]
    InconsistentOhlc { index: usize, date: NaiveDate },
}

/// An ordered daily bar history with strictly increasing, unique dates.
#[derive(Debug, Clone)]
pub struct BarSeries {
    bars: Vec<Bar>,
}

impl BarSeries {
    /// Validate and wrap a bar vector.
    ///
    /// Checks, per bar: finite prices, positive close, high/low bracket;
    /// per consecutive pair: strictly increasing dates.
    pub fn new(bars: Vec<Bar>) -> Result<Self, InputError> {
        if bars.is_empty() {
            return Err(InputError::Empty);
        }

        for (index, bar) in bars.iter().enumerate() {
            if bar.has_non_finite() {
                return Err(InputError::NonFinitePrice {
                    index,
                    date: bar.date,
                });
            }
            if bar.close <= 0.0 {
                return Err(InputError::NonPositiveClose {
                    index,
                    date: bar.date,
                    close: bar.close,
                });
            }
            if !bar.is_sane() {
                return Err(InputError::InconsistentOhlc {
                    index,
                    date: bar.date,
                });
            }
        }

        for index in 1..bars.len() {
            let prev = bars[index - 1].date;
            let cur = bars[index].date;
            if cur == prev {
                return Err(InputError::DuplicateDate { index, date: cur });
            }
            if cur < prev {
                return Err(InputError::NonMonotonicDate {
                    index,
                    date: cur,
                    previous: prev,
                });
            }
        }

        Ok(Self { bars })
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn first_date(&self) -> NaiveDate {
        self.bars[0].date
    }

    pub fn last_date(&self) -> NaiveDate {
        self.bars[self.bars.len() - 1].date
    }
}
