//! Error taxonomy for the statistical core.
//!
//! Every variant describes malformed input. Nothing here is transient, so
//! callers should never retry; fix the data instead.

use std::fmt;

/// Errors produced while assembling timestamps or computing statistics.
#[derive(Debug, Clone, PartialEq)]
pub enum StatsError {
    /// Two parallel input sequences have different lengths.
    LengthMismatch {
        left: &'static str,
        left_len: usize,
        right: &'static str,
        right_len: usize,
    },
    /// A `YYYYMMDD` code did not decompose into a calendar date.
    InvalidDate { index: usize, code: i64 },
    /// A `HHMM` code did not decompose into a wall-clock time.
    InvalidTime { index: usize, code: i64 },
    /// No observations at all.
    EmptySeries,
    /// The first-day probe found no observations before the next midnight.
    ZeroPricesPerDay,
    /// Days do not all carry the same number of observations.
    NonRectangular {
        total: usize,
        prices_per_day: usize,
        days: usize,
    },
    /// A price was zero, negative or NaN.
    NonPositivePrice { index: usize, price: f64 },
    /// Too few intraday observations for the requested statistic.
    InsufficientObservations {
        what: &'static str,
        prices_per_day: usize,
        required: usize,
    },
    /// Every adjacent absolute-return product is zero; the profile cannot
    /// be scaled to mean 1.
    FlatTimeOfDayProfile,
    /// An input vector does not line up with the return matrix.
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsError::LengthMismatch {
                left,
                left_len,
                right,
                right_len,
            } => write!(
                f,
                "length of {left} ({left_len}) does not match length of {right} ({right_len})"
            ),
            StatsError::InvalidDate { index, code } => {
                write!(f, "date code {code} at index {index} is not a valid YYYYMMDD date")
            }
            StatsError::InvalidTime { index, code } => {
                write!(f, "time code {code} at index {index} is not a valid HHMM time")
            }
            StatsError::EmptySeries => write!(f, "series contains no observations"),
            StatsError::ZeroPricesPerDay => write!(f, "zero prices per day"),
            StatsError::NonRectangular {
                total,
                prices_per_day,
                days,
            } => write!(
                f,
                "non-rectangular data: {total} observations cannot be split into \
                 {days} days of {prices_per_day} prices"
            ),
            StatsError::NonPositivePrice { index, price } => {
                write!(f, "price {price} at index {index} must be finite and strictly positive")
            }
            StatsError::InsufficientObservations {
                what,
                prices_per_day,
                required,
            } => write!(
                f,
                "{what} needs at least {required} prices per day, got {prices_per_day}"
            ),
            StatsError::FlatTimeOfDayProfile => write!(
                f,
                "time-of-day profile is identically zero and cannot be normalized"
            ),
            StatsError::DimensionMismatch {
                what,
                expected,
                found,
            } => write!(f, "{what} has length {found}, expected {expected}"),
        }
    }
}

impl std::error::Error for StatsError {}
