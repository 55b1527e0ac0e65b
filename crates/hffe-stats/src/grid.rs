//! Grid inference: recover `(prices_per_day, days)` from sorted timestamps.
//!
//! # Assumption
//!
//! Data is **rectangular**: every trading day carries exactly the same number
//! of observations. The first day is probed for its length and that length is
//! assumed for every other day. The only consistency check is that the total
//! count divides evenly; a series whose days differ in length but whose total
//! happens to divide by the first day's length is NOT detected. This is a
//! known limitation, not something the caller should rely on being caught.
//!
//! The input must already be sorted ascending.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::StatsError;

/// Rectangular shape of an intraday price series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridShape {
    /// `N`: price observations per day.
    pub prices_per_day: usize,
    /// `T`: number of days.
    pub days: usize,
}

impl GridShape {
    /// `N - 1`: intraday returns per day.
    pub fn returns_per_day(&self) -> usize {
        self.prices_per_day.saturating_sub(1)
    }

    /// `N * T`.
    pub fn total_prices(&self) -> usize {
        self.prices_per_day * self.days
    }
}

/// Infer the grid shape of a sorted timestamp sequence.
///
/// `N` is the number of timestamps strictly before midnight of the day after
/// the first timestamp's date (binary search on the sorted slice). `T` is
/// `len / N`, and `N * T` must equal `len`.
pub fn infer_grid(datetimes: &[NaiveDateTime]) -> Result<GridShape, StatsError> {
    let first = datetimes.first().ok_or(StatsError::EmptySeries)?;

    let prices_per_day = match first.date().succ_opt() {
        Some(next_day) => {
            let boundary = next_day.and_time(chrono::NaiveTime::MIN);
            datetimes.partition_point(|dt| *dt < boundary)
        }
        // First date is the last representable date; everything is day one.
        None => datetimes.len(),
    };

    if prices_per_day == 0 {
        return Err(StatsError::ZeroPricesPerDay);
    }

    let total = datetimes.len();
    let days = total / prices_per_day;
    if days * prices_per_day != total {
        return Err(StatsError::NonRectangular {
            total,
            prices_per_day,
            days,
        });
    }

    debug!(prices_per_day, days, "inferred rectangular grid");
    Ok(GridShape {
        prices_per_day,
        days,
    })
}
