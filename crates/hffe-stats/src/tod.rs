//! Time-of-day (intraday seasonality) profile.
//!
//! For each adjacent pair of return periods `(i, i + 1)` the absolute product
//! `|r_i| |r_(i+1)|` is averaged across all days, giving `n - 1` values for
//! `n` returns per day. The first value is then duplicated at the front so the
//! profile has one entry per return period, and the whole vector is divided
//! by its own mean.
//!
//! # Approximation at the first period
//!
//! The first return period has no estimate of its own: it is assigned a copy
//! of the estimate for the pair `(0, 1)`. Consequently `tod[0] == tod[1]`
//! always. This is a padding convention, not a statistical estimate.

use std::iter;

use ndarray::{Array1, Array2, Axis};

use crate::error::StatsError;
use crate::variance::adjacent_abs_products;

/// Compute the normalized time-of-day profile (length `n`, mean 1).
///
/// Requires at least two returns per day (three prices).
pub fn time_of_day(returns: &Array2<f64>) -> Result<Array1<f64>, StatsError> {
    let products = adjacent_abs_products(returns);
    let raw = if products.nrows() == 0 {
        None
    } else {
        products.mean_axis(Axis(1))
    };
    let raw = raw.ok_or(StatsError::InsufficientObservations {
        what: "time-of-day profile",
        prices_per_day: returns.nrows() + 1,
        required: 3,
    })?;

    let padded: Array1<f64> = iter::once(raw[0]).chain(raw.iter().copied()).collect();

    let mean = padded.sum() / padded.len() as f64;
    if !(mean > 0.0) {
        return Err(StatsError::FlatTimeOfDayProfile);
    }
    Ok(padded / mean)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn profile_has_one_entry_per_return_period_and_mean_one() {
        let r = array![
            [0.02, -0.03],
            [-0.01, 0.01],
            [0.005, -0.004],
            [0.01, 0.02]
        ];
        let tod = time_of_day(&r).unwrap();
        assert_eq!(tod.len(), 4);
        assert!((tod.mean().unwrap() - 1.0).abs() < 1e-12);
        assert_eq!(tod[0], tod[1]);
    }

    #[test]
    fn raw_values_follow_cross_day_average() {
        // Pair (0,1): day0 0.02*0.01=2e-4, day1 0.03*0.01=3e-4 -> 2.5e-4
        // Pair (1,2): day0 0.01*0.01=1e-4, day1 0.01*0.01=1e-4 -> 1e-4
        let r = array![[0.02, -0.03], [-0.01, 0.01], [0.01, -0.01]];
        let tod = time_of_day(&r).unwrap();
        // padded raw = [2.5e-4, 2.5e-4, 1e-4], mean = 2e-4
        assert!((tod[0] - 1.25).abs() < 1e-9);
        assert!((tod[1] - 1.25).abs() < 1e-9);
        assert!((tod[2] - 0.5).abs() < 1e-9);
    }

    #[test]
    fn u_shape_is_preserved() {
        let mut r = Array2::from_elem((6, 3), 0.001);
        for j in 0..3 {
            r[[0, j]] = 0.01;
            r[[1, j]] = 0.01;
            r[[5, j]] = 0.01;
            r[[4, j]] = 0.01;
        }
        let tod = time_of_day(&r).unwrap();
        assert!(tod[0] > tod[2]);
        assert!(tod[5] > tod[2]);
    }

    #[test]
    fn needs_two_returns_per_day() {
        let r = array![[0.01, 0.02]];
        let err = time_of_day(&r).unwrap_err();
        assert!(matches!(
            err,
            StatsError::InsufficientObservations {
                prices_per_day: 2,
                required: 3,
                ..
            }
        ));
    }

    #[test]
    fn flat_series_cannot_be_normalized() {
        let r = Array2::zeros((4, 2));
        assert_eq!(time_of_day(&r).unwrap_err(), StatsError::FlatTimeOfDayProfile);
    }
}
