//! Jump / diffusion separation.
//!
//! A return `r[i, j]` (period `i`, day `j`) is classified against a threshold
//! that varies by day and by time of day:
//!
//! ```text
//! threshold[i, j] = alpha * n^(-exponent) * sqrt(BV[j] * TOD[i])
//! ```
//!
//! where `n` is the number of returns per day. `|r| <= threshold` is
//! diffusive, anything larger is a jump. Every entry lands in exactly one of
//! the two output matrices; the other holds zero at that position, so
//! `continuous + jump == returns` exactly.

use ndarray::{Array1, Array2, Axis, Zip};
use serde::{Deserialize, Serialize};

use crate::error::StatsError;

/// Parameters of the jump threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JumpThreshold {
    /// Sensitivity multiplier. Larger values classify fewer returns as jumps.
    pub alpha: f64,
    /// Exponent applied to the sampling frequency, `n^(-exponent)`.
    pub exponent: f64,
}

impl JumpThreshold {
    pub const DEFAULT_ALPHA: f64 = 5.0;
    pub const DEFAULT_EXPONENT: f64 = 0.49;

    pub fn with_alpha(alpha: f64) -> Self {
        Self {
            alpha,
            ..Self::default()
        }
    }

    /// Threshold for one entry given its day's BV and its period's TOD factor.
    pub fn level(&self, returns_per_day: usize, bv: f64, tod: f64) -> f64 {
        let scaling = self.alpha * (returns_per_day as f64).powf(-self.exponent);
        scaling * (bv * tod).sqrt()
    }
}

impl Default for JumpThreshold {
    fn default() -> Self {
        Self {
            alpha: Self::DEFAULT_ALPHA,
            exponent: Self::DEFAULT_EXPONENT,
        }
    }
}

/// The partition of a return matrix into diffusive and jump parts.
#[derive(Debug, Clone, PartialEq)]
pub struct Decomposition {
    /// `rc`: returns at or below the threshold, zero elsewhere.
    pub continuous: Array2<f64>,
    /// `rd`: returns above the threshold, zero elsewhere.
    pub jump: Array2<f64>,
}

impl Decomposition {
    /// Number of non-zero jump entries.
    pub fn jump_count(&self) -> usize {
        self.jump.iter().filter(|r| **r != 0.0).count()
    }

    /// Total entries minus jumps.
    pub fn diffusive_count(&self) -> usize {
        self.jump.len() - self.jump_count()
    }

    pub fn jumps_per_day(&self) -> Vec<usize> {
        jumps_per_day(&self.jump)
    }
}

/// Non-zero entries in each column (day) of a jump matrix.
pub fn jumps_per_day(jump: &Array2<f64>) -> Vec<usize> {
    jump.axis_iter(Axis(1))
        .map(|day| day.iter().filter(|r| **r != 0.0).count())
        .collect()
}

/// Split `returns` (`n x T`) into continuous and jump components.
///
/// `bv` must have one entry per day (`T`) and `tod` one entry per return
/// period (`n`).
pub fn separate_returns(
    returns: &Array2<f64>,
    bv: &Array1<f64>,
    tod: &Array1<f64>,
    threshold: &JumpThreshold,
) -> Result<Decomposition, StatsError> {
    let (n, days) = returns.dim();
    if bv.len() != days {
        return Err(StatsError::DimensionMismatch {
            what: "bipower variance",
            expected: days,
            found: bv.len(),
        });
    }
    if tod.len() != n {
        return Err(StatsError::DimensionMismatch {
            what: "time-of-day factor",
            expected: n,
            found: tod.len(),
        });
    }

    let mut continuous = Array2::<f64>::zeros((n, days));
    let mut jump = Array2::<f64>::zeros((n, days));

    Zip::indexed(returns)
        .and(&mut continuous)
        .and(&mut jump)
        .for_each(|(i, j), &r, rc, rd| {
            if r.abs() <= threshold.level(n, bv[j], tod[i]) {
                *rc = r;
            } else {
                *rd = r;
            }
        });

    Ok(Decomposition { continuous, jump })
}
