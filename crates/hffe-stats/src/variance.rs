//! Daily variance estimators over the return matrix.
//!
//! - **Realized variance** `RV_j = sum_i r_ij^2` converges to quadratic
//!   variation, which includes the contribution of any jumps.
//! - **Bipower variance** `BV_j = (pi/2) * sum_i |r_ij| |r_(i+1)j|` converges
//!   to integrated variance even with finite-activity jumps, because a single
//!   jump only ever enters a product next to an ordinary return.

use std::f64::consts::FRAC_PI_2;

use ndarray::{s, Array1, Array2, Axis};

/// `|r[i, j]| * |r[i + 1, j]|` for every adjacent pair inside a day.
///
/// Shape is `(n - 1) x T`; empty when a day has fewer than two returns.
pub fn adjacent_abs_products(returns: &Array2<f64>) -> Array2<f64> {
    if returns.nrows() < 2 {
        return Array2::zeros((0, returns.ncols()));
    }
    let abs = returns.mapv(f64::abs);
    &abs.slice(s![..-1, ..]) * &abs.slice(s![1.., ..])
}

/// Realized variance, one value per day.
pub fn realized_variance(returns: &Array2<f64>) -> Array1<f64> {
    returns.mapv(|r| r * r).sum_axis(Axis(0))
}

/// Bipower variance, one value per day.
pub fn bipower_variance(returns: &Array2<f64>) -> Array1<f64> {
    adjacent_abs_products(returns).sum_axis(Axis(0)) * FRAC_PI_2
}
