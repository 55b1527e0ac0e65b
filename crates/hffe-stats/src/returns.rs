//! Intraday log returns.
//!
//! A flat price series of length `N * T` is laid out day by day, so day `j`
//! owns `prices[j * N .. (j + 1) * N]`. Both the price matrix and the return
//! matrix are indexed `[time-within-day, day]`: one column per day.
//!
//! Overnight returns (last price of day `j` to first price of day `j + 1`)
//! are never formed; each column is differenced on its own.

use ndarray::{s, Array2};

use crate::error::StatsError;
use crate::grid::GridShape;

/// Reshape a flat series into an `N x T` price matrix (days outer,
/// observations inner).
pub fn price_matrix(prices: &[f64], shape: GridShape) -> Result<Array2<f64>, StatsError> {
    if shape.prices_per_day == 0 {
        return Err(StatsError::ZeroPricesPerDay);
    }
    if prices.len() != shape.total_prices() {
        return Err(StatsError::NonRectangular {
            total: prices.len(),
            prices_per_day: shape.prices_per_day,
            days: shape.days,
        });
    }

    let n = shape.prices_per_day;
    Ok(Array2::from_shape_fn((n, shape.days), |(i, j)| {
        prices[j * n + i]
    }))
}

/// Compute the `(N - 1) x T` matrix of intraday log returns.
///
/// Every price must be finite and strictly positive; the first offender is
/// reported.
pub fn log_returns(prices: &[f64], shape: GridShape) -> Result<Array2<f64>, StatsError> {
    // `!(p > 0.0)` also catches NaN; infinity has no meaningful log return.
    if let Some((index, &price)) = prices
        .iter()
        .enumerate()
        .find(|(_, p)| !(p.is_finite() && **p > 0.0))
    {
        return Err(StatsError::NonPositivePrice { index, price });
    }

    let log_prices = price_matrix(prices, shape)?.mapv(f64::ln);
    Ok(&log_prices.slice(s![1.., ..]) - &log_prices.slice(s![..-1, ..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(n: usize, t: usize) -> GridShape {
        GridShape {
            prices_per_day: n,
            days: t,
        }
    }

    #[test]
    fn price_matrix_is_one_column_per_day() {
        let m = price_matrix(&[1.0, 2.0, 3.0, 10.0, 20.0, 30.0], shape(3, 2)).unwrap();
        assert_eq!(m.shape(), &[3, 2]);
        assert_eq!(m[[0, 0]], 1.0);
        assert_eq!(m[[2, 0]], 3.0);
        assert_eq!(m[[0, 1]], 10.0);
        assert_eq!(m[[2, 1]], 30.0);
    }

    #[test]
    fn returns_shape_and_values() {
        let r = log_returns(&[1.0, 2.0, 4.0, 10.0, 5.0, 5.0], shape(3, 2)).unwrap();
        assert_eq!(r.shape(), &[2, 2]);
        let ln2 = 2.0_f64.ln();
        assert!((r[[0, 0]] - ln2).abs() < 1e-12);
        assert!((r[[1, 0]] - ln2).abs() < 1e-12);
        assert!((r[[0, 1]] + ln2).abs() < 1e-12);
        assert_eq!(r[[1, 1]], 0.0);
    }

    #[test]
    fn overnight_move_is_excluded() {
        // Huge gap between day 1 close (1.0) and day 2 open (100.0).
        let r = log_returns(&[1.0, 1.0, 100.0, 100.0], shape(2, 2)).unwrap();
        assert_eq!(r.shape(), &[1, 2]);
        assert!(r.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn one_price_per_day_gives_no_returns() {
        let r = log_returns(&[1.0, 2.0, 3.0], shape(1, 3)).unwrap();
        assert_eq!(r.shape(), &[0, 3]);
    }

    #[test]
    fn non_positive_prices_rejected() {
        let err = log_returns(&[1.0, 0.0, 2.0, 3.0], shape(2, 2)).unwrap_err();
        assert_eq!(
            err,
            StatsError::NonPositivePrice {
                index: 1,
                price: 0.0
            }
        );
        let err = log_returns(&[1.0, 2.0, -2.0, 3.0], shape(2, 2)).unwrap_err();
        assert!(matches!(err, StatsError::NonPositivePrice { index: 2, .. }));
        let err = log_returns(&[1.0, f64::NAN], shape(2, 1)).unwrap_err();
        assert!(matches!(err, StatsError::NonPositivePrice { index: 1, .. }));
        let err = log_returns(&[1.0, 2.0, f64::INFINITY, 3.0], shape(2, 2)).unwrap_err();
        assert_eq!(
            err,
            StatsError::NonPositivePrice {
                index: 2,
                price: f64::INFINITY
            }
        );
    }

    #[test]
    fn length_must_match_shape() {
        let err = log_returns(&[1.0, 2.0, 3.0], shape(2, 2)).unwrap_err();
        assert!(matches!(err, StatsError::NonRectangular { total: 3, .. }));
    }
}
