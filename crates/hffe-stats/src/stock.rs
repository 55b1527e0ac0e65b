//! `Stock`: one fully computed analysis of a single intraday price series.
//!
//! Construction runs the whole pipeline eagerly and either produces every
//! derived statistic or fails before producing any:
//!
//! ```text
//! dates/times -> datetimes -> grid (N, T) -> returns -> RV, BV, TOD -> rc / rd
//! ```
//!
//! A `Stock` is never mutated after construction. Independent stocks share
//! nothing and can be computed on separate threads.

use std::fmt;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::datetime::{assemble_datetimes, split_datetime};
use crate::error::StatsError;
use crate::grid::{infer_grid, GridShape};
use crate::jumps::{self, separate_returns, JumpThreshold};
use crate::returns::log_returns;
use crate::tod::time_of_day;
use crate::variance::{bipower_variance, realized_variance};

/// Where the raw series came from (used for display only).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StockSource {
    #[default]
    InMemory,
    Csv(PathBuf),
}

/// Observation counts for a computed stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Price observations per day (`N`).
    pub prices: usize,
    /// Returns per day (`N - 1`).
    pub returns: usize,
    /// Number of days (`T`).
    pub days: usize,
    /// Returns classified as jumps.
    pub jumps: usize,
    /// Returns classified as diffusive; `jumps + diffusive == returns * days`.
    pub diffusive: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stock {
    pub source: StockSource,
    pub threshold: JumpThreshold,
    pub datetimes: Vec<NaiveDateTime>,
    pub total: Totals,
    /// `(N - 1) x T` intraday log returns.
    pub returns: Array2<f64>,
    /// Realized variance per day.
    pub rv: Array1<f64>,
    /// Bipower variance per day.
    pub bv: Array1<f64>,
    /// Time-of-day factor per return period, mean 1.
    pub tod: Array1<f64>,
    /// Diffusive returns (`rc`).
    pub rc: Array2<f64>,
    /// Jump returns (`rd`).
    pub rd: Array2<f64>,
}

impl Stock {
    /// Build from prices and `YYYYMMDD` dates, optionally with `HHMM` times,
    /// using the default jump threshold.
    pub fn new(prices: &[f64], dates: &[i64], times: Option<&[i64]>) -> Result<Self, StatsError> {
        Self::with_threshold(prices, dates, times, JumpThreshold::default())
    }

    pub fn with_threshold(
        prices: &[f64],
        dates: &[i64],
        times: Option<&[i64]>,
        threshold: JumpThreshold,
    ) -> Result<Self, StatsError> {
        if prices.len() != dates.len() {
            return Err(StatsError::LengthMismatch {
                left: "prices",
                left_len: prices.len(),
                right: "dates",
                right_len: dates.len(),
            });
        }
        if let Some(times) = times {
            if prices.len() != times.len() {
                return Err(StatsError::LengthMismatch {
                    left: "prices",
                    left_len: prices.len(),
                    right: "times",
                    right_len: times.len(),
                });
            }
        }

        let datetimes = assemble_datetimes(dates, times)?;
        Self::compute(prices, datetimes, threshold)
    }

    /// Build from already-assembled timestamps.
    ///
    /// Timestamps are reduced to minute resolution, exactly as if they had
    /// been supplied as date and time codes.
    pub fn from_datetimes(
        prices: &[f64],
        datetimes: &[NaiveDateTime],
        threshold: JumpThreshold,
    ) -> Result<Self, StatsError> {
        let (dates, times): (Vec<i64>, Vec<i64>) = datetimes.iter().map(split_datetime).unzip();
        Self::with_threshold(prices, &dates, Some(&times[..]), threshold)
    }

    /// Tag the stock with where its data came from.
    pub fn with_source(mut self, source: StockSource) -> Self {
        self.source = source;
        self
    }

    fn compute(
        prices: &[f64],
        datetimes: Vec<NaiveDateTime>,
        threshold: JumpThreshold,
    ) -> Result<Self, StatsError> {
        let shape = infer_grid(&datetimes)?;
        let returns = log_returns(prices, shape)?;
        let rv = realized_variance(&returns);
        let bv = bipower_variance(&returns);
        let tod = time_of_day(&returns)?;
        let parts = separate_returns(&returns, &bv, &tod, &threshold)?;

        let total = Totals {
            prices: shape.prices_per_day,
            returns: shape.returns_per_day(),
            days: shape.days,
            jumps: parts.jump_count(),
            diffusive: parts.diffusive_count(),
        };
        debug!(
            prices_per_day = total.prices,
            days = total.days,
            jumps = total.jumps,
            diffusive = total.diffusive,
            "stock statistics computed"
        );

        Ok(Self {
            source: StockSource::InMemory,
            threshold,
            datetimes,
            total,
            returns,
            rv,
            bv,
            tod,
            rc: parts.continuous,
            rd: parts.jump,
        })
    }

    pub fn shape(&self) -> GridShape {
        GridShape {
            prices_per_day: self.total.prices,
            days: self.total.days,
        }
    }

    /// Jump count for each day.
    pub fn jumps_per_day(&self) -> Vec<usize> {
        jumps::jumps_per_day(&self.rd)
    }

    /// Flat, serializable view for reports.
    pub fn summary(&self) -> StockSummary {
        StockSummary {
            source: self.source.to_string(),
            alpha: self.threshold.alpha,
            threshold_exponent: self.threshold.exponent,
            first: self.datetimes.first().copied(),
            last: self.datetimes.last().copied(),
            total: self.total,
            rv: self.rv.to_vec(),
            bv: self.bv.to_vec(),
            tod: self.tod.to_vec(),
            jumps_per_day: self.jumps_per_day(),
        }
    }
}

impl fmt::Display for StockSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockSource::InMemory => write!(f, "in-memory"),
            StockSource::Csv(path) => write!(f, "csv:{}", path.display()),
        }
    }
}

impl fmt::Display for Stock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stock({}, prices_per_day={}, days={}, jumps={}, diffusive={})",
            self.source, self.total.prices, self.total.days, self.total.jumps, self.total.diffusive
        )
    }
}

/// Serializable digest of a [`Stock`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockSummary {
    pub source: String,
    pub alpha: f64,
    pub threshold_exponent: f64,
    pub first: Option<NaiveDateTime>,
    pub last: Option<NaiveDateTime>,
    pub total: Totals,
    pub rv: Vec<f64>,
    pub bv: Vec<f64>,
    pub tod: Vec<f64>,
    pub jumps_per_day: Vec<usize>,
}
