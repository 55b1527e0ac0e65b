//! hffe-stats
//!
//! High-frequency financial econometrics over intraday price series:
//! realized variance, bipower variance, time-of-day volatility profile and
//! the split of returns into diffusive and jump components.
//!
//! Pipeline (single pass, whole dataset in memory):
//! - date/time codes -> timestamps (`datetime`)
//! - timestamps -> rectangular grid `(N, T)` (`grid`)
//! - prices -> `(N - 1) x T` log returns, one column per day (`returns`)
//! - returns -> RV, BV (`variance`) and TOD (`tod`)
//! - returns + BV + TOD -> continuous / jump matrices (`jumps`)
//!
//! Pure deterministic logic. No IO, no wall-clock.

pub mod datetime;
pub mod error;
pub mod grid;
pub mod jumps;
pub mod returns;
pub mod stock;
pub mod tod;
pub mod variance;

pub use datetime::{assemble_datetimes, parse_date_code, parse_time_code, split_datetime};
pub use error::StatsError;
pub use grid::{infer_grid, GridShape};
pub use jumps::{separate_returns, Decomposition, JumpThreshold};
pub use returns::{log_returns, price_matrix};
pub use stock::{Stock, StockSource, StockSummary, Totals};
pub use tod::time_of_day;
pub use variance::{bipower_variance, realized_variance};
