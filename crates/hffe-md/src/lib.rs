//! hffe-md
//!
//! Market-data plumbing around the pure statistics in `hffe-stats`:
//! headerless CSV loaders for price and option quote series, and the
//! liquidity screen applied to option quotes.

pub mod ingest_csv;
pub mod liquidity;

use std::path::Path;

use anyhow::Context;
use hffe_stats::{JumpThreshold, Stock, StockSource};
use tracing::debug;

pub use ingest_csv::{
    parse_prices_csv_file, parse_prices_csv_str, parse_quotes_csv_file, parse_quotes_csv_str,
    CsvIngestError, PriceColumns,
};
pub use liquidity::{
    assert_single_option_type, is_put, prices_not_stale, zero_ask_ok, zero_bid_ok,
    LiquidityChecker, LiquidityCondition, LiquidityError, LiquidityFailure, LiquidityVerdict,
    OptionKind, OptionQuotes, QuoteSeries,
};

/// Load a `date,time,price` CSV and run the full analysis on it.
pub fn load_stock(path: &Path, threshold: JumpThreshold) -> anyhow::Result<Stock> {
    let cols = parse_prices_csv_file(path)
        .with_context(|| format!("load price series '{}'", path.display()))?;
    debug!(path = %path.display(), rows = cols.len(), "loaded price series");

    let stock = Stock::with_threshold(&cols.prices, &cols.dates, Some(&cols.times[..]), threshold)
        .with_context(|| format!("analyze price series '{}'", path.display()))?;
    Ok(stock.with_source(StockSource::Csv(path.to_path_buf())))
}
