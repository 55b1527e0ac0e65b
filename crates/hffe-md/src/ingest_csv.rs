//! CSV ingestion for intraday price series and option quote series.
//!
//! Both formats are headerless and comma-separated. Parsing is fail-fast:
//! the first malformed row aborts the whole file, since a silently dropped
//! observation would break the rectangular-grid assumption downstream.
//!
//! ## Price rows
//!
//! | Column | Type / example | Notes                    |
//! |--------|----------------|--------------------------|
//! | 1      | `20070805`     | Date code `YYYYMMDD`     |
//! | 2      | `0935`         | Time code `HHMM`         |
//! | 3      | `12.34`        | Price                    |
//!
//! ## Quote rows
//!
//! | Column | Type / example | Notes                    |
//! |--------|----------------|--------------------------|
//! | 1      | `1.20`         | Bid                      |
//! | 2      | `1.35`         | Ask                      |
//! | 3      | `P`            | Option type, `C` or `P`  |

use std::fmt;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::liquidity::{OptionKind, OptionQuotes};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors produced by CSV parsing in this module.
#[derive(Debug)]
pub enum CsvIngestError {
    /// An I/O or CSV-library error.
    Io(String),
    /// A row did not have the expected number of columns.
    FieldCount {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A record field could not be parsed into the expected type.
    ParseField {
        row: usize,
        field: &'static str,
        raw: String,
    },
}

impl fmt::Display for CsvIngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsvIngestError::Io(msg) => write!(f, "csv io error: {msg}"),
            CsvIngestError::FieldCount {
                row,
                expected,
                found,
            } => write!(f, "csv row {row}: expected {expected} columns, found {found}"),
            CsvIngestError::ParseField { row, field, raw } => {
                write!(
                    f,
                    "csv row {row}: cannot parse field '{field}' from value '{raw}'"
                )
            }
        }
    }
}

impl std::error::Error for CsvIngestError {}

// ---------------------------------------------------------------------------
// Parsed output
// ---------------------------------------------------------------------------

/// Column-oriented price series as read from a file, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceColumns {
    pub dates: Vec<i64>,
    pub times: Vec<i64>,
    pub prices: Vec<f64>,
}

impl PriceColumns {
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Parse a price CSV file at `path`.
pub fn parse_prices_csv_file(path: &Path) -> Result<PriceColumns, CsvIngestError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| CsvIngestError::Io(format!("read '{}': {e}", path.display())))?;
    parse_prices_csv_str(&raw)
}

/// Parse price CSV text (`date,time,price` per line, no header).
pub fn parse_prices_csv_str(src: &str) -> Result<PriceColumns, CsvIngestError> {
    let mut out = PriceColumns::default();
    for_each_record(src, 3, |row, rec| {
        out.dates.push(parse_field(row, rec, 0, "date")?);
        out.times.push(parse_field(row, rec, 1, "time")?);
        out.prices.push(parse_field(row, rec, 2, "price")?);
        Ok(())
    })?;
    Ok(out)
}

/// Parse a quote CSV file at `path`.
pub fn parse_quotes_csv_file(path: &Path) -> Result<OptionQuotes, CsvIngestError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| CsvIngestError::Io(format!("read '{}': {e}", path.display())))?;
    parse_quotes_csv_str(&raw)
}

/// Parse quote CSV text (`bid,ask,type` per line, no header).
pub fn parse_quotes_csv_str(src: &str) -> Result<OptionQuotes, CsvIngestError> {
    let mut bids = Vec::new();
    let mut asks = Vec::new();
    let mut kinds = Vec::new();
    for_each_record(src, 3, |row, rec| {
        bids.push(parse_field(row, rec, 0, "bid")?);
        asks.push(parse_field(row, rec, 1, "ask")?);
        let raw = rec.get(2).unwrap_or_default();
        let kind = OptionKind::parse(raw).ok_or_else(|| CsvIngestError::ParseField {
            row,
            field: "type",
            raw: raw.to_string(),
        })?;
        kinds.push(kind);
        Ok(())
    })?;

    // Columns are filled in lockstep, so lengths always agree.
    OptionQuotes::new(bids, asks, kinds).map_err(|e| CsvIngestError::Io(e.to_string()))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Drive a headerless reader, handing each non-blank record to `f` with its
/// 1-based line number.
fn for_each_record<F>(src: &str, columns: usize, mut f: F) -> Result<(), CsvIngestError>
where
    F: FnMut(usize, &StringRecord) -> Result<(), CsvIngestError>,
{
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(src.as_bytes());

    for result in reader.records() {
        let rec = result.map_err(|e| CsvIngestError::Io(e.to_string()))?;
        let row = rec.position().map(|p| p.line() as usize).unwrap_or(0);

        // The csv reader already skips empty lines; a lone separator-free
        // blank field still shows up as one empty column.
        if rec.len() == 1 && rec.get(0).map_or(true, str::is_empty) {
            continue;
        }
        if rec.len() != columns {
            return Err(CsvIngestError::FieldCount {
                row,
                expected: columns,
                found: rec.len(),
            });
        }
        f(row, &rec)?;
    }
    Ok(())
}

fn parse_field<T: std::str::FromStr>(
    row: usize,
    rec: &StringRecord,
    idx: usize,
    field: &'static str,
) -> Result<T, CsvIngestError> {
    let raw = rec.get(idx).unwrap_or_default();
    raw.parse::<T>().map_err(|_| CsvIngestError::ParseField {
        row,
        field,
        raw: raw.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
