//! DateTime assembly from integer date and time codes.
//!
//! Date codes are `YYYYMMDD` (e.g. `20070805`); time codes are `HHMM` with
//! the leading zero usually lost to integer storage (`935` is 09:35).
//! Decomposition is by fixed-width slicing of the decimal representation:
//! dates split as `[YYYY][MM][DD]`, times are left-padded to four digits and
//! split as `[HH][MM]`.
//!
//! Deterministic, pure logic. No time zone is attached; codes are taken as
//! exchange-local wall-clock values.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::StatsError;

// ---------------------------------------------------------------------------
// Code -> calendar fields
// ---------------------------------------------------------------------------

/// Decompose a `YYYYMMDD` code into a calendar date.
///
/// The code must render as exactly eight decimal digits.
pub fn parse_date_code(code: i64) -> Option<NaiveDate> {
    if code < 0 {
        return None;
    }
    let s = code.to_string();
    if s.len() != 8 {
        return None;
    }
    let year: i32 = s[0..4].parse().ok()?;
    let month: u32 = s[4..6].parse().ok()?;
    let day: u32 = s[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Decompose an `HHMM` code into a wall-clock time.
///
/// Codes with fewer than four digits are left-padded, so `5` is 00:05 and
/// `935` is 09:35. Minutes come from the two rightmost digits.
pub fn parse_time_code(code: i64) -> Option<NaiveTime> {
    if !(0..=9999).contains(&code) {
        return None;
    }
    let s = format!("{code:04}");
    let hour: u32 = s[0..2].parse().ok()?;
    let minute: u32 = s[2..4].parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Combine parallel date and (optional) time codes into timestamps.
///
/// Without time codes every timestamp sits at midnight of its date.
pub fn assemble_datetimes(
    dates: &[i64],
    times: Option<&[i64]>,
) -> Result<Vec<NaiveDateTime>, StatsError> {
    if let Some(times) = times {
        if times.len() != dates.len() {
            return Err(StatsError::LengthMismatch {
                left: "dates",
                left_len: dates.len(),
                right: "times",
                right_len: times.len(),
            });
        }
    }

    let mut out = Vec::with_capacity(dates.len());
    for (index, &date_code) in dates.iter().enumerate() {
        let date = parse_date_code(date_code).ok_or(StatsError::InvalidDate {
            index,
            code: date_code,
        })?;

        let time = match times {
            Some(times) => {
                let time_code = times[index];
                parse_time_code(time_code).ok_or(StatsError::InvalidTime {
                    index,
                    code: time_code,
                })?
            }
            None => NaiveTime::MIN,
        };

        out.push(date.and_time(time));
    }
    Ok(out)
}

/// Inverse of assembly: `(YYYYMMDD, HHMM)` codes for a timestamp.
///
/// Seconds and sub-second precision are dropped.
pub fn split_datetime(dt: &NaiveDateTime) -> (i64, i64) {
    let date = i64::from(dt.year()) * 10_000 + i64::from(dt.month()) * 100 + i64::from(dt.day());
    let time = i64::from(dt.hour()) * 100 + i64::from(dt.minute());
    (date, time)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
