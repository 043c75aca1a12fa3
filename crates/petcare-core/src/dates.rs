//! Calendar helpers shared by the classifier, the recurrence tables and the
//! nutrition calculator.
//!
//! All arithmetic works on whole calendar days (`NaiveDate`). Callers holding
//! a timestamp take its UTC date first.

use chrono::{DateTime, Months, NaiveDate, Utc};
use thiserror::Error;

/// Date errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DateError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Date out of range: {date} {months:+} months")]
    OutOfRange { date: NaiveDate, months: i32 },
}

pub type DateResult<T> = Result<T, DateError>;

const DAYS_PER_MONTH: i64 = 30;
const DAYS_PER_WEEK: i64 = 7;

/// Parse a `YYYY-MM-DD` date or an RFC 3339 timestamp (UTC date part).
pub fn parse_date(input: &str) -> DateResult<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DateError::InvalidDate("empty date".into()));
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|ts| ts.naive_utc().date())
        .map_err(|_| DateError::InvalidDate(trimmed.to_string()))
}

/// Parse an RFC 3339 timestamp, or a `YYYY-MM-DD` date taken as midnight UTC.
pub fn parse_instant(input: &str) -> DateResult<DateTime<Utc>> {
    let trimmed = input.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(ts.with_timezone(&Utc));
    }
    Ok(parse_date(trimmed)?.and_time(chrono::NaiveTime::MIN).and_utc())
}

/// Signed number of days from `from` to `to`. Positive when `to` is later.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Age in 30-day months, rounded up.
pub fn age_in_months(birth_date: NaiveDate, now: NaiveDate) -> i64 {
    ceil_div(days_between(birth_date, now).abs(), DAYS_PER_MONTH)
}

/// Age in weeks, rounded up.
pub fn age_in_weeks(birth_date: NaiveDate, now: NaiveDate) -> i64 {
    ceil_div(days_between(birth_date, now).abs(), DAYS_PER_WEEK)
}

/// Add calendar months, clamping the day to the end of the target month.
///
/// Jan 31 + 1 month is the last day of February. Negative values subtract.
pub fn add_months(date: NaiveDate, months: i32) -> DateResult<NaiveDate> {
    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    };

    shifted.ok_or(DateError::OutOfRange { date, months })
}

/// Add whole years (Feb 29 clamps to Feb 28 in common years).
pub fn add_years(date: NaiveDate, years: i32) -> DateResult<NaiveDate> {
    let months = years
        .checked_mul(12)
        .ok_or(DateError::OutOfRange { date, months: i32::MAX })?;
    add_months(date, months)
}

fn ceil_div(value: i64, divisor: i64) -> i64 {
    (value + divisor - 1) / divisor
}
