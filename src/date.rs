//! Date handling module
//!
//! Parses raw field text, builds the calendar date a set of fields refers to,
//! and parses the reference expressions accepted by `--now`.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc};
use crate::error::{Error, Result};
use crate::form::DateParts;

/// Reference expression types
#[derive(Debug, Clone, PartialEq)]
pub enum Reference {
    /// Use the live local clock
    Now,
    /// Use an explicit local date and time
    Explicit(NaiveDateTime),
}

/// Parse the leading integer of a field's raw text
///
/// Leading whitespace and a single sign are accepted, digits are consumed up
/// to the first non-digit and the rest is ignored:
/// - `"42"` → `Some(42)`
/// - `" -7"` → `Some(-7)`
/// - `"3.9"` → `Some(3)`
/// - `""`, `"abc"`, `"-"` → `None`
pub fn parse_field(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = rest[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Build the calendar date the fields refer to
///
/// Years 0 to 99 mean 1900 to 1999. `month` is one-based; out-of-range months
/// roll over into adjacent years and out-of-range days roll over into adjacent
/// months, so day 32 of January is February 1st and day 0 of March is the last
/// day of February.
///
/// Returns `None` when any field is unparseable or the date falls outside the
/// representable calendar.
pub fn candidate_date(parts: &DateParts) -> Option<NaiveDate> {
    let day = parts.day?;
    let month_index = parts.month?.checked_sub(1)?;
    let year = match parts.year? {
        year @ 0..=99 => year + 1900,
        year => year,
    };
    let year = year.checked_add(month_index.div_euclid(12))?;

    let year = i32::try_from(year).ok()?;
    let month = u32::try_from(month_index.rem_euclid(12) + 1).ok()?;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;

    first.checked_add_signed(TimeDelta::try_days(day.checked_sub(1)?)?)
}

/// Whole days between local midnight of `candidate` and `now`
///
/// Floors towards negative infinity, so a candidate later than `now` yields a
/// negative count.
pub fn elapsed_days(candidate: NaiveDate, now: NaiveDateTime) -> i64 {
    elapsed_days_in(&Local, candidate, now)
}

/// Whole days between midnight of `candidate` and `now`, both read as wall
/// clock times in `tz`
///
/// Both ends are converted to instants first, so a daylight saving shift
/// between them counts as real time.
pub fn elapsed_days_in<Tz: TimeZone>(tz: &Tz, candidate: NaiveDate, now: NaiveDateTime) -> i64 {
    const MILLIS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

    let start = instant(tz, candidate.and_time(NaiveTime::MIN));
    let end = instant(tz, now);
    (end - start).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

/// The instant a wall clock time in `tz` stands for
///
/// Ambiguous times take the earlier instant. Times skipped by a forward shift
/// are read past the gap.
fn instant<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> DateTime<Utc> {
    tz.from_local_datetime(&local)
        .earliest()
        .or_else(|| {
            let later = local.checked_add_signed(TimeDelta::hours(1))?;
            tz.from_local_datetime(&later).earliest()
        })
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_else(|| local.and_utc())
}

/// Parse a reference expression string into a Reference
///
/// Supported formats:
/// - `""`, `"now"`, `"today"` → Now
/// - `"2024-01-01"` → midnight of that date (ISO format)
/// - `"2024-01-01T12:30"`, `"2024-01-01 12:30:15"` → that date and time
/// - `"01/31/2024"` → midnight of that date (US format)
pub fn parse_reference(expr: &str) -> Result<Reference> {
    let expr = expr.trim();

    if expr.is_empty() || expr.eq_ignore_ascii_case("now") || expr.eq_ignore_ascii_case("today") {
        return Ok(Reference::Now);
    }

    // Date and time: 2024-01-01T12:30[:15]
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(expr, format) {
            return Ok(Reference::Explicit(datetime));
        }
    }

    // ISO format: 2024-01-01
    if let Ok(date) = NaiveDate::parse_from_str(expr, "%Y-%m-%d") {
        return Ok(Reference::Explicit(date.and_time(NaiveTime::MIN)));
    }

    // US format: 01/31/2024
    if let Ok(date) = NaiveDate::parse_from_str(expr, "%m/%d/%Y") {
        return Ok(Reference::Explicit(date.and_time(NaiveTime::MIN)));
    }

    Err(Error::InvalidDateExpression(format!("Unable to parse reference: {}", expr)))
}

/// Resolve a Reference to the local date and time it stands for
pub fn resolve_reference(reference: &Reference) -> NaiveDateTime {
    match reference {
        Reference::Now => Local::now().naive_local(),
        Reference::Explicit(datetime) => *datetime,
    }
}

/// Format a date in the standard format: "Month day, year"
/// Example: "November 20, 2024"
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
