//! Resolution of partial and wildcarded date specs into concrete dates.
//!
//! CFP postings routinely publish deadlines with unknown digits ("201X-XX-XX",
//! "2024-05-XX"). Resolution biases every unknown digit toward its maximum
//! value, so an uncertain deadline is never presented as more urgent than it
//! might actually be.

use chrono::{Datelike, NaiveDate};

use crate::error::{CfpError, CfpResult};

const SENTINEL_YEAR: i32 = 9999;

/// The "effectively unknown / far future" date. Sorts after every real date,
/// so unresolvable specs never outrank concrete deadlines.
pub fn sentinel() -> NaiveDate {
    NaiveDate::from_ymd_opt(SENTINEL_YEAR, 12, 31).unwrap()
}

/// A single digit position: digits stand for themselves, any wildcard
/// character stands for 9 (the most-future plausible value).
fn resolve_digit(c: char) -> i32 {
    c.to_digit(10).map(|d| d as i32).unwrap_or(9)
}

/// Resolve a year component digit by digit. Anything that is not exactly
/// four characters falls back to the sentinel year.
fn resolve_year(component: &str) -> i32 {
    if component.chars().count() != 4 {
        return SENTINEL_YEAR;
    }
    component.chars().fold(0, |year, c| year * 10 + resolve_digit(c))
}

/// Last valid day of the given month, accounting for leap years.
pub fn last_day_of_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    // Both constructions are valid whenever (year, month) is a valid month.
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap()
        .pred_opt()
        .unwrap()
        .day()
}

/// Resolve a raw date spec into a concrete calendar date.
///
/// - Absent or empty specs resolve to the sentinel.
/// - Specs that do not split into exactly three dash-separated components
///   resolve to the sentinel.
/// - An unparsable month defaults to 12; an unparsable day defaults to the
///   last day of the resolved month. A parsed but out-of-range month or day
///   resolves the whole spec to the sentinel.
/// - A combination of plausible components that names no real calendar day
///   (2024-04-31) is a hard error: it indicates broken data, not an unknown
///   deadline, and must not be clamped away.
pub fn resolve(raw: Option<&str>) -> CfpResult<NaiveDate> {
    let Some(raw) = raw else {
        return Ok(sentinel());
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(sentinel());
    }

    let parts: Vec<&str> = raw.split('-').collect();
    if parts.len() != 3 {
        return Ok(sentinel());
    }

    let year = resolve_year(parts[0]);

    let month = match parts[1].parse::<u32>() {
        Ok(m) if (1..=12).contains(&m) => m,
        Ok(_) => return Ok(sentinel()),
        Err(_) => 12,
    };

    let day = match parts[2].parse::<u32>() {
        Ok(d) if (1..=31).contains(&d) => d,
        Ok(_) => return Ok(sentinel()),
        Err(_) => last_day_of_month(year, month),
    };

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| CfpError::ImpossibleDate {
        value: raw.to_string(),
        year,
        month,
        day,
    })
}

/// Strict parse for fields where wildcarding is not permitted (the event's
/// own `begin`/`end` span).
pub fn parse_exact(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}
