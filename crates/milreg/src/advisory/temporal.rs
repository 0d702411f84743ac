//! Calendar arithmetic used by the advisory rules.
//!
//! Every helper is total: missing or malformed input yields `None` (or a
//! documented neutral value) instead of an error.

use chrono::{Datelike, Duration, NaiveDate};

use super::fact::DateValue;

const ISO_DATE_LEN: usize = 10;

/// Parse a strict `YYYY-MM-DD` date.
///
/// The value must be exactly ten characters with zero-padded month and day;
/// anything else (including surrounding whitespace) is treated as "no date".
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let bytes = raw.as_bytes();
    if bytes.len() != ISO_DATE_LEN {
        return None;
    }

    let shape_ok = bytes.iter().enumerate().all(|(idx, byte)| match idx {
        4 | 7 => *byte == b'-',
        _ => byte.is_ascii_digit(),
    });
    if !shape_ok {
        return None;
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn whole_years_between(start: NaiveDate, end: NaiveDate) -> i32 {
    let mut years = end.year() - start.year();
    if (end.month(), end.day()) < (start.month(), start.day()) {
        years -= 1;
    }
    years
}

/// Whole years elapsed between `birth` and `today`.
///
/// Returns `None` for a birth date in the future.
pub fn age_in_years(birth: NaiveDate, today: NaiveDate) -> Option<u32> {
    if birth > today {
        return None;
    }
    u32::try_from(whole_years_between(birth, today)).ok()
}

/// Whole years elapsed since `date`; a future date counts as zero.
pub fn years_since(date: NaiveDate, today: NaiveDate) -> u32 {
    if date > today {
        return 0;
    }
    u32::try_from(whole_years_between(date, today)).unwrap_or(0)
}

/// Shift `date` by `years` calendar years.
///
/// February 29 moved into a non-leap year lands on February 28 of that year.
/// `None` only when the target year is outside the representable range.
pub fn add_years(date: NaiveDate, years: i32) -> Option<NaiveDate> {
    let target_year = date.year().checked_add(years)?;
    date.with_year(target_year)
        .or_else(|| NaiveDate::from_ymd_opt(target_year, 2, 28))
}

/// `base_date + offset_days`, or `None` when there is no base date.
pub fn deadline(base_date: Option<NaiveDate>, offset_days: i64) -> Option<NaiveDate> {
    base_date?.checked_add_signed(Duration::days(offset_days))
}

/// Signed number of days from `today` until the deadline.
///
/// Positive means days remain; zero or negative means the deadline has passed.
pub fn days_until(base_date: Option<NaiveDate>, offset_days: i64, today: NaiveDate) -> Option<i64> {
    let deadline = deadline(base_date, offset_days)?;
    Some((deadline - today).num_days())
}

/// Render a calendar date as `DD.MM.YYYY`.
pub fn display_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Render a stored date value for display.
///
/// Parsed dates use `DD.MM.YYYY`; legacy text that never parsed is returned
/// verbatim so historical data is not lost.
pub fn format_date(value: Option<&DateValue>) -> Option<String> {
    match value? {
        DateValue::Date(date) => Some(display_date(*date)),
        DateValue::Text(text) if !text.trim().is_empty() => Some(text.clone()),
        DateValue::Text(_) => None,
    }
}
