//! Lexical date classification for DCAT-US date fields.
//!
//! DCAT-US 1.1 `issued` and `modified` hold ISO 8601 values. DCAT-US 3.0
//! accepts them as plain literals as long as they are one of the date-ish
//! lexical forms below:
//!
//! - `YYYY` (gYear)
//! - `YYYY-MM` (gYearMonth)
//! - `YYYY-MM-DD` (date)
//! - `YYYY-MM-DDThh:mm[:ss[.fff]][Z|±hh:mm]` (dateTime)
//!
//! Only the ISO 8601 **extended format** is accepted; `20031215` is rejected.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};

/// The accepted lexical form a value matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateForm {
    Year,
    YearMonth,
    Date,
    DateTime,
}

/// Why a value is not a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    Empty,
    /// Spaces are not allowed in ISO 8601 representations.
    ContainsWhitespace,
    InvalidYear,
    InvalidMonth,
    InvalidDay,
    InvalidTime,
    InvalidTimezone,
    /// Time given without a complete date.
    TimeWithoutDay,
    /// Trailing components after the day.
    TrailingComponents,
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "value is empty"),
            Self::ContainsWhitespace => write!(f, "whitespace is not allowed in dates"),
            Self::InvalidYear => write!(f, "invalid year component (must be 4 digits)"),
            Self::InvalidMonth => write!(f, "invalid month component (must be 01-12)"),
            Self::InvalidDay => write!(f, "invalid day component"),
            Self::InvalidTime => write!(f, "invalid time component"),
            Self::InvalidTimezone => write!(f, "invalid timezone offset"),
            Self::TimeWithoutDay => write!(f, "time given without a complete date"),
            Self::TrailingComponents => write!(f, "unexpected trailing date components"),
        }
    }
}

impl std::error::Error for DateError {}

/// Classifies a value into one of the accepted date forms.
pub fn parse_date_form(value: &str) -> Result<DateForm, DateError> {
    if value.is_empty() {
        return Err(DateError::Empty);
    }
    if value.chars().any(char::is_whitespace) {
        return Err(DateError::ContainsWhitespace);
    }

    let (date_part, time_part) = match value.split_once('T') {
        Some((date, time)) => (date, Some(time)),
        None => (value, None),
    };

    let mut parts = date_part.split('-');
    let year = parts
        .next()
        .filter(|part| is_digits(part, 4))
        .ok_or(DateError::InvalidYear)?;
    let month = parts.next();
    let day = parts.next();
    if parts.next().is_some() {
        return Err(DateError::TrailingComponents);
    }

    let Some(month) = month else {
        return match time_part {
            Some(_) => Err(DateError::TimeWithoutDay),
            None => Ok(DateForm::Year),
        };
    };
    let month_num = parse_two_digits(month).ok_or(DateError::InvalidMonth)?;
    if !(1..=12).contains(&month_num) {
        return Err(DateError::InvalidMonth);
    }

    let Some(day) = day else {
        return match time_part {
            Some(_) => Err(DateError::TimeWithoutDay),
            None => Ok(DateForm::YearMonth),
        };
    };
    let day_num = parse_two_digits(day).ok_or(DateError::InvalidDay)?;
    let year_num: i32 = year.parse().map_err(|_| DateError::InvalidYear)?;
    if NaiveDate::from_ymd_opt(year_num, month_num, day_num).is_none() {
        return Err(DateError::InvalidDay);
    }

    match time_part {
        None => Ok(DateForm::Date),
        Some(time) => {
            parse_time_part(time)?;
            Ok(DateForm::DateTime)
        }
    }
}

/// True if the value matches any accepted date form.
pub fn is_date_literal(value: &str) -> bool {
    parse_date_form(value).is_ok()
}

/// Parses `hh:mm[:ss[.fff]]` with an optional `Z` or `±hh[:]mm` suffix.
fn parse_time_part(time: &str) -> Result<(), DateError> {
    let (clock, zone) = split_timezone(time);
    if let Some(zone) = zone {
        parse_timezone_offset(zone)?;
    }

    let mut parts = clock.split(':');
    let hour = parts.next().and_then(parse_two_digits);
    let minute = parts.next().and_then(parse_two_digits);
    let second = parts.next();
    if parts.next().is_some() {
        return Err(DateError::InvalidTime);
    }
    let (Some(hour), Some(minute)) = (hour, minute) else {
        return Err(DateError::InvalidTime);
    };

    let (second, nanos) = match second {
        None => (0, 0),
        Some(second) => parse_seconds(second).ok_or(DateError::InvalidTime)?,
    };
    NaiveTime::from_hms_nano_opt(hour, minute, second, nanos)
        .map(|_| ())
        .ok_or(DateError::InvalidTime)
}

fn split_timezone(time: &str) -> (&str, Option<&str>) {
    if let Some(stripped) = time.strip_suffix('Z') {
        return (stripped, Some("Z"));
    }
    match time.rfind(['+', '-']) {
        Some(pos) if pos > 0 => (&time[..pos], Some(&time[pos..])),
        _ => (time, None),
    }
}

fn parse_timezone_offset(zone: &str) -> Result<(), DateError> {
    if zone == "Z" {
        return Ok(());
    }
    let digits = zone
        .strip_prefix(['+', '-'])
        .ok_or(DateError::InvalidTimezone)?;
    let (hours, minutes) = match digits.split_once(':') {
        Some((hours, minutes)) => (hours, minutes),
        None if digits.len() == 4 => digits.split_at(2),
        None => (digits, "00"),
    };
    match (parse_two_digits(hours), parse_two_digits(minutes)) {
        (Some(h), Some(m)) if h <= 14 && m <= 59 => Ok(()),
        _ => Err(DateError::InvalidTimezone),
    }
}

fn parse_seconds(second: &str) -> Option<(u32, u32)> {
    let (whole, fraction) = match second.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (second, None),
    };
    let whole = parse_two_digits(whole)?;
    let nanos = match fraction {
        None => 0,
        Some(fraction) => {
            if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let padded = format!("{fraction:0<9}");
            padded[..9].parse().ok()?
        }
    };
    Some((whole, nanos))
}

fn parse_two_digits(part: &str) -> Option<u32> {
    if is_digits(part, 2) {
        part.parse().ok()
    } else {
        None
    }
}

fn is_digits(part: &str, len: usize) -> bool {
    part.len() == len && part.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_truncated_forms() {
        assert_eq!(parse_date_form("2023"), Ok(DateForm::Year));
        assert_eq!(parse_date_form("2023-07"), Ok(DateForm::YearMonth));
        assert_eq!(parse_date_form("2023-07-14"), Ok(DateForm::Date));
    }

    #[test]
    fn accepts_date_times() {
        for value in [
            "2023-07-14T09:30",
            "2023-07-14T09:30:15",
            "2023-07-14T09:30:15.250Z",
            "2023-07-14T09:30:15-05:00",
            "2023-07-14T09:30:15+0530",
        ] {
            assert_eq!(parse_date_form(value), Ok(DateForm::DateTime), "{value}");
        }
    }

    #[test]
    fn rejects_invalid_components() {
        assert_eq!(parse_date_form(""), Err(DateError::Empty));
        assert_eq!(parse_date_form("20231215"), Err(DateError::InvalidYear));
        assert_eq!(parse_date_form("2023-13"), Err(DateError::InvalidMonth));
        assert_eq!(parse_date_form("2023-02-30"), Err(DateError::InvalidDay));
        assert_eq!(parse_date_form("2023-02-10T25:00"), Err(DateError::InvalidTime));
        assert_eq!(parse_date_form("2023-02T10:00"), Err(DateError::TimeWithoutDay));
        assert_eq!(
            parse_date_form("2023-02-10 10:00"),
            Err(DateError::ContainsWhitespace)
        );
        assert_eq!(
            parse_date_form("2023-02-10-01"),
            Err(DateError::TrailingComponents)
        );
    }

    #[test]
    fn rejects_frequency_expressions() {
        assert!(!is_date_literal("R/P1W"));
        assert!(!is_date_literal("P3M"));
        assert!(!is_date_literal("irregular"));
    }
}
