//! Detection of non-date content in date-typed fields.
//!
//! Publishers regularly put the update frequency (`R/P1W`, `P3M`) into
//! `modified` or `issued`. Such values are never emitted as date literals:
//! the field is omitted and a warning names what was found.

use dcat_model::ReasonCode;

use crate::context::TransformContext;
use crate::datetime::is_date_literal;

/// What a rejected date value turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anomaly {
    /// ISO 8601 duration or repeating interval.
    Frequency,
    /// Nothing recognizable.
    Unrecognized,
}

impl Anomaly {
    pub fn reason(self) -> ReasonCode {
        match self {
            Self::Frequency => ReasonCode::FrequencyInDateField,
            Self::Unrecognized => ReasonCode::InvalidDateValue,
        }
    }
}

/// Classifies a value that already failed date validation.
pub fn classify(value: &str) -> Anomaly {
    if is_frequency_expression(value) {
        Anomaly::Frequency
    } else {
        Anomaly::Unrecognized
    }
}

/// True for ISO 8601 durations (`P3M`, `PT12H`) and repeating intervals
/// (`R/P1W`, `R12/2020-01-01/P1D`).
pub fn is_frequency_expression(value: &str) -> bool {
    let value = value.trim();
    is_duration(value) || is_repeating_interval(value)
}

/// Matches `P[nY][nM][nW][nD][T[nH][nM][nS]]` with at least one component.
pub fn is_duration(value: &str) -> bool {
    let Some(rest) = value.strip_prefix('P') else {
        return false;
    };
    if rest.is_empty() {
        return false;
    }
    let (date_part, time_part) = match rest.split_once('T') {
        Some((date, time)) => (date, Some(time)),
        None => (rest, None),
    };
    if time_part.is_some_and(str::is_empty) {
        return false;
    }
    has_components(date_part, &['Y', 'M', 'W', 'D'])
        && time_part.is_none_or(|time| has_components(time, &['H', 'M', 'S']))
}

/// Matches `Rn/<part>[/<part>]` where each part is a duration or a date and
/// at least one part is a duration.
pub fn is_repeating_interval(value: &str) -> bool {
    let mut parts = value.split('/');
    let Some(head) = parts.next() else {
        return false;
    };
    let Some(count) = head.strip_prefix('R') else {
        return false;
    };
    if !count.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let tail: Vec<&str> = parts.collect();
    if tail.is_empty() || tail.len() > 2 {
        return false;
    }
    tail.iter()
        .all(|part| is_duration(part) || is_date_literal(part))
        && tail.iter().any(|part| is_duration(part))
}

/// Checks `<number><designator>` runs with designators in the given order.
fn has_components(part: &str, designators: &[char]) -> bool {
    let mut remaining = designators;
    let mut digits = String::new();
    for c in part.chars() {
        if c.is_ascii_digit() || ((c == '.' || c == ',') && !digits.is_empty()) {
            digits.push(c);
            continue;
        }
        if digits.is_empty() || digits.ends_with(['.', ',']) {
            return false;
        }
        let Some(pos) = remaining.iter().position(|d| *d == c) else {
            return false;
        };
        remaining = &remaining[pos + 1..];
        digits.clear();
    }
    digits.is_empty()
}

/// Records the rejection of a date value and returns the anomaly found.
///
/// The caller omits the field; this function only classifies and warns.
pub fn report_rejected_date(field: &str, value: &str, ctx: &mut TransformContext<'_>) -> Anomaly {
    let anomaly = classify(value);
    let message = match anomaly {
        Anomaly::Frequency => format!(
            "'{value}' is a duration/frequency expression, not a date; field omitted"
        ),
        Anomaly::Unrecognized => {
            format!("'{value}' is not a recognized date form; field omitted")
        }
    };
    ctx.warn(field, anomaly.reason(), message);
    anomaly
}
