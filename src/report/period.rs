//! Period specifications and the subset of the ledger they select.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

use crate::dates::month_number;
use crate::errors::PeriodError;
use crate::ledger::Expense;

type Result<T> = std::result::Result<T, PeriodError>;

/// Computes the records matched by a period specification.
///
/// A valid period with zero matches is `Ok(vec![])`, never an error; the
/// caller can always tell "empty" from "invalid".
pub fn filter(period: &str, ledger: &[Expense], now: NaiveDateTime) -> Result<Vec<Expense>> {
    let period = period.trim();
    let (head, rest) = match period.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (period, ""),
    };

    match head {
        "semaine" if rest.is_empty() => Ok(this_week(ledger, now)),
        "mois" => by_month(rest, ledger, now),
        "date" => by_range(rest, ledger),
        _ => Err(PeriodError::UnknownPeriod(period.to_string())),
    }
}

/// Everything on or after the Monday of the current week. The bound keeps
/// the time-of-day of `now`; it is deliberately not normalized to midnight.
fn this_week(ledger: &[Expense], now: NaiveDateTime) -> Vec<Expense> {
    let monday = now - Duration::days(i64::from(now.weekday().num_days_from_monday()));
    ledger
        .iter()
        .filter(|e| e.date >= monday)
        .cloned()
        .collect()
}

/// Month selection, either numeric (`2025-04`, `2025/04`) or a localized
/// month name resolved against the current year. Matching is a string
/// prefix test on the record's ISO date.
fn by_month(spec: &str, ledger: &[Expense], now: NaiveDateTime) -> Result<Vec<Expense>> {
    let key = month_key(spec, now)?;
    Ok(ledger
        .iter()
        .filter(|e| e.month_key() == key)
        .cloned()
        .collect())
}

fn month_key(spec: &str, now: NaiveDateTime) -> Result<String> {
    if let Some(numeric) = numeric_month(spec) {
        return Ok(numeric);
    }
    match month_number(spec) {
        Some(month) => Ok(format!("{}-{:02}", now.year(), month)),
        None => Err(PeriodError::UnknownMonth(spec.to_string())),
    }
}

/// Accepts `YYYY-MM` and `YYYY/MM`, normalized to `YYYY-MM`.
fn numeric_month(spec: &str) -> Option<String> {
    let bytes = spec.as_bytes();
    if bytes.len() != 7 || !matches!(bytes[4], b'-' | b'/') {
        return None;
    }
    let (year, month) = (&spec[..4], &spec[5..]);
    if !year.bytes().all(|b| b.is_ascii_digit()) || !month.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(format!("{year}-{month}"))
}

/// Explicit range: `<start> à <end>`, both bounds ISO date-times, match
/// inclusive on both ends. A bare date bound resolves to midnight.
fn by_range(spec: &str, ledger: &[Expense]) -> Result<Vec<Expense>> {
    let (start_raw, end_raw) = spec
        .split_once(" à ")
        .ok_or_else(|| PeriodError::InvalidRange(spec.to_string()))?;
    let start = parse_bound(start_raw)?;
    let end = parse_bound(end_raw)?;
    Ok(ledger
        .iter()
        .filter(|e| e.date >= start && e.date <= end)
        .cloned()
        .collect())
}

fn parse_bound(raw: &str) -> Result<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(PeriodError::InvalidRange(raw.to_string()));
    }
    // Period strings reach this point lowercased, so the ISO `T` separator
    // may arrive as `t`.
    let datetime = raw.replacen('t', "T", 1);
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(bound) = NaiveDateTime::parse_from_str(&datetime, format) {
            return Ok(bound);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|d| d.and_hms_opt(0, 0, 0).expect("midnight is always valid"))
        .map_err(|_| PeriodError::InvalidRange(raw.to_string()))
}
