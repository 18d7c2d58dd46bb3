//! Date token resolution for user-supplied dates.
//!
//! Tokens are tried against a fixed list of formats, first match wins. All
//! formats resolve to midnight of the parsed day; the "no token supplied"
//! case is the caller's responsibility (it uses its reference clock
//! directly) and never reaches this module.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;

use crate::errors::DateFormatError;

/// French month names mapped to month numbers. Unaccented spellings are
/// accepted because chat keyboards frequently drop diacritics.
static MONTHS: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    HashMap::from([
        ("janvier", 1),
        ("février", 2),
        ("fevrier", 2),
        ("mars", 3),
        ("avril", 4),
        ("mai", 5),
        ("juin", 6),
        ("juillet", 7),
        ("août", 8),
        ("aout", 8),
        ("septembre", 9),
        ("octobre", 10),
        ("novembre", 11),
        ("décembre", 12),
        ("decembre", 12),
    ])
});

/// Looks up a localized month name, case-insensitively.
pub fn month_number(name: &str) -> Option<u32> {
    MONTHS.get(name.trim().to_lowercase().as_str()).copied()
}

/// Resolves a date token against the accepted formats, in priority order:
/// `YYYY-MM-DD`, `DD <month name> YYYY`, `DD/MM/YYYY`, `YYYY/MM/DD`.
pub fn resolve(token: &str) -> Result<NaiveDateTime, DateFormatError> {
    let token = token.trim();

    if let Ok(date) = NaiveDate::parse_from_str(token, "%Y-%m-%d") {
        return Ok(midnight(date));
    }
    if let Some(date) = parse_with_month_name(token) {
        return Ok(midnight(date));
    }
    if let Ok(date) = NaiveDate::parse_from_str(token, "%d/%m/%Y") {
        return Ok(midnight(date));
    }
    if let Ok(date) = NaiveDate::parse_from_str(token, "%Y/%m/%d") {
        return Ok(midnight(date));
    }

    Err(DateFormatError(token.to_string()))
}

fn parse_with_month_name(token: &str) -> Option<NaiveDate> {
    let mut parts = token.split_whitespace();
    let day: u32 = parts.next()?.parse().ok()?;
    let month = month_number(parts.next()?)?;
    let year: i32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(0, 0, 0).expect("midnight is always valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn resolves_iso_date() {
        let resolved = resolve("2025-04-15").expect("iso date");
        assert_eq!(
            (resolved.year(), resolved.month(), resolved.day()),
            (2025, 4, 15)
        );
        assert_eq!(resolved.hour(), 0);
    }

    #[test]
    fn resolves_french_month_name() {
        let resolved = resolve("15 avril 2025").expect("month name date");
        assert_eq!(resolved.date(), NaiveDate::from_ymd_opt(2025, 4, 15).unwrap());
    }

    #[test]
    fn resolves_unaccented_month_name() {
        let resolved = resolve("1 fevrier 2025").expect("unaccented month");
        assert_eq!(resolved.month(), 2);
    }

    #[test]
    fn resolves_slash_formats() {
        let fr = resolve("15/04/2025").expect("DD/MM/YYYY");
        let iso = resolve("2025/04/15").expect("YYYY/MM/DD");
        assert_eq!(fr, iso);
    }

    #[test]
    fn iso_format_wins_over_slash_formats() {
        // An unambiguous token only matches one format anyway; this pins the
        // priority for tokens that are valid in several.
        let resolved = resolve("2025-04-15").unwrap();
        assert_eq!(resolved.day(), 15);
    }

    #[test]
    fn rejects_unknown_token() {
        let err = resolve("hier").unwrap_err();
        assert_eq!(err, DateFormatError("hier".into()));
    }

    #[test]
    fn rejects_impossible_calendar_date() {
        assert!(resolve("31 février 2025").is_err());
        assert!(resolve("2025-02-31").is_err());
    }

    #[test]
    fn month_table_covers_the_year() {
        for name in ["janvier", "juin", "décembre"] {
            assert!(month_number(name).is_some(), "missing {name}");
        }
        assert_eq!(month_number("AVRIL"), Some(4));
        assert_eq!(month_number("smarch"), None);
    }
}
