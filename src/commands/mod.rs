//! Classification of inbound chat lines into typed commands.

use chrono::NaiveDateTime;

use crate::dates;
use crate::errors::ParseError;

/// Currency suffixes stripped from amount fields, tried in order.
const CURRENCY_SUFFIXES: [&str; 4] = ["fcfa", "cfa", "eur", "€"];

/// Keywords the dispatcher can suggest when a line matches nothing.
pub const KEYWORDS: [&str; 10] = [
    "bonjour",
    "hello",
    "hi",
    "liste",
    "total",
    "annuler",
    "dépense:",
    "supprimer",
    "modifier",
    "rapport",
];

/// A fully-validated inbound command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Greeting,
    ListRecent,
    Total,
    Cancel,
    Add {
        description: String,
        amount: f64,
        category: Option<String>,
        date: NaiveDateTime,
    },
    Delete {
        index: usize,
    },
    Modify {
        index: usize,
        amount: Option<f64>,
        category: Option<String>,
    },
    Report {
        period: String,
    },
}

/// Parses one chat line. Keywords match case-insensitively; `now` supplies
/// the timestamp for expenses recorded without an explicit date.
pub fn parse(line: &str, now: NaiveDateTime) -> Result<Command, ParseError> {
    let line = line.trim();
    let lower = line.to_lowercase();

    match lower.as_str() {
        "bonjour" | "hello" | "hi" => return Ok(Command::Greeting),
        "liste" => return Ok(Command::ListRecent),
        "total" => return Ok(Command::Total),
        "annuler" => return Ok(Command::Cancel),
        _ => {}
    }

    // `depense:` is accepted alongside the accented form; chat keyboards
    // often drop diacritics.
    if let Some(rest) = strip_prefix_ci(line, "dépense:").or_else(|| strip_prefix_ci(line, "depense:")) {
        return parse_add(rest, now);
    }
    if let Some(rest) = strip_prefix_ci(line, "supprimer") {
        return Ok(Command::Delete {
            index: parse_index(rest)?,
        });
    }
    if let Some(rest) = strip_prefix_ci(line, "modifier") {
        return parse_modify(rest);
    }
    if let Some(rest) = strip_prefix_ci(line, "rapport") {
        return Ok(Command::Report {
            period: rest.trim().to_lowercase(),
        });
    }

    Err(ParseError::UnknownCommand(line.to_string()))
}

fn parse_add(rest: &str, now: NaiveDateTime) -> Result<Command, ParseError> {
    let parts = split_fields(rest, 4);
    if parts.len() < 2 {
        return Err(ParseError::MissingFields {
            expected: 2,
            found: parts.len(),
        });
    }

    let description = parts[0];
    if description.is_empty() {
        return Err(ParseError::MissingFields {
            expected: 2,
            found: 1,
        });
    }
    let amount = parse_amount(parts[1])?;
    let category = parts
        .get(2)
        .map(|c| c.to_string())
        .filter(|c| !c.is_empty());
    let date = match parts.get(3).filter(|token| !token.is_empty()) {
        Some(token) => dates::resolve(token)?,
        None => now,
    };

    Ok(Command::Add {
        description: description.to_string(),
        amount,
        category,
        date,
    })
}

fn parse_modify(rest: &str) -> Result<Command, ParseError> {
    let parts = split_fields(rest, 3);
    let index = parse_index(parts[0])?;
    let amount = match parts.get(1).filter(|raw| !raw.is_empty()) {
        Some(raw) => Some(parse_amount(raw)?),
        None => None,
    };
    let category = parts
        .get(2)
        .map(|c| c.to_string())
        .filter(|c| !c.is_empty());

    Ok(Command::Modify {
        index,
        amount,
        category,
    })
}

fn parse_index(raw: &str) -> Result<usize, ParseError> {
    let raw = raw.trim();
    match raw.parse::<usize>() {
        Ok(index) if index >= 1 => Ok(index),
        _ => Err(ParseError::InvalidIndex(raw.to_string())),
    }
}

/// Parses a decimal amount, stripping a known currency suffix and accepting
/// the French comma decimal separator.
fn parse_amount(raw: &str) -> Result<f64, ParseError> {
    let mut value = raw.trim();
    let lower = value.to_lowercase();
    // Suffix stripping slices by byte length, valid only while lowercasing
    // did not change the length.
    if lower.len() == value.len() {
        for suffix in CURRENCY_SUFFIXES {
            if lower.ends_with(suffix) {
                value = value[..value.len() - suffix.len()].trim_end();
                break;
            }
        }
    }
    value
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidAmount(raw.trim().to_string()))
}

/// Splits a command remainder into at most `limit` fields. Only a `-` with
/// whitespace on both sides delimits fields, so a sign (`-12,99`) and the
/// hyphens inside a date token (`2025-04-15`) stay within their field.
fn split_fields(rest: &str, limit: usize) -> Vec<&str> {
    let bytes = rest.as_bytes();
    let mut fields = Vec::new();
    let mut start = 0;
    for i in 0..bytes.len() {
        if fields.len() + 1 == limit {
            break;
        }
        if bytes[i] == b'-'
            && i > 0
            && bytes[i - 1].is_ascii_whitespace()
            && bytes.get(i + 1).is_some_and(|b| b.is_ascii_whitespace())
        {
            fields.push(rest[start..i].trim());
            start = i + 1;
        }
    }
    fields.push(rest[start..].trim());
    fields
}

/// Strips `prefix` from the start of `line`, comparing case-insensitively.
fn strip_prefix_ci<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let mut rest = line;
    for expected in prefix.chars() {
        let mut chars = rest.chars();
        let actual = chars.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
        rest = chars.as_str();
    }
    Some(rest)
}
