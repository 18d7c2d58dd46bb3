use std::result::Result as StdResult;

use thiserror::Error;

/// A date token that matched none of the accepted formats.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized date `{0}`")]
pub struct DateFormatError(pub String);

/// Malformed command text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected at least {expected} fields, found {found}")]
    MissingFields { expected: usize, found: usize },
    #[error("invalid amount `{0}`")]
    InvalidAmount(String),
    #[error("invalid index `{0}`")]
    InvalidIndex(String),
    #[error(transparent)]
    Date(#[from] DateFormatError),
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
}

/// Unrecognized report period syntax or bad range.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PeriodError {
    #[error("unknown period `{0}`")]
    UnknownPeriod(String),
    #[error("unknown month `{0}`")]
    UnknownMonth(String),
    #[error("invalid date range `{0}`")]
    InvalidRange(String),
}

/// Persistence failure from the ledger store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("index {index} out of bounds (1..={len})")]
    OutOfBounds { index: usize, len: usize },
}

/// Configuration file failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Unified error type the dispatcher converts into guidance replies.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Period(#[from] PeriodError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T> = StdResult<T, EngineError>;

impl From<DateFormatError> for EngineError {
    fn from(err: DateFormatError) -> Self {
        EngineError::Parse(ParseError::Date(err))
    }
}
