use chrono::format::ParseError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateFormatterError {
    #[error("{0}")]
    InvalidArgument(String),
    /// Only raised by [`crate::DateFormatter::set_formatter`]; kept apart from
    /// `InvalidArgument` so callers can tell a missing formatter from a bad argument.
    #[error("{0}")]
    NullReference(String),
    #[error("Text '{text}' could not be parsed with pattern '{pattern}': {source}")]
    Parse {
        text: String,
        pattern: String,
        source: ParseError,
    },
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
    #[error("Unable to format '{value}' with pattern '{pattern}', it lacks a field the pattern uses")]
    UnsupportedField { value: String, pattern: String },
}

impl DateFormatterError {
    pub(crate) fn invalid_pattern(pattern: &str, reason: impl Into<String>) -> Self {
        DateFormatterError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }
}
