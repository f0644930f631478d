use crate::constants::DATE_REGEX;
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DATE_REGEX).expect("DATE_REGEX is a valid regular expression"));

/// Lexical check of a date string against the fixed `MM-DD-YYYY` shape.
///
/// The check knows nothing about calendars: `02/31/2020` is accepted, and so is
/// `01-15/2023`, because each separator is matched on its own. This is independent
/// of whatever pattern a [`crate::DateFormatter`] is configured with.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DateValidator;

impl DateValidator {
    pub fn new() -> Self {
        Self
    }

    /// Returns `false` for `None`, the empty string and anything not fully matching
    /// [`DATE_REGEX`]. Never fails.
    pub fn is_date_valid<'a>(&self, date: impl Into<Option<&'a str>>) -> bool {
        match date.into() {
            Some(date) if !date.is_empty() => {
                let is_valid = DATE_PATTERN.is_match(date);
                if !is_valid {
                    debug!("'{date}' does not match {DATE_REGEX}");
                }
                is_valid
            }
            _ => false,
        }
    }
}
