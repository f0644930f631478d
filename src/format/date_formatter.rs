use crate::constants::DEFAULT_PATTERN;
use crate::format::date_time_format::DateTimeFormat;
use crate::format::difference::{DateTimeFields, packed_difference};
use crate::format::error::DateFormatterError;
use crate::validation::DateValidator;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use log::debug;

const MISSING_VALIDATOR: &str = "A date validator object must be provided!";
const MISSING_PATTERN: &str = "You must provide a formatting pattern!";
const MISSING_FORMATTER: &str = "Formatter object cannot be null!";
const INVALID_DATE: &str = "The date provided is not valid!";

/// Converts between strings and `NaiveDate`/`NaiveDateTime` values.
///
/// The pattern string and the compiled formatter are two separate fields.
/// [`DateFormatter::set_pattern`] only replaces the string; rendering and parsing keep
/// using the current formatter until [`DateFormatter::set_formatter`] is called.
///
/// Strings are checked by the [`DateValidator`] before they are parsed. The validator
/// has its own fixed notion of a date (`MM-DD-YYYY`), unrelated to the pattern, so
/// with the default `d MMM uuuu` pattern every parse is rejected by the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormatter {
    formatter: DateTimeFormat,
    validator: DateValidator,
    pattern: String,
}

impl DateFormatter {
    pub fn new(validator: impl Into<Option<DateValidator>>) -> Result<Self, DateFormatterError> {
        let formatter = DateTimeFormat::of_pattern(DEFAULT_PATTERN)?;
        let validator = require_validator(validator.into())?;
        Ok(Self {
            formatter,
            validator,
            pattern: DEFAULT_PATTERN.to_string(),
        })
    }

    /// Builds the formatter from `pattern`. The pattern field itself keeps
    /// [`DEFAULT_PATTERN`] until [`DateFormatter::set_pattern`] is called.
    pub fn with_pattern<'a>(
        pattern: impl Into<Option<&'a str>>,
        validator: impl Into<Option<DateValidator>>,
    ) -> Result<Self, DateFormatterError> {
        let pattern = require_pattern(pattern.into())?;
        let formatter = DateTimeFormat::of_pattern(pattern)?;
        let validator = require_validator(validator.into())?;
        Ok(Self {
            formatter,
            validator,
            pattern: DEFAULT_PATTERN.to_string(),
        })
    }

    pub fn validator(&self) -> &DateValidator {
        &self.validator
    }

    pub fn set_validator(
        &mut self,
        validator: impl Into<Option<DateValidator>>,
    ) -> Result<(), DateFormatterError> {
        self.validator = require_validator(validator.into())?;
        Ok(())
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn set_pattern<'a>(
        &mut self,
        pattern: impl Into<Option<&'a str>>,
    ) -> Result<(), DateFormatterError> {
        let pattern = require_pattern(pattern.into())?;
        if pattern != self.formatter.pattern() {
            debug!(
                "Pattern set to '{pattern}', formatter still renders with '{}'",
                self.formatter.pattern()
            );
        }
        self.pattern = pattern.to_string();
        Ok(())
    }

    pub fn formatter(&self) -> &DateTimeFormat {
        &self.formatter
    }

    pub fn set_formatter(
        &mut self,
        formatter: impl Into<Option<DateTimeFormat>>,
    ) -> Result<(), DateFormatterError> {
        match formatter.into() {
            Some(formatter) => {
                self.formatter = formatter;
                Ok(())
            }
            None => Err(DateFormatterError::NullReference(
                MISSING_FORMATTER.to_string(),
            )),
        }
    }

    pub fn date_to_string(&self, date: &NaiveDate) -> Result<String, DateFormatterError> {
        self.formatter.format_date(date)
    }

    pub fn datetime_to_string(
        &self,
        datetime: &NaiveDateTime,
    ) -> Result<String, DateFormatterError> {
        self.formatter.format_datetime(datetime)
    }

    /// KNOWN DEFECT: `_pattern` is ignored and `date` is rendered with the current
    /// formatter, exactly like [`DateFormatter::date_to_string`]. Existing callers rely
    /// on this, so it stays until they are migrated.
    pub fn date_to_string_with_pattern(
        &self,
        date: &NaiveDate,
        _pattern: &str,
    ) -> Result<String, DateFormatterError> {
        self.formatter.format_date(date)
    }

    pub fn datetime_to_date(&self, datetime: &NaiveDateTime) -> NaiveDate {
        datetime.date()
    }

    /// Midnight of `date`.
    pub fn date_to_datetime(&self, date: &NaiveDate) -> NaiveDateTime {
        date.and_time(NaiveTime::MIN)
    }

    /// Checks `date` with the validator, then parses it with the current formatter.
    ///
    /// # Errors
    ///
    /// [`DateFormatterError::InvalidArgument`] when the validator rejects the text and
    /// [`DateFormatterError::Parse`] when it passes validation but does not match the
    /// formatter's pattern.
    pub fn parse_date<'a>(
        &self,
        date: impl Into<Option<&'a str>>,
    ) -> Result<NaiveDate, DateFormatterError> {
        match date.into() {
            Some(text) if self.validator.is_date_valid(text) => self.formatter.parse_date(text),
            rejected => {
                debug!("Validator rejected {rejected:?}");
                Err(DateFormatterError::InvalidArgument(INVALID_DATE.to_string()))
            }
        }
    }

    /// See [`DateTimeFields`]: the result packs total hours, minutes and seconds into
    /// the clock fields, leaves year, month and day at zero and drops the day count.
    pub fn date_difference(
        &self,
        date_one: &NaiveDateTime,
        date_two: &NaiveDateTime,
    ) -> DateTimeFields {
        packed_difference(date_one, date_two)
    }
}

fn require_validator(
    validator: Option<DateValidator>,
) -> Result<DateValidator, DateFormatterError> {
    validator.ok_or_else(|| DateFormatterError::InvalidArgument(MISSING_VALIDATOR.to_string()))
}

fn require_pattern(pattern: Option<&str>) -> Result<&str, DateFormatterError> {
    match pattern {
        Some(pattern) if !pattern.is_empty() => Ok(pattern),
        _ => Err(DateFormatterError::InvalidArgument(
            MISSING_PATTERN.to_string(),
        )),
    }
}
