use crate::constants::DEFAULT_PATTERN;
use crate::format::error::DateFormatterError;
use chrono::format::{self, Fixed, Item, Numeric, Pad, ParseErrorKind, ParseResult, Parsed};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use log::debug;
use std::fmt;
use std::fmt::{Display, Write};
use std::iter::Peekable;
use std::str::{Chars, FromStr};

const RESERVED_CHARS: &[char] = &['[', ']', '{', '}', '#'];

/// A date pattern such as `d MMM uuuu`, compiled into chrono format items.
///
/// Letters are pattern fields, text in single quotes is copied verbatim (`''` is a
/// single quote), runs of whitespace match any whitespace when parsing and every other
/// character is a literal.
///
/// Parsing is more lenient than rendering: whitespace runs of any length are accepted
/// wherever the pattern has whitespace or a number, and month and weekday names match
/// regardless of case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeFormat {
    pattern: String,
    items: Vec<Item<'static>>,
}

impl DateTimeFormat {
    pub fn of_pattern(pattern: &str) -> Result<Self, DateFormatterError> {
        if pattern.is_empty() {
            return Err(DateFormatterError::invalid_pattern(pattern, "pattern is empty"));
        }
        let items = compile(pattern)?;
        Ok(Self {
            pattern: pattern.to_string(),
            items,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn format_date(&self, date: &NaiveDate) -> Result<String, DateFormatterError> {
        self.render(date.format_with_items(self.items.iter()), date)
    }

    pub fn format_datetime(&self, datetime: &NaiveDateTime) -> Result<String, DateFormatterError> {
        self.render(datetime.format_with_items(self.items.iter()), datetime)
    }

    /// Parses `text` into a date. The text has to match the whole pattern.
    ///
    /// Two-digit years fall in 2000-2099. A day of month from 29 to 31 that the month
    /// does not have is moved back to the month's last day, so `02-31-2020` with
    /// `MM-dd-uuuu` gives 2020-02-29.
    pub fn parse_date(&self, text: &str) -> Result<NaiveDate, DateFormatterError> {
        let mut parsed = Parsed::new();
        format::parse(&mut parsed, text, self.items.iter())
            .and_then(|_| anchor_two_digit_year(&mut parsed))
            .and_then(|_| resolve_date(&parsed))
            .map_err(|source| {
                debug!("Failed to parse '{text}' with pattern '{}'", self.pattern);
                DateFormatterError::Parse {
                    text: text.to_string(),
                    pattern: self.pattern.clone(),
                    source,
                }
            })
    }

    fn render(
        &self,
        formatted: impl Display,
        value: &impl Display,
    ) -> Result<String, DateFormatterError> {
        let mut rendered = String::new();
        write!(rendered, "{formatted}").map_err(|_| DateFormatterError::UnsupportedField {
            value: value.to_string(),
            pattern: self.pattern.clone(),
        })?;
        Ok(rendered)
    }
}

impl Default for DateTimeFormat {
    fn default() -> Self {
        Self::of_pattern(DEFAULT_PATTERN).expect("DEFAULT_PATTERN compiles")
    }
}

impl FromStr for DateTimeFormat {
    type Err = DateFormatterError;

    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        Self::of_pattern(pattern)
    }
}

impl Display for DateTimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pattern)
    }
}

fn anchor_two_digit_year(parsed: &mut Parsed) -> ParseResult<()> {
    if parsed.year().is_none()
        && parsed.year_div_100().is_none()
        && parsed.year_mod_100().is_some()
    {
        parsed.set_year_div_100(20)?;
    }
    Ok(())
}

fn resolve_date(parsed: &Parsed) -> ParseResult<NaiveDate> {
    parsed.to_naive_date().or_else(|err| {
        if err.kind() != ParseErrorKind::OutOfRange {
            return Err(err);
        }
        let year = parsed
            .year()
            .or_else(|| Some(parsed.year_div_100()? * 100 + parsed.year_mod_100()?));
        let (Some(year), Some(month), Some(day @ 29..=31)) = (year, parsed.month(), parsed.day())
        else {
            return Err(err);
        };
        let last_day = (28..day)
            .rev()
            .find_map(|last| NaiveDate::from_ymd_opt(year, month, last))
            .ok_or(err)?;
        if parsed
            .weekday()
            .is_some_and(|weekday| weekday != last_day.weekday())
        {
            return Err(err);
        }
        debug!("Day {day} does not exist in {year}-{month:02}, using {last_day}");
        Ok(last_day)
    })
}

fn compile(pattern: &str) -> Result<Vec<Item<'static>>, DateFormatterError> {
    let mut items = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\'' => read_quoted(pattern, &mut chars, &mut literal)?,
            c if RESERVED_CHARS.contains(&c) => {
                return Err(DateFormatterError::invalid_pattern(
                    pattern,
                    format!("'{c}' is reserved for future use"),
                ));
            }
            c if c.is_ascii_alphabetic() => {
                let mut count = 1;
                while chars.next_if_eq(&c).is_some() {
                    count += 1;
                }
                flush_literal(&mut items, &mut literal);
                items.push(field_item(pattern, c, count)?);
            }
            c if c.is_whitespace() => {
                flush_literal(&mut items, &mut literal);
                let mut space = String::from(c);
                while let Some(next) = chars.next_if(|next| next.is_whitespace()) {
                    space.push(next);
                }
                items.push(Item::OwnedSpace(space.into_boxed_str()));
            }
            c => literal.push(c),
        }
    }
    flush_literal(&mut items, &mut literal);

    Ok(items)
}

/// Consumes a quoted section. The opening quote has already been read.
fn read_quoted(
    pattern: &str,
    chars: &mut Peekable<Chars<'_>>,
    literal: &mut String,
) -> Result<(), DateFormatterError> {
    if chars.next_if_eq(&'\'').is_some() {
        literal.push('\'');
        return Ok(());
    }
    loop {
        match chars.next() {
            Some('\'') => {
                if chars.next_if_eq(&'\'').is_some() {
                    literal.push('\'');
                } else {
                    return Ok(());
                }
            }
            Some(c) => literal.push(c),
            None => {
                return Err(DateFormatterError::invalid_pattern(
                    pattern,
                    "unterminated quoted literal",
                ));
            }
        }
    }
}

fn flush_literal(items: &mut Vec<Item<'static>>, literal: &mut String) {
    if !literal.is_empty() {
        items.push(Item::OwnedLiteral(std::mem::take(literal).into_boxed_str()));
    }
}

fn field_item(
    pattern: &str,
    letter: char,
    count: usize,
) -> Result<Item<'static>, DateFormatterError> {
    let item = match (letter, count) {
        ('y' | 'u', 1) => Item::Numeric(Numeric::Year, Pad::None),
        ('y' | 'u', 2) => Item::Numeric(Numeric::YearMod100, Pad::Zero),
        ('y' | 'u', _) => Item::Numeric(Numeric::Year, Pad::Zero),
        ('M' | 'L', 1) => Item::Numeric(Numeric::Month, Pad::None),
        ('M' | 'L', 2) => Item::Numeric(Numeric::Month, Pad::Zero),
        ('M' | 'L', 3) => Item::Fixed(Fixed::ShortMonthName),
        ('M' | 'L', 4) => Item::Fixed(Fixed::LongMonthName),
        ('d', 1) => Item::Numeric(Numeric::Day, Pad::None),
        ('d', 2) => Item::Numeric(Numeric::Day, Pad::Zero),
        ('D', 1) => Item::Numeric(Numeric::Ordinal, Pad::None),
        ('D', 3) => Item::Numeric(Numeric::Ordinal, Pad::Zero),
        ('E', 1..=3) => Item::Fixed(Fixed::ShortWeekdayName),
        ('E', 4) => Item::Fixed(Fixed::LongWeekdayName),
        ('a', 1) => Item::Fixed(Fixed::UpperAmPm),
        ('H', 1) => Item::Numeric(Numeric::Hour, Pad::None),
        ('H', 2) => Item::Numeric(Numeric::Hour, Pad::Zero),
        ('h', 1) => Item::Numeric(Numeric::Hour12, Pad::None),
        ('h', 2) => Item::Numeric(Numeric::Hour12, Pad::Zero),
        ('m', 1) => Item::Numeric(Numeric::Minute, Pad::None),
        ('m', 2) => Item::Numeric(Numeric::Minute, Pad::Zero),
        ('s', 1) => Item::Numeric(Numeric::Second, Pad::None),
        ('s', 2) => Item::Numeric(Numeric::Second, Pad::Zero),
        ('n', 1) => Item::Numeric(Numeric::Nanosecond, Pad::None),
        ('y' | 'u' | 'M' | 'L' | 'd' | 'D' | 'E' | 'a' | 'H' | 'h' | 'm' | 's' | 'n', _) => {
            return Err(DateFormatterError::invalid_pattern(
                pattern,
                format!("too many pattern letters: '{}'", letter.to_string().repeat(count)),
            ));
        }
        _ => {
            return Err(DateFormatterError::invalid_pattern(
                pattern,
                format!("unknown pattern letter '{letter}'"),
            ));
        }
    };
    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_suite::{jan_fifteenth, jan_second_afternoon};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("d MMM uuuu", "15 Jan 2023")]
    #[case("dd MMM yyyy", "15 Jan 2023")]
    #[case("MM-dd-uuuu", "01-15-2023")]
    #[case("M/d/yy", "1/15/23")]
    #[case("EEEE, d MMMM uuuu", "Sunday, 15 January 2023")]
    #[case("EEE d.M.u", "Sun 15.1.2023")]
    #[case("uuuu-DDD", "2023-015")]
    #[case("'Day' D 'of' uuuu", "Day 15 of 2023")]
    #[case("d MMM uuuu 'o''clock'", "15 Jan 2023 o'clock")]
    #[case("''d''", "'15'")]
    fn test_format_date(jan_fifteenth: NaiveDate, #[case] pattern: &str, #[case] expected: &str) {
        let format = DateTimeFormat::of_pattern(pattern).unwrap();
        assert_eq!(format.format_date(&jan_fifteenth).unwrap(), expected);
    }

    #[rstest]
    #[case("d MMM uuuu", "2 Jan 2024")]
    #[case("MM-dd-uuuu HH:mm:ss", "01-02-2024 15:04:05")]
    #[case("h:mm a", "3:04 PM")]
    #[case("H:m:s", "15:4:5")]
    fn test_format_datetime(
        jan_second_afternoon: NaiveDateTime,
        #[case] pattern: &str,
        #[case] expected: &str,
    ) {
        let format = DateTimeFormat::of_pattern(pattern).unwrap();
        assert_eq!(format.format_datetime(&jan_second_afternoon).unwrap(), expected);
    }

    #[rstest]
    #[case("HH:mm")]
    #[case("d MMM uuuu a")]
    fn test_format_date_unsupported_field(jan_fifteenth: NaiveDate, #[case] pattern: &str) {
        let format = DateTimeFormat::of_pattern(pattern).unwrap();
        let err = format.format_date(&jan_fifteenth).unwrap_err();
        assert!(matches!(err, DateFormatterError::UnsupportedField { .. }));
    }

    #[rstest]
    #[case("d MMM uuuu", "3 Jan 2024", NaiveDate::from_ymd_opt(2024, 1, 3).unwrap())]
    #[case("d MMM uuuu", "15  Jan 2023", NaiveDate::from_ymd_opt(2023, 1, 15).unwrap())]
    #[case("MM-dd-uuuu", "01-15-2023", NaiveDate::from_ymd_opt(2023, 1, 15).unwrap())]
    #[case("MM/dd/uuuu", "12/31/1999", NaiveDate::from_ymd_opt(1999, 12, 31).unwrap())]
    #[case("d MMMM uuuu", "4 September 2025", NaiveDate::from_ymd_opt(2025, 9, 4).unwrap())]
    #[case("d MMMM uuuu", "4 Sep 2025", NaiveDate::from_ymd_opt(2025, 9, 4).unwrap())]
    #[case("d MMM uuuu", "15 jan 2023", NaiveDate::from_ymd_opt(2023, 1, 15).unwrap())]
    #[case("M/d/yy", "1/15/23", NaiveDate::from_ymd_opt(2023, 1, 15).unwrap())]
    #[case("M/d/yy", "1/15/85", NaiveDate::from_ymd_opt(2085, 1, 15).unwrap())]
    #[case("M/d/yy", "12/31/00", NaiveDate::from_ymd_opt(2000, 12, 31).unwrap())]
    fn test_parse_date(#[case] pattern: &str, #[case] text: &str, #[case] expected: NaiveDate) {
        let format = DateTimeFormat::of_pattern(pattern).unwrap();
        assert_eq!(format.parse_date(text).unwrap(), expected);
    }

    #[rstest]
    #[case("MM/dd/uuuu", "01-15-2023")]
    #[case("d MMM uuuu", "01-15-2023")]
    #[case("MM-dd-uuuu", "02-32-2020")]
    #[case("EEE MM-dd-uuuu", "Fri 02-31-2020")]
    #[case("MM-dd", "01-15")]
    #[case("MM-dd-uuuu", "01-15-2023 trailing")]
    fn test_parse_date_fail(#[case] pattern: &str, #[case] text: &str) {
        let format = DateTimeFormat::of_pattern(pattern).unwrap();
        let err = format.parse_date(text).unwrap_err();
        match err {
            DateFormatterError::Parse {
                text: failed_text,
                pattern: failed_pattern,
                ..
            } => {
                assert_eq!(failed_text, text);
                assert_eq!(failed_pattern, pattern);
            }
            other => panic!("Expected a parse error, got {other:?}"),
        }
    }

    #[rstest]
    #[case("MM-dd-uuuu", "02-31-2020", NaiveDate::from_ymd_opt(2020, 2, 29).unwrap())]
    #[case("MM-dd-uuuu", "02-30-2021", NaiveDate::from_ymd_opt(2021, 2, 28).unwrap())]
    #[case("MM-dd-uuuu", "04-31-2022", NaiveDate::from_ymd_opt(2022, 4, 30).unwrap())]
    #[case("MM/dd/yy", "02/29/23", NaiveDate::from_ymd_opt(2023, 2, 28).unwrap())]
    #[case("EEE MM-dd-uuuu", "Sat 02-31-2020", NaiveDate::from_ymd_opt(2020, 2, 29).unwrap())]
    fn test_parse_date_moves_overflowing_day_to_month_end(
        #[case] pattern: &str,
        #[case] text: &str,
        #[case] expected: NaiveDate,
    ) {
        let format = DateTimeFormat::of_pattern(pattern).unwrap();
        assert_eq!(format.parse_date(text).unwrap(), expected);
    }

    #[rstest]
    #[case("", "pattern is empty")]
    #[case("d MMM 'uuuu", "unterminated quoted literal")]
    #[case("d MMM uuuu Q", "unknown pattern letter 'Q'")]
    #[case("ddd MMM uuuu", "too many pattern letters: 'ddd'")]
    #[case("MMMMM", "too many pattern letters: 'MMMMM'")]
    #[case("uuuu-DD", "too many pattern letters: 'DD'")]
    #[case("[d MMM] uuuu", "'[' is reserved for future use")]
    fn test_of_pattern_invalid(#[case] pattern: &str, #[case] reason: &str) {
        let err = DateTimeFormat::of_pattern(pattern).unwrap_err();
        assert_eq!(err, DateFormatterError::invalid_pattern(pattern, reason));
    }

    #[rstest]
    fn test_default_and_from_str() {
        let default = DateTimeFormat::default();
        assert_eq!(default.pattern(), DEFAULT_PATTERN);
        assert_eq!(default.to_string(), DEFAULT_PATTERN);
        assert_eq!("d MMM uuuu".parse::<DateTimeFormat>().unwrap(), default);
    }
}
