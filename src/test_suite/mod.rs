pub(crate) mod config;

use crate::{DateFormatter, DateValidator};
use chrono::{NaiveDate, NaiveDateTime};
use rstest::fixture;

#[fixture]
pub(crate) fn validator() -> DateValidator {
    DateValidator::new()
}

#[fixture]
pub(crate) fn default_formatter(validator: DateValidator) -> DateFormatter {
    DateFormatter::new(validator).expect("default formatter should build")
}

#[fixture]
pub(crate) fn us_formatter(validator: DateValidator) -> DateFormatter {
    DateFormatter::with_pattern("MM-dd-uuuu", validator).expect("MM-dd-uuuu should compile")
}

#[fixture]
pub(crate) fn jan_fifteenth() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 15).unwrap()
}

#[fixture]
pub(crate) fn jan_second_afternoon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_hms_opt(15, 4, 5)
        .unwrap()
}
