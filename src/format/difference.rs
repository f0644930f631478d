use chrono::NaiveDateTime;
use log::debug;

/// Raw date and time numbers. Nothing here is checked against a calendar or a clock,
/// so `month == 0` or `minute == 1624` are representable.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTimeFields {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
}

/// Packs the whole hours, minutes and seconds between `date_one` and `date_two` into
/// the clock fields and zeroes the calendar fields. Every unit is an independent
/// total truncated towards zero, so two hours and five minutes come out as
/// `hour: 2, minute: 125`. The whole days are computed but dropped.
///
/// Known defect kept for compatibility: the result is not a meaningful date-time.
/// A corrected version should return a `chrono::TimeDelta` and replace this function.
pub(crate) fn packed_difference(
    date_one: &NaiveDateTime,
    date_two: &NaiveDateTime,
) -> DateTimeFields {
    let elapsed = date_two.signed_duration_since(*date_one);
    let days = elapsed.num_days();
    debug!("Dropping {days} whole days from the difference of {date_one} and {date_two}");

    DateTimeFields {
        year: 0,
        month: 0,
        day: 0,
        hour: elapsed.num_hours(),
        minute: elapsed.num_minutes(),
        second: elapsed.num_seconds(),
    }
}
