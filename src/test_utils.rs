//! Shared constructors for unit tests.

use crate::CalendarDate;

/// Parses a canonical date, panicking on bad fixtures.
pub fn date(s: &str) -> CalendarDate {
    s.parse()
        .unwrap_or_else(|err| panic!("bad test date {s:?}: {err}"))
}

/// Builds a date from a zero-based month index.
pub fn ymd(year: i32, month_index: u32, day: u32) -> CalendarDate {
    CalendarDate::from_parts(year, month_index, day)
        .unwrap_or_else(|err| panic!("bad test date {year}/{month_index}/{day}: {err}"))
}
