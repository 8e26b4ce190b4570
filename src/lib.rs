//! Calendar dates without time-of-day or zone state.
//!
//! [`CalendarDate`] is parsed from and rendered to the canonical `YYYY-MM-DD` form. Arithmetic,
//! weekday searches and calendar grids are pure transformations on the civil calendar; only
//! [`CalendarDate::today`], [`CalendarDate::start_of_day`] and [`CalendarDate::format_in`]
//! consult a [`Zone`].

mod arith;
mod calendar;
pub mod compare;
mod consts;
mod grid;
mod prelude;
pub mod range;
#[cfg(test)]
mod test_utils;
mod types;
mod weekday;
mod zone;

pub use calendar::{Calendar, CalendarOptions};
pub use consts::*;
pub use grid::MonthSpan;
pub use range::{DateLike, DayIter, RangeError};
pub use types::{DayOfWeek, days_in_month, is_leap_year};
pub use zone::{Clock, FixedClock, SystemClock, Zone};

use crate::prelude::*;
use chrono::{Datelike, NaiveDate};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

/// A real proleptic Gregorian calendar date between `0000-01-01` and `9999-12-31`.
///
/// Values are immutable; every operation returns a new date. Equality and ordering follow
/// `(year, month, day)`, which matches the ordering of the canonical strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "_0.year()", "_0.month()", "_0.day()")]
pub struct CalendarDate(NaiveDate);

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    /// The input is not shaped like `YYYY-MM-DD`
    #[display(fmt = "Invalid date format: {_0:?} (expected YYYY-MM-DD)")]
    InvalidFormat(String),
    /// The input is well-formed but names a date that does not exist
    #[display(fmt = "Invalid date: {year:04}-{month:02}-{day:02} does not exist")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[display(fmt = "Invalid day of week: {_0} (must be 0-6)")]
    InvalidWeekday(u8),
    #[display(fmt = "Unknown time zone: {_0}")]
    UnknownZone(String),
}

impl std::error::Error for ParseError {}

impl ParseError {
    /// True when the input had the wrong shape
    pub const fn is_format_error(&self) -> bool {
        matches!(self, Self::InvalidFormat(_))
    }

    /// True when the input had the right shape but is not a real calendar date
    pub const fn is_invalid_date(&self) -> bool {
        matches!(self, Self::InvalidDate { .. })
    }
}

/// Errors from arithmetic and zone-aware operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// The result would fall outside the representable years.
    #[error(
        "Date out of range: {0} (supported years are {min:04}-{max:04})",
        min = MIN_YEAR,
        max = MAX_YEAR
    )]
    OutOfRange(String),

    #[error("Invalid format pattern: {0:?}")]
    InvalidPattern(String),

    /// Every local time of the day was skipped by a zone transition.
    #[error("Date {date} does not exist in time zone {zone}")]
    NonexistentLocalDate { date: CalendarDate, zone: String },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[allow(clippy::expect_used)]
static CANONICAL_FORM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").expect("canonical date pattern compiles")
});

impl CalendarDate {
    /// Creates a date from a year, a zero-based month index (0 = January) and a day of month.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDate` if the components do not name a real date in
    /// `0000..=9999`.
    pub fn from_parts(year: i32, month_index: u32, day: u32) -> Result<Self, ParseError> {
        let month = month_index.saturating_add(1);
        Self::validate(year, month, day).map(Self)
    }

    /// Returns true iff `s` parses and re-serializes to exactly the same text.
    pub fn is_valid(s: &str) -> bool {
        s.parse::<Self>().is_ok_and(|date| date.to_string() == s)
    }

    /// The canonical `YYYY-MM-DD` form
    pub fn canonical(&self) -> String {
        self.to_string()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month of year, 1-based
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Month of year, 0-based (0 = January)
    pub fn month_index(&self) -> u32 {
        self.0.month0()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Number of days in this date's month
    pub fn days_in_month(&self) -> u32 {
        // month() is always 1..=12
        days_in_month(self.year(), self.month()).unwrap_or_default()
    }

    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year())
    }

    /// The underlying chrono date
    pub const fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Wraps a chrono date, rejecting years the canonical form cannot carry.
    pub(crate) fn from_naive(date: NaiveDate) -> Result<Self, DateError> {
        if (MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
            Ok(Self(date))
        } else {
            Err(DateError::OutOfRange(date.to_string()))
        }
    }

    /// The single validity gate shared by every construction route.
    fn validate(year: i32, month: u32, day: u32) -> Result<NaiveDate, ParseError> {
        let invalid = || ParseError::InvalidDate { year, month, day };
        let max_day = days_in_month(year, month).ok_or_else(invalid)?;
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) || !(MIN_DAY..=max_day).contains(&day) {
            return Err(invalid());
        }
        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
    }

    /// Helper to parse a numeric field with better error messages
    fn parse_field<T: FromStr>(input: &str, field: &str) -> Result<T, ParseError> {
        field
            .parse::<T>()
            .map_err(|_| ParseError::InvalidFormat(input.to_owned()))
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(caps) = CANONICAL_FORM.captures(s) else {
            debug!("rejecting {s:?}: not shaped like YYYY-MM-DD");
            return Err(ParseError::InvalidFormat(s.to_owned()));
        };

        let year = Self::parse_field::<i32>(s, &caps[1])?;
        let month = Self::parse_field::<u32>(s, &caps[2])?;
        let day = Self::parse_field::<u32>(s, &caps[3])?;

        Self::validate(year, month, day).map(Self).inspect_err(|err| {
            debug!("rejecting {s:?}: {err}");
        })
    }
}

impl TryFrom<&str> for CalendarDate {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = DateError;

    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_naive(value)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
