use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_IN_WEEK, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MONTHS_PER_YEAR,
};
use crate::ParseError;
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// A day of the week, encoded `0 = Sunday ..= 6 = Saturday`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum DayOfWeek {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl DayOfWeek {
    /// All days in encoding order, Sunday first.
    pub const ALL: [Self; DAYS_IN_WEEK] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Creates a day of week from its `0..=6` index
    ///
    /// # Errors
    /// Returns `ParseError::InvalidWeekday` if the value is greater than 6.
    pub fn from_index(value: u8) -> Result<Self, ParseError> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(ParseError::InvalidWeekday(value))
    }

    /// Returns the `0..=6` index (Sunday is 0)
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The day `n` days after this one (negative `n` moves backwards).
    pub fn offset(self, n: i64) -> Self {
        let idx = (i64::from(self.index()) + n).rem_euclid(DAYS_IN_WEEK as i64);
        // rem_euclid keeps idx in 0..7
        Self::ALL[idx as usize]
    }

    pub fn next(self) -> Self {
        self.offset(1)
    }

    pub fn previous(self) -> Self {
        self.offset(-1)
    }

    /// Days to move forward from `self` to reach `target`, in `0..7`.
    pub fn days_until(self, target: Self) -> i64 {
        (i64::from(target.index()) - i64::from(self.index())).rem_euclid(DAYS_IN_WEEK as i64)
    }
}

impl TryFrom<u8> for DayOfWeek {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(value)
    }
}

impl From<DayOfWeek> for u8 {
    fn from(day: DayOfWeek) -> Self {
        day.index()
    }
}

impl From<chrono::Weekday> for DayOfWeek {
    fn from(weekday: chrono::Weekday) -> Self {
        // num_days_from_sunday is always 0..=6
        Self::ALL[weekday.num_days_from_sunday() as usize]
    }
}

impl From<DayOfWeek> for chrono::Weekday {
    fn from(day: DayOfWeek) -> Self {
        match day {
            DayOfWeek::Sunday => Self::Sun,
            DayOfWeek::Monday => Self::Mon,
            DayOfWeek::Tuesday => Self::Tue,
            DayOfWeek::Wednesday => Self::Wed,
            DayOfWeek::Thursday => Self::Thu,
            DayOfWeek::Friday => Self::Fri,
            DayOfWeek::Saturday => Self::Sat,
        }
    }
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` (1-based) of `year`, or `None` when `month` is not in `1..=12`.
pub const fn days_in_month(year: i32, month: u32) -> Option<u32> {
    if month == 0 || month > MONTHS_PER_YEAR {
        None
    } else if month == FEBRUARY && is_leap_year(year) {
        Some(FEBRUARY_DAYS_LEAP)
    } else {
        Some(DAYS_IN_MONTH[month as usize])
    }
}
