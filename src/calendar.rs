use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::range::DateLike;
use crate::{CalendarDate, Clock, DateError, DayOfWeek, MonthSpan, SystemClock, Zone};

/// Caller preferences for zone-aware and week-based operations.
///
/// Missing fields deserialize to the defaults: the local zone and Sunday-first weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarOptions {
    pub zone:       Zone,
    pub week_start: DayOfWeek,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            zone:       Zone::Local,
            week_start: DayOfWeek::Sunday,
        }
    }
}

/// A clock and [`CalendarOptions`] bundled so "today" and calendar grids can be computed
/// without repeating the zone and week start at every call.
#[derive(Debug, Clone)]
pub struct Calendar<C = SystemClock> {
    clock:   C,
    options: CalendarOptions,
}

impl Calendar {
    /// A calendar reading the system clock.
    pub const fn new(options: CalendarOptions) -> Self {
        Self::with_clock(SystemClock, options)
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new(CalendarOptions::default())
    }
}

impl<C: Clock> Calendar<C> {
    pub const fn with_clock(clock: C, options: CalendarOptions) -> Self {
        Self { clock, options }
    }

    pub const fn options(&self) -> &CalendarOptions {
        &self.options
    }

    /// # Errors
    /// Returns `DateError::OutOfRange` if the clock reports a year outside `0000..=9999`.
    pub fn today(&self) -> Result<CalendarDate, DateError> {
        CalendarDate::today_with(&self.clock, &self.options.zone)
    }

    /// First day of the week containing `date`.
    ///
    /// # Errors
    /// Returns `DateError::Parse` for an invalid date string, or `DateError::OutOfRange`
    /// if the week begins before `0000-01-01`.
    pub fn start_of_week(&self, date: impl DateLike) -> Result<CalendarDate, DateError> {
        date.to_date()?.start_of_week(self.options.week_start)
    }

    /// Padded grid span of the month containing `date`.
    ///
    /// # Errors
    /// Returns `DateError::Parse` for an invalid date string, or `DateError::OutOfRange`
    /// when the padding leaves `0000..=9999`.
    pub fn month_date_range(&self, date: impl DateLike) -> Result<MonthSpan, DateError> {
        date.to_date()?.calendar_month_date_range(self.options.week_start)
    }

    /// Calendar grid rows for the month containing `date`.
    ///
    /// # Errors
    /// Returns `DateError::Parse` for an invalid date string, or `DateError::OutOfRange`
    /// when the padding leaves `0000..=9999`.
    pub fn weeks_for_month(
        &self,
        date: impl DateLike,
    ) -> Result<Vec<Vec<CalendarDate>>, DateError> {
        date.to_date()?.calendar_weeks_for_month(self.options.week_start)
    }

    /// Calendar grid rows for the current month.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` as [`Calendar::today`] and
    /// [`Calendar::weeks_for_month`] do.
    pub fn current_month_weeks(&self) -> Result<Vec<Vec<CalendarDate>>, DateError> {
        self.weeks_for_month(self.today()?)
    }

    /// # Errors
    /// Returns `DateError::Parse` for an invalid date string, or
    /// `DateError::NonexistentLocalDate` if the zone skipped that day.
    pub fn start_of_day(&self, date: impl DateLike) -> Result<DateTime<FixedOffset>, DateError> {
        date.to_date()?.start_of_day(&self.options.zone)
    }

    /// Formats `date` in the configured zone.
    ///
    /// # Errors
    /// Returns `DateError::Parse` for an invalid date string, or the errors of
    /// [`CalendarDate::format_in`].
    pub fn format(&self, date: impl DateLike, pattern: &str) -> Result<String, DateError> {
        date.to_date()?.format_in(pattern, &self.options.zone)
    }
}
