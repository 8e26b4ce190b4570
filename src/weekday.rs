use chrono::Datelike;

use crate::{CalendarDate, DateError, DayOfWeek};

const DAYS_IN_WEEK: i64 = crate::DAYS_IN_WEEK as i64;

impl CalendarDate {
    pub fn day_of_week(self) -> DayOfWeek {
        self.0.weekday().into()
    }

    /// Nearest date strictly before `self` falling on `target`. Never returns `self`, even
    /// when `self` is already a `target`.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the search passes `0000-01-01`.
    pub fn previous_occurrence_of_weekday(self, target: DayOfWeek) -> Result<Self, DateError> {
        let back = match target.days_until(self.day_of_week()) {
            0 => DAYS_IN_WEEK,
            n => n,
        };
        self.add_days(-back)
    }

    /// `self` if it falls on `target`, otherwise the previous occurrence.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the search passes `0000-01-01`.
    pub fn current_or_previous_occurrence_of_weekday(
        self,
        target: DayOfWeek,
    ) -> Result<Self, DateError> {
        if self.day_of_week() == target {
            Ok(self)
        } else {
            self.previous_occurrence_of_weekday(target)
        }
    }

    /// Nearest date strictly after `self` falling on `target`.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the search passes `9999-12-31`.
    pub fn next_occurrence_of_weekday(self, target: DayOfWeek) -> Result<Self, DateError> {
        let forward = match self.day_of_week().days_until(target) {
            0 => DAYS_IN_WEEK,
            n => n,
        };
        self.add_days(forward)
    }

    /// `self` if it falls on `target`, otherwise the next occurrence.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the search passes `9999-12-31`.
    pub fn current_or_next_occurrence_of_weekday(
        self,
        target: DayOfWeek,
    ) -> Result<Self, DateError> {
        if self.day_of_week() == target {
            Ok(self)
        } else {
            self.next_occurrence_of_weekday(target)
        }
    }

    /// First day of the week containing `self`, for weeks beginning on `week_start`.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the week begins before `0000-01-01`.
    pub fn start_of_week(self, week_start: DayOfWeek) -> Result<Self, DateError> {
        self.current_or_previous_occurrence_of_weekday(week_start)
    }
}
