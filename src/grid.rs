use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::prelude::*;
use crate::{CalendarDate, DAYS_IN_WEEK, DateError, DayIter, DayOfWeek, MIN_DAY};

/// Inclusive span of dates shown by a month's calendar grid, padded with days of the
/// adjacent months so it starts on the week's first day and ends on its last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{start}/{end}")]
pub struct MonthSpan {
    pub start: CalendarDate,
    pub end:   CalendarDate,
}

impl MonthSpan {
    /// Iterates every date of the span in order
    pub fn days(&self) -> DayIter {
        DayIter::new(self.start, self.end)
    }

    /// Number of calendar weeks (grid rows) the span covers
    pub fn week_count(&self) -> usize {
        self.days().len() / DAYS_IN_WEEK
    }
}

impl CalendarDate {
    pub fn start_of_month(self) -> Self {
        self.0.with_day(MIN_DAY).map_or(self, Self)
    }

    pub fn end_of_month(self) -> Self {
        self.0.with_day(self.days_in_month()).map_or(self, Self)
    }

    /// The padded grid span of this date's month for weeks beginning on `week_start`.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` when the padding would leave `0000..=9999`.
    pub fn calendar_month_date_range(self, week_start: DayOfWeek) -> Result<MonthSpan, DateError> {
        let week_end = week_start.previous();
        Ok(MonthSpan {
            start: self
                .start_of_month()
                .current_or_previous_occurrence_of_weekday(week_start)?,
            end:   self
                .end_of_month()
                .current_or_next_occurrence_of_weekday(week_end)?,
        })
    }

    /// The month's calendar grid: one `DAYS_IN_WEEK`-long row per week, in order.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` when the padding would leave `0000..=9999`.
    pub fn calendar_weeks_for_month(
        self,
        week_start: DayOfWeek,
    ) -> Result<Vec<Vec<Self>>, DateError> {
        let days: Vec<Self> = self.calendar_month_date_range(week_start)?.days().collect();
        debug_assert_eq!(days.len() % DAYS_IN_WEEK, 0);
        Ok(days.chunks(DAYS_IN_WEEK).map(<[Self]>::to_vec).collect())
    }
}
