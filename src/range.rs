//! Functions over an inclusive `(from, to)` pair of dates.
//!
//! Every endpoint may be a [`CalendarDate`] or its canonical string; it is normalized once on
//! entry through [`DateLike`].

use std::iter::FusedIterator;

use crate::{CalendarDate, ParseError};

/// Anything that names a calendar date: a [`CalendarDate`] or a canonical `YYYY-MM-DD` string.
pub trait DateLike {
    /// Normalizes to a [`CalendarDate`].
    ///
    /// # Errors
    /// Returns `ParseError` when a string endpoint is malformed or not a real date.
    fn to_date(&self) -> Result<CalendarDate, ParseError>;
}

impl DateLike for CalendarDate {
    fn to_date(&self) -> Result<CalendarDate, ParseError> {
        Ok(*self)
    }
}

impl DateLike for str {
    fn to_date(&self) -> Result<CalendarDate, ParseError> {
        self.parse()
    }
}

impl DateLike for String {
    fn to_date(&self) -> Result<CalendarDate, ParseError> {
        self.parse()
    }
}

impl<T: DateLike + ?Sized> DateLike for &T {
    fn to_date(&self) -> Result<CalendarDate, ParseError> {
        (**self).to_date()
    }
}

/// Error type for range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// The range requires `from <= to`.
    #[error("Invalid date range: from ({from}) is after to ({to})")]
    RangeOrder { from: CalendarDate, to: CalendarDate },

    /// Error parsing a range endpoint.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Forward-and-backward cursor over an inclusive run of dates.
///
/// Empty when the start is after the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayIter {
    bounds: Option<(CalendarDate, CalendarDate)>,
}

impl DayIter {
    pub fn new(from: CalendarDate, to: CalendarDate) -> Self {
        Self {
            bounds: (from <= to).then_some((from, to)),
        }
    }
}

impl Iterator for DayIter {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<Self::Item> {
        let (front, back) = self.bounds?;
        self.bounds = if front < back {
            front.add_days(1).ok().map(|next| (next, back))
        } else {
            None
        };
        Some(front)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bounds.map_or(0, |(front, back)| {
            usize::try_from(front.days_until(back) + 1).unwrap_or(usize::MAX)
        });
        (len, Some(len))
    }
}

impl DoubleEndedIterator for DayIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        let (front, back) = self.bounds?;
        self.bounds = if front < back {
            back.add_days(-1).ok().map(|prev| (front, prev))
        } else {
            None
        };
        Some(back)
    }
}

impl ExactSizeIterator for DayIter {}

impl FusedIterator for DayIter {}

/// Normalizes both endpoints of a range.
pub(crate) fn normalize(
    from: impl DateLike,
    to: impl DateLike,
) -> Result<(CalendarDate, CalendarDate), ParseError> {
    Ok((from.to_date()?, to.to_date()?))
}

/// Every date from `from` to `to` inclusive; empty when `from > to`.
///
/// # Errors
/// Returns `ParseError` when an endpoint string is invalid.
pub fn day_array(from: impl DateLike, to: impl DateLike) -> Result<Vec<CalendarDate>, ParseError> {
    Ok(day_generator(from, to)?.collect())
}

/// Lazy form of [`day_array`]. Each call yields an independent cursor.
///
/// # Errors
/// Returns `ParseError` when an endpoint string is invalid.
pub fn day_generator(from: impl DateLike, to: impl DateLike) -> Result<DayIter, ParseError> {
    let (from, to) = normalize(from, to)?;
    Ok(DayIter::new(from, to))
}

/// Signed day count such that `from + difference_in_days(from, to) == to`.
///
/// # Errors
/// Returns `ParseError` when an endpoint string is invalid.
pub fn difference_in_days(from: impl DateLike, to: impl DateLike) -> Result<i64, ParseError> {
    let (from, to) = normalize(from, to)?;
    Ok(from.days_until(to))
}

/// Signed number of whole calendar months between the endpoints.
///
/// # Errors
/// Returns `ParseError` when an endpoint string is invalid.
pub fn difference_in_months(from: impl DateLike, to: impl DateLike) -> Result<i32, ParseError> {
    let (from, to) = normalize(from, to)?;
    Ok(from.months_until(to))
}

/// Number of dates in the inclusive range.
///
/// # Errors
/// Returns `RangeError::RangeOrder` if `from > to`, or `RangeError::Parse` when an
/// endpoint string is invalid.
pub fn count_days_inclusive(from: impl DateLike, to: impl DateLike) -> Result<i64, RangeError> {
    let (from, to) = normalize(from, to)?;
    if from > to {
        return Err(RangeError::RangeOrder { from, to });
    }
    Ok(from.days_until(to) + 1)
}
