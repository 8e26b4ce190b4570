//! Comparisons accepting either [`CalendarDate`] values or canonical strings.
//!
//! For two `CalendarDate` values the `Ord` implementation is the direct route; these helpers
//! exist for callers holding strings.

use std::cmp::Ordering;

use crate::range::{DateLike, normalize};
use crate::ParseError;

/// Three-way comparator: the signed number of days from `b` to `a`.
///
/// Negative when `a < b`, zero when equal, positive when `a > b`, so it can drive generic
/// sort routines via `compare_asc(a, b)?.cmp(&0)`.
///
/// # Errors
/// Returns `ParseError` when an operand string is invalid.
pub fn compare_asc(a: impl DateLike, b: impl DateLike) -> Result<i64, ParseError> {
    let (a, b) = normalize(a, b)?;
    Ok(b.days_until(a))
}

/// Negation of [`compare_asc`], for newest-first ordering.
///
/// # Errors
/// Returns `ParseError` when an operand string is invalid.
pub fn compare_desc(a: impl DateLike, b: impl DateLike) -> Result<i64, ParseError> {
    compare_asc(a, b).map(|days| -days)
}

fn ordering(a: impl DateLike, b: impl DateLike) -> Result<Ordering, ParseError> {
    let (a, b) = normalize(a, b)?;
    Ok(a.cmp(&b))
}

/// # Errors
/// Returns `ParseError` when an operand string is invalid.
pub fn is_after(a: impl DateLike, b: impl DateLike) -> Result<bool, ParseError> {
    ordering(a, b).map(Ordering::is_gt)
}

/// # Errors
/// Returns `ParseError` when an operand string is invalid.
pub fn is_on_or_after(a: impl DateLike, b: impl DateLike) -> Result<bool, ParseError> {
    ordering(a, b).map(Ordering::is_ge)
}

/// # Errors
/// Returns `ParseError` when an operand string is invalid.
pub fn is_before(a: impl DateLike, b: impl DateLike) -> Result<bool, ParseError> {
    ordering(a, b).map(Ordering::is_lt)
}

/// # Errors
/// Returns `ParseError` when an operand string is invalid.
pub fn is_on_or_before(a: impl DateLike, b: impl DateLike) -> Result<bool, ParseError> {
    ordering(a, b).map(Ordering::is_le)
}

/// # Errors
/// Returns `ParseError` when an operand string is invalid.
pub fn is_same_day(a: impl DateLike, b: impl DateLike) -> Result<bool, ParseError> {
    ordering(a, b).map(Ordering::is_eq)
}
