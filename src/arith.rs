//! Day and month arithmetic on the civil calendar.
//!
//! Nothing here converts to an instant: a day is a calendar day, never 24 hours, so results
//! do not depend on any zone's DST transitions.

use chrono::{Days, Months};

use crate::{CalendarDate, DateError, MONTHS_PER_YEAR};

impl CalendarDate {
    /// Shifts the date by `n` calendar days (`n` may be negative or zero).
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result leaves `0000..=9999`.
    pub fn add_days(self, n: i64) -> Result<Self, DateError> {
        let days = Days::new(n.unsigned_abs());
        let shifted = if n >= 0 {
            self.0.checked_add_days(days)
        } else {
            self.0.checked_sub_days(days)
        };
        shifted
            .ok_or_else(|| DateError::OutOfRange(format!("{self} {n:+} days")))
            .and_then(Self::from_naive)
    }

    /// Shifts the date by `n` calendar months.
    ///
    /// When the target month is shorter than the current day of month the result is clamped
    /// to the target month's last day, so `2023-01-31` plus one month is `2023-02-28`.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result leaves `0000..=9999`.
    pub fn add_months(self, n: i32) -> Result<Self, DateError> {
        let months = Months::new(n.unsigned_abs());
        // chrono clamps to the last day of the target month
        let shifted = if n >= 0 {
            self.0.checked_add_months(months)
        } else {
            self.0.checked_sub_months(months)
        };
        shifted
            .ok_or_else(|| DateError::OutOfRange(format!("{self} {n:+} months")))
            .and_then(Self::from_naive)
    }

    /// Signed number of days from `self` to `other`; `self.add_days(self.days_until(other))`
    /// is always `other`.
    pub fn days_until(self, other: Self) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Signed number of whole calendar months from `self` to `other`.
    ///
    /// A month is complete once adding it to the earlier date (with end-of-month clamping)
    /// does not pass the later date: `01-01 -> 01-31` is 0, `01-01 -> 02-01` is 1 and
    /// `01-31 -> 02-28` is 1.
    pub fn months_until(self, other: Self) -> i32 {
        let (earlier, later, sign) = if self <= other {
            (self, other, 1)
        } else {
            (other, self, -1)
        };

        let month_number = |d: Self| d.year() * MONTHS_PER_YEAR as i32 + d.month_index() as i32;
        let mut months = month_number(later) - month_number(earlier);

        if months > 0
            && earlier
                .add_months(months)
                .is_ok_and(|landed| landed > later)
        {
            months -= 1;
        }

        sign * months
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_add_days_crosses_boundaries() {
        struct TestCase {
            start:    &'static str,
            days:     i64,
            expected: &'static str,
        }

        let cases = [
            TestCase {
                start:    "2023-01-31",
                days:     1,
                expected: "2023-02-01",
            },
            TestCase {
                start:    "2023-12-31",
                days:     1,
                expected: "2024-01-01",
            },
            TestCase {
                start:    "2024-03-01",
                days:     -1,
                expected: "2024-02-29",
            },
            TestCase {
                start:    "2023-03-01",
                days:     -1,
                expected: "2023-02-28",
            },
            TestCase {
                start:    "2023-11-13",
                days:     0,
                expected: "2023-11-13",
            },
            TestCase {
                start:    "2023-01-01",
                days:     365,
                expected: "2024-01-01",
            },
            TestCase {
                start:    "2024-01-01",
                days:     -365,
                expected: "2023-01-01",
            },
            TestCase {
                start:    "2024-01-01",
                days:     -366,
                expected: "2022-12-31",
            },
        ];

        for case in &cases {
            assert_eq!(
                date(case.start).add_days(case.days).unwrap(),
                date(case.expected),
                "{} {:+} days",
                case.start,
                case.days
            );
        }
    }

    #[test]
    fn test_add_days_across_spring_forward() {
        // 2024-03-10 is the US spring-forward date, 2024-03-31 the EU one
        for start in ["2024-03-09", "2024-03-10", "2024-03-30", "2024-03-31", "2024-11-02"] {
            let d = date(start);
            let next = d.add_days(1).unwrap();
            assert_ne!(next, d.add_days(0).unwrap());
            assert_eq!(d.days_until(next), 1);
            assert_eq!(next.add_days(-1).unwrap(), d);
        }
    }

    #[test]
    fn test_add_days_out_of_range() {
        assert!(matches!(
            date("9999-12-31").add_days(1),
            Err(DateError::OutOfRange(_))
        ));
        assert!(matches!(
            date("0000-01-01").add_days(-1),
            Err(DateError::OutOfRange(_))
        ));
        assert!(date("2023-01-01").add_days(i64::MAX).is_err());
        assert!(date("2023-01-01").add_days(i64::MIN).is_err());
    }

    #[test]
    fn test_add_months_clamps_month_end() {
        struct TestCase {
            start:    &'static str,
            months:   i32,
            expected: &'static str,
        }

        let cases = [
            TestCase {
                start:    "2023-01-28",
                months:   1,
                expected: "2023-02-28",
            },
            TestCase {
                start:    "2023-01-31",
                months:   1,
                expected: "2023-02-28",
            },
            TestCase {
                start:    "2024-01-31",
                months:   1,
                expected: "2024-02-29",
            },
            TestCase {
                start:    "2023-03-31",
                months:   1,
                expected: "2023-04-30",
            },
            TestCase {
                start:    "2023-03-31",
                months:   -1,
                expected: "2023-02-28",
            },
            TestCase {
                start:    "2024-02-29",
                months:   12,
                expected: "2025-02-28",
            },
            TestCase {
                start:    "2023-11-15",
                months:   2,
                expected: "2024-01-15",
            },
            TestCase {
                start:    "2024-01-15",
                months:   -2,
                expected: "2023-11-15",
            },
            TestCase {
                start:    "2023-05-31",
                months:   0,
                expected: "2023-05-31",
            },
        ];

        for case in &cases {
            assert_eq!(
                date(case.start).add_months(case.months).unwrap(),
                date(case.expected),
                "{} {:+} months",
                case.start,
                case.months
            );
        }
    }

    #[test]
    fn test_add_months_out_of_range() {
        assert!(date("9999-12-01").add_months(1).is_err());
        assert!(date("0000-01-31").add_months(-1).is_err());
    }

    #[test]
    fn test_days_until_symmetry() {
        let dates = [
            date("2023-01-01"),
            date("2023-03-12"),
            date("2024-02-29"),
            date("1999-12-31"),
            date("2023-11-05"),
        ];
        for a in dates {
            for b in dates {
                assert_eq!(a.days_until(b), -b.days_until(a));
                assert_eq!(a.add_days(a.days_until(b)).unwrap(), b);
            }
        }
        assert_eq!(date("2025-01-01").days_until(date("2025-01-31")), 30);
    }

    #[test]
    fn test_months_until() {
        struct TestCase {
            from:     &'static str,
            to:       &'static str,
            expected: i32,
        }

        let cases = [
            TestCase {
                from:     "2023-01-01",
                to:       "2023-01-31",
                expected: 0,
            },
            TestCase {
                from:     "2023-01-01",
                to:       "2023-02-01",
                expected: 1,
            },
            TestCase {
                from:     "2023-01-01",
                to:       "2023-02-02",
                expected: 1,
            },
            TestCase {
                from:     "2023-01-15",
                to:       "2023-02-14",
                expected: 0,
            },
            TestCase {
                from:     "2023-01-31",
                to:       "2023-02-28",
                expected: 1,
            },
            TestCase {
                from:     "2023-02-01",
                to:       "2023-01-01",
                expected: -1,
            },
            TestCase {
                from:     "2023-03-10",
                to:       "2023-01-11",
                expected: -1,
            },
            TestCase {
                from:     "2022-11-20",
                to:       "2024-11-20",
                expected: 24,
            },
            TestCase {
                from:     "2023-06-06",
                to:       "2023-06-06",
                expected: 0,
            },
        ];

        for case in &cases {
            assert_eq!(
                date(case.from).months_until(date(case.to)),
                case.expected,
                "{} -> {}",
                case.from,
                case.to
            );
        }
    }
}
