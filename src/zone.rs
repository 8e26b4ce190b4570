//! Bridge to the time-zone engine (chrono and chrono-tz).
//!
//! A [`Zone`] decides which civil calendar an instant belongs to; a [`Clock`] supplies the
//! current instant. Neither is global: callers pass them in, tests pass fixed ones.

use std::fmt::{self, Write};
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use log::{debug, trace};

use crate::consts::{MINUTES_PER_DAY, SKIPPED_MIDNIGHT_STEP_MINUTES};
use crate::{CalendarDate, DateError, ParseError};

/// Time zone whose civil calendar is consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    /// The host's local zone
    #[default]
    Local,
    Utc,
    /// An IANA zone such as `America/New_York`
    Named(Tz),
}

impl Zone {
    /// Civil date of `instant` in this zone.
    pub(crate) fn date_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        match self {
            Self::Local => instant.with_timezone(&chrono::Local).date_naive(),
            Self::Utc => instant.date_naive(),
            Self::Named(tz) => instant.with_timezone(tz).date_naive(),
        }
    }

    /// First instant of `date` in this zone: local midnight, or the first local time after it
    /// when midnight falls in a DST gap.
    pub(crate) fn first_instant(&self, date: NaiveDate) -> Option<DateTime<FixedOffset>> {
        match self {
            Self::Local => first_instant_in(&chrono::Local, date),
            Self::Utc => first_instant_in(&Utc, date),
            Self::Named(tz) => first_instant_in(tz, date),
        }
    }
}

fn first_instant_in<Z: TimeZone>(zone: &Z, date: NaiveDate) -> Option<DateTime<FixedOffset>> {
    (0..MINUTES_PER_DAY)
        .step_by(SKIPPED_MIDNIGHT_STEP_MINUTES as usize)
        .find_map(|minute| {
            let time = NaiveTime::from_num_seconds_from_midnight_opt(minute * 60, 0)?;
            let resolved = zone.from_local_datetime(&date.and_time(time)).earliest();
            if resolved.is_none() {
                trace!("{date} {time} does not exist locally, trying later");
            }
            resolved
        })
        .map(|instant| instant.fixed_offset())
}

impl FromStr for Zone {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("local") {
            return Ok(Self::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") {
            return Ok(Self::Utc);
        }
        trimmed
            .parse::<Tz>()
            .map(Self::Named)
            .map_err(|_| ParseError::UnknownZone(s.to_owned()))
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Utc => f.write_str("utc"),
            Self::Named(tz) => f.write_str(tz.name()),
        }
    }
}

impl serde::Serialize for Zone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Zone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// The operating system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl CalendarDate {
    /// Today's date in `zone`, read from the system clock.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the clock reports a year outside `0000..=9999`.
    pub fn today(zone: &Zone) -> Result<Self, DateError> {
        Self::today_with(&SystemClock, zone)
    }

    /// Today's date in `zone` according to `clock`.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the clock reports a year outside `0000..=9999`.
    pub fn today_with(clock: &impl Clock, zone: &Zone) -> Result<Self, DateError> {
        Self::from_naive(zone.date_of(clock.now()))
    }

    /// The instant this date begins in `zone`.
    ///
    /// # Errors
    /// Returns `DateError::NonexistentLocalDate` if the zone skipped the whole day.
    pub fn start_of_day(&self, zone: &Zone) -> Result<DateTime<FixedOffset>, DateError> {
        zone.first_instant(self.0).ok_or_else(|| {
            debug!("{self} has no local time in {zone}");
            DateError::NonexistentLocalDate {
                date: *self,
                zone: zone.to_string(),
            }
        })
    }

    /// Formats the civil date with a strftime-style `pattern` (e.g. `"%d/%m/%Y"`, `"%A"`).
    ///
    /// # Errors
    /// Returns `DateError::InvalidPattern` for unknown specifiers or ones needing a time of
    /// day or offset; use [`CalendarDate::format_in`] for those.
    pub fn format(&self, pattern: &str) -> Result<String, DateError> {
        let mut out = String::new();
        write!(out, "{}", self.0.format(pattern))
            .map_err(|_| DateError::InvalidPattern(pattern.to_owned()))?;
        Ok(out)
    }

    /// Formats the instant this date begins in `zone`, so offset and zone specifiers
    /// (`%z`, `%:z`) are available.
    ///
    /// # Errors
    /// Returns `DateError::InvalidPattern` for unknown specifiers, or
    /// `DateError::NonexistentLocalDate` if the zone skipped the whole day.
    pub fn format_in(&self, pattern: &str, zone: &Zone) -> Result<String, DateError> {
        let instant = self.start_of_day(zone)?;
        let mut out = String::new();
        write!(out, "{}", instant.format(pattern))
            .map_err(|_| DateError::InvalidPattern(pattern.to_owned()))?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;
    use chrono::Duration;

    fn zone(name: &str) -> Zone {
        name.parse().unwrap()
    }

    fn instant(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_zone_from_str() {
        assert_eq!(zone("local"), Zone::Local);
        assert_eq!(zone("LOCAL"), Zone::Local);
        assert_eq!(zone("utc"), Zone::Utc);
        assert_eq!(zone("UTC"), Zone::Utc);
        assert_eq!(
            zone("America/New_York"),
            Zone::Named(chrono_tz::America::New_York)
        );
        assert!(matches!(
            "Mars/Olympus_Mons".parse::<Zone>(),
            Err(ParseError::UnknownZone(_))
        ));
    }

    #[test]
    fn test_zone_display_and_serde() {
        assert_eq!(zone("Europe/Paris").to_string(), "Europe/Paris");
        assert_eq!(Zone::Utc.to_string(), "utc");

        let json = serde_json::to_string(&zone("Asia/Tokyo")).unwrap();
        assert_eq!(json, r#""Asia/Tokyo""#);
        let parsed: Zone = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, zone("Asia/Tokyo"));
        assert!(serde_json::from_str::<Zone>(r#""Nowhere/Special""#).is_err());
    }

    #[test]
    fn test_today_depends_on_zone() {
        // 03:30 UTC is still the previous evening in New York
        let clock = FixedClock::new(instant("2023-11-14T03:30:00Z"));
        assert_eq!(
            CalendarDate::today_with(&clock, &Zone::Utc).unwrap(),
            date("2023-11-14")
        );
        assert_eq!(
            CalendarDate::today_with(&clock, &zone("America/New_York")).unwrap(),
            date("2023-11-13")
        );
        assert_eq!(
            CalendarDate::today_with(&clock, &zone("Asia/Tokyo")).unwrap(),
            date("2023-11-14")
        );
    }

    #[test]
    fn test_today_from_system_clock() {
        let before = Utc::now().date_naive();
        let today = CalendarDate::today(&Zone::Utc).unwrap();
        let after = Utc::now().date_naive();
        assert!(before <= today.as_naive() && today.as_naive() <= after);
    }

    #[test]
    fn test_start_of_day_in_utc() {
        let start = date("2023-11-13").start_of_day(&Zone::Utc).unwrap();
        assert_eq!(start.to_rfc3339(), "2023-11-13T00:00:00+00:00");
    }

    #[test]
    fn test_start_of_day_across_spring_forward() {
        let new_york = zone("America/New_York");
        let before = date("2024-03-10");
        let after = before.add_days(1).unwrap();

        let a = before.start_of_day(&new_york).unwrap();
        let b = after.start_of_day(&new_york).unwrap();

        // the civil day is one day, the elapsed time only 23 hours
        assert_eq!(before.days_until(after), 1);
        assert_eq!(b - a, Duration::hours(23));
        assert_eq!(a.to_rfc3339(), "2024-03-10T00:00:00-05:00");
        assert_eq!(b.to_rfc3339(), "2024-03-11T00:00:00-04:00");
    }

    #[test]
    fn test_start_of_day_across_fall_back() {
        let new_york = zone("America/New_York");
        let before = date("2024-11-03");
        let a = before.start_of_day(&new_york).unwrap();
        let b = before.add_days(1).unwrap().start_of_day(&new_york).unwrap();
        assert_eq!(b - a, Duration::hours(25));
    }

    #[test]
    fn test_start_of_day_when_midnight_is_skipped() {
        // Sao Paulo sprang forward at midnight on 2018-11-04
        let start = date("2018-11-04")
            .start_of_day(&zone("America/Sao_Paulo"))
            .unwrap();
        assert_eq!(start.to_rfc3339(), "2018-11-04T01:00:00-02:00");
    }

    #[test]
    fn test_start_of_day_for_a_skipped_day() {
        // Samoa skipped 2011-12-30 when it crossed the date line
        let result = date("2011-12-30").start_of_day(&zone("Pacific/Apia"));
        assert!(matches!(
            result,
            Err(DateError::NonexistentLocalDate { .. })
        ));
    }

    #[test]
    fn test_format() {
        let d = date("2023-11-13");
        assert_eq!(d.format("%d/%m/%Y").unwrap(), "13/11/2023");
        assert_eq!(d.format("%A, %B %-d").unwrap(), "Monday, November 13");
        assert_eq!(d.format(crate::CANONICAL_PATTERN).unwrap(), d.to_string());
        assert!(matches!(
            d.format("%H:%M"),
            Err(DateError::InvalidPattern(_))
        ));
        assert!(matches!(d.format("%Q"), Err(DateError::InvalidPattern(_))));
    }

    #[test]
    fn test_format_in_zone() {
        let d = date("2023-07-01");
        assert_eq!(
            d.format_in("%Y-%m-%dT%H:%M%:z", &zone("Europe/Paris")).unwrap(),
            "2023-07-01T00:00+02:00"
        );
        assert_eq!(
            d.format_in("%Y-%m-%d %z", &Zone::Utc).unwrap(),
            "2023-07-01 +0000"
        );
    }
}
