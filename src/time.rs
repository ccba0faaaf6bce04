// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Wall-clock times and raw durations.
//!
//! [`Time`] doubles as a wall-clock time of day and as a raw duration: the
//! delta passed to [`DateTime::add_time_difference`](crate::DateTime::add_time_difference)
//! and the value returned by
//! [`DateTime::calculate_time_difference`](crate::DateTime::calculate_time_difference)
//! are both `Time`s whose units may exceed their wall-clock bounds.

use qtty::Seconds;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CalendarError;
use crate::unit::BoundedUnit;

pub(crate) const SECONDS_PER_MINUTE: i64 = 60;
pub(crate) const SECONDS_PER_HOUR: i64 = 3_600;
pub(crate) const SECONDS_PER_DAY: i64 = 86_400;

/// Clamps to the `i32` range. Clamped units stay out of bounds, so
/// `is_valid` still reports them.
#[inline]
pub(crate) const fn saturate_i32(value: i64) -> i32 {
    if value > i32::MAX as i64 {
        i32::MAX
    } else if value < i32::MIN as i64 {
        i32::MIN
    } else {
        value as i32
    }
}

/// Hours, minutes and seconds, each a [`BoundedUnit`] of the matching kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Time {
    pub(crate) hours: BoundedUnit,
    pub(crate) minutes: BoundedUnit,
    pub(crate) seconds: BoundedUnit,
}

impl Time {
    /// Midnight, and the zero duration.
    pub const MIDNIGHT: Self = Self::new(0, 0, 0);

    /// Builds a time from raw integers. Never fails; see [`is_valid`](Self::is_valid).
    #[inline]
    pub const fn new(hours: i32, minutes: i32, seconds: i32) -> Self {
        Self {
            hours: BoundedUnit::hour(hours),
            minutes: BoundedUnit::minute(minutes),
            seconds: BoundedUnit::second(seconds),
        }
    }

    /// Builds a time from already-tagged units.
    ///
    /// The units are re-tagged by position, so passing e.g. a minute unit as
    /// `hours` yields an hour unit with the same value.
    #[inline]
    pub const fn from_units(hours: BoundedUnit, minutes: BoundedUnit, seconds: BoundedUnit) -> Self {
        Self::new(hours.value(), minutes.value(), seconds.value())
    }

    #[inline]
    pub const fn hours(&self) -> BoundedUnit {
        self.hours
    }

    #[inline]
    pub const fn minutes(&self) -> BoundedUnit {
        self.minutes
    }

    #[inline]
    pub const fn seconds(&self) -> BoundedUnit {
        self.seconds
    }

    /// Each unit individually within its wall-clock range.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.hours.is_valid() && self.minutes.is_valid() && self.seconds.is_valid()
    }

    /// Reports the first out-of-range unit, hours first.
    pub fn validate(&self) -> Result<(), CalendarError> {
        self.hours.validate()?;
        self.minutes.validate()?;
        self.seconds.validate()
    }

    /// `h * 3600 + m * 60 + s`, without range checks.
    #[inline]
    pub const fn total_seconds(&self) -> i64 {
        self.hours.value() as i64 * SECONDS_PER_HOUR
            + self.minutes.value() as i64 * SECONDS_PER_MINUTE
            + self.seconds.value() as i64
    }

    /// Builds a raw duration from a signed second count.
    ///
    /// Truncating decomposition: every component carries the sign of
    /// `total`, and `hours` is not reduced modulo 24. Hours beyond the `i32`
    /// range saturate.
    pub const fn from_total_seconds(total: i64) -> Self {
        let hours = total / SECONDS_PER_HOUR;
        let minutes = (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
        let seconds = total % SECONDS_PER_MINUTE;
        Self::new(saturate_i32(hours), minutes as i32, seconds as i32)
    }

    /// Duration view of this value as a typed quantity.
    #[inline]
    pub fn as_seconds(&self) -> Seconds {
        Seconds::new(self.total_seconds() as f64)
    }

    /// Builds a raw duration from a typed quantity, truncating sub-second parts.
    pub fn from_quantity(duration: Seconds) -> Self {
        Self::from_total_seconds(duration.value().trunc() as i64)
    }

    /// `(hours, minutes, seconds)` key used for time ordering.
    #[inline]
    pub(crate) const fn key(&self) -> (i32, i32, i32) {
        (
            self.hours.value(),
            self.minutes.value(),
            self.seconds.value(),
        )
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::MIDNIGHT
    }
}

/// `hours:minutes:seconds`, unpadded.
impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.hours, self.minutes, self.seconds)
    }
}

/// Parses `hours:minutes:seconds`. The result is not validated.
impl FromStr for Time {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CalendarError::Malformed {
            what: "time",
            input: s.to_string(),
        };
        let fields: Vec<i32> = s
            .trim()
            .split(':')
            .map(|p| p.parse().map_err(|_| malformed()))
            .collect::<Result<_, _>>()?;
        match fields[..] {
            [h, m, sec] => Ok(Self::new(h, m, sec)),
            _ => Err(malformed()),
        }
    }
}

// Serde: plain integer fields, no unit tags.

#[cfg(feature = "serde")]
impl Serialize for Time {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Time", 3)?;
        s.serialize_field("hours", &self.hours.value())?;
        s.serialize_field("minutes", &self.minutes.value())?;
        s.serialize_field("seconds", &self.seconds.value())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Time {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            hours: i32,
            minutes: i32,
            seconds: i32,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(Time::new(raw.hours, raw.minutes, raw.seconds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::UnitKind;

    #[test]
    fn units_are_tagged_by_position() {
        let t = Time::new(1, 2, 3);
        assert_eq!(t.hours().kind(), UnitKind::Hour);
        assert_eq!(t.minutes().kind(), UnitKind::Minute);
        assert_eq!(t.seconds().kind(), UnitKind::Second);

        let retagged = Time::from_units(
            BoundedUnit::second(5),
            BoundedUnit::hour(6),
            BoundedUnit::minute(7),
        );
        assert_eq!(retagged, Time::new(5, 6, 7));
        assert_eq!(retagged.hours().kind(), UnitKind::Hour);
    }

    #[test]
    fn validity_is_per_unit() {
        assert!(Time::new(0, 0, 0).is_valid());
        assert!(Time::new(23, 59, 59).is_valid());
        assert!(!Time::new(24, 0, 0).is_valid());
        assert!(!Time::new(0, 60, 0).is_valid());
        assert!(!Time::new(0, 0, 60).is_valid());
        assert!(!Time::new(0, -1, 0).is_valid());
    }

    #[test]
    fn validate_reports_hours_first() {
        assert_eq!(
            Time::new(25, 61, 0).validate(),
            Err(CalendarError::InvalidUnit {
                kind: UnitKind::Hour,
                value: 25,
                limit: 24
            })
        );
        assert_eq!(
            Time::new(1, 2, 99).validate(),
            Err(CalendarError::InvalidUnit {
                kind: UnitKind::Second,
                value: 99,
                limit: 60
            })
        );
    }

    #[test]
    fn total_seconds_and_back() {
        let t = Time::new(2, 30, 15);
        assert_eq!(t.total_seconds(), 9_015);
        assert_eq!(Time::from_total_seconds(9_015), t);
        assert_eq!(Time::from_total_seconds(100_000), Time::new(27, 46, 40));
        assert_eq!(Time::from_total_seconds(-3_661), Time::new(-1, -1, -1));
    }

    #[test]
    fn huge_second_counts_saturate_hours() {
        let t = Time::from_total_seconds(i64::MAX);
        assert_eq!(t.hours().value(), i32::MAX);
        assert_eq!(t.minutes().value(), 30);
        assert_eq!(t.seconds().value(), 7);
        assert!(!t.is_valid());

        let t = Time::from_total_seconds(i64::MIN);
        assert_eq!(t.hours().value(), i32::MIN);
        assert!(!t.is_valid());
    }

    #[test]
    fn quantity_view() {
        let t = Time::new(0, 1, 30);
        assert_eq!(t.as_seconds(), Seconds::new(90.0));
        assert_eq!(Time::from_quantity(Seconds::new(3_601.9)), Time::new(1, 0, 1));
    }

    #[test]
    fn display_and_parse() {
        let t = Time::new(9, 5, 0);
        assert_eq!(t.to_string(), "9:5:0");
        assert_eq!("9:5:0".parse::<Time>(), Ok(t));
        assert_eq!("23:59:59".parse::<Time>(), Ok(Time::new(23, 59, 59)));
        assert!("9:5".parse::<Time>().is_err());
        assert!("9:5:0:1".parse::<Time>().is_err());
        assert!("9:x:0".parse::<Time>().is_err());
    }

    #[test]
    fn default_is_midnight() {
        assert_eq!(Time::default(), Time::new(0, 0, 0));
    }
}
