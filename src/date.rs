// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Proleptic Gregorian calendar dates.
//!
//! A [`Date`] is a plain `year / month / day` triple. Validity is *checked*,
//! never enforced: any triple can be constructed, and carry propagation in
//! [`DateTime`](crate::DateTime) temporarily pushes `day` past the end of
//! the month before repairing it.

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::weekday::Weekday;

/// Month lengths of a common year, indexed by month number (index 0 unused).
const DAYS_IN_MONTH: [i32; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap-year rule.
#[inline]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1..=12), or `None` for any other month number.
#[inline]
pub const fn days_in_month(month: i32, leap: bool) -> Option<i32> {
    if month < 1 || month > 12 {
        return None;
    }
    if month == 2 && leap {
        Some(29)
    } else {
        Some(DAYS_IN_MONTH[month as usize])
    }
}

/// A calendar date with public, freely assignable fields.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Date {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl Date {
    #[inline]
    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    #[inline]
    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Length of this date's month, leap-year aware.
    #[inline]
    pub const fn days_in_month(&self) -> Option<i32> {
        days_in_month(self.month, self.is_leap_year())
    }

    /// `true` for a non-negative year, a month in `1..=12` and a day within
    /// that month.
    pub const fn is_valid(&self) -> bool {
        if self.year < 0 || self.month < 1 || self.month > 12 || self.day < 1 {
            return false;
        }
        match self.days_in_month() {
            Some(max_day) => self.day <= max_day,
            None => false,
        }
    }

    /// Reports the first field that makes the date invalid.
    pub fn validate(&self) -> Result<(), CalendarError> {
        if self.year < 0 {
            return Err(CalendarError::NegativeYear { year: self.year });
        }
        let max_day = self
            .days_in_month()
            .ok_or(CalendarError::InvalidMonth { month: self.month })?;
        if self.day < 1 || self.day > max_day {
            return Err(CalendarError::InvalidDay {
                day: self.day,
                month: self.month,
                max_day,
            });
        }
        Ok(())
    }

    /// Day of week in `0..=6`, Sunday = 0.
    ///
    /// Closed-form Gregorian congruence with January and February treated as
    /// months 11 and 12 of the previous year:
    ///
    /// ```text
    /// a = (14 - month) / 12
    /// y = year - a
    /// m = month + 12a - 2
    /// w = (day + y + y/4 - y/100 + y/400 + 31m/12) mod 7
    /// ```
    ///
    /// All divisions truncate toward zero, so January and February of year 0
    /// (where `y = -1`) come out one day later than the true proleptic
    /// weekday. The final `(w + 7) % 7` keeps the result non-negative.
    ///
    /// Intermediates are `i64`, so every `i32` field combination is in range.
    pub const fn day_of_week(&self) -> i32 {
        let (year, month, day) = (self.year as i64, self.month as i64, self.day as i64);
        let a = (14 - month) / 12;
        let y = year - a;
        let m = month + 12 * a - 2;
        let raw = (day + y + y / 4 - y / 100 + y / 400 + (31 * m) / 12) % 7;
        ((raw + 7) % 7) as i32
    }

    /// Day of week as a [`Weekday`].
    pub fn weekday(&self) -> Weekday {
        Weekday::from_index_wrapping(self.day_of_week())
    }

    /// Converts to a `chrono::NaiveDate`. Returns `None` for invalid dates or
    /// years outside chrono's range.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        if !self.is_valid() {
            return None;
        }
        NaiveDate::from_ymd_opt(self.year, self.month as u32, self.day as u32)
    }

    /// `(year, month, day)` key used for date ordering.
    #[inline]
    pub(crate) const fn key(&self) -> (i32, i32, i32) {
        (self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month() as i32, date.day() as i32)
    }
}

/// `day-month-year`, unpadded.
impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.day, self.month, self.year)
    }
}

/// Parses `day-month-year`. The result is not validated.
///
/// Only the first two `-` separate fields, so a negative year (`1-1--5`)
/// parses back. Negative days or months do not round-trip through
/// [`Display`](fmt::Display).
impl FromStr for Date {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CalendarError::Malformed {
            what: "date",
            input: s.to_string(),
        };
        let mut parts = s.trim().splitn(3, '-');
        let mut next = || -> Result<i32, CalendarError> {
            parts
                .next()
                .and_then(|p| p.parse().ok())
                .ok_or_else(malformed)
        };
        let (day, month, year) = (next()?, next()?, next()?);
        Ok(Self::new(year, month, day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_year_rule() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(0));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(1, false), Some(31));
        assert_eq!(days_in_month(2, false), Some(28));
        assert_eq!(days_in_month(2, true), Some(29));
        assert_eq!(days_in_month(4, true), Some(30));
        assert_eq!(days_in_month(12, false), Some(31));
        assert_eq!(days_in_month(0, false), None);
        assert_eq!(days_in_month(13, false), None);
    }

    #[test]
    fn validity_accepts_exactly_month_range() {
        for year in [1900, 2000, 2023, 2024] {
            for month in 1..=12 {
                let max = days_in_month(month, is_leap_year(year)).unwrap();
                assert!(!Date::new(year, month, 0).is_valid());
                for day in 1..=max {
                    assert!(
                        Date::new(year, month, day).is_valid(),
                        "{day}-{month}-{year} should be valid"
                    );
                }
                assert!(
                    !Date::new(year, month, max + 1).is_valid(),
                    "{}-{month}-{year} should be invalid",
                    max + 1
                );
            }
        }
    }

    #[test]
    fn validity_rejects_out_of_range_fields() {
        assert!(!Date::new(-1, 1, 1).is_valid());
        assert!(!Date::new(2024, 0, 1).is_valid());
        assert!(!Date::new(2024, 13, 1).is_valid());
        assert!(!Date::new(2023, 2, 29).is_valid());
        assert!(Date::new(2024, 2, 29).is_valid());
    }

    #[test]
    fn validate_reports_first_failure() {
        assert_eq!(
            Date::new(-3, 13, 40).validate(),
            Err(CalendarError::NegativeYear { year: -3 })
        );
        assert_eq!(
            Date::new(2024, 13, 1).validate(),
            Err(CalendarError::InvalidMonth { month: 13 })
        );
        assert_eq!(
            Date::new(2023, 2, 29).validate(),
            Err(CalendarError::InvalidDay {
                day: 29,
                month: 2,
                max_day: 28
            })
        );
        assert_eq!(Date::new(2024, 2, 29).validate(), Ok(()));
    }

    #[test]
    fn day_of_week_known_dates() {
        assert_eq!(Date::new(2024, 1, 1).day_of_week(), 1);
        assert_eq!(Date::new(2000, 1, 1).day_of_week(), 6);
        assert_eq!(Date::new(1970, 1, 1).day_of_week(), 4);
        assert_eq!(Date::new(2024, 2, 29).day_of_week(), 4);
        assert_eq!(Date::new(2024, 1, 1).weekday(), Weekday::Monday);
    }

    #[test]
    fn day_of_week_year_zero_is_non_negative() {
        let w = Date::new(0, 1, 1).day_of_week();
        assert!((0..7).contains(&w));
        // Truncating y/4, y/100, y/400 at y = -1 drops the leap correction.
        assert_eq!(w, 0);
        assert_eq!(Date::new(0, 3, 1).day_of_week(), 3);
    }

    #[test]
    fn chrono_roundtrip() {
        let date = Date::new(2024, 2, 29);
        let naive = date.to_naive_date().unwrap();
        assert_eq!(Date::from(naive), date);
        assert_eq!(Date::new(2023, 2, 29).to_naive_date(), None);
    }

    #[test]
    fn display_and_parse() {
        let date = Date::new(2024, 5, 7);
        assert_eq!(date.to_string(), "7-5-2024");
        assert_eq!("7-5-2024".parse::<Date>(), Ok(date));
        assert_eq!(" 31-12-1999 ".parse::<Date>(), Ok(Date::new(1999, 12, 31)));
        assert!("7-5".parse::<Date>().is_err());
        assert!("7-5-2024-1".parse::<Date>().is_err());
        assert!("a-5-2024".parse::<Date>().is_err());
    }

    #[test]
    fn negative_year_roundtrips() {
        let date = Date::new(-5, 1, 1);
        assert_eq!(date.to_string(), "1-1--5");
        assert_eq!("1-1--5".parse::<Date>(), Ok(date));
        assert!("-1-1-2024".parse::<Date>().is_err());
    }

    #[test]
    fn day_of_week_total_for_extreme_years() {
        let date = Date::new(2_000_000_000, 3, 1);
        assert!(date.is_valid());
        assert!((0..7).contains(&date.day_of_week()));

        let last = Date::new(i32::MAX, 12, 31);
        assert!(last.is_valid());
        assert!((0..7).contains(&last.day_of_week()));
        // Weekdays repeat on a 400-year cycle; 1 March 2000 was a Wednesday.
        assert_eq!(
            Date::new(2_000_000_000, 3, 1).day_of_week(),
            Date::new(2_000_000_000 - 400 * 4_999_995, 3, 1).day_of_week()
        );
        assert_eq!(date.day_of_week(), 3);
    }

    #[test]
    fn parse_does_not_validate() {
        assert_eq!("40-2-2023".parse::<Date>(), Ok(Date::new(2023, 2, 40)));
    }
}
