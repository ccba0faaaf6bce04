// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Date + time composite with carry-propagating arithmetic.
//!
//! [`DateTime`] owns the only calendar arithmetic in the crate:
//!
//! - [`add_time_difference`](DateTime::add_time_difference) adds a raw
//!   `Time` delta and carries overflow seconds → minutes → hours → days →
//!   months → years.
//! - [`calculate_day_of_week`](DateTime::calculate_day_of_week) evaluates
//!   the weekday congruence on the date part.
//! - [`calculate_time_difference`](DateTime::calculate_time_difference)
//!   returns the raw `Time` duration between two instants of the same month.
//!
//! # Carry model
//!
//! Each unit carries **at most once** per call. A delta whose seconds push
//! the total past `120`, or whose hours push it past `48`, leaves units out
//! of range afterwards; [`is_valid`](DateTime::is_valid) reports that.
//! The day carry is always repaired fully, rolling across as many month
//! boundaries as needed.

use chrono::{NaiveDateTime, Timelike};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::date::Date;
use crate::error::CalendarError;
use crate::time::{saturate_i32, Time, SECONDS_PER_DAY};
use crate::weekday::Weekday;

/// A calendar date paired with a wall-clock time.
///
/// Construction never validates; check [`is_valid`](Self::is_valid) or
/// [`validate`](Self::validate) before trusting the value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DateTime {
    pub date: Date,
    pub time: Time,
}

impl DateTime {
    #[inline]
    pub const fn new(date: Date, time: Time) -> Self {
        Self { date, time }
    }

    /// Shorthand for `DateTime::new(Date::new(..), Time::new(..))`.
    #[inline]
    pub const fn from_parts(
        year: i32,
        month: i32,
        day: i32,
        hours: i32,
        minutes: i32,
        seconds: i32,
    ) -> Self {
        Self::new(Date::new(year, month, day), Time::new(hours, minutes, seconds))
    }

    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.date.is_valid() && self.time.is_valid()
    }

    /// Date errors take precedence over time errors.
    pub fn validate(&self) -> Result<(), CalendarError> {
        self.date.validate()?;
        self.time.validate()
    }

    /// Adds `delta` in place, carrying overflow up to the year.
    ///
    /// Seconds, minutes and hours each carry at most once (see the module
    /// docs). After the hour → day carry the date is rolled forward month by
    /// month until the day fits. Date invalidity that is not a day overflow
    /// (negative year, month outside `1..=12`, day below 1) is left as is.
    ///
    /// Sums are taken in `i64` and clamped back into `i32`; a clamped unit is
    /// out of range and shows up in [`is_valid`](Self::is_valid).
    pub fn add_time_difference(&mut self, delta: &Time) {
        let mut seconds = self.time.seconds.value() as i64 + delta.seconds.value() as i64;
        let mut minutes = self.time.minutes.value() as i64 + delta.minutes.value() as i64;
        let mut hours = self.time.hours.value() as i64 + delta.hours.value() as i64;

        if seconds >= 60 {
            seconds -= 60;
            minutes += 1;
            trace!(seconds, minutes, "carried seconds into minutes");
        }
        if minutes >= 60 {
            minutes -= 60;
            hours += 1;
            trace!(minutes, hours, "carried minutes into hours");
        }
        if hours >= 24 {
            hours -= 24;
            self.date.day = self.date.day.saturating_add(1);
            trace!(hours, day = self.date.day, "carried hours into days");
        }

        self.time = Time {
            hours: self.time.hours.with_value(saturate_i32(hours)),
            minutes: self.time.minutes.with_value(saturate_i32(minutes)),
            seconds: self.time.seconds.with_value(saturate_i32(seconds)),
        };
        self.roll_day_overflow();
    }

    /// Value-returning form of [`add_time_difference`](Self::add_time_difference).
    #[must_use]
    pub fn with_time_difference(mut self, delta: &Time) -> Self {
        self.add_time_difference(delta);
        self
    }

    fn roll_day_overflow(&mut self) {
        while let Some(month_len) = self.date.days_in_month() {
            if self.date.day <= month_len {
                break;
            }
            if self.date.month == 12 {
                let Some(year) = self.date.year.checked_add(1) else {
                    warn!(year = self.date.year, "year carry overflows, day left unrolled");
                    break;
                };
                self.date.day -= month_len;
                self.date.month = 1;
                self.date.year = year;
                debug!(year, "carried days into a new year");
            } else {
                self.date.day -= month_len;
                self.date.month += 1;
                debug!(month = self.date.month, "carried days into the next month");
            }
        }

        if !self.date.is_valid() {
            warn!(date = %self.date, "date still invalid after carry propagation");
        }
    }

    /// Day of week in `0..=6`, Sunday = 0. See [`Date::day_of_week`].
    #[inline]
    pub const fn calculate_day_of_week(&self) -> i32 {
        self.date.day_of_week()
    }

    #[inline]
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Seconds counted from day 0 of the month: `day * 86400 + h * 3600 + m * 60 + s`.
    ///
    /// Month and year do not contribute.
    #[inline]
    const fn seconds_into_month(&self) -> i64 {
        self.date.day as i64 * SECONDS_PER_DAY + self.time.total_seconds()
    }

    /// Raw duration from `self` to `other`, as hours/minutes/seconds.
    ///
    /// Only the day of the month and the time of day take part, so the result
    /// is meaningful when both instants fall in the same month. Hours are not
    /// reduced modulo 24 and every component is negative when `other` is
    /// earlier than `self`. Use [`calendar_difference`](Self::calendar_difference)
    /// for instants in different months.
    pub const fn calculate_time_difference(&self, other: &DateTime) -> Time {
        Time::from_total_seconds(other.seconds_into_month() - self.seconds_into_month())
    }

    /// Raw duration from `self` to `other` across the full proleptic calendar.
    ///
    /// Returns `None` if either value is invalid or outside chrono's range.
    pub fn calendar_difference(&self, other: &DateTime) -> Option<Time> {
        let start = self.to_naive()?;
        let end = other.to_naive()?;
        Some(Time::from_total_seconds((end - start).num_seconds()))
    }

    /// Converts to a `chrono::NaiveDateTime`. Returns `None` for invalid values.
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        if !self.time.is_valid() {
            return None;
        }
        self.date.to_naive_date()?.and_hms_opt(
            self.time.hours.value() as u32,
            self.time.minutes.value() as u32,
            self.time.seconds.value() as u32,
        )
    }
}

impl From<NaiveDateTime> for DateTime {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::new(
            Date::from(datetime.date()),
            Time::new(
                datetime.hour() as i32,
                datetime.minute() as i32,
                datetime.second() as i32,
            ),
        )
    }
}

/// `day-month-year hours:minutes:seconds`, unpadded.
impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}

/// Parses `day-month-year hours:minutes:seconds`. The result is not validated.
impl FromStr for DateTime {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(date), Some(time), None) => Ok(Self::new(date.parse()?, time.parse()?)),
            _ => Err(CalendarError::Malformed {
                what: "date-time",
                input: s.to_string(),
            }),
        }
    }
}
