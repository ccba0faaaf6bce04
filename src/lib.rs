// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil calendar primitives.
//!
//! This crate models proleptic Gregorian dates and wall-clock times as plain
//! value types whose validity is *queried*, not enforced, plus the small
//! amount of arithmetic that needs calendar care.
//!
//! # Core types
//!
//! - [`BoundedUnit`] — an hour, minute or second tagged with its [`UnitKind`].
//! - [`Date`] — `year / month / day` with leap-year aware validation and the
//!   closed-form weekday congruence.
//! - [`Time`] — hours, minutes, seconds; also used as a raw duration.
//! - [`DateTime`] — date + time, carry-propagating
//!   [`add_time_difference`](DateTime::add_time_difference) and
//!   [`calculate_time_difference`](DateTime::calculate_time_difference).
//! - [`DateTimeList`] — an owned collection ordered by date key or time key.
//! - [`SortStrategy`] — interchangeable ordering providers
//!   ([`StdSort`], [`InsertionSort`], [`MergeSort`], [`QuickSort`]).
//! - [`EntryReader`] — sentinel-terminated entry parsing over any `BufRead`.
//!
//! # Example
//!
//! ```
//! use civtime::{DateTime, Time, Weekday};
//!
//! let mut dt = DateTime::from_parts(2023, 12, 31, 23, 59, 59);
//! assert!(dt.is_valid());
//!
//! dt.add_time_difference(&Time::new(0, 0, 1));
//! assert_eq!(dt.to_string(), "1-1-2024 0:0:0");
//! assert_eq!(dt.weekday(), Weekday::Monday);
//! ```
//!
//! # Features
//!
//! | Feature | Effect |
//! |---------|--------|
//! | `serde` | `Serialize`/`Deserialize` for [`Date`], [`Time`] and [`DateTime`] |

mod collection;
mod date;
mod datetime;
mod error;
pub mod input;
pub mod sort;
mod time;
mod unit;
mod weekday;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use collection::{compare_dates, compare_times, DateTimeList};
pub use date::{days_in_month, is_leap_year, Date};
pub use datetime::DateTime;
pub use error::{CalendarError, ReadError};
pub use input::{is_end_marker, Entry, EntryReader};
pub use sort::{InsertionSort, MergeSort, QuickSort, SortStrategy, StdSort};
pub use time::Time;
pub use unit::{BoundedUnit, UnitKind};
pub use weekday::Weekday;
