// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Ordered collection of [`DateTime`] records.

use std::cmp::Ordering;
use tracing::debug;

use crate::datetime::DateTime;
use crate::sort::{SortStrategy, StdSort};

/// Orders by `(year, month, day)`, ignoring the time of day.
#[inline]
pub fn compare_dates(a: &DateTime, b: &DateTime) -> Ordering {
    a.date.key().cmp(&b.date.key())
}

/// Orders by `(hours, minutes, seconds)`, ignoring the date.
#[inline]
pub fn compare_times(a: &DateTime, b: &DateTime) -> Ordering {
    a.time.key().cmp(&b.time.key())
}

/// Owns a sequence of [`DateTime`] values and reorders it in place.
///
/// Records keep insertion order until a sort is applied; after that, the
/// order is whatever the last sort produced. The default sorts are stable,
/// so records with equal keys keep their previous relative order.
///
/// # Examples
///
/// ```
/// use civtime::{DateTime, DateTimeList};
///
/// let mut list = DateTimeList::new();
/// list.add(DateTime::from_parts(2024, 5, 10, 8, 0, 0));
/// list.add(DateTime::from_parts(2023, 1, 1, 12, 0, 0));
///
/// list.sort_by_date();
/// assert_eq!(list.records()[0].date.year, 2023);
///
/// list.sort_by_time();
/// assert_eq!(list.records()[0].time.hours().value(), 8);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateTimeList {
    records: Vec<DateTime>,
}

impl DateTimeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    /// Appends a record. No validation is performed.
    pub fn add(&mut self, datetime: DateTime) {
        self.records.push(datetime);
    }

    /// Stable sort by date key.
    pub fn sort_by_date(&mut self) {
        self.sort_by_date_with(&StdSort);
    }

    /// Stable sort by time-of-day key.
    pub fn sort_by_time(&mut self) {
        self.sort_by_time_with(&StdSort);
    }

    /// Sort by date key using `strategy`. Tie order depends on
    /// [`SortStrategy::is_stable`].
    pub fn sort_by_date_with<S: SortStrategy>(&mut self, strategy: &S) {
        debug!(
            records = self.records.len(),
            stable = strategy.is_stable(),
            "sorting by date"
        );
        strategy.sort_by(self.records.as_mut_slice(), compare_dates);
    }

    /// Sort by time-of-day key using `strategy`.
    pub fn sort_by_time_with<S: SortStrategy>(&mut self, strategy: &S) {
        debug!(
            records = self.records.len(),
            stable = strategy.is_stable(),
            "sorting by time"
        );
        strategy.sort_by(self.records.as_mut_slice(), compare_times);
    }

    #[inline]
    pub fn records(&self) -> &[DateTime] {
        &self.records
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, DateTime> {
        self.records.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_vec(self) -> Vec<DateTime> {
        self.records
    }
}

impl From<Vec<DateTime>> for DateTimeList {
    fn from(records: Vec<DateTime>) -> Self {
        Self { records }
    }
}

impl FromIterator<DateTime> for DateTimeList {
    fn from_iter<I: IntoIterator<Item = DateTime>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl Extend<DateTime> for DateTimeList {
    fn extend<I: IntoIterator<Item = DateTime>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl IntoIterator for DateTimeList {
    type Item = DateTime;
    type IntoIter = std::vec::IntoIter<DateTime>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a DateTimeList {
    type Item = &'a DateTime;
    type IntoIter = std::slice::Iter<'a, DateTime>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
