// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sentinel-terminated entry reader.
//!
//! Reads whitespace-separated integers from any [`BufRead`] in the order
//!
//! ```text
//! day month
//! year
//! hour minute second
//! ```
//!
//! Line breaks are insignificant. A `0 0` day/month pair, or an all-zero
//! entry, ends the input. Each complete entry is composed into a
//! [`DateTime`] and validated; invalid entries are handed back with the
//! reason so the caller can report them and carry on.

use std::collections::VecDeque;
use std::io::BufRead;
use tracing::{debug, trace};

use crate::collection::DateTimeList;
use crate::datetime::DateTime;
use crate::error::{CalendarError, ReadError};

/// Outcome of reading one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A valid date-time.
    Accepted(DateTime),
    /// A complete entry that failed validation.
    Rejected {
        datetime: DateTime,
        error: CalendarError,
    },
    /// The end-of-input sentinel, or end of stream between entries.
    End,
}

/// `true` for the `0 0` day/month sentinel.
#[inline]
pub const fn is_end_marker(day: i32, month: i32) -> bool {
    day == 0 && month == 0
}

/// Pulls [`Entry`] values out of a byte stream.
#[derive(Debug)]
pub struct EntryReader<R> {
    reader: R,
    pending: VecDeque<String>,
    line: String,
    finished: bool,
}

impl<R: BufRead> EntryReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: String::new(),
            finished: false,
        }
    }

    /// Next integer token, or `None` at end of stream.
    fn next_int(&mut self) -> Result<Option<i32>, ReadError> {
        while self.pending.is_empty() {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(self.line.split_whitespace().map(str::to_owned));
        }
        let Some(token) = self.pending.pop_front() else {
            return Ok(None);
        };
        token
            .parse()
            .map(Some)
            .map_err(|_| ReadError::InvalidNumber { token })
    }

    fn require_int(&mut self, field: &'static str) -> Result<i32, ReadError> {
        self.next_int()?
            .ok_or(ReadError::UnexpectedEof { field })
    }

    /// Reads one entry.
    ///
    /// The sentinel is checked before any validation, so `0 0` ends input
    /// even though day 0 and month 0 are themselves invalid.
    pub fn read_entry(&mut self) -> Result<Entry, ReadError> {
        let Some(day) = self.next_int()? else {
            return Ok(Entry::End);
        };
        let month = self.require_int("month")?;
        if is_end_marker(day, month) {
            return Ok(Entry::End);
        }
        let year = self.require_int("year")?;
        let hours = self.require_int("hour")?;
        let minutes = self.require_int("minute")?;
        let seconds = self.require_int("second")?;

        let datetime = DateTime::from_parts(year, month, day, hours, minutes, seconds);
        trace!(%datetime, "read entry");
        match datetime.validate() {
            Ok(()) => Ok(Entry::Accepted(datetime)),
            Err(error) => {
                debug!(%datetime, %error, "rejected entry");
                Ok(Entry::Rejected { datetime, error })
            }
        }
    }

    /// Reads until the sentinel, keeping only accepted entries.
    pub fn read_all(self) -> Result<DateTimeList, ReadError> {
        let mut list = DateTimeList::new();
        for entry in self {
            if let Entry::Accepted(datetime) = entry? {
                list.add(datetime);
            }
        }
        Ok(list)
    }
}

/// Yields accepted and rejected entries; stops after the sentinel or the
/// first error.
impl<R: BufRead> Iterator for EntryReader<R> {
    type Item = Result<Entry, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.read_entry() {
            Ok(Entry::End) => {
                self.finished = true;
                None
            }
            Ok(entry) => Some(Ok(entry)),
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}
