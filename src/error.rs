// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types.
//!
//! Validity in this crate is primarily a boolean query (`is_valid()` on every
//! value type). The `validate()` counterparts report *why* a value was
//! rejected through [`CalendarError`]; the entry reader reports stream
//! failures through [`ReadError`].

use crate::unit::UnitKind;

/// Reason a calendar value failed validation or parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// An hour, minute or second outside `0..limit`.
    #[error("invalid {kind}: {value} (must be 0..{limit})")]
    InvalidUnit {
        /// Which unit was out of range.
        kind: UnitKind,
        /// The rejected value.
        value: i32,
        /// Exclusive upper bound for the unit.
        limit: i32,
    },

    /// Years before 0 are outside the proleptic Gregorian range handled here.
    #[error("invalid year: {year} (must be >= 0)")]
    NegativeYear {
        /// The rejected year.
        year: i32,
    },

    /// A month number outside `1..=12`.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The rejected month.
        month: i32,
    },

    /// A day number outside `1..=max_day` for its month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The rejected day.
        day: i32,
        /// The month the day was checked against.
        month: i32,
        /// Length of that month in the date's year.
        max_day: i32,
    },

    /// Text that does not match the `d-m-y`, `h:m:s` or `d-m-y h:m:s` forms.
    #[error("malformed {what}: {input:?}")]
    Malformed {
        /// What was being parsed (`"date"`, `"time"`, `"date-time"`).
        what: &'static str,
        /// The offending input.
        input: String,
    },
}

/// Failure while reading entries from a byte stream.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// The underlying reader failed.
    #[error("failed to read entry: {0}")]
    Io(#[from] std::io::Error),

    /// A token could not be parsed as an integer.
    #[error("expected an integer, found {token:?}")]
    InvalidNumber {
        /// The offending token.
        token: String,
    },

    /// The stream ended in the middle of an entry.
    #[error("input ended while reading the {field} of an entry")]
    UnexpectedEof {
        /// The field that was expected next.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_unit() {
        let err = CalendarError::InvalidUnit {
            kind: UnitKind::Minute,
            value: 60,
            limit: 60,
        };
        assert_eq!(err.to_string(), "invalid minute: 60 (must be 0..60)");
    }

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay {
            day: 29,
            month: 2,
            max_day: 28,
        };
        assert_eq!(err.to_string(), "invalid day: 29 for month 2 (max 28)");
    }

    #[test]
    fn error_malformed_quotes_input() {
        let err = CalendarError::Malformed {
            what: "date",
            input: "1/2/2024".to_string(),
        };
        assert_eq!(err.to_string(), "malformed date: \"1/2/2024\"");
    }

    #[test]
    fn read_error_wraps_io() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        let err = ReadError::from(io);
        assert!(matches!(err, ReadError::Io(_)));
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn errors_are_send_and_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<CalendarError>();
        assert_impl::<ReadError>();
    }
}
