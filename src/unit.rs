// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Bounded clock units.
//!
//! A [`BoundedUnit`] is a raw integer tagged with the [`UnitKind`] that
//! defines its valid range. Construction never fails: out-of-range values
//! are representable (carry propagation and duration arithmetic produce them
//! on purpose) and are detected through [`BoundedUnit::is_valid`].

use std::fmt;

use crate::error::CalendarError;

/// Which clock field a [`BoundedUnit`] represents.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Hour,
    Minute,
    Second,
}

impl UnitKind {
    /// Exclusive upper bound of the unit's valid range.
    #[inline]
    pub const fn limit(self) -> i32 {
        match self {
            UnitKind::Hour => 24,
            UnitKind::Minute | UnitKind::Second => 60,
        }
    }

    /// Lower-case name used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            UnitKind::Hour => "hour",
            UnitKind::Minute => "minute",
            UnitKind::Second => "second",
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An integer with a kind-dependent validity range `0..kind.limit()`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BoundedUnit {
    kind: UnitKind,
    value: i32,
}

impl BoundedUnit {
    #[inline]
    pub const fn new(kind: UnitKind, value: i32) -> Self {
        Self { kind, value }
    }

    #[inline]
    pub const fn hour(value: i32) -> Self {
        Self::new(UnitKind::Hour, value)
    }

    #[inline]
    pub const fn minute(value: i32) -> Self {
        Self::new(UnitKind::Minute, value)
    }

    #[inline]
    pub const fn second(value: i32) -> Self {
        Self::new(UnitKind::Second, value)
    }

    #[inline]
    pub const fn kind(&self) -> UnitKind {
        self.kind
    }

    #[inline]
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Same kind, different value.
    #[inline]
    pub(crate) const fn with_value(self, value: i32) -> Self {
        Self::new(self.kind, value)
    }

    /// `true` iff `0 <= value < kind.limit()`.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.value >= 0 && self.value < self.kind.limit()
    }

    /// Like [`is_valid`](Self::is_valid), but reports the offending value.
    pub fn validate(&self) -> Result<(), CalendarError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(CalendarError::InvalidUnit {
                kind: self.kind,
                value: self.value,
                limit: self.kind.limit(),
            })
        }
    }
}

impl fmt::Display for BoundedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_per_kind() {
        assert_eq!(UnitKind::Hour.limit(), 24);
        assert_eq!(UnitKind::Minute.limit(), 60);
        assert_eq!(UnitKind::Second.limit(), 60);
    }

    #[test]
    fn range_edges() {
        assert!(BoundedUnit::hour(0).is_valid());
        assert!(BoundedUnit::hour(23).is_valid());
        assert!(!BoundedUnit::hour(24).is_valid());
        assert!(!BoundedUnit::hour(-1).is_valid());

        assert!(BoundedUnit::minute(59).is_valid());
        assert!(!BoundedUnit::minute(60).is_valid());
        assert!(BoundedUnit::second(59).is_valid());
        assert!(!BoundedUnit::second(60).is_valid());
    }

    #[test]
    fn construction_never_rejects() {
        let unit = BoundedUnit::second(125);
        assert_eq!(unit.value(), 125);
        assert_eq!(unit.kind(), UnitKind::Second);
        assert!(!unit.is_valid());
    }

    #[test]
    fn validate_reports_limit() {
        assert_eq!(BoundedUnit::minute(30).validate(), Ok(()));
        assert_eq!(
            BoundedUnit::hour(24).validate(),
            Err(CalendarError::InvalidUnit {
                kind: UnitKind::Hour,
                value: 24,
                limit: 24,
            })
        );
    }

    #[test]
    fn display_is_raw_value() {
        assert_eq!(BoundedUnit::minute(7).to_string(), "7");
        assert_eq!(UnitKind::Second.to_string(), "second");
    }
}
