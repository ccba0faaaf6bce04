// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Day-of-week labels for the `0..=6` index produced by the weekday congruence.

use std::fmt;

/// Day of the week, numbered from Sunday = 0.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Maps `0..=6` (Sunday first) to a weekday. Any other index yields `None`.
    pub fn from_index(index: i32) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Maps any integer onto the week, reducing it modulo 7 first.
    pub(crate) const fn from_index_wrapping(index: i32) -> Self {
        Self::ALL[index.rem_euclid(7) as usize]
    }

    #[inline]
    pub const fn index(self) -> i32 {
        self as i32
    }

    pub const fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        Self::ALL[day.num_days_from_sunday() as usize]
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Sunday => chrono::Weekday::Sun,
            Weekday::Monday => chrono::Weekday::Mon,
            Weekday::Tuesday => chrono::Weekday::Tue,
            Weekday::Wednesday => chrono::Weekday::Wed,
            Weekday::Thursday => chrono::Weekday::Thu,
            Weekday::Friday => chrono::Weekday::Fri,
            Weekday::Saturday => chrono::Weekday::Sat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        for i in 0..7 {
            let day = Weekday::from_index(i).unwrap();
            assert_eq!(day.index(), i);
        }
        assert_eq!(Weekday::from_index(7), None);
        assert_eq!(Weekday::from_index(-1), None);
        assert_eq!(Weekday::from_index_wrapping(-1), Weekday::Saturday);
        assert_eq!(Weekday::from_index_wrapping(8), Weekday::Monday);
    }

    #[test]
    fn chrono_conversion_matches_numbering() {
        assert_eq!(Weekday::from(chrono::Weekday::Sun), Weekday::Sunday);
        assert_eq!(Weekday::from(chrono::Weekday::Sat), Weekday::Saturday);
        assert_eq!(chrono::Weekday::from(Weekday::Monday), chrono::Weekday::Mon);
    }

    #[test]
    fn display_name() {
        assert_eq!(Weekday::Wednesday.to_string(), "Wednesday");
    }
}
