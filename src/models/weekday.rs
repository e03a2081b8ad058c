//! Days of the roster week.
//!
//! The week is circular: the day before Monday is Sunday. Canonical order
//! (Monday first) is used for grid layout and generation tie-breaking.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All days in canonical order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Position in the canonical week (Monday = 0).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Day at a canonical position, wrapping modulo 7.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 7]
    }

    /// The preceding day, wrapping from Monday to Sunday.
    pub fn previous(self) -> Self {
        Self::from_index(self.index() + 6)
    }

    /// The following day, wrapping from Sunday to Monday.
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// English day name.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognised day name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown weekday: {0}")]
pub struct ParseWeekdayError(pub String);

impl FromStr for Weekday {
    type Err = ParseWeekdayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseWeekdayError(s.to_string()))
    }
}
