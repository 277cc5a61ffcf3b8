//! The seven-day schedule rotation.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an unrecognised day name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid weekday: {value:?}")]
pub struct InvalidWeekday {
    value: String,
}

impl InvalidWeekday {
    /// Returns the rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A day of the modelled week.
///
/// The schedule week starts on Saturday and ends on Friday. The derived
/// ordering follows that rotation, so `Saturday < Sunday < ... < Friday`.
///
/// # Examples
///
/// ```
/// use travel_agent::domain::Weekday;
///
/// let day: Weekday = "Tuesday".parse().unwrap();
/// assert_eq!(day, Weekday::Tuesday);
/// assert_eq!(day.succ(), Weekday::Wednesday);
///
/// // Abbreviations are accepted, case-insensitively
/// assert_eq!("FRI".parse::<Weekday>().unwrap(), Weekday::Friday);
///
/// // The rotation wraps
/// assert_eq!(Weekday::Friday.succ(), Weekday::Saturday);
/// assert!(Weekday::Saturday < Weekday::Friday);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Saturday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// Every day in rotation order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Saturday,
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// First day of the modelled week.
    pub const FIRST: Weekday = Weekday::Saturday;

    /// Last day of the modelled week.
    pub const LAST: Weekday = Weekday::Friday;

    /// Position in the rotation (Saturday = 0, Friday = 6).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Day at a rotation position, wrapping modulo 7.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 7]
    }

    /// The following day, wrapping from Friday to Saturday.
    pub fn succ(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The preceding day, wrapping from Saturday to Friday.
    pub fn pred(self) -> Self {
        Self::from_index(self.index() + 6)
    }

    /// Number of days going forward from `self` until `other` (0 to 6).
    pub fn days_until(self, other: Weekday) -> u32 {
        ((other.index() + 7 - self.index()) % 7) as u32
    }

    /// Lowercase three-letter abbreviation, as used in schedule day lists.
    pub fn abbrev(self) -> &'static str {
        match self {
            Weekday::Saturday => "sat",
            Weekday::Sunday => "sun",
            Weekday::Monday => "mon",
            Weekday::Tuesday => "tue",
            Weekday::Wednesday => "wed",
            Weekday::Thursday => "thu",
            Weekday::Friday => "fri",
        }
    }

    /// Full English name.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

impl FromStr for Weekday {
    type Err = InvalidWeekday;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|day| {
                needle.eq_ignore_ascii_case(day.abbrev()) || needle.eq_ignore_ascii_case(day.name())
            })
            .ok_or_else(|| InvalidWeekday {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}
