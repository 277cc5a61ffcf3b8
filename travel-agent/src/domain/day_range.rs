//! Contiguous ranges of weekdays.

use std::fmt;

use super::Weekday;

/// A contiguous run of days within a single modelled week.
///
/// A range never wraps: it always runs forward from `first` to `last`
/// inclusive, with `first <= last` in rotation order.
///
/// # Examples
///
/// ```
/// use travel_agent::domain::{DayRange, Weekday};
///
/// let range = DayRange::between(Weekday::Tuesday, Weekday::Thursday);
/// assert_eq!(range.len(), 3);
/// assert!(range.contains(Weekday::Wednesday));
/// assert!(!range.contains(Weekday::Friday));
///
/// // An end day before the start day runs to the end of the week
/// let range = DayRange::between(Weekday::Thursday, Weekday::Monday);
/// assert_eq!(range.last(), Weekday::Friday);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayRange {
    first: Weekday,
    last: Weekday,
}

impl DayRange {
    /// Build the range that starts at `start` and scans forward until `end`.
    ///
    /// If `end` comes before `start` in the rotation the scan never finds it,
    /// so the range stops at Friday instead of wrapping.
    pub fn between(start: Weekday, end: Weekday) -> Self {
        let last = if end >= start { end } else { Weekday::LAST };
        Self { first: start, last }
    }

    /// A range covering one day.
    pub fn single(day: Weekday) -> Self {
        Self {
            first: day,
            last: day,
        }
    }

    /// The whole week, Saturday through Friday.
    pub fn whole_week() -> Self {
        Self {
            first: Weekday::FIRST,
            last: Weekday::LAST,
        }
    }

    /// Returns the first day in the range.
    pub fn first(&self) -> Weekday {
        self.first
    }

    /// Returns the last day in the range.
    pub fn last(&self) -> Weekday {
        self.last
    }

    /// Whether `day` falls inside the range.
    pub fn contains(&self, day: Weekday) -> bool {
        self.first <= day && day <= self.last
    }

    /// Number of days covered.
    pub fn len(&self) -> usize {
        self.last.index() - self.first.index() + 1
    }

    /// Always false; a range covers at least one day.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether the range already reaches the last day of the week.
    pub fn reaches_week_end(&self) -> bool {
        self.last == Weekday::LAST
    }

    /// Iterate the days in order.
    pub fn days(&self) -> impl Iterator<Item = Weekday> + use<> {
        (self.first.index()..=self.last.index()).map(Weekday::from_index)
    }

    /// The range extended by one day, together with the day that was added.
    ///
    /// Returns `None` once the range reaches Friday.
    pub fn widened(&self) -> Option<(DayRange, Weekday)> {
        if self.reaches_week_end() {
            return None;
        }
        let added = self.last.succ();
        Some((
            DayRange {
                first: self.first,
                last: added,
            },
            added,
        ))
    }
}

impl fmt::Display for DayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, day) in self.days().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{day}")?;
        }
        f.write_str("]")
    }
}
