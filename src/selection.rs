use crate::date::CalendarDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The set of toggled-on days.
///
/// Updates never touch the receiver: `toggle` and `clear` hand back a new set, so a
/// holder of the old value never observes a half-applied change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CalendarDate>", into = "Vec<CalendarDate>")]
pub struct SelectionSet {
    dates: HashSet<CalendarDate>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `date` if present, add it otherwise.
    pub fn toggle(&self, date: CalendarDate) -> Self {
        let mut dates = self.dates.clone();
        if !dates.remove(&date) {
            dates.insert(date);
        }
        Self { dates }
    }

    pub fn clear(&self) -> Self {
        Self::new()
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        self.dates.iter().copied()
    }

    /// Dates in ascending order (identical to sorting their ISO strings).
    pub fn sorted(&self) -> Vec<CalendarDate> {
        let mut dates: Vec<CalendarDate> = self.iter().collect();
        dates.sort();
        dates
    }
}

impl FromIterator<CalendarDate> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = CalendarDate>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<CalendarDate>> for SelectionSet {
    fn from(dates: Vec<CalendarDate>) -> Self {
        dates.into_iter().collect()
    }
}

impl From<SelectionSet> for Vec<CalendarDate> {
    fn from(selection: SelectionSet) -> Self {
        selection.sorted()
    }
}
