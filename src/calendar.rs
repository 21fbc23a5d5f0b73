use crate::date::{CalendarDate, DateError};
use chrono::{Datelike, Days, Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonthError {
    #[error("month {0} is not between 1 and 12")]
    InvalidMonth(u32),
    #[error("{year:04}-{month:02} cannot be shown as a full calendar grid")]
    OutOfRange { year: i32, month: u32 },
    #[error("'{0}' is not a year and month (YYYY-MM)")]
    Malformed(String),
}

/// The year and month currently rendered as a grid.
///
/// Construction checks that every padding day of the grid is representable, so
/// [`generate_grid`] never has to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MonthKey", into = "MonthKey")]
pub struct DisplayMonth {
    year: i32,
    month: u32,
    first: CalendarDate,
    last: CalendarDate,
    grid_start: CalendarDate,
    grid_end: CalendarDate,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct MonthKey {
    year: i32,
    month: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCell {
    pub date: CalendarDate,
    pub in_month: bool,
    pub is_today: bool,
    pub is_weekend: bool,
}

impl DisplayMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, MonthError> {
        if !(1..=12).contains(&month) {
            return Err(MonthError::InvalidMonth(month));
        }
        let out_of_range = || MonthError::OutOfRange { year, month };

        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(out_of_range)?;
        let last = first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or_else(out_of_range)?;

        // Sunday-first weeks: pad back to Sunday and forward to Saturday
        let lead = u64::from(first.weekday().num_days_from_sunday());
        let trail = 6 - u64::from(last.weekday().num_days_from_sunday());
        let grid_start = first
            .checked_sub_days(Days::new(lead))
            .ok_or_else(out_of_range)?;
        let grid_end = last
            .checked_add_days(Days::new(trail))
            .ok_or_else(out_of_range)?;

        let checked = |date: NaiveDate| CalendarDate::try_from(date).map_err(|_| out_of_range());
        Ok(Self {
            year,
            month,
            first: checked(first)?,
            last: checked(last)?,
            grid_start: checked(grid_start)?,
            grid_end: checked(grid_end)?,
        })
    }

    /// The month a date falls in.
    pub fn containing(date: CalendarDate) -> Result<Self, MonthError> {
        Self::new(date.year(), date.month())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> CalendarDate {
        self.first
    }

    pub fn last_day(&self) -> CalendarDate {
        self.last
    }

    pub fn days_in_month(&self) -> u32 {
        self.last.day()
    }

    pub fn grid_start(&self) -> CalendarDate {
        self.grid_start
    }

    pub fn grid_end(&self) -> CalendarDate {
        self.grid_end
    }

    /// Number of cells in the grid, always a whole number of weeks.
    pub fn grid_len(&self) -> usize {
        let days = self
            .grid_end
            .as_naive()
            .signed_duration_since(self.grid_start.as_naive())
            .num_days();
        usize::try_from(days).map_or(0, |d| d + 1)
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn next(&self) -> Result<Self, MonthError> {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    pub fn previous(&self) -> Result<Self, MonthError> {
        if self.month == 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }
}

impl TryFrom<MonthKey> for DisplayMonth {
    type Error = MonthError;

    fn try_from(key: MonthKey) -> Result<Self, Self::Error> {
        Self::new(key.year, key.month)
    }
}

impl From<DisplayMonth> for MonthKey {
    fn from(month: DisplayMonth) -> Self {
        Self {
            year: month.year,
            month: month.month,
        }
    }
}

impl FromStr for DisplayMonth {
    type Err = MonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || MonthError::Malformed(s.to_string());
        let (year_s, month_s) = s.split_once('-').ok_or_else(malformed)?;
        let well_formed = year_s.len() == 4
            && month_s.len() == 2
            && year_s.bytes().chain(month_s.bytes()).all(|b| b.is_ascii_digit());
        if !well_formed {
            return Err(malformed());
        }
        let year: i32 = year_s.parse().map_err(|_| malformed())?;
        let month: u32 = month_s.parse().map_err(|_| malformed())?;
        Self::new(year, month)
    }
}

impl fmt::Display for DisplayMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// The current date according to the local clock.
pub fn local_today() -> Result<CalendarDate, DateError> {
    CalendarDate::try_from(Local::now().date_naive())
}

/// Build the Sunday-first grid for `month`, including the padding days of the
/// neighbouring months.
pub fn generate_grid(month: &DisplayMonth, today: CalendarDate) -> Vec<CalendarCell> {
    month
        .grid_start
        .days_through(month.grid_end)
        .map(|date| CalendarCell {
            date,
            in_month: month.contains(date),
            is_today: date == today,
            is_weekend: date.is_weekend(),
        })
        .collect()
}

pub fn generate_grid_now(month: &DisplayMonth) -> Result<Vec<CalendarCell>, DateError> {
    Ok(generate_grid(month, local_today()?))
}

/// Split a grid into rows of seven cells.
pub fn weeks<T>(cells: &[T]) -> impl Iterator<Item = &[T]> {
    cells.chunks(DAYS_PER_WEEK)
}
