use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const ISO_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("'{0}' is not an ISO calendar date (YYYY-MM-DD)")]
    Malformed(String),
    #[error("{0} is outside the supported range 0000-01-01..=9999-12-31")]
    OutOfRange(NaiveDate),
}

/// A calendar day keyed by its canonical "YYYY-MM-DD" form.
///
/// Years are limited to four digits so that ordering the ISO strings and ordering the
/// dates always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayKind {
    Weekday,
    Weekend,
}

impl CalendarDate {
    pub const MIN_YEAR: i32 = 0;
    pub const MAX_YEAR: i32 = 9999;

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| DateError::Malformed(format!("{year:04}-{month:02}-{day:02}")))
            .and_then(Self::try_from)
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Saturday and Sunday are weekend days; every other day is a weekday.
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    pub fn kind(&self) -> DayKind {
        if self.is_weekend() {
            DayKind::Weekend
        } else {
            DayKind::Weekday
        }
    }

    /// Every day from `self` up to and including `last`.
    ///
    /// Both ends are already in range, so every day between them is too.
    pub fn days_through(self, last: CalendarDate) -> impl Iterator<Item = CalendarDate> {
        self.0
            .iter_days()
            .take_while(move |day| *day <= last.0)
            .map(CalendarDate)
    }

    fn has_iso_shape(s: &str) -> bool {
        let bytes = s.as_bytes();
        bytes.len() == 10
            && bytes.iter().enumerate().all(|(idx, b)| match idx {
                4 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            })
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = DateError;

    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        if (Self::MIN_YEAR..=Self::MAX_YEAR).contains(&value.year()) {
            Ok(Self(value))
        } else {
            Err(DateError::OutOfRange(value))
        }
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(value: CalendarDate) -> Self {
        value.0
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !Self::has_iso_shape(s) {
            return Err(DateError::Malformed(s.to_string()));
        }
        let date = NaiveDate::parse_from_str(s, ISO_FORMAT)
            .map_err(|_| DateError::Malformed(s.to_string()))?;
        Self::try_from(date)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = DateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CalendarDate> for String {
    fn from(value: CalendarDate) -> Self {
        value.to_string()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}
