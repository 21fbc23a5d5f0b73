use crate::calendar::{DisplayMonth, MonthError, local_today};
use crate::date::{CalendarDate, DateError};
use thiserror::Error;

pub const TODAY_VAR: &str = "DAY_TALLY_TODAY";
pub const START_MONTH_VAR: &str = "DAY_TALLY_START_MONTH";
pub const LOG_VAR: &str = "DAY_TALLY_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}: {source}")]
    Date {
        var: &'static str,
        #[source]
        source: DateError,
    },
    #[error("{var}: {source}")]
    Month {
        var: &'static str,
        #[source]
        source: MonthError,
    },
}

/// Runtime settings, read from `DAY_TALLY_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyConfig {
    pub today: CalendarDate,
    pub start_month: DisplayMonth,
    pub log_filter: String,
}

impl TallyConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let today = match value(TODAY_VAR) {
            Some(raw) => raw.parse::<CalendarDate>().map_err(|source| ConfigError::Date {
                var: TODAY_VAR,
                source,
            })?,
            None => local_today().map_err(|source| ConfigError::Date {
                var: TODAY_VAR,
                source,
            })?,
        };

        let start_month = match value(START_MONTH_VAR) {
            Some(raw) => raw.parse::<DisplayMonth>(),
            None => DisplayMonth::containing(today),
        }
        .map_err(|source| ConfigError::Month {
            var: START_MONTH_VAR,
            source,
        })?;

        let log_filter = value(LOG_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            today,
            start_month,
            log_filter,
        })
    }
}
