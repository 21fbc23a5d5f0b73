use crate::date::DayKind;
use crate::selection::SelectionSet;
use serde::{Deserialize, Serialize};

/// Totals shown in the summary panel. `total == weekdays + weekends` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStats {
    pub total: usize,
    pub weekdays: usize,
    pub weekends: usize,
}

impl DayStats {
    pub fn to_cli_summary(&self) -> String {
        format!(
            "total={}, weekdays={}, weekends={}",
            self.total, self.weekdays, self.weekends
        )
    }
}

/// Recount the whole selection.
pub fn compute_stats(selection: &SelectionSet) -> DayStats {
    let mut stats = DayStats::default();
    for date in selection.iter() {
        match date.kind() {
            DayKind::Weekday => stats.weekdays += 1,
            DayKind::Weekend => stats.weekends += 1,
        }
    }
    stats.total = selection.len();
    stats
}
