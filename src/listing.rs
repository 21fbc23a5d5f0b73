use crate::date::{CalendarDate, DayKind};
use crate::selection::SelectionSet;
use serde::{Deserialize, Serialize};

/// Turns dates into display text for one locale.
pub trait DateFormatter {
    fn format_date(&self, date: CalendarDate) -> String;

    /// Short badge shown next to each listed date.
    fn kind_label(&self, kind: DayKind) -> &'static str;
}

/// Brazilian Portuguese conventions: "09/03/2024", "Útil" and "FDS" badges.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrazilianFormat;

impl DateFormatter for BrazilianFormat {
    fn format_date(&self, date: CalendarDate) -> String {
        format!("{:02}/{:02}/{:04}", date.day(), date.month(), date.year())
    }

    fn kind_label(&self, kind: DayKind) -> &'static str {
        match kind {
            DayKind::Weekday => "Útil",
            DayKind::Weekend => "FDS",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedDay {
    pub date: CalendarDate,
    pub kind: DayKind,
    pub label: String,
}

/// Selected dates in ascending order, each with its classification and display label.
pub fn selected_days<F: DateFormatter + ?Sized>(
    selection: &SelectionSet,
    formatter: &F,
) -> Vec<SelectedDay> {
    selection
        .sorted()
        .into_iter()
        .map(|date| SelectedDay {
            date,
            kind: date.kind(),
            label: formatter.format_date(date),
        })
        .collect()
}
