use crate::calendar::{CalendarCell, DisplayMonth, MonthError, generate_grid};
use crate::date::CalendarDate;
use crate::listing::{DateFormatter, SelectedDay, selected_days};
use crate::selection::SelectionSet;
use crate::stats::{DayStats, compute_stats};
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, enabled, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Toggle any date, whether or not it is on screen.
    ToggleDate(CalendarDate),
    /// A click on a grid cell. Padding cells from neighbouring months are inert.
    ClickCell(CalendarDate),
    Clear,
    NextMonth,
    PreviousMonth,
}

/// Everything the widget remembers: the selection and the month on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyState {
    selection: SelectionSet,
    month: DisplayMonth,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    #[serde(flatten)]
    pub cell: CalendarCell,
    pub selected: bool,
    pub interactive: bool,
}

/// Derived values handed to renderers after every transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyView {
    pub month: DisplayMonth,
    pub cells: Vec<CellView>,
    pub stats: DayStats,
    pub selected: Vec<SelectedDay>,
}

impl TallyState {
    pub fn new(month: DisplayMonth) -> Self {
        Self {
            selection: SelectionSet::new(),
            month,
        }
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn month(&self) -> DisplayMonth {
        self.month
    }

    /// Apply one event and return the resulting state.
    ///
    /// `self` is left untouched; when navigation would leave the supported range the
    /// error is returned and the caller keeps the current state.
    pub fn apply(&self, event: Event) -> Result<Self, MonthError> {
        let next = match event {
            Event::ToggleDate(date) => self.with_selection(self.selection.toggle(date)),
            Event::ClickCell(date) if self.month.contains(date) => {
                self.with_selection(self.selection.toggle(date))
            }
            Event::ClickCell(date) => {
                debug!(%date, month = %self.month, "ignoring click on padding cell");
                Ok(self.clone())
            }
            Event::Clear => self.with_selection(self.selection.clear()),
            Event::NextMonth => self.with_month(self.month.next()),
            Event::PreviousMonth => self.with_month(self.month.previous()),
        }
        .inspect_err(|err| warn!(?event, %err, "navigation rejected"))?;

        if enabled!(Level::DEBUG) {
            let stats = compute_stats(&next.selection);
            debug!(
                ?event,
                month = %next.month,
                total = stats.total,
                weekdays = stats.weekdays,
                weekends = stats.weekends,
                "applied event"
            );
        }
        Ok(next)
    }

    pub fn stats(&self) -> DayStats {
        compute_stats(&self.selection)
    }

    pub fn view<F: DateFormatter + ?Sized>(&self, today: CalendarDate, formatter: &F) -> TallyView {
        let cells = generate_grid(&self.month, today)
            .into_iter()
            .map(|cell| CellView {
                selected: self.selection.contains(cell.date),
                interactive: cell.in_month,
                cell,
            })
            .collect();
        TallyView {
            month: self.month,
            cells,
            stats: self.stats(),
            selected: selected_days(&self.selection, formatter),
        }
    }

    fn with_selection(&self, selection: SelectionSet) -> Result<Self, MonthError> {
        Ok(Self {
            selection,
            month: self.month,
        })
    }

    fn with_month(&self, month: Result<DisplayMonth, MonthError>) -> Result<Self, MonthError> {
        Ok(Self {
            selection: self.selection.clone(),
            month: month?,
        })
    }
}
