pub mod calendar;
pub mod config;
pub mod date;
pub mod listing;
pub mod selection;
pub mod state;
pub mod stats;

pub use calendar::{
    CalendarCell, DisplayMonth, MonthError, generate_grid, generate_grid_now, local_today, weeks,
};
pub use config::{ConfigError, TallyConfig};
pub use date::{CalendarDate, DateError, DayKind};
pub use listing::{BrazilianFormat, DateFormatter, SelectedDay, selected_days};
pub use selection::SelectionSet;
pub use state::{CellView, Event, TallyState, TallyView};
pub use stats::{DayStats, compute_stats};
