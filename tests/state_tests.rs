use day_tally::{
    BrazilianFormat, CalendarDate, DayStats, DisplayMonth, Event, MonthError, TallyState,
};

fn date(s: &str) -> CalendarDate {
    s.parse().unwrap()
}

fn march_2024() -> TallyState {
    TallyState::new(DisplayMonth::new(2024, 3).unwrap())
}

fn stats(total: usize, weekdays: usize, weekends: usize) -> DayStats {
    DayStats {
        total,
        weekdays,
        weekends,
    }
}

#[test]
fn toggling_a_saturday_twice() {
    let start = march_2024();
    let once = start.apply(Event::ToggleDate(date("2024-03-09"))).unwrap();
    assert_eq!(once.stats(), stats(1, 0, 1));

    let twice = once.apply(Event::ToggleDate(date("2024-03-09"))).unwrap();
    assert_eq!(twice.stats(), stats(0, 0, 0));
    assert_eq!(twice, start);
}

#[test]
fn weekday_and_weekend_listed_in_order() {
    let state = march_2024()
        .apply(Event::ToggleDate(date("2024-03-16")))
        .and_then(|s| s.apply(Event::ToggleDate(date("2024-03-11"))))
        .unwrap();
    assert_eq!(state.stats(), stats(2, 1, 1));

    let view = state.view(date("2024-03-15"), &BrazilianFormat);
    let listed: Vec<String> = view.selected.iter().map(|d| d.date.to_string()).collect();
    assert_eq!(listed, vec!["2024-03-11", "2024-03-16"]);
}

#[test]
fn navigation_round_trip_keeps_selection() {
    let state = march_2024()
        .apply(Event::ToggleDate(date("2024-03-11")))
        .unwrap();
    let forward = state.apply(Event::NextMonth).unwrap();
    assert_eq!(forward.month(), DisplayMonth::new(2024, 4).unwrap());
    assert_eq!(forward.selection(), state.selection());

    let back = forward.apply(Event::PreviousMonth).unwrap();
    assert_eq!(back, state);
}

#[test]
fn selection_outside_displayed_month_survives() {
    let state = march_2024()
        .apply(Event::ToggleDate(date("2023-07-01")))
        .unwrap();
    assert!(state.selection().contains(date("2023-07-01")));
    assert_eq!(state.stats(), stats(1, 0, 1));
}

#[test]
fn padding_cells_are_inert() {
    let start = march_2024();
    // 2024-02-25 is the leading padding cell of the March grid
    let after = start.apply(Event::ClickCell(date("2024-02-25"))).unwrap();
    assert_eq!(after, start);

    let clicked = start.apply(Event::ClickCell(date("2024-03-05"))).unwrap();
    assert!(clicked.selection().contains(date("2024-03-05")));
}

#[test]
fn clear_empties_selection_but_keeps_month() {
    let state = march_2024()
        .apply(Event::NextMonth)
        .and_then(|s| s.apply(Event::ToggleDate(date("2024-04-01"))))
        .and_then(|s| s.apply(Event::Clear))
        .unwrap();
    assert!(state.selection().is_empty());
    assert_eq!(state.month(), DisplayMonth::new(2024, 4).unwrap());
    assert_eq!(state.stats(), stats(0, 0, 0));
}

#[test]
fn overflow_is_reported_and_state_kept() {
    let edge = TallyState::new(DisplayMonth::new(9999, 11).unwrap());
    let result = edge.apply(Event::NextMonth);
    assert_eq!(
        result,
        Err(MonthError::OutOfRange {
            year: 9999,
            month: 12
        })
    );
    assert_eq!(edge.month(), DisplayMonth::new(9999, 11).unwrap());
}

#[test]
fn view_marks_selected_and_interactive_cells() {
    let state = march_2024()
        .apply(Event::ToggleDate(date("2024-03-09")))
        .unwrap();
    let view = state.view(date("2024-03-15"), &BrazilianFormat);
    assert_eq!(view.cells.len(), 42);
    assert_eq!(view.stats, stats(1, 0, 1));

    let sat = view
        .cells
        .iter()
        .find(|c| c.cell.date == date("2024-03-09"))
        .unwrap();
    assert!(sat.selected);
    assert!(sat.interactive);
    assert!(sat.cell.is_weekend);

    let padding = &view.cells[0];
    assert!(!padding.interactive);
    assert!(!padding.selected);

    let selected_cells = view.cells.iter().filter(|c| c.selected).count();
    assert_eq!(selected_cells, 1);
}

#[test]
fn selected_day_in_padding_shows_as_selected() {
    // April 1 sits in the trailing padding of the March grid
    let state = march_2024()
        .apply(Event::ToggleDate(date("2024-04-01")))
        .unwrap();
    let view = state.view(date("2024-03-15"), &BrazilianFormat);
    let cell = view
        .cells
        .iter()
        .find(|c| c.cell.date == date("2024-04-01"))
        .unwrap();
    assert!(cell.selected);
    assert!(!cell.interactive);
}

#[test]
fn view_serializes_to_json() {
    let state = march_2024()
        .apply(Event::ToggleDate(date("2024-03-11")))
        .unwrap();
    let json = serde_json::to_value(state.view(date("2024-03-15"), &BrazilianFormat)).unwrap();
    assert_eq!(json["month"]["month"], 3);
    assert_eq!(json["stats"]["weekdays"], 1);
    assert_eq!(json["selected"][0]["date"], "2024-03-11");
    assert_eq!(json["selected"][0]["kind"], "weekday");
    assert_eq!(json["cells"][0]["date"], "2024-02-25");
    assert_eq!(json["cells"][0]["interactive"], false);
}

#[test]
fn apply_with_debug_logging_enabled() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::sink)
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        let state = march_2024()
            .apply(Event::ToggleDate(date("2024-03-09")))
            .and_then(|s| s.apply(Event::ClickCell(date("2024-02-25"))))
            .and_then(|s| s.apply(Event::NextMonth))
            .unwrap();
        assert_eq!(state.stats(), stats(1, 0, 1));
        assert!(TallyState::new(DisplayMonth::new(9999, 11).unwrap())
            .apply(Event::NextMonth)
            .is_err());
    });
}
