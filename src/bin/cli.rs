use day_tally::config::DEFAULT_LOG_FILTER;
use day_tally::{
    BrazilianFormat, CalendarDate, CellView, DateFormatter, DayStats, Event, SelectedDay, TallyConfig,
    TallyState, TallyView, weeks,
};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

const WEEK_HEADER: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

fn render_grid(view: &TallyView) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:^28}\n", view.month.to_string()));
    for name in WEEK_HEADER {
        out.push_str(&format!(" {name} "));
    }
    out.push('\n');

    for row in weeks(&view.cells) {
        for CellView { cell, selected, .. } in row {
            let day = cell.date.day();
            let text = if !cell.in_month && *selected {
                format!("{{{day:>2}}}")
            } else if !cell.in_month {
                format!("({day:>2})")
            } else if *selected {
                format!("[{day:>2}]")
            } else if cell.is_today {
                format!("<{day:>2}>")
            } else if cell.is_weekend {
                format!(" {day:>2}.")
            } else {
                format!(" {day:>2} ")
            };
            out.push_str(&text);
        }
        out.push('\n');
    }
    out
}

fn render_stats(stats: &DayStats) -> String {
    format!(
        "Total de Dias    : {}\nDias Úteis       : {}\nFinais de Semana : {}\n",
        stats.total, stats.weekdays, stats.weekends
    )
}

fn render_list(days: &[SelectedDay], formatter: &impl DateFormatter) -> String {
    let mut out = String::from("Datas Selecionadas:\n");
    if days.is_empty() {
        out.push_str("  Nenhum dia selecionado ainda.\n");
    }
    for day in days {
        out.push_str(&format!(
            "  {}  {}\n",
            day.label,
            formatter.kind_label(day.kind)
        ));
    }
    out
}

fn write_csv(days: &[SelectedDay]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(io::stdout());
    for day in days {
        writer.serialize(day)?;
    }
    writer.flush()?;
    Ok(())
}

fn print_help() {
    println!(
        "Commands:\n  help                 Show this help\n  show                 Show calendar, totals and selected dates\n  toggle <YYYY-MM-DD>  Select or deselect any date\n  click  <YYYY-MM-DD>  Click a grid cell (days outside the shown month are ignored)\n  clear                Clear the selection\n  next                 Show the next month\n  prev                 Show the previous month\n  stats                Show totals\n  list                 List selected dates\n  csv                  Print selected dates as CSV\n  json                 Print the current view as JSON\n  quit|exit            Exit"
    );
}

fn parse_date_arg(cmd: &str, arg: Option<&str>) -> Option<CalendarDate> {
    match arg {
        Some(raw) => match raw.parse::<CalendarDate>() {
            Ok(date) => Some(date),
            Err(e) => {
                println!("Error: {}", e);
                None
            }
        },
        None => {
            println!("Usage: {} <YYYY-MM-DD>", cmd);
            None
        }
    }
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let config = match TallyConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::from(2);
        }
    };
    init_tracing(&config.log_filter);
    info!(today = %config.today, month = %config.start_month, "starting day tally");

    let formatter = BrazilianFormat;
    let today = config.today;
    let mut state = TallyState::new(config.start_month);

    println!("Day Tally (CLI) - type 'help' for commands\n");
    print!("{}", render_grid(&state.view(today, &formatter)));

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => print_help(),
            "quit" | "exit" => break,
            "show" => {
                let view = state.view(today, &formatter);
                print!("{}", render_grid(&view));
                print!("{}", render_stats(&view.stats));
                print!("{}", render_list(&view.selected, &formatter));
            }
            "toggle" | "click" => {
                let Some(date) = parse_date_arg(cmd, parts.next()) else {
                    continue;
                };
                let event = if cmd == "toggle" {
                    Event::ToggleDate(date)
                } else {
                    Event::ClickCell(date)
                };
                let before = state.selection().contains(date);
                match state.apply(event) {
                    Ok(next) => state = next,
                    Err(e) => {
                        println!("Error: {}", e);
                        continue;
                    }
                }
                let after = state.selection().contains(date);
                let message = match (before, after) {
                    (false, true) => format!("Selected {date}."),
                    (true, false) => format!("Deselected {date}."),
                    _ => format!("{date} is outside {}; ignored.", state.month()),
                };
                println!("{} ({})", message, state.stats().to_cli_summary());
            }
            "clear" => match state.apply(Event::Clear) {
                Ok(next) => {
                    state = next;
                    println!("Selection cleared.");
                }
                Err(e) => println!("Error: {}", e),
            },
            "next" | "prev" => {
                let event = if cmd == "next" {
                    Event::NextMonth
                } else {
                    Event::PreviousMonth
                };
                match state.apply(event) {
                    Ok(next) => {
                        state = next;
                        print!("{}", render_grid(&state.view(today, &formatter)));
                    }
                    Err(e) => println!("Error: {}", e),
                }
            }
            "stats" => print!("{}", render_stats(&state.stats())),
            "list" => {
                let view = state.view(today, &formatter);
                print!("{}", render_list(&view.selected, &formatter));
            }
            "csv" => {
                let view = state.view(today, &formatter);
                if let Err(e) = write_csv(&view.selected) {
                    println!("Error writing CSV: {}", e);
                }
            }
            "json" => match serde_json::to_string_pretty(&state.view(today, &formatter)) {
                Ok(json) => println!("{}", json),
                Err(e) => println!("Error: {}", e),
            },
            other => println!("Unknown command '{}'. Type 'help'.", other),
        }
    }
    ExitCode::SUCCESS
}
