use std::env;

use anyhow::{Context, bail};
use chrono::{Datelike, Local, NaiveDate};

use slotbook::app::{BookingApp, ViewType};
use slotbook::booking::confirmation::{self, Confirmation};
use slotbook::booking::event_type;
use slotbook::booking::query;
use slotbook::schedule::month_grid::CalendarCell;
use slotbook::schedule::slots::SlotCatalog;
use slotbook::storage::config::Config;

#[derive(Debug, Clone, PartialEq)]
pub enum CliMode {
    Events,
    Month { event_id: String, reference: NaiveDate },
    Week { event_id: String, reference: NaiveDate },
    Book {
        event_id: String,
        date: NaiveDate,
        time: String,
        contact: Option<(String, String)>,
        json: bool,
    },
    Decode { event_id: String, query: String, json: bool },
}

pub fn parse_cli_mode() -> Result<CliMode, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    parse_args(&args)
}

fn parse_args(args: &[String]) -> Result<CliMode, String> {
    let json = args.iter().any(|arg| arg == "--json");
    let mut args = args.iter().filter(|arg| arg.as_str() != "--json");

    let mode = match args.next().map(String::as_str) {
        Some("--events") | None => CliMode::Events,
        Some("--month") => {
            let event_id = required_value(&mut args, "--month EVENT_ID")?;
            let reference = match args.next() {
                Some(raw) => parse_month(raw)?,
                None => Local::now().date_naive(),
            };
            CliMode::Month { event_id, reference }
        }
        Some("--week") => {
            let event_id = required_value(&mut args, "--week EVENT_ID")?;
            let reference = match args.next() {
                Some(raw) => parse_date(raw)?,
                None => Local::now().date_naive(),
            };
            CliMode::Week { event_id, reference }
        }
        Some("--book") => {
            let event_id = required_value(&mut args, "--book EVENT_ID")?;
            let date = parse_date(&required_value(&mut args, "--book DATE")?)?;
            let time = required_value(&mut args, "--book TIME")?;
            let contact = match args.next() {
                Some(name) => {
                    let email = required_value(&mut args, "EMAIL after NAME")?;
                    Some((name.clone(), email))
                }
                None => None,
            };
            CliMode::Book { event_id, date, time, contact, json }
        }
        Some("--decode") => {
            let event_id = required_value(&mut args, "--decode EVENT_ID")?;
            let query = required_value(&mut args, "--decode QUERY")?;
            CliMode::Decode { event_id, query, json }
        }
        Some("--help") => {
            println!("{}", usage());
            std::process::exit(0);
        }
        Some(other) => return Err(format!("Unknown argument: {}", other)),
    };

    if let Some(extra) = args.next() {
        return Err(format!("Unexpected argument: {}", extra));
    }
    Ok(mode)
}

fn required_value<'a, I>(args: &mut I, what: &str) -> Result<String, String>
where
    I: Iterator<Item = &'a String>,
{
    args.next()
        .map(String::clone)
        .ok_or_else(|| format!("Missing value for {}", what))
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y/%m/%d")
        .map_err(|_| format!("Invalid date '{}'. Use YYYY/MM/DD.", raw))
}

fn parse_month(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(&format!("{}/1", raw), "%Y/%m/%d")
        .map_err(|_| format!("Invalid month '{}'. Use YYYY/MM.", raw))
}

pub fn usage() -> String {
    [
        "Usage: slotbook [COMMAND] [--json]",
        "  --events                                      list bookable event types",
        "  --month EVENT_ID [YYYY/MM]                    print the month grid and its slots",
        "  --week EVENT_ID [YYYY/MM/DD]                  print the week window and its slots",
        "  --book EVENT_ID YYYY/MM/DD HH:MM [NAME EMAIL] select a slot and print the handoff",
        "  --decode EVENT_ID QUERY                       decode a confirmation query string",
    ]
    .join("\n")
}

pub fn run(mode: CliMode) -> anyhow::Result<()> {
    let config = Config::load_or_create().context("failed to load configuration")?;

    match mode {
        CliMode::Events => run_events(&config),
        CliMode::Month { event_id, reference } => run_month(&event_id, reference, &config),
        CliMode::Week { event_id, reference } => run_week(&event_id, reference, &config),
        CliMode::Book { event_id, date, time, contact, json } => {
            run_book(&event_id, date, &time, contact, json, &config)
        }
        CliMode::Decode { event_id, query, json } => run_decode(&event_id, &query, json, &config),
    }
}

fn run_events(config: &Config) -> anyhow::Result<()> {
    println!("{} is hosting:", config.host.name);
    println!();
    for event in event_type::catalog() {
        println!("  {} ({})  {}", event.title, event.duration_label(), query::calendar_path(&event.id));
        println!("      {}", event.description);
    }
    println!();
    println!("Powered by {}", config.booking.organization);
    Ok(())
}

fn lookup_event(event_id: &str) -> anyhow::Result<slotbook::EventType> {
    match event_type::find(event_id) {
        Some(event) => Ok(event),
        None => bail!("unknown event type: {}", event_id),
    }
}

fn run_month(event_id: &str, reference: NaiveDate, config: &Config) -> anyhow::Result<()> {
    let event = lookup_event(event_id)?;
    let app = BookingApp::new(event, reference);
    tracing::info!("Rendering month grid {}", app.grid.title());

    let mut lines = Vec::new();
    lines.push(format!("{} – {}", app.event.title, app.grid.title()));
    let options: Vec<String> = event_type::DURATION_OPTIONS
        .iter()
        .map(|minutes| format!("{}m", minutes))
        .collect();
    lines.push(format!(
        "Duration: {} (options: {})",
        app.event.duration_label(),
        options.join(" ")
    ));
    lines.push(String::new());
    lines.push("SUN MON TUE WED THU FRI SAT".to_string());

    let mut row = Vec::new();
    for cell in app.grid.cells() {
        match cell {
            CalendarCell::Blank => row.push("   ".to_string()),
            CalendarCell::Day(day) => row.push(format!("{:>3}", day)),
        }
        if row.len() == 7 {
            lines.push(row.join(" "));
            row.clear();
        }
    }
    if !row.is_empty() {
        lines.push(row.join(" "));
    }

    lines.push(String::new());
    lines.push("Available times:".to_string());
    for label in app.active_catalog().display_labels(config.time_format()) {
        lines.push(format!("  {}", label));
    }

    println!("{}", lines.join("\n"));
    Ok(())
}

fn run_week(event_id: &str, reference: NaiveDate, config: &Config) -> anyhow::Result<()> {
    let event = lookup_event(event_id)?;
    let app = BookingApp::new(event, reference).with_view(ViewType::Weekly);
    tracing::info!("Rendering week {}", app.week.label());

    let mut lines = Vec::new();
    lines.push(format!("{} – {}", app.event.title, app.week.label()));

    let header: Vec<String> = app
        .week
        .days()
        .iter()
        .map(|day| day.format("%a %d").to_string().to_uppercase())
        .collect();
    lines.push(format!("{:>8}  {}", "", header.join("  ")));

    let catalog = SlotCatalog::hourly();
    let format = config.time_format();
    for label in catalog.labels() {
        let display = slotbook::schedule::TimeOfDay::parse(&label)
            .map(|slot| slot.display(format))
            .unwrap_or_else(|| label.clone());
        let cells: Vec<String> = app
            .week
            .days()
            .iter()
            .map(|day| {
                if app.is_busy(*day, &label) {
                    format!("{:<6}", "Busy")
                } else {
                    format!("{:<6}", "·")
                }
            })
            .collect();
        lines.push(format!("{:>8}  {}", display, cells.join("  ")));
    }

    println!("{}", lines.join("\n"));
    Ok(())
}

fn run_book(
    event_id: &str,
    date: NaiveDate,
    time: &str,
    contact: Option<(String, String)>,
    json: bool,
    config: &Config,
) -> anyhow::Result<()> {
    let event = lookup_event(event_id)?;
    let mut app = BookingApp::new(event, date);

    if SlotCatalog::hourly().contains(time) {
        app.switch_view(ViewType::Weekly);
        app.select_slot(date, time);
    } else {
        app.select_day(date.day());
        app.select_time(time);
    }

    let Some(selection) = app.selection.selection() else {
        bail!("slot {} on {} is not bookable", time, date);
    };
    tracing::info!("Selected {} at {}", selection.date, selection.time);

    match contact {
        None => {
            println!("{}", query::form_path(event_id, &selection));
            Ok(())
        }
        Some((name, email)) => {
            let path = query::confirmation_path(event_id, &selection, &name, &email);
            let encoded = query::encode_details(&selection, &name, &email);
            let decoded = query::decode_confirmation(event_id, &encoded)
                .context("handoff query failed to decode")?;
            let confirmation = confirmation::build(&decoded, config)
                .context("confirmation could not be built")?;

            println!("{}", path);
            println!();
            print_confirmation(&confirmation, json, config)
        }
    }
}

fn run_decode(event_id: &str, raw_query: &str, json: bool, config: &Config) -> anyhow::Result<()> {
    let decoded = match query::decode_confirmation(event_id, raw_query) {
        Ok(decoded) => decoded,
        Err(err) => {
            tracing::warn!("Rejected booking query: {}", err);
            println!("Invalid confirmation link ({})", err);
            println!("Return to the profile page to start over.");
            return Ok(());
        }
    };

    let confirmation = match confirmation::build(&decoded, config) {
        Ok(confirmation) => confirmation,
        Err(err) => {
            tracing::warn!("Rejected booking query: {}", err);
            println!("Invalid confirmation link ({})", err);
            println!("Return to the profile page to start over.");
            return Ok(());
        }
    };

    print_confirmation(&confirmation, json, config)
}

fn print_confirmation(confirmation: &Confirmation, json: bool, config: &Config) -> anyhow::Result<()> {
    if json {
        let rendered = serde_json::to_string_pretty(confirmation)
            .context("failed to serialize confirmation")?;
        println!("{}", rendered);
        return Ok(());
    }

    let mut lines = Vec::new();
    lines.push("Meeting Scheduled!".to_string());
    lines.push(format!("Reference: {}", confirmation.reference));
    lines.push(String::new());
    lines.push(format!("{} – {}", confirmation.title, confirmation.attendee_line()));
    lines.push(confirmation.date_label.clone());
    lines.push(format!("{} ({})", confirmation.time_range, config.booking.timezone_label));
    lines.push(confirmation.location.clone());
    lines.push(String::new());
    lines.push("Participants:".to_string());
    for participant in &confirmation.participants {
        let role = if participant.is_host { " (Host)" } else { "" };
        lines.push(format!("  {} <{}>{}", participant.name, participant.email, role));
    }

    println!("{}", lines.join("\n"));
    Ok(())
}
