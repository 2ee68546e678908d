use std::error::Error;

use room_booking_calendar::config::{Config, OutputFormat};
use room_booking_calendar::fixtures::{self, FixtureTables};
use room_booking_calendar::ical::Ical;
use room_booking_calendar::snapshot::CalendarSnapshot;
use room_booking_calendar::view::ViewState;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[instrument(skip(config))]
fn run(config: &Config) -> Result<String, Box<dyn Error + Send + Sync>> {
    let tables = FixtureTables::default();
    let day = config.reference_day();
    let events = fixtures::generate_from(&tables, day);

    match config.output {
        OutputFormat::Json => {
            let state = ViewState::new(day).switch_view(config.view);
            let snapshot = CalendarSnapshot::build(&state, &events, &tables.resources);
            Ok(serde_json::to_string_pretty(&snapshot)?)
        }
        OutputFormat::Ics => {
            let ical = Ical::from_events(&events, &tables.resources, config.timezone);
            Ok(ical.to_ics()?)
        }
    }
}

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    // Logs go to stderr so stdout carries only the rendered output
    let _ = tracing_subscriber::fmt()
        .json()
        .with_current_span(false)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();

    let config = Config::from_env()?;
    info!(
        tz = %config.timezone.name(),
        view = ?config.view,
        output = ?config.output,
        "Loaded configuration"
    );

    let out = run(&config)?;
    println!("{}", out);
    Ok(())
}
