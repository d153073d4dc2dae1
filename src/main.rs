// Calendar Layout
// Command-line entry point: lays out an events file for a day, week or month

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use calendar_layout::models::event::Event;
use calendar_layout::models::settings::LayoutSettings;
use calendar_layout::models::window::Window;
use calendar_layout::services::day_index::build_day_index;
use calendar_layout::services::layout::layout;
use calendar_layout::services::render::{CssGridAdapter, GridAdapter, PercentAdapter, RenderOptions};
use calendar_layout::services::settings::SettingsService;
use calendar_layout::services::week::{build_month, week_containing};

#[derive(Parser)]
#[command(name = "calendar-layout", version, about = "Lay out calendar events for day and week views")]
struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the day grid for one date
    Layout {
        /// JSON array of events
        #[arg(long)]
        events: PathBuf,
        /// Day to lay out (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        #[arg(long, value_enum, default_value_t = Adapter::Css)]
        adapter: Adapter,
    },
    /// Print the day buckets of an events file
    Index {
        #[arg(long)]
        events: PathBuf,
    },
    /// Print the week containing a date
    Week {
        #[arg(long)]
        events: PathBuf,
        #[arg(long)]
        date: NaiveDate,
    },
    /// Print the month grid containing a date
    Month {
        #[arg(long)]
        events: PathBuf,
        #[arg(long)]
        date: NaiveDate,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Adapter {
    Css,
    Percent,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;

    match cli.command {
        Command::Layout { events, date, adapter } => {
            let events = load_events(&events)?;
            // The scroll anchor handles the day start hour; the window covers the full day.
            let window = Window::for_day(date, settings.time_zone, 0)?;
            let result = layout(&events, &window, settings.fixed_split_count)?;
            log::info!(
                "Laid out {} events for {} in {} columns",
                result.assignments.len(),
                date,
                result.column_count
            );

            let options = RenderOptions::from(&settings);
            match adapter {
                Adapter::Css => print_json(&CssGridAdapter::new(options).render(&result)),
                Adapter::Percent => print_json(&PercentAdapter::new(options).render(&result)),
            }
        }
        Command::Index { events } => {
            let events = load_events(&events)?;
            let index = build_day_index(&events, settings.time_zone);
            let buckets: Vec<DayBucket<'_>> = index
                .iter()
                .map(|(day, bucket)| DayBucket {
                    day,
                    events: bucket.iter().map(|event| event.id.as_str()).collect(),
                })
                .collect();
            print_json(&buckets)
        }
        Command::Week { events, date } => {
            let events = load_events(&events)?;
            let index = build_day_index(&events, settings.time_zone);
            print_json(&week_containing(date, settings.week_start, &index))
        }
        Command::Month { events, date } => {
            let events = load_events(&events)?;
            let index = build_day_index(&events, settings.time_zone);
            print_json(&build_month(date, settings.week_start, &index))
        }
    }
}

#[derive(Serialize)]
struct DayBucket<'a> {
    day: &'a str,
    events: Vec<&'a str>,
}

fn load_settings(path: Option<&Path>) -> Result<LayoutSettings> {
    let service = match path {
        Some(path) => SettingsService::new(path),
        None => SettingsService::at_default_location()?,
    };
    service.get()
}

fn load_events(path: &Path) -> Result<Vec<Event>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read events from {}", path.display()))?;
    let events: Vec<Event> = serde_json::from_str(&data)
        .with_context(|| format!("failed to parse events from {}", path.display()))?;
    log::debug!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let output = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{output}");
    Ok(())
}
