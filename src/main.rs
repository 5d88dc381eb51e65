mod commands;
mod config;
mod render;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use agenda_core::View;

#[derive(Parser)]
#[command(name = "agenda")]
#[command(about = "Browse and manage your local calendar: month/week/day views, events, and search")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new event
    New {
        /// Event title (prompted for when omitted)
        #[arg(short, long)]
        title: Option<String>,

        /// Start ("2026-03-20T15:00", or "2026-03-20" for all-day)
        #[arg(short, long)]
        start: Option<String>,

        /// End (defaults to one hour after a timed start, or the start day)
        #[arg(short, long)]
        end: Option<String>,

        /// Event description
        #[arg(short, long)]
        description: Option<String>,

        /// Display color (hex, e.g. "#16a34a")
        #[arg(short, long)]
        color: Option<String>,
    },
    /// Show the calendar grid
    Show {
        /// View granularity: month, week, or day
        #[arg(short, long, default_value = "month")]
        view: String,

        /// Reference date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Step the reference date by this many views (-1 = previous)
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i32,

        /// Only show events matching this text
        #[arg(short, long)]
        query: Option<String>,
    },
    /// List all events, soonest first
    List,
    /// Search events by title or description
    Search { query: String },
    /// Edit fields of an existing event
    Edit {
        /// Id of the event to edit
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        /// New start ("2026-03-20T15:00" or "2026-03-20")
        #[arg(short, long)]
        start: Option<String>,

        /// New end ("2026-03-20T16:00" or "2026-03-20")
        #[arg(short, long)]
        end: Option<String>,

        #[arg(short, long)]
        color: Option<String>,

        /// Switch the event between all-day and timed
        #[arg(long)]
        all_day: Option<bool>,
    },
    /// Delete an event by id
    Delete { id: String },
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::New {
            title,
            start,
            end,
            description,
            color,
        } => commands::new::run(title, start, end, description, color),
        Commands::Show {
            view,
            date,
            offset,
            query,
        } => {
            let view: View = view.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            let date = view.step(resolve_date(date.as_deref())?, offset);
            commands::show::run(view, date, query.as_deref())
        }
        Commands::List => commands::list::run(),
        Commands::Search { query } => commands::search::run(&query),
        Commands::Edit {
            id,
            title,
            description,
            start,
            end,
            color,
            all_day,
        } => commands::edit::run(&id, title, description, start, end, color, all_day),
        Commands::Delete { id } => commands::delete::run(&id),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parse a YYYY-MM-DD argument, defaulting to today.
fn resolve_date(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| anyhow::anyhow!("Invalid date format '{}'. Expected YYYY-MM-DD", s)),
        None => Ok(Local::now().date_naive()),
    }
}
