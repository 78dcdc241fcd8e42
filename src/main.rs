mod commands;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "daygrid")]
#[command(about = "Lay out dashboard calendar events for week-grid rendering")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bucket events onto a day window and assign overlap columns
    Week {
        /// Events JSON file ("-" or omitted reads stdin)
        file: Option<String>,

        /// IANA timezone for day boundaries (defaults to the system zone)
        #[arg(long)]
        tz: Option<String>,

        /// First day of the window (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        start: Option<String>,

        /// Number of days in a rolling window
        #[arg(long)]
        days: Option<usize>,

        /// Use the Monday-aligned calendar week containing the start day
        #[arg(long, conflicts_with = "days")]
        aligned: bool,

        /// Emit JSON instead of a rendered grid
        #[arg(long)]
        json: bool,
    },
    /// Default start/end times for a new-event form
    NextSlot {
        /// Event duration in minutes
        #[arg(short, long)]
        duration: Option<i64>,

        /// IANA timezone (defaults to the system zone)
        #[arg(long)]
        tz: Option<String>,

        /// Clock override for testing (RFC3339)
        #[arg(long)]
        now: Option<String>,

        /// Emit JSON instead of formatted times
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Week {
            file,
            tz,
            start,
            days,
            aligned,
            json,
        } => commands::week::run(
            file.as_deref(),
            tz.as_deref(),
            start.as_deref(),
            days,
            aligned,
            json,
        ),
        Commands::NextSlot {
            duration,
            tz,
            now,
            json,
        } => commands::next_slot::run(duration, tz.as_deref(), now.as_deref(), json),
    }
}
