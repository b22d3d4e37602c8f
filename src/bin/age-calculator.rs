//! Age Calculator CLI tool
//!
//! Opens the interactive form, or computes the elapsed time once from
//! command-line fields.

use chrono::Datelike;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing::{info, warn};

use age_calculator::date::{candidate_date, format_date, parse_reference, resolve_reference};
use age_calculator::form::{Field, FormState};
use age_calculator::logging::{self, LogOptions};
use age_calculator::tui;

/// Age Calculator - Years, months and days elapsed since a date
#[derive(Parser)]
#[command(name = "age-calculator")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Open the interactive form
    age-calculator

    # Reject unparseable or out-of-range fields on submit
    age-calculator form --strict

    # Compute once against the current date
    age-calculator calc --day 14 --month 6 --year 1992

    # Compute against a fixed reference date
    age-calculator calc --day 1 --month 1 --year 2000 --now 2024-01-01")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log level: error, warn, info, debug or trace (RUST_LOG overrides)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Also write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive form (default)
    Form {
        /// Reject submissions with unparseable or out-of-range fields
        #[arg(long)]
        strict: bool,
    },

    /// Compute the elapsed time once and print it
    Calc {
        /// Day field, as typed (e.g. "14", "32", "")
        #[arg(long, allow_hyphen_values = true)]
        day: Option<String>,

        /// Month field, as typed
        #[arg(long, allow_hyphen_values = true)]
        month: Option<String>,

        /// Year field, as typed
        #[arg(long, allow_hyphen_values = true)]
        year: Option<String>,

        /// Reference instant (e.g. "now", "2024-01-01", "2024-01-01T12:00", "01/31/2024")
        #[arg(long)]
        now: Option<String>,

        /// Fail instead of computing when a field is unparseable or out of range
        #[arg(long)]
        strict: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Form { strict: false });

    let log_options = LogOptions {
        level: cli.log_level,
        file: cli.log_file,
        // The form owns the terminal
        stderr: matches!(command, Commands::Calc { .. }),
    };
    if let Err(e) = logging::init(&log_options) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let result = match command {
        Commands::Form { strict } => cmd_form(strict),
        Commands::Calc { day, month, year, now, strict } => {
            cmd_calc(day, month, year, now, strict)
        }
    };

    logging::shutdown();

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Run the interactive form and echo the last result on exit
fn cmd_form(strict: bool) -> anyhow::Result<()> {
    info!(strict, "opening form");
    let state = tui::run(strict)?;

    if let Some(summary) = state.summary() {
        println!("{}", summary);
    }

    Ok(())
}

/// Compute once from command-line fields
fn cmd_calc(
    day: Option<String>,
    month: Option<String>,
    year: Option<String>,
    now: Option<String>,
    strict: bool,
) -> anyhow::Result<()> {
    let reference = parse_reference(now.as_deref().unwrap_or(""))?;
    let now = resolve_reference(&reference);
    let current_year = now.year();

    let mut state = FormState::new();
    for (field, raw) in [(Field::Day, day), (Field::Month, month), (Field::Year, year)] {
        if let Some(raw) = raw {
            state = state.with_field(field, &raw, current_year);
        }
    }

    for field in Field::ALL {
        if state.flags.get(field) {
            warn!("{} is out of range (max {})", field, field.max(current_year));
        }
    }

    let state = if strict {
        state.submitted_strict(now)?
    } else {
        state.submitted(now)
    };

    if let Some(date) = candidate_date(&state.parts) {
        println!("Date: {}", format_date(&date));
    }

    let [years, months, days] = state.display_values();
    println!("{} years", years);
    println!("{} months", months);
    println!("{} days", days);

    Ok(())
}
