mod commands;
mod config;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use commands::validate::OutputFormat;
use config::{Config, DEFAULT_CONFIG_PATH};
use employee_form::{Clock, FixedClock, FormSession, SystemClock};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "employee-form")]
#[command(version, about = "Employee registration form with inline field validation", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an employee record given as JSON
    Validate {
        /// JSON file with all eight form fields (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Treat this date (YYYY-MM-DD) as today
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Fill in the form interactively
    Fill {
        /// Treat this date (YYYY-MM-DD) as today
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    init_tracing(&config);

    match cli.command {
        Commands::Validate { file, today, format } => {
            let today = resolve_today(today, &config);
            let valid = commands::validate::execute(file.as_deref(), today, format)?;
            Ok(if valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        Commands::Fill { today } => {
            let today = resolve_today(today, &config);
            commands::fill::execute(FormSession::with_clock(FixedClock(today)))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Log to stderr so stdout stays clean for `validate --format json`
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Command line beats config file beats the local date
fn resolve_today(flag: Option<NaiveDate>, config: &Config) -> NaiveDate {
    flag.or(config.clock.today)
        .unwrap_or_else(|| SystemClock.today())
}
