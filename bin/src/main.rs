//! ventana CLI - Trading-calendar-aware trailing returns for a fixed ETF universe.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;
mod settings;

use display::Format;
use settings::Settings;

#[derive(Parser)]
#[command(name = "ventana")]
#[command(about = "Trailing ETF returns on the Mexican Stock Exchange calendar", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output and warnings)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Settings file (JSON). Defaults to the platform config directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the instrument universe
    List,

    /// Show instrument details
    Info {
        /// Instrument ticker (e.g., govt, ivv)
        instrument: String,
    },

    /// Show the session status of a date
    Calendar {
        /// Date (YYYY-MM-DD)
        date: String,
    },

    /// Show the return windows for a reference date
    Windows {
        /// Reference date (YYYY-MM-DD). Defaults to the latest session.
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Download prices and compute trailing returns
    Returns {
        /// Instrument ticker. Defaults to the configured instrument.
        instrument: Option<String>,

        /// Reference date (YYYY-MM-DD). Defaults to the latest session.
        #[arg(short, long)]
        date: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,

        /// Output file path. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Download and export the close price history of an instrument
    History {
        /// Instrument ticker. Defaults to the configured instrument.
        instrument: Option<String>,

        /// Start date (YYYY-MM-DD). Defaults to the configured history start.
        #[arg(short, long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD). Defaults to today.
        #[arg(short, long)]
        end: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,

        /// Output file path. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over the flags.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let settings = Settings::load(cli.config.as_deref())?;

    match command {
        Commands::List => commands::list::list_instruments(),
        Commands::Info { instrument } => commands::info::show_info(&instrument),
        Commands::Calendar { date } => commands::calendar::show_calendar(&settings, &date),
        Commands::Windows { date } => commands::windows::show_windows(&settings, date.as_deref()),
        Commands::Returns {
            instrument,
            date,
            format,
            output,
        } => {
            commands::returns::returns(
                &settings,
                instrument.as_deref(),
                date.as_deref(),
                format,
                output,
                cli.quiet,
            )
            .await
        }
        Commands::History {
            instrument,
            start,
            end,
            format,
            output,
        } => {
            commands::history::history(
                &settings,
                instrument.as_deref(),
                start.as_deref(),
                end.as_deref(),
                format,
                output,
                cli.quiet,
            )
            .await
        }
    }
}
