//! workout-report - Workout sensor report
//!
//! Prints distance, average speed and calories for each sensor package.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use workout_report::InfoMessage;
use workout_report::registry::WORKOUT_TYPES;
use workout_report::report::{self, ErrorPolicy, Outcome, Package};
use workout_report::tui::App;

#[derive(Parser)]
#[command(name = "workout-report")]
#[command(author, version, about = "Workout sensor report - running, walking, swimming")]
struct Cli {
    /// Print each summary as a JSON line
    #[arg(long, global = true, env = "WORKOUT_REPORT_JSON")]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Report the built-in demo packages
    Demo,

    /// Report a single package
    Report {
        /// Workout code (SWM, RUN, WLK)
        workout_type: String,

        /// Positional sensor readings
        #[arg(required = true, allow_negative_numbers = true)]
        data: Vec<f64>,
    },

    /// Report packages from a JSON file
    Batch {
        /// JSON array of {"workout_type", "data"} objects
        file: PathBuf,

        /// Skip failed packages instead of stopping
        #[arg(short, long, env = "WORKOUT_REPORT_KEEP_GOING")]
        keep_going: bool,
    },

    /// List known workout codes
    Types,

    /// Open TUI table of reports
    Tui {
        /// JSON package file (defaults to the demo packages)
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Report { workout_type, data }) => {
            let info = report::process(&Package { workout_type, data })?;
            print_message(&info, cli.json)?;
        }

        Some(Commands::Batch { file, keep_going }) => {
            let packages = report::load_packages(&file)?;
            let policy = if keep_going {
                ErrorPolicy::KeepGoing
            } else {
                ErrorPolicy::FailFast
            };
            print_outcomes(report::run_batch(&packages, policy)?, cli.json)?;
        }

        Some(Commands::Types) => {
            println!("Workout types:");
            println!("{:-<60}", "");
            for t in WORKOUT_TYPES {
                println!("{} | {:14} | {}", t.code, t.kind.name(), t.params.join(", "));
            }
        }

        Some(Commands::Tui { file }) => {
            let packages = match file {
                Some(path) => report::load_packages(&path)?,
                None => report::default_packages(),
            };
            let messages = packages
                .iter()
                .map(report::process)
                .collect::<Result<Vec<_>, _>>()?;
            App::new(messages).run()?;
        }

        Some(Commands::Demo) | None => {
            let outcomes = report::run_batch(&report::default_packages(), ErrorPolicy::FailFast)?;
            print_outcomes(outcomes, cli.json)?;
        }
    }

    Ok(())
}

fn print_outcomes(outcomes: Vec<Outcome>, json: bool) -> Result<()> {
    for outcome in outcomes {
        match outcome {
            Outcome::Report(info) => print_message(&info, json)?,
            Outcome::Failed { workout_type, error } => {
                eprintln!("{}: {}", workout_type, error);
            }
        }
    }
    Ok(())
}

fn print_message(info: &InfoMessage, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(info)?);
    } else {
        println!("{}", info.get_message());
    }
    Ok(())
}
