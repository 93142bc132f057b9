//! CLI application for renaming scanned repair order PDFs.

mod commands;
mod logging;

use clap::{Parser, Subcommand};
use rorename_core::RorenameConfig;

use commands::{config, inspect, run};

/// Repair order renamer - rename scanned repair orders and summarize the run
#[derive(Parser)]
#[command(name = "rorename")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process every `~~tmp~~` PDF in a folder
    Run(run::RunArgs),

    /// Show the fields extracted from a single PDF without renaming it
    Inspect(inspect::InspectArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    // Config commands manage the file themselves and must work without it
    let settings = match cli.command {
        Commands::Config(_) => RorenameConfig::default(),
        _ => config::load_config(cli.config.as_deref())?,
    };

    // Only a batch run writes the log file
    let log_file = match cli.command {
        Commands::Run(_) => settings.logging.log_file.as_deref(),
        _ => None,
    };
    logging::init_logging(&settings.logging.level, cli.verbose, log_file)?;

    match cli.command {
        Commands::Run(args) => run::run(args, &settings),
        Commands::Inspect(args) => inspect::run(args),
        Commands::Config(args) => config::run(args, cli.config.as_deref()),
    }
}
