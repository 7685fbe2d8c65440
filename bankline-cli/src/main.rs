//! Bankline CLI - scripted banking runs in your terminal

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod output;

use commands::{config, demo, run};

/// Environment variable holding the log filter
const LOG_ENV: &str = "BANKLINE_LOG";

/// Bankline - accounts, transfers and overdrafts, in memory
#[derive(Parser)]
#[command(name = "bank", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in demo scenarios
    Demo {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run a scenario file
    Run {
        /// Path to the scenario JSON file
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or write configuration
    Config {
        #[command(subcommand)]
        command: config::ConfigCommands,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Demo { json } => demo::run(json),
        Commands::Run { file, json } => run::run(&file, json),
        Commands::Config { command } => config::run(command),
    }
}
