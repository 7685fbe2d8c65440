//! Config command - show or write settings

use anyhow::{Context, Result};
use clap::Subcommand;

use bankline_core::config::Config;

use super::get_bankline_dir;
use crate::output;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write the effective configuration to settings.json
    Init,
}

pub fn run(command: ConfigCommands) -> Result<()> {
    let bankline_dir = get_bankline_dir()?;
    let config = Config::load(&bankline_dir)?;

    match command {
        ConfigCommands::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
                return Ok(());
            }

            let mut table = output::create_table();
            table.set_header(vec!["Setting", "Value"]);
            table.add_row(vec!["Directory".to_string(), bankline_dir.display().to_string()]);
            table.add_row(vec!["Currency symbol".to_string(), config.currency_symbol.clone()]);
            table.add_row(vec![
                "Default overdraft limit".to_string(),
                config.default_overdraft_limit.to_string(),
            ]);
            table.add_row(vec![
                "Default interest rate".to_string(),
                config.default_interest_rate.to_string(),
            ]);
            table.add_row(vec![
                "First account number".to_string(),
                config.first_account_number.to_string(),
            ]);
            println!("{}", table);
            Ok(())
        }
        ConfigCommands::Init => {
            std::fs::create_dir_all(&bankline_dir).with_context(|| {
                format!("Failed to create bankline directory: {:?}", bankline_dir)
            })?;
            config.save(&bankline_dir)?;
            output::success(&format!("Wrote settings to {:?}", bankline_dir.join("settings.json")));
            Ok(())
        }
    }
}
