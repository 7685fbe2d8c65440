//! Run command - execute a scenario file

use std::path::Path;

use anyhow::{Context, Result};

use bankline_core::services::ScenarioService;
use bankline_core::OperationResult;

use super::get_context;
use crate::output;

pub fn run(file: &Path, json: bool) -> Result<()> {
    let ctx = get_context()?;

    let result =
        ScenarioService::load(file).and_then(|scenario| ctx.scenario_service.run(&scenario));

    if json {
        let failed = result.is_err();
        let output = OperationResult::from(result)
            .with_context("file", serde_json::json!(file.display().to_string()));
        println!("{}", serde_json::to_string_pretty(&output)?);
        if failed {
            anyhow::bail!("Scenario {:?} did not run", file);
        }
        return Ok(());
    }

    let report = result.with_context(|| format!("Failed to run scenario {:?}", file))?;
    output::print_report(&report, &ctx.reporter, &ctx.config.currency_symbol);

    Ok(())
}
