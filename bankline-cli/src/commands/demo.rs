//! Demo command - run the built-in scenarios

use anyhow::Result;
use colored::Colorize;

use bankline_core::adapters::demo::demo_scenarios;
use bankline_core::OperationResult;

use super::get_context;
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let scenarios = demo_scenarios();

    let reports = scenarios
        .iter()
        .map(|scenario| ctx.scenario_service.run(scenario))
        .collect::<bankline_core::domain::result::Result<Vec<_>>>();

    if json {
        let result = OperationResult::from(reports);
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let reports = reports?;
    println!("{}", format!("Running {} demo scenarios", reports.len()).bold());
    for report in &reports {
        println!();
        output::print_report(report, &ctx.reporter, &ctx.config.currency_symbol);
    }

    Ok(())
}
