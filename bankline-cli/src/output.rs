//! Output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, CellAlignment, ContentArrangement, Table};

use bankline_core::services::{ScenarioReport, StepOutcome};
use bankline_core::{Money, Reporter};

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print a warning message
pub fn warning(msg: &str) {
    println!("{}", msg.yellow());
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn money_cell(symbol: &str, value: Money) -> Cell {
    Cell::new(format!("{}{}", symbol, value)).set_alignment(CellAlignment::Right)
}

fn print_step(step: &StepOutcome) {
    let line = format!("  {}. {}", step.index + 1, step.description);
    match &step.error {
        None => success(&format!("{}  ok", line)),
        Some(err) => warning(&format!("{}  refused: {}", line, err)),
    }
}

/// Print a finished scenario run: steps, balances, customers and history
pub fn print_report(report: &ScenarioReport, reporter: &dyn Reporter, symbol: &str) {
    if let Some(name) = &report.name {
        println!("{}", name.bold());
    }

    for step in &report.steps {
        print_step(step);
    }
    println!();

    let mut table = create_table();
    table.set_header(vec!["Alias", "Number", "Type", "Balance", "Available", "Owners"]);
    for account in &report.accounts {
        let summary = &account.summary;
        table.add_row(vec![
            Cell::new(&account.alias),
            Cell::new(summary.account_number),
            Cell::new(summary.account_type),
            money_cell(symbol, summary.balance),
            money_cell(symbol, summary.available),
            Cell::new(summary.owners.join(", ")),
        ]);
    }
    println!("{}", table);
    println!("Total balance: {}{}", symbol, report.total_balance);

    if !report.customers.is_empty() {
        println!();
        println!("{}", "Customers".bold());
        for customer in &report.customers {
            println!("{}", reporter.render_customer(customer));
        }
    }

    println!();
    println!("{}", "Transactions".bold());
    if report.transactions.is_empty() {
        println!("  (none)");
    }
    for tx in &report.transactions {
        println!("  {}", reporter.render_transaction(tx));
    }

    let summary = format!("{} succeeded, {} refused", report.succeeded(), report.failed());
    if report.failed() == 0 {
        success(&summary);
    } else {
        info(&summary);
    }
}
