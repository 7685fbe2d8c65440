//! Integration tests for scenario files and configuration
//!
//! Run with: cargo test --test scenario_tests

use std::path::PathBuf;

use tempfile::TempDir;

use bankline_core::adapters::demo::demo_scenarios;
use bankline_core::config::Config;
use bankline_core::domain::Money;
use bankline_core::services::ScenarioService;
use bankline_core::{BankContext, Reporter};

// ============================================================================
// Test Helpers
// ============================================================================

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

const FAMILY: &str = r#"{
    "name": "family",
    "accounts": [
        { "alias": "alice-checking", "type": "checking", "balance": "250.00", "overdraft_limit": "100.00" },
        { "alias": "alice-savings", "type": "savings", "balance": "1000.00", "interest_rate": "0.025" },
        { "alias": "household", "type": "joint", "balance": "0", "owners": ["Alice"] }
    ],
    "customers": [
        { "name": "Alice", "contact_info": "alice@example.com", "accounts": ["alice-checking", "alice-savings", "household"] },
        { "name": "Bob", "contact_info": "bob@example.com", "accounts": ["household"] }
    ],
    "steps": [
        { "op": "add_owner", "account": "household", "name": "Bob" },
        { "op": "transfer", "from": "alice-savings", "to": "household", "amount": "400.00" },
        { "op": "withdraw", "account": "household", "amount": "450.00" },
        { "op": "withdraw", "account": "alice-checking", "amount": "300.00" },
        { "op": "transfer", "from": "alice-checking", "to": "household", "amount": "60.00" },
        { "op": "deposit", "account": "alice-checking", "amount": "0.005" },
        { "op": "transfer", "from": "household", "to": "household", "amount": "1.00" }
    ]
}"#;

// ============================================================================
// Scenario Files
// ============================================================================

#[test]
fn test_scenario_file_round() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(&temp_dir, "family.json", FAMILY);

    let scenario = ScenarioService::load(&path).unwrap();
    let report = ScenarioService::new(Config::default()).run(&scenario).unwrap();

    let outcomes: Vec<_> = report.steps.iter().map(|s| s.error_kind.as_deref()).collect();
    assert_eq!(
        outcomes,
        vec![
            None,
            None,
            Some("insufficient_funds"),
            None,
            Some("insufficient_funds"),
            Some("invalid_argument"),
            Some("invalid_argument"),
        ]
    );

    assert_eq!(report.account("alice-checking").unwrap().balance, Money::from_major(-50));
    assert_eq!(report.account("alice-savings").unwrap().balance, Money::from_major(600));
    assert_eq!(report.account("household").unwrap().balance, Money::from_major(400));
    assert_eq!(report.account("household").unwrap().owners, vec!["Alice", "Bob"]);

    // 1250 opened, 300 withdrawn
    assert_eq!(report.total_balance, Money::from_major(950));
    assert_eq!(report.transactions.len(), 2);

    let bob = &report.customers[1];
    assert_eq!(bob.name, "Bob");
    assert_eq!(bob.total_balance, Money::from_major(400));
    let alice = &report.customers[0];
    assert_eq!(alice.total_balance, Money::from_major(950));
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = ScenarioService::load(&temp_dir.path().join("nope.json")).unwrap_err();
    assert_eq!(err.kind(), "io");
}

#[test]
fn test_invalid_account_setup_fails_whole_run() {
    let scenario = ScenarioService::parse(
        r#"{ "accounts": [ { "alias": "bad", "type": "checking", "balance": "-10", "overdraft_limit": "5" } ] }"#,
    )
    .unwrap();
    let err = ScenarioService::new(Config::default()).run(&scenario).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_report_serializes() {
    let scenario = ScenarioService::parse(FAMILY).unwrap();
    let report = ScenarioService::new(Config::default()).run(&scenario).unwrap();

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["name"], "family");
    assert_eq!(value["accounts"][2]["alias"], "household");
    assert_eq!(value["accounts"][2]["account_type"], "joint");
    assert_eq!(value["steps"][2]["success"], false);
}

#[test]
fn test_runs_are_isolated() {
    let service = ScenarioService::new(Config::default());
    let scenario = ScenarioService::parse(FAMILY).unwrap();

    let first = service.run(&scenario).unwrap();
    let second = service.run(&scenario).unwrap();

    assert_eq!(first.total_balance, second.total_balance);
    assert_eq!(
        first.account("household").unwrap().account_number,
        second.account("household").unwrap().account_number
    );
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_context_uses_config_defaults() {
    let temp_dir = TempDir::new().unwrap();
    write_file(
        &temp_dir,
        "settings.json",
        r#"{ "bank": { "defaultOverdraftLimit": "75.00", "firstAccountNumber": 9000 } }"#,
    );

    let ctx = BankContext::load(temp_dir.path()).unwrap();
    let account = ctx.account_service.open_checking(Money::ZERO, None).unwrap();

    assert_eq!(account.account_number().get(), 9000);
    assert_eq!(account.summary().unwrap().available, Money::from_major(75));
}

#[test]
fn test_demo_scenarios_render() {
    let ctx = BankContext::default();
    for scenario in demo_scenarios() {
        let report = ctx.scenario_service.run(&scenario).unwrap();
        for account in &report.accounts {
            let line = ctx.reporter.render_account(&account.summary);
            assert!(line.starts_with('#'));
        }
    }
}
