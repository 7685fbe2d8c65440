//! Demo scenarios
//!
//! Small, self-explanatory runs covering each account policy: overdraft
//! headroom, a refused transfer, a successful transfer between variants,
//! idempotent joint owners and rejection of a non-positive deposit.

use rust_decimal::Decimal;

use crate::domain::Money;
use crate::services::scenario::{AccountKindSetup, AccountSetup, CustomerSetup, Scenario, Step};

fn checking(alias: &str, balance: i64, overdraft: i64) -> AccountSetup {
    AccountSetup {
        alias: alias.to_string(),
        balance: Money::from_major(balance),
        kind: AccountKindSetup::Checking {
            overdraft_limit: Some(Money::from_major(overdraft)),
        },
    }
}

fn savings(alias: &str, balance: i64) -> AccountSetup {
    AccountSetup {
        alias: alias.to_string(),
        balance: Money::from_major(balance),
        kind: AccountKindSetup::Savings {
            interest_rate: Some(Decimal::new(25, 3)),
        },
    }
}

fn joint(alias: &str, balance: i64, owners: &[&str]) -> AccountSetup {
    AccountSetup {
        alias: alias.to_string(),
        balance: Money::from_major(balance),
        kind: AccountKindSetup::Joint {
            owners: owners.iter().map(|o| o.to_string()).collect(),
        },
    }
}

fn customer(name: &str, contact: &str, accounts: &[&str]) -> CustomerSetup {
    CustomerSetup {
        name: name.to_string(),
        contact_info: contact.to_string(),
        accounts: accounts.iter().map(|a| a.to_string()).collect(),
    }
}

fn major(value: i64) -> Decimal {
    Decimal::from(value)
}

/// All demo scenarios, in presentation order
pub fn demo_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: Some("Checking overdraft".to_string()),
            accounts: vec![checking("checking", 100, 50)],
            customers: vec![customer("Alice", "alice@example.com", &["checking"])],
            steps: vec![
                Step::Withdraw { account: "checking".to_string(), amount: major(140) },
                Step::Withdraw { account: "checking".to_string(), amount: major(20) },
            ],
        },
        Scenario {
            name: Some("Savings transfer beyond balance".to_string()),
            accounts: vec![savings("savings", 200), checking("destination", 0, 0)],
            customers: vec![customer("Alice", "alice@example.com", &["savings", "destination"])],
            steps: vec![Step::Transfer {
                from: "savings".to_string(),
                to: "destination".to_string(),
                amount: major(250),
            }],
        },
        Scenario {
            name: Some("Savings to checking transfer".to_string()),
            accounts: vec![savings("savings", 500), checking("checking", 0, 0)],
            customers: vec![customer("Alice", "alice@example.com", &["savings", "checking"])],
            steps: vec![Step::Transfer {
                from: "savings".to_string(),
                to: "checking".to_string(),
                amount: major(200),
            }],
        },
        Scenario {
            name: Some("Joint owners".to_string()),
            accounts: vec![joint("joint", 0, &["Alice"])],
            customers: vec![
                customer("Alice", "alice@example.com", &["joint"]),
                customer("Bob", "bob@example.com", &["joint"]),
            ],
            steps: vec![
                Step::AddOwner { account: "joint".to_string(), name: "Alice".to_string() },
                Step::AddOwner { account: "joint".to_string(), name: "Bob".to_string() },
            ],
        },
        Scenario {
            name: Some("Non-positive deposit".to_string()),
            accounts: vec![savings("savings", 100)],
            customers: vec![customer("Alice", "alice@example.com", &["savings"])],
            steps: vec![
                Step::Deposit { account: "savings".to_string(), amount: Decimal::ZERO },
                Step::Deposit { account: "savings".to_string(), amount: major(-5) },
            ],
        },
    ]
}
