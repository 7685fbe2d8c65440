//! Scenario service - scripted runs of banking operations
//!
//! A scenario opens a set of accounts under caller-chosen aliases, groups
//! them under customers and then applies a list of steps. Every run starts
//! from an empty bank and nothing outlives it.
//!
//! ```json
//! {
//!   "name": "overdraft",
//!   "accounts": [
//!     { "alias": "main", "type": "checking", "balance": "100.00", "overdraft_limit": "50.00" }
//!   ],
//!   "customers": [ { "name": "Alice", "contact_info": "alice@example.com", "accounts": ["main"] } ],
//!   "steps": [ { "op": "withdraw", "account": "main", "amount": "140.00" } ]
//! }
//! ```

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::adapters::memory::InMemoryTransactionLog;
use crate::config::Config;
use crate::domain::result::{Error, Result};
use crate::domain::{
    AccountSummary, Amount, Customer, CustomerSummary, Money, SharedAccount, Transaction,
};
use crate::ports::TransactionManager;

use super::{AccountService, BankingService};

/// A scripted run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub accounts: Vec<AccountSetup>,
    #[serde(default)]
    pub customers: Vec<CustomerSetup>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// An account to open before the steps run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSetup {
    pub alias: String,
    #[serde(default)]
    pub balance: Money,
    #[serde(flatten)]
    pub kind: AccountKindSetup,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AccountKindSetup {
    Checking {
        #[serde(default)]
        overdraft_limit: Option<Money>,
    },
    Savings {
        #[serde(default)]
        interest_rate: Option<Decimal>,
    },
    Joint {
        #[serde(default)]
        owners: Vec<String>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerSetup {
    pub name: String,
    #[serde(default)]
    pub contact_info: String,
    #[serde(default)]
    pub accounts: Vec<String>,
}

/// One operation. Amounts are raw decimals so that a zero or negative
/// amount is reported as a failed step rather than a malformed scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Deposit { account: String, amount: Decimal },
    Withdraw { account: String, amount: Decimal },
    Transfer { from: String, to: String, amount: Decimal },
    AddOwner { account: String, name: String },
}

impl Step {
    fn aliases(&self) -> Vec<&str> {
        match self {
            Step::Deposit { account, .. }
            | Step::Withdraw { account, .. }
            | Step::AddOwner { account, .. } => vec![account.as_str()],
            Step::Transfer { from, to, .. } => vec![from.as_str(), to.as_str()],
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Step::Deposit { account, amount } => format!("deposit {} into {}", amount, account),
            Step::Withdraw { account, amount } => format!("withdraw {} from {}", amount, account),
            Step::Transfer { from, to, amount } => {
                format!("transfer {} from {} to {}", amount, from, to)
            }
            Step::AddOwner { account, name } => format!("add owner {} to {}", name, account),
        }
    }
}

/// Result of a single step
#[derive(Debug, Clone, Serialize)]
pub struct StepOutcome {
    pub index: usize,
    pub description: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AliasedAccount {
    pub alias: String,
    #[serde(flatten)]
    pub summary: AccountSummary,
}

/// Everything a run produced
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub steps: Vec<StepOutcome>,
    pub accounts: Vec<AliasedAccount>,
    pub customers: Vec<CustomerSummary>,
    pub transactions: Vec<Transaction>,
    pub total_balance: Money,
}

impl ScenarioReport {
    pub fn succeeded(&self) -> usize {
        self.steps.iter().filter(|s| s.success).count()
    }

    pub fn failed(&self) -> usize {
        self.steps.len() - self.succeeded()
    }

    /// Final state of the account opened under `alias`
    pub fn account(&self, alias: &str) -> Option<&AccountSummary> {
        self.accounts
            .iter()
            .find(|a| a.alias == alias)
            .map(|a| &a.summary)
    }
}

/// Runs scenarios, each against a fresh in-memory bank
pub struct ScenarioService {
    config: Config,
}

impl ScenarioService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Parse a scenario from JSON text
    pub fn parse(json: &str) -> Result<Scenario> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a scenario file
    pub fn load(path: &Path) -> Result<Scenario> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Check aliases before anything runs
    fn validate(scenario: &Scenario) -> Result<()> {
        let mut known = HashSet::new();
        for setup in &scenario.accounts {
            if !known.insert(setup.alias.as_str()) {
                return Err(Error::invalid(format!("duplicate account alias '{}'", setup.alias)));
            }
        }

        let referenced = scenario
            .customers
            .iter()
            .flat_map(|c| c.accounts.iter().map(String::as_str))
            .chain(scenario.steps.iter().flat_map(Step::aliases));
        for alias in referenced {
            if !known.contains(alias) {
                return Err(Error::not_found(format!("account alias '{}'", alias)));
            }
        }
        Ok(())
    }

    pub fn run(&self, scenario: &Scenario) -> Result<ScenarioReport> {
        Self::validate(scenario)?;

        let log = Arc::new(InMemoryTransactionLog::new());
        let accounts = AccountService::new(&self.config);
        let banking = BankingService::new(log.clone());

        let mut opened: Vec<(String, SharedAccount)> = Vec::with_capacity(scenario.accounts.len());
        for setup in &scenario.accounts {
            let account = match &setup.kind {
                AccountKindSetup::Checking { overdraft_limit } => {
                    accounts.open_checking(setup.balance, *overdraft_limit)?
                }
                AccountKindSetup::Savings { interest_rate } => {
                    accounts.open_savings(setup.balance, *interest_rate)?
                }
                AccountKindSetup::Joint { owners } => accounts.open_joint(setup.balance, owners)?,
            };
            opened.push((setup.alias.clone(), account));
        }
        let by_alias: HashMap<&str, &SharedAccount> =
            opened.iter().map(|(alias, a)| (alias.as_str(), a)).collect();

        let mut customers = Vec::with_capacity(scenario.customers.len());
        for setup in &scenario.customers {
            let mut customer = Customer::new(setup.name.clone(), setup.contact_info.clone());
            for alias in &setup.accounts {
                let account = by_alias
                    .get(alias.as_str())
                    .ok_or_else(|| Error::not_found(format!("account alias '{}'", alias)))?;
                customer.add_account((*account).clone());
            }
            customers.push(customer);
        }

        let steps = scenario
            .steps
            .iter()
            .enumerate()
            .map(|(index, step)| {
                let result = Self::apply(&banking, &by_alias, step);
                StepOutcome {
                    index,
                    description: step.describe(),
                    success: result.is_ok(),
                    error: result.as_ref().err().map(|e| e.to_string()),
                    error_kind: result.as_ref().err().map(|e| e.kind().to_string()),
                }
            })
            .collect::<Vec<_>>();

        let mut total_balance = Money::ZERO;
        let mut final_accounts = Vec::with_capacity(opened.len());
        for (alias, account) in &opened {
            let summary = account.summary()?;
            total_balance = total_balance.checked_add(summary.balance)?;
            final_accounts.push(AliasedAccount {
                alias: alias.clone(),
                summary,
            });
        }

        let report = ScenarioReport {
            name: scenario.name.clone(),
            accounts: final_accounts,
            customers: customers
                .iter()
                .map(Customer::summary)
                .collect::<Result<Vec<_>>>()?,
            transactions: log.show_transaction_history(),
            total_balance,
            steps,
        };

        info!(
            scenario = report.name.as_deref().unwrap_or("unnamed"),
            succeeded = report.succeeded(),
            failed = report.failed(),
            "scenario finished"
        );
        Ok(report)
    }

    fn apply(
        banking: &BankingService,
        accounts: &HashMap<&str, &SharedAccount>,
        step: &Step,
    ) -> Result<()> {
        let lookup = |alias: &str| {
            accounts
                .get(alias)
                .copied()
                .ok_or_else(|| Error::not_found(format!("account alias '{}'", alias)))
        };

        match step {
            Step::Deposit { account, amount } => {
                banking.deposit(lookup(account)?, Amount::try_from(*amount)?)?;
            }
            Step::Withdraw { account, amount } => {
                banking.withdraw(lookup(account)?, Amount::try_from(*amount)?)?;
            }
            Step::Transfer { from, to, amount } => {
                banking.transfer(lookup(from)?, lookup(to)?, Amount::try_from(*amount)?)?;
            }
            Step::AddOwner { account, name } => {
                banking.add_owner(lookup(account)?, name)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OVERDRAFT: &str = r#"{
        "name": "overdraft",
        "accounts": [
            { "alias": "main", "type": "checking", "balance": "100.00", "overdraft_limit": "50.00" }
        ],
        "steps": [
            { "op": "withdraw", "account": "main", "amount": "140" },
            { "op": "withdraw", "account": "main", "amount": "20" }
        ]
    }"#;

    #[test]
    fn test_parse_and_run() {
        let scenario = ScenarioService::parse(OVERDRAFT).unwrap();
        let report = ScenarioService::new(Config::default()).run(&scenario).unwrap();

        assert_eq!(report.succeeded(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.steps[1].error_kind.as_deref(), Some("insufficient_funds"));
        assert_eq!(report.account("main").unwrap().balance, Money::from_major(-40));
        assert_eq!(report.transactions.len(), 1);
    }

    #[test]
    fn test_unknown_alias_is_rejected_before_running() {
        let scenario = ScenarioService::parse(
            r#"{ "accounts": [], "steps": [ { "op": "deposit", "account": "ghost", "amount": "1" } ] }"#,
        )
        .unwrap();
        let err = ScenarioService::new(Config::default()).run(&scenario).unwrap_err();
        assert_eq!(err.kind(), "not_found");
    }

    #[test]
    fn test_duplicate_alias_is_rejected() {
        let scenario = ScenarioService::parse(
            r#"{ "accounts": [
                { "alias": "a", "type": "savings" },
                { "alias": "a", "type": "savings" }
            ] }"#,
        )
        .unwrap();
        let err = ScenarioService::new(Config::default()).run(&scenario).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_malformed_json() {
        let err = ScenarioService::parse("{ not json").unwrap_err();
        assert_eq!(err.kind(), "json");
    }

    #[test]
    fn test_step_descriptions() {
        let step = Step::Transfer {
            from: "a".to_string(),
            to: "b".to_string(),
            amount: Decimal::new(2500, 2),
        };
        assert_eq!(step.describe(), "transfer 25.00 from a to b");
    }
}
