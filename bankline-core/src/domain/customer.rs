//! Customer domain model

use serde::Serialize;

use super::account::{AccountNumber, AccountSummary};
use super::money::Money;
use super::result::Result;
use super::shared::SharedAccount;
use super::transaction::Transaction;

/// A bank customer and the accounts they hold.
///
/// Accounts are referenced, not owned: the same account may also be held by
/// another customer (joint accounts).
#[derive(Debug, Clone)]
pub struct Customer {
    name: String,
    contact_info: String,
    accounts: Vec<SharedAccount>,
}

impl Customer {
    pub fn new(name: impl Into<String>, contact_info: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact_info: contact_info.into(),
            accounts: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact_info(&self) -> &str {
        &self.contact_info
    }

    /// Append an account reference. No deduplication is performed.
    pub fn add_account(&mut self, account: SharedAccount) {
        self.accounts.push(account);
    }

    pub fn accounts(&self) -> &[SharedAccount] {
        &self.accounts
    }

    pub fn account_numbers(&self) -> Vec<AccountNumber> {
        self.accounts.iter().map(SharedAccount::account_number).collect()
    }

    pub fn holds(&self, number: AccountNumber) -> bool {
        self.accounts.iter().any(|a| a.account_number() == number)
    }

    /// Current state of every held account, in the order they were added
    pub fn view_accounts(&self) -> Result<Vec<AccountSummary>> {
        self.accounts.iter().map(SharedAccount::summary).collect()
    }

    /// Sum of balances over distinct held accounts
    pub fn total_balance(&self) -> Result<Money> {
        let mut seen = Vec::new();
        let mut total = Money::ZERO;
        for account in &self.accounts {
            if seen.contains(&account.account_number()) {
                continue;
            }
            seen.push(account.account_number());
            total = total.checked_add(account.balance()?)?;
        }
        Ok(total)
    }

    /// Transactions from `history` that touch any of this customer's accounts
    pub fn transaction_history(&self, history: &[Transaction]) -> Vec<Transaction> {
        history
            .iter()
            .filter(|tx| self.accounts.iter().any(|a| tx.involves(a.account_number())))
            .cloned()
            .collect()
    }

    pub fn summary(&self) -> Result<CustomerSummary> {
        Ok(CustomerSummary {
            name: self.name.clone(),
            contact_info: self.contact_info.clone(),
            total_balance: self.total_balance()?,
            accounts: self.view_accounts()?,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CustomerSummary {
    pub name: String,
    pub contact_info: String,
    pub total_balance: Money,
    pub accounts: Vec<AccountSummary>,
}
