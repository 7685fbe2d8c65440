//! Status service - account and customer summaries

use std::sync::Arc;

use serde::Serialize;

use crate::domain::result::Result;
use crate::domain::{AccountSummary, AccountType, Customer, CustomerSummary, Money, Transaction};
use crate::ports::TransactionManager;

use super::AccountService;

/// Status service for summaries
pub struct StatusService {
    accounts: Arc<AccountService>,
    log: Arc<dyn TransactionManager>,
}

impl StatusService {
    pub fn new(accounts: Arc<AccountService>, log: Arc<dyn TransactionManager>) -> Self {
        Self { accounts, log }
    }

    /// Get overall status summary
    pub fn get_status(&self) -> Result<StatusSummary> {
        let accounts = self
            .accounts
            .all()?
            .iter()
            .map(|a| a.summary())
            .collect::<Result<Vec<_>>>()?;

        let mut total_balance = Money::ZERO;
        for account in &accounts {
            total_balance = total_balance.checked_add(account.balance)?;
        }

        let count_of =
            |kind: AccountType| accounts.iter().filter(|a| a.account_type == kind).count();

        Ok(StatusSummary {
            total_accounts: accounts.len(),
            checking_accounts: count_of(AccountType::Checking),
            savings_accounts: count_of(AccountType::Savings),
            joint_accounts: count_of(AccountType::Joint),
            total_balance,
            total_transactions: self.log.show_transaction_history().len(),
            accounts,
        })
    }

    /// Summary of one customer with the transactions touching their accounts
    pub fn customer_status(&self, customer: &Customer) -> Result<CustomerStatus> {
        let history = self.log.show_transaction_history();
        Ok(CustomerStatus {
            customer: customer.summary()?,
            transactions: customer.transaction_history(&history),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct StatusSummary {
    pub total_accounts: usize,
    pub checking_accounts: usize,
    pub savings_accounts: usize,
    pub joint_accounts: usize,
    pub total_balance: Money,
    pub total_transactions: usize,
    pub accounts: Vec<AccountSummary>,
}

#[derive(Debug, Serialize)]
pub struct CustomerStatus {
    pub customer: CustomerSummary,
    pub transactions: Vec<Transaction>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryTransactionLog;
    use crate::config::Config;
    use crate::domain::Amount;
    use crate::services::BankingService;

    #[test]
    fn test_status_counts_and_totals() {
        let log = Arc::new(InMemoryTransactionLog::new());
        let accounts = Arc::new(AccountService::new(&Config::default()));
        let banking = BankingService::new(log.clone());
        let status = StatusService::new(accounts.clone(), log.clone());

        let checking = accounts
            .open_checking(Money::from_major(100), Some(Money::from_major(50)))
            .unwrap();
        let savings = accounts.open_savings(Money::from_major(500), None).unwrap();
        accounts.open_joint(Money::ZERO, ["Alice", "Bob"]).unwrap();

        banking.withdraw(&checking, Amount::from_major(140).unwrap()).unwrap();
        banking.transfer(&savings, &checking, Amount::from_major(200).unwrap()).unwrap();

        let summary = status.get_status().unwrap();
        assert_eq!(summary.total_accounts, 3);
        assert_eq!(summary.checking_accounts, 1);
        assert_eq!(summary.joint_accounts, 1);
        // 600 opened, 140 withdrawn, the transfer moves money without changing the total
        assert_eq!(summary.total_balance, Money::from_major(460));
        assert_eq!(summary.total_transactions, 2);
    }

    #[test]
    fn test_customer_status() {
        let log = Arc::new(InMemoryTransactionLog::new());
        let accounts = Arc::new(AccountService::new(&Config::default()));
        let banking = BankingService::new(log.clone());
        let status = StatusService::new(accounts.clone(), log.clone());

        let mine = accounts.open_savings(Money::from_major(10), None).unwrap();
        let other = accounts.open_savings(Money::from_major(10), None).unwrap();
        banking.deposit(&mine, Amount::from_major(1).unwrap()).unwrap();
        banking.deposit(&other, Amount::from_major(1).unwrap()).unwrap();

        let mut customer = Customer::new("Alice", "alice@example.com");
        customer.add_account(mine);

        let result = status.customer_status(&customer).unwrap();
        assert_eq!(result.customer.total_balance, Money::from_major(11));
        assert_eq!(result.transactions.len(), 1);
    }
}
