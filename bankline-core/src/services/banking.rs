//! Banking service - money movement
//!
//! Accounts decide whether money can move. This service asks them, and
//! records a `Transaction` with the logging collaborator only for operations
//! that went through.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::result::Result;
use crate::domain::{Amount, SharedAccount, Transaction};
use crate::ports::TransactionManager;

pub struct BankingService {
    log: Arc<dyn TransactionManager>,
}

impl BankingService {
    pub fn new(log: Arc<dyn TransactionManager>) -> Self {
        Self { log }
    }

    fn record(&self, transaction: Transaction) -> Transaction {
        self.log.log_transaction(transaction.clone());
        transaction
    }

    pub fn deposit(&self, account: &SharedAccount, amount: Amount) -> Result<Transaction> {
        let number = account.account_number();
        match account.deposit(amount) {
            Ok(balance) => {
                debug!(
                    account = %number,
                    amount = %amount,
                    balance = %balance,
                    "deposit completed"
                );
                Ok(self.record(Transaction::deposit(number, amount)))
            }
            Err(e) => {
                warn!(account = %number, amount = %amount, error = %e, "deposit rejected");
                Err(e)
            }
        }
    }

    pub fn withdraw(&self, account: &SharedAccount, amount: Amount) -> Result<Transaction> {
        let number = account.account_number();
        match account.withdraw(amount) {
            Ok(balance) => {
                debug!(
                    account = %number,
                    amount = %amount,
                    balance = %balance,
                    "withdrawal completed"
                );
                Ok(self.record(Transaction::withdrawal(number, amount)))
            }
            Err(e) => {
                warn!(account = %number, amount = %amount, error = %e, "withdrawal rejected");
                Err(e)
            }
        }
    }

    pub fn transfer(
        &self,
        source: &SharedAccount,
        destination: &SharedAccount,
        amount: Amount,
    ) -> Result<Transaction> {
        let from = source.account_number();
        let to = destination.account_number();
        match source.transfer(destination, amount) {
            Ok(()) => {
                debug!(from = %from, to = %to, amount = %amount, "transfer completed");
                Ok(self.record(Transaction::transfer(from, to, amount)))
            }
            Err(e) => {
                warn!(from = %from, to = %to, amount = %amount, error = %e, "transfer rejected");
                Err(e)
            }
        }
    }

    /// Add a joint owner. Not a money movement, so nothing is logged.
    pub fn add_owner(&self, account: &SharedAccount, name: &str) -> Result<bool> {
        let added = account.add_owner(name)?;
        debug!(account = %account.account_number(), added, "joint owner update");
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryTransactionLog;
    use crate::domain::{Account, AccountNumber, Money, TransactionType};

    fn setup() -> (Arc<InMemoryTransactionLog>, BankingService) {
        let log = Arc::new(InMemoryTransactionLog::new());
        let service = BankingService::new(log.clone());
        (log, service)
    }

    fn checking(number: u64, balance: i64, overdraft: i64) -> SharedAccount {
        SharedAccount::new(
            Account::checking(
                AccountNumber::new(number),
                Money::from_major(balance),
                Money::from_major(overdraft),
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_successful_operations_are_logged() {
        let (log, service) = setup();
        let a = checking(1, 100, 0);
        let b = checking(2, 0, 0);
        let amount = Amount::from_major(10).unwrap();

        service.deposit(&a, amount).unwrap();
        service.withdraw(&a, amount).unwrap();
        let tx = service.transfer(&a, &b, amount).unwrap();

        assert_eq!(tx.transaction_type(), TransactionType::Transfer);
        let kinds: Vec<_> = log
            .show_transaction_history()
            .iter()
            .map(|tx| tx.transaction_type())
            .collect();
        assert_eq!(
            kinds,
            vec![TransactionType::Deposit, TransactionType::Withdraw, TransactionType::Transfer]
        );
    }

    #[test]
    fn test_failed_operations_are_not_logged() {
        let (log, service) = setup();
        let a = checking(1, 10, 0);
        let b = checking(2, 0, 0);
        let too_much = Amount::from_major(11).unwrap();

        assert!(service.withdraw(&a, too_much).unwrap_err().is_insufficient_funds());
        assert!(service.transfer(&a, &b, too_much).unwrap_err().is_insufficient_funds());
        assert!(service.transfer(&a, &a, too_much).unwrap_err().is_invalid_argument());

        assert!(log.is_empty());
        assert_eq!(a.balance().unwrap(), Money::from_major(10));
        assert_eq!(b.balance().unwrap(), Money::ZERO);
    }
}
