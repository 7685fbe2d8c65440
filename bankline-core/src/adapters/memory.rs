//! In-memory transaction log
//!
//! Holds the history of completed transactions for the lifetime of the
//! process. Nothing is written to disk.

use std::sync::{Mutex, MutexGuard};

use crate::domain::Transaction;
use crate::ports::TransactionManager;

#[derive(Debug, Default)]
pub struct InMemoryTransactionLog {
    entries: Mutex<Vec<Transaction>>,
}

impl InMemoryTransactionLog {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave a half-written entry,
    // so a poisoned log is still readable.
    fn entries(&self) -> MutexGuard<'_, Vec<Transaction>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Most recent transactions first, up to `limit`
    pub fn recent(&self, limit: usize) -> Vec<Transaction> {
        self.entries().iter().rev().take(limit).cloned().collect()
    }

    pub fn count(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Drop all recorded transactions. Returns how many were removed.
    pub fn clear(&self) -> usize {
        let mut entries = self.entries();
        let removed = entries.len();
        entries.clear();
        removed
    }
}

impl TransactionManager for InMemoryTransactionLog {
    fn log_transaction(&self, transaction: Transaction) {
        self.entries().push(transaction);
    }

    fn show_transaction_history(&self) -> Vec<Transaction> {
        self.entries().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AccountNumber, Amount};

    fn deposit(account: u64, minor: i64) -> Transaction {
        Transaction::deposit(AccountNumber::new(account), Amount::from_minor(minor).unwrap())
    }

    #[test]
    fn test_log_and_history() {
        let log = InMemoryTransactionLog::new();
        log.log_transaction(deposit(1, 100));
        log.log_transaction(deposit(2, 200));

        let history = log.show_transaction_history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].from_account(), AccountNumber::new(1));
        assert_eq!(log.history_for(AccountNumber::new(2)).len(), 1);
    }

    #[test]
    fn test_recent_is_newest_first() {
        let log = InMemoryTransactionLog::new();
        for i in 1..=3 {
            log.log_transaction(deposit(i, 100));
        }

        let recent = log.recent(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].from_account(), AccountNumber::new(3));
        assert_eq!(recent[1].from_account(), AccountNumber::new(2));
    }

    #[test]
    fn test_count_and_clear() {
        let log = InMemoryTransactionLog::new();
        log.log_transaction(deposit(1, 100));
        log.log_transaction(deposit(1, 100));

        assert_eq!(log.count(), 2);
        assert_eq!(log.clear(), 2);
        assert!(log.is_empty());
    }

    #[test]
    fn test_poisoned_log_stays_readable() {
        let log = std::sync::Arc::new(InMemoryTransactionLog::new());
        log.log_transaction(deposit(1, 100));

        let writer = log.clone();
        let panicked = std::thread::spawn(move || {
            let _guard = writer.entries.lock().unwrap();
            panic!("writer died while holding the log");
        })
        .join();
        assert!(panicked.is_err());
        assert!(log.entries.is_poisoned());

        let history = log.show_transaction_history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].from_account(), AccountNumber::new(1));

        log.log_transaction(deposit(2, 200));
        assert_eq!(log.count(), 2);
    }
}
