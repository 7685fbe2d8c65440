//! Transaction logging port

use crate::domain::{AccountNumber, Transaction};

/// Sink for completed transactions.
///
/// Logging is fire-and-forget from the caller's point of view: there is no
/// acknowledgement and a logger must never make an operation fail.
pub trait TransactionManager: Send + Sync {
    /// Record a completed transaction
    fn log_transaction(&self, transaction: Transaction);

    /// Every recorded transaction, oldest first
    fn show_transaction_history(&self) -> Vec<Transaction>;

    /// Recorded transactions touching the given account, oldest first
    fn history_for(&self, account: AccountNumber) -> Vec<Transaction> {
        self.show_transaction_history()
            .into_iter()
            .filter(|tx| tx.involves(account))
            .collect()
    }
}
