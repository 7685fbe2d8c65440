//! Transaction domain model

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::account::AccountNumber;
use super::money::Amount;

/// Kind of money movement a transaction records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Deposit,
    Withdraw,
    Transfer,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "Deposit",
            TransactionType::Withdraw => "Withdraw",
            TransactionType::Transfer => "Transfer",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable record of one completed money movement.
///
/// Only built after an operation succeeded; there is no pending state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    id: Uuid,
    from_account: AccountNumber,
    /// Counterpart of a transfer, absent for deposits and withdrawals
    to_account: Option<AccountNumber>,
    amount: Amount,
    transaction_type: TransactionType,
    timestamp: DateTime<Utc>,
}

impl Transaction {
    fn new(
        from_account: AccountNumber,
        to_account: Option<AccountNumber>,
        amount: Amount,
        transaction_type: TransactionType,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            from_account,
            to_account,
            amount,
            transaction_type,
            timestamp: Utc::now(),
        }
    }

    pub fn deposit(account: AccountNumber, amount: Amount) -> Self {
        Self::new(account, None, amount, TransactionType::Deposit)
    }

    pub fn withdrawal(account: AccountNumber, amount: Amount) -> Self {
        Self::new(account, None, amount, TransactionType::Withdraw)
    }

    pub fn transfer(from: AccountNumber, to: AccountNumber, amount: Amount) -> Self {
        Self::new(from, Some(to), amount, TransactionType::Transfer)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn from_account(&self) -> AccountNumber {
        self.from_account
    }

    pub fn to_account(&self) -> Option<AccountNumber> {
        self.to_account
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Whether the account appears on either side of this transaction
    pub fn involves(&self, account: AccountNumber) -> bool {
        self.from_account == account || self.to_account == Some(account)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let to = self
            .to_account
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "From: {} | To: {} | {} | {} | {}",
            self.from_account,
            to,
            self.amount,
            self.transaction_type,
            self.timestamp.format("%Y-%m-%d %H:%M:%S")
        )
    }
}
