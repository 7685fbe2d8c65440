//! Shared account handle
//!
//! Customers reference accounts without owning them exclusively, and a joint
//! account may be referenced by several customers. `SharedAccount` is the
//! reference-counted handle they hold. Each account sits behind its own
//! mutex; a transfer holds both accounts' locks for its whole duration so
//! its debit and credit cannot interleave with any other operation.

use std::sync::{Arc, Mutex, MutexGuard};

use super::account::{Account, AccountNumber, AccountSummary, AccountType};
use super::money::{Amount, Money};
use super::result::{Error, Result};

#[derive(Debug, Clone)]
pub struct SharedAccount {
    number: AccountNumber,
    account_type: AccountType,
    inner: Arc<Mutex<Account>>,
}

impl SharedAccount {
    pub fn new(account: Account) -> Self {
        Self {
            number: account.account_number(),
            account_type: account.account_type(),
            inner: Arc::new(Mutex::new(account)),
        }
    }

    pub fn account_number(&self) -> AccountNumber {
        self.number
    }

    pub fn account_type(&self) -> AccountType {
        self.account_type
    }

    /// Whether both handles point at the same account
    pub fn same_account(&self, other: &SharedAccount) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Account>> {
        self.inner
            .lock()
            .map_err(|e| Error::lock(format!("account {}: {}", self.number, e)))
    }

    /// Run a read-only query against the account
    pub fn read<T>(&self, f: impl FnOnce(&Account) -> T) -> Result<T> {
        let guard = self.lock()?;
        Ok(f(&guard))
    }

    pub fn balance(&self) -> Result<Money> {
        self.read(Account::balance)
    }

    pub fn summary(&self) -> Result<AccountSummary> {
        self.read(Account::summary)
    }

    /// Copy of the account's current state
    pub fn snapshot(&self) -> Result<Account> {
        self.read(Account::clone)
    }

    pub fn deposit(&self, amount: Amount) -> Result<Money> {
        self.lock()?.deposit(amount)
    }

    pub fn withdraw(&self, amount: Amount) -> Result<Money> {
        self.lock()?.withdraw(amount)
    }

    pub fn add_owner(&self, name: &str) -> Result<bool> {
        self.lock()?.add_owner(name)
    }

    /// Transfer to another account.
    ///
    /// Locks are always taken in ascending account-number order, so two
    /// opposing transfers between the same pair cannot deadlock.
    pub fn transfer(&self, destination: &SharedAccount, amount: Amount) -> Result<()> {
        if self.same_account(destination) || self.number == destination.number {
            return Err(Error::invalid(format!(
                "cannot transfer from account {} to itself",
                self.number
            )));
        }

        let source_first = self.number < destination.number;
        let (first, second) = if source_first {
            (self, destination)
        } else {
            (destination, self)
        };

        let mut first_guard = first.lock()?;
        let mut second_guard = second.lock()?;

        let (source, target) = if source_first {
            (&mut *first_guard, &mut *second_guard)
        } else {
            (&mut *second_guard, &mut *first_guard)
        };
        source.transfer(target, amount)
    }
}
