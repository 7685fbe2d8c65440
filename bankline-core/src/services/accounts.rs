//! Account service - opening accounts and looking them up

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::Config;
use crate::domain::result::{Error, Result};
use crate::domain::{Account, AccountNumber, AccountPolicy, JointOwners, Money, SharedAccount};

/// Opens accounts under unique numbers and keeps a registry of them
pub struct AccountService {
    next_number: AtomicU64,
    default_overdraft_limit: Money,
    default_interest_rate: Decimal,
    registry: Mutex<BTreeMap<AccountNumber, SharedAccount>>,
}

impl AccountService {
    pub fn new(config: &Config) -> Self {
        Self {
            next_number: AtomicU64::new(config.first_account_number),
            default_overdraft_limit: config.default_overdraft_limit,
            default_interest_rate: config.default_interest_rate,
            registry: Mutex::new(BTreeMap::new()),
        }
    }

    /// Numbers are never reused, even when opening the account then fails
    fn allocate_number(&self) -> AccountNumber {
        AccountNumber::new(self.next_number.fetch_add(1, Ordering::Relaxed))
    }

    fn registry(&self) -> Result<MutexGuard<'_, BTreeMap<AccountNumber, SharedAccount>>> {
        self.registry
            .lock()
            .map_err(|e| Error::lock(format!("account registry: {}", e)))
    }

    /// Open an account under a freshly allocated number
    pub fn open(&self, initial_balance: Money, policy: AccountPolicy) -> Result<SharedAccount> {
        let account = Account::new(self.allocate_number(), initial_balance, policy)?;
        let shared = SharedAccount::new(account);
        self.registry()?
            .insert(shared.account_number(), shared.clone());

        debug!(
            account = %shared.account_number(),
            account_type = %shared.account_type(),
            balance = %initial_balance,
            "account opened"
        );
        Ok(shared)
    }

    /// Open a checking account; `None` uses the configured default overdraft
    pub fn open_checking(
        &self,
        initial_balance: Money,
        overdraft_limit: Option<Money>,
    ) -> Result<SharedAccount> {
        let overdraft_limit = overdraft_limit.unwrap_or(self.default_overdraft_limit);
        self.open(initial_balance, AccountPolicy::Checking { overdraft_limit })
    }

    /// Open a savings account; `None` uses the configured default rate
    pub fn open_savings(
        &self,
        initial_balance: Money,
        interest_rate: Option<Decimal>,
    ) -> Result<SharedAccount> {
        let interest_rate = interest_rate.unwrap_or(self.default_interest_rate);
        self.open(initial_balance, AccountPolicy::Savings { interest_rate })
    }

    pub fn open_joint<I, S>(&self, initial_balance: Money, owners: I) -> Result<SharedAccount>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let owners = JointOwners::from_names(owners)?;
        self.open(initial_balance, AccountPolicy::Joint { owners })
    }

    /// Look up an account by number
    pub fn get(&self, number: AccountNumber) -> Result<SharedAccount> {
        self.registry()?
            .get(&number)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("account {}", number)))
    }

    /// All open accounts ordered by number
    pub fn all(&self) -> Result<Vec<SharedAccount>> {
        Ok(self.registry()?.values().cloned().collect())
    }

    pub fn count(&self) -> Result<usize> {
        Ok(self.registry()?.len())
    }
}
