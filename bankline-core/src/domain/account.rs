//! Account domain model
//!
//! A single `Account` type covers every variant. What differs between
//! Checking, Savings and Joint accounts is the withdrawal ceiling, which is
//! captured by `AccountPolicy` and consulted by both `withdraw` and
//! `transfer`.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::{Amount, Money};
use super::owners::JointOwners;
use super::result::{Error, Result};

/// Unique, immutable account identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(u64);

impl AccountNumber {
    pub const fn new(number: u64) -> Self {
        Self(number)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Variant tag of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Checking,
    Savings,
    Joint,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Checking => "Checking",
            AccountType::Savings => "Savings",
            AccountType::Joint => "Joint",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variant-specific state and the withdrawal ceiling it implies
#[derive(Debug, Clone, PartialEq)]
pub enum AccountPolicy {
    /// May go negative down to `-overdraft_limit`
    Checking { overdraft_limit: Money },
    /// Never negative. The rate is carried but no operation applies it.
    Savings { interest_rate: Decimal },
    /// Never negative, shared between named owners
    Joint { owners: JointOwners },
}

impl AccountPolicy {
    pub fn account_type(&self) -> AccountType {
        match self {
            AccountPolicy::Checking { .. } => AccountType::Checking,
            AccountPolicy::Savings { .. } => AccountType::Savings,
            AccountPolicy::Joint { .. } => AccountType::Joint,
        }
    }

    /// Maximum amount a withdrawal or transfer may remove given `balance`.
    /// Saturates at `Money::MAX` when `balance + overdraft_limit` does not fit.
    pub fn ceiling(&self, balance: Money) -> Money {
        match self {
            AccountPolicy::Checking { overdraft_limit } => balance.saturating_add(*overdraft_limit),
            AccountPolicy::Savings { .. } | AccountPolicy::Joint { .. } => balance,
        }
    }

    /// Lowest balance this policy ever allows
    fn floor(&self) -> Money {
        match self {
            AccountPolicy::Checking { overdraft_limit } => -*overdraft_limit,
            AccountPolicy::Savings { .. } | AccountPolicy::Joint { .. } => Money::ZERO,
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            AccountPolicy::Checking { overdraft_limit } if overdraft_limit.is_negative() => {
                Err(Error::invalid(format!(
                    "overdraft limit cannot be negative, got {}",
                    overdraft_limit
                )))
            }
            AccountPolicy::Savings { interest_rate } if *interest_rate < Decimal::ZERO => {
                Err(Error::invalid(format!(
                    "interest rate cannot be negative, got {}",
                    interest_rate
                )))
            }
            _ => Ok(()),
        }
    }
}

/// A bank account. The balance only changes through `deposit`, `withdraw`
/// and `transfer`.
#[derive(Debug, Clone)]
pub struct Account {
    number: AccountNumber,
    balance: Money,
    policy: AccountPolicy,
}

impl Account {
    /// Open an account with an initial balance under the given policy
    pub fn new(
        number: AccountNumber,
        initial_balance: Money,
        policy: AccountPolicy,
    ) -> Result<Self> {
        policy.validate()?;
        let floor = policy.floor();
        if initial_balance < floor {
            return Err(Error::invalid(format!(
                "initial balance {} is below the {} account floor of {}",
                initial_balance,
                policy.account_type(),
                floor
            )));
        }
        Ok(Self {
            number,
            balance: initial_balance,
            policy,
        })
    }

    pub fn checking(
        number: AccountNumber,
        initial_balance: Money,
        overdraft_limit: Money,
    ) -> Result<Self> {
        Self::new(number, initial_balance, AccountPolicy::Checking { overdraft_limit })
    }

    pub fn savings(
        number: AccountNumber,
        initial_balance: Money,
        interest_rate: Decimal,
    ) -> Result<Self> {
        Self::new(number, initial_balance, AccountPolicy::Savings { interest_rate })
    }

    pub fn joint(
        number: AccountNumber,
        initial_balance: Money,
        owners: JointOwners,
    ) -> Result<Self> {
        Self::new(number, initial_balance, AccountPolicy::Joint { owners })
    }

    pub fn account_number(&self) -> AccountNumber {
        self.number
    }

    pub fn account_type(&self) -> AccountType {
        self.policy.account_type()
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Current balance formatted for display
    pub fn show_balance(&self) -> String {
        self.balance.to_string()
    }

    pub fn policy(&self) -> &AccountPolicy {
        &self.policy
    }

    /// The most this account can currently give up
    pub fn available_ceiling(&self) -> Money {
        self.policy.ceiling(self.balance)
    }

    pub fn overdraft_limit(&self) -> Option<Money> {
        match &self.policy {
            AccountPolicy::Checking { overdraft_limit } => Some(*overdraft_limit),
            _ => None,
        }
    }

    pub fn interest_rate(&self) -> Option<Decimal> {
        match &self.policy {
            AccountPolicy::Savings { interest_rate } => Some(*interest_rate),
            _ => None,
        }
    }

    pub fn owners(&self) -> Option<&JointOwners> {
        match &self.policy {
            AccountPolicy::Joint { owners } => Some(owners),
            _ => None,
        }
    }

    /// Add a joint owner. Adding a name twice is a no-op; returns whether
    /// the owner set changed.
    pub fn add_owner(&mut self, name: &str) -> Result<bool> {
        let account_type = self.account_type();
        match &mut self.policy {
            AccountPolicy::Joint { owners } => owners.insert(name),
            _ => Err(Error::invalid(format!(
                "account {} is a {} account and has no joint owners",
                self.number, account_type
            ))),
        }
    }

    /// Add money. Returns the new balance.
    pub fn deposit(&mut self, amount: Amount) -> Result<Money> {
        self.balance = self.balance.checked_add(amount.money())?;
        Ok(self.balance)
    }

    /// Remove money if the policy ceiling allows it. Returns the new balance.
    pub fn withdraw(&mut self, amount: Amount) -> Result<Money> {
        let remaining = self.debit_preview(amount)?;
        self.balance = remaining;
        Ok(remaining)
    }

    /// Move money to another account. Either both balances change by
    /// `amount` or neither changes.
    pub fn transfer(&mut self, destination: &mut Account, amount: Amount) -> Result<()> {
        if destination.number == self.number {
            return Err(Error::invalid(format!(
                "cannot transfer from account {} to itself",
                self.number
            )));
        }

        let remaining = self.debit_preview(amount)?;
        let credited = destination.balance.checked_add(amount.money())?;

        self.balance = remaining;
        destination.balance = credited;
        Ok(())
    }

    /// Balance after removing `amount`, without mutating anything
    fn debit_preview(&self, amount: Amount) -> Result<Money> {
        let ceiling = self.available_ceiling();
        if amount.money() > ceiling {
            return Err(Error::InsufficientFunds {
                account: self.number,
                requested: amount.money(),
                ceiling,
            });
        }
        self.balance.checked_sub(amount.money())
    }

    /// Read-only projection for reporting
    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            account_number: self.number,
            account_type: self.account_type(),
            balance: self.balance,
            available: self.available_ceiling(),
            owners: self
                .owners()
                .map(|owners| owners.as_slice().to_vec())
                .unwrap_or_default(),
        }
    }
}

/// Snapshot of an account for display and JSON output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub account_number: AccountNumber,
    pub account_type: AccountType,
    pub balance: Money,
    /// Current withdrawal ceiling
    pub available: Money,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub owners: Vec<String>,
}
