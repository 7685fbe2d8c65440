//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

mod account;
mod customer;
pub mod money;
mod owners;
mod shared;
mod transaction;
pub mod result;

pub use account::{Account, AccountNumber, AccountPolicy, AccountSummary, AccountType};
pub use customer::{Customer, CustomerSummary};
pub use money::{Amount, Money};
pub use owners::JointOwners;
pub use shared::SharedAccount;
pub use transaction::{Transaction, TransactionType};
