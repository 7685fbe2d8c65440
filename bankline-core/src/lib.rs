//! Bankline Core - in-memory retail banking domain
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core business entities (Account, Transaction, Customer, Money)
//! - **ports**: Trait definitions for collaborators (TransactionManager, Reporter)
//! - **services**: Business logic orchestration
//! - **adapters**: Concrete implementations (in-memory log, text reporter, demo data)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::memory::InMemoryTransactionLog;
use adapters::text::PlainTextReporter;
use config::Config;
use services::*;

// Re-export commonly used types at crate root
pub use domain::result::{Error, OperationResult};
pub use domain::{
    Account, AccountNumber, AccountSummary, AccountType, Amount, Customer, JointOwners, Money,
    SharedAccount, Transaction, TransactionType,
};
pub use ports::{Reporter, TransactionManager};

/// Main context for Bankline operations
///
/// This is the primary entry point for all business logic. It holds
/// the configuration, the transaction log and all services.
pub struct BankContext {
    pub config: Config,
    pub transaction_log: Arc<InMemoryTransactionLog>,
    pub account_service: Arc<AccountService>,
    pub banking_service: BankingService,
    pub status_service: StatusService,
    pub scenario_service: ScenarioService,
    pub reporter: PlainTextReporter,
}

impl BankContext {
    /// Create a new context from an already loaded config
    pub fn new(config: Config) -> Self {
        let transaction_log = Arc::new(InMemoryTransactionLog::new());
        let account_service = Arc::new(AccountService::new(&config));

        let banking_service = BankingService::new(transaction_log.clone());
        let status_service =
            StatusService::new(Arc::clone(&account_service), transaction_log.clone());
        let scenario_service = ScenarioService::new(config.clone());
        let reporter = PlainTextReporter::new(config.currency_symbol.clone());

        Self {
            config,
            transaction_log,
            account_service,
            banking_service,
            status_service,
            scenario_service,
            reporter,
        }
    }

    /// Create a context with configuration read from `bankline_dir`
    pub fn load(bankline_dir: &Path) -> Result<Self> {
        let config = Config::load(bankline_dir)?;
        Ok(Self::new(config))
    }
}

impl Default for BankContext {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
