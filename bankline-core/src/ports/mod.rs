//! Port definitions (hexagonal architecture)
//!
//! Ports define the collaborators the core talks to without depending on
//! any concrete implementation. Accounts themselves use neither; services
//! consult them after an operation has been decided.

mod reporter;
mod transaction_manager;

pub use reporter::Reporter;
pub use transaction_manager::TransactionManager;
