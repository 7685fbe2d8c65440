//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case or feature area.

mod accounts;
mod banking;
pub mod scenario;
mod status;

pub use accounts::AccountService;
pub use banking::BankingService;
pub use scenario::{Scenario, ScenarioReport, ScenarioService, Step, StepOutcome};
pub use status::{CustomerStatus, StatusService, StatusSummary};
