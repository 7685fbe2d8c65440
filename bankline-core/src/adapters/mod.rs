//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - In-memory log for the TransactionManager port
//! - Plain text rendering for the Reporter port
//! - Built-in demo scenarios

pub mod demo;
pub mod memory;
pub mod text;
