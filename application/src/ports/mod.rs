//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod high_score_store;
pub mod progress;
pub mod sources;
