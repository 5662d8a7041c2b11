//! Run orchestration
//!
//! This module contains the run driver and its summary.

pub mod coordinator;
pub mod summary;

pub use coordinator::RunCoordinator;
pub use summary::{OrderFailure, RunState, RunSummary};
