//! Orchestration and wiring.

mod app;
mod balance;
mod sequence;

pub mod shutdown;

pub use app::{App, RunMode};
pub use balance::check_balance;
pub use sequence::{SequenceReport, StartupSequence};
