//! Configuration and connection validation command handlers.

pub mod balance;
pub mod config;
pub mod telegram;
