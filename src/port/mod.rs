//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams between the startup sequence and the outside world.
//! Adapters implement them to integrate with external systems.
//!
//! ```text
//!                 ┌─────────────────────────┐
//!                 │    Startup sequence     │
//!                 └───────────┬─────────────┘
//!               ┌─────────────┴─────────────┐
//!               ▼                           ▼
//!        ┌─────────────┐             ┌───────────┐
//!        │BalanceSource│             │ Notifier  │
//!        │  (exchange) │             │(telegram) │
//!        └─────────────┘             └───────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`BalanceSource`] - Available margin lookup
//! - [`Notifier`] - Message delivery (Telegram, logging, etc.)

mod exchange;
mod notifier;

pub use exchange::BalanceSource;
pub use notifier::Notifier;
