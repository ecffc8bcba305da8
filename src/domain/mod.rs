//! Exchange-agnostic domain types.

mod id;
mod message;
mod stage;

pub use id::ChatId;
pub use message::{
    analysis_started_text, balance_text, format_usd, welcome_text, NotificationMessage,
};
pub use stage::Stage;
