//! Domain identifier types with proper encapsulation.

use std::fmt;

/// Destination chat identifier.
///
/// Either a numeric chat id (`-1001234567890`) or a public channel
/// username (`@channel`). The inner String is private to ensure all
/// construction goes through the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChatId(String);

impl ChatId {
    /// Create a new `ChatId`, trimming surrounding whitespace.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().trim().to_string())
    }

    /// Get the chat ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric form of the id, if it is one.
    #[must_use]
    pub fn as_numeric(&self) -> Option<i64> {
        self.0.parse().ok()
    }

    /// Whether this is a `@channel` username.
    #[must_use]
    pub fn is_username(&self) -> bool {
        self.0.len() > 1 && self.0.starts_with('@')
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ChatId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for ChatId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_chat_id() {
        let id = ChatId::new(" -1001234 ");
        assert_eq!(id.as_str(), "-1001234");
        assert_eq!(id.as_numeric(), Some(-1_001_234));
        assert!(!id.is_username());
    }

    #[test]
    fn username_chat_id() {
        let id = ChatId::from("@margin_alerts");
        assert_eq!(id.as_numeric(), None);
        assert!(id.is_username());
        assert_eq!(id.to_string(), "@margin_alerts");
    }

    #[test]
    fn bare_at_sign_is_not_a_username() {
        assert!(!ChatId::from("@").is_username());
    }
}
