//! Shared value objects used across bounded contexts

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical recipient identifier
///
/// An E.164-style phone number string (`+` followed by country code and
/// national number, no formatting characters). This is the form calls are
/// addressed with; it is produced by parsing a user-entered handle, or
/// wrapped directly when the caller already holds a normalized number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecipientId(String);

impl RecipientId {
    /// Wrap an already-normalized identifier. No re-validation is performed;
    /// the string is assumed canonical.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipient_id_display() {
        let id = RecipientId::new("+15551234567");
        assert_eq!(id.to_string(), "+15551234567");
        assert_eq!(id.as_str(), "+15551234567");
    }

    #[test]
    fn test_recipient_id_equality() {
        assert_eq!(RecipientId::new("+15551234567"), RecipientId::new("+15551234567"));
        assert_ne!(RecipientId::new("+15551234567"), RecipientId::new("+15559998888"));
    }
}
