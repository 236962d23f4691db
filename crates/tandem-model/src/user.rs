//! The [`User`] identity record.

use serde::{Deserialize, Serialize};
use tandem_core::ids::UserId;

/// A person who can be assigned to work or send messages.
///
/// Identity is immutable: users are never destroyed within a session, and
/// entities that display a person (message sender, attachment uploader,
/// task creator) embed a copy of the record as it was at that moment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique ID (prefixed: `usr_{uuid}`).
    pub id: UserId,
    /// Full display name.
    pub name: String,
    /// Phone number as entered; no normalization is applied.
    pub phone_number: String,
}

impl User {
    /// Create a user with a fresh ID.
    pub fn new(name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            phone_number: phone_number.into(),
        }
    }

    /// Up to two uppercase initials for the avatar badge ("Ava Torres" → "AT").
    #[must_use]
    pub fn avatar_initials(&self) -> String {
        self.name
            .split_whitespace()
            .take(2)
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// First name for compact display; the full name when it has no spaces.
    #[must_use]
    pub fn display_first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
