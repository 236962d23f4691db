//! The [`Subtask`] entity: a checklist item owned by a task.

use serde::{Deserialize, Serialize};
use tandem_core::ids::{SubtaskId, UserId};

use crate::user::User;

/// A checklist item inside a task.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subtask {
    /// Unique ID (prefixed: `sub_{uuid}`).
    pub id: SubtaskId,
    /// Short label shown in the checklist.
    pub title: String,
    /// Longer free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the item is checked off.
    pub is_done: bool,
    /// Members responsible for this item.
    pub assignees: Vec<User>,
    /// Who created the item. `None` on legacy/seed items, which anyone may edit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<User>,
}

impl Subtask {
    /// Create an unchecked subtask with a fresh ID.
    pub fn new(title: impl Into<String>, created_by: Option<User>) -> Self {
        Self {
            id: SubtaskId::new(),
            title: title.into(),
            description: None,
            is_done: false,
            assignees: Vec::new(),
            created_by,
        }
    }

    /// Whether `user_id` is among the assignees.
    #[must_use]
    pub fn has_assignee(&self, user_id: &UserId) -> bool {
        self.assignees.iter().any(|u| &u.id == user_id)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unchecked_and_unassigned() {
        let s = Subtask::new("Buy paint", None);
        assert!(!s.is_done);
        assert!(s.assignees.is_empty());
        assert!(s.created_by.is_none());
    }

    #[test]
    fn assignee_lookup_by_id() {
        let ava = User::new("Ava Torres", "+1");
        let ben = User::new("Ben Okafor", "+1");
        let mut s = Subtask::new("Buy paint", Some(ava.clone()));
        s.assignees.push(ava.clone());
        assert!(s.has_assignee(&ava.id));
        assert!(!s.has_assignee(&ben.id));
    }
}
