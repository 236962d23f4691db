//! Error taxonomy for collaboration operations.
//!
//! The two failure shapes the API can produce are a validation failure
//! (required text field empty after trimming) and a missing target
//! (operation aimed at an id absent from its parent collection), plus a
//! permission refusal for admin-gated membership changes. Mutations return
//! `Result` so callers can distinguish "nothing happened" from "applied".

use std::fmt;

use serde::{Deserialize, Serialize};

/// Result alias used across the collaboration API.
pub type CollabResult<T> = Result<T, CollabError>;

/// Which kind of entity an operation failed to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// A project aggregate.
    Project,
    /// A task.
    Task,
    /// A subtask of a task.
    Subtask,
    /// An attachment record.
    Attachment,
    /// A chat message.
    Message,
    /// A project member.
    Member,
}

impl EntityKind {
    /// Stable lowercase name for logs and wire payloads.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Task => "task",
            Self::Subtask => "subtask",
            Self::Attachment => "attachment",
            Self::Message => "message",
            Self::Member => "member",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced by collaboration operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollabError {
    /// A required text field was empty or whitespace-only after trimming.
    #[error("{field} must not be empty")]
    EmptyField {
        /// Name of the offending field (`"title"`, `"content"`, ...).
        field: &'static str,
    },

    /// The operation's target id is absent from its parent collection.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Entity kind that was looked up.
        kind: EntityKind,
        /// The id that missed.
        id: String,
    },

    /// The acting user is not allowed to perform an admin-gated operation.
    #[error("not permitted: {action} requires admin")]
    NotPermitted {
        /// The refused action (`"add member"`, `"remove member"`, ...).
        action: &'static str,
    },
}

impl CollabError {
    /// Shorthand for an empty required field.
    #[must_use]
    pub fn empty(field: &'static str) -> Self {
        Self::EmptyField { field }
    }

    /// Shorthand for a missing task.
    pub fn task_not_found(id: impl fmt::Display) -> Self {
        Self::NotFound {
            kind: EntityKind::Task,
            id: id.to_string(),
        }
    }

    /// Shorthand for a missing subtask.
    pub fn subtask_not_found(id: impl fmt::Display) -> Self {
        Self::NotFound {
            kind: EntityKind::Subtask,
            id: id.to_string(),
        }
    }

    /// Whether this is a validation failure (as opposed to a missing target
    /// or a permission refusal).
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyField { .. })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
