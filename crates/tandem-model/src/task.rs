//! The [`Task`] entity: the unit of work, owning subtasks, assignees,
//! attachments, and its own detail-chat thread.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tandem_core::ids::{AttachmentId, SubtaskId, TaskId, UserId};

use crate::attachment::Attachment;
use crate::message::Thread;
use crate::subtask::Subtask;
use crate::user::User;

/// Task status. Two states, both reachable from each other, no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Still open.
    Pending,
    /// Marked done.
    Done,
}

impl TaskStatus {
    /// Stable lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Done => "done",
        }
    }

    /// The other status.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Pending => Self::Done,
            Self::Done => Self::Pending,
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checklist completion counts for a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtaskProgress {
    /// Subtasks checked off.
    pub completed: usize,
    /// All subtasks.
    pub total: usize,
}

/// A unit of work owned by a project.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique ID (prefixed: `task_{uuid}`).
    pub id: TaskId,
    /// Short description.
    pub title: String,
    /// Current status.
    pub status: TaskStatus,
    /// Members responsible for the task. No duplicates by user id.
    pub assignees: Vec<User>,
    /// Checklist items, in insertion order.
    pub subtasks: Vec<Subtask>,
    /// Attached files, in upload order.
    pub attachments: Vec<Attachment>,
    /// When this task is due.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    /// Free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Who created the task. `None` on legacy/seed tasks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<User>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Task detail chat.
    pub thread: Thread,
}

impl Task {
    /// Create a pending task with a fresh ID, stamped now.
    pub fn new(title: impl Into<String>, created_by: Option<User>) -> Self {
        Self {
            id: TaskId::new(),
            title: title.into(),
            status: TaskStatus::Pending,
            assignees: Vec::new(),
            subtasks: Vec::new(),
            attachments: Vec::new(),
            due_date: None,
            notes: None,
            created_by,
            created_at: Utc::now(),
            thread: Thread::new(),
        }
    }

    /// Whether the task is past due and still pending.
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        match self.due_date {
            Some(due) => due < now && self.status == TaskStatus::Pending,
            None => false,
        }
    }

    /// Checklist completion counts.
    #[must_use]
    pub fn progress(&self) -> SubtaskProgress {
        SubtaskProgress {
            completed: self.subtasks.iter().filter(|s| s.is_done).count(),
            total: self.subtasks.len(),
        }
    }

    /// Whether `user_id` is among the assignees.
    #[must_use]
    pub fn has_assignee(&self, user_id: &UserId) -> bool {
        self.assignees.iter().any(|u| &u.id == user_id)
    }

    /// Find a subtask by id.
    #[must_use]
    pub fn subtask(&self, id: &SubtaskId) -> Option<&Subtask> {
        self.subtasks.iter().find(|s| &s.id == id)
    }

    /// Find a subtask by id, mutably.
    pub fn subtask_mut(&mut self, id: &SubtaskId) -> Option<&mut Subtask> {
        self.subtasks.iter_mut().find(|s| &s.id == id)
    }

    /// Attachments shown in the media grid (images and videos), upload order.
    #[must_use]
    pub fn media_attachments(&self) -> Vec<&Attachment> {
        self.attachments.iter().filter(|a| a.kind.is_media()).collect()
    }

    /// Attachments shown in the document list, upload order.
    #[must_use]
    pub fn document_attachments(&self) -> Vec<&Attachment> {
        self.attachments
            .iter()
            .filter(|a| !a.kind.is_media())
            .collect()
    }

    /// Attachments linked to a given subtask.
    ///
    /// A dangling link (subtask since deleted) still matches; the link is
    /// lookup-only and deletion does not cascade.
    #[must_use]
    pub fn attachments_for_subtask(&self, subtask_id: &SubtaskId) -> Vec<&Attachment> {
        self.attachments
            .iter()
            .filter(|a| a.linked_subtask_id.as_ref() == Some(subtask_id))
            .collect()
    }

    /// Find an attachment by id.
    #[must_use]
    pub fn attachment(&self, id: &AttachmentId) -> Option<&Attachment> {
        self.attachments.iter().find(|a| &a.id == id)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
