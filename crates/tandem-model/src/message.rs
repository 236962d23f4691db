//! Chat messages, snapshot references, and the [`Thread`] that owns them.
//!
//! A message is immutable once created — there is no edit operation — and
//! anything it points at (a quoted message, a referenced task or subtask)
//! is captured as a denormalized snapshot at send time. Renaming or
//! deleting the source later leaves the snapshot's text untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tandem_core::ids::{MessageId, SubtaskId, TaskId};

use crate::subtask::Subtask;
use crate::task::Task;
use crate::user::User;

/// Snapshot of a task captured when a message referenced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRef {
    /// Id of the task at reference time.
    pub task_id: TaskId,
    /// Title of the task at reference time.
    pub title: String,
}

impl TaskRef {
    /// Capture a snapshot of `task` as it is right now.
    #[must_use]
    pub fn capture(task: &Task) -> Self {
        Self {
            task_id: task.id.clone(),
            title: task.title.clone(),
        }
    }
}

/// Snapshot of a subtask captured when a message referenced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtaskRef {
    /// Id of the subtask at reference time.
    pub subtask_id: SubtaskId,
    /// Title of the subtask at reference time.
    pub title: String,
}

impl SubtaskRef {
    /// Capture a snapshot of `subtask` as it is right now.
    #[must_use]
    pub fn capture(subtask: &Subtask) -> Self {
        Self {
            subtask_id: subtask.id.clone(),
            title: subtask.title.clone(),
        }
    }
}

/// Snapshot of a quoted message: sender name and content only, no live link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotedMessage {
    /// Display name of the quoted message's sender.
    pub sender_name: String,
    /// Full content of the quoted message.
    pub content: String,
}

impl QuotedMessage {
    /// Capture a quote snapshot of `message`.
    #[must_use]
    pub fn capture(message: &Message) -> Self {
        Self {
            sender_name: message.sender.name.clone(),
            content: message.content.clone(),
        }
    }
}

/// Discriminates regular chat entries from system-generated status narration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "subtask", rename_all = "camelCase")]
pub enum MessageKind {
    /// An ordinary message typed (or shared) by a person.
    Regular,
    /// System narration: a subtask was checked off.
    SubtaskCompleted(SubtaskRef),
    /// System narration: a completed subtask was unchecked.
    SubtaskReopened(SubtaskRef),
}

impl MessageKind {
    /// Whether this is system-generated status narration.
    #[must_use]
    pub fn is_system(&self) -> bool {
        !matches!(self, Self::Regular)
    }
}

/// A chat entry in a project or task thread.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique ID (prefixed: `msg_{uuid}`).
    pub id: MessageId,
    /// Message text.
    pub content: String,
    /// Who sent it (snapshot of the user record).
    pub sender: User,
    /// When it was sent.
    pub timestamp: DateTime<Utc>,
    /// Whether the sender is the device's current user (drives bubble side).
    pub is_from_current_user: bool,
    /// Quoted message snapshot, when this is a reply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quoted: Option<QuotedMessage>,
    /// Task reference card attached to the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_ref: Option<TaskRef>,
    /// Subtask reference card attached to the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtask_ref: Option<SubtaskRef>,
    /// Regular chat vs system narration.
    pub kind: MessageKind,
}

impl Message {
    /// Create a plain regular message stamped with the current time.
    pub fn regular(content: impl Into<String>, sender: User, is_from_current_user: bool) -> Self {
        Self {
            id: MessageId::new(),
            content: content.into(),
            sender,
            timestamp: Utc::now(),
            is_from_current_user,
            quoted: None,
            task_ref: None,
            subtask_ref: None,
            kind: MessageKind::Regular,
        }
    }
}

/// An ordered chat thread. Owned by the project (project chat) or by a
/// single task (task detail chat).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thread {
    /// Messages in send order.
    pub messages: Vec<Message>,
    /// Index one past the last message the current user has seen.
    pub last_read: usize,
}

impl Thread {
    /// An empty thread.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message at the end.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the thread has no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The most recent message, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Messages received after the read marker.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.messages.len().saturating_sub(self.last_read)
    }

    /// Move the read marker to the end of the thread.
    pub fn mark_read(&mut self) {
        self.last_read = self.messages.len();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
