//! The [`Project`] aggregate root: members, tasks, and the project chat.

use serde::{Deserialize, Serialize};
use tandem_core::ids::{ProjectId, TaskId, UserId};

use crate::attachment::Attachment;
use crate::message::Thread;
use crate::task::{Task, TaskStatus};
use crate::user::User;

/// A project: the aggregate that owns members, tasks, and the project chat.
///
/// Invariant (maintained by the engine, not enforced here): every task's
/// assignees are a subset of `members`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique ID (prefixed: `proj_{uuid}`).
    pub id: ProjectId,
    /// Project name.
    pub name: String,
    /// Longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Members, unique by user id, in join order.
    pub members: Vec<User>,
    /// Tasks in insertion order.
    pub tasks: Vec<Task>,
    /// Project chat.
    pub thread: Thread,
}

impl Project {
    /// Create an empty project with a fresh ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ProjectId::new(),
            name: name.into(),
            description: None,
            members: Vec::new(),
            tasks: Vec::new(),
            thread: Thread::new(),
        }
    }

    /// Whether `user_id` is a member.
    #[must_use]
    pub fn is_member(&self, user_id: &UserId) -> bool {
        self.members.iter().any(|u| &u.id == user_id)
    }

    /// Find a member by id.
    #[must_use]
    pub fn member(&self, user_id: &UserId) -> Option<&User> {
        self.members.iter().find(|u| &u.id == user_id)
    }

    /// Add a member; keeps the set unique by id.
    pub fn add_member(&mut self, user: User) {
        if !self.is_member(&user.id) {
            self.members.push(user);
        }
    }

    /// Remove a member by id. Returns whether anything was removed.
    pub fn remove_member(&mut self, user_id: &UserId) -> bool {
        let before = self.members.len();
        self.members.retain(|u| &u.id != user_id);
        self.members.len() != before
    }

    /// Find a task by id.
    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Find a task by id, mutably.
    pub fn task_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| &t.id == id)
    }

    /// Open tasks, in insertion order.
    #[must_use]
    pub fn pending_tasks(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Pending)
            .collect()
    }

    /// Done tasks, in insertion order.
    #[must_use]
    pub fn completed_tasks(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Done)
            .collect()
    }

    /// Every attachment across all tasks, task order then upload order.
    #[must_use]
    pub fn all_attachments(&self) -> Vec<&Attachment> {
        self.tasks.iter().flat_map(|t| t.attachments.iter()).collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
