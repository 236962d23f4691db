//! # tandem-model
//!
//! The entity graph for the Tandem collaboration engine.
//!
//! Ownership runs top-down: a [`project::Project`] owns its members and
//! tasks, a [`task::Task`] owns its subtasks and attachments, and each of
//! the two chat surfaces (project chat, task detail chat) owns a
//! [`message::Thread`] of immutable [`message::Message`]s.
//!
//! Cross-entity pointers are deliberately weak: an attachment's
//! `linked_subtask_id` is lookup-only, and the [`message::TaskRef`] /
//! [`message::SubtaskRef`] / [`message::QuotedMessage`] types are snapshots
//! captured at reference time, never kept in sync with later renames or
//! deletes. That matches chat-log behavior: a message keeps saying what it
//! said when it was sent.
//!
//! All serializable types use `camelCase` field names for wire compatibility
//! with the mobile clients.
//!
//! ## Crate Position
//!
//! Depends on `tandem-core`. Depended on by `tandem-engine`.

#![deny(unsafe_code)]

pub mod attachment;
pub mod message;
pub mod project;
pub mod subtask;
pub mod task;
pub mod user;

pub use attachment::{Attachment, AttachmentKind};
pub use message::{Message, MessageKind, QuotedMessage, SubtaskRef, TaskRef, Thread};
pub use project::Project;
pub use subtask::Subtask;
pub use task::{SubtaskProgress, Task, TaskStatus};
pub use user::User;
