//! Messaging operations on a [`Board`]: sending into the project chat or a
//! task's detail chat, with composer staging consumed one message at a time.

use tandem_core::errors::{CollabError, CollabResult};
use tandem_core::text::{trimmed_non_empty, truncate_str};
use tracing::debug;

use tandem_model::{Message, Thread, User};

use crate::board::{Board, ThreadKind};
use crate::composer::{Composer, Staged};

impl Board {
    fn thread_mut(&mut self, thread: &ThreadKind) -> CollabResult<&mut Thread> {
        match thread {
            ThreadKind::Project => Ok(&mut self.project.thread),
            ThreadKind::Task(task_id) => self
                .project
                .task_mut(task_id)
                .map(|t| &mut t.thread)
                .ok_or_else(|| CollabError::task_not_found(task_id)),
        }
    }

    /// Read access to a thread.
    #[must_use]
    pub fn thread(&self, thread: &ThreadKind) -> Option<&Thread> {
        match thread {
            ThreadKind::Project => Some(&self.project.thread),
            ThreadKind::Task(task_id) => self.project.task(task_id).map(|t| &t.thread),
        }
    }

    /// Send a message from the current user, consuming whatever the
    /// composer has staged (quote, task card, or subtask card).
    ///
    /// Rejects empty/whitespace-only content — in that case the composer's
    /// stage is left in place, since the preview stays visible until a
    /// message actually goes out. On success the stage is consumed: each
    /// outgoing message takes at most one attachment.
    pub fn send_message(
        &mut self,
        thread: &ThreadKind,
        content: &str,
        composer: &mut Composer,
    ) -> CollabResult<Message> {
        let Some(content) = trimmed_non_empty(content) else {
            debug!("send_message rejected: empty content");
            return Err(CollabError::empty("content"));
        };
        let sender = self.current_user.clone();
        let target = self.thread_mut(thread)?;

        let mut message = Message::regular(content, sender, true);
        match composer.take() {
            Some(Staged::Quote(quote)) => message.quoted = Some(quote),
            Some(Staged::Task(task_ref)) => message.task_ref = Some(task_ref),
            Some(Staged::Subtask(subtask_ref)) => message.subtask_ref = Some(subtask_ref),
            None => {}
        }

        debug!(
            message_id = %message.id,
            preview = truncate_str(&message.content, 80),
            "message sent"
        );
        target.push(message.clone());
        Ok(message)
    }

    /// Record a message from another member (mock inbound delivery).
    ///
    /// Same validation as [`Board::send_message`]; `is_from_current_user`
    /// is derived from the sender's id, and no composer is involved.
    pub fn send_message_from(
        &mut self,
        thread: &ThreadKind,
        content: &str,
        sender: &User,
    ) -> CollabResult<Message> {
        let Some(content) = trimmed_non_empty(content) else {
            return Err(CollabError::empty("content"));
        };
        let from_current = sender.id == self.current_user.id;
        let target = self.thread_mut(thread)?;
        let message = Message::regular(content, sender.clone(), from_current);
        target.push(message.clone());
        Ok(message)
    }

    /// Share a contact card as a regular message from the current user.
    ///
    /// Content is synthesized (`Shared contact: <name>` + phone line), so
    /// it never fails validation.
    pub fn send_contact_message(
        &mut self,
        thread: &ThreadKind,
        contact: &User,
    ) -> CollabResult<Message> {
        let sender = self.current_user.clone();
        let target = self.thread_mut(thread)?;
        let content = format!("Shared contact: {}\n{}", contact.name, contact.phone_number);
        let message = Message::regular(content, sender, true);
        target.push(message.clone());
        Ok(message)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
