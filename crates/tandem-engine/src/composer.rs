//! Composer staging: the one quote or reference attached to the next message.
//!
//! The message bar shows at most one preview card at a time — a quoted
//! message, a task card, or a subtask card. Staging any of them replaces
//! whatever was staged before, and sending a message consumes the stage
//! (one-shot semantics).

use tandem_model::{Message, QuotedMessage, Subtask, SubtaskRef, Task, TaskRef};

/// What the composer currently has staged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Staged {
    /// Replying to a message.
    Quote(QuotedMessage),
    /// Attaching a task card.
    Task(TaskRef),
    /// Attaching a subtask card.
    Subtask(SubtaskRef),
}

/// Per-thread message composition state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Composer {
    staged: Option<Staged>,
}

impl Composer {
    /// An empty composer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a reply to `message`, replacing any staged reference.
    pub fn stage_quote(&mut self, message: &Message) {
        self.staged = Some(Staged::Quote(QuotedMessage::capture(message)));
    }

    /// Stage a task card, replacing any staged quote or subtask card.
    pub fn stage_task(&mut self, task: &Task) {
        self.staged = Some(Staged::Task(TaskRef::capture(task)));
    }

    /// Stage a subtask card, replacing any staged quote or task card.
    pub fn stage_subtask(&mut self, subtask: &Subtask) {
        self.staged = Some(Staged::Subtask(SubtaskRef::capture(subtask)));
    }

    /// The current stage, if any.
    #[must_use]
    pub fn staged(&self) -> Option<&Staged> {
        self.staged.as_ref()
    }

    /// Whether nothing is staged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.staged.is_none()
    }

    /// Drop whatever is staged (the user dismissed the preview).
    pub fn clear(&mut self) {
        self.staged = None;
    }

    /// Consume the stage for an outgoing message.
    pub fn take(&mut self) -> Option<Staged> {
        self.staged.take()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use tandem_model::User;

    use super::*;

    #[test]
    fn staging_is_mutually_exclusive() {
        let sender = User::new("Ava Torres", "+1");
        let msg = Message::regular("hi", sender.clone(), true);
        let task = Task::new("Paint fence", None);
        let sub = Subtask::new("Buy paint", None);

        let mut composer = Composer::new();
        composer.stage_quote(&msg);
        assert!(matches!(composer.staged(), Some(Staged::Quote(_))));

        composer.stage_task(&task);
        assert!(matches!(composer.staged(), Some(Staged::Task(_))));

        composer.stage_subtask(&sub);
        assert!(matches!(composer.staged(), Some(Staged::Subtask(_))));

        composer.stage_quote(&msg);
        assert!(matches!(composer.staged(), Some(Staged::Quote(_))));
    }

    #[test]
    fn take_is_one_shot() {
        let task = Task::new("Paint fence", None);
        let mut composer = Composer::new();
        composer.stage_task(&task);

        assert!(composer.take().is_some());
        assert!(composer.take().is_none());
        assert!(composer.is_empty());
    }

    #[test]
    fn clear_drops_stage() {
        let task = Task::new("Paint fence", None);
        let mut composer = Composer::new();
        composer.stage_task(&task);
        composer.clear();
        assert!(composer.is_empty());
    }
}
