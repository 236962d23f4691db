//! The [`Board`]: all mutation and query operations over one project.
//!
//! A board is the view-model equivalent — one project aggregate plus the
//! device's current user. Business rules enforced here:
//!
//! - **Validation**: titles and message content must be non-empty after
//!   trimming; violations reject with [`CollabError::EmptyField`] and leave
//!   state untouched.
//! - **Idempotent deletes**: deleting an already-absent task/subtask/
//!   attachment returns `false`, never an error.
//! - **System narration**: toggling a subtask appends exactly one system
//!   message to the task's thread per call — see [`Board::toggle_subtask`].
//! - **Membership invariant**: removing a member strips them from every
//!   task's assignee list, keeping assignees ⊆ members.
//! - **Admin heuristic**: the task creator is admin; on creator-less tasks,
//!   the first assignee (or anyone, when there are no assignees) — see
//!   [`is_admin`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tandem_core::errors::{CollabError, CollabResult, EntityKind};
use tandem_core::ids::{AttachmentId, SubtaskId, TaskId, UserId};
use tandem_core::text::trimmed_non_empty;
use tracing::{debug, info};

use tandem_model::{
    Attachment, Message, MessageKind, Project, Subtask, SubtaskProgress, SubtaskRef, Task,
    TaskStatus, User,
};

/// Parameters for creating a task.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    /// Task title. Rejected when empty after trimming.
    pub title: String,
    /// Initial assignees (deduplicated by user id).
    #[serde(default)]
    pub assignees: Vec<User>,
    /// Initial checklist item titles; blank entries are skipped.
    #[serde(default)]
    pub subtasks: Vec<String>,
    /// Due date, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewTask {
    /// A task with just a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Parameters for creating a subtask.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubtask {
    /// Checklist item title. Rejected when empty after trimming.
    pub title: String,
    /// Longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Initial assignees (deduplicated by user id).
    #[serde(default)]
    pub assignees: Vec<User>,
}

impl NewSubtask {
    /// A subtask with just a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Which chat thread a messaging operation targets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "taskId", rename_all = "camelCase")]
pub enum ThreadKind {
    /// The project chat.
    Project,
    /// A task's detail chat.
    Task(TaskId),
}

/// Whether `user` administers `task`.
///
/// The creator is admin. On creator-less (legacy/seed) tasks the heuristic
/// falls back to the first assignee, and a task with no assignees at all is
/// administered by anyone. With multiple assignees and no creator only the
/// first counts; the source never pinned that case down, so the fallback is
/// kept exactly as observed.
#[must_use]
pub fn is_admin(task: &Task, user: &User) -> bool {
    match &task.created_by {
        Some(creator) => creator.id == user.id,
        None => match task.assignees.first() {
            Some(first) => first.id == user.id,
            None => true,
        },
    }
}

/// One project aggregate plus the acting user: the full collaboration API.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) project: Project,
    pub(crate) current_user: User,
}

fn dedup_by_id(users: Vec<User>) -> Vec<User> {
    let mut seen: Vec<UserId> = Vec::with_capacity(users.len());
    let mut out = Vec::with_capacity(users.len());
    for user in users {
        if !seen.contains(&user.id) {
            seen.push(user.id.clone());
            out.push(user);
        }
    }
    out
}

impl Board {
    /// Wrap a project for `current_user`.
    #[must_use]
    pub fn new(project: Project, current_user: User) -> Self {
        Self {
            project,
            current_user,
        }
    }

    /// The underlying project.
    #[must_use]
    pub fn project(&self) -> &Project {
        &self.project
    }

    /// The acting user.
    #[must_use]
    pub fn current_user(&self) -> &User {
        &self.current_user
    }

    /// Unwrap back into the project.
    #[must_use]
    pub fn into_project(self) -> Project {
        self.project
    }

    fn task_mut(&mut self, id: &TaskId) -> CollabResult<&mut Task> {
        self.project
            .task_mut(id)
            .ok_or_else(|| CollabError::task_not_found(id))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Task operations
    // ─────────────────────────────────────────────────────────────────────

    /// Create a task at the end of the project's task list.
    ///
    /// `created_by` is the current user and `created_at` is now. Blank
    /// entries in `subtasks` are skipped; assignees are deduplicated by id.
    pub fn add_task(&mut self, params: NewTask) -> CollabResult<Task> {
        let Some(title) = trimmed_non_empty(&params.title) else {
            debug!("add_task rejected: empty title");
            return Err(CollabError::empty("title"));
        };

        let mut task = Task::new(title, Some(self.current_user.clone()));
        task.assignees = dedup_by_id(params.assignees);
        task.due_date = params.due_date;
        task.notes = params.notes;
        for sub_title in &params.subtasks {
            if let Some(sub_title) = trimmed_non_empty(sub_title) {
                task.subtasks
                    .push(Subtask::new(sub_title, Some(self.current_user.clone())));
            }
        }

        info!(task_id = %task.id, title = %task.title, "task created");
        self.project.tasks.push(task.clone());
        Ok(task)
    }

    /// Flip a task between pending and done. Returns the new status.
    ///
    /// Unlike subtask toggles, no system message is generated.
    pub fn toggle_task_status(&mut self, task_id: &TaskId) -> CollabResult<TaskStatus> {
        let task = self.task_mut(task_id)?;
        task.status = task.status.toggled();
        let status = task.status;
        debug!(task_id = %task_id, status = %status, "task status toggled");
        Ok(status)
    }

    /// Remove a task by id. Returns `false` when it was already absent;
    /// attachments and messages that reference it are left as-is.
    pub fn delete_task(&mut self, task_id: &TaskId) -> bool {
        let before = self.project.tasks.len();
        self.project.tasks.retain(|t| &t.id != task_id);
        let removed = self.project.tasks.len() != before;
        if removed {
            info!(task_id = %task_id, "task deleted");
        }
        removed
    }

    /// Checklist completion counts for a task, `None` when the id is unknown.
    #[must_use]
    pub fn subtask_progress(&self, task_id: &TaskId) -> Option<SubtaskProgress> {
        self.project.task(task_id).map(Task::progress)
    }

    /// Open tasks, insertion order.
    #[must_use]
    pub fn pending_tasks(&self) -> Vec<&Task> {
        self.project.pending_tasks()
    }

    /// Done tasks, insertion order.
    #[must_use]
    pub fn completed_tasks(&self) -> Vec<&Task> {
        self.project.completed_tasks()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Subtask operations
    // ─────────────────────────────────────────────────────────────────────

    /// Append a checklist item to a task. `created_by` is the current user.
    pub fn add_subtask(&mut self, task_id: &TaskId, params: NewSubtask) -> CollabResult<Subtask> {
        let Some(title) = trimmed_non_empty(&params.title) else {
            debug!(task_id = %task_id, "add_subtask rejected: empty title");
            return Err(CollabError::empty("title"));
        };
        let creator = self.current_user.clone();
        let task = self.task_mut(task_id)?;

        let mut subtask = Subtask::new(title, Some(creator));
        subtask.description = params.description;
        subtask.assignees = dedup_by_id(params.assignees);

        task.subtasks.push(subtask.clone());
        debug!(task_id = %task_id, subtask_id = %subtask.id, "subtask added");
        Ok(subtask)
    }

    /// Flip a checklist item and narrate the change in the task's thread.
    ///
    /// Exactly one system message is appended per call: kind
    /// `SubtaskCompleted` with content `completed "<title>"` when the item
    /// becomes done, kind `SubtaskReopened` with `reopened "<title>"` when
    /// it becomes open again. The message carries a fresh subtask snapshot
    /// and is sent by the current user. Returns the new `is_done`.
    pub fn toggle_subtask(
        &mut self,
        task_id: &TaskId,
        subtask_id: &SubtaskId,
    ) -> CollabResult<bool> {
        let sender = self.current_user.clone();
        let task = self.task_mut(task_id)?;
        let subtask = task
            .subtask_mut(subtask_id)
            .ok_or_else(|| CollabError::subtask_not_found(subtask_id))?;

        subtask.is_done = !subtask.is_done;
        let is_done = subtask.is_done;
        let snapshot = SubtaskRef::capture(subtask);

        let (verb, kind) = if is_done {
            ("completed", MessageKind::SubtaskCompleted(snapshot.clone()))
        } else {
            ("reopened", MessageKind::SubtaskReopened(snapshot.clone()))
        };
        let mut message = Message::regular(format!("{verb} \"{}\"", snapshot.title), sender, true);
        message.subtask_ref = Some(snapshot);
        message.kind = kind;

        debug!(
            task_id = %task_id,
            subtask_id = %subtask_id,
            is_done,
            "subtask toggled"
        );
        task.thread.push(message);
        Ok(is_done)
    }

    /// Remove a checklist item. `false` when the task or item was absent.
    pub fn delete_subtask(&mut self, task_id: &TaskId, subtask_id: &SubtaskId) -> bool {
        let Some(task) = self.project.task_mut(task_id) else {
            return false;
        };
        let before = task.subtasks.len();
        task.subtasks.retain(|s| &s.id != subtask_id);
        task.subtasks.len() != before
    }

    /// Rename a checklist item. Rejects an empty title.
    pub fn rename_subtask(
        &mut self,
        task_id: &TaskId,
        subtask_id: &SubtaskId,
        title: &str,
    ) -> CollabResult<()> {
        let Some(title) = trimmed_non_empty(title) else {
            return Err(CollabError::empty("title"));
        };
        let subtask = self.subtask_mut(task_id, subtask_id)?;
        subtask.title = title.to_owned();
        Ok(())
    }

    /// Replace a checklist item's description (`None` clears it).
    pub fn set_subtask_description(
        &mut self,
        task_id: &TaskId,
        subtask_id: &SubtaskId,
        description: Option<String>,
    ) -> CollabResult<()> {
        let subtask = self.subtask_mut(task_id, subtask_id)?;
        subtask.description = description;
        Ok(())
    }

    /// Replace a checklist item's assignees (deduplicated by id).
    pub fn set_subtask_assignees(
        &mut self,
        task_id: &TaskId,
        subtask_id: &SubtaskId,
        assignees: Vec<User>,
    ) -> CollabResult<()> {
        let subtask = self.subtask_mut(task_id, subtask_id)?;
        subtask.assignees = dedup_by_id(assignees);
        Ok(())
    }

    /// Add `user` to a checklist item's assignees if absent, remove if
    /// present. Returns whether the user is assigned afterwards.
    pub fn toggle_subtask_assignee(
        &mut self,
        task_id: &TaskId,
        subtask_id: &SubtaskId,
        user: &User,
    ) -> CollabResult<bool> {
        let subtask = self.subtask_mut(task_id, subtask_id)?;
        if subtask.has_assignee(&user.id) {
            subtask.assignees.retain(|u| u.id != user.id);
            Ok(false)
        } else {
            subtask.assignees.push(user.clone());
            Ok(true)
        }
    }

    /// Whether `user` may edit `subtask`: creator-less items are open to
    /// everyone; otherwise the creator or an admin.
    #[must_use]
    pub fn can_edit_subtask(subtask: &Subtask, user: &User, user_is_admin: bool) -> bool {
        match &subtask.created_by {
            None => true,
            Some(creator) => creator.id == user.id || user_is_admin,
        }
    }

    fn subtask_mut(
        &mut self,
        task_id: &TaskId,
        subtask_id: &SubtaskId,
    ) -> CollabResult<&mut Subtask> {
        self.task_mut(task_id)?
            .subtask_mut(subtask_id)
            .ok_or_else(|| CollabError::subtask_not_found(subtask_id))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Membership & assignees
    // ─────────────────────────────────────────────────────────────────────

    /// Whether the current user administers `task`.
    #[must_use]
    pub fn current_user_is_admin(&self, task: &Task) -> bool {
        is_admin(task, &self.current_user)
    }

    /// Add a project member. Admin-gated on the task whose collaboration
    /// sheet the change comes from; duplicates by id are ignored.
    pub fn add_member(&mut self, task_id: &TaskId, user: User) -> CollabResult<()> {
        let task = self
            .project
            .task(task_id)
            .ok_or_else(|| CollabError::task_not_found(task_id))?;
        if !is_admin(task, &self.current_user) {
            debug!(task_id = %task_id, "add_member refused: not admin");
            return Err(CollabError::NotPermitted {
                action: "add member",
            });
        }
        self.project.add_member(user);
        Ok(())
    }

    /// Remove a project member. Admin-gated like [`Board::add_member`];
    /// also strips the user from every task's assignee list so that
    /// assignees stay a subset of members.
    pub fn remove_member(&mut self, task_id: &TaskId, user_id: &UserId) -> CollabResult<()> {
        let task = self
            .project
            .task(task_id)
            .ok_or_else(|| CollabError::task_not_found(task_id))?;
        if !is_admin(task, &self.current_user) {
            debug!(task_id = %task_id, "remove_member refused: not admin");
            return Err(CollabError::NotPermitted {
                action: "remove member",
            });
        }
        if !self.project.remove_member(user_id) {
            return Err(CollabError::NotFound {
                kind: EntityKind::Member,
                id: user_id.to_string(),
            });
        }
        for t in &mut self.project.tasks {
            t.assignees.retain(|u| &u.id != user_id);
        }
        info!(user_id = %user_id, "member removed");
        Ok(())
    }

    /// Add `user` to a task's assignees if absent, remove if present.
    /// Returns whether the user is assigned afterwards.
    pub fn toggle_assignee(&mut self, task_id: &TaskId, user: &User) -> CollabResult<bool> {
        let task = self.task_mut(task_id)?;
        if task.has_assignee(&user.id) {
            task.assignees.retain(|u| u.id != user.id);
            Ok(false)
        } else {
            task.assignees.push(user.clone());
            Ok(true)
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Attachments
    // ─────────────────────────────────────────────────────────────────────

    /// Append an attachment to a task. Returns its id.
    pub fn add_attachment(
        &mut self,
        task_id: &TaskId,
        attachment: Attachment,
    ) -> CollabResult<AttachmentId> {
        let task = self.task_mut(task_id)?;
        let id = attachment.id.clone();
        task.attachments.push(attachment);
        debug!(task_id = %task_id, attachment_id = %id, "attachment added");
        Ok(id)
    }

    /// Remove an attachment by id. `false` when the task or attachment was
    /// absent.
    pub fn remove_attachment(&mut self, task_id: &TaskId, attachment_id: &AttachmentId) -> bool {
        let Some(task) = self.project.task_mut(task_id) else {
            return false;
        };
        let before = task.attachments.len();
        task.attachments.retain(|a| &a.id != attachment_id);
        task.attachments.len() != before
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use tandem_model::AttachmentKind;

    use super::*;

    fn board() -> (Board, User, User) {
        let ava = User::new("Ava Torres", "+1 555 0100");
        let ben = User::new("Ben Okafor", "+1 555 0101");
        let mut project = Project::new("Backyard refresh");
        project.add_member(ava.clone());
        project.add_member(ben.clone());
        (Board::new(project, ava.clone()), ava, ben)
    }

    #[test]
    fn add_task_trims_and_stamps_creator() {
        let (mut board, ava, ben) = board();
        let task = board
            .add_task(NewTask {
                title: "  Paint fence  ".into(),
                assignees: vec![ben.clone(), ben.clone()],
                subtasks: vec!["Buy paint".into(), "   ".into()],
                ..NewTask::default()
            })
            .unwrap();

        assert_eq!(task.title, "Paint fence");
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.assignees.len(), 1); // duplicate collapsed
        assert_eq!(task.subtasks.len(), 1); // blank entry skipped
        assert_eq!(task.created_by.as_ref().unwrap().id, ava.id);
        assert_eq!(board.project().tasks.len(), 1);
    }

    #[test]
    fn add_task_rejects_blank_titles() {
        let (mut board, _, _) = board();
        assert_matches!(
            board.add_task(NewTask::titled("")),
            Err(CollabError::EmptyField { field: "title" })
        );
        assert_matches!(
            board.add_task(NewTask::titled("   ")),
            Err(CollabError::EmptyField { field: "title" })
        );
        assert!(board.project().tasks.is_empty());
    }

    #[test]
    fn toggle_task_status_round_trips_without_messages() {
        let (mut board, _, _) = board();
        let task = board.add_task(NewTask::titled("Paint fence")).unwrap();

        assert_eq!(board.toggle_task_status(&task.id), Ok(TaskStatus::Done));
        assert_eq!(board.toggle_task_status(&task.id), Ok(TaskStatus::Pending));
        assert!(board.project().task(&task.id).unwrap().thread.is_empty());
    }

    #[test]
    fn toggle_task_status_unknown_id() {
        let (mut board, _, _) = board();
        assert_matches!(
            board.toggle_task_status(&TaskId::from_raw("task_missing")),
            Err(CollabError::NotFound { .. })
        );
    }

    #[test]
    fn delete_task_is_idempotent() {
        let (mut board, _, _) = board();
        let task = board.add_task(NewTask::titled("Paint fence")).unwrap();

        assert!(board.delete_task(&task.id));
        assert!(!board.delete_task(&task.id));
        assert!(board.project().tasks.is_empty());
    }

    #[test]
    fn toggle_subtask_emits_one_message_per_call() {
        let (mut board, ava, _) = board();
        let task = board.add_task(NewTask::titled("Paint fence")).unwrap();
        let sub = board
            .add_subtask(&task.id, NewSubtask::titled("Buy paint"))
            .unwrap();

        assert_eq!(board.toggle_subtask(&task.id, &sub.id), Ok(true));
        let thread = &board.project().task(&task.id).unwrap().thread;
        assert_eq!(thread.len(), 1);
        let msg = thread.last().unwrap();
        assert_eq!(msg.content, "completed \"Buy paint\"");
        assert!(msg.is_from_current_user);
        assert_eq!(msg.sender.id, ava.id);
        assert_matches!(&msg.kind, MessageKind::SubtaskCompleted(r) if r.title == "Buy paint");
        assert_eq!(msg.subtask_ref.as_ref().unwrap().subtask_id, sub.id);

        assert_eq!(board.toggle_subtask(&task.id, &sub.id), Ok(false));
        let thread = &board.project().task(&task.id).unwrap().thread;
        assert_eq!(thread.len(), 2);
        assert_eq!(thread.last().unwrap().content, "reopened \"Buy paint\"");
        assert_matches!(
            &thread.last().unwrap().kind,
            MessageKind::SubtaskReopened(_)
        );
    }

    #[test]
    fn toggle_subtask_snapshot_stays_stale_after_rename() {
        let (mut board, _, _) = board();
        let task = board.add_task(NewTask::titled("Paint fence")).unwrap();
        let sub = board
            .add_subtask(&task.id, NewSubtask::titled("Buy paint"))
            .unwrap();

        let _ = board.toggle_subtask(&task.id, &sub.id).unwrap();
        board
            .rename_subtask(&task.id, &sub.id, "Buy primer")
            .unwrap();

        let thread = &board.project().task(&task.id).unwrap().thread;
        assert_eq!(
            thread.last().unwrap().subtask_ref.as_ref().unwrap().title,
            "Buy paint"
        );
    }

    #[test]
    fn subtask_field_updates() {
        let (mut board, _, ben) = board();
        let task = board.add_task(NewTask::titled("Paint fence")).unwrap();
        let sub = board
            .add_subtask(&task.id, NewSubtask::titled("Buy paint"))
            .unwrap();

        board
            .set_subtask_description(&task.id, &sub.id, Some("2 cans, white".into()))
            .unwrap();
        assert!(board.toggle_subtask_assignee(&task.id, &sub.id, &ben).unwrap());
        assert!(!board.toggle_subtask_assignee(&task.id, &sub.id, &ben).unwrap());
        board
            .set_subtask_assignees(&task.id, &sub.id, vec![ben.clone(), ben.clone()])
            .unwrap();

        let stored = board.project().task(&task.id).unwrap().subtask(&sub.id).unwrap();
        assert_eq!(stored.description.as_deref(), Some("2 cans, white"));
        assert_eq!(stored.assignees.len(), 1);
    }

    #[test]
    fn subtask_updates_on_missing_ids() {
        let (mut board, _, _) = board();
        let task = board.add_task(NewTask::titled("Paint fence")).unwrap();
        let ghost = SubtaskId::from_raw("sub_missing");

        assert_matches!(
            board.rename_subtask(&task.id, &ghost, "x"),
            Err(CollabError::NotFound { .. })
        );
        assert_matches!(
            board.set_subtask_description(&task.id, &ghost, None),
            Err(CollabError::NotFound { .. })
        );
        assert!(!board.delete_subtask(&task.id, &ghost));
        assert!(!board.delete_subtask(&TaskId::from_raw("task_missing"), &ghost));
    }

    #[test]
    fn rename_subtask_rejects_blank() {
        let (mut board, _, _) = board();
        let task = board.add_task(NewTask::titled("Paint fence")).unwrap();
        let sub = board
            .add_subtask(&task.id, NewSubtask::titled("Buy paint"))
            .unwrap();

        assert_matches!(
            board.rename_subtask(&task.id, &sub.id, "  "),
            Err(CollabError::EmptyField { field: "title" })
        );
        assert_eq!(
            board.project().task(&task.id).unwrap().subtask(&sub.id).unwrap().title,
            "Buy paint"
        );
    }

    #[test]
    fn can_edit_subtask_rules() {
        let (_, ava, ben) = board();
        let legacy = Subtask::new("old item", None);
        assert!(Board::can_edit_subtask(&legacy, &ben, false));

        let owned = Subtask::new("new item", Some(ava.clone()));
        assert!(Board::can_edit_subtask(&owned, &ava, false));
        assert!(!Board::can_edit_subtask(&owned, &ben, false));
        assert!(Board::can_edit_subtask(&owned, &ben, true));
    }

    #[test]
    fn admin_heuristic() {
        let (_, ava, ben) = board();
        let created = Task::new("t", Some(ava.clone()));
        assert!(is_admin(&created, &ava));
        assert!(!is_admin(&created, &ben));

        let mut legacy = Task::new("t", None);
        assert!(is_admin(&legacy, &ava)); // no assignees: anyone

        legacy.assignees = vec![ben.clone(), ava.clone()];
        assert!(is_admin(&legacy, &ben)); // first assignee only
        assert!(!is_admin(&legacy, &ava));
    }

    #[test]
    fn membership_is_admin_gated() {
        let (mut board, ava, ben) = board();
        // Task created by the current user (Ava): she is admin.
        let task = board.add_task(NewTask::titled("Paint fence")).unwrap();
        let chloe = User::new("Chloe Lam", "+1 555 0102");
        board.add_member(&task.id, chloe.clone()).unwrap();
        assert!(board.project().is_member(&chloe.id));

        // Ben is not admin of Ava's task.
        let mut ben_board = Board::new(board.project().clone(), ben.clone());
        assert_matches!(
            ben_board.remove_member(&task.id, &ava.id),
            Err(CollabError::NotPermitted { .. })
        );
        assert!(ben_board.project().is_member(&ava.id));
    }

    #[test]
    fn remove_member_strips_assignees_everywhere() {
        let (mut board, _, ben) = board();
        let gate = board.add_task(NewTask::titled("gate")).unwrap();
        let t1 = board
            .add_task(NewTask {
                title: "one".into(),
                assignees: vec![ben.clone()],
                ..NewTask::default()
            })
            .unwrap();
        let t2 = board
            .add_task(NewTask {
                title: "two".into(),
                assignees: vec![ben.clone()],
                ..NewTask::default()
            })
            .unwrap();

        board.remove_member(&gate.id, &ben.id).unwrap();
        assert!(!board.project().is_member(&ben.id));
        for id in [&t1.id, &t2.id] {
            assert!(!board.project().task(id).unwrap().has_assignee(&ben.id));
        }
    }

    #[test]
    fn remove_member_unknown_user() {
        let (mut board, _, _) = board();
        let task = board.add_task(NewTask::titled("gate")).unwrap();
        assert_matches!(
            board.remove_member(&task.id, &UserId::from_raw("usr_ghost")),
            Err(CollabError::NotFound {
                kind: EntityKind::Member,
                ..
            })
        );
    }

    #[test]
    fn toggle_assignee_adds_then_removes() {
        let (mut board, _, ben) = board();
        let task = board.add_task(NewTask::titled("Paint fence")).unwrap();

        assert_eq!(board.toggle_assignee(&task.id, &ben), Ok(true));
        assert!(board.project().task(&task.id).unwrap().has_assignee(&ben.id));
        assert_eq!(board.toggle_assignee(&task.id, &ben), Ok(false));
        assert!(!board.project().task(&task.id).unwrap().has_assignee(&ben.id));
    }

    #[test]
    fn attachment_add_and_remove() {
        let (mut board, ava, _) = board();
        let task = board.add_task(NewTask::titled("Paint fence")).unwrap();
        let att = Attachment::new(AttachmentKind::Image, "before.jpg", 1024, ava);
        let att_id = board.add_attachment(&task.id, att).unwrap();

        assert_eq!(board.project().task(&task.id).unwrap().attachments.len(), 1);
        assert!(board.project().task(&task.id).unwrap().attachment(&att_id).is_some());
        assert!(board.remove_attachment(&task.id, &att_id));
        assert!(!board.remove_attachment(&task.id, &att_id));
    }

    #[test]
    fn subtask_progress_query() {
        let (mut board, _, _) = board();
        let task = board
            .add_task(NewTask {
                title: "Paint fence".into(),
                subtasks: vec!["a".into(), "b".into()],
                ..NewTask::default()
            })
            .unwrap();
        let first = task.subtasks[0].id.clone();
        let _ = board.toggle_subtask(&task.id, &first).unwrap();

        let progress = board.subtask_progress(&task.id).unwrap();
        assert_eq!((progress.completed, progress.total), (1, 2));
        assert!(board.subtask_progress(&TaskId::from_raw("task_missing")).is_none());
    }
}
