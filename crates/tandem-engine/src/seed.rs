//! Demo data the app boots with when no backend is configured.
//!
//! Everything here goes through the public board API so the seed exercises
//! the same code paths as live usage; the only direct construction is the
//! project shell and its member list.

use chrono::{TimeDelta, Utc};
use tandem_core::errors::CollabResult;
use tandem_model::{Attachment, AttachmentKind, Project, User};

use crate::board::{Board, NewSubtask, NewTask, ThreadKind};

/// Build a populated demo board: three members, tasks in both states, a
/// checklist with history, attachments, and chat on both surfaces.
///
/// The current user is the first member ("Ava Torres").
pub fn demo_board() -> CollabResult<Board> {
    let ava = User::new("Ava Torres", "+1 555 0100");
    let ben = User::new("Ben Okafor", "+1 555 0101");
    let chloe = User::new("Chloe Lam", "+1 555 0102");

    let mut project = Project::new("Backyard refresh");
    project.description = Some("Fence, deck, and planting before the party".into());
    project.add_member(ava.clone());
    project.add_member(ben.clone());
    project.add_member(chloe.clone());

    let mut board = Board::new(project, ava);

    let fence = board.add_task(NewTask {
        title: "Paint the fence".into(),
        assignees: vec![ben.clone()],
        subtasks: vec!["Buy paint".into(), "Sand panels".into()],
        due_date: Some(Utc::now() + TimeDelta::days(3)),
        notes: Some("Two coats, weatherproof".into()),
    })?;
    let deck = board.add_task(NewTask {
        title: "Fix the deck rail".into(),
        assignees: vec![chloe.clone()],
        ..NewTask::default()
    })?;
    let _ = board.add_subtask(&deck.id, NewSubtask::titled("Order replacement posts"))?;

    let planted = board.add_task(NewTask::titled("Plant the border beds"))?;
    let _ = board.toggle_task_status(&planted.id)?;

    // Checked-off checklist item, which also seeds the task thread with
    // one narration message.
    let buy_paint = fence.subtasks[0].id.clone();
    let _ = board.toggle_subtask(&fence.id, &buy_paint)?;

    let _ = board.add_attachment(
        &fence.id,
        Attachment::for_subtask(
            AttachmentKind::Image,
            "swatch.jpg",
            48_231,
            ben.clone(),
            buy_paint,
        ),
    )?;
    let _ = board.add_attachment(
        &fence.id,
        Attachment::new(AttachmentKind::Document, "paint-quote.pdf", 102_400, ben.clone()),
    )?;

    let _ = board.send_message_from(&ThreadKind::Project, "Fence crew starts Saturday", &ben)?;
    let _ = board.send_message_from(
        &ThreadKind::Project,
        "I can take photos of the deck tonight",
        &chloe,
    )?;

    Ok(board)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_board_shape() {
        let board = demo_board().unwrap();
        let project = board.project();

        assert_eq!(project.members.len(), 3);
        assert_eq!(project.tasks.len(), 3);
        assert_eq!(board.pending_tasks().len(), 2);
        assert_eq!(board.completed_tasks().len(), 1);
        assert_eq!(project.thread.len(), 2);
        assert_eq!(project.all_attachments().len(), 2);
    }

    #[test]
    fn demo_fence_task_has_history() {
        let board = demo_board().unwrap();
        let fence = &board.project().tasks[0];

        let progress = fence.progress();
        assert_eq!((progress.completed, progress.total), (1, 2));
        assert_eq!(fence.thread.len(), 1); // the "completed" narration
        assert_eq!(fence.media_attachments().len(), 1);
        assert_eq!(fence.document_attachments().len(), 1);
    }

    #[test]
    fn demo_inbound_messages_are_not_from_current_user() {
        let board = demo_board().unwrap();
        assert!(board
            .project()
            .thread
            .messages
            .iter()
            .all(|m| !m.is_from_current_user));
    }
}
