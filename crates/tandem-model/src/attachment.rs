//! The [`Attachment`] record: file/photo/document metadata on a task.

use serde::{Deserialize, Serialize};
use tandem_core::ids::{AttachmentId, SubtaskId};

use crate::user::User;

/// What kind of file an attachment holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    /// A photo.
    Image,
    /// A video clip.
    Video,
    /// Anything else (PDF, spreadsheet, ...).
    Document,
}

impl AttachmentKind {
    /// Stable lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Document => "document",
        }
    }

    /// Whether this kind lands in the media grid (images and videos) rather
    /// than the document list.
    #[must_use]
    pub fn is_media(self) -> bool {
        matches!(self, Self::Image | Self::Video)
    }
}

impl std::fmt::Display for AttachmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for a file attached to a task.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Unique ID (prefixed: `att_{uuid}`).
    pub id: AttachmentId,
    /// File kind.
    pub kind: AttachmentKind,
    /// Original file name.
    pub file_name: String,
    /// Size in bytes.
    pub file_size: u64,
    /// Who uploaded the file.
    pub uploaded_by: User,
    /// Subtask this file belongs to, when uploaded from a subtask sheet.
    ///
    /// Weak reference: lookup only, no ownership. Deleting the subtask
    /// leaves this id dangling and the attachment in place.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_subtask_id: Option<SubtaskId>,
}

impl Attachment {
    /// Create an attachment with a fresh ID and no subtask link.
    pub fn new(
        kind: AttachmentKind,
        file_name: impl Into<String>,
        file_size: u64,
        uploaded_by: User,
    ) -> Self {
        Self {
            id: AttachmentId::new(),
            kind,
            file_name: file_name.into(),
            file_size,
            uploaded_by,
            linked_subtask_id: None,
        }
    }

    /// Same, linked to a subtask.
    pub fn for_subtask(
        kind: AttachmentKind,
        file_name: impl Into<String>,
        file_size: u64,
        uploaded_by: User,
        subtask_id: SubtaskId,
    ) -> Self {
        Self {
            linked_subtask_id: Some(subtask_id),
            ..Self::new(kind, file_name, file_size, uploaded_by)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
