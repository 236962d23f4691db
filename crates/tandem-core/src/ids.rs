//! Branded entity IDs.
//!
//! Every entity gets its own newtype over a prefixed UUID v7 string
//! (`task_{uuid}`, `usr_{uuid}`, ...). The prefix makes IDs self-describing
//! in logs and serialized payloads; the newtype keeps a `TaskId` from being
//! passed where a `SubtaskId` is expected.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! branded_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Mint a fresh ID: `{prefix}_{uuid-v7}`.
            #[must_use]
            pub fn new() -> Self {
                Self(format!(concat!($prefix, "_{}"), Uuid::now_v7()))
            }

            /// Wrap an existing raw ID string (fixtures, deserialized data).
            pub fn from_raw(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            /// The raw ID string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

branded_id!(
    /// Identity of a user/member.
    UserId,
    "usr"
);
branded_id!(
    /// Identity of a project.
    ProjectId,
    "proj"
);
branded_id!(
    /// Identity of a task.
    TaskId,
    "task"
);
branded_id!(
    /// Identity of a subtask (checklist item).
    SubtaskId,
    "sub"
);
branded_id!(
    /// Identity of an attachment.
    AttachmentId,
    "att"
);
branded_id!(
    /// Identity of a chat message.
    MessageId,
    "msg"
);

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
