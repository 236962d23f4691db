//! The [`Hub`]: a registry of boards with one coarse lock per aggregate.
//!
//! The data model itself is single-threaded; when boards are shared across
//! threads (a backend rendition of the same API), every mutating operation
//! needs exclusive access to the project it touches for the duration of the
//! call. The hub pins that down structurally: one `Mutex` per board, and
//! all access goes through [`Hub::with_board`] under that lock.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use tandem_core::ids::ProjectId;

use crate::board::Board;

/// Registry of project boards, keyed by project id.
#[derive(Debug, Default)]
pub struct Hub {
    boards: DashMap<ProjectId, Arc<Mutex<Board>>>,
}

impl Hub {
    /// An empty hub.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a board. Returns its project id; an existing board with the
    /// same id is replaced.
    pub fn insert(&self, board: Board) -> ProjectId {
        let id = board.project().id.clone();
        let _ = self.boards.insert(id.clone(), Arc::new(Mutex::new(board)));
        id
    }

    /// Run `f` with exclusive access to the board for `id`.
    ///
    /// Returns `None` when no board is registered under that id. The board's
    /// lock is held for the duration of `f`; nested `with_board` calls on
    /// the same id from the same thread will deadlock, so keep closures to
    /// one aggregate.
    pub fn with_board<R>(&self, id: &ProjectId, f: impl FnOnce(&mut Board) -> R) -> Option<R> {
        let board = self.boards.get(id).map(|entry| Arc::clone(entry.value()))?;
        let mut guard = board.lock();
        Some(f(&mut guard))
    }

    /// Drop the board for `id`. Returns whether one was registered.
    pub fn remove(&self, id: &ProjectId) -> bool {
        self.boards.remove(id).is_some()
    }

    /// Number of registered boards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Whether no boards are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
