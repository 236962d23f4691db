//! # tandem-engine
//!
//! The collaboration API over the Tandem entity graph — the layer a UI (or a
//! request handler) calls to mutate and query a project.
//!
//! - [`board::Board`] wraps one [`tandem_model::Project`] plus the acting
//!   user and exposes every mutation and derived query: task and subtask
//!   CRUD, assignee and membership changes, attachments, and messaging.
//!   All mutations go through `&mut self`, so the borrow checker enforces
//!   the single-writer-per-aggregate discipline within a thread.
//! - [`composer::Composer`] holds the one staged quote or task/subtask
//!   reference for the next outgoing message (one-shot, mutually exclusive).
//! - [`hub::Hub`] is the multi-project registry: one coarse-grained lock per
//!   board, for concurrent callers.
//! - [`seed`] provides the demo data set the app boots with.
//!
//! Invalid input never panics and never half-applies: operations either
//! return the applied value or a [`tandem_core::errors::CollabError`]
//! naming the reason, leaving state untouched.

#![deny(unsafe_code)]

pub mod board;
pub mod composer;
pub mod hub;
pub mod messaging;
pub mod seed;

pub use board::{Board, NewSubtask, NewTask, ThreadKind, is_admin};
pub use composer::{Composer, Staged};
pub use hub::Hub;
