//! # tandem-core
//!
//! Foundation types, errors, branded IDs, and utilities for the Tandem
//! collaboration engine.
//!
//! This crate provides the shared vocabulary the other Tandem crates depend on:
//!
//! - **Branded IDs**: [`ids::UserId`], [`ids::TaskId`], [`ids::MessageId`] and
//!   friends as newtypes over prefixed UUID v7 strings
//! - **Errors**: [`errors::CollabError`] taxonomy via `thiserror` — every
//!   rejected mutation reports *why* instead of silently doing nothing
//! - **Text**: [`text::trimmed_non_empty`] validation helper and UTF-8–safe
//!   truncation for log previews
//! - **Logging**: [`logging::init`] for `tracing` subscriber setup
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by `tandem-model` and `tandem-engine`.

#![deny(unsafe_code)]

pub mod errors;
pub mod ids;
pub mod logging;
pub mod text;
