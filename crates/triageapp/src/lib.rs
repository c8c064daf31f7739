//! # Triage Architecture
//!
//! Triage is a **UI-agnostic media triage library**: walk a pile of images and videos one at
//! a time and route each into a destination folder, rename it, mark it favorite or trash it,
//! with undo, and pick the session back up later even if files moved in the meantime. The
//! `triage` binary is one client of it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (crates/triage)                                        │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session (loaded task + unsaved flag)            │
//! │  - Dispatches to commands with configured collaborators     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic, returns CmdResult                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (task.rs, sequence/, categories.rs, record.rs, ...)   │
//! │  - Traversal engine and persistence round-trip              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - TaskStore trait: FileStore (YAML), InMemoryStore (tests) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No Terminal Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the process.
//! Diagnostics go through `tracing`; what the user should see comes back as
//! [`CmdMessage`](commands::CmdMessage)s.
//!
//! ## Single-threaded
//!
//! One task, one current file, synchronous filesystem calls. Nothing here is `Send`-bounded
//! or locked.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade and session
//! - [`commands`]: Business logic for each operation
//! - [`task`]: The task entity and traversal protocol
//! - [`sequence`]: Pending queue and reviewed stack
//! - [`categories`]: The category registry
//! - [`record`]: Durable task records and reconciliation
//! - [`store`]: Record persistence
//! - [`model`]: Items, media kinds, categories
//! - [`crawler`], [`metadata`], [`naming`], [`favorites`], [`trash`], [`fsops`]: Filesystem
//!   collaborators
//! - [`config`], [`init`]: Configuration and wiring
//! - [`error`]: Error types

pub mod api;
pub mod categories;
pub mod commands;
pub mod config;
pub mod crawler;
pub mod error;
pub mod favorites;
pub mod fsops;
pub mod init;
pub mod matching;
pub mod metadata;
pub mod model;
pub mod naming;
pub mod record;
pub mod sequence;
pub mod store;
pub mod task;
pub mod trash;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
