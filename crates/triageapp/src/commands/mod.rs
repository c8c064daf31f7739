//! # Command Layer
//!
//! This module contains the **business logic** of triage. Each command lives in its own
//! submodule as plain functions over a [`Task`](crate::task::Task), a
//! [`TaskStore`](crate::store::TaskStore) or both.
//!
//! ## What Commands Do NOT Do
//!
//! - **Terminal I/O**: no stdout or stderr, no formatting
//! - **Argument parsing**: that's the CLI layer's job
//! - **Session bookkeeping**: whether a task is loaded, and whether it has unsaved changes,
//!   is tracked by the API facade. Commands report `modified` and the facade records it.
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings:
//! - `affected_items`: paths of items the command touched, after the change
//! - `listed_categories`: categories to display
//! - `paths`: other file paths (copied favorites, the saved record)
//! - `status` / `file_info`: snapshots for `status` and `show`
//! - `messages`: structured messages with levels
//!
//! Soft failures (a name conflict, nothing to do) are warning or info messages on an `Ok`
//! result. `Err` is reserved for things the user must fix: unknown category names, missing
//! directories, unreadable task files.
//!
//! ## Testing Strategy
//!
//! Command tests use [`InMemoryStore`](crate::store::memory::InMemoryStore) for the task record
//! and `tempfile` directories for the media files, since moving files is the point.
//!
//! ## Command Modules
//!
//! - [`create`]: Crawl a directory into a new task
//! - [`open`]: Load and reconcile a task record
//! - [`save`]: Persist a task record
//! - [`navigate`]: Advance and undo
//! - [`relocate`]: Move the current item into a category
//! - [`discard`]: Trash the current item
//! - [`rename`]: Rename, random rename and favorite toggling
//! - [`shuffle`]: Shuffle the pending queue
//! - [`categories`]: Manage the category registry
//! - [`status`]: Progress snapshot and current-item details
//! - [`favorites`]: Collect marked files into a directory

use crate::config::TriageConfig;
use crate::metadata::FileInfo;
use crate::model::Category;
use serde::Serialize;
use std::path::PathBuf;

pub mod categories;
pub mod create;
pub mod discard;
pub mod favorites;
pub mod navigate;
pub mod open;
pub mod relocate;
pub mod rename;
pub mod save;
pub mod shuffle;
pub mod status;

pub use status::TaskStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_items: Vec<PathBuf>,
    pub listed_categories: Vec<Category>,
    pub paths: Vec<PathBuf>,
    pub status: Option<TaskStatus>,
    pub file_info: Option<FileInfo>,
    pub config: Option<TriageConfig>,
    pub messages: Vec<CmdMessage>,
    /// The task changed and should be saved.
    pub modified: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_items(mut self, items: Vec<PathBuf>) -> Self {
        self.affected_items = items;
        self
    }

    pub fn with_listed_categories(mut self, categories: Vec<Category>) -> Self {
        self.listed_categories = categories;
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    pub fn modified(mut self) -> Self {
        self.modified = true;
        self
    }

    pub fn has_level(&self, level: MessageLevel) -> bool {
        self.messages.iter().any(|m| m.level == level)
    }
}

/// The result for any task command issued while no task is loaded.
pub fn no_task() -> CmdResult {
    CmdResult::default().with_message(CmdMessage::info("No task loaded"))
}

fn display_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
