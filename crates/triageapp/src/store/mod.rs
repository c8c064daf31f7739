//! # Storage Layer
//!
//! The [`TaskStore`] trait reads and writes [`TaskRecord`]s keyed by path. It knows nothing
//! about reconciliation: stale paths inside a record are the record's business
//! ([`TaskRecord::into_task`](crate::record::TaskRecord::into_task)), not the store's.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: YAML files on disk (`.yaml` / `.yml`), written atomically.
//! - [`memory::InMemoryStore`]: a map of records, for testing command logic without touching
//!   the task file. Media files still live on a real filesystem.

use crate::error::Result;
use crate::record::TaskRecord;
use std::path::Path;

pub mod fs;
pub mod memory;

/// Abstract interface for task record persistence.
pub trait TaskStore {
    /// Reads the record at `path`. A missing record or a record missing any key is an error.
    fn load(&self, path: &Path) -> Result<TaskRecord>;

    /// Writes `record` to `path`, replacing any previous content.
    /// MUST be atomic: a crash leaves either the old or the new record.
    fn save(&mut self, path: &Path, record: &TaskRecord) -> Result<()>;

    fn exists(&self, path: &Path) -> bool;
}
