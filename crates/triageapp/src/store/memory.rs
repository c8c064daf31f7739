use super::TaskStore;
use crate::error::{Result, TriageError};
use crate::record::TaskRecord;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Records kept in a map. Saving clones the record, so later changes to a task do not leak
/// into what was stored.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    records: HashMap<PathBuf, TaskRecord>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, path: impl Into<PathBuf>, record: TaskRecord) -> Self {
        self.records.insert(path.into(), record);
        self
    }

    pub fn get(&self, path: &Path) -> Option<&TaskRecord> {
        self.records.get(path)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl TaskStore for InMemoryStore {
    fn load(&self, path: &Path) -> Result<TaskRecord> {
        self.records
            .get(path)
            .cloned()
            .ok_or_else(|| TriageError::Store(format!("Task not found: {}", path.display())))
    }

    fn save(&mut self, path: &Path, record: &TaskRecord) -> Result<()> {
        self.records.insert(path.to_path_buf(), record.clone());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.records.contains_key(path)
    }
}
