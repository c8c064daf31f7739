use super::TaskStore;
use crate::error::{Result, TriageError};
use crate::record::TaskRecord;
use std::fs;
use std::path::Path;
use uuid::Uuid;

pub const TASK_EXTENSIONS: [&str; 2] = ["yaml", "yml"];

/// Task records as YAML files.
#[derive(Debug, Clone, Default)]
pub struct FileStore;

impl FileStore {
    pub fn new() -> Self {
        Self
    }

    fn check_extension(path: &Path) -> Result<()> {
        let ok = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .is_some_and(|e| TASK_EXTENSIONS.contains(&e.as_str()));
        if ok {
            Ok(())
        } else {
            Err(TriageError::Store(format!(
                "Task files must end in .yaml or .yml: {}",
                path.display()
            )))
        }
    }
}

impl TaskStore for FileStore {
    fn load(&self, path: &Path) -> Result<TaskRecord> {
        Self::check_extension(path)?;
        if !path.is_file() {
            return Err(TriageError::Store(format!(
                "Task file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).map_err(TriageError::Io)?;
        let record: TaskRecord =
            serde_yaml::from_str(&content).map_err(TriageError::Serialization)?;
        tracing::info!(
            path = %path.display(),
            pending = record.files.len(),
            reviewed = record.reviewed_files.len(),
            "task record loaded"
        );
        Ok(record)
    }

    fn save(&mut self, path: &Path, record: &TaskRecord) -> Result<()> {
        Self::check_extension(path)?;
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => std::env::current_dir()?,
        };
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(TriageError::Io)?;
        }

        let content = serde_yaml::to_string(record).map_err(TriageError::Serialization)?;

        // Atomic write: temp file in the same directory, then rename over the target.
        let tmp_file = dir.join(format!(".task-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(TriageError::Io)?;
        fs::rename(&tmp_file, path).map_err(TriageError::Io)?;

        tracing::info!(path = %path.display(), "task record saved");
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}
