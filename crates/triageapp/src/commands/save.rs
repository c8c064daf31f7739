use crate::commands::{CmdMessage, CmdResult, display_name};
use crate::error::{Result, TriageError};
use crate::record::TaskRecord;
use crate::store::TaskStore;
use crate::task::Task;
use std::path::Path;

/// Saves `task` to its own record path.
pub fn run<S: TaskStore>(store: &mut S, task: &Task) -> Result<CmdResult> {
    let path = task
        .record_path()
        .ok_or_else(|| TriageError::Api("Task has never been saved; pick a file to save it to".into()))?
        .to_path_buf();
    write(store, task, &path)
}

/// Saves `task` to `path`, which becomes its record path from now on.
pub fn run_as<S: TaskStore>(store: &mut S, task: &mut Task, path: &Path) -> Result<CmdResult> {
    let path = std::path::absolute(path)?;
    let result = write(store, task, &path)?;
    task.set_record_path(path);
    Ok(result)
}

fn write<S: TaskStore>(store: &mut S, task: &Task, path: &Path) -> Result<CmdResult> {
    store.save(path, &TaskRecord::from_task(task))?;
    Ok(CmdResult::default()
        .with_paths(vec![path.to_path_buf()])
        .with_message(CmdMessage::success(format!("Saved {}", display_name(path)))))
}
