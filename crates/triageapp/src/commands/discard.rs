use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::task::Task;
use crate::trash;
use std::path::Path;

/// Moves the current file to `trash_dir` and drops it from the task for good.
pub fn run(task: &mut Task, trash_dir: &Path) -> Result<CmdResult> {
    match trash::trash_current(task, trash_dir)? {
        Some((item, Some(trashed))) => Ok(CmdResult::default()
            .with_affected_items(vec![trashed])
            .with_message(CmdMessage::success(format!(
                "Trashed {}",
                item.file_name()
            )))
            .modified()),
        Some((item, None)) => Ok(CmdResult::default()
            .with_message(CmdMessage::warning(format!(
                "{} was already gone from disk; dropped it from the task",
                item.file_name()
            )))
            .modified()),
        None => Ok(CmdResult::default().with_message(CmdMessage::info("Nothing to trash"))),
    }
}
