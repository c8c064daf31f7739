//! Moving the current item into the trash directory.

use crate::error::Result;
use crate::fsops;
use crate::model::Item;
use crate::task::Task;
use std::fs;
use std::path::{Path, PathBuf};

/// Moves `path` into `trash_dir`, creating the directory if needed. A name already taken in
/// the trash gets a unique suffix. Returns where the file ended up.
pub fn move_to_trash(path: &Path, trash_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(trash_dir)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let target = fsops::unique_destination(trash_dir, &name);
    fsops::move_file(path, &target)?;
    tracing::debug!(from = %path.display(), to = %target.display(), "trashed");
    Ok(target)
}

/// Trashes the current file, then discards the item from the task. Returns the item and
/// where its file went; a file already gone from disk is discarded without a move (`None`).
/// If the move fails the task is left as it was.
pub fn trash_current(
    task: &mut Task,
    trash_dir: &Path,
) -> Result<Option<(Item, Option<PathBuf>)>> {
    let Some(item) = task.current_mut() else {
        return Ok(None);
    };
    item.release();
    let trashed = if item.path().exists() {
        Some(move_to_trash(item.path(), trash_dir)?)
    } else {
        tracing::warn!(path = %item.path().display(), "file vanished from disk; discarding");
        None
    };

    Ok(task.discard_current().map(|item| (item, trashed)))
}
