use crate::commands::{CmdMessage, CmdResult};
use crate::task::Task;

/// Marks the current item reviewed.
pub fn next(task: &mut Task) -> CmdResult {
    match task.advance() {
        Some(item) => {
            let path = item.path().to_path_buf();
            let mut result = CmdResult::default()
                .with_affected_items(vec![path])
                .modified();
            if task.is_exhausted() {
                result.add_message(CmdMessage::success("All files reviewed"));
            }
            result
        }
        None => CmdResult::default().with_message(CmdMessage::info("No more files to review")),
    }
}

/// Returns the most recently reviewed item to the front of the queue.
pub fn previous(task: &mut Task) -> CmdResult {
    match task.undo() {
        Some(item) => CmdResult::default()
            .with_affected_items(vec![item.path().to_path_buf()])
            .modified(),
        None => CmdResult::default().with_message(CmdMessage::info("Nothing to go back to")),
    }
}
