use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::favorites;
use std::path::Path;

/// Copies every file under `root` carrying `mark` into `dest`.
pub fn run(root: &Path, dest: &Path, mark: &str, create_subdirs: bool) -> Result<CmdResult> {
    let found = favorites::collect(root, mark)?;
    if found.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "No favorites found in {}",
            root.display()
        ))));
    }

    let written = favorites::copy_into(&found, dest, create_subdirs)?;
    let count = written.len();
    Ok(CmdResult::default()
        .with_paths(written)
        .with_message(CmdMessage::success(format!(
            "Copied {} favorite{} to {}",
            count,
            if count == 1 { "" } else { "s" },
            dest.display()
        ))))
}
