use crate::commands::{CmdMessage, CmdResult, display_name};
use crate::error::Result;
use crate::task::{MoveOutcome, Task};

pub fn run(task: &mut Task, new_stem: &str) -> Result<CmdResult> {
    let outcome = task.rename_current(new_stem)?;
    Ok(report(outcome, "Renamed"))
}

pub fn random(task: &mut Task, len: usize) -> Result<CmdResult> {
    let outcome = task.rename_current_random(len)?;
    Ok(report(outcome, "Renamed"))
}

pub fn toggle_favorite(task: &mut Task, mark: &str) -> Result<CmdResult> {
    let outcome = task.toggle_favorite(mark)?;
    Ok(report(outcome, "Favorite toggled"))
}

fn report(outcome: MoveOutcome, verb: &str) -> CmdResult {
    match outcome {
        MoveOutcome::Moved { from, to } => CmdResult::default()
            .with_affected_items(vec![to.clone()])
            .with_message(CmdMessage::success(format!(
                "{}: {} -> {}",
                verb,
                display_name(&from),
                display_name(&to)
            )))
            .modified(),
        MoveOutcome::Conflict { existing } => {
            CmdResult::default().with_message(CmdMessage::warning(format!(
                "{} already exists; name unchanged",
                display_name(&existing)
            )))
        }
        MoveOutcome::Missing { path } => {
            CmdResult::default().with_message(CmdMessage::warning(format!(
                "{} is no longer on disk; name unchanged",
                display_name(&path)
            )))
        }
        MoveOutcome::Rejected { reason } => CmdResult::default()
            .with_message(CmdMessage::warning(format!("{}; name unchanged", reason))),
        MoveOutcome::Skipped => {
            CmdResult::default().with_message(CmdMessage::info("Name unchanged"))
        }
    }
}
