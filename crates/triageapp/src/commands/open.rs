use crate::commands::{CmdMessage, CmdResult, display_name};
use crate::config::ExtensionGroups;
use crate::error::Result;
use crate::record::ReconcileReport;
use crate::store::TaskStore;
use crate::task::Task;
use std::path::Path;

/// Loads the record at `path` and reconciles it against the filesystem. A task that lost
/// entries is reported as modified so the next save writes the reconciled state.
pub fn run<S: TaskStore>(
    store: &S,
    path: &Path,
    groups: &ExtensionGroups,
) -> Result<(Task, CmdResult)> {
    let record = store.load(path)?;
    let (task, report) = record.into_task(groups, path)?;

    let mut result = CmdResult::default();
    if !report.is_clean() {
        result.add_message(CmdMessage::warning(describe_drops(&report)));
        result.modified = true;
    }
    result.add_message(CmdMessage::info(format!(
        "Opened {}: {} pending, {} reviewed",
        display_name(path),
        task.size(),
        task.reviewed_size()
    )));
    Ok((task, result))
}

fn describe_drops(report: &ReconcileReport) -> String {
    let files = report.dropped_pending.len() + report.dropped_reviewed.len();
    let categories = report.dropped_categories.len();
    let mut parts = Vec::new();
    if files > 0 {
        parts.push(format!(
            "{} missing file{}",
            files,
            if files == 1 { "" } else { "s" }
        ));
    }
    if categories > 0 {
        parts.push(format!(
            "{} missing categor{}",
            categories,
            if categories == 1 { "y" } else { "ies" }
        ));
    }
    format!("Dropped {}", parts.join(" and "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Category;
    use crate::record::TaskRecord;
    use crate::store::memory::InMemoryStore;
    use crate::test_utils::TestEnv;

    #[test]
    fn opens_clean_record() {
        let env = TestEnv::new();
        let task = env.task(&["a.jpg", "b.jpg"]);
        let store = InMemoryStore::new().with_record(env.task_file(), TaskRecord::from_task(&task));

        let (opened, result) = run(&store, &env.task_file(), &ExtensionGroups::default()).unwrap();

        assert_eq!(opened.size(), 2);
        assert_eq!(opened.record_path(), Some(env.task_file().as_path()));
        assert!(!result.modified);
        assert!(!result.has_level(MessageLevel::Warning));
    }

    #[test]
    fn reports_reconciled_drops() {
        let env = TestEnv::new();
        let task = env.task(&["a.jpg", "b.jpg", "c.mp4"]);
        let mut record = TaskRecord::from_task(&task);
        record
            .custom_categories
            .push(Category::new("Gone", env.path("gone")));
        std::fs::remove_file(env.path("media/b.jpg")).unwrap();
        let store = InMemoryStore::new().with_record(env.task_file(), record);

        let (opened, result) = run(&store, &env.task_file(), &ExtensionGroups::default()).unwrap();

        assert_eq!(opened.size(), 2);
        assert_eq!(opened.init_file_count(), Some(3));
        assert!(result.modified);
        let warning = result
            .messages
            .iter()
            .find(|m| m.level == MessageLevel::Warning)
            .unwrap();
        assert_eq!(warning.content, "Dropped 1 missing file and 1 missing category");
    }

    #[test]
    fn missing_record_is_an_error() {
        let env = TestEnv::new();
        let store = InMemoryStore::new();
        assert!(run(&store, &env.task_file(), &ExtensionGroups::default()).is_err());
    }
}
