use crate::commands::{CmdMessage, CmdResult, display_name};
use crate::error::{Result, TriageError};
use crate::model::Category;
use crate::task::{MoveOutcome, Task};

/// Moves the current item into the category called exactly `name`, then advances.
///
/// The name must identify one destination. The same `{name, path}` pair registered twice
/// still counts as one; one name bound to different paths is ambiguous.
pub fn run(task: &mut Task, name: &str) -> Result<CmdResult> {
    let category = resolve(task, name)?;

    if task.is_exhausted() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("Nothing left to move")));
    }

    match task.relocate_current(&category)? {
        MoveOutcome::Moved { to, .. } => {
            task.advance();
            Ok(CmdResult::default()
                .with_affected_items(vec![to.clone()])
                .with_message(CmdMessage::success(format!(
                    "Moved {} to {}",
                    display_name(&to),
                    category.name
                )))
                .modified())
        }
        MoveOutcome::Conflict { existing } => Ok(CmdResult::default().with_message(
            CmdMessage::warning(format!(
                "{} already exists in {}; nothing was moved",
                display_name(&existing),
                category.path.display()
            )),
        )),
        MoveOutcome::Missing { path } => Ok(CmdResult::default().with_message(
            CmdMessage::warning(format!(
                "{} is no longer on disk; nothing was moved",
                display_name(&path)
            )),
        )),
        MoveOutcome::Rejected { reason } => {
            Ok(CmdResult::default().with_message(CmdMessage::warning(reason)))
        }
        MoveOutcome::Skipped => {
            Ok(CmdResult::default().with_message(CmdMessage::info("Nothing to move")))
        }
    }
}

fn resolve(task: &Task, name: &str) -> Result<Category> {
    let found = task.categories().find_by_name(name);
    let Some(first) = found.first() else {
        return Err(TriageError::Api(format!("No category named '{}'", name)));
    };
    if found.iter().any(|c| c.path != first.path) {
        return Err(TriageError::Api(format!(
            "Category name '{}' points to {} different directories",
            name,
            found.len()
        )));
    }
    Ok((*first).clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::test_utils::TestEnv;
    use std::fs;

    #[test]
    fn moves_and_advances() {
        let env = TestEnv::new();
        let cats = env.dir("cats");
        let mut task = env.task(&["a.jpg", "b.jpg"]);
        task.add_categories([Category::new("Cats", &cats)]);

        let result = run(&mut task, "Cats").unwrap();

        assert!(result.modified);
        assert_eq!(result.affected_items, vec![cats.join("a.jpg")]);
        assert!(cats.join("a.jpg").exists());
        assert_eq!(task.current().unwrap().file_name(), "b.jpg");
        assert_eq!(task.last_reviewed().unwrap().path(), cats.join("a.jpg"));
    }

    #[test]
    fn conflict_is_a_warning_and_changes_nothing() {
        let env = TestEnv::new();
        let cats = env.dir("cats");
        fs::write(cats.join("a.jpg"), b"other").unwrap();
        let mut task = env.task(&["a.jpg", "b.jpg"]);
        task.add_categories([Category::new("Cats", &cats)]);

        let result = run(&mut task, "Cats").unwrap();

        assert!(!result.modified);
        assert!(result.has_level(MessageLevel::Warning));
        assert_eq!(task.current().unwrap().path(), env.path("media/a.jpg"));
        assert_eq!(task.reviewed_size(), 0);
        assert_eq!(fs::read(cats.join("a.jpg")).unwrap(), b"other");
    }

    #[test]
    fn vanished_file_warns_and_stays_current() {
        let env = TestEnv::new();
        let cats = env.dir("cats");
        let mut task = env.task(&["a.jpg", "b.jpg"]);
        task.add_categories([Category::new("Cats", &cats)]);
        fs::remove_file(env.path("media/a.jpg")).unwrap();

        let result = run(&mut task, "Cats").unwrap();

        assert!(!result.modified);
        assert!(result.has_level(MessageLevel::Warning));
        assert_eq!(task.current().unwrap().file_name(), "a.jpg");
        assert_eq!(task.reviewed_size(), 0);
    }

    #[test]
    fn unknown_and_ambiguous_names_are_errors() {
        let env = TestEnv::new();
        let mut task = env.task(&["a.jpg"]);
        task.add_categories([
            Category::new("Pets", env.dir("cats")),
            Category::new("Pets", env.dir("dogs")),
        ]);

        assert!(run(&mut task, "Birds").is_err());
        assert!(run(&mut task, "Pets").is_err());
        assert!(run(&mut task, "pets").is_err());
        assert!(env.path("media/a.jpg").exists());
    }

    #[test]
    fn duplicate_pair_is_not_ambiguous() {
        let env = TestEnv::new();
        let cats = env.dir("cats");
        let mut task = env.task(&["a.jpg"]);
        task.add_categories([Category::new("Cats", &cats), Category::new("Cats", &cats)]);

        run(&mut task, "Cats").unwrap();
        assert!(cats.join("a.jpg").exists());
    }

    #[test]
    fn exhausted_task_is_a_no_op() {
        let env = TestEnv::new();
        let cats = env.dir("cats");
        let mut task = env.task(&["a.jpg"]);
        task.add_categories([Category::new("Cats", &cats)]);
        task.advance();

        let result = run(&mut task, "Cats").unwrap();
        assert!(!result.modified);
        assert!(!cats.join("a.jpg").exists());
    }
}
