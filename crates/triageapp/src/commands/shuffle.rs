use crate::commands::{CmdMessage, CmdResult};
use crate::task::Task;
use rand::Rng;

pub fn run(task: &mut Task) -> CmdResult {
    with_rng(task, &mut rand::thread_rng())
}

pub fn with_rng<R: Rng + ?Sized>(task: &mut Task, rng: &mut R) -> CmdResult {
    if task.size() < 2 {
        return CmdResult::default().with_message(CmdMessage::info("Nothing to shuffle"));
    }
    task.shuffle_pending(rng);
    CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Shuffled {} pending files",
            task.size()
        )))
        .modified()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestEnv;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn shuffles_pending_only() {
        let env = TestEnv::new();
        let mut task = env.task(&["a.jpg", "b.jpg", "c.jpg", "d.jpg", "e.jpg"]);
        task.advance();

        let result = with_rng(&mut task, &mut StdRng::seed_from_u64(7));

        assert!(result.modified);
        assert_eq!(task.size(), 4);
        assert_eq!(task.last_reviewed().unwrap().file_name(), "a.jpg");
        let mut names: Vec<String> = task.pending().iter().map(|i| i.file_name()).collect();
        names.sort();
        assert_eq!(names, vec!["b.jpg", "c.jpg", "d.jpg", "e.jpg"]);
    }

    #[test]
    fn single_item_is_not_shuffled() {
        let env = TestEnv::new();
        let mut task = env.task(&["a.jpg"]);
        assert!(!run(&mut task).modified);
    }
}
