use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::metadata::{self, MediaProbe};
use crate::task::Task;
use serde::Serialize;
use std::path::PathBuf;

/// Snapshot of a task's progress.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskStatus {
    pub remaining: usize,
    pub reviewed: usize,
    pub init_file_count: Option<usize>,
    pub percent_complete: Option<f64>,
    pub current: Option<PathBuf>,
    pub last_reviewed: Option<PathBuf>,
    pub record_path: Option<PathBuf>,
    pub source_root: Option<PathBuf>,
    pub category_count: usize,
}

impl TaskStatus {
    pub fn of(task: &Task) -> Self {
        Self {
            remaining: task.size(),
            reviewed: task.reviewed_size(),
            init_file_count: task.init_file_count(),
            percent_complete: task.percent_complete(),
            current: task.current().map(|i| i.path().to_path_buf()),
            last_reviewed: task.last_reviewed().map(|i| i.path().to_path_buf()),
            record_path: task.record_path().map(|p| p.to_path_buf()),
            source_root: task.source_root().map(|p| p.to_path_buf()),
            category_count: task.categories().len(),
        }
    }
}

pub fn run(task: &Task) -> CmdResult {
    CmdResult {
        status: Some(TaskStatus::of(task)),
        ..Default::default()
    }
}

/// Details of the current item, probing it on first use.
pub fn show(task: &mut Task, probe: &dyn MediaProbe) -> Result<CmdResult> {
    let Some(item) = task.current_mut() else {
        return Ok(CmdResult::default().with_message(CmdMessage::info("Nothing left to review")));
    };
    let info = metadata::describe(item, probe)?;
    Ok(CmdResult {
        affected_items: vec![info.path.clone()],
        file_info: Some(info),
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::ImageHeaderProbe;
    use crate::model::Dimensions;
    use crate::test_utils::TestEnv;

    #[test]
    fn status_tracks_progress() {
        let env = TestEnv::new();
        let mut task = env.task(&["a.jpg", "b.jpg", "c.mp4", "d.png"]);
        task.advance();

        let status = run(&task).status.unwrap();

        assert_eq!(status.remaining, 3);
        assert_eq!(status.reviewed, 1);
        assert_eq!(status.init_file_count, Some(4));
        assert_eq!(status.percent_complete, Some(25.0));
        assert_eq!(status.current, Some(env.path("media/b.jpg")));
        assert_eq!(status.last_reviewed, Some(env.path("media/a.jpg")));
        assert_eq!(status.source_root, Some(env.path("media")));
        assert_eq!(status.record_path, None);
    }

    #[test]
    fn show_probes_current_image() {
        let env = TestEnv::new();
        let mut task = env.task(&["d.png"]);

        let result = show(&mut task, &ImageHeaderProbe).unwrap();

        let info = result.file_info.unwrap();
        assert_eq!(info.name, "d.png");
        assert_eq!(
            info.dimensions,
            Some(Dimensions {
                width: 1,
                height: 1
            })
        );
        assert!(task.current().unwrap().probed().is_some());
    }

    #[test]
    fn show_on_exhausted_task_is_informational() {
        let env = TestEnv::new();
        let mut task = env.task(&["a.jpg"]);
        task.advance();
        let result = show(&mut task, &ImageHeaderProbe).unwrap();
        assert!(result.file_info.is_none());
        assert_eq!(result.messages.len(), 1);
    }
}
