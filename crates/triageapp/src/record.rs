//! # Task Records
//!
//! A [`TaskRecord`] is the durable form of a [`Task`]: paths only, no probed metadata and no
//! decode state. It is what the [`TaskStore`](crate::store::TaskStore) reads and writes.
//!
//! ```yaml
//! custom_categories:
//! - name: Cats
//!   path: /photos/cats
//! files:            # pending, front first
//! - /photos/inbox/b.jpg
//! reviewed_files:   # bottom of the stack first
//! - /photos/cats/a.jpg
//! init_file_count: 2
//! ```
//!
//! All four keys are required; `init_file_count` may be `null`.
//!
//! ## Reconciliation
//!
//! Files get moved and deleted between sessions. [`TaskRecord::into_task`] keeps every path
//! that still exists, in recorded order, and drops the rest. Categories are kept only while
//! their directory exists. Drops are logged and counted in the [`ReconcileReport`], never
//! treated as errors. A surviving path whose extension is neither an image nor a video
//! extension *is* an error: the record cannot be turned back into items.
//!
//! `init_file_count` is restored verbatim even when items were dropped, so the percentage
//! complete may no longer reach 100.

use crate::categories::CategoryRegistry;
use crate::config::ExtensionGroups;
use crate::error::Result;
use crate::model::{Category, Item};
use crate::sequence::{PendingQueue, ReviewedStack};
use crate::task::Task;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub custom_categories: Vec<Category>,
    pub files: Vec<PathBuf>,
    pub reviewed_files: Vec<PathBuf>,
    // Present-but-nullable: a missing key is a malformed record.
    #[serde(deserialize_with = "Option::deserialize")]
    pub init_file_count: Option<usize>,
}

/// What reconciliation dropped while loading a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileReport {
    pub dropped_pending: Vec<PathBuf>,
    pub dropped_reviewed: Vec<PathBuf>,
    pub dropped_categories: Vec<Category>,
}

impl ReconcileReport {
    pub fn dropped_count(&self) -> usize {
        self.dropped_pending.len() + self.dropped_reviewed.len() + self.dropped_categories.len()
    }

    pub fn is_clean(&self) -> bool {
        self.dropped_count() == 0
    }
}

impl TaskRecord {
    pub fn from_task(task: &Task) -> Self {
        Self {
            custom_categories: task.categories().iter().cloned().collect(),
            files: task
                .pending()
                .iter()
                .map(|item| item.path().to_path_buf())
                .collect(),
            reviewed_files: task
                .reviewed()
                .iter()
                .map(|item| item.path().to_path_buf())
                .collect(),
            init_file_count: task.init_file_count(),
        }
    }

    /// Rebuilds a task from this record, reconciling against the filesystem.
    /// `origin` becomes the task's record path.
    pub fn into_task(
        self,
        groups: &ExtensionGroups,
        origin: impl Into<PathBuf>,
    ) -> Result<(Task, ReconcileReport)> {
        let mut report = ReconcileReport::default();

        let (files, dropped) = keep_existing(self.files);
        for path in &dropped {
            tracing::warn!(path = %path.display(), "pending file no longer exists, dropping");
        }
        report.dropped_pending = dropped;

        let (reviewed_files, dropped) = keep_existing(self.reviewed_files);
        for path in &dropped {
            tracing::warn!(path = %path.display(), "reviewed file no longer exists, dropping");
        }
        report.dropped_reviewed = dropped;

        let (categories, dropped): (Vec<Category>, Vec<Category>) = self
            .custom_categories
            .into_iter()
            .partition(|c| c.path.is_dir());
        for category in &dropped {
            tracing::warn!(
                name = %category.name,
                path = %category.path.display(),
                "category directory no longer exists, dropping"
            );
        }
        report.dropped_categories = dropped;

        let pending: PendingQueue<Item> = classify(files, groups)?.into_iter().collect();
        let reviewed: ReviewedStack<Item> =
            classify(reviewed_files, groups)?.into_iter().collect();
        let registry: CategoryRegistry = categories.into_iter().collect();

        let mut task = Task::from_parts(pending, reviewed, registry, self.init_file_count);
        task.set_record_path(origin);

        Ok((task, report))
    }
}

fn keep_existing(paths: Vec<PathBuf>) -> (Vec<PathBuf>, Vec<PathBuf>) {
    paths.into_iter().partition(|p| Path::new(p).exists())
}

fn classify(paths: Vec<PathBuf>, groups: &ExtensionGroups) -> Result<Vec<Item>> {
    paths
        .into_iter()
        .map(|path| {
            let kind = groups.classify(&path)?;
            Ok(Item::new(path, kind))
        })
        .collect()
}
