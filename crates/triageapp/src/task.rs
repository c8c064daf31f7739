//! # Task Entity
//!
//! A [`Task`] is one triage session over a collection of media files. It owns:
//!
//! - a [`PendingQueue`] whose front is the **current item**,
//! - a [`ReviewedStack`] whose top is the **most recently reviewed** item,
//! - a [`CategoryRegistry`] of destinations,
//! - bookkeeping: source root, record path and the item count captured at creation.
//!
//! Every item lives in exactly one of the two containers; items move between them by value.
//!
//! ## Traversal Protocol
//!
//! ```text
//!            advance()
//!   pending ───────────▶ reviewed
//!   [front]              [top]
//!           ◀───────────
//!              undo()    (priority insert at the front)
//! ```
//!
//! - `advance(); undo();` restores both containers exactly.
//! - [`Task::discard_current`] advances and then forgets the item, so it never comes back
//!   under undo.
//! - [`Task::relocate_current`] and [`Task::rename_current`] change the current item's path in
//!   place. The item stays pending; front ends call `advance()` afterwards.
//!
//! ## Conflicts
//!
//! Moving or renaming onto a name that already exists is a soft failure
//! ([`MoveOutcome::Conflict`]): nothing on disk or in memory changes. So is acting on a file
//! that vanished from disk mid-session ([`MoveOutcome::Missing`]) and asking for a name that
//! cannot be used ([`MoveOutcome::Rejected`]).

use crate::categories::CategoryRegistry;
use crate::config::ExtensionGroups;
use crate::error::{Result, TriageError};
use crate::fsops;
use crate::model::{Category, Item};
use crate::naming;
use crate::sequence::{PendingQueue, ReviewedStack};
use rand::Rng;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Result of a filesystem move applied to the current item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MoveOutcome {
    Moved { from: PathBuf, to: PathBuf },
    /// A file already exists at the destination.
    Conflict { existing: PathBuf },
    /// The item's file is no longer on disk.
    Missing { path: PathBuf },
    /// The requested name cannot be used.
    Rejected { reason: String },
    /// No current item, or the move would be a no-op.
    Skipped,
}

#[derive(Debug, Clone, Default)]
pub struct Task {
    pending: PendingQueue<Item>,
    reviewed: ReviewedStack<Item>,
    categories: CategoryRegistry,
    source_root: Option<PathBuf>,
    record_path: Option<PathBuf>,
    init_file_count: Option<usize>,
}

impl Task {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh task over `items`, in order. The item count is captured here and never
    /// recomputed.
    pub fn from_items(items: Vec<Item>, source_root: Option<PathBuf>) -> Self {
        let init_file_count = Some(items.len());
        Self {
            pending: items.into_iter().collect(),
            source_root,
            init_file_count,
            ..Default::default()
        }
    }

    /// Classifies each path by extension. Paths of unknown kind are an error.
    pub fn from_paths(
        paths: Vec<PathBuf>,
        groups: &ExtensionGroups,
        source_root: Option<PathBuf>,
    ) -> Result<Self> {
        let items = paths
            .into_iter()
            .map(|path| {
                let kind = groups.classify(&path)?;
                Ok(Item::new(path, kind))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_items(items, source_root))
    }

    pub(crate) fn from_parts(
        pending: PendingQueue<Item>,
        reviewed: ReviewedStack<Item>,
        categories: CategoryRegistry,
        init_file_count: Option<usize>,
    ) -> Self {
        Self {
            pending,
            reviewed,
            categories,
            init_file_count,
            ..Default::default()
        }
    }

    // --- Traversal ---

    /// Moves the current item onto the reviewed stack and returns it.
    pub fn advance(&mut self) -> Option<&Item> {
        let item = self.pending.dequeue()?;
        tracing::debug!(path = %item.path().display(), "advance");
        self.reviewed.push(item);
        self.reviewed.top()
    }

    /// Puts the most recently reviewed item back at the front of the queue and returns it.
    pub fn undo(&mut self) -> Option<&Item> {
        let item = self.reviewed.pop()?;
        tracing::debug!(path = %item.path().display(), "undo");
        self.pending.enqueue_with_priority(item);
        self.pending.peek()
    }

    pub fn current(&self) -> Option<&Item> {
        self.pending.peek()
    }

    pub fn current_mut(&mut self) -> Option<&mut Item> {
        self.pending.peek_mut()
    }

    pub fn last_reviewed(&self) -> Option<&Item> {
        self.reviewed.top()
    }

    pub fn is_exhausted(&self) -> bool {
        self.pending.is_empty()
    }

    /// Advances, then drops the item for good.
    pub fn discard_current(&mut self) -> Option<Item> {
        self.advance()?;
        let item = self.reviewed.pop()?;
        tracing::debug!(path = %item.path().display(), "discarded");
        Some(item)
    }

    pub fn shuffle_pending<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.pending.shuffle(rng);
    }

    // --- Filesystem mutations on the current item ---

    /// Moves the current file into `category.path`, keeping its name.
    pub fn relocate_current(&mut self, category: &Category) -> Result<MoveOutcome> {
        let Some(item) = self.pending.peek_mut() else {
            return Ok(MoveOutcome::Skipped);
        };

        if !category.path.is_dir() {
            return Err(TriageError::Api(format!(
                "Category directory does not exist: {}",
                category.path.display()
            )));
        }

        let target = category.path.join(item.file_name());
        move_item(item, target)
    }

    /// Renames the current file inside its directory. `new_stem` excludes the extension,
    /// which is kept. An empty stem is a no-op.
    pub fn rename_current(&mut self, new_stem: &str) -> Result<MoveOutcome> {
        let new_stem = new_stem.trim();
        let Some(item) = self.pending.peek_mut() else {
            return Ok(MoveOutcome::Skipped);
        };
        if new_stem.is_empty() {
            return Ok(MoveOutcome::Skipped);
        }
        if new_stem.chars().any(std::path::is_separator) {
            return Ok(MoveOutcome::Rejected {
                reason: format!("'{}' contains a path separator", new_stem),
            });
        }

        let target = item
            .dirname()
            .join(format!("{}{}", new_stem, item.extension()));
        if target == item.path() {
            return Ok(MoveOutcome::Skipped);
        }
        move_item(item, target)
    }

    /// Renames the current file to `len` random uppercase letters and digits.
    pub fn rename_current_random(&mut self, len: usize) -> Result<MoveOutcome> {
        let name = naming::random_name(&mut rand::thread_rng(), len);
        self.rename_current(&name)
    }

    /// Adds the favorite `mark` to the current file's name, or strips it if present.
    pub fn toggle_favorite(&mut self, mark: &str) -> Result<MoveOutcome> {
        let Some(item) = self.current() else {
            return Ok(MoveOutcome::Skipped);
        };
        let stem = naming::toggle_mark(&item.stem(), mark);
        if stem.trim().is_empty() {
            return Ok(MoveOutcome::Rejected {
                reason: format!("{} has no name besides the favorite mark", item.file_name()),
            });
        }
        self.rename_current(&stem)
    }

    // --- Categories ---

    pub fn add_categories<I>(&mut self, categories: I)
    where
        I: IntoIterator<Item = Category>,
    {
        self.categories.add(categories);
    }

    pub fn remove_category(&mut self, category: &Category) -> Option<Category> {
        self.categories.remove(category)
    }

    pub fn clear_categories(&mut self) {
        self.categories.clear();
    }

    pub fn list_categories(&self, sorted_by_name: bool) -> Vec<&Category> {
        self.categories.list(sorted_by_name)
    }

    pub fn categories(&self) -> &CategoryRegistry {
        &self.categories
    }

    // --- Accessors ---

    pub fn pending(&self) -> &PendingQueue<Item> {
        &self.pending
    }

    pub fn reviewed(&self) -> &ReviewedStack<Item> {
        &self.reviewed
    }

    pub fn size(&self) -> usize {
        self.pending.len()
    }

    pub fn reviewed_size(&self) -> usize {
        self.reviewed.len()
    }

    pub fn source_root(&self) -> Option<&Path> {
        self.source_root.as_deref()
    }

    pub fn record_path(&self) -> Option<&Path> {
        self.record_path.as_deref()
    }

    pub fn set_record_path(&mut self, path: impl Into<PathBuf>) {
        self.record_path = Some(path.into());
    }

    pub fn init_file_count(&self) -> Option<usize> {
        self.init_file_count
    }

    /// Share of the original items no longer pending, in percent with two decimals.
    /// `None` without a usable original count.
    pub fn percent_complete(&self) -> Option<f64> {
        let init = self.init_file_count.filter(|&n| n > 0)?;
        let done = init as f64 - self.pending.len() as f64;
        Some((done / init as f64 * 10_000.0).round() / 100.0)
    }
}

/// Releases any decode handle and moves the item's file to `target`, rewriting its path on
/// success. Leaves everything untouched when the source is gone, on conflict or on error.
fn move_item(item: &mut Item, target: PathBuf) -> Result<MoveOutcome> {
    if !item.path().exists() {
        tracing::warn!(path = %item.path().display(), "file vanished from disk");
        return Ok(MoveOutcome::Missing {
            path: item.path().to_path_buf(),
        });
    }
    if target.exists() {
        tracing::debug!(target = %target.display(), "move conflict");
        return Ok(MoveOutcome::Conflict { existing: target });
    }

    item.release();
    let from = item.path().to_path_buf();
    fsops::move_file(&from, &target)?;
    item.set_path(target.clone());
    tracing::debug!(from = %from.display(), to = %target.display(), "moved");

    Ok(MoveOutcome::Moved { from, to: target })
}
