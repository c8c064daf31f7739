use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TriageError};
use crate::model::Category;
use crate::task::Task;
use std::fs;
use std::path::{Path, PathBuf};

fn existing_dir(path: &Path) -> Result<PathBuf> {
    if !path.is_dir() {
        return Err(TriageError::Api(format!(
            "Not a directory: {}",
            path.display()
        )));
    }
    Ok(std::path::absolute(path)?)
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Registers `path` as a category. A missing or blank name defaults to the directory's own
/// name.
pub fn add(task: &mut Task, name: Option<&str>, path: &Path) -> Result<CmdResult> {
    let path = existing_dir(path)?;
    let name = match name.map(str::trim) {
        Some(n) if !n.is_empty() => n.to_string(),
        _ => dir_name(&path),
    };

    let category = Category::new(name, path);
    task.add_categories([category.clone()]);
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Added category {} -> {}",
            category.name,
            category.path.display()
        )))
        .with_listed_categories(vec![category])
        .modified())
}

/// Replaces the registry with one category per sub-directory of `dir`. Leaves the registry
/// alone when `dir` has none.
pub fn from_dir(task: &mut Task, dir: &Path) -> Result<CmdResult> {
    let dir = existing_dir(dir)?;

    let mut subdirs: Vec<PathBuf> = fs::read_dir(&dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    subdirs.sort();

    if subdirs.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "No sub-directories in {}; categories unchanged",
            dir.display()
        ))));
    }

    let categories: Vec<Category> = subdirs
        .into_iter()
        .map(|p| Category::new(dir_name(&p), p))
        .collect();
    let count = categories.len();

    task.clear_categories();
    task.add_categories(categories.clone());

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Replaced categories with {} from {}",
            count,
            dir.display()
        )))
        .with_listed_categories(categories)
        .modified())
}

/// Removes one category matching both `name` and `path`.
pub fn remove(task: &mut Task, name: &str, path: &Path) -> Result<CmdResult> {
    let path = std::path::absolute(path)?;
    match task.remove_category(&Category::new(name, path.clone())) {
        Some(removed) => Ok(CmdResult::default()
            .with_message(CmdMessage::success(format!("Removed category {}", removed.name)))
            .modified()),
        None => Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "No category {} -> {}",
            name,
            path.display()
        )))),
    }
}

pub fn clear(task: &mut Task) -> CmdResult {
    if task.categories().is_empty() {
        return CmdResult::default().with_message(CmdMessage::info("No categories to clear"));
    }
    let count = task.categories().len();
    task.clear_categories();
    CmdResult::default()
        .with_message(CmdMessage::success(format!("Removed {} categories", count)))
        .modified()
}

/// Name-sorted categories matching `filter` word-by-word.
pub fn list(task: &Task, filter: &str) -> CmdResult {
    let listed: Vec<Category> = task
        .categories()
        .filter(filter)
        .into_iter()
        .cloned()
        .collect();
    CmdResult::default().with_listed_categories(listed)
}
