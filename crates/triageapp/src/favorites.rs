//! Collecting files carrying the favorite mark.
//!
//! Any file whose path contains the mark counts, whatever its extension, and the mark may sit
//! in a directory name as well as in the file name.

use crate::crawler::{CrawlOptions, Crawler};
use crate::error::{Result, TriageError};
use crate::naming;
use std::fs;
use std::path::{Path, PathBuf};

pub fn collect(root: &Path, mark: &str) -> Result<Vec<PathBuf>> {
    let files = Crawler::default().crawl(
        root,
        &CrawlOptions {
            recursive: true,
            shuffle: false,
            all_files: true,
        },
    )?;

    Ok(files
        .into_iter()
        .filter(|p| naming::is_marked(&p.to_string_lossy(), mark))
        .collect())
}

/// Copies `files` into `dest`, or into `dest/<name of each file's parent>` with
/// `create_subdirs`. Existing copies are overwritten. Returns the written paths.
pub fn copy_into(files: &[PathBuf], dest: &Path, create_subdirs: bool) -> Result<Vec<PathBuf>> {
    if !dest.is_dir() {
        return Err(TriageError::Api(format!(
            "Destination is not a directory: {}",
            dest.display()
        )));
    }

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let Some(name) = file.file_name() else {
            continue;
        };

        let dir = if create_subdirs {
            let sub = file
                .parent()
                .and_then(|p| p.file_name())
                .map(|n| dest.join(n))
                .unwrap_or_else(|| dest.to_path_buf());
            fs::create_dir_all(&sub)?;
            sub
        } else {
            dest.to_path_buf()
        };

        let target = dir.join(name);
        fs::copy(file, &target)?;
        tracing::debug!(from = %file.display(), to = %target.display(), "copied favorite");
        written.push(target);
    }
    Ok(written)
}
