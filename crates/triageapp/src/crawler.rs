//! Directory crawling filtered by an extension allow-list.

use crate::config::{ExtensionGroups, normalize_ext};
use crate::error::{Result, TriageError};
use rand::seq::SliceRandom;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Default)]
pub struct CrawlOptions {
    /// Descend into sub-directories. Otherwise only the root's direct children are listed.
    pub recursive: bool,
    pub shuffle: bool,
    /// Ignore the allow-list and return every file.
    pub all_files: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Crawler {
    allowed: Vec<String>,
}

impl Crawler {
    pub fn new<S: AsRef<str>>(allowed: &[S]) -> Self {
        let mut crawler = Self::default();
        crawler.add_allowed(allowed);
        crawler
    }

    /// Crawler accepting every image and video extension.
    pub fn for_media(groups: &ExtensionGroups) -> Self {
        Self::new(&groups.all())
    }

    pub fn is_allowed(&self, path: &Path) -> bool {
        path.extension()
            .map(|e| self.allowed.contains(&normalize_ext(&e.to_string_lossy())))
            .unwrap_or(false)
    }

    fn add_allowed<S: AsRef<str>>(&mut self, extensions: &[S]) {
        for ext in extensions {
            let ext = normalize_ext(ext.as_ref());
            if !self.allowed.contains(&ext) {
                self.allowed.push(ext);
            }
        }
    }

    /// Files under `root`, sorted by path unless shuffled.
    pub fn crawl(&self, root: &Path, options: &CrawlOptions) -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            return Err(TriageError::Api(format!(
                "Not a directory: {}",
                root.display()
            )));
        }

        let mut walker = WalkDir::new(root).min_depth(1).sort_by_file_name();
        if !options.recursive {
            walker = walker.max_depth(1);
        }

        let mut files: Vec<PathBuf> = walker
            .into_iter()
            .filter_map(|e| match e {
                Ok(entry) => Some(entry),
                Err(err) => {
                    tracing::warn!(error = %err, "skipping unreadable entry");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| options.all_files || self.is_allowed(path))
            .collect();

        if options.shuffle {
            files.shuffle(&mut rand::thread_rng());
        }

        tracing::debug!(root = %root.display(), count = files.len(), "crawled");
        Ok(files)
    }
}
