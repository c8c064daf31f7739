use crate::commands::{CmdMessage, CmdResult};
use crate::config::{ExtensionGroups, normalize_ext};
use crate::crawler::{CrawlOptions, Crawler};
use crate::error::{Result, TriageError};
use crate::task::Task;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    /// Restrict the crawl to these extensions. Empty means every image and video extension.
    pub extensions: Vec<String>,
    pub recursive: bool,
    pub shuffle: bool,
}

/// Crawls `root` into a fresh task. The task has no record path until it is saved.
pub fn run(
    root: &Path,
    options: &CreateOptions,
    groups: &ExtensionGroups,
) -> Result<(Task, CmdResult)> {
    let root = std::path::absolute(root)?;

    let crawler = if options.extensions.is_empty() {
        Crawler::for_media(groups)
    } else {
        let known = groups.all();
        if let Some(unknown) = options
            .extensions
            .iter()
            .map(|e| normalize_ext(e))
            .find(|e| !known.contains(e))
        {
            return Err(TriageError::Api(format!(
                "{} is neither an image nor a video extension",
                unknown
            )));
        }
        Crawler::new(&options.extensions)
    };

    let files = crawler.crawl(
        &root,
        &CrawlOptions {
            recursive: options.recursive,
            shuffle: options.shuffle,
            all_files: false,
        },
    )?;

    let count = files.len();
    let task = Task::from_paths(files, groups, Some(root.clone()))?;
    tracing::info!(root = %root.display(), count, "task created");

    let mut result = CmdResult::default().modified();
    if count == 0 {
        result.add_message(CmdMessage::warning(format!(
            "No media files found in {}",
            root.display()
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Created task with {} file{} from {}",
            count,
            if count == 1 { "" } else { "s" },
            root.display()
        )));
    }
    Ok((task, result))
}
