//! # Configuration
//!
//! Configuration is loaded with [`confique`], layering sources in priority order:
//!
//! 1. **Environment variables**: `TRIAGE_RANDOM_NAME_LENGTH`, `TRIAGE_FAVORITE_MARK`,
//!    `TRIAGE_TRASH_DIR`.
//! 2. **Explicit file**: passed with `--config` on the command line. Must exist.
//! 3. **User config**: `triage.toml` in the OS config directory (via `directories`).
//! 4. **Compiled defaults**: `#[config(default = ...)]` below.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `image_extensions` | `.jpg .jpeg .png .gif .bmp .webp .tif .tiff` | Files classified as images |
//! | `video_extensions` | `.mp4 .mov .avi .mkv .webm .m4v .wmv` | Files classified as videos |
//! | `random_name_length` | `10` | Length of names produced by `rename --random` |
//! | `favorite_mark` | `[★]` | Marker prefixed to favorite file names |
//! | `trash_dir` | `<data dir>/trash` | Where trashed files are moved |
//!
//! The two extension groups double as the classification table used when a task file is
//! loaded: a path whose extension is in neither group cannot be turned back into an item.

use crate::error::{Result, TriageError};
use crate::model::MediaKind;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "triage.toml";

fn default_image_ext() -> Vec<String> {
    [".jpg", ".jpeg", ".png", ".gif", ".bmp", ".webp", ".tif", ".tiff"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_video_ext() -> Vec<String> {
    [".mp4", ".mov", ".avi", ".mkv", ".webm", ".m4v", ".wmv"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Configuration for triage, stored in `triage.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TriageConfig {
    /// Extensions classified as images (e.g. ".jpg", ".png").
    #[config(default = [".jpg", ".jpeg", ".png", ".gif", ".bmp", ".webp", ".tif", ".tiff"])]
    pub image_extensions: Vec<String>,

    /// Extensions classified as videos (e.g. ".mp4", ".mov").
    #[config(default = [".mp4", ".mov", ".avi", ".mkv", ".webm", ".m4v", ".wmv"])]
    pub video_extensions: Vec<String>,

    /// Length of generated random file names.
    #[config(default = 10, env = "TRIAGE_RANDOM_NAME_LENGTH")]
    pub random_name_length: usize,

    /// Marker prefixed to the names of favorite files.
    #[config(default = "[★]", env = "TRIAGE_FAVORITE_MARK")]
    pub favorite_mark: String,

    /// Directory trashed files are moved into. Falls back to the data directory.
    #[config(env = "TRIAGE_TRASH_DIR")]
    pub trash_dir: Option<PathBuf>,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            image_extensions: default_image_ext(),
            video_extensions: default_video_ext(),
            random_name_length: 10,
            favorite_mark: "[★]".to_string(),
            trash_dir: None,
        }
    }
}

impl TriageConfig {
    /// Loads the layered configuration. `explicit` must exist when given; the file in
    /// `config_dir` is optional.
    pub fn load(explicit: Option<&Path>, config_dir: Option<&Path>) -> Result<Self> {
        let mut builder = TriageConfig::builder().env();

        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(TriageError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            builder = builder.file(path);
        }
        if let Some(dir) = config_dir {
            builder = builder.file(dir.join(CONFIG_FILENAME));
        }

        let config = builder.load()?;
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    pub fn extension_groups(&self) -> ExtensionGroups {
        ExtensionGroups::new(&self.image_extensions, &self.video_extensions)
    }

    /// Trash directory, defaulting to `<data_dir>/trash`.
    pub fn trash_dir(&self, data_dir: &Path) -> PathBuf {
        self.trash_dir
            .clone()
            .unwrap_or_else(|| data_dir.join("trash"))
    }
}

/// Normalizes an extension to lower case with a leading dot.
pub fn normalize_ext(ext: &str) -> String {
    let ext = ext.trim().to_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{}", ext)
    }
}

/// Classification table mapping file extensions to a [`MediaKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionGroups {
    image: Vec<String>,
    video: Vec<String>,
}

impl ExtensionGroups {
    pub fn new<S: AsRef<str>>(image: &[S], video: &[S]) -> Self {
        Self {
            image: image.iter().map(|e| normalize_ext(e.as_ref())).collect(),
            video: video.iter().map(|e| normalize_ext(e.as_ref())).collect(),
        }
    }

    pub fn kind_of(&self, path: &Path) -> Option<MediaKind> {
        let ext = normalize_ext(&path.extension()?.to_string_lossy());
        if self.image.contains(&ext) {
            Some(MediaKind::Image)
        } else if self.video.contains(&ext) {
            Some(MediaKind::Video)
        } else {
            None
        }
    }

    /// Like [`kind_of`](Self::kind_of), but an unknown extension is an error.
    pub fn classify(&self, path: &Path) -> Result<MediaKind> {
        self.kind_of(path).ok_or_else(|| TriageError::UnknownKind {
            path: path.to_path_buf(),
        })
    }

    /// Every known extension, images first.
    pub fn all(&self) -> Vec<String> {
        self.image.iter().chain(self.video.iter()).cloned().collect()
    }
}

impl Default for ExtensionGroups {
    fn default() -> Self {
        TriageConfig::default().extension_groups()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = TriageConfig::default();
        assert_eq!(config.random_name_length, 10);
        assert_eq!(config.favorite_mark, "[★]");
        assert!(config.image_extensions.contains(&".jpg".to_string()));
        assert!(config.video_extensions.contains(&".mp4".to_string()));
    }

    #[test]
    fn test_normalize_ext() {
        assert_eq!(normalize_ext("JPG"), ".jpg");
        assert_eq!(normalize_ext(".Mp4"), ".mp4");
        assert_eq!(normalize_ext(" png "), ".png");
    }

    #[test]
    fn test_classify_by_extension() {
        let groups = ExtensionGroups::new(&[".jpg"], &["mp4"]);
        assert_eq!(
            groups.classify(Path::new("/a/b.JPG")).unwrap(),
            MediaKind::Image
        );
        assert_eq!(
            groups.classify(Path::new("/a/b.mp4")).unwrap(),
            MediaKind::Video
        );
        assert!(matches!(
            groups.classify(Path::new("/a/notes.txt")),
            Err(TriageError::UnknownKind { .. })
        ));
        assert!(groups.kind_of(Path::new("/a/no_extension")).is_none());
    }

    #[test]
    fn test_trash_dir_fallback() {
        let config = TriageConfig::default();
        assert_eq!(
            config.trash_dir(Path::new("/data")),
            PathBuf::from("/data/trash")
        );

        let config = TriageConfig {
            trash_dir: Some(PathBuf::from("/bin-here")),
            ..Default::default()
        };
        assert_eq!(
            config.trash_dir(Path::new("/data")),
            PathBuf::from("/bin-here")
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "image_extensions = [\".heic\"]\nrandom_name_length = 4\n",
        )
        .unwrap();

        let config = TriageConfig::load(None, Some(dir.path())).unwrap();
        assert_eq!(config.image_extensions, vec![".heic"]);
        assert_eq!(config.random_name_length, 4);
        assert_eq!(config.video_extensions, default_video_ext());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = TriageConfig::load(Some(&dir.path().join("nope.toml")), None);
        assert!(matches!(result, Err(TriageError::Config(_))));
    }
}
