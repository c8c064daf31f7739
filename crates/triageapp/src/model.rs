//! # Domain Model
//!
//! - [`Item`]: one media file under review. Identity is the current path: two items are the
//!   same item iff their paths are equal. Renames and moves rewrite the path of the existing
//!   item instead of minting a new one.
//! - [`MediaKind`] / [`Media`]: the closed set of file kinds. Kind-specific behavior is a
//!   `match` at the few places that care (metadata probing, decode cursor handling).
//! - [`Category`]: a named destination directory.
//!
//! ## Video Decode Cursor
//!
//! A video item may hold one open decode handle ([`VideoCursor`]). Platforms refuse to move or
//! rename a file that is still open, so every filesystem mutation on an item goes through
//! [`Item::release`] first. The handle is re-acquired lazily on the next frame request.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Image => write!(f, "image"),
            MediaKind::Video => write!(f, "video"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Decode position of an open video stream. `None` means no handle is held.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoCursor {
    frame: Option<u64>,
}

impl VideoCursor {
    pub fn is_open(&self) -> bool {
        self.frame.is_some()
    }

    /// Opens the handle if needed and returns the index of the frame to show next.
    /// Reaching `frame_count` rewinds to the first frame.
    pub fn next_frame(&mut self, frame_count: Option<u64>) -> u64 {
        let next = match self.frame {
            None => 0,
            Some(current) => current + 1,
        };
        let next = match frame_count {
            Some(total) if total > 0 && next >= total => 0,
            _ => next,
        };
        self.frame = Some(next);
        next
    }

    /// Rewinds an open stream. No-op when released.
    pub fn replay(&mut self) {
        if self.frame.is_some() {
            self.frame = Some(0);
        }
    }

    pub fn release(&mut self) {
        self.frame = None;
    }
}

/// Kind-specific state of an item.
#[derive(Debug, Clone, PartialEq)]
pub enum Media {
    Image,
    Video { cursor: VideoCursor },
}

impl Media {
    pub fn kind(&self) -> MediaKind {
        match self {
            Media::Image => MediaKind::Image,
            Media::Video { .. } => MediaKind::Video,
        }
    }
}

impl From<MediaKind> for Media {
    fn from(kind: MediaKind) -> Self {
        match kind {
            MediaKind::Image => Media::Image,
            MediaKind::Video => Media::Video {
                cursor: VideoCursor::default(),
            },
        }
    }
}

/// Metadata obtained from a probe, cached until the item's path changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Probed {
    pub dimensions: Option<Dimensions>,
    pub duration: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct Item {
    path: PathBuf,
    media: Media,
    probed: Option<Probed>,
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for Item {}

impl Item {
    pub fn new(path: impl Into<PathBuf>, kind: MediaKind) -> Self {
        Self {
            path: path.into(),
            media: kind.into(),
            probed: None,
        }
    }

    pub fn image(path: impl Into<PathBuf>) -> Self {
        Self::new(path, MediaKind::Image)
    }

    pub fn video(path: impl Into<PathBuf>) -> Self {
        Self::new(path, MediaKind::Video)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> MediaKind {
        self.media.kind()
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// File name without its extension.
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Extension including the leading dot, or an empty string.
    pub fn extension(&self) -> String {
        self.path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default()
    }

    pub fn dirname(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Rewrites the path in place after the file was moved or renamed on disk.
    pub fn set_path(&mut self, new_path: impl Into<PathBuf>) {
        self.release();
        self.path = new_path.into();
        self.probed = None;
    }

    /// Closes the decode handle of a video item. Harmless for images.
    pub fn release(&mut self) {
        if let Media::Video { cursor } = &mut self.media {
            cursor.release();
        }
    }

    pub fn cursor_mut(&mut self) -> Option<&mut VideoCursor> {
        match &mut self.media {
            Media::Image => None,
            Media::Video { cursor } => Some(cursor),
        }
    }

    pub fn probed(&self) -> Option<&Probed> {
        self.probed.as_ref()
    }

    pub fn set_probed(&mut self, probed: Probed) {
        self.probed = Some(probed);
    }
}

/// A named destination directory items can be relocated into.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub path: PathBuf,
}

impl Category {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}
