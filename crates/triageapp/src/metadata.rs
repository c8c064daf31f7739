//! # File Metadata
//!
//! [`describe`] gathers what a front end shows next to the current item: size, timestamps and,
//! for media that can be probed, pixel dimensions and duration.
//!
//! Probing is delegated to a [`MediaProbe`]. The default [`ImageHeaderProbe`] reads image
//! dimensions from the file header with the `image` crate and reports videos as unavailable,
//! since no decoder is linked. Probe results are cached on the [`Item`] and dropped whenever
//! its path changes.

use crate::error::Result;
use crate::model::{Dimensions, Item, MediaKind, Probed};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of dimensions and duration for a media file.
pub trait MediaProbe {
    fn probe(&self, path: &Path, kind: MediaKind) -> Probed;
}

/// Reads image headers; knows nothing about videos.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageHeaderProbe;

impl MediaProbe for ImageHeaderProbe {
    fn probe(&self, path: &Path, kind: MediaKind) -> Probed {
        match kind {
            MediaKind::Image => match image::image_dimensions(path) {
                Ok((width, height)) => Probed {
                    dimensions: Some(Dimensions { width, height }),
                    duration: None,
                },
                Err(err) => {
                    tracing::debug!(path = %path.display(), error = %err, "image probe failed");
                    Probed::default()
                }
            },
            MediaKind::Video => Probed::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileInfo {
    pub path: PathBuf,
    pub name: String,
    pub kind: MediaKind,
    pub size: u64,
    pub last_modified: Option<DateTime<Local>>,
    pub last_opened: Option<DateTime<Local>>,
    pub dimensions: Option<Dimensions>,
    pub duration_secs: Option<u64>,
}

impl FileInfo {
    pub fn last_modified_display(&self) -> Option<String> {
        self.last_modified
            .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn last_opened_display(&self) -> Option<String> {
        self.last_opened.map(|t| t.format(TIMESTAMP_FORMAT).to_string())
    }
}

/// Describes `item`, probing it through `probe` on first use.
pub fn describe(item: &mut Item, probe: &dyn MediaProbe) -> Result<FileInfo> {
    let meta = fs::metadata(item.path())?;

    if item.probed().is_none() {
        let probed = probe.probe(item.path(), item.kind());
        item.set_probed(probed);
    }
    let probed = item.probed().cloned().unwrap_or_default();

    Ok(FileInfo {
        path: item.path().to_path_buf(),
        name: item.file_name(),
        kind: item.kind(),
        size: meta.len(),
        last_modified: meta.modified().ok().map(DateTime::<Local>::from),
        last_opened: meta.accessed().ok().map(DateTime::<Local>::from),
        dimensions: probed.dimensions,
        duration_secs: probed.duration.map(|d| d.as_secs()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::time::Duration;
    use tempfile::TempDir;

    struct CountingProbe {
        calls: Cell<usize>,
    }

    impl MediaProbe for CountingProbe {
        fn probe(&self, _path: &Path, _kind: MediaKind) -> Probed {
            self.calls.set(self.calls.get() + 1);
            Probed {
                dimensions: Some(Dimensions {
                    width: 640,
                    height: 480,
                }),
                duration: Some(Duration::from_secs(12)),
            }
        }
    }

    #[test]
    fn describes_size_and_probe_results() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("clip.mp4");
        fs::write(&path, vec![0u8; 1234]).unwrap();
        let mut item = Item::video(&path);
        let probe = CountingProbe {
            calls: Cell::new(0),
        };

        let info = describe(&mut item, &probe).unwrap();

        assert_eq!(info.name, "clip.mp4");
        assert_eq!(info.size, 1234);
        assert_eq!(info.kind, MediaKind::Video);
        assert_eq!(info.dimensions.unwrap().to_string(), "640x480");
        assert_eq!(info.duration_secs, Some(12));
        assert!(info.last_modified_display().is_some());
    }

    #[test]
    fn probe_runs_once_until_path_changes() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.jpg");
        let b = dir.path().join("b.jpg");
        fs::write(&a, b"x").unwrap();
        fs::write(&b, b"x").unwrap();
        let mut item = Item::image(&a);
        let probe = CountingProbe {
            calls: Cell::new(0),
        };

        describe(&mut item, &probe).unwrap();
        describe(&mut item, &probe).unwrap();
        assert_eq!(probe.calls.get(), 1);

        item.set_path(&b);
        describe(&mut item, &probe).unwrap();
        assert_eq!(probe.calls.get(), 2);
    }

    #[test]
    fn header_probe_reads_png_dimensions() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tiny.png");
        fs::write(&path, crate::test_utils::tiny_png()).unwrap();

        let probed = ImageHeaderProbe.probe(&path, MediaKind::Image);
        assert_eq!(
            probed.dimensions,
            Some(Dimensions {
                width: 1,
                height: 1
            })
        );
    }

    #[test]
    fn header_probe_tolerates_garbage_and_videos() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.jpg");
        fs::write(&path, b"not an image").unwrap();

        assert_eq!(
            ImageHeaderProbe.probe(&path, MediaKind::Image),
            Probed::default()
        );
        assert_eq!(
            ImageHeaderProbe.probe(&path, MediaKind::Video),
            Probed::default()
        );
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let mut item = Item::image("/definitely/not/here.jpg");
        assert!(describe(&mut item, &ImageHeaderProbe).is_err());
    }
}
