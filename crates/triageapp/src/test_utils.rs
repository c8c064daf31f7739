use crate::config::ExtensionGroups;
use crate::task::Task;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A valid 1x1 grayscale PNG.
pub fn tiny_png() -> &'static [u8] {
    &[
        0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x00, 0x00, 0x00, 0x00, 0x3a,
        0x7e, 0x9b, 0x55, 0x00, 0x00, 0x00, 0x0a, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9c, 0x63, 0x60,
        0x00, 0x00, 0x00, 0x02, 0x00, 0x01, 0x48, 0xaf, 0xa4, 0x71, 0x00, 0x00, 0x00, 0x00, 0x49,
        0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
    ]
}

/// A temporary directory with helpers for laying out media files.
pub struct TestEnv {
    // Kept so the directory lives as long as the env.
    pub _temp_dir: TempDir,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    /// Creates `rel` (and its parents) with the file name as content. `.png` files get a real
    /// PNG so header probes succeed.
    pub fn touch(&self, rel: &str) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        let is_png = path
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case("png"));
        if is_png {
            fs::write(&path, tiny_png()).expect("failed to write png");
        } else {
            fs::write(&path, rel.as_bytes()).expect("failed to write file");
        }
        path
    }

    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.path(rel);
        fs::create_dir_all(&path).expect("failed to create dir");
        path
    }

    /// A fresh task over newly created files under `media/`, in the given order.
    pub fn task(&self, names: &[&str]) -> Task {
        let paths = names
            .iter()
            .map(|n| self.touch(&format!("media/{}", n)))
            .collect();
        Task::from_paths(paths, &ExtensionGroups::default(), Some(self.path("media")))
            .expect("test media must have known extensions")
    }

    pub fn task_file(&self) -> PathBuf {
        self.path("task.yaml")
    }
}
