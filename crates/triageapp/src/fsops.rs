//! Filesystem moves shared by relocation, renaming and trashing.
//!
//! Every move is all-or-nothing from the caller's point of view: either the file ends up at
//! the destination and `Ok` is returned, or it is still at its source.

use crate::error::{Result, TriageError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Moves `from` to `to`, falling back to copy + delete across filesystems.
/// Refuses to overwrite an existing destination.
pub fn move_file(from: &Path, to: &Path) -> Result<()> {
    if to.exists() {
        return Err(TriageError::Api(format!(
            "Destination already exists: {}",
            to.display()
        )));
    }

    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::CrossesDevices => copy_then_remove(from, to),
        Err(e) => Err(TriageError::Io(e)),
    }
}

/// Cross-filesystem move. Whatever step fails, the copy at `to` is removed again so neither
/// a partial file nor a duplicate is left behind.
fn copy_then_remove(from: &Path, to: &Path) -> Result<()> {
    if let Err(e) = fs::copy(from, to) {
        let _ = fs::remove_file(to);
        return Err(TriageError::Io(e));
    }
    if let Err(e) = fs::remove_file(from) {
        let _ = fs::remove_file(to);
        return Err(TriageError::Io(e));
    }
    Ok(())
}

/// `dir/file_name`, or `dir/<stem>-<short uuid><ext>` when that is taken.
pub fn unique_destination(dir: &Path, file_name: &str) -> PathBuf {
    let candidate = dir.join(file_name);
    if !candidate.exists() {
        return candidate;
    }

    let path = Path::new(file_name);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    loop {
        let suffix = Uuid::new_v4().simple().to_string();
        let candidate = dir.join(format!("{}-{}{}", stem, &suffix[..8], ext));
        if !candidate.exists() {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn moves_file() {
        let dir = TempDir::new().unwrap();
        let from = dir.path().join("a.jpg");
        let to = dir.path().join("b.jpg");
        fs::write(&from, b"x").unwrap();

        move_file(&from, &to).unwrap();

        assert!(!from.exists());
        assert_eq!(fs::read(&to).unwrap(), b"x");
    }

    #[test]
    fn refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let from = dir.path().join("a.jpg");
        let to = dir.path().join("b.jpg");
        fs::write(&from, b"new").unwrap();
        fs::write(&to, b"old").unwrap();

        assert!(move_file(&from, &to).is_err());
        assert_eq!(fs::read(&from).unwrap(), b"new");
        assert_eq!(fs::read(&to).unwrap(), b"old");
    }

    #[test]
    fn copy_fallback_moves_file() {
        let dir = TempDir::new().unwrap();
        let from = dir.path().join("a.jpg");
        let to = dir.path().join("b.jpg");
        fs::write(&from, b"x").unwrap();

        copy_then_remove(&from, &to).unwrap();

        assert!(!from.exists());
        assert_eq!(fs::read(&to).unwrap(), b"x");
    }

    #[test]
    fn failed_copy_leaves_nothing_at_destination() {
        let dir = TempDir::new().unwrap();
        // A directory cannot be copied as a file.
        let from = dir.path().join("album.jpg");
        fs::create_dir(&from).unwrap();
        let to = dir.path().join("out.jpg");

        assert!(copy_then_remove(&from, &to).is_err());
        assert!(!to.exists());
        assert!(from.is_dir());

        // A later move onto the same name does not see a conflict.
        let src = dir.path().join("c.jpg");
        fs::write(&src, b"c").unwrap();
        move_file(&src, &to).unwrap();
        assert_eq!(fs::read(&to).unwrap(), b"c");
    }

    #[test]
    fn unique_destination_avoids_collisions() {
        let dir = TempDir::new().unwrap();
        assert_eq!(
            unique_destination(dir.path(), "a.jpg"),
            dir.path().join("a.jpg")
        );

        fs::write(dir.path().join("a.jpg"), b"x").unwrap();
        let alt = unique_destination(dir.path(), "a.jpg");
        assert_ne!(alt, dir.path().join("a.jpg"));
        assert!(alt.file_name().unwrap().to_string_lossy().starts_with("a-"));
        assert_eq!(alt.extension().unwrap(), "jpg");
    }
}
