//! Atomic file writes.
//!
//! Profiles and the clipboard fallback file are written by writing a sibling
//! temporary file (`.{filename}.tmp`), syncing it, then renaming it over the
//! target. A reader never observes a half-written profile.
//!
//! Source and destination share a directory, so the rename stays on one
//! filesystem. On crash a stale `.{filename}.tmp` may be left behind.

use crate::error::{AirbrushError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to `path`, creating parent directories as needed.
///
/// ```no_run
/// use airbrush::fs::atomic_write;
/// use std::path::Path;
///
/// atomic_write(Path::new("profile.yaml"), b"text:\n  name_line1: Mia\n")?;
/// # Ok::<(), airbrush::error::AirbrushError>(())
/// ```
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            AirbrushError::IoError(format!(
                "failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content)?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        AirbrushError::IoError(format!("failed to replace '{}': {}", path.display(), e))
    })
}

/// Atomically write a string to `path`.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            AirbrushError::IoError(format!("invalid file path '{}'", target.display()))
        })?;
    let temp_name = format!(".{}.tmp", filename);
    Ok(match target.parent() {
        Some(parent) => parent.join(temp_name),
        None => PathBuf::from(temp_name),
    })
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        AirbrushError::IoError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(path);
            AirbrushError::IoError(format!(
                "failed to write temporary file '{}': {}",
                path.display(),
                e
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("prompt.txt");

        atomic_write(&file_path, b"An airbrushed design").unwrap();

        assert_eq!(
            fs::read_to_string(&file_path).unwrap(),
            "An airbrushed design"
        );
    }

    #[test]
    fn test_atomic_write_replaces_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("profile.yaml");
        fs::write(&file_path, "old").unwrap();

        atomic_write_file(&file_path, "selection:\n  fill_type: gradient\n").unwrap();

        assert_eq!(
            fs::read_to_string(&file_path).unwrap(),
            "selection:\n  fill_type: gradient\n"
        );
        assert!(!temp_dir.path().join(".profile.yaml.tmp").exists());
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("profiles").join("mia.yaml");

        atomic_write(&file_path, b"{}").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "{}");
    }

    #[test]
    fn test_temp_path_is_hidden_sibling() {
        let temp = temp_path_for(Path::new("/some/path/profile.yaml")).unwrap();
        assert_eq!(temp, Path::new("/some/path/.profile.yaml.tmp"));
    }
}
