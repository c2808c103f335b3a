//! Utility functions for formatting and file operations.

use crate::error::{CoreError, CoreResult};
use std::path::Path;

/// Formats seconds as HH:MM:SS (e.g., 3725.0 -> "01:02:05"). Returns "??:??:??" for invalid inputs.
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    if seconds < 0.0 || !seconds.is_finite() {
        return "??:??:??".to_string();
    }

    let total_seconds = seconds as u64;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Deletes every file directly under `dir`, non-recursively.
///
/// Subdirectories and their contents are left alone. A missing directory is
/// not an error. Returns the number of files removed.
pub fn purge_directory(dir: &Path) -> CoreResult<usize> {
    if !dir.is_dir() {
        return Ok(0);
    }

    let mut removed = 0;
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            std::fs::remove_file(&path)?;
            removed += 1;
        }
    }

    log::debug!("Purged {} file(s) from {}", removed, dir.display());
    Ok(removed)
}

/// Safely extracts the filename from a path as a String.
pub fn get_filename_safe(path: &Path) -> CoreResult<String> {
    Ok(path
        .file_name()
        .ok_or_else(|| {
            CoreError::PathError(format!("Failed to get filename for {}", path.display()))
        })?
        .to_string_lossy()
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::tempdir;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0.0), "00:00:00");
        assert_eq!(format_duration(59.0), "00:00:59");
        assert_eq!(format_duration(3600.0), "01:00:00");
        assert_eq!(format_duration(3725.0), "01:02:05");
        assert_eq!(format_duration(86399.0), "23:59:59");
        assert_eq!(format_duration(59.9), "00:00:59");

        assert_eq!(format_duration(-1.0), "??:??:??");
        assert_eq!(format_duration(f64::NAN), "??:??:??");
        assert_eq!(format_duration(f64::INFINITY), "??:??:??");
    }

    #[test]
    fn purge_removes_files_but_not_subdirectories() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("a.mp3")).unwrap();
        File::create(dir.path().join("b.m3u")).unwrap();
        fs::create_dir(dir.path().join("keep")).unwrap();
        File::create(dir.path().join("keep").join("inner.txt")).unwrap();

        let removed = purge_directory(dir.path()).unwrap();
        assert_eq!(removed, 2);
        assert!(dir.path().join("keep").join("inner.txt").exists());
        assert_eq!(purge_directory(dir.path()).unwrap(), 0);
    }

    #[test]
    fn purge_of_missing_directory_is_a_noop() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert_eq!(purge_directory(&missing).unwrap(), 0);
    }

    #[test]
    fn test_get_filename_safe() {
        assert_eq!(
            get_filename_safe(Path::new("/path/to/book.aax")).unwrap(),
            "book.aax"
        );
        assert!(get_filename_safe(Path::new("/")).is_err());
    }
}
