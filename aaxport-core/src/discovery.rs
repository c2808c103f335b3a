//! File discovery for finding AAX audiobooks to process.
//!
//! Scans the top level of the input directory for .aax files
//! (case-insensitive). Subdirectories are not searched.

use crate::error::CoreResult;
use std::path::{Path, PathBuf};

/// Finds AAX files eligible for processing in the specified directory.
///
/// Returns an empty vector when no files are found; the caller decides
/// whether that is worth reporting. Results are sorted by path so batch
/// order is deterministic.
pub fn find_aax_files(input_dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let read_dir = std::fs::read_dir(input_dir)?;
    let mut files: Vec<PathBuf> = read_dir
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();

            if !path.is_file() {
                return None;
            }

            path.extension()
                .and_then(|ext| ext.to_str())
                .filter(|ext_str| ext_str.eq_ignore_ascii_case("aax"))
                .map(|_| path.clone())
        })
        .collect();

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::tempdir;

    #[test]
    fn finds_only_top_level_aax_files() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("book1.aax")).unwrap();
        File::create(dir.path().join("book2.AAX")).unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();
        File::create(dir.path().join("cover.jpg")).unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        File::create(dir.path().join("nested").join("book3.aax")).unwrap();

        let files = find_aax_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["book1.aax", "book2.AAX"]);
    }

    #[test]
    fn empty_directory_yields_empty_list() {
        let dir = tempdir().unwrap();
        assert!(find_aax_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_an_error() {
        assert!(find_aax_files(Path::new("/surely/does/not/exist")).is_err());
    }
}
