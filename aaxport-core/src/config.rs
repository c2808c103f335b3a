//! Process-wide configuration for a conversion run.
//!
//! The configuration is an explicit immutable value constructed once by the
//! caller and passed by reference into each pipeline stage. No stage captures
//! it implicitly, so per-file processing holds no shared mutable state.

use crate::error::{CoreError, CoreResult};
use std::path::{Path, PathBuf};

/// Default MP3 bitrate in kbps.
pub const DEFAULT_BITRATE_KBPS: u32 = 64;

/// Author credits with more than this many comma-separated names collapse to
/// "Various". Inherited from the original tool; configurable because the
/// threshold is a heuristic, not a product requirement.
pub const DEFAULT_AUTHOR_COLLAPSE_THRESHOLD: usize = 4;

/// Configuration for one conversion run.
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Audible activation bytes used to decrypt the AAX container.
    pub activation_bytes: String,
    /// Target bitrate for the whole-book MP3 render, in kbps.
    pub bitrate_kbps: u32,
    /// Author count above which credits collapse to "Various".
    pub author_collapse_threshold: usize,
    /// Directory scanned for `*.aax` source files.
    pub input_dir: PathBuf,
    /// Directory receiving the `{author}/{title}` output tree.
    pub output_dir: PathBuf,
    /// Directory where processed source files are moved.
    pub storage_dir: PathBuf,
    /// Scratch directory for intermediate files, purged at run start.
    pub working_dir: PathBuf,
}

impl CoreConfig {
    /// Creates a configuration with default bitrate and collapse threshold.
    pub fn new(
        activation_bytes: impl Into<String>,
        input_dir: PathBuf,
        output_dir: PathBuf,
        storage_dir: PathBuf,
        working_dir: PathBuf,
    ) -> Self {
        Self {
            activation_bytes: activation_bytes.into(),
            bitrate_kbps: DEFAULT_BITRATE_KBPS,
            author_collapse_threshold: DEFAULT_AUTHOR_COLLAPSE_THRESHOLD,
            input_dir,
            output_dir,
            storage_dir,
            working_dir,
        }
    }

    /// Checks that all four directories exist before any file is touched.
    ///
    /// A missing directory is a configuration error and aborts the whole run.
    pub fn validate(&self) -> CoreResult<()> {
        check_dir("Input", &self.input_dir)?;
        check_dir("Output", &self.output_dir)?;
        check_dir("Storage", &self.storage_dir)?;
        check_dir("Working", &self.working_dir)?;

        if self.activation_bytes.trim().is_empty() {
            return Err(CoreError::Config(
                "Activation bytes must not be empty".to_string(),
            ));
        }
        if self.bitrate_kbps == 0 {
            return Err(CoreError::Config(
                "Bitrate must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

fn check_dir(label: &str, dir: &Path) -> CoreResult<()> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(CoreError::Config(format!(
            "{} folder does not exist: {}",
            label,
            dir.display()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn config_with_dirs(root: &Path) -> CoreConfig {
        CoreConfig::new(
            "abc123",
            root.join("in"),
            root.join("out"),
            root.join("store"),
            root.join("work"),
        )
    }

    #[test]
    fn validate_accepts_existing_dirs() {
        let dir = tempdir().unwrap();
        let config = config_with_dirs(dir.path());
        for d in [
            &config.input_dir,
            &config.output_dir,
            &config.storage_dir,
            &config.working_dir,
        ] {
            std::fs::create_dir_all(d).unwrap();
        }
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_missing_input_dir() {
        let dir = tempdir().unwrap();
        let config = config_with_dirs(dir.path());
        for d in [&config.output_dir, &config.storage_dir, &config.working_dir] {
            std::fs::create_dir_all(d).unwrap();
        }
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Input folder does not exist"));
    }

    #[test]
    fn validate_rejects_empty_activation_bytes() {
        let dir = tempdir().unwrap();
        let mut config = config_with_dirs(dir.path());
        for d in [
            &config.input_dir,
            &config.output_dir,
            &config.storage_dir,
            &config.working_dir,
        ] {
            std::fs::create_dir_all(d).unwrap();
        }
        config.activation_bytes = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
