//! Interactions with the external media toolchain.
//!
//! This module encapsulates every invocation of ffmpeg and ffprobe. The
//! binaries are opaque collaborators: they are driven through command-line
//! arguments and, for ffprobe, JSON on standard output. All invocations
//! block the caller until the child exits; there are no timeouts.

use crate::error::{command_failed_error, command_start_error, CoreError, CoreResult};
use std::io;
use std::process::{Command, Stdio};

pub mod ffmpeg;
pub mod ffprobe;

pub use ffmpeg::{ChapterCutter, FfmpegTranscoder};
pub use ffprobe::{probe_source, AaxInfo, Chapter, ChapterTags, FormatInfo, FormatTags, Stream};

/// Checks that a required external command is available and executable.
///
/// Runs `<cmd> -version` and discards the output. A missing binary maps to
/// `CoreError::DependencyNotFound`; a binary that exists but cannot start
/// maps to `CoreError::CommandStart`.
pub fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    let result = Command::new(cmd_name)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {cmd_name}");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{cmd_name}' not found.");
            Err(CoreError::DependencyNotFound(cmd_name.to_string()))
        }
        Err(e) => {
            log::error!("Failed to start dependency check command '{cmd_name}': {e}");
            Err(command_start_error(cmd_name, e))
        }
    }
}

/// Runs an external tool to completion, returning its captured stdout.
///
/// Blocks until the child exits. A non-zero exit status becomes a
/// `CommandFailed` error carrying the captured stderr.
pub(crate) fn run_tool(tool: &str, cmd: &mut Command) -> CoreResult<Vec<u8>> {
    log::debug!("Running {tool}: {cmd:?}");

    let output = cmd.output().map_err(|e| command_start_error(tool, e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        log::error!("{tool} failed ({}): {}", output.status, stderr.trim());
        return Err(command_failed_error(tool, output.status, stderr));
    }

    Ok(output.stdout)
}
