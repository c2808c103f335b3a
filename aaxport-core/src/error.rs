//! Error types for the conversion pipeline.

use std::process::ExitStatus;
use thiserror::Error;

/// Custom error types for aaxport
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Required external tool not found: {0}")]
    DependencyNotFound(String),

    #[error("Failed to start {tool}: {source}")]
    CommandStart {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} exited with {status}: {stderr}")]
    CommandFailed {
        tool: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Malformed probe output: {0}")]
    ProbeParse(String),

    #[error("Tagging error: {0}")]
    Tag(#[from] lofty::error::LoftyError),

    #[error("Invalid path: {0}")]
    PathError(String),
}

/// Result type for aaxport operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Builds a `CommandStart` error for an external tool that could not be spawned.
pub(crate) fn command_start_error(tool: impl Into<String>, source: std::io::Error) -> CoreError {
    CoreError::CommandStart {
        tool: tool.into(),
        source,
    }
}

/// Builds a `CommandFailed` error from a non-zero exit of an external tool.
pub(crate) fn command_failed_error(
    tool: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed {
        tool: tool.into(),
        status,
        stderr: stderr.into(),
    }
}
