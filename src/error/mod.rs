//! Error handling module for continuity-stitch

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::domain::errors::ValidationError;

/// Main error type for stitching operations
#[derive(Error, Debug)]
pub enum StitchError {
    /// Nothing to stitch
    #[error("No input videos provided")]
    EmptyInput,

    /// ffmpeg or ffprobe cannot be located or spawned
    #[error("{tool} not available: {message}")]
    ToolUnavailable { tool: String, message: String },

    /// Input file does not exist
    #[error("Video not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// Probe exited non-zero, printed garbage, or found no video stream
    #[error("Unable to probe video metadata for {}: {message}", .path.display())]
    ProbeFailure { path: PathBuf, message: String },

    /// Inputs failed the consistency policy
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Processing tool exited non-zero
    #[error("Command failed: {command}\n{stderr}")]
    CommandFailure {
        command: String,
        stderr: String,
        exit_code: Option<i32>,
    },

    /// Processing tool exceeded the per-invocation ceiling
    #[error("Command timed out after {}s: {command}", .timeout.as_secs())]
    Timeout { command: String, timeout: Duration },

    /// Configuration could not be loaded
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StitchError {
    pub fn tool_unavailable(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ToolUnavailable {
            tool: tool.into(),
            message: message.into(),
        }
    }

    pub fn probe_failure(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ProbeFailure {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// True for codec and resolution mismatches
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type alias for stitching operations
pub type StitchResult<T> = std::result::Result<T, StitchError>;
