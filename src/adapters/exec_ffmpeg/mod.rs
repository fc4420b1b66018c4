//! FFmpeg execution adapter
//!
//! Spawns the processing tool, captures its diagnostics, and enforces the
//! per-invocation timeout.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::{StitchError, StitchResult};
use crate::ports::ExecutePort;

/// FFmpeg-based execution adapter
#[derive(Debug, Clone)]
pub struct FFmpegAdapter {
    ffmpeg_path: PathBuf,
}

impl FFmpegAdapter {
    /// Create new FFmpeg adapter
    pub fn new(ffmpeg_path: impl Into<PathBuf>) -> Self {
        Self {
            ffmpeg_path: ffmpeg_path.into(),
        }
    }

    fn tool_name(&self) -> String {
        self.ffmpeg_path.display().to_string()
    }

    fn render_command(&self, args: &[String]) -> String {
        let mut parts = Vec::with_capacity(args.len() + 1);
        parts.push(self.tool_name());
        parts.extend(args.iter().cloned());
        parts.join(" ")
    }
}

impl Default for FFmpegAdapter {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

#[async_trait]
impl ExecutePort for FFmpegAdapter {
    fn locate(&self) -> StitchResult<PathBuf> {
        which::which(&self.ffmpeg_path)
            .map_err(|e| StitchError::tool_unavailable(self.tool_name(), e.to_string()))
    }

    async fn run(&self, args: &[String], timeout: Duration) -> StitchResult<()> {
        let command = self.render_command(args);
        debug!("Running FFmpeg: {}", command);

        // kill_on_drop reaps the child when the timeout drops the future
        let mut cmd = Command::new(&self.ffmpeg_path);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        let child = cmd.output();

        let output = match tokio::time::timeout(timeout, child).await {
            Ok(result) => result.map_err(|e| match e.kind() {
                ErrorKind::NotFound | ErrorKind::PermissionDenied => {
                    StitchError::tool_unavailable(self.tool_name(), e.to_string())
                }
                _ => StitchError::Io(e),
            })?,
            Err(_) => {
                warn!("FFmpeg timed out after {} seconds, killing process", timeout.as_secs());
                return Err(StitchError::Timeout { command, timeout });
            }
        };

        if output.status.success() {
            Ok(())
        } else {
            Err(StitchError::CommandFailure {
                command,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
                exit_code: output.status.code(),
            })
        }
    }
}
