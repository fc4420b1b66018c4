//! FFprobe adapter for media file probing
//!
//! Runs `ffprobe` against the first video stream and parses its JSON output.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::process::Command;
use tracing::debug;

use crate::domain::model::{VideoMetadata, UNKNOWN_CODEC};
use crate::error::{StitchError, StitchResult};
use crate::ports::ProbePort;

/// FFprobe JSON output, reduced to the requested entries
#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    #[serde(default)]
    streams: Vec<FfprobeStream>,
}

#[derive(Debug, Deserialize)]
struct FfprobeStream {
    codec_name: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
}

/// FFprobe-based probe adapter
#[derive(Debug, Clone)]
pub struct FFprobeAdapter {
    ffprobe_path: PathBuf,
    timeout: Option<Duration>,
}

impl FFprobeAdapter {
    /// Create new FFprobe adapter
    pub fn new(ffprobe_path: impl Into<PathBuf>) -> Self {
        Self {
            ffprobe_path: ffprobe_path.into(),
            timeout: None,
        }
    }

    /// Bound each probe invocation
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn build_args(file_path: &Path) -> Vec<String> {
        vec![
            "-v".to_string(),
            "error".to_string(),
            "-select_streams".to_string(),
            "v:0".to_string(),
            "-show_entries".to_string(),
            "stream=codec_name,width,height".to_string(),
            "-of".to_string(),
            "json".to_string(),
            file_path.to_string_lossy().to_string(),
        ]
    }

    fn tool_name(&self) -> String {
        self.ffprobe_path.display().to_string()
    }
}

impl Default for FFprobeAdapter {
    fn default() -> Self {
        Self::new("ffprobe")
    }
}

#[async_trait]
impl ProbePort for FFprobeAdapter {
    async fn probe_video_stream(&self, file_path: &Path) -> StitchResult<VideoMetadata> {
        let args = Self::build_args(file_path);
        debug!("Running ffprobe: {} {}", self.tool_name(), args.join(" "));

        let mut cmd = Command::new(&self.ffprobe_path);
        cmd.args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        let child = cmd.output();

        let result = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, child).await.map_err(|_| {
                StitchError::Timeout {
                    command: format!("{} {}", self.tool_name(), args.join(" ")),
                    timeout,
                }
            })?,
            None => child.await,
        };

        let output = result.map_err(|e| match e.kind() {
            ErrorKind::NotFound | ErrorKind::PermissionDenied => {
                StitchError::tool_unavailable(self.tool_name(), e.to_string())
            }
            _ => StitchError::Io(e),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(StitchError::probe_failure(file_path, stderr));
        }

        parse_probe_output(file_path, &output.stdout)
    }
}

/// Turn ffprobe JSON into metadata, tolerating missing fields
fn parse_probe_output(file_path: &Path, stdout: &[u8]) -> StitchResult<VideoMetadata> {
    let probe: FfprobeOutput = serde_json::from_slice(stdout)
        .map_err(|e| StitchError::probe_failure(file_path, format!("invalid ffprobe output: {}", e)))?;

    let stream = probe
        .streams
        .into_iter()
        .next()
        .ok_or_else(|| StitchError::probe_failure(file_path, "No video stream metadata available"))?;

    Ok(VideoMetadata {
        codec: stream.codec_name.unwrap_or_else(|| UNKNOWN_CODEC.to_string()),
        width: stream.width.unwrap_or(0),
        height: stream.height.unwrap_or(0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_args_selects_first_video_stream() {
        let args = FFprobeAdapter::build_args(Path::new("clip.mp4"));
        assert_eq!(
            args,
            vec![
                "-v",
                "error",
                "-select_streams",
                "v:0",
                "-show_entries",
                "stream=codec_name,width,height",
                "-of",
                "json",
                "clip.mp4",
            ]
        );
    }

    #[test]
    fn test_parse_full_stream() {
        let json = br#"{"programs":[],"streams":[{"codec_name":"h264","width":1920,"height":1080}]}"#;
        let meta = parse_probe_output(Path::new("a.mp4"), json).unwrap();
        assert_eq!(meta, VideoMetadata::new("h264", 1920, 1080));
    }

    #[test]
    fn test_parse_partial_stream_uses_sentinels() {
        let json = br#"{"streams":[{"width":640}]}"#;
        let meta = parse_probe_output(Path::new("a.mp4"), json).unwrap();
        assert_eq!(meta, VideoMetadata::new(UNKNOWN_CODEC, 640, 0));
    }

    #[test]
    fn test_parse_without_streams_fails() {
        for json in [&br#"{"streams":[]}"#[..], &b"{}"[..]] {
            let err = parse_probe_output(Path::new("audio.m4a"), json).unwrap_err();
            assert!(matches!(err, StitchError::ProbeFailure { .. }));
            assert!(err.to_string().contains("No video stream"));
        }
    }

    #[test]
    fn test_parse_garbage_fails() {
        let err = parse_probe_output(Path::new("a.mp4"), b"not json").unwrap_err();
        assert!(matches!(err, StitchError::ProbeFailure { .. }));
    }

    #[tokio::test]
    async fn test_missing_binary_is_tool_unavailable() {
        let adapter = FFprobeAdapter::new("/nonexistent/bin/ffprobe-missing");
        let err = adapter
            .probe_video_stream(Path::new("clip.mp4"))
            .await
            .unwrap_err();
        assert!(matches!(err, StitchError::ToolUnavailable { .. }));
    }
}
