// Domain models - Core types and data structures

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};


/// Codec name used when the probe omits `codec_name`
pub const UNKNOWN_CODEC: &str = "unknown";

/// Frame size of a video stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Attributes of the first video stream of an input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub codec: String,
    pub width: u32,
    pub height: u32,
}

impl VideoMetadata {
    pub fn new(codec: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            codec: codec.into(),
            width,
            height,
        }
    }

    /// Frame size as a comparable value
    pub fn resolution(&self) -> Resolution {
        Resolution::new(self.width, self.height)
    }
}

impl fmt::Display for VideoMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.codec, self.resolution())
    }
}

/// Canonical encoding every input is converted to before concatenation
///
/// Stream-copy concatenation only works when all segments share codec
/// parameters, so every field here ends up identical across segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationProfile {
    /// Target width in pixels
    pub width: u32,
    /// Target height in pixels
    pub height: u32,
    /// Output frame rate
    pub frame_rate: u32,
    /// Output pixel format
    pub pixel_format: String,
    /// Encoder passed to `-c:v`
    pub video_codec: String,
    /// Encoder preset
    pub preset: String,
    /// Constant Rate Factor (0-51)
    pub crf: u8,
}

impl Default for NormalizationProfile {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            frame_rate: 24,
            pixel_format: "yuv420p".to_string(),
            video_codec: "libx264".to_string(),
            preset: "ultrafast".to_string(),
            crf: 28,
        }
    }
}

impl NormalizationProfile {
    /// Filter chain: aspect-preserving scale, centered pad, square pixels,
    /// fixed frame rate and pixel format.
    pub fn video_filter(&self) -> String {
        let (w, h) = (self.width, self.height);
        format!(
            "scale={w}:{h}:force_original_aspect_ratio=decrease,\
             pad={w}:{h}:(ow-iw)/2:(oh-ih)/2,setsar=1,fps={fps},format={pix}",
            fps = self.frame_rate,
            pix = self.pixel_format,
        )
    }

    pub fn resolution(&self) -> Resolution {
        Resolution::new(self.width, self.height)
    }
}

/// What to stitch and where to put it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StitchRequest {
    /// Inputs in final playback order
    pub inputs: Vec<PathBuf>,
    /// Destination of the concatenated video
    pub output: PathBuf,
    /// Caller-owned working directory; a temporary one is used when absent
    pub work_dir: Option<PathBuf>,
}

impl StitchRequest {
    pub fn new<I, P>(inputs: I, output: impl Into<PathBuf>) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            output: output.into(),
            work_dir: None,
        }
    }

    /// Use a caller-owned working directory
    pub fn with_work_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.work_dir = Some(dir.into());
        self
    }

    pub fn output(&self) -> &Path {
        &self.output
    }
}

/// Summary of a finished stitch job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StitchReport {
    pub output: PathBuf,
    pub inputs: Vec<PathBuf>,
    pub metadata: Vec<VideoMetadata>,
    pub segments: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl StitchReport {
    /// Wall-clock time spent on the job
    pub fn elapsed(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}
