//! Core stitching engine module

use std::path::PathBuf;
use std::time::Duration;

use crate::adapters::StitchSettings;
use crate::domain::model::NormalizationProfile;

pub mod copy;
pub mod reencode;
pub mod stitcher;
pub mod workspace;

pub use copy::ConcatCommand;
pub use reencode::NormalizeCommand;
pub use stitcher::VideoStitcher;
pub use workspace::Workspace;

/// Ceiling for a single tool invocation
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Stitching engine configuration
#[derive(Debug, Clone, PartialEq)]
pub struct StitchOptions {
    /// Processing tool executable
    pub ffmpeg_path: PathBuf,
    /// Probing tool executable
    pub ffprobe_path: PathBuf,
    /// Per-invocation timeout
    pub timeout: Duration,
    /// Canonical encoding for normalized segments
    pub profile: NormalizationProfile,
}

impl Default for StitchOptions {
    fn default() -> Self {
        Self {
            ffmpeg_path: PathBuf::from("ffmpeg"),
            ffprobe_path: PathBuf::from("ffprobe"),
            timeout: DEFAULT_TIMEOUT,
            profile: NormalizationProfile::default(),
        }
    }
}

impl From<&StitchSettings> for StitchOptions {
    fn from(settings: &StitchSettings) -> Self {
        Self {
            ffmpeg_path: settings.ffmpeg_path.clone(),
            ffprobe_path: settings.ffprobe_path.clone(),
            timeout: settings.timeout(),
            profile: settings.normalize.clone(),
        }
    }
}

/// Stitching phases, logged as the pipeline advances
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StitchPhase {
    /// Checking the processing tool
    CheckingTool,
    /// Probing and validating inputs
    Validating,
    /// Re-encoding inputs
    Normalizing,
    /// Writing the concat manifest
    WritingManifest,
    /// Joining segments
    Concatenating,
    /// Removing intermediates
    CleaningUp,
}
