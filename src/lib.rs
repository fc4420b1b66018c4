//! Continuity Stitch Library
//!
//! Stitches video clips into one file by shelling out to `ffmpeg`. Inputs are
//! probed with `ffprobe` and must share codec and resolution; each is then
//! normalized to a canonical encoding and the segments are joined by stream
//! copy. Intermediates live in a job-scoped workspace that is always cleaned
//! up.
//!
//! ```no_run
//! use continuity_stitch::{StitchRequest, VideoStitcher};
//!
//! let request = StitchRequest::new(["intro.mp4", "scene.mp4"], "out/final.mp4");
//! let output = VideoStitcher::new(request).stitch_blocking()?;
//! println!("wrote {}", output.display());
//! # Ok::<(), continuity_stitch::StitchError>(())
//! ```

pub mod adapters;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod engine;
pub mod error;
pub mod output;
pub mod ports;
pub mod probe;
pub mod utils;

// Re-export commonly used types
pub use domain::errors::ValidationError;
pub use domain::model::{
    NormalizationProfile, Resolution, StitchReport, StitchRequest, VideoMetadata,
};
pub use engine::{StitchOptions, VideoStitcher};
pub use error::{StitchError, StitchResult};
pub use probe::VideoValidator;
