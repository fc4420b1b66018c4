// Ports - Interface definitions (contracts)

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::model::VideoMetadata;
use crate::error::StitchResult;

/// Port for media stream probing
#[async_trait]
pub trait ProbePort: Send + Sync {
    /// Probe the first video stream of a file.
    ///
    /// Fails with `ToolUnavailable` when the probe cannot be spawned and
    /// `ProbeFailure` when it errors or reports no video stream.
    async fn probe_video_stream(&self, file_path: &Path) -> StitchResult<VideoMetadata>;
}

/// Port for running the processing tool
#[async_trait]
pub trait ExecutePort: Send + Sync {
    /// Resolve the processing executable, failing with `ToolUnavailable`
    fn locate(&self) -> StitchResult<PathBuf>;

    /// Run the tool with `args`, failing with `CommandFailure` on a
    /// non-zero exit and `Timeout` when `timeout` elapses first.
    async fn run(&self, args: &[String], timeout: Duration) -> StitchResult<()>;
}
