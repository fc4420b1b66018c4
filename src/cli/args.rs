//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

/// Tool locations and limits shared by the commands
#[derive(Args, Debug, Clone, Default)]
pub struct ToolArgs {
    /// ffmpeg executable
    #[arg(long, env = "CONTINUITY_STITCH_FFMPEG")]
    pub ffmpeg: Option<PathBuf>,

    /// ffprobe executable
    #[arg(long, env = "CONTINUITY_STITCH_FFPROBE")]
    pub ffprobe: Option<PathBuf>,

    /// Timeout for each ffmpeg/ffprobe invocation, in seconds
    #[arg(long, env = "CONTINUITY_STITCH_TIMEOUT")]
    pub timeout: Option<u64>,
}

/// Arguments for the stitch command
#[derive(Args, Debug)]
pub struct StitchArgs {
    /// Input video files, in playback order
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output file path
    #[arg(short, long)]
    pub output: PathBuf,

    /// Working directory for intermediates (kept after the run)
    #[arg(long, env = "CONTINUITY_STITCH_WORK_DIR")]
    pub work_dir: Option<PathBuf>,

    #[command(flatten)]
    pub tools: ToolArgs,

    /// Print a JSON report instead of the output path
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the inspect command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input video files
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    #[command(flatten)]
    pub tools: ToolArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}
