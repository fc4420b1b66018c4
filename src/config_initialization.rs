//! Configuration initialization and hierarchy management

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::adapters::{StitchSettings, TomlConfigAdapter};
use crate::cli::args::ToolArgs;
use crate::cli::Cli;

/// Resolve settings following precedence: CLI > Env > File > Defaults.
///
/// Environment variables reach this function through clap, so CLI and env
/// are already merged in `cli`.
pub fn initialize_configuration_hierarchy(cli: &Cli, cwd: &Path) -> Result<StitchSettings> {
    // Step 1 and 2: defaults, then the config file
    let mut settings = match &cli.config {
        Some(path) => TomlConfigAdapter::load(path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?,
        None => TomlConfigAdapter::load_default(cwd)
            .context("Failed to load default config file")?
            .unwrap_or_default(),
    };

    // Step 3: global CLI / env overrides
    if let Some(level) = &cli.log_level {
        settings.log_level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        settings.log_format = format.clone();
    }

    Ok(settings)
}

/// Apply per-command tool overrides on top of resolved settings
pub fn apply_tool_overrides(settings: &mut StitchSettings, tools: &ToolArgs) {
    let mut overrides = 0;
    if let Some(ffmpeg) = &tools.ffmpeg {
        settings.ffmpeg_path = ffmpeg.clone();
        overrides += 1;
    }
    if let Some(ffprobe) = &tools.ffprobe {
        settings.ffprobe_path = ffprobe.clone();
        overrides += 1;
    }
    if let Some(timeout) = tools.timeout {
        settings.timeout_secs = timeout;
        overrides += 1;
    }

    if overrides > 0 {
        info!("Applied {} tool configuration override(s)", overrides);
    }
}
