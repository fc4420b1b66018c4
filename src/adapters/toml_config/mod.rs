// TOML config adapter - Configuration file loading

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::model::NormalizationProfile;
use crate::error::{StitchError, StitchResult};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "continuity_stitch.toml";

/// Settings that can come from a config file, the environment, or the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StitchSettings {
    /// Processing tool executable
    pub ffmpeg_path: PathBuf,
    /// Probing tool executable
    pub ffprobe_path: PathBuf,
    /// Caller-owned working directory
    pub work_dir: Option<PathBuf>,
    /// Ceiling for each tool invocation, in seconds
    pub timeout_secs: u64,
    /// Log level used when RUST_LOG is unset
    pub log_level: String,
    /// Log format: pretty, compact or json
    pub log_format: String,
    /// Normalization target
    pub normalize: NormalizationProfile,
}

impl Default for StitchSettings {
    fn default() -> Self {
        Self {
            ffmpeg_path: PathBuf::from("ffmpeg"),
            ffprobe_path: PathBuf::from("ffprobe"),
            work_dir: None,
            timeout_secs: 60,
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
            normalize: NormalizationProfile::default(),
        }
    }
}

impl StitchSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Top-level document: everything lives under `[stitch]`
#[derive(Debug, Default, Deserialize)]
struct ConfigDocument {
    #[serde(default)]
    stitch: StitchSettings,
}

/// Configuration file adapter (TOML, or YAML by extension)
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Load settings from a file
    pub fn load(path: &Path) -> StitchResult<StitchSettings> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            StitchError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        info!("Loading configuration from: {}", path.display());

        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::parse_yaml(&content),
            _ => Self::parse_toml(&content),
        }
    }

    /// Load the default file from `dir` if it exists
    pub fn load_default(dir: &Path) -> StitchResult<Option<StitchSettings>> {
        let path = dir.join(DEFAULT_CONFIG_FILE);
        if path.is_file() {
            Self::load(&path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Parse settings from TOML text
    pub fn parse_toml(content: &str) -> StitchResult<StitchSettings> {
        let doc: ConfigDocument = toml::from_str(content)
            .map_err(|e| StitchError::config(format!("Failed to parse TOML config: {}", e)))?;
        Ok(doc.stitch)
    }

    /// Parse settings from YAML text
    pub fn parse_yaml(content: &str) -> StitchResult<StitchSettings> {
        let doc: ConfigDocument = serde_yaml::from_str(content)
            .map_err(|e| StitchError::config(format!("Failed to parse YAML config: {}", e)))?;
        Ok(doc.stitch)
    }
}
