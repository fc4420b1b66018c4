//! Stream copy concatenation

use std::path::{Path, PathBuf};

/// Arguments for joining normalized segments listed in a manifest.
/// No re-encoding happens here.
#[derive(Debug, Clone)]
pub struct ConcatCommand {
    manifest: PathBuf,
    output: PathBuf,
}

impl ConcatCommand {
    pub fn new(manifest: impl AsRef<Path>, output: impl AsRef<Path>) -> Self {
        Self {
            manifest: manifest.as_ref().to_path_buf(),
            output: output.as_ref().to_path_buf(),
        }
    }

    /// Build the command arguments
    pub fn build_args(&self) -> Vec<String> {
        vec![
            "-y".to_string(),
            "-f".to_string(),
            "concat".to_string(),
            // manifest entries are absolute workspace paths
            "-safe".to_string(),
            "0".to_string(),
            "-i".to_string(),
            self.manifest.to_string_lossy().to_string(),
            "-c".to_string(),
            "copy".to_string(),
            self.output.to_string_lossy().to_string(),
        ]
    }
}
