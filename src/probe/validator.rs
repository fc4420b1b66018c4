//! Input validation prior to stitching

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::model::VideoMetadata;
use crate::domain::rules::ConsistencyPolicy;
use crate::error::{StitchError, StitchResult};
use crate::ports::ProbePort;

/// Probes every input and enforces a single codec and resolution
pub struct VideoValidator {
    probe: Arc<dyn ProbePort>,
}

impl VideoValidator {
    /// Create a validator backed by the given probe port
    pub fn new(probe: Arc<dyn ProbePort>) -> Self {
        Self { probe }
    }

    /// Probe all inputs in order, then apply the consistency policy.
    ///
    /// Every input is probed before the policy runs, so a missing file or a
    /// broken probe is reported ahead of any mismatch.
    pub async fn validate(&self, paths: &[PathBuf]) -> StitchResult<Vec<VideoMetadata>> {
        let metadata = self.probe_all(paths).await?;
        ConsistencyPolicy::check(&metadata)?;

        if let Some(first) = metadata.first() {
            info!("Validated {} input(s): {}", metadata.len(), first);
        }
        Ok(metadata)
    }

    /// Probe every input in order without applying the policy
    pub async fn probe_all(&self, paths: &[PathBuf]) -> StitchResult<Vec<VideoMetadata>> {
        let mut metadata = Vec::with_capacity(paths.len());
        for path in paths {
            if !path.exists() {
                return Err(StitchError::NotFound { path: path.clone() });
            }
            let meta = self.probe.probe_video_stream(path).await?;
            debug!("Probed {}: {}", path.display(), meta);
            metadata.push(meta);
        }
        Ok(metadata)
    }
}
