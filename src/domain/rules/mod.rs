// Domain rules - Input consistency and segment naming policies

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use crate::domain::errors::*;
use crate::domain::model::*;

/// Consistency policy applied to probed inputs before any transcoding
///
/// Every divergence in codec or resolution is rejected, even though
/// normalization would reconcile frame sizes. Codec is checked first.
pub struct ConsistencyPolicy;

impl ConsistencyPolicy {
    /// Check that all inputs share one codec and one resolution
    pub fn check(metadata: &[VideoMetadata]) -> Result<(), ValidationError> {
        let codecs: BTreeSet<&str> = metadata.iter().map(|m| m.codec.as_str()).collect();
        if codecs.len() > 1 {
            return Err(ValidationError::CodecMismatch {
                codecs: codecs.into_iter().map(str::to_string).collect(),
            });
        }

        let resolutions: BTreeSet<Resolution> = metadata.iter().map(|m| m.resolution()).collect();
        if resolutions.len() > 1 {
            return Err(ValidationError::ResolutionMismatch {
                resolutions: resolutions.into_iter().collect(),
            });
        }

        Ok(())
    }
}

/// Naming rules for job-owned intermediate files
pub struct SegmentNaming;

impl SegmentNaming {
    /// Suffix appended to the input stem
    pub const SUFFIX: &'static str = "_norm.mp4";
    /// Manifest file name inside the working directory
    pub const MANIFEST: &'static str = "concat_list.txt";

    /// File names for the normalized segments, one per input, same order.
    ///
    /// Names derive from the input stem. A name already taken gets a
    /// numeric tag, starting at the input index and counting up until the
    /// name is free, so segments never overwrite each other.
    pub fn segment_names(inputs: &[PathBuf]) -> Vec<String> {
        let mut taken = HashSet::new();
        inputs
            .iter()
            .enumerate()
            .map(|(index, input)| {
                let stem = Self::stem(input);
                let mut name = format!("{}{}", stem, Self::SUFFIX);
                let mut tag = index;
                while !taken.insert(name.clone()) {
                    name = format!("{}_{}{}", stem, tag, Self::SUFFIX);
                    tag += 1;
                }
                name
            })
            .collect()
    }

    fn stem(input: &Path) -> String {
        input
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "segment".to_string())
    }
}
