// Domain errors - Policy violations detected on probed inputs

use thiserror::Error;

use crate::domain::model::Resolution;

/// Input consistency violations
///
/// Both variants belong to the general validation category and are raised
/// before any normalization work starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Inputs use more than one video codec
    #[error("Input codecs differ: [{}]", .codecs.join(", "))]
    CodecMismatch { codecs: Vec<String> },

    /// Inputs use more than one frame size
    #[error("Input resolutions differ: [{}]", format_resolutions(.resolutions))]
    ResolutionMismatch { resolutions: Vec<Resolution> },
}

fn format_resolutions(resolutions: &[Resolution]) -> String {
    resolutions
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
