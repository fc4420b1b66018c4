//! Re-encoding of each input to the canonical profile

use std::path::{Path, PathBuf};

use crate::domain::model::NormalizationProfile;

/// Arguments for normalizing one input.
///
/// Output: profile resolution with letterboxing, fixed frame rate and pixel
/// format, profile encoder settings, no audio.
#[derive(Debug, Clone)]
pub struct NormalizeCommand<'a> {
    input: PathBuf,
    output: PathBuf,
    profile: &'a NormalizationProfile,
}

impl<'a> NormalizeCommand<'a> {
    pub fn new(
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
        profile: &'a NormalizationProfile,
    ) -> Self {
        Self {
            input: input.as_ref().to_path_buf(),
            output: output.as_ref().to_path_buf(),
            profile,
        }
    }

    /// Build the command arguments
    pub fn build_args(&self) -> Vec<String> {
        vec![
            "-y".to_string(),
            "-i".to_string(),
            self.input.to_string_lossy().to_string(),
            "-vf".to_string(),
            self.profile.video_filter(),
            "-c:v".to_string(),
            self.profile.video_codec.clone(),
            "-preset".to_string(),
            self.profile.preset.clone(),
            "-crf".to_string(),
            self.profile.crf.to_string(),
            "-an".to_string(),
            self.output.to_string_lossy().to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_args() {
        let profile = NormalizationProfile::default();
        let args = NormalizeCommand::new("in/a.mov", "/tmp/job/a_norm.mp4", &profile).build_args();

        assert_eq!(&args[..3], &["-y", "-i", "in/a.mov"]);
        assert_eq!(args[3], "-vf");
        assert_eq!(args[4], profile.video_filter());
        assert_eq!(
            &args[5..],
            &["-c:v", "libx264", "-preset", "ultrafast", "-crf", "28", "-an", "/tmp/job/a_norm.mp4"]
        );
    }

    #[test]
    fn test_normalize_args_follow_profile() {
        let profile = NormalizationProfile {
            video_codec: "libx265".to_string(),
            crf: 23,
            ..NormalizationProfile::default()
        };
        let args = NormalizeCommand::new("a.mp4", "a_norm.mp4", &profile).build_args();
        assert!(args.windows(2).any(|w| w == ["-c:v", "libx265"]));
        assert!(args.windows(2).any(|w| w == ["-crf", "23"]));
        assert_eq!(args.last().map(String::as_str), Some("a_norm.mp4"));
    }
}
