//! Concat manifest and output file writing

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::StitchResult;

/// Writer for the concat demuxer's segment list
pub struct ManifestWriter;

impl ManifestWriter {
    /// Render one `file '<path>'` line per segment, in order
    pub fn render<P: AsRef<Path>>(segments: &[P]) -> String {
        let mut manifest = String::new();
        for segment in segments {
            manifest.push_str("file '");
            manifest.push_str(&escape_path(segment.as_ref()));
            manifest.push_str("'\n");
        }
        manifest
    }

    /// Write the manifest to `path`, synced to disk
    pub fn write<P: AsRef<Path>>(path: &Path, segments: &[P]) -> StitchResult<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(Self::render(segments).as_bytes())?;
        writer.flush()?;
        writer.get_ref().sync_all()?;

        info!("Wrote concat manifest with {} segment(s): {}", segments.len(), path.display());
        Ok(())
    }
}

/// Quote escaping for the concat demuxer: `'` becomes `'\''`
fn escape_path(path: &Path) -> String {
    path.to_string_lossy().replace('\'', r"'\''")
}

/// Ensure the destination's parent directory exists
pub fn ensure_output_directory(path: &Path) -> StitchResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
        debug!("Output directory ready: {}", parent.display());
    }
    Ok(())
}

/// Remove a partially written destination after a failed concat
pub fn discard_partial_output(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => info!("Removed partial output: {}", path.display()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!("Failed to remove partial output {}: {}", path.display(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_render_three_segments_in_order() {
        let manifest = ManifestWriter::render(&["a_norm.mp4", "b_norm.mp4", "c_norm.mp4"]);
        assert_eq!(
            manifest,
            "file 'a_norm.mp4'\nfile 'b_norm.mp4'\nfile 'c_norm.mp4'\n"
        );
        assert_eq!(manifest.lines().count(), 3);
    }

    #[test]
    fn test_render_empty() {
        let segments: Vec<PathBuf> = Vec::new();
        assert_eq!(ManifestWriter::render(&segments), "");
    }

    #[test]
    fn test_render_escapes_quotes() {
        let manifest = ManifestWriter::render(&["/clips/director's cut_norm.mp4"]);
        assert_eq!(manifest, "file '/clips/director'\\''s cut_norm.mp4'\n");
    }

    #[test]
    fn test_write_manifest_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("concat_list.txt");
        let segments = vec![dir.path().join("a_norm.mp4"), dir.path().join("b_norm.mp4")];

        ManifestWriter::write(&path, &segments).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let expected = format!(
            "file '{}'\nfile '{}'\n",
            segments[0].display(),
            segments[1].display()
        );
        assert_eq!(content, expected);
    }

    #[test]
    fn test_ensure_output_directory_creates_parents() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("renders/2024/final.mp4");

        ensure_output_directory(&output).unwrap();
        assert!(output.parent().unwrap().is_dir());

        // Bare file names have no parent to create
        ensure_output_directory(Path::new("final.mp4")).unwrap();
    }

    #[test]
    fn test_discard_partial_output() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("final.mp4");
        std::fs::write(&output, b"partial").unwrap();

        discard_partial_output(&output);
        assert!(!output.exists());

        // Already gone is fine
        discard_partial_output(&output);
    }
}
