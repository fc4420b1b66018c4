//! Job-scoped working directory and intermediate artifact tracking

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::{debug, warn};

/// Prefix of job-owned temporary directories
pub const TEMP_DIR_PREFIX: &str = "continuity_stitch_";

/// Where intermediates are written
#[derive(Debug)]
enum WorkDir {
    /// Created for the job and removed with it
    Owned(TempDir),
    /// Supplied by the caller and left in place
    Borrowed(PathBuf),
}

/// Working directory of a single stitch job.
///
/// Every path handed out by [`Workspace::artifact`] is tracked and removed
/// on [`Workspace::cleanup`] or drop, whichever comes first. An owned
/// directory is then removed recursively.
#[derive(Debug)]
pub struct Workspace {
    dir: Option<WorkDir>,
    artifacts: Vec<PathBuf>,
}

impl Workspace {
    /// Create a fresh temporary directory owned by the job
    pub fn owned() -> std::io::Result<Self> {
        let dir = tempfile::Builder::new().prefix(TEMP_DIR_PREFIX).tempdir()?;
        debug!("Created job workspace: {}", dir.path().display());
        Ok(Self {
            dir: Some(WorkDir::Owned(dir)),
            artifacts: Vec::new(),
        })
    }

    /// Use a caller-supplied directory, creating it if missing.
    ///
    /// A relative directory is anchored at the current directory: the concat
    /// manifest resolves relative entries against its own location, so
    /// artifact paths must be absolute.
    pub fn borrowed(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        let dir = if dir.is_absolute() {
            dir
        } else {
            std::env::current_dir()?.join(dir)
        };
        std::fs::create_dir_all(&dir)?;
        debug!("Using caller workspace: {}", dir.display());
        Ok(Self {
            dir: Some(WorkDir::Borrowed(dir)),
            artifacts: Vec::new(),
        })
    }

    /// Owned when `dir` is `None`, borrowed otherwise
    pub fn acquire(dir: Option<&Path>) -> std::io::Result<Self> {
        match dir {
            Some(dir) => Self::borrowed(dir),
            None => Self::owned(),
        }
    }

    pub fn path(&self) -> &Path {
        match &self.dir {
            Some(WorkDir::Owned(dir)) => dir.path(),
            Some(WorkDir::Borrowed(dir)) => dir,
            None => Path::new(""),
        }
    }

    pub fn is_owned(&self) -> bool {
        matches!(self.dir, Some(WorkDir::Owned(_)))
    }

    /// Reserve a job-owned file path inside the workspace
    pub fn artifact(&mut self, file_name: &str) -> PathBuf {
        let path = self.path().join(file_name);
        self.artifacts.push(path.clone());
        path
    }

    /// Paths reserved so far
    pub fn artifacts(&self) -> &[PathBuf] {
        &self.artifacts
    }

    /// Remove tracked artifacts, then the directory if the job owns it.
    /// Missing paths are ignored and other failures are only logged.
    pub fn cleanup(&mut self) {
        for artifact in self.artifacts.drain(..) {
            match std::fs::remove_file(&artifact) {
                Ok(()) => debug!("Removed {}", artifact.display()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => warn!("Failed to remove {}: {}", artifact.display(), e),
            }
        }

        match self.dir.take() {
            Some(WorkDir::Owned(dir)) => {
                let path = dir.path().to_path_buf();
                if let Err(e) = dir.close() {
                    if e.kind() != std::io::ErrorKind::NotFound {
                        warn!("Failed to remove workspace {}: {}", path.display(), e);
                    }
                } else {
                    debug!("Removed job workspace: {}", path.display());
                }
            }
            Some(WorkDir::Borrowed(dir)) => {
                debug!("Leaving caller workspace in place: {}", dir.display());
            }
            None => {}
        }
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        self.cleanup();
    }
}
