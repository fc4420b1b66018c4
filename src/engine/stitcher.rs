//! Main video stitcher implementation

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::adapters::{FFmpegAdapter, FFprobeAdapter};
use crate::domain::model::{StitchReport, StitchRequest};
use crate::domain::rules::SegmentNaming;
use crate::engine::{ConcatCommand, NormalizeCommand, StitchOptions, StitchPhase, Workspace};
use crate::error::{StitchError, StitchResult};
use crate::output::{discard_partial_output, ensure_output_directory, ManifestWriter};
use crate::ports::{ExecutePort, ProbePort};
use crate::probe::VideoValidator;

/// Stitches the inputs of a [`StitchRequest`] into one output file.
///
/// Pipeline: tool check, validation of every input, per-input
/// normalization, manifest, stream-copy concat. Nothing is written before
/// validation succeeds, and the workspace is cleaned up on every exit path
/// once it exists.
pub struct VideoStitcher {
    request: StitchRequest,
    options: StitchOptions,
    probe: Arc<dyn ProbePort>,
    executor: Arc<dyn ExecutePort>,
}

impl VideoStitcher {
    /// Create a stitcher using `ffmpeg` / `ffprobe` from the search path
    pub fn new(request: StitchRequest) -> Self {
        Self::with_options(request, StitchOptions::default())
    }

    /// Create a stitcher with explicit tool paths, timeout and profile
    pub fn with_options(request: StitchRequest, options: StitchOptions) -> Self {
        let probe = FFprobeAdapter::new(&options.ffprobe_path).with_timeout(options.timeout);
        let executor = FFmpegAdapter::new(&options.ffmpeg_path);
        Self {
            request,
            options,
            probe: Arc::new(probe),
            executor: Arc::new(executor),
        }
    }

    /// Replace the probe and execution ports
    pub fn with_ports(mut self, probe: Arc<dyn ProbePort>, executor: Arc<dyn ExecutePort>) -> Self {
        self.probe = probe;
        self.executor = executor;
        self
    }

    pub fn request(&self) -> &StitchRequest {
        &self.request
    }

    pub fn options(&self) -> &StitchOptions {
        &self.options
    }

    /// Run the job and return the output path
    pub async fn stitch(&self) -> StitchResult<PathBuf> {
        self.run().await.map(|report| report.output)
    }

    /// Blocking variant of [`VideoStitcher::stitch`].
    ///
    /// Drives the job on a private current-thread runtime, so it must not be
    /// called from within an async context.
    pub fn stitch_blocking(&self) -> StitchResult<PathBuf> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(self.stitch())
    }

    /// Run the job and return a report
    pub async fn run(&self) -> StitchResult<StitchReport> {
        let started_at = Utc::now();
        let inputs = &self.request.inputs;

        if inputs.is_empty() {
            return Err(StitchError::EmptyInput);
        }

        debug!("Phase: {:?}", StitchPhase::CheckingTool);
        let ffmpeg = self.executor.locate()?;
        info!("Using processing tool: {}", ffmpeg.display());

        debug!("Phase: {:?}", StitchPhase::Validating);
        let metadata = VideoValidator::new(Arc::clone(&self.probe))
            .validate(inputs)
            .await?;

        let mut workspace = Workspace::acquire(self.request.work_dir.as_deref())?;
        info!(
            "Stitching {} input(s) into {} (workspace: {})",
            inputs.len(),
            self.request.output.display(),
            workspace.path().display()
        );

        let result = self.process(&mut workspace).await;

        debug!("Phase: {:?}", StitchPhase::CleaningUp);
        workspace.cleanup();

        let segments = result?;
        let report = StitchReport {
            output: self.request.output.clone(),
            inputs: inputs.clone(),
            metadata,
            segments,
            started_at,
            finished_at: Utc::now(),
        };
        info!(
            "Stitched {} segment(s) into {} in {}ms",
            report.segments,
            report.output.display(),
            report.elapsed().num_milliseconds()
        );
        Ok(report)
    }

    /// Normalize, write the manifest, concatenate. Returns the segment count.
    async fn process(&self, workspace: &mut Workspace) -> StitchResult<usize> {
        let inputs = &self.request.inputs;
        let output = self.request.output.as_path();
        let names = SegmentNaming::segment_names(inputs);

        debug!("Phase: {:?}", StitchPhase::Normalizing);
        let mut segments = Vec::with_capacity(inputs.len());
        for (index, (input, name)) in inputs.iter().zip(&names).enumerate() {
            // Reserved before running so a partial segment is still removed
            let segment = workspace.artifact(name);
            info!(
                "Normalizing [{}/{}]: {}",
                index + 1,
                inputs.len(),
                input.display()
            );
            let args = NormalizeCommand::new(input, &segment, &self.options.profile).build_args();
            self.executor.run(&args, self.options.timeout).await?;
            segments.push(segment);
        }

        debug!("Phase: {:?}", StitchPhase::WritingManifest);
        let manifest = workspace.artifact(SegmentNaming::MANIFEST);
        ManifestWriter::write(&manifest, &segments)?;

        debug!("Phase: {:?}", StitchPhase::Concatenating);
        self.concat(&manifest, output).await?;

        Ok(segments.len())
    }

    async fn concat(&self, manifest: &Path, output: &Path) -> StitchResult<()> {
        ensure_output_directory(output)?;
        let args = ConcatCommand::new(manifest, output).build_args();
        if let Err(e) = self.executor.run(&args, self.options.timeout).await {
            warn!("Concatenation failed: {}", e);
            discard_partial_output(output);
            return Err(e);
        }
        Ok(())
    }
}
