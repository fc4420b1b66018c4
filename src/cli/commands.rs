//! Command implementations

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use crate::adapters::{FFprobeAdapter, StitchSettings};
use crate::cli::args::{InspectArgs, StitchArgs};
use crate::config_initialization::apply_tool_overrides;
use crate::domain::model::{StitchRequest, VideoMetadata};
use crate::domain::rules::ConsistencyPolicy;
use crate::engine::{StitchOptions, VideoStitcher};
use crate::probe::VideoValidator;
use crate::utils::format_duration;

/// One row of `inspect --json`
#[derive(Debug, Serialize)]
struct InspectEntry<'a> {
    path: &'a PathBuf,
    #[serde(flatten)]
    metadata: &'a VideoMetadata,
}

/// `inspect --json` document
#[derive(Debug, Serialize)]
struct InspectReport<'a> {
    inputs: Vec<InspectEntry<'a>>,
    compatible: bool,
    error: Option<String>,
}

/// Execute the stitch command
pub async fn stitch(args: StitchArgs, mut settings: StitchSettings) -> Result<()> {
    apply_tool_overrides(&mut settings, &args.tools);

    info!("Starting stitch operation");
    info!("Inputs: {}", args.inputs.len());
    info!("Output: {}", args.output.display());

    let mut request = StitchRequest::new(args.inputs, args.output);
    if let Some(work_dir) = args.work_dir.or_else(|| settings.work_dir.clone()) {
        request = request.with_work_dir(work_dir);
    }

    let stitcher = VideoStitcher::with_options(request, StitchOptions::from(&settings));
    let report = stitcher.run().await?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    } else {
        println!("{}", report.output.display());
    }

    let elapsed = report.elapsed().to_std().unwrap_or_default();
    info!(
        "Stitch operation completed in {}",
        format_duration(elapsed)
    );
    Ok(())
}

/// Execute the inspect command
pub async fn inspect(args: InspectArgs, mut settings: StitchSettings) -> Result<()> {
    apply_tool_overrides(&mut settings, &args.tools);

    info!("Starting inspect operation");
    let probe = FFprobeAdapter::new(&settings.ffprobe_path).with_timeout(settings.timeout());
    let validator = VideoValidator::new(Arc::new(probe));

    let metadata = validator.probe_all(&args.inputs).await?;
    let verdict = ConsistencyPolicy::check(&metadata);

    if args.json {
        let report = InspectReport {
            inputs: args
                .inputs
                .iter()
                .zip(&metadata)
                .map(|(path, metadata)| InspectEntry { path, metadata })
                .collect(),
            compatible: verdict.is_ok(),
            error: verdict.as_ref().err().map(|e| e.to_string()),
        };
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    } else {
        for (path, meta) in args.inputs.iter().zip(&metadata) {
            println!("{}\t{}\t{}x{}", path.display(), meta.codec, meta.width, meta.height);
        }
        match &verdict {
            Ok(()) => println!("compatible: yes"),
            Err(e) => println!("compatible: no ({})", e),
        }
    }

    if let Err(e) = verdict {
        warn!("Inputs cannot be stitched: {}", e);
        return Err(e.into());
    }
    Ok(())
}
