//! Continuity Stitch CLI
//!
//! Joins video clips into one file: every clip is normalized to a common
//! resolution, frame rate and pixel format, then concatenated losslessly.
//!
//! # Usage
//!
//! ```bash
//! stitcher stitch -o final.mp4 intro.mp4 scene1.mp4 scene2.mp4
//! stitcher inspect --json intro.mp4 scene1.mp4
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use continuity_stitch::cli::{commands, Cli, Commands};
use continuity_stitch::config_initialization::initialize_configuration_hierarchy;
use continuity_stitch::utils::logging::LoggingConfig;

/// Main entry point for the stitcher CLI
#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let settings = initialize_configuration_hierarchy(&cli, &cwd)?;

    // Initialize logging
    let logging = LoggingConfig::parse(&settings.log_level, &settings.log_format)
        .map_err(|e| anyhow::anyhow!("Invalid logging configuration: {}", e))?;
    logging.init();

    info!("Starting Continuity Stitch {}", env!("CARGO_PKG_VERSION"));

    // Execute the requested command
    match cli.command {
        Commands::Stitch(args) => {
            info!("Executing stitch command");
            commands::stitch(args, settings).await
        }
        Commands::Inspect(args) => {
            info!("Executing inspect command");
            commands::inspect(args, settings).await
        }
    }
}
