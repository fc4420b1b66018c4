//! CLI module for continuity-stitch
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

/// Continuity Stitch
///
/// Joins video clips into one file. Every clip is normalized to a common
/// resolution, frame rate and pixel format, then concatenated losslessly.
#[derive(Parser, Debug)]
#[command(name = "stitcher")]
#[command(about = "Continuity Stitch - join video clips into one seamless file")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Configuration file (TOML, or YAML by extension)
    #[arg(long, global = true, env = "CONTINUITY_STITCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "CONTINUITY_STITCH_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Logging format (pretty, compact, json)
    #[arg(long, global = true, env = "CONTINUITY_STITCH_LOG_FORMAT")]
    pub log_format: Option<String>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Normalize and concatenate clips into one output file
    Stitch(args::StitchArgs),
    /// Probe clips and check they can be stitched together
    Inspect(args::InspectArgs),
}
