//! Output writing module: concat manifest and destination handling

pub mod writer;

pub use writer::{discard_partial_output, ensure_output_directory, ManifestWriter};
