//! Input loading for spec files.

use anyhow::{Context, Result};
use etude_spec::EtudeSpec;
use std::path::Path;

/// A loaded spec plus the hash of its on-disk source bytes.
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// The parsed spec.
    pub spec: EtudeSpec,
    /// BLAKE3 hash of the raw file contents, for provenance lines.
    pub source_hash: String,
}

/// Loads and parses a spec file.
pub fn load_spec(path: &Path) -> Result<LoadResult> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read spec file: {}", path.display()))?;
    let source_hash = blake3::hash(contents.as_bytes()).to_hex().to_string();
    let spec = EtudeSpec::from_json(&contents)
        .with_context(|| format!("Failed to parse spec file: {}", path.display()))?;
    Ok(LoadResult { spec, source_hash })
}
