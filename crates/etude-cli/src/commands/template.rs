//! Template command implementation
//!
//! Writes a starter spec with every field spelled out, ready to edit.

use anyhow::{Context, Result};
use colored::Colorize;
use etude_spec::{Clef, EtudeSpec, PartSpec};
use std::process::ExitCode;

/// Builds the starter spec: a two-hand piano drill with chords in the
/// bass, the shape most specs start from.
pub fn starter_spec() -> EtudeSpec {
    EtudeSpec::builder("my-first-etude")
        .seed(1)
        .note_count(24)
        .key_signature("c major")
        .time_signature("3/4")
        .parts(vec![
            PartSpec::notes_only(Clef::Treble),
            PartSpec::full(Clef::Bass),
        ])
        .description("Starter sight-reading drill. Edit and regenerate.")
        .build()
}

/// Run the template command
///
/// # Arguments
/// * `output` - Destination path; stdout when omitted
///
/// # Returns
/// Exit code: 0 on success
pub fn run(output: Option<&str>) -> Result<ExitCode> {
    let spec = starter_spec();
    let json = spec.to_json_pretty().context("Failed to serialize template")?;

    match output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("Failed to write template to {path}"))?;
            println!("{} {}", "Template written:".green().bold(), path);
        }
        None => println!("{json}"),
    }
    Ok(ExitCode::SUCCESS)
}
