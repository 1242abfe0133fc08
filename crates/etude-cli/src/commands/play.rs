//! Play command implementation
//!
//! Realizes an etude and renders it to a WAV file so it can be heard.

use anyhow::Result;
use colored::Colorize;
use etude_backend_audio::render_to_wav;
use etude_backend_score::generate_etude;
use etude_spec::validate_for_play;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use super::json_output::{
    print_json, validation_error_to_json, validation_warning_to_json, GenerateOutput, JsonError,
};
use crate::input::load_spec;

/// Run the play command
///
/// # Arguments
/// * `spec_path` - Path to the spec file (output format must be wav)
/// * `out_root` - Output root directory (default: current directory)
/// * `seed` - Optional seed override for a fresh realization
/// * `open_audio` - Open the rendered file with the system player
/// * `json_output` - Emit a machine-readable JSON envelope
///
/// # Returns
/// Exit code: 0 on success, 1 for spec errors, 2 for rendering errors
pub fn run(
    spec_path: &str,
    out_root: Option<&str>,
    seed: Option<u32>,
    open_audio: bool,
    json_output: bool,
) -> Result<ExitCode> {
    let start = Instant::now();
    let out_root = PathBuf::from(out_root.unwrap_or("."));

    let loaded = match load_spec(Path::new(spec_path)) {
        Ok(loaded) => loaded,
        Err(e) => {
            if json_output {
                print_json(&GenerateOutput::failure(
                    vec![JsonError::new("INPUT", format!("{e:#}"))],
                    vec![],
                ));
            } else {
                println!("{} {:#}", "FAILED".red().bold(), e);
            }
            return Ok(ExitCode::from(1));
        }
    };
    let mut spec = loaded.spec;
    if let Some(seed) = seed {
        spec.seed = seed;
    }

    if !json_output {
        println!("{} {}", "Playing:".cyan().bold(), spec.etude_id);
    }

    let validation = validate_for_play(&spec);
    if !validation.is_ok() {
        if json_output {
            print_json(&GenerateOutput::failure(
                validation
                    .errors
                    .iter()
                    .map(validation_error_to_json)
                    .collect(),
                validation
                    .warnings
                    .iter()
                    .map(validation_warning_to_json)
                    .collect(),
            ));
        } else {
            super::print_validation_messages(&validation);
            println!(
                "\n{} Spec {} has {} error(s)",
                "FAILED".red().bold(),
                spec.etude_id,
                validation.errors.len()
            );
        }
        return Ok(ExitCode::from(1));
    }

    let output_path = out_root.join(&spec.output.path);
    let realization = match render(&spec, &output_path) {
        Ok(realization) => realization,
        Err(e) => {
            if json_output {
                print_json(&GenerateOutput::failure(
                    vec![JsonError::new("PLAY", format!("{e:#}"))],
                    vec![],
                ));
            } else {
                println!("\n{} {:#}", "RENDERING FAILED".red().bold(), e);
            }
            return Ok(ExitCode::from(2));
        }
    };

    let duration_ms = start.elapsed().as_millis() as u64;

    if json_output {
        print_json(&GenerateOutput {
            ok: true,
            spec_hash: Some(realization.spec_hash),
            output: Some(output_path.display().to_string()),
            document: None,
            duration_ms: Some(duration_ms),
            errors: vec![],
            warnings: validation
                .warnings
                .iter()
                .map(validation_warning_to_json)
                .collect(),
        });
    } else {
        super::print_validation_messages(&validation);
        println!("  {} {}", "->".green(), output_path.display());
        println!(
            "\n{} Rendered {} ({}ms)",
            "SUCCESS".green().bold(),
            spec.etude_id,
            duration_ms
        );
    }

    if open_audio {
        if let Err(e) = open::that(&output_path) {
            eprintln!("failed to open {}: {}", output_path.display(), e);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn render(
    spec: &etude_spec::EtudeSpec,
    output_path: &Path,
) -> Result<etude_backend_score::EtudeRealization> {
    let realization = generate_etude(spec)?;
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    render_to_wav(&realization, output_path)?;
    Ok(realization)
}
