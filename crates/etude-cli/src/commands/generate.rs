//! Generate command implementation
//!
//! Realizes an etude from a spec, writes the markup document, and engraves
//! it into the requested sheet format.

use anyhow::Result;
use colored::Colorize;
use etude_backend_engrave::Engraver;
use etude_backend_score::{generate_etude, write_document};
use etude_spec::{validate_for_engrave, EtudeSpec, OutputFormat};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use super::json_output::{
    print_json, validation_error_to_json, validation_warning_to_json, GenerateOutput, JsonError,
};
use crate::input::load_spec;

/// Run the generate command
///
/// # Arguments
/// * `spec_path` - Path to the spec file
/// * `out_root` - Output root directory (default: current directory)
/// * `format` - Optional sheet format override (png, pdf, svg)
/// * `seed` - Optional seed override for a fresh realization
/// * `open_sheet` - Open the rendered sheet with the system viewer
/// * `json_output` - Emit a machine-readable JSON envelope
///
/// # Returns
/// Exit code: 0 on success, 1 for spec errors, 2 for generation errors
pub fn run(
    spec_path: &str,
    out_root: Option<&str>,
    format: Option<&str>,
    seed: Option<u32>,
    open_sheet: bool,
    json_output: bool,
) -> Result<ExitCode> {
    let start = Instant::now();
    let out_root = PathBuf::from(out_root.unwrap_or("."));

    let loaded = match load_spec(Path::new(spec_path)) {
        Ok(loaded) => loaded,
        Err(e) => {
            return Ok(report_input_error(&e, json_output));
        }
    };
    let mut spec = loaded.spec;

    if let Some(seed) = seed {
        spec.seed = seed;
    }
    if let Some(format) = format {
        match format.parse::<OutputFormat>() {
            Ok(parsed) => retarget_output(&mut spec, parsed),
            Err(e) => {
                return Ok(report_input_error(&anyhow::anyhow!(e), json_output));
            }
        }
    }

    if !json_output {
        println!("{} {}", "Generating:".cyan().bold(), spec.etude_id);
    }

    // Validation gates every file write.
    let validation = validate_for_engrave(&spec);
    if !validation.is_ok() {
        return Ok(report_validation_failure(&spec, &validation, json_output));
    }

    let (realization, output_path) = match realize_and_engrave(&spec, &out_root) {
        Ok(done) => done,
        Err(e) => {
            if json_output {
                print_json(&GenerateOutput::failure(
                    vec![JsonError::new("GENERATE", format!("{e:#}"))],
                    vec![],
                ));
            } else {
                println!("\n{} {:#}", "GENERATION FAILED".red().bold(), e);
            }
            return Ok(ExitCode::from(2));
        }
    };

    let duration_ms = start.elapsed().as_millis() as u64;

    if json_output {
        print_json(&GenerateOutput {
            ok: true,
            spec_hash: Some(realization.spec_hash.clone()),
            output: Some(output_path.display().to_string()),
            document: Some(
                out_root
                    .join(etude_backend_score::DOCUMENT_FILE)
                    .display()
                    .to_string(),
            ),
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
            "\n{} Engraved {} ({}ms)",
            "SUCCESS".green().bold(),
            spec.etude_id,
            duration_ms
        );
    }

    if open_sheet {
        if let Err(e) = open::that(&output_path) {
            eprintln!("failed to open {}: {}", output_path.display(), e);
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Points the spec's output at a different sheet format, swapping the
/// path extension to keep path and format consistent.
fn retarget_output(spec: &mut EtudeSpec, format: OutputFormat) {
    if spec.output.format != format {
        spec.output.format = format;
        spec.output.path = Path::new(&spec.output.path)
            .with_extension(format.extension())
            .to_string_lossy()
            .into_owned();
    }
}

fn realize_and_engrave(
    spec: &EtudeSpec,
    out_root: &Path,
) -> Result<(etude_backend_score::EtudeRealization, PathBuf)> {
    let realization = generate_etude(spec)?;
    let document_path = write_document(&realization, out_root)?;

    let output_path = out_root.join(&spec.output.path);
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let engraver = Engraver::new();
    let report = engraver.engrave(&document_path, spec.output.format, &output_path)?;
    Ok((realization, report.output_path))
}

fn report_input_error(e: &anyhow::Error, json_output: bool) -> ExitCode {
    if json_output {
        print_json(&GenerateOutput::failure(
            vec![JsonError::new("INPUT", format!("{e:#}"))],
            vec![],
        ));
    } else {
        println!("{} {:#}", "FAILED".red().bold(), e);
    }
    ExitCode::from(1)
}

fn report_validation_failure(
    spec: &EtudeSpec,
    validation: &etude_spec::ValidationResult,
    json_output: bool,
) -> ExitCode {
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
        super::print_validation_messages(validation);
        println!(
            "\n{} Spec {} has {} error(s)",
            "FAILED".red().bold(),
            spec.etude_id,
            validation.errors.len()
        );
    }
    ExitCode::from(1)
}
