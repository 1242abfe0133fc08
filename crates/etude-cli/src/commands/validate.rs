//! Validate command implementation
//!
//! Validates a spec file without generating anything.

use anyhow::Result;
use colored::Colorize;
use etude_spec::{canonical_spec_hash, validate_spec};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use super::json_output::{
    print_json, validation_error_to_json, validation_warning_to_json, JsonError, ValidateOutput,
};
use crate::input::load_spec;

/// Run the validate command
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(spec_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(spec_path)
    } else {
        run_human(spec_path)
    }
}

fn run_human(spec_path: &str) -> Result<ExitCode> {
    let start = Instant::now();

    println!("{} {}", "Validating:".cyan().bold(), spec_path);

    let loaded = load_spec(Path::new(spec_path))?;
    println!(
        "{} {} ({})",
        "Source:".dimmed(),
        spec_path,
        &loaded.source_hash[..16]
    );

    let spec_hash = canonical_spec_hash(&loaded.spec).unwrap_or_else(|_| "unknown".to_string());
    println!("{} {}", "Spec hash:".dimmed(), &spec_hash[..16]);

    let result = validate_spec(&loaded.spec);
    super::print_validation_messages(&result);

    let duration_ms = start.elapsed().as_millis() as u64;
    if result.is_ok() {
        println!(
            "\n{} Spec is valid ({}ms)",
            "SUCCESS".green().bold(),
            duration_ms
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} Spec has {} error(s) ({}ms)",
            "FAILED".red().bold(),
            result.errors.len(),
            duration_ms
        );
        Ok(ExitCode::from(1))
    }
}

fn run_json(spec_path: &str) -> Result<ExitCode> {
    let loaded = match load_spec(Path::new(spec_path)) {
        Ok(loaded) => loaded,
        Err(e) => {
            let output = ValidateOutput {
                ok: false,
                spec_hash: None,
                errors: vec![JsonError::new("INPUT", format!("{e:#}"))],
                warnings: vec![],
            };
            print_json(&output);
            return Ok(ExitCode::from(1));
        }
    };

    let spec_hash = canonical_spec_hash(&loaded.spec).ok();
    let result = validate_spec(&loaded.spec);

    let output = ValidateOutput {
        ok: result.is_ok(),
        spec_hash,
        errors: result.errors.iter().map(validation_error_to_json).collect(),
        warnings: result
            .warnings
            .iter()
            .map(validation_warning_to_json)
            .collect(),
    };
    print_json(&output);

    if output.ok {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}
