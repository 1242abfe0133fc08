//! CLI command implementations

pub mod doctor;
pub mod generate;
pub mod play;
pub mod template;
pub mod validate;

pub mod json_output;

use colored::Colorize;
use etude_spec::ValidationResult;

/// Prints validation errors and warnings in the shared human format.
fn print_validation_messages(result: &ValidationResult) {
    for error in &result.errors {
        let location = error
            .path
            .as_ref()
            .map(|p| format!(" at {p}"))
            .unwrap_or_default();
        println!(
            "  {} [{}]{}: {}",
            "x".red(),
            error.code,
            location.dimmed(),
            error.message
        );
    }
    for warning in &result.warnings {
        let location = warning
            .path
            .as_ref()
            .map(|p| format!(" at {p}"))
            .unwrap_or_default();
        println!(
            "  {} [{}]{}: {}",
            "!".yellow(),
            warning.code,
            location.dimmed(),
            warning.message
        );
    }
}
