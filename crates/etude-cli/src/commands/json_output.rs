//! Machine-readable JSON envelopes for `--json` output.

use etude_spec::{ValidationError, ValidationWarning};
use serde::Serialize;

/// A single error in JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct JsonError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }
}

/// A single warning in JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct JsonWarning {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Converts a validation error to its JSON form.
pub fn validation_error_to_json(error: &ValidationError) -> JsonError {
    JsonError {
        code: error.code.code().to_string(),
        message: error.message.clone(),
        path: error.path.clone(),
    }
}

/// Converts a validation warning to its JSON form.
pub fn validation_warning_to_json(warning: &ValidationWarning) -> JsonWarning {
    JsonWarning {
        code: warning.code.code().to_string(),
        message: warning.message.clone(),
        path: warning.path.clone(),
    }
}

/// Envelope for `validate --json`.
#[derive(Debug, Serialize)]
pub struct ValidateOutput {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_hash: Option<String>,
    pub errors: Vec<JsonError>,
    pub warnings: Vec<JsonWarning>,
}

/// Envelope for `generate --json` and `play --json`.
#[derive(Debug, Serialize)]
pub struct GenerateOutput {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    pub errors: Vec<JsonError>,
    pub warnings: Vec<JsonWarning>,
}

impl GenerateOutput {
    pub fn failure(errors: Vec<JsonError>, warnings: Vec<JsonWarning>) -> Self {
        Self {
            ok: false,
            spec_hash: None,
            output: None,
            document: None,
            duration_ms: None,
            errors,
            warnings,
        }
    }
}

/// Prints an envelope as pretty JSON on stdout.
pub fn print_json<T: Serialize>(output: &T) {
    match serde_json::to_string_pretty(output) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("failed to serialize output: {e}"),
    }
}
