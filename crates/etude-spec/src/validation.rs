//! Spec validation logic.
//!
//! Validation runs before any generation step touches the filesystem: an
//! invalid spec never produces a partial document or artifact.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::output::OutputFormat;
use crate::spec::{EtudeSpec, MAX_NOTE_COUNT, SPEC_VERSION};

/// Regex pattern for a valid etude_id.
/// Starts with a lowercase letter, followed by 2-63 lowercase letters,
/// digits, underscores, or hyphens.
const ETUDE_ID_PATTERN: &str = r"^[a-z][a-z0-9_-]{2,63}$";

static ETUDE_ID_REGEX: OnceLock<Regex> = OnceLock::new();

fn etude_id_regex() -> &'static Regex {
    ETUDE_ID_REGEX.get_or_init(|| Regex::new(ETUDE_ID_PATTERN).expect("invalid regex pattern"))
}

/// Validates a spec and returns a validation result.
///
/// # Example
/// ```
/// use etude_spec::EtudeSpec;
/// use etude_spec::validation::validate_spec;
///
/// let spec = EtudeSpec::builder("warmup-01").seed(42).build();
/// let result = validate_spec(&spec);
/// assert!(result.is_ok());
/// ```
pub fn validate_spec(spec: &EtudeSpec) -> ValidationResult {
    let mut result = ValidationResult::default();

    validate_spec_version(spec, &mut result);
    validate_etude_id(spec, &mut result);
    validate_note_count(spec, &mut result);
    validate_letters(spec, &mut result);
    validate_parts(spec, &mut result);
    validate_time_signature(spec, &mut result);
    validate_output(spec, &mut result);

    check_warnings(spec, &mut result);

    result
}

/// Validates a spec for the engrave pipeline (score document + image/PDF).
pub fn validate_for_engrave(spec: &EtudeSpec) -> ValidationResult {
    let mut result = validate_spec(spec);
    if !spec.output.format.is_engraved() {
        result.add_error(ValidationError::with_path(
            ErrorCode::FormatOperationMismatch,
            format!(
                "engraving requires an image or document format, got '{}'",
                spec.output.format
            ),
            "output.format",
        ));
    }
    result
}

/// Validates a spec for the playback pipeline (WAV rendering).
pub fn validate_for_play(spec: &EtudeSpec) -> ValidationResult {
    let mut result = validate_spec(spec);
    if !spec.output.format.is_audio() {
        result.add_error(ValidationError::with_path(
            ErrorCode::FormatOperationMismatch,
            format!(
                "playback rendering requires format 'wav', got '{}'",
                spec.output.format
            ),
            "output.format",
        ));
    }
    result
}

fn validate_spec_version(spec: &EtudeSpec, result: &mut ValidationResult) {
    if spec.spec_version != SPEC_VERSION {
        result.add_error(ValidationError::with_path(
            ErrorCode::UnsupportedSpecVersion,
            format!(
                "spec_version must be {}, got {}",
                SPEC_VERSION, spec.spec_version
            ),
            "spec_version",
        ));
    }
}

fn validate_etude_id(spec: &EtudeSpec, result: &mut ValidationResult) {
    if !etude_id_regex().is_match(&spec.etude_id) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidEtudeId,
            format!(
                "etude_id must match pattern '{}', got '{}'",
                ETUDE_ID_PATTERN, spec.etude_id
            ),
            "etude_id",
        ));
    }
}

fn validate_note_count(spec: &EtudeSpec, result: &mut ValidationResult) {
    if spec.note_count == 0 || spec.note_count > MAX_NOTE_COUNT {
        result.add_error(ValidationError::with_path(
            ErrorCode::NoteCountOutOfRange,
            format!(
                "note_count must be in 1..={}, got {}",
                MAX_NOTE_COUNT, spec.note_count
            ),
            "note_count",
        ));
    }
}

/// Drawing from an empty letter set can never succeed; reject it here
/// rather than failing mid-generation.
fn validate_letters(spec: &EtudeSpec, result: &mut ValidationResult) {
    if spec.letters.is_empty() {
        result.add_error(ValidationError::with_path(
            ErrorCode::EmptyLetterSelection,
            "at least one note letter must be enabled",
            "letters",
        ));
    }
}

fn validate_parts(spec: &EtudeSpec, result: &mut ValidationResult) {
    if spec.parts.is_empty() {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidParts,
            "at least one part is required",
            "parts",
        ));
        return;
    }
    if spec.parts.len() > 2 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidParts,
            format!("at most two parts are supported, got {}", spec.parts.len()),
            "parts",
        ));
    }

    let mut seen = HashSet::new();
    for (i, part) in spec.parts.iter().enumerate() {
        if !seen.insert(part.clef) {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidParts,
                format!("duplicate part for clef '{}'", part.clef),
                format!("parts[{}]", i),
            ));
        }
        if !part.notes && !part.chords {
            result.add_error(ValidationError::with_path(
                ErrorCode::NoPatternEnabled,
                format!(
                    "part '{}' has neither individual notes nor chords enabled",
                    part.clef
                ),
                format!("parts[{}]", i),
            ));
        }
    }
}

fn validate_time_signature(spec: &EtudeSpec, result: &mut ValidationResult) {
    let valid = match spec.time_signature.split_once('/') {
        Some((num, den)) => {
            num.parse::<u32>().map(|n| n > 0).unwrap_or(false)
                && den
                    .parse::<u32>()
                    .map(|d| d.is_power_of_two() && d <= 64)
                    .unwrap_or(false)
        }
        None => false,
    };
    if !valid {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidTimeSignature,
            format!(
                "time_signature must be 'N/M' with M a power of two, got '{}'",
                spec.time_signature
            ),
            "time_signature",
        ));
    }
}

fn validate_output(spec: &EtudeSpec, result: &mut ValidationResult) {
    for message in output_path_safety_errors(&spec.output.path) {
        result.add_error(ValidationError::with_path(
            ErrorCode::UnsafeOutputPath,
            message,
            "output.path",
        ));
    }

    if !spec.output.extension_matches() {
        result.add_error(ValidationError::with_path(
            ErrorCode::PathFormatMismatch,
            format!(
                "output path extension does not match format '{}': '{}'",
                spec.output.format, spec.output.path
            ),
            "output.path",
        ));
    }
}

/// Checks if an output path is safe (relative, no traversal).
pub fn is_safe_output_path(path: &str) -> bool {
    output_path_safety_errors(path).is_empty()
}

fn output_path_safety_errors(path: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if path.is_empty() {
        errors.push("output path cannot be empty".to_string());
        return errors;
    }

    if path.starts_with('/') || path.starts_with('\\') {
        errors.push(format!(
            "output path must be relative, not absolute: '{}'",
            path
        ));
    }

    if path.len() >= 2 && path.chars().nth(1) == Some(':') {
        errors.push(format!(
            "output path must not contain drive letter: '{}'",
            path
        ));
    }

    if path.contains('\\') {
        errors.push(format!(
            "output path must use forward slashes only: '{}'",
            path
        ));
    }

    for segment in path.split('/') {
        if segment == ".." {
            errors.push(format!("output path must not contain '..': '{}'", path));
            break;
        }
    }

    errors
}

fn check_warnings(spec: &EtudeSpec, result: &mut ValidationResult) {
    if spec.description.is_none() {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::MissingDescription,
            "spec has no description",
            "description",
        ));
    }

    if !spec.sharps && !spec.flats {
        result.add_warning(ValidationWarning::new(
            WarningCode::NaturalsOnly,
            "sharps and flats are both disabled; the etude will contain only naturals",
        ));
    }

    if !spec.score_accidentals && (spec.sharps || spec.flats) {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::SuppressedAccidentals,
            "accidentals are drawn but not written into the score (legacy plain-note rendering)",
            "score_accidentals",
        ));
    }
}
