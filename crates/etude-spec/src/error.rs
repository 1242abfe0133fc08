//! Error and warning types for spec validation and processing.

use thiserror::Error;

/// Error codes for spec validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Unsupported spec_version
    UnsupportedSpecVersion,
    /// E002: Invalid etude_id format
    InvalidEtudeId,
    /// E003: Note count out of range
    NoteCountOutOfRange,
    /// E004: No note letters enabled
    EmptyLetterSelection,
    /// E005: Part has neither individual notes nor chords enabled
    NoPatternEnabled,
    /// E006: Invalid part list (empty, too many, or duplicate clef)
    InvalidParts,
    /// E007: Malformed time signature
    InvalidTimeSignature,
    /// E008: Unsafe output path (absolute or traversal)
    UnsafeOutputPath,
    /// E009: Output path extension does not match format
    PathFormatMismatch,
    /// E010: Output format incompatible with the requested operation
    FormatOperationMismatch,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::UnsupportedSpecVersion => "E001",
            ErrorCode::InvalidEtudeId => "E002",
            ErrorCode::NoteCountOutOfRange => "E003",
            ErrorCode::EmptyLetterSelection => "E004",
            ErrorCode::NoPatternEnabled => "E005",
            ErrorCode::InvalidParts => "E006",
            ErrorCode::InvalidTimeSignature => "E007",
            ErrorCode::UnsafeOutputPath => "E008",
            ErrorCode::PathFormatMismatch => "E009",
            ErrorCode::FormatOperationMismatch => "E010",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes for spec validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Missing description
    MissingDescription,
    /// W002: Sharps and flats both disabled (naturals-only etude)
    NaturalsOnly,
    /// W003: Score accidentals suppressed while an accidental flag is enabled
    SuppressedAccidentals,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::MissingDescription => "W001",
            WarningCode::NaturalsOnly => "W002",
            WarningCode::SuppressedAccidentals => "W003",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// JSON path to the problematic field (e.g., "parts\[0\]").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a JSON path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validation warning with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
    /// JSON path to the problematic field.
    pub path: Option<String>,
}

impl ValidationWarning {
    /// Creates a new validation warning.
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation warning with a JSON path.
    pub fn with_path(
        code: WarningCode,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

/// Top-level error type for spec operations.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Spec validation failed with one or more errors.
    #[error("spec validation failed with {0} error(s)")]
    ValidationFailed(usize),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of spec validation.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether validation passed (no errors).
    pub ok: bool,
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
    /// List of validation warnings.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Creates a successful validation result.
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
        self.ok = false;
    }

    /// Adds a warning to the result.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Converts to a Result, returning Err if there are errors.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, Vec<ValidationError>> {
        if self.ok {
            Ok(self.warnings)
        } else {
            Err(self.errors)
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}

/// Common trait for backend errors.
///
/// Each backend error type implements this trait so the CLI can report
/// stable error codes and categories without depending on the concrete
/// backend error enums.
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting (e.g., "SCORE_001").
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors.
    fn category(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ErrorCode::UnsupportedSpecVersion.code(), "E001");
        assert_eq!(ErrorCode::EmptyLetterSelection.code(), "E004");
        assert_eq!(ErrorCode::NoPatternEnabled.code(), "E005");
        assert_eq!(ErrorCode::PathFormatMismatch.code(), "E009");
    }

    #[test]
    fn test_warning_codes() {
        assert_eq!(WarningCode::MissingDescription.code(), "W001");
        assert_eq!(WarningCode::SuppressedAccidentals.code(), "W003");
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new(ErrorCode::InvalidEtudeId, "must start with a letter");
        assert_eq!(err.to_string(), "E002: must start with a letter");

        let err_with_path =
            ValidationError::with_path(ErrorCode::NoPatternEnabled, "nothing enabled", "parts[1]");
        assert_eq!(
            err_with_path.to_string(),
            "E005: nothing enabled (at parts[1])"
        );
    }

    #[test]
    fn test_validation_result() {
        let mut result = ValidationResult::success();
        assert!(result.is_ok());

        result.add_error(ValidationError::new(ErrorCode::InvalidParts, "no parts"));
        assert!(!result.is_ok());
        assert_eq!(result.errors.len(), 1);
        assert!(result.into_result().is_err());
    }
}
