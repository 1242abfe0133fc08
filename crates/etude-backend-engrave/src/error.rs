//! Error types for the engraving backend.

use etude_spec::{BackendError, OutputFormat};
use std::path::PathBuf;
use thiserror::Error;

/// Result type for engraving operations.
pub type EngraveResult<T> = Result<T, EngraveError>;

/// Errors that can occur while engraving a document.
#[derive(Debug, Error)]
pub enum EngraveError {
    /// LilyPond executable not found.
    #[error("LilyPond executable not found. Ensure LilyPond is installed and in PATH, or set LILYPOND_PATH environment variable")]
    LilypondNotFound,

    /// Failed to spawn the LilyPond process.
    #[error("Failed to spawn LilyPond process: {0}")]
    SpawnFailed(#[source] std::io::Error),

    /// The LilyPond process timed out.
    #[error("LilyPond process timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },

    /// The LilyPond process exited with non-zero status.
    #[error("LilyPond process exited with status {exit_code}: {stderr}")]
    ProcessFailed { exit_code: i32, stderr: String },

    /// The requested format has no engraver flag.
    #[error("Output format '{format}' cannot be engraved; expected png, pdf, or svg")]
    FormatNotEngravable { format: OutputFormat },

    /// LilyPond exited cleanly but the expected file never appeared.
    #[error("Expected output file not found: {path}")]
    OutputNotFound { path: PathBuf },

    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngraveError {
    /// Creates a new process failed error.
    pub fn process_failed(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self::ProcessFailed {
            exit_code,
            stderr: stderr.into(),
        }
    }
}

impl BackendError for EngraveError {
    fn code(&self) -> &'static str {
        match self {
            EngraveError::LilypondNotFound => "ENGRAVE_001",
            EngraveError::SpawnFailed(_) => "ENGRAVE_002",
            EngraveError::Timeout { .. } => "ENGRAVE_003",
            EngraveError::ProcessFailed { .. } => "ENGRAVE_004",
            EngraveError::FormatNotEngravable { .. } => "ENGRAVE_005",
            EngraveError::OutputNotFound { .. } => "ENGRAVE_006",
            EngraveError::Io(_) => "ENGRAVE_007",
        }
    }

    fn category(&self) -> &'static str {
        "engrave"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngraveError::LilypondNotFound;
        assert!(err.to_string().contains("LilyPond executable not found"));

        let err = EngraveError::Timeout { timeout_secs: 120 };
        assert!(err.to_string().contains("120 seconds"));

        let err = EngraveError::process_failed(1, "syntax error on line 3");
        assert!(err.to_string().contains("syntax error on line 3"));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(EngraveError::LilypondNotFound.code(), "ENGRAVE_001");
        assert_eq!(EngraveError::Timeout { timeout_secs: 1 }.code(), "ENGRAVE_003");
        assert_eq!(EngraveError::LilypondNotFound.category(), "engrave");
    }
}
