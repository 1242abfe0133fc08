//! Error types for the audio backend.

use etude_spec::BackendError;
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during playback rendering.
#[derive(Debug, Error)]
pub enum AudioError {
    /// A beat referenced a note name the synthesizer does not know.
    #[error("unknown note name: '{name}'")]
    UnknownNoteName { name: String },

    /// The realization has no parts to render.
    #[error("nothing to render: realization has no parts")]
    NoParts,

    /// WAV encoding error.
    #[error("WAV encoding error: {0}")]
    Wav(#[from] hound::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BackendError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::UnknownNoteName { .. } => "AUDIO_001",
            AudioError::NoParts => "AUDIO_002",
            AudioError::Wav(_) => "AUDIO_003",
            AudioError::Io(_) => "AUDIO_004",
        }
    }

    fn category(&self) -> &'static str {
        "audio"
    }
}
