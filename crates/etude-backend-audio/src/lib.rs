//! Etude Audio Backend - Melody Playback Rendering
//!
//! This crate renders a realized etude to a 16-bit mono WAV file so the
//! generated exercise can be heard as well as read. Pitches are the
//! middle-C octave of each part's note names; every beat sounds for a
//! third of a second.
//!
//! Rendering is pure sample math over the realization, so the same
//! realization always produces byte-identical audio.
//!
//! # Module Structure
//!
//! - [`freq`]: note name to MIDI/frequency conversion
//! - [`render`]: sine synthesis, mixing, WAV output
//! - [`error`]: coded error types

pub mod error;
pub mod freq;
pub mod render;

pub use error::{AudioError, AudioResult};
pub use freq::{midi_to_freq, note_name_to_freq, note_name_to_midi};
pub use render::{render_samples, render_to_wav, NOTE_DURATION_MS, SAMPLE_RATE};
