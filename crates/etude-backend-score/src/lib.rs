//! Etude Score Backend - Deterministic Melody Generation and Markup Emission
//!
//! This crate turns an [`etude_spec::EtudeSpec`] into a sequence of random
//! beats per part and a LilyPond markup document ready for engraving.
//!
//! # Determinism
//!
//! All generation is fully deterministic. Given the same spec, the emitted
//! document is byte-identical across runs. This is achieved through:
//!
//! - PCG32 random number generator (seeded via BLAKE3 hash derivation)
//! - Independent seeded streams per part (treble and bass never share draws)
//! - Fixed-order document assembly
//!
//! # Example
//!
//! ```
//! use etude_backend_score::generate::generate_etude;
//! use etude_spec::{Clef, EtudeSpec, PartSpec};
//!
//! let spec = EtudeSpec::builder("sight-reading-drill")
//!     .seed(42)
//!     .note_count(24)
//!     .parts(vec![PartSpec::full(Clef::Treble)])
//!     .build();
//!
//! let realization = generate_etude(&spec).unwrap();
//! assert!(realization.document.starts_with("\\version"));
//! ```
//!
//! # Module Structure
//!
//! - [`note`]: random pitch selection under the spec's letter/accidental filter
//! - [`chord`]: block chords built on a random root
//! - [`beat`]: the chord-or-note branch, one token per time step
//! - [`melody`]: memoryless beat sequences
//! - [`lilypond`]: markup document assembly
//! - [`generate`]: main generation entry point

pub mod beat;
pub mod chord;
pub mod generate;
pub mod lilypond;
pub mod melody;
pub mod note;

pub use beat::{Beat, CHORD_PERCENT};
pub use chord::Chord;
pub use generate::{
    generate_etude, write_document, EtudeRealization, GenerateError, PartMelody, DOCUMENT_FILE,
};
pub use note::{Note, NoteFilter};
