//! Etude Canonical Spec Library
//!
//! This crate provides types, validation, and hashing for etude generation
//! specs. Specs are JSON documents that describe one randomly generated
//! practice piece: which note letters and accidentals are eligible, which
//! staves to produce, which patterns (individual notes, chords) each staff
//! may contain, and what artifact to render.
//!
//! # Example
//!
//! ```
//! use etude_spec::{EtudeSpec, OutputFormat, OutputSpec, PartSpec, Clef};
//! use etude_spec::validation::validate_spec;
//! use etude_spec::hash::canonical_spec_hash;
//!
//! let spec = EtudeSpec::builder("interval-drill-01")
//!     .seed(42)
//!     .note_count(16)
//!     .key_signature("c major")
//!     .time_signature("4/4")
//!     .parts(vec![PartSpec::full(Clef::Treble), PartSpec::full(Clef::Bass)])
//!     .output(OutputSpec::new(OutputFormat::Png, "interval_drill.png"))
//!     .build();
//!
//! let result = validate_spec(&spec);
//! assert!(result.is_ok());
//!
//! let hash = canonical_spec_hash(&spec).unwrap();
//! assert_eq!(hash.len(), 64);
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error and warning types for validation
//! - [`note`]: Closed note-domain sets (letters, accidentals, clefs)
//! - [`output`]: Output specification types (format, path)
//! - [`spec`]: Main spec type and builder
//! - [`validation`]: Spec validation functions
//! - [`hash`]: Canonical hashing and per-part seed derivation

pub mod error;
pub mod hash;
pub mod note;
pub mod output;
pub mod spec;
pub mod validation;

// Re-export commonly used types at the crate root
pub use error::{
    BackendError, ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning,
    WarningCode,
};
pub use hash::{canonical_spec_hash, derive_part_seed};
pub use note::{Accidental, Clef, NoteLetter};
pub use output::{OutputFormat, OutputSpec};
pub use spec::{EtudeSpec, EtudeSpecBuilder, PartSpec, MAX_NOTE_COUNT, SPEC_VERSION};
pub use validation::{is_safe_output_path, validate_for_engrave, validate_for_play, validate_spec};
