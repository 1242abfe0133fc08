//! Top-level etude realization: spec in, markup document out.

use std::fs;
use std::path::{Path, PathBuf};

use etude_spec::{
    canonical_spec_hash, derive_part_seed, validate_spec, BackendError, Clef, EtudeSpec,
    SpecError, ValidationError,
};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use thiserror::Error;

use crate::beat::Beat;
use crate::lilypond::render_document;
use crate::melody::generate_melody;
use crate::note::NoteFilter;

/// Fixed name of the intermediate markup document.
pub const DOCUMENT_FILE: &str = "etude.ly";

/// Seed-derivation salt for the melody stream.
const MELODY_SALT: &str = "melody";

/// Errors from score generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The letter selection resolved to the empty set.
    #[error("letter selection is empty; enable at least one letter")]
    EmptyLetterSelection,

    /// A part has neither individual notes nor chords enabled.
    #[error("{clef} part has neither notes nor chords enabled")]
    NoPatternEnabled { clef: Clef },

    /// The spec failed validation; nothing was generated or written.
    #[error("spec validation failed with {} error(s)", errors.len())]
    SpecRejected { errors: Vec<ValidationError> },

    /// Spec hashing failed.
    #[error("failed to hash spec: {0}")]
    Hash(#[from] SpecError),

    /// I/O error writing the document.
    #[error("failed to write document: {0}")]
    Io(#[from] std::io::Error),
}

impl BackendError for GenerateError {
    fn code(&self) -> &'static str {
        match self {
            GenerateError::EmptyLetterSelection => "SCORE_001",
            GenerateError::NoPatternEnabled { .. } => "SCORE_002",
            GenerateError::SpecRejected { .. } => "SCORE_003",
            GenerateError::Hash(_) => "SCORE_004",
            GenerateError::Io(_) => "SCORE_005",
        }
    }

    fn category(&self) -> &'static str {
        "score"
    }
}

/// The realized beats of one part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartMelody {
    pub clef: Clef,
    pub beats: Vec<Beat>,
}

/// A fully realized etude: the markup document plus the per-part beats
/// the sound engine renders from.
#[derive(Debug, Clone)]
pub struct EtudeRealization {
    /// Canonical hash of the spec this realization was derived from.
    pub spec_hash: String,
    /// The complete markup document.
    pub document: String,
    /// Realized beats, one entry per part in spec order.
    pub parts: Vec<PartMelody>,
}

/// Realizes an etude from its spec.
///
/// Validation runs first; a rejected spec produces no beats and no
/// document. Each part draws from its own seeded stream, so the treble
/// and bass melodies of a piano score are independent but individually
/// reproducible.
pub fn generate_etude(spec: &EtudeSpec) -> Result<EtudeRealization, GenerateError> {
    let validation = validate_spec(spec);
    if !validation.is_ok() {
        return Err(GenerateError::SpecRejected {
            errors: validation.errors,
        });
    }

    let spec_hash = canonical_spec_hash(spec)?;
    let filter = NoteFilter::from_spec(spec);

    let mut parts = Vec::with_capacity(spec.parts.len());
    for part in &spec.parts {
        let mut rng = Pcg32::seed_from_u64(derive_part_seed(spec.seed, part.clef, MELODY_SALT));
        let beats = generate_melody(&mut rng, spec.note_count, part, &filter)?;
        parts.push(PartMelody {
            clef: part.clef,
            beats,
        });
    }

    let staves: Vec<(Clef, Vec<Beat>)> = parts
        .iter()
        .map(|part| (part.clef, part.beats.clone()))
        .collect();
    let document = render_document(
        &staves,
        &spec.key_signature,
        &spec.time_signature,
        spec.score_accidentals,
    );

    Ok(EtudeRealization {
        spec_hash,
        document,
        parts,
    })
}

/// Writes the realized document to `etude.ly` under `out_root`,
/// creating the directory if needed. Returns the document path.
pub fn write_document(
    realization: &EtudeRealization,
    out_root: &Path,
) -> Result<PathBuf, GenerateError> {
    fs::create_dir_all(out_root)?;
    let path = out_root.join(DOCUMENT_FILE);
    fs::write(&path, &realization.document)?;
    Ok(path)
}
