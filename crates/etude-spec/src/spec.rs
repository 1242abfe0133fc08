//! Main spec types.

use serde::{Deserialize, Serialize};

use crate::note::{Clef, NoteLetter};
use crate::output::OutputSpec;

/// Current spec version.
pub const SPEC_VERSION: u32 = 1;

/// Maximum number of beats one staff may carry.
pub const MAX_NOTE_COUNT: u32 = 1000;

/// Enabled generation patterns for one staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartSpec {
    /// Which staff this part occupies.
    pub clef: Clef,

    /// Whether individual notes may be generated for this part.
    #[serde(default = "default_true")]
    pub notes: bool,

    /// Whether chords may be generated for this part.
    #[serde(default)]
    pub chords: bool,
}

fn default_true() -> bool {
    true
}

impl PartSpec {
    /// Creates a notes-only part on the given clef.
    pub fn notes_only(clef: Clef) -> Self {
        Self {
            clef,
            notes: true,
            chords: false,
        }
    }

    /// Creates a part with both notes and chords enabled.
    pub fn full(clef: Clef) -> Self {
        Self {
            clef,
            notes: true,
            chords: true,
        }
    }
}

/// An etude generation spec.
///
/// This is the single configuration document for a generation run: an
/// explicit value loaded from JSON and passed into every generation call.
/// Nothing downstream reads mutable process-wide state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EtudeSpec {
    /// Schema version; must be 1.
    pub spec_version: u32,

    /// Stable identifier for the etude.
    /// Format: `[a-z][a-z0-9_-]{2,63}`
    pub etude_id: String,

    /// RNG seed for deterministic generation.
    pub seed: u32,

    /// Number of beats to generate per staff.
    pub note_count: u32,

    /// Key signature as free text, e.g. "c major".
    #[serde(default = "default_key_signature")]
    pub key_signature: String,

    /// Time signature, e.g. "3/4".
    #[serde(default = "default_time_signature")]
    pub time_signature: String,

    /// Note letters eligible for random selection.
    #[serde(default = "default_letters")]
    pub letters: Vec<NoteLetter>,

    /// Whether sharps may be drawn.
    #[serde(default = "default_true")]
    pub sharps: bool,

    /// Whether flats may be drawn.
    #[serde(default = "default_true")]
    pub flats: bool,

    /// Whether drawn accidentals are written into the score markup.
    ///
    /// When `false`, a drawn sharp or flat still sounds during playback
    /// but the score shows the plain letter (legacy plain-note rendering).
    /// Validation raises W003 so the mismatch is never silent.
    #[serde(default = "default_true")]
    pub score_accidentals: bool,

    /// Staves to generate: one for a single-staff melody, two (treble +
    /// bass) for a piano score.
    pub parts: Vec<PartSpec>,

    /// Human-readable description of the etude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The rendered artifact to produce.
    pub output: OutputSpec,
}

fn default_key_signature() -> String {
    "c major".to_string()
}

fn default_time_signature() -> String {
    "3/4".to_string()
}

fn default_letters() -> Vec<NoteLetter> {
    NoteLetter::all().to_vec()
}

impl EtudeSpec {
    /// Creates a new spec builder.
    pub fn builder(etude_id: impl Into<String>) -> EtudeSpecBuilder {
        EtudeSpecBuilder::new(etude_id)
    }

    /// Parses a spec from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the spec to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serializes the spec to a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Returns the part generated for the given clef, if any.
    pub fn part(&self, clef: Clef) -> Option<&PartSpec> {
        self.parts.iter().find(|p| p.clef == clef)
    }

    /// Returns true if this spec produces a two-staff piano score.
    pub fn is_piano_score(&self) -> bool {
        self.parts.len() == 2
    }
}

/// Builder for [`EtudeSpec`].
#[derive(Debug, Clone)]
pub struct EtudeSpecBuilder {
    spec: EtudeSpec,
}

impl EtudeSpecBuilder {
    /// Creates a new builder with the standard drill defaults.
    pub fn new(etude_id: impl Into<String>) -> Self {
        Self {
            spec: EtudeSpec {
                spec_version: SPEC_VERSION,
                etude_id: etude_id.into(),
                seed: 0,
                note_count: 24,
                key_signature: default_key_signature(),
                time_signature: default_time_signature(),
                letters: default_letters(),
                sharps: true,
                flats: true,
                score_accidentals: true,
                parts: vec![PartSpec::notes_only(Clef::Treble)],
                description: None,
                output: OutputSpec::new(crate::output::OutputFormat::Png, "etude.png"),
            },
        }
    }

    /// Sets the seed.
    pub fn seed(mut self, seed: u32) -> Self {
        self.spec.seed = seed;
        self
    }

    /// Sets the note count.
    pub fn note_count(mut self, count: u32) -> Self {
        self.spec.note_count = count;
        self
    }

    /// Sets the key signature.
    pub fn key_signature(mut self, key: impl Into<String>) -> Self {
        self.spec.key_signature = key.into();
        self
    }

    /// Sets the time signature.
    pub fn time_signature(mut self, time: impl Into<String>) -> Self {
        self.spec.time_signature = time.into();
        self
    }

    /// Sets the enabled letters.
    pub fn letters(mut self, letters: Vec<NoteLetter>) -> Self {
        self.spec.letters = letters;
        self
    }

    /// Sets the accidental enable flags.
    pub fn accidentals(mut self, sharps: bool, flats: bool) -> Self {
        self.spec.sharps = sharps;
        self.spec.flats = flats;
        self
    }

    /// Sets whether drawn accidentals are written into the score.
    pub fn score_accidentals(mut self, enabled: bool) -> Self {
        self.spec.score_accidentals = enabled;
        self
    }

    /// Replaces the part list.
    pub fn parts(mut self, parts: Vec<PartSpec>) -> Self {
        self.spec.parts = parts;
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.spec.description = Some(description.into());
        self
    }

    /// Sets the output artifact.
    pub fn output(mut self, output: OutputSpec) -> Self {
        self.spec.output = output;
        self
    }

    /// Builds the spec.
    pub fn build(self) -> EtudeSpec {
        self.spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder_defaults() {
        let spec = EtudeSpec::builder("morning-drill-01").build();
        assert_eq!(spec.spec_version, SPEC_VERSION);
        assert_eq!(spec.etude_id, "morning-drill-01");
        assert_eq!(spec.key_signature, "c major");
        assert_eq!(spec.time_signature, "3/4");
        assert_eq!(spec.letters.len(), 7);
        assert!(spec.sharps && spec.flats && spec.score_accidentals);
        assert_eq!(spec.parts, vec![PartSpec::notes_only(Clef::Treble)]);
    }

    #[test]
    fn test_part_lookup() {
        let spec = EtudeSpec::builder("piano-etude-01")
            .parts(vec![
                PartSpec::notes_only(Clef::Treble),
                PartSpec::full(Clef::Bass),
            ])
            .build();
        assert!(spec.is_piano_score());
        assert_eq!(spec.part(Clef::Bass).unwrap().chords, true);
        assert_eq!(spec.part(Clef::Treble).unwrap().chords, false);
    }

    #[test]
    fn test_json_round_trip() {
        let spec = EtudeSpec::builder("round-trip-01")
            .seed(999)
            .note_count(12)
            .accidentals(true, false)
            .description("round trip test")
            .output(OutputSpec::new(OutputFormat::Pdf, "sheets/round_trip.pdf"))
            .build();

        let json = spec.to_json_pretty().unwrap();
        let parsed = EtudeSpec::from_json(&json).unwrap();
        assert_eq!(spec, parsed);
    }

    #[test]
    fn test_json_defaults_applied() {
        let json = r#"{
            "spec_version": 1,
            "etude_id": "minimal-01",
            "seed": 7,
            "note_count": 8,
            "parts": [{"clef": "treble"}],
            "output": {"format": "png", "path": "etude.png"}
        }"#;

        let spec = EtudeSpec::from_json(json).unwrap();
        assert_eq!(spec.letters.len(), 7);
        assert!(spec.sharps && spec.flats);
        assert!(spec.parts[0].notes);
        assert!(!spec.parts[0].chords);
        assert_eq!(spec.time_signature, "3/4");
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let json = r#"{
            "spec_version": 1,
            "etude_id": "bad-01",
            "seed": 7,
            "note_count": 8,
            "tempo": 120,
            "parts": [{"clef": "treble"}],
            "output": {"format": "png", "path": "etude.png"}
        }"#;

        assert!(EtudeSpec::from_json(json).is_err());
    }
}
