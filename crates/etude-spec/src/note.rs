//! Closed note-domain sets shared between the spec and the backends.

use serde::{Deserialize, Serialize};

/// The seven natural note letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteLetter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl NoteLetter {
    /// Returns all seven letters in scale order starting at C.
    pub fn all() -> &'static [NoteLetter] {
        &[
            NoteLetter::C,
            NoteLetter::D,
            NoteLetter::E,
            NoteLetter::F,
            NoteLetter::G,
            NoteLetter::A,
            NoteLetter::B,
        ]
    }

    /// Index of this letter in the C..B cycle.
    pub fn index(&self) -> usize {
        match self {
            NoteLetter::C => 0,
            NoteLetter::D => 1,
            NoteLetter::E => 2,
            NoteLetter::F => 3,
            NoteLetter::G => 4,
            NoteLetter::A => 5,
            NoteLetter::B => 6,
        }
    }

    /// The letter `steps` scale degrees above this one, wrapping at B.
    pub fn step(&self, steps: usize) -> NoteLetter {
        NoteLetter::all()[(self.index() + steps) % 7]
    }

    /// Lowercase letter name as used by the score markup target.
    pub fn markup_name(&self) -> &'static str {
        match self {
            NoteLetter::C => "c",
            NoteLetter::D => "d",
            NoteLetter::E => "e",
            NoteLetter::F => "f",
            NoteLetter::G => "g",
            NoteLetter::A => "a",
            NoteLetter::B => "b",
        }
    }

    /// Uppercase letter name as used by the sound-engine target.
    pub fn synth_name(&self) -> &'static str {
        match self {
            NoteLetter::C => "C",
            NoteLetter::D => "D",
            NoteLetter::E => "E",
            NoteLetter::F => "F",
            NoteLetter::G => "G",
            NoteLetter::A => "A",
            NoteLetter::B => "B",
        }
    }
}

impl std::fmt::Display for NoteLetter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.synth_name())
    }
}

/// Pitch modifier applied to a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accidental {
    Natural,
    Sharp,
    Flat,
}

impl Accidental {
    /// All three accidentals, in draw order.
    pub fn all() -> &'static [Accidental] {
        &[Accidental::Natural, Accidental::Sharp, Accidental::Flat]
    }

    /// Suffix in the score markup target (english.ly spellings).
    pub fn markup_suffix(&self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "s",
            Accidental::Flat => "f",
        }
    }

    /// Suffix in the sound-engine target.
    pub fn synth_suffix(&self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
        }
    }

    /// Semitone offset relative to the natural letter.
    pub fn semitone_offset(&self) -> i8 {
        match self {
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
        }
    }
}

/// One staff of the score.
///
/// Each clef carries its own octave-marker conventions: treble individual
/// notes are raised one octave (`'`), treble chords sit in the default
/// octave, and everything on the bass staff is lowered (`,`). The asymmetry
/// is deliberate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Clef {
    Treble,
    Bass,
}

impl Clef {
    /// Returns the clef name as used in `\clef` directives.
    pub fn as_str(&self) -> &'static str {
        match self {
            Clef::Treble => "treble",
            Clef::Bass => "bass",
        }
    }

    /// Octave marker appended to individual note tokens on this staff.
    pub fn note_marker(&self) -> &'static str {
        match self {
            Clef::Treble => "'",
            Clef::Bass => ",",
        }
    }

    /// Octave marker appended to each pitch inside a block chord.
    pub fn chord_marker(&self) -> &'static str {
        match self {
            Clef::Treble => "",
            Clef::Bass => ",",
        }
    }
}

impl std::fmt::Display for Clef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_step_wraps() {
        assert_eq!(NoteLetter::C.step(2), NoteLetter::E);
        assert_eq!(NoteLetter::A.step(2), NoteLetter::C);
        assert_eq!(NoteLetter::B.step(4), NoteLetter::F);
        assert_eq!(NoteLetter::G.step(0), NoteLetter::G);
    }

    #[test]
    fn test_markup_names() {
        assert_eq!(NoteLetter::C.markup_name(), "c");
        assert_eq!(NoteLetter::B.markup_name(), "b");
        assert_eq!(Accidental::Sharp.markup_suffix(), "s");
        assert_eq!(Accidental::Flat.markup_suffix(), "f");
        assert_eq!(Accidental::Natural.markup_suffix(), "");
    }

    #[test]
    fn test_synth_names() {
        assert_eq!(NoteLetter::F.synth_name(), "F");
        assert_eq!(Accidental::Sharp.synth_suffix(), "#");
        assert_eq!(Accidental::Flat.synth_suffix(), "b");
    }

    #[test]
    fn test_clef_markers() {
        assert_eq!(Clef::Treble.note_marker(), "'");
        assert_eq!(Clef::Treble.chord_marker(), "");
        assert_eq!(Clef::Bass.note_marker(), ",");
        assert_eq!(Clef::Bass.chord_marker(), ",");
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&NoteLetter::A).unwrap();
        assert_eq!(json, "\"a\"");
        let back: NoteLetter = serde_json::from_str(&json).unwrap();
        assert_eq!(back, NoteLetter::A);

        let json = serde_json::to_string(&Clef::Bass).unwrap();
        assert_eq!(json, "\"bass\"");
    }
}
