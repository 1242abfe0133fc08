//! The beat generator: one token per time step, chord or individual note.

use etude_spec::{Clef, PartSpec};
use rand::Rng;

use crate::chord::Chord;
use crate::generate::GenerateError;
use crate::lilypond::QUARTER;
use crate::note::{Note, NoteFilter};

/// Probability, in percent, that an eligible time step becomes a chord.
/// Fixed design parameter, not user-configurable.
pub const CHORD_PERCENT: u32 = 20;

/// One rendered time step: either an individual note or a block chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Beat {
    Note(Note),
    Chord(Chord),
}

impl Beat {
    /// Returns true if this beat is a chord.
    pub fn is_chord(&self) -> bool {
        matches!(self, Beat::Chord(_))
    }

    /// Renders this beat as a markup token using the clef's octave-marker
    /// conventions.
    pub fn markup_token(&self, clef: Clef, score_accidentals: bool) -> String {
        match self {
            Beat::Note(note) => format!(
                "{}{}{}",
                note.markup_pitch(score_accidentals),
                clef.note_marker(),
                QUARTER
            ),
            Beat::Chord(chord) => chord.markup_token(clef.chord_marker(), score_accidentals),
        }
    }

    /// The sound-engine note names sounded on this beat.
    pub fn synth_names(&self) -> Vec<String> {
        match self {
            Beat::Note(note) => vec![note.synth_name()],
            Beat::Chord(chord) => chord.synth_names(),
        }
    }
}

/// Generates one beat for the given part.
///
/// An eligible step becomes a chord on a draw below [`CHORD_PERCENT`], or
/// unconditionally when individual notes are disabled; otherwise it becomes
/// an individual note. A part with neither pattern enabled fails with a
/// configuration error before anything is drawn.
pub fn generate_beat<R: Rng>(
    rng: &mut R,
    part: &PartSpec,
    filter: &NoteFilter,
) -> Result<Beat, GenerateError> {
    if !part.notes && !part.chords {
        return Err(GenerateError::NoPatternEnabled { clef: part.clef });
    }

    let draw = rng.gen_range(0..100u32);
    if part.chords && (draw < CHORD_PERCENT || !part.notes) {
        Ok(Beat::Chord(Chord::generate(rng, filter)?))
    } else {
        Ok(Beat::Note(Note::generate(rng, filter)?))
    }
}
