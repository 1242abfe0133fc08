//! The chord model: a block chord derived from a random root note.

use rand::Rng;

use crate::generate::GenerateError;
use crate::lilypond::QUARTER;
use crate::note::{Note, NoteFilter};

/// A block chord built on a root note.
///
/// The triad is completed with the letter third and fifth above the root,
/// left natural; only the root carries the drawn accidental.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chord {
    pub root: Note,
}

impl Chord {
    /// Draws a chord whose root comes from the pitch model.
    pub fn generate<R: Rng>(rng: &mut R, filter: &NoteFilter) -> Result<Chord, GenerateError> {
        Ok(Chord {
            root: Note::generate(rng, filter)?,
        })
    }

    /// The three notes of the triad, root first.
    pub fn notes(&self) -> [Note; 3] {
        [
            self.root,
            Note::natural(self.root.letter.step(2)),
            Note::natural(self.root.letter.step(4)),
        ]
    }

    /// Renders the chord as a markup token, e.g. `<c e g>4`.
    ///
    /// `octave_marker` is appended to every pitch in the chord: empty for
    /// the treble default octave, a lower marker for the bass staff.
    pub fn markup_token(&self, octave_marker: &str, score_accidentals: bool) -> String {
        let pitches: Vec<String> = self
            .notes()
            .iter()
            .map(|n| format!("{}{}", n.markup_pitch(score_accidentals), octave_marker))
            .collect();
        format!("<{}>{}", pitches.join(" "), QUARTER)
    }

    /// The sound-engine note names of the triad.
    pub fn synth_names(&self) -> Vec<String> {
        self.notes().iter().map(|n| n.synth_name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use etude_spec::{Accidental, NoteLetter};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn chord_on(letter: NoteLetter, accidental: Accidental) -> Chord {
        Chord {
            root: Note { letter, accidental },
        }
    }

    #[test]
    fn test_triad_letters() {
        let chord = chord_on(NoteLetter::C, Accidental::Natural);
        let letters: Vec<_> = chord.notes().iter().map(|n| n.letter).collect();
        assert_eq!(letters, vec![NoteLetter::C, NoteLetter::E, NoteLetter::G]);

        // Wraps past B
        let chord = chord_on(NoteLetter::A, Accidental::Natural);
        let letters: Vec<_> = chord.notes().iter().map(|n| n.letter).collect();
        assert_eq!(letters, vec![NoteLetter::A, NoteLetter::C, NoteLetter::E]);
    }

    #[test]
    fn test_markup_token_treble() {
        let chord = chord_on(NoteLetter::C, Accidental::Natural);
        assert_eq!(chord.markup_token("", true), "<c e g>4");
    }

    #[test]
    fn test_markup_token_bass_lowered() {
        let chord = chord_on(NoteLetter::D, Accidental::Natural);
        assert_eq!(chord.markup_token(",", true), "<d, f, a,>4");
    }

    #[test]
    fn test_root_accidental_only() {
        let chord = chord_on(NoteLetter::C, Accidental::Sharp);
        assert_eq!(chord.markup_token("", true), "<cs e g>4");
        // Suppressed score accidentals drop the suffix
        assert_eq!(chord.markup_token("", false), "<c e g>4");
    }

    #[test]
    fn test_synth_names() {
        let chord = chord_on(NoteLetter::B, Accidental::Flat);
        assert_eq!(chord.synth_names(), vec!["Bb", "D", "F"]);
    }

    #[test]
    fn test_generate_uses_filter() {
        let filter = NoteFilter {
            letters: vec![NoteLetter::E],
            sharps: false,
            flats: false,
        };
        let mut rng = Pcg32::seed_from_u64(9);
        for _ in 0..50 {
            let chord = Chord::generate(&mut rng, &filter).unwrap();
            assert_eq!(chord.root.letter, NoteLetter::E);
            assert_eq!(chord.root.accidental, Accidental::Natural);
        }
    }
}
