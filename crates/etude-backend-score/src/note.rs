//! The pitch model: random note selection and dual-target rendering.

use etude_spec::{Accidental, EtudeSpec, NoteLetter};
use rand::Rng;

use crate::generate::GenerateError;

/// Selection constraints for random note generation, extracted once from
/// the spec instead of re-read per draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFilter {
    /// Letters eligible for selection. Must be non-empty.
    pub letters: Vec<NoteLetter>,
    /// Whether a drawn sharp survives (otherwise downgraded to natural).
    pub sharps: bool,
    /// Whether a drawn flat survives (otherwise downgraded to natural).
    pub flats: bool,
}

impl NoteFilter {
    /// Builds the filter from a spec.
    pub fn from_spec(spec: &EtudeSpec) -> Self {
        Self {
            letters: spec.letters.clone(),
            sharps: spec.sharps,
            flats: spec.flats,
        }
    }

    /// A filter accepting every letter and accidental.
    pub fn permissive() -> Self {
        Self {
            letters: NoteLetter::all().to_vec(),
            sharps: true,
            flats: true,
        }
    }
}

/// A concrete pitch: letter plus accidental. Value type, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    pub letter: NoteLetter,
    pub accidental: Accidental,
}

impl Note {
    /// Draws a random note under the given filter.
    ///
    /// The letter is uniform over the enabled subset. The accidental is
    /// uniform over all three values and then downgraded to natural when
    /// its enable flag is off, so naturals are over-represented when a
    /// flag is off rather than the remaining accidentals being
    /// re-weighted.
    pub fn generate<R: Rng>(rng: &mut R, filter: &NoteFilter) -> Result<Note, GenerateError> {
        if filter.letters.is_empty() {
            return Err(GenerateError::EmptyLetterSelection);
        }
        let letter = filter.letters[rng.gen_range(0..filter.letters.len())];

        let drawn = Accidental::all()[rng.gen_range(0..3)];
        let accidental = match drawn {
            Accidental::Sharp if !filter.sharps => Accidental::Natural,
            Accidental::Flat if !filter.flats => Accidental::Natural,
            other => other,
        };

        Ok(Note { letter, accidental })
    }

    /// Creates a natural note.
    pub fn natural(letter: NoteLetter) -> Note {
        Note {
            letter,
            accidental: Accidental::Natural,
        }
    }

    /// Renders the bare pitch for the score markup target (english.ly
    /// spellings: `cs`, `ef`, ...).
    ///
    /// With `score_accidentals` off the accidental suffix is omitted even
    /// when one was drawn, reproducing the legacy plain-note variant.
    pub fn markup_pitch(&self, score_accidentals: bool) -> String {
        let mut pitch = self.letter.markup_name().to_string();
        if score_accidentals {
            pitch.push_str(self.accidental.markup_suffix());
        }
        pitch
    }

    /// Renders the note name for the sound-engine target (`C#`, `Eb`, ...).
    pub fn synth_name(&self) -> String {
        format!(
            "{}{}",
            self.letter.synth_name(),
            self.accidental.synth_suffix()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::collections::HashSet;

    #[test]
    fn test_generate_respects_letter_subset() {
        let filter = NoteFilter {
            letters: vec![NoteLetter::C, NoteLetter::G],
            sharps: true,
            flats: true,
        };
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..200 {
            let note = Note::generate(&mut rng, &filter).unwrap();
            assert!(filter.letters.contains(&note.letter));
        }
    }

    #[test]
    fn test_generate_covers_enabled_letters() {
        let filter = NoteFilter::permissive();
        let mut rng = Pcg32::seed_from_u64(2);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            seen.insert(Note::generate(&mut rng, &filter).unwrap().letter);
        }
        assert_eq!(seen.len(), 7, "all seven letters should appear");
    }

    #[test]
    fn test_disabled_sharps_downgrade_to_natural() {
        let filter = NoteFilter {
            letters: NoteLetter::all().to_vec(),
            sharps: false,
            flats: true,
        };
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..300 {
            let note = Note::generate(&mut rng, &filter).unwrap();
            assert_ne!(note.accidental, Accidental::Sharp);
        }
    }

    #[test]
    fn test_disabled_flats_downgrade_to_natural() {
        let filter = NoteFilter {
            letters: NoteLetter::all().to_vec(),
            sharps: true,
            flats: false,
        };
        let mut rng = Pcg32::seed_from_u64(4);
        for _ in 0..300 {
            let note = Note::generate(&mut rng, &filter).unwrap();
            assert_ne!(note.accidental, Accidental::Flat);
        }
    }

    #[test]
    fn test_empty_selection_fails() {
        let filter = NoteFilter {
            letters: vec![],
            sharps: true,
            flats: true,
        };
        let mut rng = Pcg32::seed_from_u64(5);
        assert!(matches!(
            Note::generate(&mut rng, &filter),
            Err(GenerateError::EmptyLetterSelection)
        ));
    }

    #[test]
    fn test_markup_pitch() {
        let note = Note {
            letter: NoteLetter::C,
            accidental: Accidental::Sharp,
        };
        assert_eq!(note.markup_pitch(true), "cs");
        assert_eq!(note.markup_pitch(false), "c");

        let note = Note {
            letter: NoteLetter::E,
            accidental: Accidental::Flat,
        };
        assert_eq!(note.markup_pitch(true), "ef");

        let note = Note::natural(NoteLetter::A);
        assert_eq!(note.markup_pitch(true), "a");
    }

    #[test]
    fn test_synth_name() {
        let note = Note {
            letter: NoteLetter::F,
            accidental: Accidental::Sharp,
        };
        assert_eq!(note.synth_name(), "F#");

        let note = Note {
            letter: NoteLetter::B,
            accidental: Accidental::Flat,
        };
        assert_eq!(note.synth_name(), "Bb");

        assert_eq!(Note::natural(NoteLetter::D).synth_name(), "D");
    }
}
