//! Note name and frequency conversion for the playback synthesizer.

use crate::error::{AudioError, AudioResult};

/// MIDI number of middle C; all playback pitches live in this octave.
pub const MIDDLE_C: u8 = 60;

/// Semitone offsets for letter names (C=0, D=2, E=4, F=5, G=7, A=9, B=11).
const SEMITONE_MAP: [(char, i32); 7] = [
    ('C', 0),
    ('D', 2),
    ('E', 4),
    ('F', 5),
    ('G', 7),
    ('A', 9),
    ('B', 11),
];

/// Convert a MIDI note number to frequency in Hz.
///
/// Uses the standard formula: f = 440 * 2^((n-69)/12)
/// where n is the MIDI note number and 69 is A4.
pub fn midi_to_freq(midi_note: u8) -> f64 {
    440.0 * 2.0_f64.powf((midi_note as f64 - 69.0) / 12.0)
}

/// Convert a synthesizer note name (e.g. "C", "F#", "Eb") to a MIDI note
/// number in the middle-C octave.
pub fn note_name_to_midi(name: &str) -> AudioResult<u8> {
    let unknown = || AudioError::UnknownNoteName {
        name: name.to_string(),
    };

    let mut chars = name.chars();
    let letter = chars.next().ok_or_else(unknown)?.to_ascii_uppercase();
    let offset = SEMITONE_MAP
        .iter()
        .find(|(l, _)| *l == letter)
        .map(|(_, semitone)| *semitone)
        .ok_or_else(unknown)?;

    let accidental = match chars.next() {
        None => 0,
        Some('#') => 1,
        Some('b') => -1,
        Some(_) => return Err(unknown()),
    };
    if chars.next().is_some() {
        return Err(unknown());
    }

    let midi = MIDDLE_C as i32 + offset + accidental;
    Ok(midi as u8)
}

/// Convert a synthesizer note name directly to a frequency in Hz.
pub fn note_name_to_freq(name: &str) -> AudioResult<f64> {
    Ok(midi_to_freq(note_name_to_midi(name)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midi_to_freq_reference_pitches() {
        assert!((midi_to_freq(69) - 440.0).abs() < 0.001);
        assert!((midi_to_freq(60) - 261.626).abs() < 0.01);
    }

    #[test]
    fn test_note_name_to_midi() {
        assert_eq!(note_name_to_midi("C").unwrap(), 60);
        assert_eq!(note_name_to_midi("C#").unwrap(), 61);
        assert_eq!(note_name_to_midi("Db").unwrap(), 61);
        assert_eq!(note_name_to_midi("A").unwrap(), 69);
        assert_eq!(note_name_to_midi("B").unwrap(), 71);
        assert_eq!(note_name_to_midi("Cb").unwrap(), 59);
    }

    #[test]
    fn test_unknown_names_rejected() {
        assert!(note_name_to_midi("H").is_err());
        assert!(note_name_to_midi("").is_err());
        assert!(note_name_to_midi("C##").is_err());
        assert!(note_name_to_midi("C4").is_err());
    }

    #[test]
    fn test_enharmonic_pairs_agree() {
        let sharp = note_name_to_freq("F#").unwrap();
        let flat = note_name_to_freq("Gb").unwrap();
        assert!((sharp - flat).abs() < f64::EPSILON);
    }
}
