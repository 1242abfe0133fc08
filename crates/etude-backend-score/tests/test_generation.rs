//! End-to-end tests for etude realization.
//!
//! These tests exercise the whole pipeline from spec to markup document:
//! determinism, token shape, filter behavior, and the chord/note mix.

use etude_backend_score::generate::{generate_etude, write_document, GenerateError};
use etude_backend_score::{Beat, CHORD_PERCENT};
use etude_spec::{Clef, EtudeSpec, NoteLetter, OutputFormat, OutputSpec, PartSpec};
use regex::Regex;

fn single_staff_spec() -> EtudeSpec {
    EtudeSpec::builder("sight-reading-drill")
        .seed(42)
        .note_count(4)
        .key_signature("c major")
        .time_signature("4/4")
        .parts(vec![PartSpec::notes_only(Clef::Treble)])
        .output(OutputSpec {
            format: OutputFormat::Png,
            path: "drill.png".to_string(),
        })
        .build()
}

#[test]
fn test_single_staff_scenario() {
    let realization = generate_etude(&single_staff_spec()).unwrap();
    let document = &realization.document;

    assert!(document.starts_with("\\version \"2.10.33\"\n\\include \"english.ly\"\n"));
    assert_eq!(document.matches("\\new Staff {").count(), 1);
    assert!(document.contains("\\clef treble"));
    assert!(document.contains("\\time 4/4"));
    assert!(document.contains("\\key c \\major"));

    // Exactly four quarter-note tokens on the staff line.
    let token = Regex::new(r"^[a-g](s|f)?'4$").unwrap();
    let line = document
        .lines()
        .find(|line| token.is_match(line.trim().split(' ').next().unwrap_or("")))
        .expect("no beat line in document");
    let tokens: Vec<&str> = line.trim().split(' ').collect();
    assert_eq!(tokens.len(), 4);
    for t in &tokens {
        assert!(token.is_match(t), "malformed token {t:?}");
    }
}

#[test]
fn test_piano_staff_scenario() {
    let spec = EtudeSpec::builder("piano-drill")
        .seed(3)
        .note_count(8)
        .parts(vec![PartSpec::full(Clef::Treble), PartSpec::full(Clef::Bass)])
        .build();
    let realization = generate_etude(&spec).unwrap();

    assert!(realization.document.contains("\\new PianoStaff <<"));
    assert!(realization.document.contains("\\clef bass"));
    assert_eq!(realization.parts.len(), 2);
    assert_eq!(realization.parts[0].clef, Clef::Treble);
    assert_eq!(realization.parts[1].clef, Clef::Bass);
}

#[test]
fn test_letter_filter_respected_end_to_end() {
    let spec = EtudeSpec::builder("two-letter-drill")
        .seed(9)
        .note_count(200)
        .letters(vec![NoteLetter::C, NoteLetter::G])
        .accidentals(false, false)
        .parts(vec![PartSpec::notes_only(Clef::Treble)])
        .build();
    let realization = generate_etude(&spec).unwrap();

    for beat in &realization.parts[0].beats {
        match beat {
            Beat::Note(note) => {
                assert!(matches!(note.letter, NoteLetter::C | NoteLetter::G));
                assert_eq!(note.accidental, etude_spec::Accidental::Natural);
            }
            Beat::Chord(_) => panic!("notes-only part produced a chord"),
        }
    }
}

#[test]
fn test_chords_only_part_yields_only_chords() {
    let spec = EtudeSpec::builder("chord-drill")
        .seed(5)
        .note_count(50)
        .parts(vec![PartSpec {
            clef: Clef::Bass,
            notes: false,
            chords: true,
        }])
        .build();
    let realization = generate_etude(&spec).unwrap();
    assert!(realization.parts[0].beats.iter().all(Beat::is_chord));
    assert!(realization.document.contains('<'));
}

#[test]
fn test_mixed_part_chord_rate_near_one_fifth() {
    let spec = EtudeSpec::builder("mixed-drill")
        .seed(17)
        .note_count(1000)
        .parts(vec![PartSpec::full(Clef::Treble)])
        .build();
    let realization = generate_etude(&spec).unwrap();
    let chords = realization.parts[0]
        .beats
        .iter()
        .filter(|b| b.is_chord())
        .count();

    // 1000 draws at CHORD_PERCENT: generous band around the expectation.
    let expected = 1000 * CHORD_PERCENT as usize / 100;
    assert!(
        chords > expected / 2 && chords < expected * 2,
        "chord count {chords} far from expected {expected}"
    );
}

#[test]
fn test_rejected_spec_writes_nothing() {
    let spec = EtudeSpec::builder("broken-drill")
        .note_count(4)
        .parts(vec![PartSpec {
            clef: Clef::Treble,
            notes: false,
            chords: false,
        }])
        .build();

    let err = generate_etude(&spec).unwrap_err();
    assert!(matches!(err, GenerateError::SpecRejected { .. }));

    let dir = tempfile::tempdir().unwrap();
    assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
}

#[test]
fn test_document_round_trips_through_disk() {
    let realization = generate_etude(&single_staff_spec()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = write_document(&realization, dir.path()).unwrap();
    let on_disk = std::fs::read_to_string(&path).unwrap();
    assert_eq!(on_disk, realization.document);
}
