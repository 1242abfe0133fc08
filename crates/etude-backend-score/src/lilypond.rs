//! LilyPond markup emission.
//!
//! Every beat becomes a quarter-duration token; a part becomes a
//! `\new Staff` block; a two-part etude is wrapped in a `PianoStaff`
//! score so both staves engrave as one system.

use etude_spec::Clef;

use crate::beat::Beat;

/// Every beat in an etude is a quarter.
pub(crate) const QUARTER: &str = "4";

/// LilyPond version pinned in the emitted preamble.
pub const LY_VERSION: &str = "2.10.33";

/// Renders the document preamble: the version pin plus the English
/// note-name include ("s"/"f" accidental suffixes).
pub fn render_preamble() -> String {
    format!("\\version \"{LY_VERSION}\"\n\\include \"english.ly\"\n")
}

/// Renders a key signature like `"c major"` as `\key c \major`.
///
/// The mode defaults to major when omitted.
pub fn render_key_signature(key_signature: &str) -> String {
    let mut words = key_signature.split_whitespace();
    let pitch = words.next().unwrap_or("c");
    let mode = words.next().unwrap_or("major");
    format!("\\key {pitch} \\{mode}")
}

/// Renders the space-joined beat tokens for one part.
pub fn render_beats(clef: Clef, beats: &[Beat], score_accidentals: bool) -> String {
    beats
        .iter()
        .map(|beat| beat.markup_token(clef, score_accidentals))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders one `\new Staff` block: clef, time, key, then the beats.
pub fn render_staff(
    clef: Clef,
    beats: &[Beat],
    key_signature: &str,
    time_signature: &str,
    score_accidentals: bool,
    indent: &str,
) -> String {
    let tokens = render_beats(clef, beats, score_accidentals);
    let key = render_key_signature(key_signature);
    format!(
        "{indent}\\new Staff {{\n\
         {indent}  \\clef {}\n\
         {indent}  \\time {time_signature}\n\
         {indent}  {key}\n\
         {indent}  {tokens}\n\
         {indent}}}\n",
        clef.as_str(),
    )
}

/// Assembles the complete document for a set of realized parts.
///
/// One part emits a bare staff block; two parts are grouped in a
/// `\score { \new PianoStaff << .. >> }` so the staves align.
pub fn render_document(
    parts: &[(Clef, Vec<Beat>)],
    key_signature: &str,
    time_signature: &str,
    score_accidentals: bool,
) -> String {
    let mut document = render_preamble();
    document.push('\n');

    if parts.len() == 1 {
        let (clef, beats) = &parts[0];
        document.push_str(&render_staff(
            *clef,
            beats,
            key_signature,
            time_signature,
            score_accidentals,
            "",
        ));
        return document;
    }

    document.push_str("\\score {\n  \\new PianoStaff <<\n");
    for (clef, beats) in parts {
        document.push_str(&render_staff(
            *clef,
            beats,
            key_signature,
            time_signature,
            score_accidentals,
            "    ",
        ));
    }
    document.push_str("  >>\n}\n");
    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::Note;
    use etude_spec::{Accidental, NoteLetter};
    use pretty_assertions::assert_eq;

    fn note(letter: NoteLetter, accidental: Accidental) -> Beat {
        Beat::Note(Note { letter, accidental })
    }

    #[test]
    fn test_preamble_literals() {
        let preamble = render_preamble();
        assert_eq!(preamble, "\\version \"2.10.33\"\n\\include \"english.ly\"\n");
    }

    #[test]
    fn test_key_signature_rendering() {
        assert_eq!(render_key_signature("c major"), "\\key c \\major");
        assert_eq!(render_key_signature("ef minor"), "\\key ef \\minor");
        assert_eq!(render_key_signature("g"), "\\key g \\major");
    }

    #[test]
    fn test_single_staff_document() {
        let beats = vec![
            note(NoteLetter::C, Accidental::Natural),
            note(NoteLetter::F, Accidental::Sharp),
        ];
        let document = render_document(&[(Clef::Treble, beats)], "c major", "3/4", true);
        assert_eq!(
            document,
            "\\version \"2.10.33\"\n\
             \\include \"english.ly\"\n\
             \n\
             \\new Staff {\n\
             \x20 \\clef treble\n\
             \x20 \\time 3/4\n\
             \x20 \\key c \\major\n\
             \x20 c'4 fs'4\n\
             }\n"
        );
    }

    #[test]
    fn test_piano_staff_document() {
        let treble = vec![note(NoteLetter::A, Accidental::Natural)];
        let bass = vec![note(NoteLetter::B, Accidental::Flat)];
        let document = render_document(
            &[(Clef::Treble, treble), (Clef::Bass, bass)],
            "c major",
            "4/4",
            true,
        );
        assert!(document.starts_with("\\version \"2.10.33\"\n"));
        assert!(document.contains("\\score {\n  \\new PianoStaff <<\n"));
        assert!(document.contains("    \\clef treble\n"));
        assert!(document.contains("    \\clef bass\n"));
        assert!(document.contains("    a'4\n"));
        assert!(document.contains("    bf,4\n"));
        assert!(document.ends_with("  >>\n}\n"));
    }

    #[test]
    fn test_suppressed_accidentals() {
        let beats = vec![note(NoteLetter::F, Accidental::Sharp)];
        let rendered = render_beats(Clef::Treble, &beats, false);
        assert_eq!(rendered, "f'4");
    }
}
