//! The melody generator: a memoryless sequence of independent beats.

use etude_spec::PartSpec;
use rand::Rng;

use crate::beat::{generate_beat, Beat};
use crate::generate::GenerateError;
use crate::note::NoteFilter;

/// Generates `count` independent beats for one part.
///
/// There is no memory between beats; each call yields a fresh random
/// realization of the sequence.
pub fn generate_melody<R: Rng>(
    rng: &mut R,
    count: u32,
    part: &PartSpec,
    filter: &NoteFilter,
) -> Result<Vec<Beat>, GenerateError> {
    let mut beats = Vec::with_capacity(count as usize);
    for _ in 0..count {
        beats.push(generate_beat(rng, part, filter)?);
    }
    Ok(beats)
}
