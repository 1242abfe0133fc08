//! Playback rendering: beats in, 16-bit mono WAV out.
//!
//! Each beat sounds for a fixed third of a second, matching the pace the
//! sheet is meant to be read at. Chord beats mix their three voices at
//! equal amplitude; a short linear fade at each beat boundary keeps the
//! transitions click-free.

use std::f64::consts::TAU;
use std::path::Path;

use etude_backend_score::{EtudeRealization, PartMelody};

use crate::error::{AudioError, AudioResult};
use crate::freq::note_name_to_freq;

/// Playback duration of one beat, in milliseconds.
pub const NOTE_DURATION_MS: f64 = 1000.0 / 3.0;

/// Output sample rate in Hz.
pub const SAMPLE_RATE: u32 = 44_100;

/// Master output level, leaving headroom below full scale.
const LEVEL: f64 = 0.8;

/// Linear fade applied at the start and end of each beat, in milliseconds.
const FADE_MS: f64 = 5.0;

fn beat_samples() -> usize {
    (SAMPLE_RATE as f64 * NOTE_DURATION_MS / 1000.0) as usize
}

fn fade_samples() -> usize {
    (SAMPLE_RATE as f64 * FADE_MS / 1000.0) as usize
}

/// Renders one part into a sample buffer.
fn render_part(part: &PartMelody) -> AudioResult<Vec<f64>> {
    let beat_len = beat_samples();
    let fade_len = fade_samples();
    let mut samples = Vec::with_capacity(part.beats.len() * beat_len);

    for beat in &part.beats {
        let names = beat.synth_names();
        let mut freqs = Vec::with_capacity(names.len());
        for name in &names {
            freqs.push(note_name_to_freq(name)?);
        }

        let voice_level = LEVEL / freqs.len() as f64;
        for i in 0..beat_len {
            let t = i as f64 / SAMPLE_RATE as f64;
            let mut sample = 0.0;
            for freq in &freqs {
                sample += (TAU * freq * t).sin() * voice_level;
            }

            // Linear envelope at the beat edges.
            let fade = if i < fade_len {
                i as f64 / fade_len as f64
            } else if i >= beat_len - fade_len {
                (beat_len - i) as f64 / fade_len as f64
            } else {
                1.0
            };

            samples.push(sample * fade);
        }
    }

    Ok(samples)
}

/// Renders a realization into a single mono sample buffer.
///
/// Parts sound simultaneously, mixed at equal level, the way both hands
/// of a piano score play together.
pub fn render_samples(realization: &EtudeRealization) -> AudioResult<Vec<f64>> {
    if realization.parts.is_empty() {
        return Err(AudioError::NoParts);
    }

    let buffers: Vec<Vec<f64>> = realization
        .parts
        .iter()
        .map(render_part)
        .collect::<AudioResult<_>>()?;

    let len = buffers.iter().map(Vec::len).max().unwrap_or(0);
    let part_level = 1.0 / buffers.len() as f64;

    let mut mixed = vec![0.0; len];
    for buffer in &buffers {
        for (out, sample) in mixed.iter_mut().zip(buffer) {
            *out += sample * part_level;
        }
    }
    Ok(mixed)
}

/// Renders a realization and writes it as a 16-bit mono WAV file.
pub fn render_to_wav(realization: &EtudeRealization, path: &Path) -> AudioResult<()> {
    let samples = render_samples(realization)?;

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for sample in samples {
        let clipped = sample.clamp(-1.0, 1.0);
        writer.write_sample((clipped * 32767.0).round() as i16)?;
    }
    writer.finalize()?;
    Ok(())
}
