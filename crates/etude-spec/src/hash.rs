//! Canonical hashing and seed derivation.
//!
//! The determinism policy: the same spec always hashes to the same value,
//! and every staff draws from its own RNG stream derived from the spec
//! seed, so adding a bass part never perturbs the treble melody.

use crate::error::SpecError;
use crate::note::Clef;
use crate::spec::EtudeSpec;

/// Computes the canonical BLAKE3 hash of a spec.
///
/// The spec is serialized to JSON, canonicalized (sorted object keys, no
/// whitespace), and hashed. Returns a 64-character lowercase hex string.
pub fn canonical_spec_hash(spec: &EtudeSpec) -> Result<String, SpecError> {
    let value = spec.to_value()?;
    let canonical = canonicalize_value(&value);
    let hash = blake3::hash(canonical.as_bytes());
    Ok(hash.to_hex().to_string())
}

/// Derives the RNG seed for one staff from the spec seed.
///
/// The derivation hashes `seed || clef-name || salt` with BLAKE3 and folds
/// the first four bytes into a 64-bit PCG seed, mirroring how the seed is
/// consumed downstream.
pub fn derive_part_seed(seed: u32, clef: Clef, salt: &str) -> u64 {
    let mut input = Vec::with_capacity(4 + 2 + clef.as_str().len() + salt.len());
    input.extend_from_slice(&seed.to_le_bytes());
    input.push(0);
    input.extend_from_slice(clef.as_str().as_bytes());
    input.push(0);
    input.extend_from_slice(salt.as_bytes());

    let hash = blake3::hash(&input);
    let bytes: [u8; 4] = hash.as_bytes()[0..4].try_into().expect("blake3 output is 32 bytes");
    let derived = u32::from_le_bytes(bytes);
    (derived as u64) | ((derived as u64) << 32)
}

/// Canonicalizes a JSON value: object keys sorted lexicographically, no
/// whitespace between tokens.
fn canonicalize_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::String(s) => format_canonical_string(s),
        serde_json::Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(canonicalize_value).collect();
            format!("[{}]", items.join(","))
        }
        serde_json::Value::Object(obj) => {
            let mut sorted_keys: Vec<&String> = obj.keys().collect();
            sorted_keys.sort();

            let pairs: Vec<String> = sorted_keys
                .iter()
                .map(|k| {
                    let v = obj.get(*k).expect("key taken from the same map");
                    format!("{}:{}", format_canonical_string(k), canonicalize_value(v))
                })
                .collect();
            format!("{{{}}}", pairs.join(","))
        }
    }
}

fn format_canonical_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c < '\x20' => {
                result.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => result.push(c),
        }
    }
    result.push('"');
    result
}
