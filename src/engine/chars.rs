//! Character mode — shuffles characters, optionally pinning structure.

use super::rng::RandomSource;
use super::shuffle::shuffle;
use super::types::Intensity;

/// Scramble individual characters.
///
/// With both `preserve_spaces` and `preserve_punctuation` set, only
/// alphanumeric characters enter the shuffle pool; everything else stays at
/// its original index. With either flag off, the whole string shuffles.
///
/// `preserve_case` re-applies the original case pattern position by position
/// after shuffling, across the entire string. Output length always equals
/// input length (in Unicode scalar values).
pub fn scramble_characters(
    text: &str,
    preserve_spaces: bool,
    preserve_punctuation: bool,
    preserve_case: bool,
    intensity: Intensity,
    source: &mut dyn RandomSource,
) -> String {
    let original: Vec<char> = text.chars().collect();

    let mut out: Vec<char> = if preserve_spaces && preserve_punctuation {
        let mut slots = Vec::new();
        let mut pool = Vec::new();
        for (i, &c) in original.iter().enumerate() {
            if c.is_alphanumeric() {
                slots.push(i);
                pool.push(c);
            }
        }
        let shuffled = shuffle(&pool, intensity, source);
        let mut result = original.clone();
        for (slot, c) in slots.into_iter().zip(shuffled) {
            result[slot] = c;
        }
        result
    } else {
        shuffle(&original, intensity, source)
    };

    if preserve_case {
        for (c, &orig) in out.iter_mut().zip(original.iter()) {
            *c = if orig.is_uppercase() {
                force_upper(*c)
            } else {
                force_lower(*c)
            };
        }
    }

    out.into_iter().collect()
}

/// Uppercase `c` only when the mapping is one-to-one; multi-char expansions
/// (e.g. ß) keep the original so character counts never drift.
pub(crate) fn force_upper(c: char) -> char {
    let mut mapped = c.to_uppercase();
    match (mapped.next(), mapped.next()) {
        (Some(upper), None) => upper,
        _ => c,
    }
}

/// Lowercase `c` only when the mapping is one-to-one.
pub(crate) fn force_lower(c: char) -> char {
    let mut mapped = c.to_lowercase();
    match (mapped.next(), mapped.next()) {
        (Some(lower), None) => lower,
        _ => c,
    }
}
